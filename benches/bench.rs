#![feature(test)]
extern crate test;
use rand::prelude::*;
use test::{black_box, Bencher};

use leading_zero_count::*;

/// Branch-free bisection in the style of LLVM's `compiler-rt/lib/builtins/clzsi2.c`, for
/// comparison against the de Bruijn routine.
pub fn u32_leading_zeros_bisect(x: u32) -> u32 {
    let mut x = x;
    // The number of potential leading zeros
    let mut z = 32;
    // a temporary
    let mut t: u32;

    t = ((x >= (1 << 16)) as u32) << 4;
    x >>= t;
    z -= t;

    t = ((x >= (1 << 8)) as u32) << 3;
    x >>= t;
    z -= t;

    t = ((x >= (1 << 4)) as u32) << 2;
    x >>= t;
    z -= t;

    t = ((x >= (1 << 2)) as u32) << 1;
    x >>= t;
    z -= t;

    t = (x >= (1 << 1)) as u32;
    x >>= t;
    z -= t;

    z - x
}

/// This macro can create multiple benchmarking functions that run 32 random integers through a
/// leading zeros function. The random integers are shifted right by a random amount up to
/// `$max_shift` so that the leading zeros counts are spread out.
macro_rules! bencher {
    (
        $max_shift:expr, // the largest right shift applied to the random inputs
        // name of leading zeros function and corresponding bench
        $($fn_lz:ident, $bench_name:ident);+;
    ) => {
        $(
            #[bench]
            fn $bench_name(bencher: &mut Bencher) {
                let a = black_box({
                    let mut a: Vec<u32> = Vec::new();
                    for _ in 0..32 {
                        let shift: u32 = random::<u32>() % ($max_shift + 1);
                        a.push(random::<u32>() >> shift);
                    }
                    a
                });
                bencher.iter(|| {
                    let mut s = 0;
                    for x in a.iter() {
                        s += $fn_lz(*x);
                    }
                    s
                })
            }
        )+
    };
}

// full width inputs, almost always 0 or 1 leading zeros
bencher!(
    0,
    u32_leading_zeros_intrinsic,
    lz_full_intrinsic;
    u32_leading_zeros_software,
    lz_full_software;
    u32_leading_zeros_bisect,
    lz_full_bisect;
);
// every count from 0 to 31 is likely
bencher!(
    31,
    u32_leading_zeros_intrinsic,
    lz_spread_intrinsic;
    u32_leading_zeros_software,
    lz_spread_software;
    u32_leading_zeros_bisect,
    lz_spread_bisect;
    u32_leading_zeros,
    lz_spread_selected;
);
