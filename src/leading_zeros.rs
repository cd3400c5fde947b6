#[cfg(test)]
use rand::random;

/// The de Bruijn sequence B(2, 5) used by `u32_log2_debruijn`, as
/// `0b0000_0111_1100_0100_1010_1100_1101_1101`.
pub const DEBRUIJN_32: u32 = 0x07C4_ACDD;

/// Maps the top 5 bits of `smeared * DEBRUIJN_32` to the index of the most significant set bit.
///
/// This must stay in sync with `DEBRUIJN_32`. Nothing checks it at runtime, a wrong entry silently
/// produces wrong logarithms.
#[rustfmt::skip]
pub const LOG2_DEBRUIJN: [u8; 32] = [
    0, 9, 1, 10, 13, 21, 2, 29,
    11, 14, 16, 18, 22, 25, 3, 30,
    8, 12, 20, 28, 15, 17, 24, 7,
    19, 27, 23, 6, 26, 5, 4, 31,
];

// RISC-V only has `clz` with the "Zbb" extension
#[cfg(any(
    feature = "no_lz",
    all(
        any(target_arch = "riscv32", target_arch = "riscv64"),
        not(target_feature = "zbb")
    )
))]
const USE_LZ: bool = false;

// The rest of the common architectures supply `leading_zeros`
#[cfg(not(any(
    feature = "no_lz",
    all(
        any(target_arch = "riscv32", target_arch = "riscv64"),
        not(target_feature = "zbb")
    )
)))]
const USE_LZ: bool = true;

/// Returns the number of leading binary zeros in `x`, or 32 if `x == 0`.
///
/// This uses `u32::leading_zeros` on architectures that have a leading zeros instruction, and
/// `u32_leading_zeros_software` otherwise (or when the `no_lz` feature is enabled). `USE_LZ` is a
/// constant, so the unused branch is removed at compile time.
#[inline]
pub const fn u32_leading_zeros(x: u32) -> u32 {
    if USE_LZ {
        u32_leading_zeros_intrinsic(x)
    } else {
        u32_leading_zeros_software(x)
    }
}

/// Returns the number of leading binary zeros in `x` with the compiler intrinsic.
#[doc(hidden)]
#[inline]
pub const fn u32_leading_zeros_intrinsic(x: u32) -> u32 {
    x.leading_zeros()
}

/// Returns the number of leading binary zeros in `x` without relying on a leading zeros
/// instruction.
///
/// Unlike the bisection routines used for `__clzsi2`, zero is checked for explicitly because
/// `u32_log2_debruijn` maps both 0 and 1 to 0.
#[doc(hidden)]
#[inline]
pub const fn u32_leading_zeros_software(x: u32) -> u32 {
    if x == 0 {
        32
    } else {
        31 - u32_log2_debruijn(x)
    }
}

/// Returns the index of the most significant set bit of `x`, which is `floor(log2(x))` for
/// `x != 0`.
///
/// `x == 0` returns 0 by convention, even though the logarithm is undefined there.
#[inline]
pub const fn u32_log2_debruijn(x: u32) -> u32 {
    // Smear the most significant set bit into every lower bit, e.x. 0b0001_0010 becomes
    // 0b0001_1111. Afterwards `x` is `2^(k + 1) - 1` where `k` is the index of the original most
    // significant set bit, leaving only 32 possible values.
    let mut x = x;
    x |= x >> 1;
    x |= x >> 2;
    x |= x >> 4;
    x |= x >> 8;
    x |= x >> 16;
    debug_assert!((x & x.wrapping_add(1)) == 0);

    // Multiplying one of those 32 values by the de Bruijn constant places a unique 5 bit pattern
    // in the top bits. The multiplication is supposed to wrap.
    let i = (x.wrapping_mul(DEBRUIJN_32) >> 27) as usize;
    // `i < 32`, so the bounds check is optimized out
    LOG2_DEBRUIJN[i] as u32
}

#[test]
fn log2_debruijn_table_test() {
    // every bit index appears exactly once
    let mut seen = [false; 32];
    for &entry in LOG2_DEBRUIJN.iter() {
        assert!(entry < 32, "entry {} out of range", entry);
        assert!(!seen[entry as usize], "duplicate entry {}", entry);
        seen[entry as usize] = true;
    }

    // every smeared value hashes to its own bit index
    for k in 0..32 {
        let smeared = u32::MAX >> (31 - k);
        let i = (smeared.wrapping_mul(DEBRUIJN_32) >> 27) as usize;
        assert_eq!(LOG2_DEBRUIJN[i] as u32, k, "smeared: {:#034b}", smeared);
    }
}

#[test]
fn u32_log2_debruijn_test() {
    assert_eq!(u32_log2_debruijn(0), 0);
    assert_eq!(u32_log2_debruijn(1), 0);
    assert_eq!(u32_log2_debruijn(2), 1);
    assert_eq!(u32_log2_debruijn(3), 1);
    assert_eq!(u32_log2_debruijn(0b0001_0010), 4);
    assert_eq!(u32_log2_debruijn(u32::MAX), 31);
    for k in 0..32 {
        assert_eq!(u32_log2_debruijn(1 << k), k);
        // all lower bits set
        assert_eq!(u32_log2_debruijn(u32::MAX >> (31 - k)), k);
    }
    for _ in 0..10_000 {
        let x: u32 = random();
        if x != 0 {
            assert_eq!(u32_log2_debruijn(x), 31 - x.leading_zeros());
        }
    }
}

#[test]
fn u32_leading_zeros_edge_test() {
    for lz in [
        u32_leading_zeros,
        u32_leading_zeros_intrinsic,
        u32_leading_zeros_software,
    ]
    .iter()
    {
        assert_eq!(lz(0), 32);
        assert_eq!(lz(1), 31);
        assert_eq!(lz(0x8000_0000), 0);
        assert_eq!(lz(u32::MAX), 0);
        for k in 0..32 {
            assert_eq!(lz(1 << k), 31 - k);
        }
    }
}

#[test]
fn u32_leading_zeros_const_test() {
    const LZ: [u32; 3] = [
        u32_leading_zeros(0),
        u32_leading_zeros_software(0x0000_ffff),
        u32_leading_zeros_intrinsic(0x0100_0000),
    ];
    assert_eq!(LZ, [32, 16, 7]);
}
