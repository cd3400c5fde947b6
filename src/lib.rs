//! Leading zero counting for `u32`.
//!
//! `u32_leading_zeros` is backed by one of two implementations chosen at compile time. On most
//! architectures it delegates to `u32::leading_zeros`, which lowers to a single `clz`/`lzcnt`
//! style instruction. When the `no_lz` feature is enabled, or when compiling for RISC-V without
//! the "Zbb" extension, it uses a branch-free software routine built on a de Bruijn sequence
//! multiply and a 32 byte lookup table. Both paths return identical results for every input.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(test)]
extern crate rand;

mod leading_zeros;


pub use leading_zeros::{
    u32_leading_zeros, u32_leading_zeros_intrinsic, u32_leading_zeros_software, u32_log2_debruijn,
    DEBRUIJN_32, LOG2_DEBRUIJN,
};
