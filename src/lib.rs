#![cfg_attr(not(test), no_std)]
//! This crate emulates real-number arithmetic on processors lacking a floating-point unit, using a
//! [Q16.16 fixed-point](Fixed) representation, and drives a Whetstone-style synthetic workload
//! over that arithmetic to produce a reproducible performance/correctness signature for a target
//! CPU.
//!
//! # Introduction
//!
//! The Whetstone benchmark (Curnow & Wichmann, 1976) is a classic synthetic workload: a fixed
//! sequence of numbered modules exercising scalar arithmetic, array traversal, conditional
//! branching, procedure calls, and transcendental functions, repeated for a configured number of
//! iterations. On a core without hardware floating point, the real-valued parts of the workload
//! run on software fixed-point arithmetic instead; this crate provides both that arithmetic
//! ([`Fixed`], a signed Q16.16 type with multiply, divide, square root, sine, cosine, exponential
//! and logarithm) and the benchmark itself ([`whet`]).
//!
//! The whole computation is a single deterministic sequential trace: module order, intra-module
//! loop order, and every truncation and overflow are part of the observable contract. Two runs
//! from the same initial state produce bit-identical final state, which is what makes the final
//! registers and arrays usable as a regression oracle for a CPU implementation.
//!
//! # Usage
//!
//! ```
//! use soft_fixed::{Fixed, whet};
//!
//! // Fixed-point arithmetic with the usual operators.
//! let x = Fixed::from_int(2) * Fixed::from_int(3);
//! assert_eq!(x, Fixed::from_int(6));
//! assert_eq!(Fixed::from_int(4).sqrt(), Fixed::from_int(2));
//!
//! // Run the benchmark and inspect the final state.
//! let mut state = whet::State::new();
//! let done = whet::run(&mut state, whet::DEFAULT_LOOPS);
//! assert_eq!(done, whet::DEFAULT_LOOPS);
//! assert_eq!(state.t.to_bits(), 65531);
//! ```
//!
//! # Accuracy
//!
//! This is *not* a general-purpose math library. Accuracy is intentionally approximate, bounded by
//! the 16-bit fractional precision and by fixed, truncated series expansions; the transcendental
//! functions are only valid in the pre-scaled domains the benchmark constructs (see the
//! documentation on each function). Overflow wraps, uniformly, matching two's-complement
//! behaviour on the bare-metal targets this workload is cross-compiled for.
//!
//! This crate includes benchmarks; run them with `cargo bench`.

mod fixed;
pub mod whet;

pub use fixed::Fixed;

/// Number of proptest cases for the more expensive property tests. Scaled down in debug builds,
/// where the software arithmetic is an order of magnitude slower.
#[cfg(test)]
pub(crate) const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x1000} else {0x10000};
