//! This module and its submodules contain a software implementation of signed Q16.16 fixed-point
//! arithmetic: the primitive operations (add, subtract, multiply, divide) plus the approximated
//! transcendental functions (square root, sine, cosine, exponential, logarithm) the benchmark
//! workload needs.
//!
//! Some conventions used in the comments:
//!
//!   - **Raw value / bits**: the underlying `i32`, i.e. the real value times 2¹⁶.
//!   - **Real value**: the number the bits represent, i.e. `bits / 65536`.
//!   - **ulp**: one unit in the last place, i.e. a raw value of 1 (a real value of 2⁻¹⁶).
//!
//! Overflow policy: every operation **wraps**. The reference workload this arithmetic was built
//! for runs on bare-metal two's complement hardware where signed overflow simply wraps, and the
//! benchmark's golden trace depends on that; saturating here would change the observable results.

/// A signed fixed-point number in Q16.16 format: 16 integer bits, 16 fractional bits, represented
/// in an `i32` whose real value is `bits / 65536`.
///
/// There is no normalisation step and no reserved bit patterns: every `i32` is a valid `Fixed`,
/// and ordering/equality on the raw bits coincide with ordering/equality on the real values.
///
/// Examples:
///
/// ```
/// # use soft_fixed::Fixed;
/// assert_eq!(Fixed::from_int(1), Fixed::ONE);
/// assert_eq!(Fixed::ONE.to_bits(), 65536);
/// assert_eq!(Fixed::from_bits(32768), Fixed::HALF);  // 0.5 = 32768 / 65536
/// ```
#[derive(Clone, Copy)]
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash)]  // Eq and Ord are the same as for the raw i32
pub struct Fixed(i32);

/// Basics (bit-level and integer conversions)
mod basics;

/// Constants (zero, one, half, etc)
mod consts;

/// Negation and absolute value
mod unary;

/// The four primitive arithmetic operations
mod ops;

/// Approximated transcendental functions (sqrt, sin, cos, exp, ln)
mod math;

/// Debug and Display impls
mod fmt;
