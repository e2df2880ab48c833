use super::*;

/// Square root by Newton iteration.
mod sqrt;

/// Sine and cosine by truncated Taylor series.
mod trig;

/// Exponential by truncated Taylor series.
mod exp;

/// Natural logarithm by truncated Taylor series around 1.
mod log;
