use super::*;

impl Fixed {
  /// The number of fractional bits. The raw `i32` is the real value scaled by 2 to this power.
  pub const FRAC_BITS: u32 = 16;

  /// The scaling factor between raw and real values, i.e. `2 ^ FRAC_BITS`.
  pub const SCALE: i32 = 1 << Self::FRAC_BITS;

  /// Construct a fixed-point number from its raw bit representation (the real value times
  /// [`SCALE`](Self::SCALE)).
  #[inline]
  pub const fn from_bits(bits: i32) -> Self {
    Self(bits)
  }

  /// Return the underlying raw bit representation of `self`.
  #[inline]
  pub const fn to_bits(self) -> i32 {
    self.0
  }

  /// Construct a fixed-point number from an integer. Wraps if the integer does not fit in the
  /// 16 integer bits (i.e. outside `-32768 ..= 32767`).
  #[inline]
  pub const fn from_int(n: i32) -> Self {
    Self(n.wrapping_mul(Self::SCALE))
  }

  /// Return the integer part of `self`, truncated toward zero.
  #[inline]
  pub const fn to_int(self) -> i32 {
    // i32 division truncates toward zero, which is the rounding the reference arithmetic uses
    // everywhere (as opposed to `>> FRAC_BITS`, which would floor)
    self.0 / Self::SCALE
  }

  /// Return the real value of `self` as an `f64`. Exact: every Q16.16 value is representable in
  /// a double. Intended for diagnostics and oracle tests, not for the arithmetic itself.
  #[inline]
  pub fn to_f64(self) -> f64 {
    self.0 as f64 / Self::SCALE as f64
  }
}
