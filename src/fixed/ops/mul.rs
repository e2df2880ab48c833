use super::*;

impl Fixed {
  /// Multiply two Q16.16 values.
  ///
  /// Both operands carry a 2¹⁶ scale factor, so the raw product carries 2³², one factor too many:
  ///
  ///   (a / 2¹⁶) × (b / 2¹⁶) = (a × b) / 2³² = ((a × b) >> 16) / 2¹⁶
  ///
  /// Two points to keep in mind:
  ///
  ///   - The product must be computed in `i64`: `a × b` needs up to 64 bits, and truncating it
  ///     *before* the rescale would destroy the result, not just wrap it.
  ///   - The `>> 16` is an arithmetic shift on the widened product, i.e. the rescale rounds
  ///     toward negative infinity. Only after the rescale is the result narrowed back to `i32`,
  ///     wrapping if the real product exceeds the 16 integer bits.
  #[inline]
  pub(crate) const fn mul(self, other: Self) -> Self {
    Self(((self.0 as i64 * other.0 as i64) >> Self::FRAC_BITS) as i32)
  }
}

use core::ops::{Mul, MulAssign};
super::mk_ops!{Mul, MulAssign, mul, mul_assign}
