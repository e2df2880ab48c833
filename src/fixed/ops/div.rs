use super::*;

impl Fixed {
  /// Divide two Q16.16 values.
  ///
  /// The scale factors of the operands cancel, so the raw quotient must be rescaled back *up*:
  ///
  ///   (a / 2¹⁶) ÷ (b / 2¹⁶) = a ÷ b = ((a << 16) / b) / 2¹⁶
  ///
  /// The numerator is widened to `i64` before the shift, so no precision is lost on the way in;
  /// the `i64` division truncates toward zero, and the quotient is narrowed back to `i32`,
  /// wrapping if the real quotient exceeds the 16 integer bits.
  ///
  /// Division by zero returns [zero](Self::ZERO). This is a deliberate silent fallback, not an
  /// error: the workload is a closed fault-free computation, and the hardware targets it probes
  /// have no trap to raise.
  #[inline]
  pub(crate) const fn div(self, other: Self) -> Self {
    if other.0 == 0 {
      return Self::ZERO;
    }
    Self((((self.0 as i64) << Self::FRAC_BITS) / other.0 as i64) as i32)
  }
}

use core::ops::{Div, DivAssign};
super::mk_ops!{Div, DivAssign, div, div_assign}
