use super::*;

impl Fixed {
  /// Fixed-point addition is plain integer addition of the raw values: both operands carry the
  /// same 2¹⁶ scale factor, so no rescaling is needed and the result is exact (modulo wrap).
  #[inline]
  pub(crate) const fn add(self, other: Self) -> Self {
    Self(self.0.wrapping_add(other.0))
  }

  #[inline]
  pub(crate) const fn sub(self, other: Self) -> Self {
    Self(self.0.wrapping_sub(other.0))
  }
}

use core::ops::{Add, AddAssign, Sub, SubAssign};
super::mk_ops!{Add, AddAssign, add, add_assign}
super::mk_ops!{Sub, SubAssign, sub, sub_assign}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[allow(dead_code)]
  fn ops() {
    let mut a = Fixed::ONE;
    let b = Fixed::MINUS_ONE;
    let _ = a + b;
    let _ = &a + b;
    let _ = a + &b;
    let _ = &a + &b;
    a += b;
    a -= &b;
  }

  #[test]
  fn exact() {
    assert_eq!(Fixed::ONE + Fixed::HALF, Fixed::from_bits(98304));
    assert_eq!(Fixed::ONE - Fixed::HALF, Fixed::HALF);
    assert_eq!(Fixed::HALF + Fixed::HALF, Fixed::ONE);
    assert_eq!(Fixed::ZERO - Fixed::ONE, Fixed::MINUS_ONE);
  }

  #[test]
  fn wraps() {
    assert_eq!(Fixed::MAX + Fixed::from_bits(1), Fixed::MIN);
    assert_eq!(Fixed::MIN - Fixed::from_bits(1), Fixed::MAX);
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    /// Addition agrees with the wrapping integer addition of the raw values.
    #[test]
    fn raw(a: i32, b: i32) {
      let sum = Fixed::from_bits(a) + Fixed::from_bits(b);
      prop_assert_eq!(sum.to_bits(), a.wrapping_add(b));
      let diff = Fixed::from_bits(a) - Fixed::from_bits(b);
      prop_assert_eq!(diff.to_bits(), a.wrapping_sub(b));
    }
  }
}
