use super::*;

impl core::ops::Neg for Fixed {
  type Output = Fixed;

  #[inline]
  fn neg(self) -> Self::Output {
    Fixed(self.0.wrapping_neg())
  }
}

impl core::ops::Neg for &Fixed {
  type Output = Fixed;

  #[inline]
  fn neg(self) -> Self::Output {
    Fixed(self.0.wrapping_neg())
  }
}

impl Fixed {
  /// Return the absolute value of `self`.
  ///
  /// Note that, like everything else, this wraps: `Fixed::MIN.abs() == Fixed::MIN`, since `-MIN`
  /// is not representable.
  #[inline]
  pub const fn abs(self) -> Self {
    Fixed(self.0.wrapping_abs())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn neg() {
    assert_eq!(-Fixed::ONE, Fixed::MINUS_ONE);
    assert_eq!(-Fixed::ZERO, Fixed::ZERO);
    assert_eq!(-&Fixed::HALF, Fixed::from_bits(-32768));
    assert_eq!(-Fixed::MIN, Fixed::MIN);  // wraps
  }

  #[test]
  fn abs() {
    assert_eq!(Fixed::MINUS_ONE.abs(), Fixed::ONE);
    assert_eq!(Fixed::ONE.abs(), Fixed::ONE);
    assert_eq!(Fixed::ZERO.abs(), Fixed::ZERO);
    assert_eq!(Fixed::MIN.abs(), Fixed::MIN);  // wraps
  }
}
