use super::*;

impl Fixed {
  /// Approximate the square root of `self` by Newton iteration. If `self` is zero or negative,
  /// returns [zero](Self::ZERO) (silently, like [division by zero](core::ops::Div)).
  ///
  /// The iteration is the classic
  ///
  ///   guess' = (guess + self/guess) / 2
  ///
  /// seeded with `guess = self >> 1` and run a fixed 10 times, enough to converge for the whole
  /// positive range at this precision (Newton converges quadratically once the guess is within a
  /// factor of 2, and the halving seed starts at most 15 doublings away). The iteration count is
  /// a fixed budget, not a tolerance check, so the cost is input-independent.
  ///
  /// If a guess ever reaches zero the loop stops early and returns it; in particular inputs below
  /// 2 ulp seed a zero guess and return 0 outright.
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fixed::Fixed;
  /// assert_eq!(Fixed::from_int(4).sqrt(), Fixed::from_int(2));
  /// assert_eq!(Fixed::from_int(-4).sqrt(), Fixed::ZERO);
  /// ```
  pub fn sqrt(self) -> Self {
    if self.0 <= 0 {
      return Self::ZERO;
    }
    let mut guess = Self(self.0 >> 1);
    for _ in 0..10 {
      if guess.0 == 0 {
        break;
      }
      // self/guess can be enormous when the guess is still tiny; the average wraps like
      // everything else
      guess = Self(guess.0.wrapping_add((self / guess).0) >> 1);
    }
    guess
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn non_positive_is_zero() {
    assert_eq!(Fixed::ZERO.sqrt(), Fixed::ZERO);
    assert_eq!(Fixed::MINUS_ONE.sqrt(), Fixed::ZERO);
    assert_eq!(Fixed::MIN.sqrt(), Fixed::ZERO);
    assert_eq!(Fixed::from_int(-4).sqrt(), Fixed::ZERO);
  }

  #[test]
  fn tiny_is_zero() {
    // The seed `x >> 1` is already zero, so the loop never runs
    assert_eq!(Fixed::from_bits(1).sqrt(), Fixed::ZERO);
  }

  #[test]
  fn perfect_squares() {
    assert_eq!(Fixed::from_int(4).sqrt(), Fixed::from_int(2));
    assert_eq!(Fixed::from_int(100).sqrt(), Fixed::from_int(10));
    assert_eq!(Fixed::from_bits(16384).sqrt(), Fixed::HALF);  // √0.25 = 0.5
  }

  #[test]
  fn sqrt_2() {
    // √2 = 1.41421…; raw 92681 is 1.41420…, within 1 ulp of the correctly-rounded 92682
    assert_eq!(Fixed::from_int(2).sqrt(), Fixed::from_bits(92681));
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    /// Within 1/128 of the f64 reference across three orders of magnitude.
    #[test]
    fn oracle(x in 16..1000 * 65536i32) {
      let sqrt = Fixed::from_bits(x).sqrt().to_f64();
      let exact = Fixed::from_bits(x).to_f64().sqrt();
      prop_assert!((sqrt - exact).abs() < 1.0 / 128.0, "sqrt({x}) = {sqrt} vs {exact}");
    }

    /// The approximation squared never overshoots far: `sqrt(x)² ≤ x + 1/64`.
    #[test]
    fn square_bound(x in 16..1000 * 65536i32) {
      let sqrt = Fixed::from_bits(x).sqrt();
      prop_assert!((sqrt * sqrt).to_f64() <= Fixed::from_bits(x).to_f64() + 1.0 / 64.0);
    }
  }
}
