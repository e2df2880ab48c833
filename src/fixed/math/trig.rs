use super::*;

impl Fixed {
  /// Approximate the sine of `self >> 2` by a 3-term truncated Taylor series:
  ///
  ///   sin(x) ≈ x - x³/6 + x⁵/120
  ///
  /// The `>> 2` pre-scale is a domain-reduction step: it maps the workload's operands (which are
  /// of order 1 in fixed-point units) down to a quarter radian or so, where three terms keep the
  /// truncation error below a few ulp and the odd powers cannot overflow. There is **no** range
  /// reduction modulo 2π — this is not a general-purpose sine, and outside the reduced domain the
  /// series simply diverges from the true function.
  ///
  /// The shift amount and term count are load-bearing constants tied to this accuracy/overflow
  /// tradeoff; callers get the scaled-argument behaviour whether they want it or not.
  pub fn sin(self) -> Self {
    let x = Self(self.0 >> 2);
    let x2 = x * x;
    let x3 = x2 * x;
    let x5 = x3 * x2;
    x - x3 / Self::from_int(6) + x5 / Self::from_int(120)
  }

  /// Approximate the cosine of `self >> 2` by a 4-term truncated Taylor series:
  ///
  ///   cos(x) ≈ 1 - x²/2 + x⁴/24 - x⁶/720
  ///
  /// Same domain reduction and caveats as [`sin`](Self::sin).
  pub fn cos(self) -> Self {
    let x = Self(self.0 >> 2);
    let x2 = x * x;
    let x4 = x2 * x2;
    let x6 = x4 * x2;
    Self::ONE - x2 / Self::from_int(2) + x4 / Self::from_int(24) - x6 / Self::from_int(720)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn zero() {
    assert_eq!(Fixed::ZERO.sin(), Fixed::ZERO);
    assert_eq!(Fixed::ZERO.cos(), Fixed::ONE);
  }

  #[test]
  fn golden() {
    // sin(1.0 >> 2) = sin(0.25) = 0.24740…; raw 16214
    assert_eq!(Fixed::ONE.sin(), Fixed::from_bits(16214));
    // cos(0.25) = 0.96891…; raw 63498
    assert_eq!(Fixed::ONE.cos(), Fixed::from_bits(63498));
  }

  #[test]
  fn odd_even() {
    for bits in [4, 65536, 98304, 262144] {
      // The pre-scale shift floors, so exact symmetry only holds for multiples of 4
      assert_eq!(Fixed::from_bits(-bits).sin(), -Fixed::from_bits(bits).sin());
      assert_eq!(Fixed::from_bits(-bits).cos(), Fixed::from_bits(bits).cos());
    }
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    /// Within 1/1024 of the f64 sine of the *pre-scaled* argument, on the workload's domain.
    #[test]
    fn sin_oracle(x in -4 * 65536..4 * 65536i32) {
      let sin = Fixed::from_bits(x).sin().to_f64();
      let exact = Fixed::from_bits(x >> 2).to_f64().sin();
      prop_assert!((sin - exact).abs() < 1.0 / 1024.0, "sin({x}) = {sin} vs {exact}");
    }

    /// Within 1/1024 of the f64 cosine of the pre-scaled argument.
    #[test]
    fn cos_oracle(x in -4 * 65536..4 * 65536i32) {
      let cos = Fixed::from_bits(x).cos().to_f64();
      let exact = Fixed::from_bits(x >> 2).to_f64().cos();
      prop_assert!((cos - exact).abs() < 1.0 / 1024.0, "cos({x}) = {cos} vs {exact}");
    }
  }
}
