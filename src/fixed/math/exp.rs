use super::*;

impl Fixed {
  /// Approximate the exponential of `self >> 2` by a 5-term truncated Taylor series around zero:
  ///
  ///   exp(x) ≈ 1 + x + x²/2 + x³/6 + x⁴/24
  ///
  /// Same `>> 2` domain reduction as [`sin`](Self::sin)/[`cos`](Self::cos): the series is only
  /// accurate for pre-scaled arguments within a radian or so of zero, which is the range the
  /// workload constructs by composing it with [`ln`](Self::ln).
  pub fn exp(self) -> Self {
    let x = Self(self.0 >> 2);
    let x2 = x * x;
    let x3 = x2 * x;
    let x4 = x3 * x;
    Self::ONE + x
      + x2 / Self::from_int(2)
      + x3 / Self::from_int(6)
      + x4 / Self::from_int(24)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn zero() {
    assert_eq!(Fixed::ZERO.exp(), Fixed::ONE);
  }

  #[test]
  fn golden() {
    // exp(1.0 >> 2) = exp(0.25) = 1.28402…; raw 84148
    assert_eq!(Fixed::ONE.exp(), Fixed::from_bits(84148));
  }

  #[test]
  fn monotone_near_zero() {
    let mut prev = Fixed::from_bits(-65536).exp();
    for bits in (-65536..=65536).step_by(4096) {
      let next = Fixed::from_bits(bits).exp();
      assert!(next >= prev, "exp not monotone at {bits}");
      prev = next;
    }
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    /// Within 1/1024 of the f64 exponential of the pre-scaled argument.
    #[test]
    fn oracle(x in -2 * 65536..2 * 65536i32) {
      let exp = Fixed::from_bits(x).exp().to_f64();
      let exact = Fixed::from_bits(x >> 2).to_f64().exp();
      prop_assert!((exp - exact).abs() < 1.0 / 1024.0, "exp({x}) = {exp} vs {exact}");
    }
  }
}
