use super::*;

impl Fixed {
  /// Approximate the natural logarithm of `self` for arguments near 1, by a 3-term truncated
  /// Taylor series in `d = (self - 1) >> 1`:
  ///
  ///   ln(1 + d) ≈ d - d²/2 + d³/3
  ///
  /// The halving of `self - 1` is the domain-reduction step here (it keeps `d` and its powers
  /// small enough not to overflow for any input), which means the function computed is really
  /// `ln(1 + (self-1)/2)` = `ln((self+1)/2)`: a coarse logarithm that agrees with the true one
  /// at 1, has the right sign and slope nearby, and degrades as the argument leaves the
  /// neighbourhood of 1. The workload only ever evaluates it there, by construction.
  ///
  /// If `self` is zero or negative, returns [zero](Self::ZERO) (silently, like
  /// [`sqrt`](Self::sqrt)).
  pub fn ln(self) -> Self {
    if self.0 <= 0 {
      return Self::ZERO;
    }
    let d = Self((self - Self::ONE).0 >> 1);
    let d2 = d * d;
    let d3 = d2 * d;
    d - d2 / Self::from_int(2) + d3 / Self::from_int(3)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn non_positive_is_zero() {
    assert_eq!(Fixed::ZERO.ln(), Fixed::ZERO);
    assert_eq!(Fixed::MINUS_ONE.ln(), Fixed::ZERO);
    assert_eq!(Fixed::MIN.ln(), Fixed::ZERO);
  }

  #[test]
  fn one_is_zero() {
    assert_eq!(Fixed::ONE.ln(), Fixed::ZERO);
  }

  #[test]
  fn golden() {
    // ln at 1.5: d = 0.25, series gives 0.22395…; raw 14677
    assert_eq!(Fixed::from_bits(98304).ln(), Fixed::from_bits(14677));
  }

  #[test]
  fn sign() {
    assert!(Fixed::from_bits(98304).ln() > Fixed::ZERO);  // above 1
    assert!(Fixed::HALF.ln() < Fixed::ZERO);  // below 1
  }

  /// exp ∘ ln fixes 1.0 exactly; this is what keeps module 11 of the workload stationary.
  #[test]
  fn exp_ln_one() {
    assert_eq!(Fixed::ONE.ln().exp(), Fixed::ONE);
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    /// Within 1/64 of the f64 logarithm of the *reduced* argument `1 + d`, on [0.5, 2].
    #[test]
    fn oracle(x in 32768..2 * 65536i32) {
      let ln = Fixed::from_bits(x).ln().to_f64();
      let d = Fixed::from_bits((Fixed::from_bits(x) - Fixed::ONE).to_bits() >> 1).to_f64();
      let exact = (1.0 + d).ln();
      prop_assert!((ln - exact).abs() < 1.0 / 64.0, "ln({x}) = {ln} vs {exact}");
    }
  }
}
