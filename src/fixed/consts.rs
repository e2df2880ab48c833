use super::*;

impl Fixed {
  /// Zero (`0`), the additive identity element.
  pub const ZERO: Self = Self(0);

  /// One (`1`), the multiplicative identity element.
  //
  // Raw value 65536.
  pub const ONE: Self = Self(Self::SCALE);

  /// One half (`0.5`).
  //
  // Raw value 32768.
  pub const HALF: Self = Self(Self::SCALE / 2);

  /// Negative one (`-1`).
  pub const MINUS_ONE: Self = Self(-Self::SCALE);

  /// Largest representable value, `32767 + 65535/65536`.
  pub const MAX: Self = Self(i32::MAX);

  /// Smallest representable value, `-32768`.
  pub const MIN: Self = Self(i32::MIN);
}
