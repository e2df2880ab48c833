use super::*;

use core::fmt::{Debug, Display};

impl Debug for Fixed {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let bits = self.0;
    f.debug_tuple("Fixed")
      .field(&format_args!("0x{:04x}_{:04x}", (bits as u32) >> 16, bits as u32 & 0xffff))
      .finish()
  }
}

impl Display for Fixed {
  /// Renders the real value in decimal with 5 fractional digits (enough to distinguish every
  /// Q16.16 value would take 16, but 5 matches the precision that's actually meaningful after
  /// the approximated operations).
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let sign = if self.0 < 0 {"-"} else {""};
    let abs = (self.0 as i64).unsigned_abs();
    let int = abs >> Self::FRAC_BITS;
    let frac = (abs & 0xffff) * 100_000 >> Self::FRAC_BITS;
    write!(f, "{sign}{int}.{frac:05}")
  }
}
