use super::*;

/// Addition and subtraction (plain wrapping integer add/sub: exact in fixed point).
mod add;

/// Multiplication (widen, multiply, rescale).
mod mul;

/// Division (pre-shift, divide; division by zero yields zero).
mod div;

/// Helper macro for implementing an operator for all combinations of value and reference
macro_rules! mk_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident) => {
    impl $trait<Fixed> for Fixed {
      type Output = Fixed;

      #[inline]
      fn $name(self, rhs: Self) -> Self::Output { self.$name(rhs) }
    }

    impl $trait<&Fixed> for Fixed {
      type Output = Fixed;

      #[inline]
      fn $name(self, rhs: &Self) -> Self::Output { self.$name(*rhs) }
    }

    impl $trait<Fixed> for &Fixed {
      type Output = Fixed;

      #[inline]
      fn $name(self, rhs: Fixed) -> Self::Output { (*self).$name(rhs) }
    }

    impl $trait<&Fixed> for &Fixed {
      type Output = Fixed;

      #[inline]
      fn $name(self, rhs: &Fixed) -> Self::Output { (*self).$name(*rhs) }
    }

    impl $trait_assign<Fixed> for Fixed {
      #[inline]
      fn $name_assign(&mut self, rhs: Fixed) { *self = self.$name(rhs) }
    }

    impl $trait_assign<&Fixed> for Fixed {
      #[inline]
      fn $name_assign(&mut self, rhs: &Fixed) { *self = self.$name(*rhs) }
    }
  }
}

pub(crate) use mk_ops;
