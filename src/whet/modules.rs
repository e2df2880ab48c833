use crate::Fixed;
use super::State;

/// Module 1: simple identifiers. Four interdependent cross-updates of the 4-word array, each sum
/// scaled by `t`, repeated 100 times.
///
/// The scale is a *raw* wrapping multiply by `t`'s bit pattern (the array holds plain integers at
/// entry), so the values blow through the integer range within a few steps; the wrapped garbage
/// is deterministic and part of the trace.
pub(crate) fn module1(state: &mut State) {
  let t = state.t.to_bits();
  state.e1 = [1, -1, -1, -1];
  for _ in 0..100 {
    let e = &mut state.e1;
    e[0] = e[0].wrapping_add(e[1]).wrapping_add(e[2]).wrapping_sub(e[3]).wrapping_mul(t);
    e[1] = e[0].wrapping_add(e[1]).wrapping_sub(e[2]).wrapping_add(e[3]).wrapping_mul(t);
    e[2] = e[0].wrapping_sub(e[1]).wrapping_add(e[2]).wrapping_add(e[3]).wrapping_mul(t);
    e[3] = e[1].wrapping_sub(e[0]).wrapping_add(e[2]).wrapping_add(e[3]).wrapping_mul(t);
  }
}

/// Module 2: array elements. Resets only `e2[0..4]` to `{1, -1, -1, -1}`, then runs a 50×25
/// sliding-window summation that reads up to `e2[27]`.
///
/// Elements beyond index 3 are *not* reset: whatever they held from before is folded into the
/// sums. (From an all-zero start they stay zero — a window of zeros sums to zero — so the carried
/// state only becomes visible if something beyond index 3 was ever nonzero.)
pub(crate) fn module2(state: &mut State) {
  state.e2[..4].copy_from_slice(&[1, -1, -1, -1]);
  let e = &mut state.e2;
  for _ in 0..50 {
    for j in 0..25 {
      e[j] = e[j].wrapping_add(e[j + 1]).wrapping_add(e[j + 2]).wrapping_add(e[j + 3]);
    }
  }
}

/// Module 3: array as parameter. A 50×25 sliding-window average (truncating division by 4) over a
/// caller-supplied array. The only module that does not touch the shared state.
pub(crate) fn module3(e: &mut [i32; 101]) {
  for _ in 0..50 {
    for j in 0..25 {
      e[j] = e[j].wrapping_add(e[j + 1]).wrapping_add(e[j + 2]).wrapping_add(e[j + 3]) / 4;
    }
  }
}

/// Module 4: conditional jumps. 50 passes through a chain of three if/else decisions on `j`,
/// starting from `j = 1` at entry.
pub(crate) fn module4(state: &mut State) {
  state.j = 1;
  for _ in 0..50 {
    state.j = if state.j == 1 {2} else {3};
    state.j = if state.j > 2 {0} else {1};
    state.j = if state.j < 1 {1} else {0};
  }
}

// Module 5 does not exist; the gap in the numbering is inherited from the classic benchmark.

/// Module 6: integer arithmetic. A 100-step interdependent recurrence on `j, k, l` from
/// `(1, 2, 3)` at entry, storing two combined results into module 1's array at the computed
/// offsets `l - 2` and `k - 2`.
///
/// The offsets are bounds-checked and out-of-range stores are skipped. For this recurrence
/// `(j, k, l)` is in fact stationary at `(1, 2, 3)`, so the offsets are always 1 and 0 and the
/// guard never fires — the classic C formulation indexes blindly and merely happens to stay in
/// range.
pub(crate) fn module6(state: &mut State) {
  state.j = 1;
  state.k = 2;
  state.l = 3;
  for _ in 0..100 {
    state.j = state.j
      .wrapping_mul(state.k.wrapping_sub(state.j))
      .wrapping_mul(state.l.wrapping_sub(state.k));
    state.k = state.l.wrapping_mul(state.k)
      .wrapping_sub(state.l.wrapping_sub(state.j).wrapping_mul(state.k));
    state.l = state.l.wrapping_sub(state.k).wrapping_mul(state.k.wrapping_add(state.j));

    let sum = state.j.wrapping_add(state.k).wrapping_add(state.l);
    let product = state.j.wrapping_mul(state.k).wrapping_mul(state.l);
    store_bounded(&mut state.e1, state.l.wrapping_sub(2), sum);
    store_bounded(&mut state.e1, state.k.wrapping_sub(2), product);
  }
}

/// Store `value` at `e1[index]` if the index lands inside the array, else do nothing.
fn store_bounded(e1: &mut [i32; 4], index: i32, value: i32) {
  if let Ok(index) = usize::try_from(index)
  && let Some(slot) = e1.get_mut(index) {
    *slot = value;
  }
}

/// Module 7: trigonometric functions. A 25-step mutual recurrence of two locals seeded at 1.0,
/// through [`sin`](Fixed::sin)/[`cos`](Fixed::cos) raw-scaled by `t` (the same raw wrapping
/// multiply as module 1). The locals are returned for inspection; the driver discards them.
pub(crate) fn module7(state: &State) -> (i32, i32) {
  let t = state.t.to_bits();
  let mut x = Fixed::ONE.to_bits();
  let mut y = Fixed::ONE.to_bits();
  for _ in 0..25 {
    x = t.wrapping_mul(Fixed::from_bits(y).sin().to_bits())
      .wrapping_add(t.wrapping_mul(Fixed::from_bits(x).cos().to_bits()));
    y = t.wrapping_mul(Fixed::from_bits(x).cos().to_bits())
      .wrapping_add(t.wrapping_mul(Fixed::from_bits(y).sin().to_bits()));
  }
  (x, y)
}

/// Module 8's callee: one line, deliberately trivial — the module measures call/return cost, not
/// arithmetic.
#[inline(never)]
fn p8(x: Fixed) -> Fixed {
  Fixed::ONE + x
}

/// Module 8: procedure calls. 100 calls to [`p8`], accumulating into a local.
pub(crate) fn module8() -> Fixed {
  let mut x = Fixed::ONE;
  for _ in 0..100 {
    x = p8(x);
  }
  x
}

/// Module 9: array references. Fills its array with 1.0 at entry (full 101-element
/// initialisation, every call), then runs a 25×25 sliding-window summation.
pub(crate) fn module9(state: &mut State) {
  state.e9 = [Fixed::ONE.to_bits(); 101];
  let e = &mut state.e9;
  for _ in 0..25 {
    for j in 0..25 {
      e[j] = e[j + 1].wrapping_add(e[j + 2]).wrapping_add(e[j + 3]);
    }
  }
}

/// Module 10: integer arithmetic. A 100-step add/subtract recurrence on `j, k` from `(2, 3)` at
/// entry. (The recurrence has period 2; after the even iteration count it lands back on `(2, 3)`.)
pub(crate) fn module10(state: &mut State) {
  state.j = 2;
  state.k = 3;
  for _ in 0..100 {
    state.j = state.j.wrapping_add(state.k);
    state.k = state.j.wrapping_add(state.k);
    state.j = state.k.wrapping_sub(state.j);
    state.k = state.k.wrapping_sub(state.j).wrapping_sub(state.j);
  }
}

/// Module 11: standard functions. 25 steps of the composition `sqrt(exp(ln(x)))` from `x = 1.0`.
/// Since all three functions fix 1.0 exactly, the local is stationary; returned for inspection.
pub(crate) fn module11() -> Fixed {
  let mut x = Fixed::ONE;
  for _ in 0..25 {
    x = x.ln().exp().sqrt();
  }
  x
}
