use crate::Fixed;

/// The benchmark's global numeric state: scalar registers and arrays, owned by the caller,
/// allocated once, and mutated in place by every module the driver invokes.
///
/// The registers persist across modules *and* across driver iterations; no reset happens between
/// iterations except where a module explicitly reassigns its registers at entry. That carried
/// mutation is load-bearing: each iteration's final [`t`](Self::t) feeds the next iteration's
/// trigonometric module.
///
/// The arrays hold raw `i32` machine words rather than [`Fixed`] values, because the workload
/// deliberately mixes integer and fixed-point views of the same storage (module 1 seeds its array
/// with small integers and then scales them by `t`'s raw bits; module 6 stores integer recurrence
/// results into the same array; modules 3 and 9 fill theirs with fixed-point 1.0). Keeping them
/// as words makes that mixing explicit instead of hiding it behind conversions.
#[derive(Clone)]
#[derive(PartialEq, Eq, Debug)]
pub struct State {
  /// Workload tuning constant, initially 1.0. The only register the driver's tail computation
  /// updates; everything real-valued in the workload is scaled by it.
  pub t: Fixed,
  /// Workload tuning constant, fixed at 0.5.
  pub t1: Fixed,
  /// Workload tuning constant, fixed at 1.5.
  pub t2: Fixed,

  /// Integer register for the branching and integer-recurrence modules.
  pub j: i32,
  /// Integer register for the integer-recurrence modules.
  pub k: i32,
  /// Integer register for the integer-recurrence modules.
  pub l: i32,

  /// Module 1's array: 4 interdependent scalars, reseeded by the module at every call.
  pub e1: [i32; 4],
  /// Module 2's array. Only the first four elements are reset per call; elements beyond index 3
  /// are initialised exactly once (here, at construction) and carry their values across calls.
  pub e2: [i32; 101],
  /// Module 3's array, passed to it by reference; the driver refills it with 1.0 every
  /// iteration, so it has no cross-iteration memory.
  pub e3: [i32; 101],
  /// Module 9's array, fully refilled with 1.0 by the module itself at every call.
  pub e9: [i32; 101],
}

impl State {
  /// Initial state: `t = 1.0`, `t1 = 0.5`, `t2 = t + t1 = 1.5`, everything else zero.
  pub fn new() -> Self {
    let t = Fixed::ONE;
    let t1 = Fixed::HALF;
    let t2 = t + t1;
    Self {
      t, t1, t2,
      j: 0, k: 0, l: 0,
      e1: [0; 4],
      e2: [0; 101],
      e3: [0; 101],
      e9: [0; 101],
    }
  }
}

impl Default for State {
  fn default() -> Self {
    Self::new()
  }
}
