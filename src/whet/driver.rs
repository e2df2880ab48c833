use crate::Fixed;
use super::State;
use super::modules;

/// Default number of benchmark iterations.
pub const DEFAULT_LOOPS: u32 = 100;

/// Run the benchmark: `loops` iterations of the module bank over `state`, in the fixed canonical
/// order, with the mixed-operation tail computation closing each iteration.
///
/// Module 2 runs exactly once, up front: its array's memory is carried across *calls*, not across
/// iterations, so re-running it every iteration is not part of the workload. Within each
/// iteration the order is modules 1, 3 (on a freshly 1.0-filled `e3`), 4, 6, 7, 8, 9, 10, 11,
/// then the tail — ten chained steps of multiply, divide, sine, cosine, guarded square root and
/// `exp(ln(…))` that fold the tuning registers back into [`t`](State::t). The order is part of
/// the observable contract: each iteration's final `t` is an input to the next iteration's
/// modules 1 and 7.
///
/// Returns `loops` as a completion signal; the numeric outcome of the run is the final content of
/// `state`.
pub fn run(state: &mut State, loops: u32) -> u32 {
  modules::module2(state);
  for _ in 0..loops {
    modules::module1(state);

    state.e3 = [Fixed::ONE.to_bits(); 101];
    modules::module3(&mut state.e3);

    modules::module4(state);
    modules::module6(state);
    modules::module7(state);
    modules::module8();
    modules::module9(state);
    modules::module10(state);
    modules::module11();

    tail(state);
  }
  loops
}

/// The per-iteration tail: ten steps chaining every primitive and transcendental operation, with
/// absolute-value and positivity guards keeping the square root and logarithm in their domains.
fn tail(state: &mut State) {
  for _ in 0..10 {
    let a = state.t1 * state.t2;
    let b = a / state.t;
    let c = b.sin();
    let d = c.cos();
    let e = d.abs().sqrt();
    state.t = (if e > Fixed::ZERO {e} else {Fixed::ONE}).ln().exp();
  }
}
