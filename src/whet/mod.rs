//! The Whetstone-style benchmark: a bank of numbered workload modules and the driver that
//! sequences them over the shared [`State`].
//!
//! The module numbering follows the classic benchmark (module 5 is absent there too; the gap is
//! inherited structure, not an omission). Each module exercises one code-generation pattern —
//! array recurrences, sliding-window traversals, branch chains, integer recurrences, procedure
//! calls, transcendental compositions — and the [driver](run) invokes them in a fixed order for a
//! configured number of iterations, threading the scalar registers and arrays through every call.
//!
//! Everything here is deterministic and sequential *on purpose*: the point of the run is the
//! instruction trace, and the final state doubles as a regression oracle. Nothing allocates and
//! nothing does I/O; on a physical target it is the host program's business whether and how to
//! render the final registers.

mod state;
mod modules;
mod driver;

pub use state::State;
pub use driver::{run, DEFAULT_LOOPS};
