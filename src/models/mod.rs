//! Simulation domain models.
//!
//! Provides the input and timeline types shared by every scheduling
//! algorithm.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Input specification plus per-run simulation state |
//! | `ExecutionEvent` | One contiguous running or idle interval |

mod event;
mod process;

pub use event::ExecutionEvent;
pub use process::{Process, ProcessId};
