//! Timer scheduling and fallback resolution.
//!
//! This crate provides the two pieces of asynchronous plumbing the ordering
//! core needs:
//! - `Scheduler` - delayed one-shot tasks with cancel handles
//!   (`TokioScheduler` for real time, `ManualScheduler` for simulated time)
//! - `Fallback` - a value that always has a default and may be overlaid by a
//!   fresher fetched value

mod fallback;
mod scheduler;

pub use fallback::*;
pub use scheduler::*;
