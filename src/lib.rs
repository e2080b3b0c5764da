/*!
 * CPU Scheduling Simulator Library
 * Batch scheduling algorithms, CSV loading, and result reporting
 *
 * Simulates FIFO, SJF, and fixed-quantum Round-Robin over a batch of
 * processes that all arrive at time zero, computing per-process wait,
 * turnaround, and response times plus aggregate averages. Every algorithm
 * works on its own copy of the input, so repeated or concurrent runs over
 * the same batch need no coordination.
 */

pub mod cli;
pub mod core;
pub mod loader;
pub mod process;
pub mod report;
pub mod sched;

// Re-exports
pub use crate::core::errors::{CliError, LoadError, SchedulerError, SimError};
pub use crate::core::types::{Pid, SimResult, Time};
pub use crate::loader::load_csv;
pub use crate::process::ProcessRecord;
pub use crate::report::{render, summarize, Summary};
pub use crate::sched::{
    fifo, fifo_queue, rr, rr_queue, sjf, sjf_queue, Quantum, Variant, MAX_DURATION, MIN_DURATION,
};
