/*!
 * Scheduling Engine
 * FIFO, SJF, and Round-Robin over a zero-arrival batch
 *
 * Each algorithm exists in two behaviorally equivalent realizations: a direct
 * scan over the batch in input order, and an explicit ready queue of indices
 * into a single owned vector. Every entry point takes a borrowed slice and
 * returns a freshly computed batch; the caller's records are never mutated.
 */

mod fifo;
mod rr;
mod sjf;
mod types;

// Re-export public API
pub use fifo::{fifo, fifo_queue};
pub use rr::{rr, rr_queue};
pub use sjf::{sjf, sjf_queue};
pub use types::{Quantum, Variant, MAX_DURATION, MIN_DURATION};
