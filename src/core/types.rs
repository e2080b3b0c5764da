/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type
pub type Pid = u32;

/// Simulated CPU time, in the same unit as burst times
pub type Time = u64;

/// Common result type for simulator operations
pub type SimResult<T> = Result<T, super::errors::SimError>;
