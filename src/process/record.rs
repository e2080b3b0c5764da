/*!
 * Process Record
 * A process to be executed by the simulator, with its accumulated metrics
 */

use crate::core::types::{Pid, Time};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Process control block
///
/// Every process arrives at time zero and never blocks on I/O. `time_used`
/// accumulates CPU time until it reaches `burst_time`, at which point the
/// process is complete. The three metric fields start unset and are filled
/// in exactly once by a scheduling run; no `-1` sentinels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    id: Pid,
    burst_time: Time,
    #[serde(default)]
    time_used: Time,
    #[serde(default)]
    wait_time: Option<Time>,
    #[serde(default)]
    turnaround_time: Option<Time>,
    #[serde(default)]
    response_time: Option<Time>,
}

impl ProcessRecord {
    pub fn new(id: Pid, burst_time: Time) -> Self {
        Self {
            id,
            burst_time,
            time_used: 0,
            wait_time: None,
            turnaround_time: None,
            response_time: None,
        }
    }

    #[inline(always)]
    pub const fn id(&self) -> Pid {
        self.id
    }

    #[inline(always)]
    pub const fn burst_time(&self) -> Time {
        self.burst_time
    }

    #[inline(always)]
    pub const fn time_used(&self) -> Time {
        self.time_used
    }

    pub const fn wait_time(&self) -> Option<Time> {
        self.wait_time
    }

    pub const fn turnaround_time(&self) -> Option<Time> {
        self.turnaround_time
    }

    pub const fn response_time(&self) -> Option<Time> {
        self.response_time
    }

    /// CPU time still required before completion
    #[inline(always)]
    pub const fn remaining(&self) -> Time {
        self.burst_time - self.time_used
    }

    /// A process is complete exactly when all of its burst has been used
    #[inline(always)]
    pub const fn is_complete(&self) -> bool {
        self.time_used == self.burst_time
    }

    /// Whether a scheduling run has recorded this process's final metrics
    pub const fn is_finalized(&self) -> bool {
        self.turnaround_time.is_some()
    }

    /// Completion time from simulation start; with zero arrival times this
    /// equals the turnaround time
    pub fn completion_time(&self) -> Option<Time> {
        self.wait_time.map(|wait| wait + self.burst_time)
    }

    /// Consume `slice` units of CPU time
    pub fn add_time_used(&mut self, slice: Time) {
        debug_assert!(self.time_used + slice <= self.burst_time);
        self.time_used += slice;
    }

    pub fn set_wait_time(&mut self, wait_time: Time) {
        debug_assert!(self.wait_time.is_none());
        self.wait_time = Some(wait_time);
    }

    pub fn set_turnaround_time(&mut self, turnaround_time: Time) {
        debug_assert!(self.turnaround_time.is_none());
        self.turnaround_time = Some(turnaround_time);
    }

    pub fn set_response_time(&mut self, response_time: Time) {
        debug_assert!(self.response_time.is_none());
        self.response_time = Some(response_time);
    }
}

impl fmt::Display for ProcessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(id: {}, burst_time: {})", self.id, self.burst_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_record_has_no_metrics() {
        let process = ProcessRecord::new(1, 24);
        assert_eq!(process.time_used(), 0);
        assert_eq!(process.wait_time(), None);
        assert_eq!(process.turnaround_time(), None);
        assert_eq!(process.response_time(), None);
        assert!(!process.is_finalized());
    }

    #[test]
    fn test_completion_tracking() {
        let mut process = ProcessRecord::new(1, 10);
        assert!(!process.is_complete());
        assert_eq!(process.remaining(), 10);

        process.add_time_used(4);
        assert_eq!(process.remaining(), 6);
        assert!(!process.is_complete());

        process.add_time_used(6);
        assert!(process.is_complete());
        assert_eq!(process.remaining(), 0);
    }

    #[test]
    fn test_zero_burst_is_complete_from_start() {
        let process = ProcessRecord::new(1, 0);
        assert!(process.is_complete());
        assert!(!process.is_finalized());
    }

    #[test]
    fn test_completion_time_matches_turnaround_relation() {
        let mut process = ProcessRecord::new(1, 24);
        assert_eq!(process.completion_time(), None);

        process.set_wait_time(6);
        process.set_turnaround_time(30);
        assert_eq!(process.completion_time(), process.turnaround_time());
    }

    #[test]
    fn test_display() {
        let process = ProcessRecord::new(3, 7);
        assert_eq!(process.to_string(), "(id: 3, burst_time: 7)");
    }
}
