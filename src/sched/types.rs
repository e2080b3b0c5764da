/*!
 * Scheduling Types
 * Validated time quantum and the algorithm variant enumeration
 */

use crate::core::errors::SchedulerError;
use crate::core::types::Time;
use crate::process::ProcessRecord;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Shortest time slice a Round-Robin run will accept
pub const MIN_DURATION: Time = 10;
/// Longest time slice a Round-Robin run will accept
pub const MAX_DURATION: Time = 1000;

/// Validated Round-Robin time slice
///
/// Construction is the only way to obtain one, so a `Quantum` is always
/// within `[MIN_DURATION, MAX_DURATION]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quantum(Time);

impl Quantum {
    pub fn new(quantum: Time) -> Result<Self, SchedulerError> {
        if !(MIN_DURATION..=MAX_DURATION).contains(&quantum) {
            return Err(SchedulerError::InvalidQuantum(quantum));
        }
        Ok(Self(quantum))
    }

    #[inline(always)]
    pub const fn get(&self) -> Time {
        self.0
    }
}

impl<'de> Deserialize<'de> for Quantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let quantum = Time::deserialize(deserializer)?;
        Self::new(quantum).map_err(serde::de::Error::custom)
    }
}

/// Algorithm/realization pairs, in the order the run-all command executes them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Fifo,
    FifoQueue,
    Sjf,
    SjfQueue,
    RoundRobin,
    RoundRobinQueue,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::Fifo,
        Variant::FifoQueue,
        Variant::Sjf,
        Variant::SjfQueue,
        Variant::RoundRobin,
        Variant::RoundRobinQueue,
    ];

    /// Section label used by the run-all command
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Fifo => "FIFO",
            Self::FifoQueue => "FIFO QUEUE",
            Self::Sjf => "SJF",
            Self::SjfQueue => "SJF QUEUE",
            Self::RoundRobin => "RR",
            Self::RoundRobinQueue => "RR QUEUE",
        }
    }

    /// Run this variant over a copy of `processes`
    ///
    /// The quantum only affects the Round-Robin variants but is taken
    /// uniformly so callers can iterate `Variant::ALL`.
    pub fn run(
        &self,
        quantum: Quantum,
        processes: &[ProcessRecord],
    ) -> Result<Vec<ProcessRecord>, SchedulerError> {
        match self {
            Self::Fifo => Ok(super::fifo(processes)),
            Self::FifoQueue => Ok(super::fifo_queue(processes)),
            Self::Sjf => Ok(super::sjf(processes)),
            Self::SjfQueue => Ok(super::sjf_queue(processes)),
            Self::RoundRobin => super::rr(quantum.get(), processes),
            Self::RoundRobinQueue => super::rr_queue(quantum.get(), processes),
        }
    }
}

impl Serialize for Variant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}
