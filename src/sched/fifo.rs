/*!
 * FIFO Scheduling
 * Non-preemptive first-in-first-out in scan and queue form
 */

use crate::core::types::Time;
use crate::process::ProcessRecord;
use log::info;
use std::collections::VecDeque;

/// Run FIFO over a copy of the batch using the indexed recurrence
///
/// The first process starts immediately, so its wait and response are zero
/// and its turnaround is its burst. Because the CPU never idles, every later
/// process waits for the full completion of its predecessor:
/// `wait[i] = wait[i-1] + burst[i-1]`. With zero arrival times turnaround
/// equals completion, and without preemption response equals wait.
pub fn fifo(processes: &[ProcessRecord]) -> Vec<ProcessRecord> {
    let mut batch = processes.to_vec();

    if let Some(first) = batch.first_mut() {
        first.set_wait_time(0);
        first.set_response_time(0);
        first.set_turnaround_time(first.burst_time());
        first.add_time_used(first.burst_time());
    }

    for i in 1..batch.len() {
        let prev = &batch[i - 1];
        let wait = prev.wait_time().unwrap_or(0) + prev.burst_time();

        let process = &mut batch[i];
        process.set_wait_time(wait);
        process.set_turnaround_time(wait + process.burst_time());
        process.set_response_time(wait);
        process.add_time_used(process.burst_time());
    }

    info!("fifo: scheduled {} processes (scan form)", batch.len());
    batch
}

/// Run FIFO over a copy of the batch by draining an index-based ready queue
///
/// The queue holds indices into the single owned vector; a running completion
/// clock marks each front process's grant time and completion.
pub fn fifo_queue(processes: &[ProcessRecord]) -> Vec<ProcessRecord> {
    let mut batch = processes.to_vec();
    let mut ready: VecDeque<usize> = (0..batch.len()).collect();

    let mut clock: Time = 0;
    while let Some(index) = ready.pop_front() {
        let process = &mut batch[index];
        process.set_wait_time(clock);
        process.set_response_time(clock);
        clock += process.burst_time();
        process.set_turnaround_time(clock);
        process.add_time_used(process.burst_time());
    }

    info!("fifo: scheduled {} processes (queue form)", batch.len());
    batch
}
