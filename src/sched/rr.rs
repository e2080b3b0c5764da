/*!
 * Round-Robin Scheduling
 * Fixed-quantum preemptive scheduling in scan and queue form
 */

use super::Quantum;
use crate::core::errors::SchedulerError;
use crate::core::types::Time;
use crate::process::ProcessRecord;
use log::info;
use std::collections::VecDeque;

/// Run Round-Robin over a copy of the batch by sweeping it in input order
///
/// Each sweep grants every unfinished process at most one quantum of CPU
/// time; sweeps repeat until one completes no work. The quantum is validated
/// here even though the CLI validates first, so direct callers of the engine
/// get the same protection.
pub fn rr(quantum: Time, processes: &[ProcessRecord]) -> Result<Vec<ProcessRecord>, SchedulerError> {
    let quantum = Quantum::new(quantum)?;
    let mut batch = processes.to_vec();
    let mut clock: Time = 0;

    loop {
        let mut all_executed = true;

        for process in batch.iter_mut() {
            if process.is_finalized() {
                continue;
            }
            all_executed = false;
            clock = run_slice(process, quantum, clock);
        }

        if all_executed {
            break;
        }
    }

    info!(
        "rr: scheduled {} processes with quantum {} (scan form)",
        batch.len(),
        quantum.get()
    );
    Ok(batch)
}

/// Run Round-Robin with an explicit ready queue
///
/// The queue holds indices into the single owned vector, seeded in input
/// order. The front process runs one slice; unfinished processes rotate to
/// the tail, finished ones are dropped. Produces metrics identical to the
/// scan form for every quantum and input.
pub fn rr_queue(
    quantum: Time,
    processes: &[ProcessRecord],
) -> Result<Vec<ProcessRecord>, SchedulerError> {
    let quantum = Quantum::new(quantum)?;
    let mut batch = processes.to_vec();
    let mut ready: VecDeque<usize> = (0..batch.len()).collect();
    let mut clock: Time = 0;

    while let Some(index) = ready.pop_front() {
        clock = run_slice(&mut batch[index], quantum, clock);
        if !batch[index].is_complete() {
            ready.push_back(index);
        }
    }

    info!(
        "rr: scheduled {} processes with quantum {} (queue form)",
        batch.len(),
        quantum.get()
    );
    Ok(batch)
}

/// Grant one slice of at most `quantum` and finalize the process if it ends
///
/// Takes the clock before the slice and returns the clock after it. The first
/// ever slice records the response time; a zero-burst process finalizes with
/// a zero-length slice at its first scheduling opportunity.
fn run_slice(process: &mut ProcessRecord, quantum: Quantum, clock: Time) -> Time {
    let slice = quantum.get().min(process.remaining());

    if process.response_time().is_none() {
        process.set_response_time(clock);
    }

    let clock = clock + slice;
    process.add_time_used(slice);

    if process.is_complete() {
        process.set_turnaround_time(clock);
        process.set_wait_time(clock - process.burst_time());
    }

    clock
}
