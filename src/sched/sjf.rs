/*!
 * SJF Scheduling
 * Non-preemptive shortest-job-first: a burst-sorted batch handed to FIFO
 */

use crate::process::ProcessRecord;
use log::info;

/// Run SJF over a copy of the batch, scan form
///
/// Sorts by ascending burst time and defers to FIFO for the metrics.
pub fn sjf(processes: &[ProcessRecord]) -> Vec<ProcessRecord> {
    info!("sjf: sorting {} processes by burst time", processes.len());
    super::fifo(&sorted_by_burst(processes))
}

/// Run SJF over a copy of the batch, queue form
pub fn sjf_queue(processes: &[ProcessRecord]) -> Vec<ProcessRecord> {
    info!("sjf: sorting {} processes by burst time", processes.len());
    super::fifo_queue(&sorted_by_burst(processes))
}

/// Stable sort, so equal bursts keep their input order (the SJF tie-break)
fn sorted_by_burst(processes: &[ProcessRecord]) -> Vec<ProcessRecord> {
    let mut batch = processes.to_vec();
    batch.sort_by_key(ProcessRecord::burst_time);
    batch
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch() -> Vec<ProcessRecord> {
        vec![
            ProcessRecord::new(1, 24),
            ProcessRecord::new(2, 3),
            ProcessRecord::new(3, 3),
        ]
    }

    #[test]
    fn test_sjf_reorders_by_burst() {
        let scheduled = sjf(&batch());
        let ids: Vec<_> = scheduled.iter().map(|p| p.id()).collect();
        assert_eq!(ids, [2, 3, 1]);

        let waits: Vec<_> = scheduled.iter().map(|p| p.wait_time().unwrap()).collect();
        let turnarounds: Vec<_> = scheduled
            .iter()
            .map(|p| p.turnaround_time().unwrap())
            .collect();
        assert_eq!(waits, [0, 3, 6]);
        assert_eq!(turnarounds, [3, 6, 30]);
    }

    #[test]
    fn test_sjf_tie_break_is_stable() {
        let input = vec![
            ProcessRecord::new(5, 8),
            ProcessRecord::new(9, 8),
            ProcessRecord::new(2, 8),
            ProcessRecord::new(7, 1),
        ];
        let scheduled = sjf(&input);
        let ids: Vec<_> = scheduled.iter().map(|p| p.id()).collect();
        // Equal bursts retain input order behind the shorter job
        assert_eq!(ids, [7, 5, 9, 2]);
    }

    #[test]
    fn test_sjf_forms_are_equivalent() {
        assert_eq!(sjf(&batch()), sjf_queue(&batch()));
    }

    #[test]
    fn test_sjf_does_not_mutate_input() {
        let input = batch();
        let _ = sjf(&input);
        assert_eq!(input, batch());
    }

    #[test]
    fn test_sjf_empty_batch() {
        assert!(sjf(&[]).is_empty());
        assert!(sjf_queue(&[]).is_empty());
    }
}
