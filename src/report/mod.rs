/*!
 * Results Reporter
 * Aggregates computed metrics and renders the results table
 */

use crate::core::types::Time;
use crate::process::ProcessRecord;
use serde::Serialize;

const VERT_SEP: char = '|';
const HORZ_SEP: &str = "-";

const PROCESS_ID_HEADER: &str = " Process ID ";
const BURST_TIME_HEADER: &str = " Burst Time ";
const WAIT_TIME_HEADER: &str = " Wait Time ";
const TURNAROUND_TIME_HEADER: &str = " Turnaround Time ";
const RESPONSE_TIME_HEADER: &str = " Response Time ";

const EMPTY_BATCH_MSG: &str = "NO PROCESSES ADDED :C";

const AVG_WAIT_TITLE: &str = "Avg. waiting time = ";
const AVG_TURNAROUND_TITLE: &str = "Avg. turnaround time = ";
const AVG_RESPONSE_TITLE: &str = "Avg. response time = ";

/// Unweighted mean wait, turnaround, and response times for a batch
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub avg_wait: f64,
    pub avg_turnaround: f64,
    pub avg_response: f64,
}

/// Compute the three aggregate means; an empty batch averages to 0.0
pub fn summarize(processes: &[ProcessRecord]) -> Summary {
    if processes.is_empty() {
        return Summary {
            avg_wait: 0.0,
            avg_turnaround: 0.0,
            avg_response: 0.0,
        };
    }

    let count = processes.len() as f64;
    let total = |metric: fn(&ProcessRecord) -> Option<Time>| -> Time {
        processes.iter().filter_map(metric).sum()
    };

    Summary {
        avg_wait: total(ProcessRecord::wait_time) as f64 / count,
        avg_turnaround: total(ProcessRecord::turnaround_time) as f64 / count,
        avg_response: total(ProcessRecord::response_time) as f64 / count,
    }
}

/// Render the fixed-width results table followed by the three averages
///
/// An empty batch renders a centered placeholder message instead of rows.
pub fn render(processes: &[ProcessRecord]) -> String {
    let summary = summarize(processes);

    let headers = [
        PROCESS_ID_HEADER,
        BURST_TIME_HEADER,
        WAIT_TIME_HEADER,
        TURNAROUND_TIME_HEADER,
        RESPONSE_TIME_HEADER,
    ];
    let row_len = headers.iter().map(|h| h.len()).sum::<usize>() + headers.len() - 1;

    let mut out = String::new();
    out.push_str(&headers.join(&VERT_SEP.to_string()));
    out.push('\n');
    out.push_str(&HORZ_SEP.repeat(row_len));
    out.push('\n');

    for process in processes {
        out.push_str(&format!(
            "{id:<id_w$}{sep}{burst:<burst_w$}{sep}{wait:<wait_w$}{sep}{turn:<turn_w$}{sep}{resp:<resp_w$}\n",
            id = process.id(),
            burst = process.burst_time(),
            wait = cell(process.wait_time()),
            turn = cell(process.turnaround_time()),
            resp = cell(process.response_time()),
            id_w = PROCESS_ID_HEADER.len(),
            burst_w = BURST_TIME_HEADER.len(),
            wait_w = WAIT_TIME_HEADER.len(),
            turn_w = TURNAROUND_TIME_HEADER.len(),
            resp_w = RESPONSE_TIME_HEADER.len(),
            sep = VERT_SEP,
        ));
    }

    if processes.is_empty() {
        let left_pad = (row_len - EMPTY_BATCH_MSG.len()) / 2;
        out.push_str(&" ".repeat(left_pad));
        out.push_str(EMPTY_BATCH_MSG);
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&format!("{AVG_WAIT_TITLE}{}\n", summary.avg_wait));
    out.push_str(&format!("{AVG_TURNAROUND_TITLE}{}\n", summary.avg_turnaround));
    out.push_str(&format!("{AVG_RESPONSE_TITLE}{}\n", summary.avg_response));

    out
}

/// Unset metrics render as a dash; a completed run never produces one
fn cell(metric: Option<Time>) -> String {
    metric.map_or_else(|| "-".to_string(), |value| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sched::fifo;

    fn scheduled() -> Vec<ProcessRecord> {
        fifo(&[
            ProcessRecord::new(1, 24),
            ProcessRecord::new(2, 3),
            ProcessRecord::new(3, 3),
        ])
    }

    #[test]
    fn test_summary_averages() {
        let summary = summarize(&scheduled());
        assert_eq!(summary.avg_wait, 17.0);
        assert_eq!(summary.avg_turnaround, 27.0);
        assert_eq!(summary.avg_response, 17.0);
    }

    #[test]
    fn test_empty_batch_averages_to_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary.avg_wait, 0.0);
        assert_eq!(summary.avg_turnaround, 0.0);
        assert_eq!(summary.avg_response, 0.0);
    }

    #[test]
    fn test_render_has_header_rows_and_averages() {
        let output = render(&scheduled());
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].contains("Process ID"));
        assert!(lines[0].contains("Response Time"));
        assert!(lines[1].chars().all(|c| c == '-'));
        // Three process rows between the separator and the blank line
        assert!(lines[2].starts_with("1 "));
        assert!(lines[4].starts_with("3 "));
        assert_eq!(lines[5], "");
        assert!(lines[6].starts_with(AVG_WAIT_TITLE));
        assert!(lines[8].starts_with(AVG_RESPONSE_TITLE));
    }

    #[test]
    fn test_render_rows_are_fixed_width() {
        let output = render(&scheduled());
        let lines: Vec<&str> = output.lines().collect();
        let row_len = lines[1].len();
        assert_eq!(lines[0].len(), row_len);
        assert_eq!(lines[2].len(), row_len);
    }

    #[test]
    fn test_render_empty_batch_centers_placeholder() {
        let output = render(&[]);
        let lines: Vec<&str> = output.lines().collect();
        let row_len = lines[1].len();

        assert!(lines[2].trim_start().starts_with(EMPTY_BATCH_MSG));
        let left_pad = lines[2].len() - EMPTY_BATCH_MSG.len();
        assert_eq!(left_pad, (row_len - EMPTY_BATCH_MSG.len()) / 2);

        assert!(output.contains("Avg. waiting time = 0"));
    }
}
