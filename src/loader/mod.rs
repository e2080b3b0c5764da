/*!
 * Process Loader
 * Reads a batch of process records from a delimited data file
 */

use crate::core::errors::LoadError;
use crate::core::types::{Pid, Time};
use crate::process::ProcessRecord;
use log::{debug, info};
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

const DELIMITER: char = ',';
const NUM_FIELDS: usize = 2;
const MIN_PROCESS_ID: Pid = 1;

/// Load a process batch from `path`, one `processId,burstTime` per line
///
/// The whole load fails on the first malformed line, naming the 1-based line
/// number; the scheduling engine never receives a partial batch. Process ids
/// must be unique within the file.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<ProcessRecord>, LoadError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => LoadError::FileNotFound(path.display().to_string()),
        _ => LoadError::Io(err),
    })?;

    let mut batch = Vec::new();
    let mut seen_ids = HashSet::new();
    for (index, line) in contents.lines().enumerate() {
        let line_number = index + 1;
        let record = parse_line(line, line_number)?;
        if !seen_ids.insert(record.id()) {
            return Err(LoadError::DuplicateId {
                line: line_number,
                id: record.id(),
            });
        }
        debug!("loader: line {line_number} parsed as {record}");
        batch.push(record);
    }

    info!(
        "loader: {} processes loaded from {}",
        batch.len(),
        path.display()
    );
    Ok(batch)
}

fn parse_line(line: &str, line_number: usize) -> Result<ProcessRecord, LoadError> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() != NUM_FIELDS {
        return Err(LoadError::FieldCount {
            line: line_number,
            expected: NUM_FIELDS,
            found: fields.len(),
        });
    }

    let id: Pid = fields[0]
        .trim()
        .parse()
        .map_err(|_| LoadError::InvalidField {
            line: line_number,
            field: "processId",
            value: fields[0].to_string(),
        })?;
    if id < MIN_PROCESS_ID {
        return Err(LoadError::FieldTooSmall {
            line: line_number,
            field: "processId",
            min: MIN_PROCESS_ID as Time,
        });
    }

    // burstTime is unsigned, so the >= 0 bound holds by construction; a
    // negative value fails to parse
    let burst_time: Time = fields[1]
        .trim()
        .parse()
        .map_err(|_| LoadError::InvalidField {
            line: line_number,
            field: "burstTime",
            value: fields[1].to_string(),
        })?;

    Ok(ProcessRecord::new(id, burst_time))
}
