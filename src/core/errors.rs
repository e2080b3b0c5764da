/*!
 * Error Types
 * Centralized error handling with thiserror and miette
 */

use crate::core::types::{Pid, Time};
use crate::sched::{MAX_DURATION, MIN_DURATION};
use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while loading a process data file
///
/// A load either produces a complete batch or fails on the first bad line;
/// the scheduling engine never sees partially parsed records.
#[derive(Error, Debug, Diagnostic)]
pub enum LoadError {
    #[error("data file \"{0}\" does not exist")]
    #[diagnostic(
        code(loader::file_not_found),
        help("Check the data file path passed on the command line.")
    )]
    FileNotFound(String),

    #[error("failed to read data file: {0}")]
    #[diagnostic(code(loader::io))]
    Io(#[from] std::io::Error),

    #[error("incorrect number of values at line {line}: expected {expected}, found {found}")]
    #[diagnostic(
        code(loader::field_count),
        help("Each line must be `processId,burstTime`.")
    )]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("could not parse {field} \"{value}\" at line {line}")]
    #[diagnostic(
        code(loader::invalid_field),
        help("processId and burstTime must be non-negative integers.")
    )]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("{field} cannot be less than {min} at line {line}")]
    #[diagnostic(code(loader::field_too_small))]
    FieldTooSmall {
        line: usize,
        field: &'static str,
        min: Time,
    },

    #[error("duplicate process id {id} at line {line}")]
    #[diagnostic(
        code(loader::duplicate_id),
        help("Process ids must be unique within a batch.")
    )]
    DuplicateId { line: usize, id: Pid },
}

/// Scheduling engine errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum SchedulerError {
    #[error("quantum {0} must be between {} and {}", MIN_DURATION, MAX_DURATION)]
    #[diagnostic(
        code(sched::invalid_quantum),
        help("Round-Robin accepts a quantum between 10 and 1000 inclusive.")
    )]
    InvalidQuantum(Time),
}

/// Command-line argument errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum CliError {
    #[error("incorrect number of args : should be {usage}")]
    #[diagnostic(code(cli::invalid_argument_count))]
    InvalidArgumentCount { usage: &'static str },

    #[error("unable to parse quantum \"{0}\"")]
    #[diagnostic(
        code(cli::invalid_quantum),
        help("The quantum must be a non-negative integer.")
    )]
    InvalidQuantum(String),
}

/// Umbrella error for the simulator binaries
#[derive(Error, Debug, Diagnostic)]
pub enum SimError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Cli(#[from] CliError),
}
