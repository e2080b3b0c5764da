/*!
 * Command-Line Parsing
 * Shared argument handling for the simulator binaries
 */

use crate::core::errors::CliError;
use crate::core::types::Time;

/// Arguments for the FIFO-only command: `fifo <datafile>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FifoArgs {
    pub data_file: String,
}

/// Arguments for the quantum-based commands: `<bin> <quantum> <datafile>`
///
/// The quantum is parsed here but range-checked by the caller through
/// `Quantum::new`, so both layers report their own error kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantumArgs {
    pub quantum: Time,
    pub data_file: String,
}

pub fn parse_fifo_args(args: &[String], usage: &'static str) -> Result<FifoArgs, CliError> {
    match args {
        [data_file] => Ok(FifoArgs {
            data_file: data_file.clone(),
        }),
        _ => Err(CliError::InvalidArgumentCount { usage }),
    }
}

pub fn parse_quantum_args(args: &[String], usage: &'static str) -> Result<QuantumArgs, CliError> {
    match args {
        [quantum, data_file] => {
            let quantum = quantum
                .parse()
                .map_err(|_| CliError::InvalidQuantum(quantum.clone()))?;
            Ok(QuantumArgs {
                quantum,
                data_file: data_file.clone(),
            })
        }
        _ => Err(CliError::InvalidArgumentCount { usage }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USAGE: &str = "rr <quantum> <datafile>";

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_fifo_args() {
        let parsed = parse_fifo_args(&args(&["data.csv"]), "fifo <datafile>").unwrap();
        assert_eq!(parsed.data_file, "data.csv");
    }

    #[test]
    fn test_fifo_args_wrong_arity() {
        assert!(matches!(
            parse_fifo_args(&args(&[]), "fifo <datafile>"),
            Err(CliError::InvalidArgumentCount { .. })
        ));
        assert!(matches!(
            parse_fifo_args(&args(&["a", "b"]), "fifo <datafile>"),
            Err(CliError::InvalidArgumentCount { .. })
        ));
    }

    #[test]
    fn test_quantum_args() {
        let parsed = parse_quantum_args(&args(&["40", "data.csv"]), USAGE).unwrap();
        assert_eq!(parsed.quantum, 40);
        assert_eq!(parsed.data_file, "data.csv");
    }

    #[test]
    fn test_quantum_args_unparsable_quantum() {
        // Negative quanta fail to parse into the unsigned time type
        for bad in ["abc", "-5", "4.5", ""] {
            assert!(matches!(
                parse_quantum_args(&args(&[bad, "data.csv"]), USAGE),
                Err(CliError::InvalidQuantum(_))
            ));
        }
    }

    #[test]
    fn test_quantum_args_wrong_arity() {
        assert!(matches!(
            parse_quantum_args(&args(&["40"]), USAGE),
            Err(CliError::InvalidArgumentCount { .. })
        ));
    }
}
