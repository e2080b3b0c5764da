/*!
 * Round-Robin Command
 * Runs the Round-Robin scheduler over a process data file
 */

use sched_sim::cli::{self, QuantumArgs};
use sched_sim::{load_csv, render, rr, Quantum, SimResult};
use std::process::ExitCode;

const USAGE: &str = "rr <quantum> <datafile>";

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("ERROR : {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> SimResult<String> {
    let QuantumArgs { quantum, data_file } = cli::parse_quantum_args(args, USAGE)?;
    // Range-check up front so a bad quantum is reported before any file I/O
    let quantum = Quantum::new(quantum)?;
    let processes = load_csv(&data_file)?;
    let scheduled = rr(quantum.get(), &processes)?;
    Ok(render(&scheduled))
}
