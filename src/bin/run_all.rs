/*!
 * Run-All Command
 * Runs all six scheduler variants over a process data file
 */

use sched_sim::cli::{self, QuantumArgs};
use sched_sim::{load_csv, render, Quantum, SimResult, Variant};
use std::fmt::Write as _;
use std::process::ExitCode;

const USAGE: &str = "run-all <quantum> <datafile>";

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
    let quantum = Quantum::new(quantum)?;
    let processes = load_csv(&data_file)?;

    let mut out = String::new();
    for variant in Variant::ALL {
        let scheduled = variant.run(quantum, &processes)?;
        let _ = writeln!(out, "----==== {} ====----", variant.label());
        out.push_str(&render(&scheduled));
        out.push('\n');
    }
    Ok(out)
}
