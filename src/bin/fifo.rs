/*!
 * FIFO Command
 * Runs the FIFO scheduler over a process data file
 */

use sched_sim::cli::{self, FifoArgs};
use sched_sim::{fifo, load_csv, render, SimResult};
use std::process::ExitCode;

const USAGE: &str = "fifo <datafile>";

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
    let FifoArgs { data_file } = cli::parse_fifo_args(args, USAGE)?;
    let processes = load_csv(&data_file)?;
    let scheduled = fifo(&processes);
    Ok(render(&scheduled))
}
