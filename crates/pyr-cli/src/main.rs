use std::{env, fs, process::ExitCode};

use pyr::{eval::Evaluator, io::StdoutSink};

mod repl;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match args.get(1) {
        Some(path) => run_file(path),
        None => {
            repl::run();
            ExitCode::SUCCESS
        }
    }
}

/// Runs a single `.pyr` file and prints its final result, matching `ouros-cli`'s
/// file-argument mode: read, run, report, exit non-zero on failure.
pub(crate) fn run_file(path: &str) -> ExitCode {
    match read_script(path) {
        Ok(code) => {
            let mut evaluator = Evaluator::new();
            let mut sink = StdoutSink;
            match evaluator.run(&code, &mut sink) {
                Ok(value) => {
                    println!("{}", pyr::format_result(&value));
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    eprintln!("{err}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn read_script(path: &str) -> Result<String, String> {
    if !path.ends_with(".pyr") {
        return Err("Error: File must be a .pyr extension".to_owned());
    }
    if !fs::metadata(path).is_ok_and(|meta| meta.is_file()) {
        return Err(format!("Error: File '{path}' not found"));
    }
    fs::read_to_string(path).map_err(|err| format!("Error: Failed to read file '{path}'. {err}"))
}
