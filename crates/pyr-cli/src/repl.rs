//! The interactive REPL loop (`SPEC_FULL.md` §6): prompt `"> "`, a `run <path>` command,
//! blank lines ignored, everything else evaluated as source against one persistent
//! [`Evaluator`] shared across lines.

use std::io::{self, BufRead, Write as _};

use pyr::{eval::Evaluator, io::StdoutSink};

pub fn run() {
    let mut evaluator = Evaluator::new();
    let mut sink = StdoutSink;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let Some(line) = lines.next() else {
            // Ctrl+D (EOF on stdin) ends the REPL the same way Ctrl+C does in the
            // reference implementation's `except KeyboardInterrupt`.
            println!("Exiting...");
            break;
        };

        let Ok(line) = line else {
            println!("Exiting...");
            break;
        };

        if let Some(path) = line.strip_prefix("run ") {
            crate::run_file(path.trim());
        } else if !line.trim().is_empty() {
            match evaluator.run(&line, &mut sink) {
                Ok(value) => println!("{}", pyr::format_result(&value)),
                Err(err) => println!("{err}"),
            }
        }
    }
}
