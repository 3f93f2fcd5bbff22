//! `input(prompt?)` — prints `"> " + prompt` (or `"> "` alone), reads one line, and
//! coerces it: all-digit → `Int`; else try `Float`; else the raw string.

use std::io::{self, BufRead};

use crate::{error::ScriptError, io::OutputSink, value::Value};

pub(super) fn call(args: &[Value], sink: &mut dyn OutputSink) -> Result<Value, ScriptError> {
    let prompt = match args.first() {
        Some(value) => format!("> {value}"),
        None => "> ".to_owned(),
    };
    sink.write_prompt(&prompt);

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|err| ScriptError::runtime(format!("Failed to read input: {err}")))?;
    let line = line.trim_end_matches(['\n', '\r']);

    Ok(coerce(line))
}

/// All-digit (ASCII, non-empty) → `Int`; else parseable as `Float`; else the raw string —
/// matching `str.isdigit()` / `float()` fallthrough in the reference `input()`.
fn coerce(text: &str) -> Value {
    if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
        if let Ok(value) = text.parse::<i64>() {
            return Value::Int(value);
        }
    }
    if let Ok(value) = text.parse::<f64>() {
        return Value::Float(value);
    }
    Value::String(text.to_owned())
}
