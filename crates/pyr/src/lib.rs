//! A tree-walking interpreter for the Script language (`.pyr`).
//!
//! The crate's external contract is deliberately small (`SPEC_FULL.md` §1): lex, parse,
//! and evaluate a source string against a persistent [`Evaluator`], printing output
//! through a pluggable [`io::OutputSink`]. The REPL loop, file-path handling, and
//! process entry point live in the `pyr-cli` binary, outside this crate.

pub mod ast;
mod builtins;
pub mod env;
pub mod error;
pub mod eval;
pub mod io;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod value;

pub use crate::{
    env::Environment,
    error::{ErrorKind, ScriptError},
    eval::Evaluator,
    value::Value,
};

/// Formats a final value the way the driver prints it (`SPEC_FULL.md` §6 `format_result`):
/// `true`/`false`/`null` get their lowercase spellings, everything else uses `Display`.
#[must_use]
pub fn format_result(value: &Value) -> String {
    value.to_string()
}
