//! The interpreter's single error type.
//!
//! Mirrors the reference implementation's `Error(name, details)`: one flat type with a
//! kind and a free-form detail string, no source positions (see `SPEC_FULL.md` §7).

use std::fmt;

use strum::{Display, EnumString};

/// Closed set of error kinds the core can raise.
#[derive(Debug, Display, EnumString, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    SyntaxError,
    RuntimeError,
    ZeroDivisionError,
}

/// `{kind}: {detail}`, matching `Error.__str__` in the reference source.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptError {
    pub kind: ErrorKind,
    pub detail: String,
}

impl ScriptError {
    #[must_use]
    pub fn new(kind: ErrorKind, detail: impl Into<String>) -> Self {
        Self { kind, detail: detail.into() }
    }

    #[must_use]
    pub fn syntax(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::SyntaxError, detail)
    }

    #[must_use]
    pub fn runtime(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::RuntimeError, detail)
    }

    #[must_use]
    pub fn zero_division(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::ZeroDivisionError, detail)
    }
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.detail)
    }
}

impl std::error::Error for ScriptError {}

/// Internal control-flow carrier threaded through the evaluator.
///
/// `Return` unwinds the innermost function call frame with a value; it is not a real
/// error and must never escape `run()` (a top-level `return` is turned into a
/// `RuntimeError` by the caller, see `pyr::eval::Evaluator::run`). Keeping it as a
/// distinguished arm next to `Error` — rather than a second, separate `Result` type
/// threaded everywhere — mirrors how the teacher's evaluator distinguishes a real
/// `RunError` from exceptional-but-not-erroneous control flow.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    Error(ScriptError),
    Return(crate::value::Value),
}

impl From<ScriptError> for Signal {
    fn from(err: ScriptError) -> Self {
        Self::Error(err)
    }
}

/// Result alias used throughout the evaluator.
pub type EvalResult<T> = Result<T, Signal>;
