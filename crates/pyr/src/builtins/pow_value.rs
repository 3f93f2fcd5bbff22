//! `pow(a, b)` — `a ^ b`, sharing its semantics with the `^` operator.

use crate::{error::ScriptError, value::Value};

pub(super) fn call(args: &[Value]) -> Result<Value, ScriptError> {
    if args.len() != 2 {
        return Err(ScriptError::runtime(format!("pow() expects 2 arguments, got {}", args.len())));
    }
    args[0].pow(&args[1])
}
