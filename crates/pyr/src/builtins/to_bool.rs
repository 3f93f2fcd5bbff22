//! `bool(x)` — the truthiness projection of any value.

use crate::{builtins::expect_one, error::ScriptError, value::Value};

pub(super) fn call(args: &[Value]) -> Result<Value, ScriptError> {
    let value = expect_one(args, "bool")?;
    Ok(Value::Bool(value.is_truthy()))
}
