//! `str(x)` — converts any value to its string projection.

use crate::{builtins::expect_one, error::ScriptError, value::Value};

pub(super) fn call(args: &[Value]) -> Result<Value, ScriptError> {
    let value = expect_one(args, "str")?;
    Ok(Value::String(value.to_string()))
}
