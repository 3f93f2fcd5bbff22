//! `int(x)` — converts to `Int`: truncates floats, `true`/`false` → `1`/`0`, parses
//! strings, and is the identity on an existing `Int`.

use crate::{builtins::expect_one, error::ScriptError, value::Value};

pub(super) fn call(args: &[Value]) -> Result<Value, ScriptError> {
    let value = expect_one(args, "int")?;
    match value {
        Value::Int(v) => Ok(Value::Int(*v)),
        Value::Float(v) => Ok(Value::Int(*v as i64)),
        Value::Bool(v) => Ok(Value::Int(i64::from(*v))),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| ScriptError::runtime(format!("invalid literal for int(): '{s}'"))),
        other => Err(ScriptError::runtime(format!("cannot convert '{}' to int", other.type_name()))),
    }
}
