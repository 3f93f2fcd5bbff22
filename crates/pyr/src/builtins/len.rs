//! `len(x)` — length of a string or list.

use crate::{builtins::expect_one, error::ScriptError, value::Value};

pub(super) fn call(args: &[Value]) -> Result<Value, ScriptError> {
    let value = expect_one(args, "len")?;
    match value {
        Value::String(s) => Ok(Value::Int(s.chars().count() as i64)),
        Value::List(items) => Ok(Value::Int(items.len() as i64)),
        other => Err(ScriptError::runtime(format!("object of type '{}' has no len()", other.type_name()))),
    }
}
