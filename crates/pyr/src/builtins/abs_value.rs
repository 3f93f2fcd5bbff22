//! `abs(x)` — absolute value.

use crate::{builtins::expect_one, error::ScriptError, value::Value};

pub(super) fn call(args: &[Value]) -> Result<Value, ScriptError> {
    let value = expect_one(args, "abs")?;
    match value {
        Value::Int(v) => Ok(Value::Int(v.wrapping_abs())),
        Value::Float(v) => Ok(Value::Float(v.abs())),
        Value::Bool(v) => Ok(Value::Int(i64::from(*v))),
        other => Err(ScriptError::runtime(format!("bad operand type for abs(): '{}'", other.type_name()))),
    }
}
