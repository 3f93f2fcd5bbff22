//! `flt(x)` — converts to `Float`.

use crate::{builtins::expect_one, error::ScriptError, value::Value};

pub(super) fn call(args: &[Value]) -> Result<Value, ScriptError> {
    let value = expect_one(args, "flt")?;
    match value {
        Value::Int(v) => Ok(Value::Float(*v as f64)),
        Value::Float(v) => Ok(Value::Float(*v)),
        Value::Bool(v) => Ok(Value::Float(if *v { 1.0 } else { 0.0 })),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| ScriptError::runtime(format!("invalid literal for flt(): '{s}'"))),
        other => Err(ScriptError::runtime(format!("cannot convert '{}' to flt", other.type_name()))),
    }
}
