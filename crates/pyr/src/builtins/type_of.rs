//! `type(x)` — the name of the value's runtime type, as a string.

use crate::{builtins::expect_one, error::ScriptError, value::Value};

pub(super) fn call(args: &[Value]) -> Result<Value, ScriptError> {
    let value = expect_one(args, "type")?;
    Ok(Value::String(value.type_name().to_owned()))
}
