//! `return(x)` / `return()` — raises the return signal that unwinds the current call.

use crate::value::Value;

pub(super) fn call(mut args: Vec<Value>) -> Value {
    if args.is_empty() {
        Value::Null
    } else {
        args.swap_remove(0)
    }
}
