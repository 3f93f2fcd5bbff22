//! `exec(arg1, arg2, …)` — prints args joined by `\n`, returns `Null`.

use crate::{io::OutputSink, value::Value};

pub(super) fn call(args: &[Value], sink: &mut dyn OutputSink) -> Value {
    let joined = args.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n");
    sink.write_line(&joined);
    Value::Null
}
