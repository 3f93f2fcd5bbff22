//! The ten built-in operations of `SPEC_FULL.md` §6, one submodule per operation —
//! the same per-builtin-file layout as the teacher's `ouros::builtins` module.

mod abs_value;
mod exec;
mod input;
mod len;
mod pow_value;
mod return_signal;
mod to_bool;
mod to_flt;
mod to_int;
mod to_str;
mod type_of;

use crate::{
    error::{EvalResult, Signal},
    io::OutputSink,
    token::TokenKind,
    value::Value,
};

/// Dispatches a built-in call by the callee token's kind. `kind` must be one of the
/// built-in `TokenKind` variants; the parser guarantees this since it only builds a
/// `FunctionCall` with a built-in callee when the callee token already matched one.
pub fn call(kind: TokenKind, args: Vec<Value>, sink: &mut dyn OutputSink) -> EvalResult<Value> {
    match kind {
        TokenKind::Exec => Ok(exec::call(&args, sink)),
        TokenKind::Return => Err(Signal::Return(return_signal::call(args))),
        TokenKind::Input => Ok(input::call(&args, sink)?),
        TokenKind::Len => Ok(len::call(&args)?),
        TokenKind::Type => Ok(type_of::call(&args)?),
        TokenKind::StrCon => Ok(to_str::call(&args)?),
        TokenKind::IntCon => Ok(to_int::call(&args)?),
        TokenKind::FloatCon => Ok(to_flt::call(&args)?),
        TokenKind::BoolCon => Ok(to_bool::call(&args)?),
        TokenKind::Abs => Ok(abs_value::call(&args)?),
        TokenKind::Pow => Ok(pow_value::call(&args)?),
        other => unreachable!("call() invoked with non-builtin token kind {other}"),
    }
}

/// Shared arity-check helper used by the unary builtins (`len`, `type`, `str`, `int`,
/// `flt`, `bool`, `abs`).
fn expect_one<'a>(args: &'a [Value], name: &str) -> Result<&'a Value, crate::error::ScriptError> {
    args.first().ok_or_else(|| crate::error::ScriptError::runtime(format!("{name}() expects 1 argument, got 0")))
}
