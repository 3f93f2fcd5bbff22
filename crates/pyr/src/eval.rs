//! AST + environment → result value, with I/O side effects through an [`OutputSink`]
//! (`SPEC_FULL.md` §4.3).

use crate::{
    ast::Expr,
    builtins,
    env::Environment,
    error::{EvalResult, ScriptError, Signal},
    io::OutputSink,
    lexer::Lexer,
    parser::Parser,
    token::{Token, TokenKind},
    value::Value,
};

/// Owns the environment for the lifetime of the interpreter instance. Successive
/// `run()` calls share the same environment — bindings persist across REPL lines
/// (`SPEC_FULL.md` §5).
#[derive(Debug, Default)]
pub struct Evaluator {
    env: Environment,
}

impl Evaluator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Lexes, parses, and evaluates `source`, returning the last statement's value.
    ///
    /// This is the external contract the core owes its collaborators (`SPEC_FULL.md`
    /// §1): `run(source_text) -> (value | ScriptError)`.
    pub fn run(&mut self, source: &str, sink: &mut dyn OutputSink) -> Result<Value, ScriptError> {
        let tokens = Lexer::new(source).tokenize()?;
        let statements = Parser::new(tokens).parse()?;

        let mut result = Value::Null;
        for stmt in &statements {
            match self.eval(stmt, sink) {
                Ok(value) => result = value,
                Err(Signal::Error(err)) => return Err(err),
                Err(Signal::Return(_)) => {
                    return Err(ScriptError::runtime("'return' outside function"));
                }
            }
        }
        Ok(result)
    }

    fn eval(&mut self, expr: &Expr, sink: &mut dyn OutputSink) -> EvalResult<Value> {
        match expr {
            Expr::Literal(token) => Ok(literal_value(token)),
            Expr::List(elements) => {
                let mut values = Vec::with_capacity(elements.len());
                for element in elements {
                    values.push(self.eval(element, sink)?);
                }
                Ok(Value::List(values))
            }
            Expr::ListAccess { target, index } => self.eval_list_access(target, index, sink),

            Expr::VarAccess(name) => self.eval_var_access(name),
            Expr::VarAssign { name, value, is_over } => self.eval_var_assign(name, value, *is_over, sink),
            Expr::ConstAssign { name, value } => self.eval_const_assign(name, value, sink),

            Expr::BinOp { left, op, right } => self.eval_bin_op(left, op, right, sink),
            Expr::UnaryOp { op, operand } => self.eval_unary_op(op, operand, sink),

            Expr::Incr { name, is_prefix } => self.eval_step(name, *is_prefix, 1),
            Expr::Decr { name, is_prefix } => self.eval_step(name, *is_prefix, -1),

            Expr::If { condition, body, elifs, else_body } => {
                self.eval_if(condition, body, elifs, else_body, sink)
            }
            Expr::While { condition, body } => self.eval_while(condition, body, sink),
            Expr::For { var_name, init, condition, update, body } => {
                self.eval_for(var_name, init, condition, update, body, sink)
            }

            Expr::FunctionDef(def) => {
                self.env.set(&def.name, Value::Function(def.clone()))?;
                Ok(Value::Null)
            }
            Expr::FunctionCall { callee, args } => self.eval_call(callee, args, sink),
        }
    }

    fn eval_body(&mut self, body: &[Expr], sink: &mut dyn OutputSink) -> EvalResult<Value> {
        let mut result = Value::Null;
        for stmt in body {
            result = self.eval(stmt, sink)?;
        }
        Ok(result)
    }

    fn eval_list_access(&mut self, target: &Expr, index: &Expr, sink: &mut dyn OutputSink) -> EvalResult<Value> {
        let target = self.eval(target, sink)?;
        let index = self.eval(index, sink)?;

        let Value::List(items) = target else {
            return Err(ScriptError::runtime("Expected list").into());
        };
        let Value::Int(index) = index else {
            return Err(ScriptError::runtime("Expected index as int").into());
        };

        // Negative indices count from the end, matching the reference's bare
        // `list_val[index]` Python subscript.
        let normalized = if index < 0 { index + items.len() as i64 } else { index };

        usize::try_from(normalized)
            .ok()
            .and_then(|i| items.get(i).cloned())
            .ok_or_else(|| ScriptError::runtime("List index out of range").into())
    }

    fn eval_var_access(&self, name: &Token) -> EvalResult<Value> {
        let ident = name.name().unwrap_or_default();
        self.env
            .get(ident)
            .cloned()
            .ok_or_else(|| ScriptError::runtime(format!("'{ident}' not defined")).into())
    }

    fn eval_var_assign(
        &mut self,
        name: &Token,
        value: &Expr,
        is_over: bool,
        sink: &mut dyn OutputSink,
    ) -> EvalResult<Value> {
        let ident = name.name().unwrap_or_default();
        let value = self.eval(value, sink)?;

        if is_over && !self.env.contains(ident) {
            return Err(ScriptError::runtime(format!(
                "Cannot use 'over' to reassign undefined variable '{ident}'"
            ))
            .into());
        }

        self.env.set(ident, value.clone())?;
        Ok(value)
    }

    fn eval_const_assign(&mut self, name: &Token, value: &Expr, sink: &mut dyn OutputSink) -> EvalResult<Value> {
        let ident = name.name().unwrap_or_default();
        let value = self.eval(value, sink)?;
        self.env.set_const(ident, value.clone())?;
        Ok(value)
    }

    fn eval_step(&mut self, name: &Token, is_prefix: bool, delta: i64) -> EvalResult<Value> {
        let ident = name.name().unwrap_or_default();
        let current = self
            .env
            .get(ident)
            .cloned()
            .ok_or_else(|| ScriptError::runtime(format!("Undefined variable '{ident}'")))?;

        let stepped = current.step(delta)?;
        self.env.set(ident, stepped.clone())?;

        Ok(if is_prefix { stepped } else { current })
    }

    fn eval_if(
        &mut self,
        condition: &Expr,
        body: &[Expr],
        elifs: &[(Expr, Vec<Expr>)],
        else_body: &Option<Vec<Expr>>,
        sink: &mut dyn OutputSink,
    ) -> EvalResult<Value> {
        if self.eval(condition, sink)?.is_truthy() {
            return self.eval_body(body, sink);
        }
        for (cond, body) in elifs {
            if self.eval(cond, sink)?.is_truthy() {
                return self.eval_body(body, sink);
            }
        }
        if let Some(else_body) = else_body {
            return self.eval_body(else_body, sink);
        }
        Ok(Value::Null)
    }

    fn eval_while(&mut self, condition: &Expr, body: &[Expr], sink: &mut dyn OutputSink) -> EvalResult<Value> {
        let mut result = Value::Null;
        while self.eval(condition, sink)?.is_truthy() {
            result = self.eval_body(body, sink)?;
        }
        Ok(result)
    }

    #[allow(clippy::too_many_arguments)]
    fn eval_for(
        &mut self,
        var_name: &Token,
        init: &Expr,
        condition: &Expr,
        update: &Expr,
        body: &[Expr],
        sink: &mut dyn OutputSink,
    ) -> EvalResult<Value> {
        let ident = var_name.name().unwrap_or_default();
        let start = self.eval(init, sink)?;
        // Not scoped: the loop variable bleeds into the enclosing environment
        // (SPEC_FULL.md §4.3 Control flow, `For`).
        self.env.set(ident, start)?;

        while self.eval(condition, sink)?.is_truthy() {
            self.eval_body(body, sink)?;
            self.eval(update, sink)?;
        }
        Ok(Value::Null)
    }

    fn eval_bin_op(&mut self, left: &Expr, op: &Token, right: &Expr, sink: &mut dyn OutputSink) -> EvalResult<Value> {
        let left = self.eval(left, sink)?;
        let right = self.eval(right, sink)?;

        let value = match op.kind {
            TokenKind::Plus => left.add(&right)?,
            TokenKind::Minus => left.sub(&right)?,
            TokenKind::Mul => left.mul(&right)?,
            TokenKind::Exp => left.pow(&right)?,
            TokenKind::Div => left.div(&right)?,
            TokenKind::FDiv => left.floor_div(&right)?,
            TokenKind::Mod => left.modulo(&right)?,
            TokenKind::Average => left.average(&right)?,

            TokenKind::Eq => left.eq_value(&right),
            TokenKind::Neq => left.neq_value(&right),
            TokenKind::Lt => left.compare(&right, "<")?,
            TokenKind::Lte => left.compare(&right, "<=")?,
            TokenKind::Gt => left.compare(&right, ">")?,
            TokenKind::Gte => left.compare(&right, ">=")?,
            TokenKind::Approx => left.approx_eq(&right)?,

            // Both sides are already evaluated above, so this is eager, not
            // short-circuited (SPEC_FULL.md §4.3 BinOp).
            TokenKind::And => {
                if left.is_truthy() {
                    right
                } else {
                    left
                }
            }
            TokenKind::Or => {
                if left.is_truthy() {
                    left
                } else {
                    right
                }
            }

            other => return Err(ScriptError::runtime(format!("Unsupported operator '{other}'")).into()),
        };
        Ok(value)
    }

    fn eval_unary_op(&mut self, op: &Token, operand: &Expr, sink: &mut dyn OutputSink) -> EvalResult<Value> {
        let value = self.eval(operand, sink)?;
        match op.kind {
            TokenKind::Minus => Ok(value.negate()?),
            // `!` is dead code in practice: the lexer never emits `Not` for a bare `!`
            // (SPEC_FULL.md §9 quirk (d)). Implemented anyway since the AST variant
            // exists.
            TokenKind::Not => Ok(Value::Bool(!value.is_truthy())),
            TokenKind::Plus => Ok(value),
            other => Err(ScriptError::runtime(format!("Unsupported unary operator '{other}'")).into()),
        }
    }

    fn eval_call(&mut self, callee: &Token, args: &[Expr], sink: &mut dyn OutputSink) -> EvalResult<Value> {
        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.eval(arg, sink)?);
        }

        if is_builtin(callee.kind) {
            return builtins::call(callee.kind, values, sink);
        }

        self.call_function(callee, values, sink)
    }

    fn call_function(&mut self, callee: &Token, args: Vec<Value>, sink: &mut dyn OutputSink) -> EvalResult<Value> {
        let ident = callee.name().unwrap_or_default();
        let def = match self.env.get(ident) {
            Some(Value::Function(def)) => def.clone(),
            Some(_) => return Err(ScriptError::runtime(format!("'{ident}' is not callable")).into()),
            None => return Err(ScriptError::runtime(format!("'{ident}' not defined")).into()),
        };

        // Surplus args are ignored, missing args raise `RuntimeError` (SPEC_FULL.md §4.3).
        if args.len() < def.params.len() {
            return Err(ScriptError::runtime(format!(
                "{}() expects {} argument(s), got {}",
                def.name,
                def.params.len(),
                args.len()
            ))
            .into());
        }

        // Open a new "scope" by snapshotting the whole environment and restoring it
        // wholesale on the way out — a deliberate carry-over from the reference
        // implementation's `prev_symbols = self.symbol_table.symbols.copy()` dance
        // (SPEC_FULL.md §4.4, §9).
        let snapshot = self.env.snapshot();

        // `constants` is not part of the snapshot (SPEC_FULL.md §4.4), so a parameter
        // name that shadows an enclosing constant is still rejected here; restore the
        // snapshot before propagating so the environment isn't left half-bound.
        for (param, value) in def.params.iter().zip(args) {
            let param_name = param.name().unwrap_or_default();
            if let Err(err) = self.env.set(param_name, value) {
                self.env.restore(snapshot);
                return Err(err.into());
            }
        }

        let result = match self.eval_body(&def.body, sink) {
            Ok(value) => Ok(value),
            Err(Signal::Return(value)) => Ok(value),
            Err(err @ Signal::Error(_)) => Err(err),
        };

        self.env.restore(snapshot);
        result
    }
}

fn is_builtin(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Exec
            | TokenKind::Return
            | TokenKind::Input
            | TokenKind::Len
            | TokenKind::Type
            | TokenKind::StrCon
            | TokenKind::IntCon
            | TokenKind::FloatCon
            | TokenKind::BoolCon
            | TokenKind::Abs
            | TokenKind::Pow
    )
}

fn literal_value(token: &Token) -> Value {
    use crate::token::Lexeme;
    match &token.lexeme {
        Lexeme::Int(v) => Value::Int(*v),
        Lexeme::Float(v) => Value::Float(*v),
        Lexeme::Str(v) => Value::String(v.clone()),
        Lexeme::Name(_) if token.kind == TokenKind::Bool => Value::Bool(token.as_bool().unwrap_or(false)),
        Lexeme::Name(_) | Lexeme::None => Value::Null,
    }
}
