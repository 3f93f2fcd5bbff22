//! Runtime values and the duck-typed arithmetic/comparison semantics of `SPEC_FULL.md` §4.3.

use std::{fmt, rc::Rc};

use crate::{
    ast::FunctionDef,
    error::ScriptError,
};

/// The dynamically-tagged value every AST node evaluates to.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    String(String),
    Null,
    List(Vec<Value>),
    Function(Rc<FunctionDef>),
}

impl Value {
    /// The runtime type name surfaced by the `type()` builtin.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::String(_) => "string",
            Self::Null => "null",
            Self::List(_) => "list",
            Self::Function(_) => "function",
        }
    }

    /// Boolean projection used by `if`/`while`/`&`/`|`/`!`: non-zero numbers, non-empty
    /// strings/lists, and non-null values are truthy (`SPEC_FULL.md` §4.3 Control flow).
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Int(v) => *v != 0,
            Self::Float(v) => *v != 0.0,
            Self::Bool(v) => *v,
            Self::String(v) => !v.is_empty(),
            Self::Null => false,
            Self::List(v) => !v.is_empty(),
            Self::Function(_) => true,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Bool(v) => Some(if *v { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    fn is_zero(&self) -> bool {
        matches!(self, Self::Int(0)) || matches!(self, Self::Float(v) if *v == 0.0)
    }

    /// `+`: numeric addition, or string concatenation when both sides are strings
    /// (duck-typed, matching the reference's bare `left + right`).
    pub fn add(&self, other: &Self) -> Result<Self, ScriptError> {
        match (self, other) {
            (Self::String(a), Self::String(b)) => Ok(Self::String(format!("{a}{b}"))),
            (Self::Int(a), Self::Int(b)) => Ok(Self::Int(a.wrapping_add(*b))),
            _ => numeric_binop(self, other, "+", |a, b| a + b),
        }
    }

    pub fn sub(&self, other: &Self) -> Result<Self, ScriptError> {
        if let (Self::Int(a), Self::Int(b)) = (self, other) {
            return Ok(Self::Int(a.wrapping_sub(*b)));
        }
        numeric_binop(self, other, "-", |a, b| a - b)
    }

    pub fn mul(&self, other: &Self) -> Result<Self, ScriptError> {
        if let (Self::Int(a), Self::Int(b)) = (self, other) {
            return Ok(Self::Int(a.wrapping_mul(*b)));
        }
        numeric_binop(self, other, "*", |a, b| a * b)
    }

    /// `^`: exponentiation, shared between the `^` operator and the `pow()` builtin.
    /// Integer base and non-negative integer exponent stay `Int`; everything else
    /// promotes to `Float`, matching Python's `**` widening behavior that the reference
    /// relies on.
    pub fn pow(&self, other: &Self) -> Result<Self, ScriptError> {
        if let (Self::Int(a), Self::Int(b)) = (self, other) {
            if let Ok(exp) = u32::try_from(*b) {
                return Ok(Self::Int(a.wrapping_pow(exp)));
            }
        }
        numeric_binop(self, other, "^", f64::powf)
    }

    pub fn div(&self, other: &Self) -> Result<Self, ScriptError> {
        if other.is_zero() {
            return Err(ScriptError::zero_division("Cannot divide by 0"));
        }
        numeric_binop(self, other, "/", |a, b| a / b)
    }

    /// True floor division (`SPEC_FULL.md` §4.3): the quotient rounds toward negative
    /// infinity, not toward zero, so it agrees with Python's `//` even when the divisor
    /// is negative (`div_euclid` does not: it keeps the remainder non-negative instead).
    pub fn floor_div(&self, other: &Self) -> Result<Self, ScriptError> {
        if other.is_zero() {
            return Err(ScriptError::zero_division("Cannot divide by 0"));
        }
        if let (Self::Int(a), Self::Int(b)) = (self, other) {
            return Ok(Self::Int(floor_div_i64(*a, *b)));
        }
        numeric_binop(self, other, "//", |a, b| (a / b).floor())
    }

    /// Floor modulo: the remainder takes the sign of the divisor, matching Python's `%`.
    pub fn modulo(&self, other: &Self) -> Result<Self, ScriptError> {
        if other.is_zero() {
            return Err(ScriptError::zero_division("Cannot divide by 0"));
        }
        if let (Self::Int(a), Self::Int(b)) = (self, other) {
            return Ok(Self::Int(floor_mod_i64(*a, *b)));
        }
        numeric_binop(self, other, "%", |a, b| a - b * (a / b).floor())
    }

    /// `~`: the average operator, `(left + right) / 2`, always a `Float`.
    pub fn average(&self, other: &Self) -> Result<Self, ScriptError> {
        let (a, b) = numeric_operands(self, other, "~")?;
        Ok(Self::Float((a + b) / 2.0))
    }

    /// `~=`: approximate equality within `0.01`.
    pub fn approx_eq(&self, other: &Self) -> Result<Self, ScriptError> {
        let (a, b) = numeric_operands(self, other, "~=")?;
        Ok(Self::Bool((a - b).abs() <= 0.01))
    }

    pub fn eq_value(&self, other: &Self) -> Self {
        Self::Bool(values_equal(self, other))
    }

    pub fn neq_value(&self, other: &Self) -> Self {
        Self::Bool(!values_equal(self, other))
    }

    /// `<`/`<=`/`>`/`>=`. Numeric operands compare as `f64`; two strings compare
    /// lexicographically (the reference relies on Python's own heterogeneous `<`, which
    /// does the same for two `str`s).
    pub fn compare(&self, other: &Self, op: &str) -> Result<Self, ScriptError> {
        let ordering = if let (Self::String(a), Self::String(b)) = (self, other) {
            a.cmp(b)
        } else {
            let (a, b) = numeric_operands(self, other, op)?;
            a.partial_cmp(&b).ok_or_else(|| {
                ScriptError::runtime(format!("Cannot compare '{}' and '{}'", self.type_name(), other.type_name()))
            })?
        };
        let result = match op {
            "<" => ordering.is_lt(),
            "<=" => ordering.is_le(),
            ">" => ordering.is_gt(),
            ">=" => ordering.is_ge(),
            _ => unreachable!("compare called with non-comparison op {op}"),
        };
        Ok(Self::Bool(result))
    }

    /// Unary `-`.
    pub fn negate(&self) -> Result<Self, ScriptError> {
        match self {
            Self::Int(v) => Ok(Self::Int(-v)),
            Self::Float(v) => Ok(Self::Float(-v)),
            Self::Bool(v) => Ok(Self::Int(-i64::from(*v))),
            other => Err(ScriptError::runtime(format!(
                "Unsupported operand type for unary '-': '{}'",
                other.type_name()
            ))),
        }
    }

    /// Increment/decrement step shared by the `Incr`/`Decr` evaluator arms.
    pub fn step(&self, delta: i64) -> Result<Self, ScriptError> {
        match self {
            Self::Int(v) => Ok(Self::Int(v.wrapping_add(delta))),
            Self::Float(v) => Ok(Self::Float(v + delta as f64)),
            other => Err(ScriptError::runtime(format!(
                "Unsupported operand type for increment/decrement: '{}'",
                other.type_name()
            ))),
        }
    }
}

fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => x == y,
        (Value::Float(x), Value::Float(y)) => x == y,
        (Value::Int(x), Value::Float(y)) | (Value::Float(y), Value::Int(x)) => *x as f64 == *y,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        // `bool` is a numeric subtype here just as in the reference (Python's `bool` is an
        // `int` subclass), so `true == 1` and `false ~= 0.0` hold like any other numeric pair.
        (Value::Bool(x), Value::Int(y)) | (Value::Int(y), Value::Bool(x)) => i64::from(*x) == *y,
        (Value::Bool(x), Value::Float(y)) | (Value::Float(y), Value::Bool(x)) => {
            (if *x { 1.0 } else { 0.0 }) == *y
        }
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Null, Value::Null) => true,
        (Value::List(x), Value::List(y)) => x == y,
        _ => false,
    }
}

/// True (floor) division for `i64`: the quotient rounds toward negative infinity.
fn floor_div_i64(a: i64, b: i64) -> i64 {
    let q = a.wrapping_div(b);
    let r = a.wrapping_rem(b);
    if r != 0 && (r < 0) != (b < 0) { q - 1 } else { q }
}

/// The matching floor remainder: same sign as `b`, zero divisor already rejected by the caller.
fn floor_mod_i64(a: i64, b: i64) -> i64 {
    let r = a.wrapping_rem(b);
    if r != 0 && (r < 0) != (b < 0) { r + b } else { r }
}

fn numeric_operands(a: &Value, b: &Value, op: &str) -> Result<(f64, f64), ScriptError> {
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(ScriptError::runtime(format!(
            "Unsupported operand types for '{op}': '{}' and '{}'",
            a.type_name(),
            b.type_name()
        ))),
    }
}

fn numeric_binop(a: &Value, b: &Value, op: &str, f: impl Fn(f64, f64) -> f64) -> Result<Value, ScriptError> {
    let (x, y) = numeric_operands(a, b, op)?;
    Ok(Value::Float(f(x, y)))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{}", if *v { "true" } else { "false" }),
            Self::String(v) => write!(f, "{v}"),
            Self::Null => write!(f, "null"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Function(def) => write!(f, "<function {}>", def.name),
        }
    }
}
