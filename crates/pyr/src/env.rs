//! The environment: the process-wide name→value mapping plus the constant-name set.
//!
//! This is a deliberately literal port of the reference `SymbolTable` (see
//! `examples/original_source/interpreter.py`), including the wholesale snapshot/restore
//! used for function-call scoping (`SPEC_FULL.md` §4.4, §9).

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::{error::ScriptError, value::Value};

/// A saved copy of the bindings map, taken by [`Environment::snapshot`] and handed back
/// to [`Environment::restore`] when a function call returns.
#[derive(Debug, Clone)]
pub struct Scope(IndexMap<String, Value>);

/// Name→value bindings plus the set of names declared constant.
///
/// Bindings are kept in an `IndexMap` (insertion order) rather than a plain `HashMap` so
/// that anything enumerating the environment — REPL introspection, debug formatting —
/// sees bindings in declaration order, the same predictable-iteration property the
/// teacher's own namespace types are built around.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    values: IndexMap<String, Value>,
    constants: HashSet<String>,
}

impl Environment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    #[must_use]
    pub fn is_constant(&self, name: &str) -> bool {
        self.constants.contains(name)
    }

    /// Plain `var` assignment: binds unconditionally unless `name` is already constant.
    pub fn set(&mut self, name: &str, value: Value) -> Result<(), ScriptError> {
        if self.constants.contains(name) {
            return Err(ScriptError::runtime(format!("Cannot reassign constant '{name}'")));
        }
        self.values.insert(name.to_owned(), value);
        Ok(())
    }

    /// `con` assignment: binds and marks `name` constant. A name already constant still
    /// goes through `set` first, so redeclaring a constant is rejected just like any
    /// other reassignment (`SPEC_FULL.md` §4.3 Variables).
    pub fn set_const(&mut self, name: &str, value: Value) -> Result<(), ScriptError> {
        self.set(name, value)?;
        self.constants.insert(name.to_owned());
        Ok(())
    }

    /// Takes a full clone of the current bindings, to be restored after a function call
    /// returns (`SPEC_FULL.md` §4.4). The constant set is *not* part of the snapshot:
    /// constants declared before the call remain constant afterward.
    #[must_use]
    pub fn snapshot(&self) -> Scope {
        Scope(self.values.clone())
    }

    /// Replaces the bindings map wholesale with a previously taken snapshot, discarding
    /// any mutation the call made to pre-existing bindings.
    pub fn restore(&mut self, scope: Scope) {
        self.values = scope.0;
    }
}
