//! Scope chain for variable resolution.
//!
//! A `Scope` owns its bindings and borrows its parent. Lookup walks the
//! chain innermost-first and ends at the root, which is the interpreter's
//! global scope. Writes never travel upward: `set` always binds in the scope
//! it is called on, shadowing any outer binding of the same name.
//!
//! Function activations chain to the *caller's* scope, not the scope the
//! function was defined in, so a callee sees its parameters, its caller's
//! variables, and the globals.

use rustc_hash::FxHashMap;

use crate::errors::{undefined_variable, EvalResult};
use crate::value::Value;

/// A single scope in the chain.
#[derive(Debug, Default)]
pub struct Scope<'parent> {
    /// Variable bindings local to this scope.
    bindings: FxHashMap<String, Value>,
    /// Enclosing scope, `None` for the global scope.
    parent: Option<&'parent Scope<'parent>>,
}

impl<'parent> Scope<'parent> {
    /// Create a root scope with no parent.
    pub fn new() -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: None,
        }
    }

    /// Create a scope chained to `parent`.
    pub fn with_parent(parent: &'parent Scope<'parent>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Bind `name` in this scope, replacing any local binding.
    #[inline]
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Look up `name` through the chain.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self.bindings.get(name) {
            Some(value) => Some(value),
            None => self.parent.and_then(|parent| parent.get(name)),
        }
    }

    /// Look up `name`, failing with `UndefinedVariable` when unreachable.
    #[inline]
    pub fn require(&self, name: &str) -> EvalResult<&Value> {
        self.get(name).ok_or_else(|| undefined_variable(name))
    }

    /// Whether `name` is reachable through the chain.
    #[inline]
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Local bindings sorted by name.
    pub fn sorted_bindings(&self) -> Vec<(&str, &Value)> {
        let mut entries: Vec<_> = self
            .bindings
            .iter()
            .map(|(name, value)| (name.as_str(), value))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
