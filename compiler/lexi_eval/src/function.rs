//! User-defined functions and their registry.
//!
//! A function is a name, its parameter names, and the raw body lines between
//! its header and matching terminator. Bodies are re-dispatched line by line
//! on every call; nothing is pre-parsed.

use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::program::SourceLine;

/// A named, callable block of lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub params: Vec<String>,
    pub body: Vec<SourceLine>,
}

impl Function {
    pub fn new(name: impl Into<String>, params: Vec<String>, body: Vec<SourceLine>) -> Self {
        Function {
            name: name.into(),
            params,
            body,
        }
    }

    /// Split a header's parameter text into names.
    ///
    /// Names are separated by whitespace, commas, or both: `a b`, `a, b` and
    /// `a,b` all declare two parameters.
    pub fn parse_params(text: Option<&str>) -> Vec<String> {
        text.map(|text| {
            text.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|param| !param.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Renders the signature, `name(a, b)`.
impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.params.join(", "))
    }
}

/// Registry of defined functions, keyed by name.
///
/// Entries are reference-counted so a call can hold its function while the
/// body redefines functions (including itself).
#[derive(Clone, Debug, Default)]
pub struct FunctionRegistry {
    functions: FxHashMap<String, Rc<Function>>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        FunctionRegistry::default()
    }

    /// Register `function`, replacing any earlier definition of the same name.
    pub fn define(&mut self, function: Function) {
        self.functions
            .insert(function.name.clone(), Rc::new(function));
    }

    pub fn get(&self, name: &str) -> Option<Rc<Function>> {
        self.functions.get(name).cloned()
    }

    pub fn clear(&mut self) {
        self.functions.clear();
    }

    /// Every function, sorted by name.
    pub fn sorted(&self) -> Vec<Rc<Function>> {
        let mut functions: Vec<_> = self.functions.values().cloned().collect();
        functions.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        functions
    }
}
