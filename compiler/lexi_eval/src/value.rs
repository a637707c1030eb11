//! Runtime values for the Lexi interpreter.
//!
//! A value is one of three shapes: a 64-bit integer, a piece of text, or a
//! list of values. Lists are shared, mutable handles: binding a list to a
//! second name aliases it, and `add ... to` appends through whichever scope
//! reaches it.
//!
//! # Construction
//!
//! ```text
//! let n = Value::int(42);
//! let s = Value::string("hello");
//! let l = Value::list(vec![Value::int(1), Value::int(2)]);
//! ```

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::errors::{not_a_number, type_mismatch, EvalResult};

/// A shared, growable list of values.
///
/// Wraps `Rc<RefCell<Vec<Value>>>` so that every name bound to the list
/// observes appends made through any other name. Single-threaded by
/// construction, like the rest of the interpreter.
#[repr(transparent)]
#[derive(Clone, Default)]
pub struct ListHandle(Rc<RefCell<Vec<Value>>>);

impl ListHandle {
    /// Create a handle owning the given items.
    #[inline]
    pub fn new(items: Vec<Value>) -> Self {
        ListHandle(Rc::new(RefCell::new(items)))
    }

    /// Append a value at the end of the list.
    #[inline]
    pub fn push(&self, value: Value) {
        self.0.borrow_mut().push(value);
    }

    /// Borrow the items.
    #[inline]
    pub fn items(&self) -> Ref<'_, Vec<Value>> {
        self.0.borrow()
    }

    /// Whether two handles refer to the same list.
    #[inline]
    pub fn ptr_eq(&self, other: &ListHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for ListHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.items() == *other.items()
    }
}

impl fmt::Debug for ListHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items().iter()).finish()
    }
}

/// Runtime value in the Lexi interpreter.
#[derive(Clone, PartialEq)]
pub enum Value {
    /// Signed 64-bit integer.
    Int(i64),
    /// UTF-8 text.
    Str(String),
    /// Ordered, heterogeneous, shared list.
    List(ListHandle),
}

impl Value {
    /// Create an integer value.
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a text value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Create a list value holding `items`.
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(ListHandle::new(items))
    }

    /// Create a new, empty list value.
    #[inline]
    pub fn empty_list() -> Self {
        Value::List(ListHandle::default())
    }

    /// Name of the value's type, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Str(_) => "text",
            Value::List(_) => "list",
        }
    }

    /// Returns the list handle if this is `List`.
    #[inline]
    pub fn as_list(&self) -> Option<&ListHandle> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// Convert to an integer for arithmetic.
    ///
    /// Integers pass through; text converts when it holds a decimal integer
    /// (an optional sign followed by digits). Lists never convert.
    pub fn to_int(&self) -> EvalResult<i64> {
        match self {
            Value::Int(n) => Ok(*n),
            Value::Str(s) => s.parse::<i64>().map_err(|_| not_a_number(s)),
            Value::List(_) => Err(type_mismatch(self.render(), "integer", self.type_name())),
        }
    }

    /// Render the value for display.
    ///
    /// Integers as decimal text, text as itself, lists as `[a, b, [c]]`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::List(list) => {
                f.write_str("[")?;
                for (i, item) in list.items().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::List(list) => write!(f, "List({list:?})"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}
