//! Error types for program execution.
//!
//! Every failure is an `EvalError`: a structured `EvalErrorKind`, the
//! rendered message, and (once the block executor has seen it) the 1-based
//! source line that was executing. Any error aborts the whole run; there is
//! no recoverable/fatal split.
//!
//! Factory functions (`undefined_variable()`, `division_by_zero()`, ...) are
//! the public way to build errors. They populate both `kind` and `message`.

use std::fmt;

use crate::value::Value;

/// Result of evaluation.
pub type EvalResult<T = Value> = Result<T, EvalError>;

/// Typed error category.
///
/// Each variant carries the data needed to render its message, so callers
/// can match on the failure without parsing strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Dispatch
    UnknownCommand {
        line: String,
    },
    MalformedBlockHeader {
        construct: String,
        header: String,
    },
    InvalidCallSyntax {
        expr: String,
    },

    // Access
    UndefinedVariable {
        name: String,
    },

    // Arithmetic
    DivisionByZero,
    IntegerOverflow {
        operation: String,
    },
    NegativeExponent {
        exponent: i64,
    },
    UnexpectedCharacter {
        position: usize,
        found: Option<char>,
    },

    // Type
    TypeMismatch {
        subject: String,
        expected: String,
        found: String,
    },
    NotANumber {
        text: String,
    },

    // Function
    FunctionNotDefined {
        name: String,
    },
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    NoReturnValue {
        name: String,
    },
    RecursionLimit {
        depth: usize,
    },

    // Input
    InputUnavailable,
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCommand { line } => write!(f, "Unknown command: {line}"),
            Self::MalformedBlockHeader { construct, header } => {
                write!(f, "Invalid {construct} syntax: {header}")
            }
            Self::InvalidCallSyntax { expr } => write!(f, "Invalid function call syntax: {expr}"),

            Self::UndefinedVariable { name } => write!(f, "Variable '{name}' not defined"),

            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::IntegerOverflow { operation } => write!(f, "Integer overflow in {operation}"),
            Self::NegativeExponent { exponent } => {
                write!(f, "Negative exponent {exponent} is not supported")
            }
            Self::UnexpectedCharacter { position, found } => match found {
                Some(c) => write!(f, "Unexpected character '{c}' at position {position}"),
                None => write!(f, "Unexpected end of expression at position {position}"),
            },

            Self::TypeMismatch {
                subject,
                expected,
                found,
            } => write!(f, "Type mismatch: {subject} is {found}, expected {expected}"),
            Self::NotANumber { text } => write!(f, "Cannot convert string to number: {text}"),

            Self::FunctionNotDefined { name } => write!(f, "Function '{name}' not defined"),
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(f, "Function '{name}' expects {expected} {arg_word}, got {got}")
            }
            Self::NoReturnValue { name } => {
                write!(f, "Function '{name}' did not return a value")
            }
            Self::RecursionLimit { depth } => {
                write!(f, "Maximum call depth exceeded (limit: {depth})")
            }

            Self::InputUnavailable => write!(f, "No input available"),
        }
    }
}

/// A single frame in an error backtrace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    /// Name of the called function.
    pub name: String,
    /// 1-based line of the call site, if known.
    pub call_line: Option<usize>,
}

/// Snapshot of the active function calls at the error site, innermost first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
}

impl EvalBacktrace {
    /// Create a backtrace from a list of frames.
    pub fn new(frames: Vec<BacktraceFrame>) -> Self {
        Self { frames }
    }

    /// Get the backtrace frames.
    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    /// Check if the backtrace is empty.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl fmt::Display for BacktraceFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(line) = self.call_line {
            write!(f, " (called from line {line})")?;
        }
        Ok(())
    }
}

/// One line per frame; a run of identical frames (runaway recursion) is
/// printed once followed by a count of the rest.
impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for run in self.frames.chunk_by(|a, b| a == b) {
            writeln!(f, "  in {}", run[0])?;
            if run.len() > 1 {
                writeln!(f, "  ... {} more identical calls", run.len() - 1)?;
            }
        }
        Ok(())
    }
}

/// Execution error.
#[derive(Clone, Debug)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()`.
    pub message: String,
    /// 1-based source line that was executing when the error occurred.
    pub line: Option<usize>,
    /// Active function calls at the error site.
    pub backtrace: EvalBacktrace,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            line: None,
            backtrace: EvalBacktrace::default(),
        }
    }

    /// Record the executing line, unless an inner frame already did.
    #[must_use]
    pub fn at_line(mut self, line: usize) -> Self {
        if self.line.is_none() {
            self.line = Some(line);
        }
        self
    }

    /// Attach a backtrace, unless an inner frame already did.
    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        if self.backtrace.is_empty() {
            self.backtrace = backtrace;
        }
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "Line {line}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for EvalError {}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        Self::from_kind(kind)
    }
}

// Dispatch Errors

/// No statement template matched the line.
#[cold]
pub fn unknown_command(line: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownCommand {
        line: line.to_string(),
    })
}

/// A block header did not follow its construct's grammar.
#[cold]
pub fn malformed_block_header(construct: &str, header: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MalformedBlockHeader {
        construct: construct.to_string(),
        header: header.to_string(),
    })
}

/// A value-position call did not read `call NAME [with ARGS]`.
#[cold]
pub fn invalid_call_syntax(expr: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidCallSyntax {
        expr: expr.to_string(),
    })
}

// Access Errors

/// Read of a name not reachable through the scope chain.
#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

// Arithmetic Errors

/// Division or modulo by zero.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// Checked 64-bit arithmetic overflowed.
#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}

/// `^` with a negative exponent.
#[cold]
pub fn negative_exponent(exponent: i64) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NegativeExponent { exponent })
}

/// An operand position held neither a number, a name, nor `(`.
#[cold]
pub fn unexpected_character(position: usize, found: Option<char>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnexpectedCharacter { position, found })
}

// Type Errors

/// A value had the wrong type for the operation.
#[cold]
pub fn type_mismatch(subject: impl Into<String>, expected: &str, found: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        subject: subject.into(),
        expected: expected.to_string(),
        found: found.to_string(),
    })
}

/// Text that does not hold an integer was used in arithmetic.
#[cold]
pub fn not_a_number(text: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotANumber {
        text: text.to_string(),
    })
}

// Function Errors

/// Call of a name missing from the function registry.
#[cold]
pub fn function_not_defined(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::FunctionNotDefined {
        name: name.to_string(),
    })
}

/// Argument count differs from the declared parameter count.
#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

/// A call in value position finished without returning a value.
#[cold]
pub fn no_return_value(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NoReturnValue {
        name: name.to_string(),
    })
}

/// The call stack grew past the configured limit.
#[cold]
pub fn recursion_limit(depth: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecursionLimit { depth })
}

// Input Errors

/// The input source is exhausted.
#[cold]
pub fn input_unavailable() -> EvalError {
    EvalError::from_kind(EvalErrorKind::InputUnavailable)
}
