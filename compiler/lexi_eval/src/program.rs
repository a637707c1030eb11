//! The program buffer.
//!
//! Lines are stored verbatim together with their 1-based position, so that
//! a line copied into a function body still reports where it came from.

use std::fmt;

/// One line of source text and its 1-based line number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLine {
    pub number: usize,
    pub text: String,
}

impl SourceLine {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        SourceLine {
            number,
            text: text.into(),
        }
    }
}

impl fmt::Display for SourceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.number, self.text)
    }
}

/// Ordered, growable sequence of source lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    lines: Vec<SourceLine>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    /// Build a program from text, one line per `\n` (a trailing `\r` is dropped).
    pub fn from_source(source: &str) -> Self {
        let mut program = Program::new();
        program.load_str(source);
        program
    }

    /// Append one line, numbered after the current last line.
    pub fn push_line(&mut self, text: impl Into<String>) {
        let number = self.lines.len() + 1;
        self.lines.push(SourceLine::new(number, text));
    }

    /// Append every line of `source`.
    pub fn load_str(&mut self, source: &str) {
        for line in source.lines() {
            self.push_line(line);
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[inline]
    pub fn lines(&self) -> &[SourceLine] {
        &self.lines
    }

    /// Lines within `radius` of the 1-based `number`, clamped to the buffer.
    pub fn context(&self, number: usize, radius: usize) -> &[SourceLine] {
        if self.lines.is_empty() || number == 0 {
            return &[];
        }
        let index = (number - 1).min(self.lines.len() - 1);
        let start = index.saturating_sub(radius);
        let end = (index + radius + 1).min(self.lines.len());
        &self.lines[start..end]
    }
}
