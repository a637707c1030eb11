//! Output destinations for `display` statements, input prompts and the
//! debug echo.
//!
//! One enum covers every destination, so the statement dispatcher never
//! goes through a vtable: stdout for real runs, a capturing buffer for
//! tests and embedding, or nothing at all.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

/// Where program output goes.
pub enum PrintHandlerImpl {
    /// Writes to stdout (default).
    Stdout,
    /// Accumulates everything written, for later inspection.
    Buffer(Mutex<String>),
    /// Discards all output.
    Silent,
}

impl PrintHandlerImpl {
    /// Write `msg` followed by a newline.
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout => println!("{msg}"),
            Self::Buffer(buf) => {
                let mut buf = buf.lock();
                buf.push_str(msg);
                buf.push('\n');
            }
            Self::Silent => {}
        }
    }

    /// Write `msg` as is. Stdout is flushed so a prompt shows up before the
    /// read that follows it.
    pub fn print(&self, msg: &str) {
        match self {
            Self::Stdout => {
                print!("{msg}");
                // A failed flush only delays the prompt.
                let _ = std::io::stdout().flush();
            }
            Self::Buffer(buf) => buf.lock().push_str(msg),
            Self::Silent => {}
        }
    }

    /// Everything captured so far; empty unless this is a buffer.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(buf) => buf.lock().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    /// Drop captured output. No-op unless this is a buffer.
    pub fn clear(&self) {
        if let Self::Buffer(buf) = self {
            buf.lock().clear();
        }
    }
}

/// Print handler shared between the interpreter and its embedder.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout)
}

/// A handler that captures output; read it back with
/// [`PrintHandlerImpl::get_output`].
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(Mutex::new(String::new())))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}
