//! Input sources for `ask for NAME` statements.
//!
//! Mirrors the print handler: an enum with one variant per source, shared
//! behind an `Arc`. Native runs read stdin; tests feed a scripted queue.

use std::collections::VecDeque;
use std::io::BufRead;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::errors::{input_unavailable, EvalResult};
use crate::print_handler::PrintHandlerImpl;

/// Prompt written before each interactive read.
pub const INPUT_PROMPT: &str = "? ";

/// Input handler implementation using enum dispatch.
pub enum InputHandlerImpl {
    /// Blocking reads from stdin, one line per request.
    Stdin,
    /// Pre-supplied lines, consumed front to back.
    Scripted(Mutex<VecDeque<String>>),
}

impl InputHandlerImpl {
    /// Read one line, without its trailing newline.
    ///
    /// The prompt is written through `output` first. End of input fails with
    /// `InputUnavailable`.
    pub fn read_line(&self, output: &PrintHandlerImpl) -> EvalResult<String> {
        output.print(INPUT_PROMPT);
        match self {
            Self::Stdin => {
                let mut line = String::new();
                let read = std::io::stdin()
                    .lock()
                    .read_line(&mut line)
                    .map_err(|_| input_unavailable())?;
                if read == 0 {
                    return Err(input_unavailable());
                }
                let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(trimmed_len);
                Ok(line)
            }
            Self::Scripted(lines) => {
                let line = lines.lock().pop_front().ok_or_else(input_unavailable)?;
                // Echo so captured transcripts read like a terminal session.
                output.println(&line);
                Ok(line)
            }
        }
    }
}

/// Shared input handler that can be passed around.
pub type SharedInputHandler = Arc<InputHandlerImpl>;

/// Create a stdin input handler.
pub fn stdin_handler() -> SharedInputHandler {
    Arc::new(InputHandlerImpl::Stdin)
}

/// Create an input handler that answers reads from `lines` in order.
pub fn scripted_handler<I, S>(lines: I) -> SharedInputHandler
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Arc::new(InputHandlerImpl::Scripted(Mutex::new(
        lines.into_iter().map(Into::into).collect(),
    )))
}
