//! Command handlers for the `lexi` binary.
//!
//! `run` executes a source file once. Shared helpers such as `read_file`
//! live here in the module root.

mod run;

pub use run::{run_file, run_source};

/// Read a source file, describing the failure in terms a user can act on.
pub fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}
