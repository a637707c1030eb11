//! Native stack growth for recursive Lexi programs.
//!
//! A single Lexi call nests a chain of native frames (call, block, line,
//! nested block, statement, regex match) whose size balloons in debug
//! builds. Every executed line goes through [`ensure_sufficient_stack`],
//! so no stretch of that chain runs without a check.

/// Headroom that must remain before a line starts.
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 1024 * 1024;

/// Size of each new stack segment.
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT_SIZE: usize = 8 * 1024 * 1024;

/// Run `f`, first moving to a fresh stack segment when fewer than
/// `RED_ZONE` bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// `stacker` does not support wasm32; run `f` in place.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
