//! Interactive shell sessions.

mod session;
