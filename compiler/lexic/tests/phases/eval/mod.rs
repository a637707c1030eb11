//! Language behaviour, end to end.

mod control_flow;
mod errors;
mod expressions;
mod functions;
mod statements;
