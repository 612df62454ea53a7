mod functions;
mod helpers;

pub use functions::{GeneratedFunction, Receiver, build_conversion_fn, emit_conversion_fn};
pub use helpers::{INDENT, indent_lines};
