//! Interactive question loop

mod repl;

pub use repl::{ChatRepl, LineAction, LineEvent, LineSource, ReedlineSource};
