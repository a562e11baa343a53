//! Matcher module - compiles link references into path patterns

mod compile;
mod pattern;

pub use compile::{compile, CompilationResult, MatchError, MatchMode};
