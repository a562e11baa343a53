//! linkmatch - resolve GitHub-style markdown and wiki links
//!
//! Given a parsed link ([`LinkRef`]), the document it appears in
//! ([`DocumentRef`]) and the project's base path (a [`ProjectResolver`]),
//! [`compile`] produces one anchored, case-insensitive regex that selects the
//! repository file the link refers to, following GitHub's resolution rules
//! for `blob/<branch>/` paths, wiki pages and reserved endpoints like
//! `issues` or `pulls`.

pub mod config;
pub mod link;
pub mod matcher;
pub mod paths;
pub mod resolver;

pub use link::{DocumentRef, LinkKind, LinkRef};
pub use matcher::{compile, CompilationResult, MatchError, MatchMode};
pub use resolver::{ProjectResolver, StaticResolver, GITHUB_LINKS};
