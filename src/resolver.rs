//! Project resolution - where the version-controlled project lives

use crate::link::DocumentRef;

/// Reserved top-level GitHub endpoints that are not repository files
pub const GITHUB_LINKS: &[&str] = &["graphs", "issues", "pulls", "pulse", "settings", "wiki"];

/// Supplies the version-control base path links resolve against
///
/// Implementations must be safe for concurrent read access; the compiler
/// only ever reads through this trait.
pub trait ProjectResolver {
    /// Version-control base path for the given document, if known
    ///
    /// When `Some`, the path must be non-empty; the compiler falls back to
    /// [`ProjectResolver::project_base_path`] otherwise.
    fn vcs_base_path(&self, document: &DocumentRef) -> Option<String>;

    /// Project-wide fallback base path
    fn project_base_path(&self) -> String;
}

/// A resolver backed by one fixed base path, for CLI use and tests
#[derive(Debug, Clone)]
pub struct StaticResolver {
    base: String,
}

impl StaticResolver {
    pub fn new(base: impl Into<String>) -> Self {
        StaticResolver { base: base.into() }
    }
}

impl ProjectResolver for StaticResolver {
    fn vcs_base_path(&self, _document: &DocumentRef) -> Option<String> {
        Some(self.base.clone())
    }

    fn project_base_path(&self) -> String {
        self.base.clone()
    }
}
