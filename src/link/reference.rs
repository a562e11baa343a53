//! The link reference model

use crate::link::DocumentRef;
use crate::paths;

/// Extensions a plain or wiki link may resolve to
pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown", "mkd"];

/// Extensions an image link may resolve to
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "svg"];

/// The kind of link as written in the source document
///
/// `Plain` is an explicit `[text](target)` link, `Image` an
/// `![alt](target)` link, `Wiki` a `[[Page Title]]` link. The compiler
/// matches on this exhaustively, so adding a kind forces every decision
/// point to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Plain,
    Image,
    Wiki,
}

/// A parsed link, read-only input to the pattern compiler
///
/// Produced by an external markdown parser. An empty `file_path` means the
/// link refers to the containing document itself (an anchor-only link).
#[derive(Debug, Clone)]
pub struct LinkRef<'a> {
    kind: LinkKind,
    file_path: String,
    anchor: Option<String>,
    containing: &'a DocumentRef,
}

impl<'a> LinkRef<'a> {
    pub fn new(
        kind: LinkKind,
        containing: &'a DocumentRef,
        file_path: impl Into<String>,
        anchor: Option<String>,
    ) -> Self {
        LinkRef {
            kind,
            file_path: file_path.into(),
            anchor,
            containing,
        }
    }

    /// Build a reference from a raw target, splitting off the anchor at the
    /// first `#`
    pub fn from_target(kind: LinkKind, containing: &'a DocumentRef, target: &str) -> Self {
        let (file_path, anchor) = match target.find('#') {
            Some(pos) => (&target[..pos], Some(target[pos + 1..].to_string())),
            None => (target, None),
        };
        LinkRef::new(kind, containing, file_path, anchor)
    }

    pub fn kind(&self) -> LinkKind {
        self.kind
    }

    pub fn containing_document(&self) -> &DocumentRef {
        self.containing
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// Directory portion of the target, including the trailing slash
    pub fn path(&self) -> &str {
        paths::dir_part(&self.file_path)
    }

    pub fn file_name(&self) -> &str {
        paths::last_name(&self.file_path)
    }

    pub fn file_name_no_ext(&self) -> &str {
        paths::name_no_ext(&self.file_path)
    }

    pub fn ext(&self) -> &str {
        paths::ext(&self.file_path)
    }

    pub fn has_ext(&self) -> bool {
        !self.ext().is_empty()
    }

    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    pub fn has_anchor(&self) -> bool {
        self.anchor.is_some()
    }

    /// The anchor fragment as written, `#` included; empty without one
    pub fn anchor_text(&self) -> String {
        match &self.anchor {
            Some(anchor) => format!("#{anchor}"),
            None => String::new(),
        }
    }

    /// Extensions considered valid for this link's target type
    pub fn link_extensions(&self) -> &'static [&'static str] {
        match self.kind {
            LinkKind::Plain | LinkKind::Wiki => MARKDOWN_EXTENSIONS,
            LinkKind::Image => IMAGE_EXTENSIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> DocumentRef {
        DocumentRef::new("https://github.com/acme/proj/README.md")
    }

    #[test]
    fn test_path_decomposition() {
        let doc = doc();
        let link = LinkRef::new(LinkKind::Plain, &doc, "docs/intro.md", None);

        assert_eq!(link.path(), "docs/");
        assert_eq!(link.file_name(), "intro.md");
        assert_eq!(link.file_name_no_ext(), "intro");
        assert_eq!(link.ext(), "md");
        assert!(link.has_ext());

        // path + file_name reassembles file_path
        assert_eq!(format!("{}{}", link.path(), link.file_name()), link.file_path());
    }

    #[test]
    fn test_from_target_splits_anchor() {
        let doc = doc();
        let link = LinkRef::from_target(LinkKind::Plain, &doc, "docs/intro.md#usage");
        assert_eq!(link.file_path(), "docs/intro.md");
        assert_eq!(link.anchor(), Some("usage"));
        assert_eq!(link.anchor_text(), "#usage");
    }

    #[test]
    fn test_anchor_only_target() {
        let doc = doc();
        let link = LinkRef::from_target(LinkKind::Plain, &doc, "#usage");
        assert_eq!(link.file_path(), "");
        assert!(link.has_anchor());
        assert!(!link.has_ext());
    }

    #[test]
    fn test_link_extensions_by_kind() {
        let doc = doc();
        let plain = LinkRef::new(LinkKind::Plain, &doc, "a", None);
        let image = LinkRef::new(LinkKind::Image, &doc, "a", None);
        assert_eq!(plain.link_extensions(), MARKDOWN_EXTENSIONS);
        assert_eq!(image.link_extensions(), IMAGE_EXTENSIONS);
    }
}
