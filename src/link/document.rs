//! Containing-document metadata

use crate::link::reference::MARKDOWN_EXTENSIONS;
use crate::paths;

/// The document a link appears in
///
/// Wiki metadata is derived from the path at construction time: a document
/// is a wiki page when it is a markdown file under a directory whose name
/// ends in `.wiki` (the physical wiki repository checkout), and the wiki
/// home page is the page named `Home`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    file_path: String,
    wiki_dir: Option<String>,
}

impl DocumentRef {
    pub fn new(file_path: impl Into<String>) -> Self {
        let file_path = file_path.into();
        let wiki_dir = find_wiki_dir(&file_path);
        DocumentRef { file_path, wiki_dir }
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// Directory portion, including the trailing slash
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

    /// Nearest ancestor directory named `*.wiki`, empty when none
    pub fn wiki_dir(&self) -> &str {
        self.wiki_dir.as_deref().unwrap_or("")
    }

    pub fn is_wiki_page(&self) -> bool {
        self.wiki_dir.is_some()
            && MARKDOWN_EXTENSIONS
                .iter()
                .any(|ext| ext.eq_ignore_ascii_case(self.ext()))
    }

    pub fn is_wiki_home_page(&self) -> bool {
        self.is_wiki_page() && self.file_name_no_ext() == "Home"
    }
}

fn find_wiki_dir(file_path: &str) -> Option<String> {
    let dir = paths::dir_part(file_path);
    let mut offset = 0;
    let mut end = None;
    for segment in dir.split('/') {
        if segment.len() > ".wiki".len() && segment.ends_with(".wiki") {
            end = Some(offset + segment.len());
        }
        offset += segment.len() + 1;
    }
    end.map(|end| dir[..end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_document() {
        let doc = DocumentRef::new("https://github.com/acme/proj/README.md");
        assert!(!doc.is_wiki_page());
        assert!(!doc.is_wiki_home_page());
        assert_eq!(doc.wiki_dir(), "");
        assert_eq!(doc.file_name_no_ext(), "README");
        assert_eq!(doc.ext(), "md");
    }

    #[test]
    fn test_wiki_page() {
        let doc = DocumentRef::new("/home/u/proj/proj.wiki/Getting-Started.md");
        assert!(doc.is_wiki_page());
        assert!(!doc.is_wiki_home_page());
        assert_eq!(doc.wiki_dir(), "/home/u/proj/proj.wiki");
    }

    #[test]
    fn test_wiki_home_page() {
        let doc = DocumentRef::new("/home/u/proj/proj.wiki/Home.md");
        assert!(doc.is_wiki_home_page());
    }

    #[test]
    fn test_wiki_page_in_subdirectory() {
        let doc = DocumentRef::new("/home/u/proj/proj.wiki/notes/Ideas.md");
        assert!(doc.is_wiki_page());
        assert_eq!(doc.wiki_dir(), "/home/u/proj/proj.wiki");
    }

    #[test]
    fn test_non_markdown_under_wiki_dir_is_not_a_page() {
        let doc = DocumentRef::new("/home/u/proj/proj.wiki/img/logo.png");
        assert!(!doc.is_wiki_page());
    }
}
