//! Regex-building primitives
//!
//! The compiler assembles its output from these few pieces so the
//! quoting/alternation/optional-group rules can be tested in isolation from
//! the prefix-resolution logic.

/// Matches any text, including none
pub(crate) const MATCH_ANYTHING: &str = "(?:.*)";

/// Matches a descent into any chain of subdirectories, or none
pub(crate) const ANY_SUBDIR: &str = "(?:.+/)?";

/// Quote text so it matches only itself
pub(crate) fn literal(text: &str) -> String {
    regex::escape(text)
}

/// Quote text with `-` and space treated as interchangeable
///
/// GitHub wiki slugs substitute `-` for spaces in the page title, so a wiki
/// reference must match whichever form the path carries.
pub(crate) fn literal_folding_spaces(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() * 2);
    let mut buf = [0u8; 4];
    for c in text.chars() {
        if c == '-' || c == ' ' {
            quoted.push_str("(?:-| )");
        } else {
            quoted.push_str(&regex::escape(c.encode_utf8(&mut buf)));
        }
    }
    quoted
}

/// Wrap a pattern in an optional non-capturing group
pub(crate) fn optional(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!("(?:{body})?")
    }
}

/// An ordered collector of pattern alternatives
pub(crate) struct Alternation {
    parts: Vec<String>,
}

impl Alternation {
    pub(crate) fn new() -> Self {
        Alternation { parts: Vec::new() }
    }

    /// Add one alternative; empty patterns are dropped
    pub(crate) fn push(&mut self, part: String) {
        if !part.is_empty() {
            self.parts.push(part);
        }
    }

    /// Render as a non-capturing group, empty when no alternatives were added
    pub(crate) fn into_group(self, is_optional: bool) -> String {
        if self.parts.is_empty() {
            return String::new();
        }
        let mut group = format!("(?:{})", self.parts.join("|"));
        if is_optional {
            group.push('?');
        }
        group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_escapes_metacharacters() {
        assert_eq!(literal("a.b"), "a\\.b");
        assert_eq!(literal("a+b(c)"), "a\\+b\\(c\\)");
        assert_eq!(literal("a/b"), "a/b");
    }

    #[test]
    fn test_literal_folding_spaces() {
        let quoted = literal_folding_spaces("Getting-Started");
        assert_eq!(quoted, "Getting(?:-| )Started");

        let re = regex::Regex::new(&format!("^{quoted}$")).unwrap();
        assert!(re.is_match("Getting-Started"));
        assert!(re.is_match("Getting Started"));
        assert!(!re.is_match("GettingStarted"));
    }

    #[test]
    fn test_optional() {
        assert_eq!(optional("abc"), "(?:abc)?");
        assert_eq!(optional(""), "");
    }

    #[test]
    fn test_alternation() {
        let mut alts = Alternation::new();
        alts.push("a".to_string());
        alts.push(String::new());
        alts.push("b".to_string());
        assert_eq!(alts.into_group(false), "(?:a|b)");

        let mut alts = Alternation::new();
        alts.push("a".to_string());
        assert_eq!(alts.into_group(true), "(?:a)?");

        assert_eq!(Alternation::new().into_group(true), "");
    }
}
