//! The pattern compiler
//!
//! Turns a [`LinkRef`] into one anchored, case-insensitive regex that can be
//! tested against candidate repository paths, reproducing GitHub's own
//! resolution conventions: main-repo files live logically under
//! `<base>/blob/<branch>/`, wiki pages are root-relative in the wiki
//! repository, and the wiki home page aliases the main repository root.

use serde::Serialize;
use thiserror::Error;

use crate::link::{LinkKind, LinkRef};
use crate::matcher::pattern;
use crate::paths;
use crate::resolver::{ProjectResolver, GITHUB_LINKS};

/// How strictly the compiled pattern should match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Exact GitHub semantics
    #[default]
    Strict,
    /// Best-effort: subdirectory descent, inferred extensions, sloppy prefixes
    Loose,
    /// Interactive completion: the filename is unconstrained; implies loose
    Completion,
}

impl MatchMode {
    pub fn is_loose(self) -> bool {
        matches!(self, MatchMode::Loose | MatchMode::Completion)
    }

    pub fn is_completion(self) -> bool {
        matches!(self, MatchMode::Completion)
    }
}

/// Why a compilation request could not be serviced
///
/// An unmatchable link is not an error; it is reported as an absent pattern
/// in [`CompilationResult`].
#[derive(Debug, Error)]
pub enum MatchError {
    /// The project resolver has no base path for the document
    #[error("project resolver returned no base path for '{document}'")]
    MissingBasePath { document: String },

    /// A generated pattern failed to compile
    #[error("generated pattern failed to compile: {0}")]
    BadPattern(#[from] regex::Error),
}

/// The outcome of compiling one link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompilationResult {
    /// The anchored pattern, or `None` when the link cannot resolve to any
    /// path under the requested mode
    pub pattern: Option<String>,

    /// The literal path prefix every matching path starts with,
    /// slash-terminated when non-empty
    pub fixed_prefix: String,

    /// True when the link targets a reserved GitHub endpoint (issues,
    /// pulls, ...) rather than a file
    pub targets_github_feature: bool,
}

impl CompilationResult {
    fn unmatchable() -> Self {
        CompilationResult {
            pattern: None,
            fixed_prefix: String::new(),
            targets_github_feature: false,
        }
    }

    pub fn is_matchable(&self) -> bool {
        self.pattern.is_some()
    }

    /// Compile the pattern case-insensitively
    pub fn regex(&self) -> Result<Option<regex::Regex>, MatchError> {
        match &self.pattern {
            Some(pattern) => {
                let re = regex::RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()?;
                Ok(Some(re))
            }
            None => Ok(None),
        }
    }
}

/// Compile a link reference into a path-matching pattern
///
/// The base path comes from the resolver; a missing or empty base is a
/// precondition violation reported as [`MatchError::MissingBasePath`].
pub fn compile(
    link: &LinkRef<'_>,
    resolver: &dyn ProjectResolver,
    mode: MatchMode,
) -> Result<CompilationResult, MatchError> {
    let base = resolver
        .vcs_base_path(link.containing_document())
        .filter(|base| !base.is_empty())
        .unwrap_or_else(|| resolver.project_base_path());
    let base = paths::suffix_with(paths::clean_full_path(&base), '/');
    if base.is_empty() {
        return Err(MatchError::MissingBasePath {
            document: link.containing_document().file_path().to_string(),
        });
    }

    let compiler = Compiler { link, mode, base };
    Ok(compiler.run())
}

struct Compiler<'a> {
    link: &'a LinkRef<'a>,
    mode: MatchMode,
    base: String,
}

impl Compiler<'_> {
    fn run(&self) -> CompilationResult {
        match self.link.kind() {
            LinkKind::Wiki => self.compile_wiki(),
            LinkKind::Plain | LinkKind::Image => self.compile_repo(),
        }
    }

    /// Wiki references: pages live logically in the wiki root, physically
    /// anywhere under the wiki repository directory
    fn compile_wiki(&self) -> CompilationResult {
        let link = self.link;
        let doc = link.containing_document();
        let loose = self.mode.is_loose();

        let resolvable = loose
            || link.file_path().is_empty()
            || (link.path().is_empty() && doc.is_wiki_page());
        if !resolvable {
            return CompilationResult::unmatchable();
        }

        let filename_pattern = if self.mode.is_completion() {
            self.quote("", false, true)
        } else {
            let name = if !link.file_path().is_empty() {
                link.file_name_no_ext()
            } else if !link.has_anchor() {
                ""
            } else {
                doc.file_name_no_ext()
            };
            self.quote(name, false, !link.has_anchor())
        };

        let anchor_pattern = self.quote(&link.anchor_text(), true, false);
        let extension_pattern = self.extension_pattern(loose || !link.has_ext(), true, true);

        let fixed_prefix = paths::suffix_with(doc.wiki_dir(), '/');
        let mut pattern = String::from("^");
        pattern.push_str(&self.quote(&fixed_prefix, false, false));
        if loose || !link.has_ext() {
            pattern.push_str(pattern::ANY_SUBDIR);
        }
        pattern.push_str(&filename_pattern);
        pattern.push_str(&anchor_pattern);
        pattern.push_str(&extension_pattern);
        pattern.push('$');

        CompilationResult {
            pattern: Some(pattern),
            fixed_prefix,
            targets_github_feature: false,
        }
    }

    /// Plain and image references: main-repo files, wiki-repo files, or
    /// reserved GitHub endpoints
    fn compile_repo(&self) -> CompilationResult {
        let link = self.link;
        let doc = link.containing_document();
        let loose = self.mode.is_loose();
        let base = &self.base;

        let repo_prefix = format!("{base}blob/master/");
        let wiki_prefix = format!("{base}wiki/");

        let mut filename_pattern = if self.mode.is_completion() {
            self.quote("", false, true)
        } else if link.file_path().is_empty() {
            self.quote(doc.file_name_no_ext(), false, false)
        } else {
            self.quote(link.file_name_no_ext(), false, false)
        };

        let mut prefix_path;
        if doc.is_wiki_page() {
            // Pages of the wiki repo resolve root-relative to the wiki. The
            // home page is the exception: GitHub treats it as if it lived in
            // the main repository root, always for images and also for
            // extension-bearing links already rooted at wiki/.
            let home_aliased = doc.is_wiki_home_page()
                && (link.kind() == LinkKind::Image
                    || (link.has_ext() && link.path().starts_with("wiki/")));
            if home_aliased {
                prefix_path = paths::suffix_with(&paths::append(base, link.path()), '/');
            } else {
                prefix_path = paths::suffix_with(&paths::append(&wiki_prefix, link.path()), '/');
                if loose {
                    // correct for an unnecessary doubled wiki/
                    let doubled = format!("{wiki_prefix}wiki/");
                    if prefix_path.starts_with(&doubled) {
                        prefix_path = format!("{wiki_prefix}{}", &prefix_path[doubled.len()..]);
                    }
                }
            }
        } else {
            // Main-repo files sit logically under blob/<branch>/; relative
            // links back out of it to reach wiki pages or GitHub endpoints.
            prefix_path = paths::suffix_with(&paths::append(&repo_prefix, link.path()), '/');

            let names_wiki = if loose {
                link.file_name_no_ext().eq_ignore_ascii_case("wiki")
            } else {
                link.file_name_no_ext() == "wiki"
            };
            if prefix_path == *base && names_wiki {
                // a bare "wiki" link from the main repo is the wiki home page
                prefix_path.push_str("wiki/");
                if !self.mode.is_completion() {
                    filename_pattern = self.quote("Home", false, false);
                }
            }
        }

        let mut wiki_pages = false;
        let mut targets_github_feature = false;

        if prefix_path.starts_with(&wiki_prefix) {
            // targeting a file in the wiki repo; extensionless non-image
            // targets are logical wiki pages
            wiki_pages = link.kind() != LinkKind::Image && !link.has_ext();
            if wiki_pages && !loose && prefix_path != wiki_prefix {
                // wiki pages ignore subdirectories, so a page link carrying
                // one matches nothing in strict mode
                return CompilationResult::unmatchable();
            }

            // rewrite to the physical wiki directory next to the project
            // base, named after it with .wiki appended
            let base_dir = paths::clean_full_path(base);
            prefix_path = format!(
                "{}/{}.wiki/{}",
                base_dir,
                paths::name_no_ext(base_dir),
                &prefix_path[wiki_prefix.len()..]
            );
        } else if let Some(rest) = prefix_path.strip_prefix(&repo_prefix).map(str::to_string) {
            // a master-branch file, physically at the repo root
            prefix_path = format!("{base}{rest}");
        } else if let Some(rest) = branch_remainder(&prefix_path, base).map(str::to_string) {
            // same under some other branch or tag
            prefix_path = format!("{base}{rest}");
        } else {
            // only the project base itself is left; anything but a reserved
            // GitHub endpoint there matches nothing
            if loose {
                if !prefix_path.eq_ignore_ascii_case(base) {
                    let dangling = format!("{base}blob/");
                    if !prefix_path.eq_ignore_ascii_case(&dangling) {
                        return CompilationResult::unmatchable();
                    }
                    prefix_path = base.clone();
                }
            } else if prefix_path != *base {
                return CompilationResult::unmatchable();
            }

            if !link.file_path().is_empty() && !GITHUB_LINKS.contains(&link.file_name()) {
                return CompilationResult::unmatchable();
            }
            targets_github_feature = true;
        }

        let mut anchor_pattern = String::new();
        let mut extension_pattern = String::new();
        if wiki_pages {
            anchor_pattern = self.quote(&link.anchor_text(), true, false);
            extension_pattern = self.extension_pattern(true, true, true);
        } else if loose || link.has_ext() || link.file_path().is_empty() {
            // for an extensionless link the loose default-extension group is
            // an inference, so it must stay optional: loose matches may only
            // ever grow the strict match set
            extension_pattern = self.extension_pattern(loose, false, loose && !link.has_ext());
        }

        let fixed_prefix = paths::suffix_with(&prefix_path, '/');
        let mut pattern = String::from("^");
        pattern.push_str(&self.quote(&fixed_prefix, false, false));
        if wiki_pages || (loose && !link.file_path().is_empty()) {
            pattern.push_str(pattern::ANY_SUBDIR);
        }
        pattern.push_str(&filename_pattern);
        pattern.push_str(&anchor_pattern);
        pattern.push_str(&extension_pattern);
        pattern.push('$');

        CompilationResult {
            pattern: Some(pattern),
            fixed_prefix,
            targets_github_feature,
        }
    }

    /// Alternation of the extensions the target may carry
    ///
    /// Folds the kind's default set when requested, the link's own literal
    /// extension (the containing document's when the link has no file path)
    /// when not already covered, and optionally an anchor-derived
    /// alternative.
    fn extension_pattern(
        &self,
        use_default_ext: bool,
        add_anchor_ext: bool,
        is_optional: bool,
    ) -> String {
        let link = self.link;
        let type_extensions: &[&str] = if use_default_ext {
            link.link_extensions()
        } else {
            &[]
        };
        let link_ext = if !link.file_path().is_empty() {
            link.ext()
        } else {
            link.containing_document().ext()
        };

        let mut covered = false;
        let mut alternation = pattern::Alternation::new();
        for ext in type_extensions {
            alternation.push(self.quote_ext(ext));
            if ext.eq_ignore_ascii_case(link_ext) {
                covered = true;
            }
        }
        if !covered && !link_ext.is_empty() {
            alternation.push(self.quote_ext(link_ext));
        }
        if add_anchor_ext && link.has_anchor() {
            alternation.push(self.quote(&link.anchor_text(), true, false));
        }

        alternation.into_group(is_optional)
    }

    fn quote_ext(&self, ext: &str) -> String {
        self.quote(&paths::prefix_with(ext, '.'), false, false)
    }

    /// Quote literal path text for this link's kind
    ///
    /// Wiki references fold `-` and space into each other; everything else
    /// is URL-decoded first so percent-escaped targets match decoded paths.
    fn quote(&self, text: &str, is_optional: bool, empty_matches_all: bool) -> String {
        if text.is_empty() {
            return if empty_matches_all {
                pattern::MATCH_ANYTHING.to_string()
            } else {
                String::new()
            };
        }

        let body = match self.link.kind() {
            LinkKind::Wiki => pattern::literal_folding_spaces(text),
            LinkKind::Plain | LinkKind::Image => pattern::literal(&paths::url_decode(text)),
        };
        if is_optional {
            pattern::optional(&body)
        } else {
            body
        }
    }
}

/// Remainder of `prefix_path` after `<base>blob/<ref>/` for any non-empty ref
fn branch_remainder<'p>(prefix_path: &'p str, base: &str) -> Option<&'p str> {
    let rest = prefix_path.strip_prefix(base)?.strip_prefix("blob/")?;
    match rest.find('/') {
        Some(pos) if pos > 0 => Some(&rest[pos + 1..]),
        _ => None,
    }
}
