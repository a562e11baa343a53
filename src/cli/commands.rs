//! CLI command implementations

use anyhow::{bail, Result};
use std::path::Path;
use walkdir::WalkDir;

use linkmatch::{
    compile, CompilationResult, DocumentRef, LinkKind, LinkRef, MatchMode, StaticResolver,
};

/// Turn the --image/--wiki flags into a link kind
pub fn link_kind(image: bool, wiki: bool) -> Result<LinkKind> {
    match (image, wiki) {
        (true, true) => bail!("--image and --wiki are mutually exclusive"),
        (true, false) => Ok(LinkKind::Image),
        (false, true) => Ok(LinkKind::Wiki),
        (false, false) => Ok(LinkKind::Plain),
    }
}

/// Compile a link and print the resulting pattern
pub fn pattern(
    base: &str,
    from: &str,
    target: &str,
    kind: LinkKind,
    mode: MatchMode,
    json: bool,
) -> Result<()> {
    let doc = DocumentRef::new(from);
    let link = LinkRef::from_target(kind, &doc, target);
    let result = compile(&link, &StaticResolver::new(base), mode)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    match &result.pattern {
        Some(pattern) => {
            println!("pattern: {pattern}");
            println!("prefix:  {}", result.fixed_prefix);
            if result.targets_github_feature {
                println!("target:  GitHub feature path");
            }
        }
        None => println!("link does not resolve to any path in this mode"),
    }

    Ok(())
}

/// Compile a link and list the files under `root` it resolves to
pub fn find(root: &Path, from: &str, target: &str, kind: LinkKind, mode: MatchMode) -> Result<()> {
    let base = root.to_string_lossy().replace('\\', "/");
    let doc = DocumentRef::new(from);
    let link = LinkRef::from_target(kind, &doc, target);
    let result = compile(&link, &StaticResolver::new(base), mode)?;

    let found = matching_paths(&result, root)?;
    if found.is_empty() {
        println!("no matching files");
    } else {
        for path in &found {
            println!("{path}");
        }
    }

    Ok(())
}

/// Walk `root` and collect the files whose slash-separated path the compiled
/// pattern accepts
fn matching_paths(result: &CompilationResult, root: &Path) -> Result<Vec<String>> {
    let Some(re) = result.regex()? else {
        return Ok(Vec::new());
    };

    let mut found = Vec::new();
    for entry in WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path().to_string_lossy().replace('\\', "/");
        if re.is_match(&path) {
            found.push(path);
        }
    }
    found.sort();

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_paths_walks_the_project() {
        let tmp = tempfile::TempDir::new().unwrap();
        let root = tmp.path();
        std::fs::create_dir_all(root.join("docs")).unwrap();
        std::fs::write(root.join("docs/intro.md"), "# Intro").unwrap();
        std::fs::write(root.join("docs/other.txt"), "other").unwrap();
        std::fs::write(root.join("README.md"), "[intro](docs/intro.md)").unwrap();

        let base = root.to_string_lossy().replace('\\', "/");
        let doc = DocumentRef::new(format!("{base}/README.md"));
        let link = LinkRef::from_target(LinkKind::Plain, &doc, "docs/intro.md");
        let result = compile(&link, &StaticResolver::new(base), MatchMode::Strict).unwrap();

        let found = matching_paths(&result, root).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("docs/intro.md"));
    }

    #[test]
    fn test_matching_paths_unmatchable_link_finds_nothing() {
        let tmp = tempfile::TempDir::new().unwrap();
        let root = tmp.path();
        std::fs::write(root.join("junk"), "").unwrap();

        let base = root.to_string_lossy().replace('\\', "/");
        let doc = DocumentRef::new(format!("{base}/README.md"));
        let link = LinkRef::from_target(LinkKind::Plain, &doc, "../../junk");
        let result = compile(&link, &StaticResolver::new(base), MatchMode::Strict).unwrap();

        assert!(!result.is_matchable());
        assert!(matching_paths(&result, root).unwrap().is_empty());
    }

    #[test]
    fn test_link_kind_flags() {
        assert_eq!(link_kind(false, false).unwrap(), LinkKind::Plain);
        assert_eq!(link_kind(true, false).unwrap(), LinkKind::Image);
        assert_eq!(link_kind(false, true).unwrap(), LinkKind::Wiki);
        assert!(link_kind(true, true).is_err());
    }
}
