use std::path::Path;

pub const IGNORE_FILE: &str = ".docsearchignore";

/// Load `.docsearchignore` by walking up from the given directory.
///
/// Patterns are gitignore-flavoured (blank lines and `#` comments skipped)
/// and returned as exclude globs for source-root scanning; a trailing `/`
/// excludes everything below that directory.
pub fn load_docsearchignore(start: &Path) -> Vec<String> {
    let mut dir = start.to_path_buf();
    loop {
        let ignore_path = dir.join(IGNORE_FILE);
        if ignore_path.exists() {
            match std::fs::read_to_string(&ignore_path) {
                Ok(content) => return parse_ignore_patterns(&content),
                Err(e) => tracing::warn!("could not read {}: {e}", ignore_path.display()),
            }
        }
        if !dir.pop() {
            break;
        }
    }
    Vec::new()
}

fn parse_ignore_patterns(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(|l| match l.strip_suffix('/') {
            Some(dir) => format!("{dir}/**"),
            None => l.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_patterns() {
        let content = r#"
# generated code
src/generated/**

*.gen.java
build/
"#;
        let patterns = parse_ignore_patterns(content);
        assert_eq!(patterns, vec!["src/generated/**", "*.gen.java", "build/**"]);
    }

    #[test]
    fn only_comments() {
        assert!(parse_ignore_patterns("# comment\n\n# another").is_empty());
    }

    #[test]
    fn load_from_parent_dir() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(IGNORE_FILE), "target/\n").unwrap();
        let nested = tmp.path().join("module");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(load_docsearchignore(&nested), vec!["target/**"]);
    }

    #[test]
    fn no_ignore_file() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(load_docsearchignore(tmp.path()).is_empty());
    }
}
