use crate::config::ResolvedConfig;
use std::io::Write;

/// Render `config show` output, optionally limited to one section.
pub fn render_show<W: Write>(
    w: &mut W,
    config: &ResolvedConfig,
    section: Option<&str>,
) -> std::io::Result<()> {
    if config.loaded_files.is_empty() {
        writeln!(w, "Loaded config files: (none)")?;
    } else {
        writeln!(w, "Loaded config files:")?;
        for (i, path) in config.loaded_files.iter().enumerate() {
            writeln!(w, "  {}. {}", i + 1, path.display())?;
        }
    }
    writeln!(w)?;

    let entries = match section {
        Some(section) => {
            let prefix = format!("{}.", section.trim_end_matches('.'));
            let mut entries = config.provenance.entries_with_prefix(&prefix);
            // Single-key sections like `templates`
            if let Some(source) = config.provenance.get(section) {
                entries.insert(0, (section, source));
            }
            entries
        }
        None => config.provenance.sorted_entries(),
    };

    if entries.is_empty() {
        if let Some(section) = section {
            writeln!(w, "Unknown config section: {section}")?;
            writeln!(
                w,
                "Available sections: defaults, resolver, types, docs, templates"
            )?;
        }
        return Ok(());
    }

    writeln!(w, "Resolved settings:")?;
    for (key, source) in entries {
        let value = get_value_for_key(config, key);
        writeln!(w, "  {}: {} <- {}", key, value, source)?;
    }

    Ok(())
}

fn list<T: std::fmt::Display>(items: &[T]) -> String {
    if items.is_empty() {
        return "[]".to_string();
    }
    let joined: Vec<String> = items.iter().map(|i| i.to_string()).collect();
    format!("[{}]", joined.join(", "))
}

fn get_value_for_key(config: &ResolvedConfig, key: &str) -> String {
    match key {
        "defaults.format" => config.format.to_string(),
        "defaults.quiet" => config.quiet.to_string(),
        "resolver.implicit_root" => config.implicit_root.clone(),
        "types.builtin" => config.types.builtin.to_string(),
        "types.class_lists" => {
            let paths: Vec<_> = config.types.class_lists.iter().map(|p| p.display()).collect();
            list(&paths)
        }
        "types.source_roots" => {
            let paths: Vec<_> = config.types.source_roots.iter().map(|p| p.display()).collect();
            list(&paths)
        }
        "types.include" => list(&config.types.include),
        "types.exclude" => list(&config.types.exclude),
        "docs.all_classes_url" => config.docs.all_classes_url.clone(),
        "docs.sources" => {
            let sources: Vec<String> = config
                .docs
                .sources
                .iter()
                .map(|s| format!("{} {} {}", s.name, s.base_url, list(&s.packages)))
                .collect();
            list(&sources)
        }
        "templates" => {
            let names: Vec<&String> = config.templates.keys().collect();
            list(&names)
        }
        _ => "(unknown)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::provenance::{ProvenanceMap, Source};
    use std::path::PathBuf;

    fn make_test_config() -> ResolvedConfig {
        let mut prov = ProvenanceMap::new();
        prov.set("defaults.format", Source::Default);
        prov.set("defaults.quiet", Source::Default);
        prov.set(
            "types.builtin",
            Source::ProjectConfig(PathBuf::from("/project/.docsearch.toml")),
        );
        prov.set("types.class_lists", Source::Default);
        prov.set("templates", Source::Default);

        let mut config = ResolvedConfig::default();
        config.types.builtin = false;
        config.provenance = prov;
        config.loaded_files = vec![PathBuf::from("/project/.docsearch.toml")];
        config
    }

    #[test]
    fn render_show_format() {
        let config = make_test_config();
        let mut buf = Vec::new();
        render_show(&mut buf, &config, None).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert!(output.contains("Loaded config files:"));
        assert!(output.contains("/project/.docsearch.toml"));
        assert!(output.contains("Resolved settings:"));
        assert!(output.contains("defaults.format: text <- default"));
        assert!(output.contains("types.builtin: false <- project config"));
        assert!(output.contains("templates: [parse-int, sout] <- default"));
    }

    #[test]
    fn render_show_no_files() {
        let mut config = make_test_config();
        config.loaded_files.clear();
        let mut buf = Vec::new();
        render_show(&mut buf, &config, None).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert!(output.contains("Loaded config files: (none)"));
    }

    #[test]
    fn render_single_section() {
        let config = make_test_config();
        let mut buf = Vec::new();
        render_show(&mut buf, &config, Some("types")).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert!(output.contains("types.builtin"));
        assert!(output.contains("types.class_lists: [] <- default"));
        assert!(!output.contains("defaults.format"));
    }

    #[test]
    fn render_unknown_section() {
        let config = make_test_config();
        let mut buf = Vec::new();
        render_show(&mut buf, &config, Some("nonexistent")).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert!(output.contains("Unknown config section: nonexistent"));
    }
}
