use crate::config::provenance::{ProvenanceMap, Source};
use crate::config::schema::FileConfig;
use crate::config::{DocSourceEntry, ResolvedConfig};
use crate::editor::wrap::WrapTemplate;
use crate::errors::{DocsearchError, Result};
use crate::output::OutputFormat;
use std::path::{Path, PathBuf};

pub const PROJECT_CONFIG_FILE: &str = ".docsearch.toml";

/// CLI overrides extracted from command arguments.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub format: Option<OutputFormat>,
    pub quiet: bool,
    pub no_builtin: bool,
    pub class_lists: Vec<PathBuf>,
    pub source_roots: Vec<PathBuf>,
}

/// Resolve configuration by applying layers bottom-up:
/// 1. Built-in defaults
/// 2. User config (~/.config/docsearch/config.toml)
/// 3. Project config (nearest .docsearch.toml walking up from working_dir)
/// 4. Environment variables
/// 5. CLI overrides
pub fn resolve_config(working_dir: &Path, cli: &CliOverrides) -> Result<ResolvedConfig> {
    let mut prov = ProvenanceMap::new();
    let mut loaded_files = Vec::new();

    // 1. Start with built-in defaults
    let mut config = ResolvedConfig::default();
    set_all_default_provenance(&mut prov);

    // 2. User config
    if let Some(user_config_path) = find_user_config() {
        if user_config_path.exists() {
            let file_config = read_file_config(&user_config_path, "user")?;
            apply_file_config(
                &mut config,
                &file_config,
                &user_config_path,
                Source::UserConfig(user_config_path.clone()),
                &mut prov,
            )?;
            loaded_files.push(user_config_path);
        }
    }

    // 3. Project config (walk up from working_dir)
    if let Some(project_config_path) = find_project_config(working_dir) {
        let file_config = read_file_config(&project_config_path, "project")?;
        apply_file_config(
            &mut config,
            &file_config,
            &project_config_path,
            Source::ProjectConfig(project_config_path.clone()),
            &mut prov,
        )?;
        loaded_files.push(project_config_path);
    }

    // 4. Environment variables
    apply_env_vars(&mut config, &mut prov)?;

    // 5. CLI overrides
    apply_cli_overrides(&mut config, cli, &mut prov);

    config.ignore_patterns = crate::config::ignore::load_docsearchignore(working_dir);
    config.provenance = prov;
    config.loaded_files = loaded_files;

    Ok(config)
}

fn read_file_config(path: &Path, label: &str) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path).map_err(|_| {
        DocsearchError::Config(format!(
            "Could not read {label} config: {}",
            path.display()
        ))
    })?;
    FileConfig::from_toml(&content)
        .map_err(|e| DocsearchError::Config(format!("Invalid {label} config: {e}")))
}

fn find_user_config() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("docsearch").join("config.toml"))
}

fn find_project_config(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let config_path = dir.join(PROJECT_CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

fn set_all_default_provenance(prov: &mut ProvenanceMap) {
    let defaults = [
        "defaults.format",
        "defaults.quiet",
        "resolver.implicit_root",
        "types.builtin",
        "types.class_lists",
        "types.source_roots",
        "types.include",
        "types.exclude",
        "docs.all_classes_url",
        "docs.sources",
        "templates",
    ];
    for key in defaults {
        prov.set(key, Source::Default);
    }
}

/// Paths in a config file are relative to the file's directory.
fn relative_to(config_path: &Path, value: &str) -> PathBuf {
    let path = PathBuf::from(value);
    if path.is_absolute() {
        return path;
    }
    config_path
        .parent()
        .map_or_else(|| path.clone(), |dir| dir.join(&path))
}

fn apply_file_config(
    config: &mut ResolvedConfig,
    file: &FileConfig,
    config_path: &Path,
    source: Source,
    prov: &mut ProvenanceMap,
) -> Result<()> {
    // Defaults
    if let Some(ref format) = file.defaults.format {
        config.format = format
            .parse()
            .map_err(|e| DocsearchError::Config(format!("defaults.format: {e}")))?;
        prov.set("defaults.format", source.clone());
    }
    if let Some(quiet) = file.defaults.quiet {
        config.quiet = quiet;
        prov.set("defaults.quiet", source.clone());
    }

    // Resolver
    if let Some(ref root) = file.resolver.implicit_root {
        config.implicit_root = root.clone();
        prov.set("resolver.implicit_root", source.clone());
    }

    // Types
    if let Some(builtin) = file.types.builtin {
        config.types.builtin = builtin;
        prov.set("types.builtin", source.clone());
    }
    if !file.types.class_lists.is_empty() {
        config.types.class_lists = file
            .types
            .class_lists
            .iter()
            .map(|p| relative_to(config_path, p))
            .collect();
        prov.set("types.class_lists", source.clone());
    }
    if !file.types.source_roots.is_empty() {
        config.types.source_roots = file
            .types
            .source_roots
            .iter()
            .map(|p| relative_to(config_path, p))
            .collect();
        prov.set("types.source_roots", source.clone());
    }
    if !file.types.include.is_empty() {
        config.types.include = file.types.include.clone();
        prov.set("types.include", source.clone());
    }
    if !file.types.exclude.is_empty() {
        config.types.exclude = file.types.exclude.clone();
        prov.set("types.exclude", source.clone());
    }

    // Docs
    if let Some(ref url) = file.docs.all_classes_url {
        config.docs.all_classes_url = url.clone();
        prov.set("docs.all_classes_url", source.clone());
    }
    if !file.docs.sources.is_empty() {
        let mut added = Vec::new();
        for entry in &file.docs.sources {
            match config.docs.sources.iter_mut().find(|s| s.name == entry.name) {
                Some(existing) => {
                    if let Some(ref url) = entry.base_url {
                        existing.base_url = url.clone();
                    }
                    if !entry.packages.is_empty() {
                        existing.packages = entry.packages.clone();
                    }
                }
                None => {
                    let base_url = entry.base_url.clone().ok_or_else(|| {
                        DocsearchError::Config(format!(
                            "docs source {:?} needs a base_url",
                            entry.name
                        ))
                    })?;
                    added.push(DocSourceEntry {
                        name: entry.name.clone(),
                        base_url,
                        packages: entry.packages.clone(),
                    });
                }
            }
        }
        // New sources take precedence over the ones already known
        config.docs.sources.splice(0..0, added);
        prov.set("docs.sources", source.clone());
    }

    // Templates
    if !file.templates.is_empty() {
        for (name, template) in &file.templates {
            config.templates.insert(
                name.clone(),
                WrapTemplate::new(template.prefix.clone(), template.suffix.clone()),
            );
        }
        prov.set("templates", source);
    }

    Ok(())
}

fn apply_env_vars(config: &mut ResolvedConfig, prov: &mut ProvenanceMap) -> Result<()> {
    if let Ok(val) = std::env::var("DOCSEARCH_FORMAT") {
        config.format = val
            .parse()
            .map_err(|e| DocsearchError::Config(format!("DOCSEARCH_FORMAT: {e}")))?;
        prov.set("defaults.format", Source::EnvVar("DOCSEARCH_FORMAT".into()));
    }
    if let Ok(val) = std::env::var("DOCSEARCH_QUIET") {
        config.quiet = val == "1" || val.eq_ignore_ascii_case("true");
        prov.set("defaults.quiet", Source::EnvVar("DOCSEARCH_QUIET".into()));
    }
    if let Ok(val) = std::env::var("DOCSEARCH_IMPLICIT_ROOT") {
        config.implicit_root = val;
        prov.set(
            "resolver.implicit_root",
            Source::EnvVar("DOCSEARCH_IMPLICIT_ROOT".into()),
        );
    }
    if let Ok(val) = std::env::var("DOCSEARCH_DOCS_URL") {
        if let Some(jdk) = config.docs.sources.iter_mut().find(|s| s.name == "jdk") {
            jdk.base_url = val;
            prov.set("docs.sources", Source::EnvVar("DOCSEARCH_DOCS_URL".into()));
        }
    }
    Ok(())
}

fn apply_cli_overrides(config: &mut ResolvedConfig, cli: &CliOverrides, prov: &mut ProvenanceMap) {
    if let Some(format) = cli.format {
        config.format = format;
        prov.set("defaults.format", Source::CliFlag("--format".into()));
    }
    if cli.quiet {
        config.quiet = true;
        prov.set("defaults.quiet", Source::CliFlag("--quiet".into()));
    }
    if cli.no_builtin {
        config.types.builtin = false;
        prov.set("types.builtin", Source::CliFlag("--no-builtin".into()));
    }
    if !cli.class_lists.is_empty() {
        config.types.class_lists = cli.class_lists.clone();
        prov.set("types.class_lists", Source::CliFlag("--class-list".into()));
    }
    if !cli.source_roots.is_empty() {
        config.types.source_roots = cli.source_roots.clone();
        prov.set("types.source_roots", Source::CliFlag("--source-root".into()));
    }
}
