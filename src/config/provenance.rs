use std::collections::BTreeMap;
use std::path::PathBuf;

/// Configuration layer a value was last set by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Default,
    UserConfig(PathBuf),
    ProjectConfig(PathBuf),
    EnvVar(String),
    CliFlag(String),
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Default => write!(f, "default"),
            Source::UserConfig(path) => write!(f, "user config ({})", path.display()),
            Source::ProjectConfig(path) => write!(f, "project config ({})", path.display()),
            Source::EnvVar(name) => write!(f, "env var ({name})"),
            Source::CliFlag(flag) => write!(f, "CLI flag ({flag})"),
        }
    }
}

/// Dotted config key (`types.class_lists`) to the layer that set it.
#[derive(Debug, Clone, Default)]
pub struct ProvenanceMap {
    entries: BTreeMap<String, Source>,
}

impl ProvenanceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `source` for `key`, replacing whatever a lower layer set.
    pub fn set(&mut self, key: impl Into<String>, source: Source) {
        self.entries.insert(key.into(), source);
    }

    pub fn get(&self, key: &str) -> Option<&Source> {
        self.entries.get(key)
    }

    /// All entries, sorted by key.
    pub fn sorted_entries(&self) -> Vec<(&str, &Source)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v)).collect()
    }

    /// Entries of one section, e.g. `types.` or `docs.`.
    pub fn entries_with_prefix(&self, prefix: &str) -> Vec<(&str, &Source)> {
        self.entries
            .range(prefix.to_string()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.as_str(), v))
            .collect()
    }
}
