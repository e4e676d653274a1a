use serde::Deserialize;
use std::collections::BTreeMap;

/// TOML-deserializable config file. All fields are Option for layered merging.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub defaults: DefaultsFileConfig,
    #[serde(default)]
    pub resolver: ResolverFileConfig,
    #[serde(default)]
    pub types: TypesFileConfig,
    #[serde(default)]
    pub docs: DocsFileConfig,
    #[serde(default)]
    pub templates: BTreeMap<String, TemplateFileConfig>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct DefaultsFileConfig {
    pub format: Option<String>,
    pub quiet: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ResolverFileConfig {
    pub implicit_root: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TypesFileConfig {
    pub builtin: Option<bool>,
    #[serde(default)]
    pub class_lists: Vec<String>,
    #[serde(default)]
    pub source_roots: Vec<String>,
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct DocsFileConfig {
    pub all_classes_url: Option<String>,
    /// Tried in order; the first source covering a package wins
    #[serde(default)]
    pub sources: Vec<DocSourceFileConfig>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct DocSourceFileConfig {
    pub name: String,
    pub base_url: Option<String>,
    #[serde(default)]
    pub packages: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemplateFileConfig {
    pub prefix: String,
    pub suffix: String,
}

impl FileConfig {
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
