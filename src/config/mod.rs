pub mod ignore;
pub mod provenance;
pub mod resolve;
pub mod schema;
pub mod show;

use crate::docs::{DocSource, DEFAULT_ALL_CLASSES_URL, DEFAULT_DOCS_URL, DEFAULT_DOC_PACKAGES};
use crate::editor::wrap::WrapTemplate;
use crate::errors::{DocsearchError, Result};
use crate::oracle::CatalogOptions;
use crate::output::OutputFormat;
use crate::parse::common::DEFAULT_IMPLICIT_ROOT;
use provenance::ProvenanceMap;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Fully resolved configuration with every layer applied.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    // Operational
    pub format: OutputFormat,
    pub quiet: bool,

    // Resolution
    pub implicit_root: String,
    pub types: ResolvedTypesConfig,

    // Navigation
    pub docs: ResolvedDocsConfig,

    // Editor actions
    pub templates: BTreeMap<String, WrapTemplate>,

    // From .docsearchignore
    pub ignore_patterns: Vec<String>,

    // Provenance
    pub provenance: ProvenanceMap,
    pub loaded_files: Vec<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ResolvedTypesConfig {
    pub builtin: bool,
    pub class_lists: Vec<PathBuf>,
    pub source_roots: Vec<PathBuf>,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl Default for ResolvedTypesConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            class_lists: Vec::new(),
            source_roots: Vec::new(),
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedDocsConfig {
    pub all_classes_url: String,
    pub sources: Vec<DocSourceEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocSourceEntry {
    pub name: String,
    pub base_url: String,
    pub packages: Vec<String>,
}

impl Default for ResolvedDocsConfig {
    fn default() -> Self {
        Self {
            all_classes_url: DEFAULT_ALL_CLASSES_URL.to_string(),
            sources: vec![DocSourceEntry {
                name: "jdk".to_string(),
                base_url: DEFAULT_DOCS_URL.to_string(),
                packages: DEFAULT_DOC_PACKAGES.iter().map(|p| p.to_string()).collect(),
            }],
        }
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let templates = [
            ("sout".to_string(), WrapTemplate::sout()),
            ("parse-int".to_string(), WrapTemplate::parse_int()),
        ]
        .into_iter()
        .collect();

        Self {
            format: OutputFormat::Text,
            quiet: false,
            implicit_root: DEFAULT_IMPLICIT_ROOT.to_string(),
            types: ResolvedTypesConfig::default(),
            docs: ResolvedDocsConfig::default(),
            templates,
            ignore_patterns: Vec::new(),
            provenance: ProvenanceMap::new(),
            loaded_files: Vec::new(),
        }
    }
}

impl ResolvedConfig {
    /// Options for building the type catalog; ignore-file patterns are
    /// folded into the excludes.
    pub fn catalog_options(&self) -> CatalogOptions {
        let mut exclude = self.types.exclude.clone();
        exclude.extend(self.ignore_patterns.iter().cloned());
        CatalogOptions {
            builtin: self.types.builtin,
            class_lists: self.types.class_lists.clone(),
            source_roots: self.types.source_roots.clone(),
            include: self.types.include.clone(),
            exclude,
            quiet: self.quiet,
        }
    }

    /// Compile the configured documentation sources, in lookup order.
    pub fn doc_sources(&self) -> Result<Vec<DocSource>> {
        self.docs
            .sources
            .iter()
            .map(|s| DocSource::new(s.name.clone(), &s.base_url, &s.packages))
            .collect()
    }

    pub fn template(&self, name: &str) -> Result<WrapTemplate> {
        self.templates
            .get(name)
            .cloned()
            .or_else(|| WrapTemplate::builtin(name))
            .ok_or_else(|| DocsearchError::UnknownTemplate {
                name: name.to_string(),
            })
    }
}
