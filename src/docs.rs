use crate::config::ResolvedConfig;
use crate::errors::Result;
use crate::oracle::TypeInfo;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::io::Write;
use url::Url;

pub const DEFAULT_DOCS_URL: &str = "https://docs.oracle.com/javase/7/docs/api/";
pub const DEFAULT_ALL_CLASSES_URL: &str =
    "https://docs.oracle.com/javase/7/docs/api/allclasses-noframe.html";
pub const DEFAULT_DOC_PACKAGES: &[&str] = &["java.*", "javax.*"];

/// A documentation site covering the packages matching `patterns`.
#[derive(Debug, Clone)]
pub struct DocSource {
    pub name: String,
    pub base_url: Url,
    pub patterns: Vec<String>,
    matcher: GlobSet,
}

impl DocSource {
    pub fn new(name: impl Into<String>, base_url: &str, patterns: &[String]) -> Result<Self> {
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            builder.add(Glob::new(pattern)?);
        }

        Ok(Self {
            name: name.into(),
            base_url: Url::parse(&base)?,
            patterns: patterns.to_vec(),
            matcher: builder.build()?,
        })
    }

    /// The JDK javadoc source used when nothing is configured.
    pub fn jdk(base_url: &str) -> Result<Self> {
        let patterns: Vec<String> = DEFAULT_DOC_PACKAGES.iter().map(|p| p.to_string()).collect();
        Self::new("jdk", base_url, &patterns)
    }

    pub fn covers(&self, package: &str) -> bool {
        !package.is_empty() && self.matcher.is_match(package)
    }

    /// Javadoc page for `info`: `java/util/Map.Entry.html`.
    pub fn page_url(&self, info: &TypeInfo) -> Result<Url> {
        let page = format!(
            "{}/{}.html",
            info.package.replace('.', "/"),
            info.nested_path
        );
        Ok(self.base_url.join(&page)?)
    }
}

/// Page for `info` from the first source covering its package.
/// `None` means no supported documentation exists for it.
pub fn page_url(sources: &[DocSource], info: &TypeInfo) -> Option<Url> {
    let source = sources.iter().find(|s| s.covers(&info.package))?;
    match source.page_url(info) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::warn!("could not build {} page for {}: {e}", source.name, info.canonical_name());
            None
        }
    }
}

/// The all-classes index page.
pub fn all_classes_url(config: &ResolvedConfig) -> Result<Url> {
    Ok(Url::parse(&config.docs.all_classes_url)?)
}

/// Something that can show a documentation page.
pub trait NavigationSink {
    fn navigate(&mut self, url: &Url);
}

/// Opens pages in the system browser. Failures are logged and ignored.
#[derive(Debug, Default)]
pub struct BrowserSink;

impl NavigationSink for BrowserSink {
    fn navigate(&mut self, url: &Url) {
        if let Err(e) = open::that(url.as_str()) {
            tracing::warn!("could not open {url}: {e}");
        }
    }
}

/// Writes each page URL on its own line instead of opening it.
pub struct PrintSink<W: Write> {
    writer: W,
}

impl<W: Write> PrintSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> NavigationSink for PrintSink<W> {
    fn navigate(&mut self, url: &Url) {
        if let Err(e) = writeln!(self.writer, "{url}") {
            tracing::warn!("could not write {url}: {e}");
        }
    }
}

/// Passive warnings shown to the user; never errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    NoSuchClass { query: String },
    NoDocumentation { fqn: String },
    NothingSelected { position: String },
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::NoSuchClass { query } => write!(f, "No such class found: {query}"),
            Notice::NoDocumentation { fqn } => {
                write!(f, "No supported documentation for this class found: {fqn}")
            }
            Notice::NothingSelected { position } => {
                write!(f, "No identifier under the caret at {position}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::TypeOrigin;

    fn info(package: &str, nested: &str) -> TypeInfo {
        TypeInfo::new(package, nested, TypeOrigin::Builtin)
    }

    #[test]
    fn jdk_page_urls() {
        let sources = vec![DocSource::jdk(DEFAULT_DOCS_URL).unwrap()];
        let url = page_url(&sources, &info("java.util", "List")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://docs.oracle.com/javase/7/docs/api/java/util/List.html"
        );

        let url = page_url(&sources, &info("java.util", "Map.Entry")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://docs.oracle.com/javase/7/docs/api/java/util/Map.Entry.html"
        );
    }

    #[test]
    fn unsupported_package_has_no_page() {
        let sources = vec![DocSource::jdk(DEFAULT_DOCS_URL).unwrap()];
        assert!(page_url(&sources, &info("com.acme", "Widget")).is_none());
        assert!(page_url(&sources, &info("", "Main")).is_none());
    }

    #[test]
    fn first_matching_source_wins() {
        let sources = vec![
            DocSource::new(
                "acme",
                "https://docs.acme.dev/api",
                &["com.acme.*".to_string()],
            )
            .unwrap(),
            DocSource::jdk(DEFAULT_DOCS_URL).unwrap(),
        ];
        let url = page_url(&sources, &info("com.acme.core", "Widget")).unwrap();
        assert_eq!(url.as_str(), "https://docs.acme.dev/api/com/acme/core/Widget.html");
    }

    #[test]
    fn bad_glob_or_url_is_an_error() {
        assert!(DocSource::new("x", "not a url", &[]).is_err());
        assert!(DocSource::new("x", DEFAULT_DOCS_URL, &["java.[".to_string()]).is_err());
    }

    #[test]
    fn print_sink_writes_lines() {
        let mut sink = PrintSink::new(Vec::new());
        sink.navigate(&Url::parse(DEFAULT_ALL_CLASSES_URL).unwrap());
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, format!("{DEFAULT_ALL_CLASSES_URL}\n"));
    }

    #[test]
    fn notice_text() {
        let notice = Notice::NoSuchClass {
            query: "Foo".to_string(),
        };
        assert_eq!(notice.to_string(), "No such class found: Foo");
    }
}
