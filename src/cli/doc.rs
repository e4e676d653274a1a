use crate::cli::{load_catalog, load_config, notify, CatalogArgs, OutputArgs};
use crate::config::ResolvedConfig;
use crate::docs::{self, BrowserSink, DocSource, NavigationSink, Notice, PrintSink};
use crate::editor::selection::select_qualified_name;
use crate::editor::{Buffer, Position};
use crate::errors::Result;
use crate::oracle::TypeOracle;
use crate::parse::{build_index, resolve, ImportIndex};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DocArgs {
    /// Java source file, or `-` for stdin
    pub file: PathBuf,

    /// Caret position (LINE:COL); repeat for several carets
    #[arg(long = "at", value_name = "LINE:COL", required = true)]
    pub positions: Vec<Position>,

    /// Print page URLs instead of opening a browser
    #[arg(long)]
    pub print: bool,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(args: &DocArgs) -> Result<()> {
    let config = load_config(&args.output, Some(&args.catalog))?;
    let buffer = Buffer::read(&args.file)?;
    let catalog = load_catalog(&config)?;
    let sources = config.doc_sources()?;
    let index = build_index(buffer.text(), &config.implicit_root);

    let mut sink: Box<dyn NavigationSink> = if args.print {
        Box::new(PrintSink::new(std::io::stdout()))
    } else {
        Box::new(BrowserSink)
    };

    for &pos in &args.positions {
        let offset = buffer.offset_of(pos)?;
        open_documentation(
            &config,
            &buffer,
            offset,
            pos,
            &index,
            &catalog,
            &sources,
            sink.as_mut(),
        );
    }
    Ok(())
}

/// Look up the name under one caret and navigate to its page.
/// Every miss is reported as a notice; none of them is an error.
#[allow(clippy::too_many_arguments)]
fn open_documentation(
    config: &ResolvedConfig,
    buffer: &Buffer,
    offset: usize,
    pos: Position,
    index: &ImportIndex,
    oracle: &dyn TypeOracle,
    sources: &[DocSource],
    sink: &mut dyn NavigationSink,
) {
    let selection = select_qualified_name(buffer.text(), offset);
    if selection.is_empty() {
        notify(
            config,
            &Notice::NothingSelected {
                position: pos.to_string(),
            },
        );
        return;
    }

    let query = selection.text(buffer.text());
    let Some(resolved) = resolve(query, index, oracle) else {
        notify(
            config,
            &Notice::NoSuchClass {
                query: crate::parse::resolver::normalize_query(query),
            },
        );
        return;
    };

    match docs::page_url(sources, &resolved.info) {
        Some(url) => {
            tracing::debug!(fqn = %resolved.fqn, %url, "navigating");
            sink.navigate(&url);
        }
        None => notify(config, &Notice::NoDocumentation { fqn: resolved.fqn }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::DEFAULT_DOCS_URL;
    use crate::oracle::TypeCatalog;
    use url::Url;

    #[derive(Default)]
    struct Collect(Vec<String>);

    impl NavigationSink for Collect {
        fn navigate(&mut self, url: &Url) {
            self.0.push(url.to_string());
        }
    }

    fn visit(source: &str, pos: Position) -> Vec<String> {
        let config = ResolvedConfig {
            quiet: true,
            ..ResolvedConfig::default()
        };
        let buffer = Buffer::new(source);
        let index = build_index(buffer.text(), &config.implicit_root);
        let sources = vec![DocSource::jdk(DEFAULT_DOCS_URL).unwrap()];
        let catalog = TypeCatalog::builtin();
        let mut sink = Collect::default();
        let offset = buffer.offset_of(pos).unwrap();
        open_documentation(
            &config, &buffer, offset, pos, &index, &catalog, &sources, &mut sink,
        );
        sink.0
    }

    #[test]
    fn navigates_to_imported_class() {
        let urls = visit("import java.util.Map;\nclass A { Map m; }\n", Position::new(2, 12));
        assert_eq!(
            urls,
            vec!["https://docs.oracle.com/javase/7/docs/api/java/util/Map.html"]
        );
    }

    #[test]
    fn nested_qualified_name() {
        let urls = visit("class A { java.util.Map.Entry e; }\n", Position::new(1, 27));
        assert_eq!(
            urls,
            vec!["https://docs.oracle.com/javase/7/docs/api/java/util/Map.Entry.html"]
        );
    }

    #[test]
    fn unknown_class_does_not_navigate() {
        let urls = visit("class A { Bogus b; }\n", Position::new(1, 12));
        assert!(urls.is_empty());
    }

    #[test]
    fn caret_on_whitespace_does_not_navigate() {
        let urls = visit("class A {   }\n", Position::new(1, 11));
        assert!(urls.is_empty());
    }
}
