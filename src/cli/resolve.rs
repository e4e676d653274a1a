use crate::cli::{load_catalog, load_config, notify, CatalogArgs, OutputArgs};
use crate::docs::Notice;
use crate::editor::selection::select_qualified_name;
use crate::editor::{Buffer, Position};
use crate::errors::Result;
use crate::oracle::TypeOracle;
use crate::output::json::{CandidateOutcome, Resolution, ResolveOutput};
use crate::output::OutputFormat;
use crate::parse::resolver::{candidates, normalize_query, resolve};
use crate::parse::{build_index, ImportIndex};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Java source file whose imports are used, or `-` for stdin
    pub file: PathBuf,

    /// Simple or qualified class names to resolve
    pub names: Vec<String>,

    /// Resolve the qualified name under this caret (LINE:COL)
    #[arg(long = "at", value_name = "LINE:COL")]
    pub positions: Vec<Position>,

    /// Show every candidate tried and whether it was confirmed
    #[arg(long)]
    pub explain: bool,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(args: &ResolveArgs) -> Result<()> {
    let config = load_config(&args.output, Some(&args.catalog))?;
    let buffer = Buffer::read(&args.file)?;
    let catalog = load_catalog(&config)?;
    let index = build_index(buffer.text(), &config.implicit_root);

    let mut queries: Vec<(String, Option<Position>)> =
        args.names.iter().map(|n| (n.clone(), None)).collect();
    for &pos in &args.positions {
        let offset = buffer.offset_of(pos)?;
        let selection = select_qualified_name(buffer.text(), offset);
        if selection.is_empty() {
            notify(
                &config,
                &Notice::NothingSelected {
                    position: pos.to_string(),
                },
            );
            continue;
        }
        queries.push((selection.text(buffer.text()).to_string(), Some(pos)));
    }

    let results: Vec<Resolution> = queries
        .into_iter()
        .map(|(query, position)| {
            let resolution = resolve_query(&query, position, &index, &catalog, args.explain);
            if resolution.resolved.is_none() {
                notify(&config, &Notice::NoSuchClass { query: resolution.query.clone() });
            }
            resolution
        })
        .collect();

    let output = ResolveOutput {
        file: args.file.clone(),
        results,
    };

    let mut stdout = std::io::stdout().lock();
    match config.format {
        OutputFormat::Json => crate::output::json::write_json(&mut stdout, &output),
        OutputFormat::Text => crate::output::text::write_resolve_text(&mut stdout, &output),
    }
}

fn resolve_query(
    query: &str,
    position: Option<Position>,
    index: &ImportIndex,
    oracle: &dyn TypeOracle,
    explain: bool,
) -> Resolution {
    let resolved = resolve(query, index, oracle);
    let trail = explain.then(|| {
        candidates(query, index)
            .into_iter()
            .map(|c| CandidateOutcome {
                confirmed: oracle.confirm(&c.name).is_some(),
                name: c.name,
                via: c.via,
            })
            .collect()
    });

    Resolution {
        query: normalize_query(query),
        position,
        resolved,
        candidates: trail,
    }
}
