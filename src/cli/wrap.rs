use crate::cli::{load_config, OutputArgs};
use crate::editor::wrap::{apply_wraps, WrapTarget};
use crate::editor::{Buffer, Position, PositionRange};
use crate::errors::Result;
use crate::output::json::WrapOutput;
use crate::output::OutputFormat;
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct WrapArgs {
    /// Java source file, or `-` for stdin
    pub file: PathBuf,

    /// Template name: `sout`, `parse-int`, or one from `[templates]`
    #[arg(long, default_value = "sout")]
    pub template: String,

    /// Wrap the whole line under this caret (LINE:COL)
    #[arg(long = "at", value_name = "LINE:COL")]
    pub positions: Vec<Position>,

    /// Wrap exactly this range (LINE:COL-LINE:COL, end exclusive)
    #[arg(long = "range", value_name = "RANGE")]
    pub ranges: Vec<PositionRange>,

    /// Rewrite the file in place instead of printing the result
    #[arg(long)]
    pub write: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(args: &WrapArgs) -> Result<()> {
    let config = load_config(&args.output, None)?;
    let template = config.template(&args.template)?;
    let buffer = Buffer::read(&args.file)?;

    let mut targets = Vec::with_capacity(args.positions.len() + args.ranges.len());
    for &pos in &args.positions {
        targets.push(WrapTarget::Line(buffer.offset_of(pos)?));
    }
    for &range in &args.ranges {
        targets.push(WrapTarget::Range(buffer.selection_of(range)?));
    }

    let outcome = apply_wraps(&buffer, &targets, &template);
    tracing::debug!(edits = outcome.edits.len(), template = %args.template, "wrap planned");

    let write_back = args.write && args.file != Path::new("-");
    if write_back {
        std::fs::write(&args.file, &outcome.text)?;
        if !config.quiet {
            eprintln!(
                "Wrapped {} statement(s) in {}",
                outcome.edits.len(),
                args.file.display()
            );
        }
    }

    let output = WrapOutput {
        edits: outcome.edits,
        text: outcome.text,
    };
    let mut stdout = std::io::stdout().lock();
    match config.format {
        OutputFormat::Json => crate::output::json::write_json(&mut stdout, &output),
        OutputFormat::Text if write_back => Ok(()),
        OutputFormat::Text => crate::output::text::write_wrap_text(&mut stdout, &output),
    }
}
