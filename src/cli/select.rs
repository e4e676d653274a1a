use crate::cli::{load_config, OutputArgs};
use crate::editor::selection::{select_line, select_qualified_name, select_word};
use crate::editor::{Buffer, Position, Selection};
use crate::errors::Result;
use crate::output::json::SelectionOutput;
use crate::output::OutputFormat;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SelectKind {
    /// The caret's line, trimmed
    Line,
    /// The identifier touching the caret
    Word,
    /// The identifier widened across `.`-separated segments
    Name,
}

#[derive(Debug, Args)]
pub struct SelectArgs {
    /// What to expand the caret to
    pub kind: SelectKind,

    /// Java source file, or `-` for stdin
    pub file: PathBuf,

    /// Caret position (LINE:COL)
    #[arg(long = "at", value_name = "LINE:COL")]
    pub position: Position,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(args: &SelectArgs) -> Result<()> {
    let config = load_config(&args.output, None)?;
    let buffer = Buffer::read(&args.file)?;
    let offset = buffer.offset_of(args.position)?;
    let selection = expand(args.kind, buffer.text(), offset);

    let output = SelectionOutput {
        text: selection.text(buffer.text()).to_string(),
        start: buffer.position_of(selection.start),
        end: buffer.position_of(selection.end),
    };

    let mut stdout = std::io::stdout().lock();
    match config.format {
        OutputFormat::Json => crate::output::json::write_json(&mut stdout, &output),
        OutputFormat::Text => crate::output::text::write_selection_text(&mut stdout, &output),
    }
}

fn expand(kind: SelectKind, text: &str, offset: usize) -> Selection {
    match kind {
        SelectKind::Line => select_line(text, offset),
        SelectKind::Word => select_word(text, offset),
        SelectKind::Name => select_qualified_name(text, offset),
    }
}
