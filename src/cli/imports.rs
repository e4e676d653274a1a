use crate::cli::{load_config, OutputArgs};
use crate::editor::Buffer;
use crate::errors::Result;
use crate::output::json::ImportsOutput;
use crate::output::OutputFormat;
use crate::parse::build_index;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportsArgs {
    /// Java source file, or `-` for stdin
    pub file: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(args: &ImportsArgs) -> Result<()> {
    let config = load_config(&args.output, None)?;
    let buffer = Buffer::read(&args.file)?;
    let index = build_index(buffer.text(), &config.implicit_root);

    let output = ImportsOutput {
        file: args.file.clone(),
        package: index.package().map(str::to_string),
        exact: index.exact,
        wildcard: index.wildcard,
    };

    let mut stdout = std::io::stdout().lock();
    match config.format {
        OutputFormat::Json => crate::output::json::write_json(&mut stdout, &output),
        OutputFormat::Text => crate::output::text::write_imports_text(&mut stdout, &output),
    }
}
