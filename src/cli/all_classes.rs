use crate::cli::{load_config, OutputArgs};
use crate::docs::{self, BrowserSink, NavigationSink, PrintSink};
use crate::errors::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AllClassesArgs {
    /// Print the page URL instead of opening a browser
    #[arg(long)]
    pub print: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(args: &AllClassesArgs) -> Result<()> {
    let config = load_config(&args.output, None)?;
    let url = docs::all_classes_url(&config)?;

    if args.print {
        PrintSink::new(std::io::stdout()).navigate(&url);
    } else {
        BrowserSink.navigate(&url);
    }
    Ok(())
}
