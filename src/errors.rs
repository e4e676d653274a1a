use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum DocsearchError {
    #[error("No Java source files found in {path}")]
    #[diagnostic(code(docsearch::no_files))]
    NoFiles { path: PathBuf },

    #[error("Invalid caret position: {position}")]
    #[diagnostic(
        code(docsearch::position),
        help("positions are 1-based LINE:COL, ranges are LINE:COL-LINE:COL")
    )]
    InvalidPosition { position: String },

    #[error("Unknown wrap template: {name}")]
    #[diagnostic(code(docsearch::template))]
    UnknownTemplate { name: String },

    #[error("Parse error in {file}: {message}")]
    #[diagnostic(code(docsearch::parse_error))]
    ParseError { file: PathBuf, message: String },

    #[error("Configuration error: {0}")]
    #[diagnostic(code(docsearch::config))]
    Config(String),

    #[error(transparent)]
    #[diagnostic(code(docsearch::io))]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    #[diagnostic(code(docsearch::json))]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    #[diagnostic(code(docsearch::glob))]
    Glob(#[from] globset::Error),

    #[error(transparent)]
    #[diagnostic(code(docsearch::url))]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, DocsearchError>;
