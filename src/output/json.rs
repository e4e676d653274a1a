use crate::editor::buffer::Position;
use crate::editor::wrap::WrapEdit;
use crate::errors::Result;
use crate::oracle::TypeOrigin;
use crate::parse::common::ImportDeclaration;
use crate::parse::java::TypeReference;
use crate::parse::resolver::{ResolvedType, Via};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
pub struct ImportsOutput {
    pub file: PathBuf,
    pub package: Option<String>,
    pub exact: Vec<ImportDeclaration>,
    pub wildcard: Vec<ImportDeclaration>,
}

#[derive(Debug, Serialize)]
pub struct ResolveOutput {
    pub file: PathBuf,
    pub results: Vec<Resolution>,
}

/// Outcome for one query (a name argument or the text under a caret).
#[derive(Debug, Serialize)]
pub struct Resolution {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    pub resolved: Option<ResolvedType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<CandidateOutcome>>,
}

#[derive(Debug, Serialize)]
pub struct CandidateOutcome {
    pub name: String,
    pub via: Via,
    pub confirmed: bool,
}

#[derive(Debug, Serialize)]
pub struct RefsOutput {
    pub files: Vec<FileRefs>,
    pub resolved: usize,
    pub unresolved: usize,
}

#[derive(Debug, Serialize)]
pub struct FileRefs {
    pub file: PathBuf,
    pub references: Vec<ResolvedReference>,
}

#[derive(Debug, Serialize)]
pub struct ResolvedReference {
    #[serde(flatten)]
    pub reference: TypeReference,
    pub fqn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<TypeOrigin>,
}

#[derive(Debug, Serialize)]
pub struct SelectionOutput {
    pub text: String,
    pub start: Position,
    pub end: Position,
}

#[derive(Debug, Serialize)]
pub struct WrapOutput {
    pub edits: Vec<WrapEdit>,
    pub text: String,
}

/// Write any report as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}
