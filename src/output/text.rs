use crate::errors::Result;
use crate::output::json::{ImportsOutput, RefsOutput, ResolveOutput, SelectionOutput, WrapOutput};
use crate::parse::resolver::Via;
use std::io::Write;

fn describe_via(via: &Via) -> String {
    match via {
        Via::Qualified => "qualified name".to_string(),
        Via::Exact {
            import,
            line: Some(line),
        } => format!("import {import}, line {line}"),
        Via::Exact { import, line: None } => format!("import {import}"),
        Via::Wildcard { prefix } => format!("on-demand {prefix}*"),
    }
}

/// Write the import index for one file.
pub fn write_imports_text<W: Write>(writer: &mut W, output: &ImportsOutput) -> Result<()> {
    writeln!(writer, "File:    {}", output.file.display())?;
    writeln!(
        writer,
        "Package: {}",
        output.package.as_deref().unwrap_or("(default)")
    )?;
    writeln!(writer)?;

    writeln!(writer, "Exact imports ({})", output.exact.len())?;
    for decl in &output.exact {
        writeln!(
            writer,
            "  {:>5}  {:<50} {}",
            line_label(decl.line),
            decl.path,
            decl.kind
        )?;
    }
    writeln!(writer)?;

    writeln!(writer, "On-demand imports ({})", output.wildcard.len())?;
    for decl in &output.wildcard {
        writeln!(
            writer,
            "  {:>5}  {:<50} {}",
            line_label(decl.line),
            decl.path,
            decl.kind
        )?;
    }

    Ok(())
}

fn line_label(line: Option<usize>) -> String {
    line.map_or_else(|| "-".to_string(), |l| l.to_string())
}

/// Write one line per query, plus the candidate trail when explained.
pub fn write_resolve_text<W: Write>(writer: &mut W, output: &ResolveOutput) -> Result<()> {
    for result in &output.results {
        let label = match result.position {
            Some(pos) => format!("{} ({pos})", result.query),
            None => result.query.clone(),
        };
        match &result.resolved {
            Some(resolved) => writeln!(
                writer,
                "{label} -> {}  [{}; {}]",
                resolved.fqn,
                describe_via(&resolved.via),
                resolved.info.origin
            )?,
            None => writeln!(writer, "{label} -> not found")?,
        }

        if let Some(candidates) = &result.candidates {
            for candidate in candidates {
                let mark = if candidate.confirmed { "x" } else { " " };
                writeln!(
                    writer,
                    "    [{mark}] {:<50} {}",
                    candidate.name,
                    describe_via(&candidate.via)
                )?;
            }
        }
    }
    Ok(())
}

/// Write every reference per file with its resolution, then a total.
pub fn write_refs_text<W: Write>(writer: &mut W, output: &RefsOutput) -> Result<()> {
    for file in &output.files {
        writeln!(writer, "{}", file.file.display())?;
        for r in &file.references {
            let target = r.fqn.as_deref().unwrap_or("?");
            writeln!(
                writer,
                "  {:>5}  {:<30} {:<50} x{}",
                r.reference.line, r.reference.name, target, r.reference.occurrences
            )?;
        }
        writeln!(writer)?;
    }
    writeln!(
        writer,
        "Resolved: {}  Unresolved: {}",
        output.resolved, output.unresolved
    )?;
    Ok(())
}

/// Selected text only, so the output can be piped.
pub fn write_selection_text<W: Write>(writer: &mut W, output: &SelectionOutput) -> Result<()> {
    writeln!(writer, "{}", output.text)?;
    Ok(())
}

/// The rewritten buffer, verbatim.
pub fn write_wrap_text<W: Write>(writer: &mut W, output: &WrapOutput) -> Result<()> {
    write!(writer, "{}", output.text)?;
    Ok(())
}
