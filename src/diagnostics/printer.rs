//! Human-readable rendering of [`GraphQLError`]s.
//!
//! Each location is shown as a header (`name (line:column)`) followed by a
//! numbered excerpt of the document with a caret under the reported column:
//!
//! ```text
//! Cannot query field "nam" on type "User".
//!
//! GraphQL request (2:3)
//! 1 | {
//! 2 |   nam
//!   |   ^
//! 3 | }
//! ```

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use unicode_width::UnicodeWidthStr;

use super::GraphQLError;
use crate::source::{Source, SourceLocation};

/// Lines of context shown above and below the reported line.
const SNIPPET_CONTEXT_LINES: usize = 1;

/// Plain-text rendering of the message plus one excerpt per location.
pub fn print_error(error: &GraphQLError) -> String {
    let mut out = String::from(error.message());
    for (source, location) in excerpt_targets(error) {
        out.push_str("\n\n");
        out.push_str(&location_header(source, location));
        out.push('\n');
        out.push_str(&code_snippet(source, location));
    }
    out
}

/// Same layout as [`print_error`], with color where the writer supports it.
pub fn write_error_colored(writer: &mut impl WriteColor, error: &GraphQLError) -> std::io::Result<()> {
    writer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(writer, "{}", error.message())?;
    writer.reset()?;
    writeln!(writer)?;

    for (source, location) in excerpt_targets(error) {
        writeln!(writer)?;
        writer.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        writeln!(writer, "{}", location_header(source, location))?;
        writer.reset()?;
        write!(writer, "{}", code_snippet(source, location))?;
    }

    writer.reset()?;
    Ok(())
}

/// Prints to standard error, falling back to plain text if coloring fails.
pub fn print_to_stderr(error: &GraphQLError) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    if write_error_colored(&mut stderr, error).is_err() {
        eprintln!("{}", print_error(error));
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Located nodes are rendered against their own documents; bare positions
/// fall back to the error's document.
fn excerpt_targets(error: &GraphQLError) -> Vec<(&Source, SourceLocation)> {
    let from_nodes: Vec<_> = error
        .nodes()
        .iter()
        .filter_map(|node| node.location())
        .map(|loc| (loc.source().as_ref(), loc.start_location()))
        .collect();
    if !from_nodes.is_empty() {
        return from_nodes;
    }

    match (error.document(), error.locations()) {
        (Some(source), Some(locations)) => locations
            .iter()
            .map(|&location| (source.as_ref(), location))
            .collect(),
        _ => Vec::new(),
    }
}

fn location_header(source: &Source, location: SourceLocation) -> String {
    format!("{} ({})", source.name(), location)
}

fn code_snippet(source: &Source, location: SourceLocation) -> String {
    let lines = split_lines(source.body());
    let line_idx = location.line.saturating_sub(1).min(lines.len() - 1);

    let first = line_idx.saturating_sub(SNIPPET_CONTEXT_LINES);
    let last = (line_idx + SNIPPET_CONTEXT_LINES).min(lines.len() - 1);
    let width = (last + 1).to_string().len();

    let mut out = String::new();
    for (idx, line) in lines.iter().enumerate().take(last + 1).skip(first) {
        out.push_str(&format!("{:width$} | {}\n", idx + 1, line, width = width));
        if idx == line_idx {
            out.push_str(&format!("{:width$} | ", "", width = width));
            out.push_str(&pointer_line(line, location.column));
        }
    }
    out
}

/// Spaces up to the display width of everything left of `column`, then `^`.
fn pointer_line(line: &str, column: usize) -> String {
    let mut cut = column.saturating_sub(1).min(line.len());
    while !line.is_char_boundary(cut) {
        cut -= 1;
    }
    let pad = line[..cut].width();
    format!("{}^\n", " ".repeat(pad))
}

/// Splits on `\r\n`, `\r` or `\n`, matching line numbering in
/// [`SourceLocation::from_source`]. Always yields at least one line.
fn split_lines(body: &str) -> Vec<&str> {
    let bytes = body.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\r' | b'\n' => {
                lines.push(&body[start..i]);
                i += if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
                    2
                } else {
                    1
                };
                start = i;
            }
            _ => i += 1,
        }
    }
    lines.push(&body[start..]);
    lines
}
