//! Source documents and position arithmetic.
//!
//! A [`Source`] is created once per document and shared (via `Arc`) by every
//! [`Location`] built from it. [`SourceLocation`] turns a byte offset into the
//! 1-indexed line/column pair reported to users.

use std::fmt;
use std::sync::Arc;

use miette::{MietteError, MietteSpanContents, SourceCode, SourceSpan, SpanContents};
use serde::{Serialize, Serializer};

/// Name given to documents that arrive without one.
pub const DEFAULT_SOURCE_NAME: &str = "GraphQL request";

// ============================================================================
// SOURCE
// ============================================================================

/// An in-memory GraphQL document plus the name used when reporting on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Source {
    body: String,
    name: String,
}

impl Source {
    pub fn new(body: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            name: name.into(),
        }
    }

    /// Creates a source named [`DEFAULT_SOURCE_NAME`].
    pub fn from_body(body: impl Into<String>) -> Self {
        Self::new(body, DEFAULT_SOURCE_NAME)
    }

    /// Wraps the source for sharing between locations and diagnostics.
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl SourceCode for Source {
    fn read_span<'a>(
        &'a self,
        span: &SourceSpan,
        context_lines_before: usize,
        context_lines_after: usize,
    ) -> Result<Box<dyn SpanContents<'a> + 'a>, MietteError> {
        let contents = self
            .body
            .read_span(span, context_lines_before, context_lines_after)?;
        Ok(Box::new(MietteSpanContents::new_named(
            self.name.clone(),
            contents.data(),
            *contents.span(),
            contents.line(),
            contents.column(),
            contents.line_count(),
        )))
    }
}

// ============================================================================
// SOURCE LOCATION
// ============================================================================

/// Human-readable position: 1-indexed line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Computes the line and column of `offset` within `source`.
    ///
    /// Lines end at `\n`, `\r`, or a `\r\n` pair (counted once). A terminator
    /// only moves the line forward once it has been fully passed, so an offset
    /// pointing between `\r` and `\n` still belongs to the earlier line.
    /// Offsets past the end of the body clamp to the end.
    pub fn from_source(source: &Source, offset: usize) -> Self {
        let bytes = source.body().as_bytes();
        let offset = offset.min(bytes.len());

        let mut line = 1;
        let mut line_start = 0;
        let mut i = 0;
        while i < offset {
            let terminator_end = match bytes[i] {
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => i + 2,
                b'\r' | b'\n' => i + 1,
                _ => {
                    i += 1;
                    continue;
                }
            };
            if terminator_end > offset {
                break;
            }
            line += 1;
            line_start = terminator_end;
            i = terminator_end;
        }

        Self {
            line,
            column: offset - line_start + 1,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

// ============================================================================
// LOCATION
// ============================================================================

/// Byte span of a node inside the document it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    start: usize,
    end: usize,
    source: Arc<Source>,
}

impl Location {
    /// Returns `None` when `start > end`.
    pub fn new(start: usize, end: usize, source: Arc<Source>) -> Option<Self> {
        (start <= end).then_some(Self { start, end, source })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn source(&self) -> &Arc<Source> {
        &self.source
    }

    /// Line/column of the span's first byte.
    pub fn start_location(&self) -> SourceLocation {
        SourceLocation::from_source(&self.source, self.start)
    }

    pub fn to_source_span(&self) -> SourceSpan {
        SourceSpan::from(self.start..self.end)
    }
}

// Node serialization reports offsets only; the source travels separately.
impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Location", 2)?;
        state.serialize_field("start", &self.start)?;
        state.serialize_field("end", &self.end)?;
        state.end()
    }
}
