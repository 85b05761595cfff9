//! Line/column mapping for byte offsets.

use memchr::memchr_iter;
use serde::Serialize;

/// A 1-based line/column pair, the external-facing position format for
/// listings and diagnostics.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LineAndColumn {
    pub line: u32,
    pub column: u32,
}

/// Precomputed newline offsets for one source file.
///
/// Build once per file, then answer `line_and_column` queries in
/// O(log lines).
#[derive(Clone, Debug, Default)]
pub struct LineMap {
    /// Byte offset of the first character of each line. `line_starts[0] == 0`.
    line_starts: Vec<u32>,
}

impl LineMap {
    pub fn new(text: &str) -> LineMap {
        let mut line_starts = Vec::with_capacity(128);
        line_starts.push(0);
        for nl in memchr_iter(b'\n', text.as_bytes()) {
            line_starts.push(nl as u32 + 1);
        }
        LineMap { line_starts }
    }

    /// Map a byte offset to a 1-based line/column pair.
    ///
    /// Offsets past the end of the text land on the last line.
    pub fn line_and_column(&self, offset: u32) -> LineAndColumn {
        let line_index = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert - 1,
        };
        LineAndColumn {
            line: line_index as u32 + 1,
            column: offset - self.line_starts[line_index] + 1,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
