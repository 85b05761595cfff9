//! Byte-offset source spans.

use serde::Serialize;

/// Identifies a source file within a program run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct FileId(pub u32);

impl FileId {
    pub const NONE: FileId = FileId(u32::MAX);

    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

/// A half-open byte range `[start, end)` within a single source file.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub file: FileId,
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(file: FileId, start: u32, end: u32) -> Span {
        debug_assert!(start <= end);
        Span { file, start, end }
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True when both spans start at the same offset of the same file.
    ///
    /// Used by the symbol table builder to detect a reference that sits on
    /// its own declaration site.
    #[inline]
    pub fn same_position(&self, other: &Span) -> bool {
        self.file == other.file && self.start == other.start
    }
}
