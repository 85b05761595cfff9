//! Fatal resolution errors.
//!
//! These indicate an internal consistency violation - a dispatch-table gap
//! or an oracle answer that contradicts itself - never bad user input. They
//! abort the current program pass and carry enough node context to find the
//! offending construct.

use tsref_syntax::{NodeArena, NodeIndex, SyntaxKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveError {
    pub message: String,
    pub kind: Option<SyntaxKind>,
    pub file_name: Option<String>,
    pub start: Option<u32>,
}

impl ResolveError {
    pub fn new(message: impl Into<String>) -> ResolveError {
        ResolveError {
            message: message.into(),
            kind: None,
            file_name: None,
            start: None,
        }
    }

    /// Attach the node the failure was observed at.
    pub fn at_node(message: impl Into<String>, arena: &NodeArena, node: NodeIndex) -> ResolveError {
        let kind = arena.get(node).map(|n| n.kind);
        let (file_name, start) = match arena.span_of(node) {
            Some(span) if !span.file.is_none() => (
                Some(arena.file_name(span.file).to_string()),
                Some(span.start),
            ),
            _ => (None, None),
        };
        ResolveError {
            message: message.into(),
            kind,
            file_name,
            start,
        }
    }
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(file) = &self.file_name {
            write!(f, " in {file}")?;
        }
        if let Some(kind) = self.kind {
            write!(f, " at {kind}")?;
        }
        if let Some(start) = self.start {
            write!(f, " (offset {start})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ResolveError {}
