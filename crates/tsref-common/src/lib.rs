//! Common types for the tsref reference indexer.
//!
//! This crate provides the foundational pieces shared by all tsref crates:
//! - Source spans keyed by file (`FileId`, `Span`)
//! - Line/column mapping for byte offsets (`LineMap`, `LineAndColumn`)
//! - The injected diagnostics sink (`DiagnosticsSink` and implementations)

// Span - source location tracking (byte offsets)
pub mod span;
pub use span::{FileId, Span};

// Position - line/column mapping for source locations
pub mod position;
pub use position::{LineAndColumn, LineMap};

// Diagnostics sink - injected logging seam
pub mod sink;
pub use sink::{CollectingSink, DiagnosticsSink, NullSink, TracingSink};
