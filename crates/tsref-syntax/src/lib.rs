//! Syntax model for the tsref reference indexer.
//!
//! This crate owns the pieces of the syntax layer the resolution engine
//! navigates:
//! - `SyntaxKind` - the closed node/token kind enumeration
//! - `NodeArena` - arena-allocated nodes with parent links
//! - Classification predicates and shape narrowing (`classify`)
//!
//! The arena is populated by the host that also supplies the type oracle;
//! tsref itself performs no lexing or parsing.

pub mod arena;
pub mod classify;
pub mod kind;

pub use arena::{Node, NodeArena, NodeData, NodeIndex, NodeList, SourceFileData};
pub use classify::{ShapeMismatch, expect_node};
pub use kind::SyntaxKind;
