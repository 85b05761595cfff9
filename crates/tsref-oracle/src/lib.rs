//! Type system oracle contract for tsref.
//!
//! The resolution engine never type-checks anything; it navigates a fully
//! resolved program supplied by a host. This crate defines the query
//! contract (`TypeOracle`), the opaque handles it deals in
//! (`SymbolId`/`TypeId`/`SignatureId`), and `ProgramOracle`, a table-backed
//! implementation that hosts and test fixtures populate.

pub mod flags;
pub mod ids;
pub mod oracle;
pub mod program;

pub use flags::TypeFlags;
pub use ids::{SignatureId, SymbolId, TypeId};
pub use oracle::TypeOracle;
pub use program::ProgramOracle;
