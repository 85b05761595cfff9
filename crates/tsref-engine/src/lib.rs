//! Definition resolution engine and reverse reference index.
//!
//! Given a syntax arena and a type system oracle, this crate determines,
//! for every reference in a program, the declaration it ultimately denotes
//! (`define`), aggregates references by definition into a reverse index
//! (`symbol_table`), names declarations with stable dotted paths (`path`),
//! and emits per-location coverage listings (`coverage`).

pub mod config;
pub mod coverage;
pub mod define;
pub mod dump;
pub mod error;
pub mod path;
pub mod symbol_table;

pub use config::{Config, TokenPattern};
pub use coverage::{CoverageReport, TokenSourceLocation, find_coverage_locations};
pub use define::{Definition, Resolution, ResolveResult, Resolver};
pub use dump::{NodeSummary, dump_node, dump_symbol};
pub use error::ResolveError;
pub use path::{named_path_to_node, path_matches_token_filter};
pub use symbol_table::{SymbolSummaryRow, SymbolTable, extract_symbol_summary, parse_symbol_table};
