//! Coverage-required reference listings.
//!
//! Builds the reverse index, keeps the definitions whose path matches a
//! configured token pattern, and flattens their references into location
//! records grouped by file and by definition.

use indexmap::IndexMap;
use serde::Serialize;
use tsref_common::DiagnosticsSink;
use tsref_oracle::TypeOracle;
use tsref_syntax::{NodeArena, NodeIndex};

use crate::config::Config;
use crate::error::ResolveError;
use crate::path::{named_path_to_node, path_matches_token_filter};
use crate::symbol_table::parse_symbol_table;

/// One coverage-required reference location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TokenSourceLocation {
    /// Kind of the node enclosing the reference.
    pub kind: String,
    /// Dotted path of the definition this reference resolves to.
    pub definition_path: String,
    /// The token pattern that selected the definition.
    pub token: String,
    pub file_name: String,
    pub start: u32,
    pub length: u32,
    pub text: String,
    pub line: u32,
    pub column: u32,
}

/// Coverage-required references, grouped two ways over the same records.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CoverageReport {
    pub required_by_file: IndexMap<String, Vec<TokenSourceLocation>>,
    pub required_by_symbol: IndexMap<String, Vec<TokenSourceLocation>>,
}

impl CoverageReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Build the coverage listing for every non-excluded file.
pub fn find_coverage_locations(
    arena: &NodeArena,
    oracle: &dyn TypeOracle,
    config: &Config,
    sink: &dyn DiagnosticsSink,
) -> Result<CoverageReport, ResolveError> {
    let table = parse_symbol_table(arena, oracle, config, sink)?;
    let mut report = CoverageReport::default();

    for (&symbol, references) in &table {
        let Some(declaration) = oracle.symbol_declaration(symbol) else {
            continue;
        };
        let definition_path = named_path_to_node(arena, declaration);
        let Some(token) = config
            .tokens
            .iter()
            .find(|pattern| path_matches_token_filter(&definition_path, &pattern.name))
        else {
            continue;
        };

        for &reference in references {
            let Some(location) =
                token_source_location(arena, reference, &definition_path, &token.name)
            else {
                continue;
            };
            report
                .required_by_file
                .entry(location.file_name.clone())
                .or_default()
                .push(location.clone());
            report
                .required_by_symbol
                .entry(definition_path.clone())
                .or_default()
                .push(location);
        }
    }

    Ok(report)
}

fn token_source_location(
    arena: &NodeArena,
    reference: NodeIndex,
    definition_path: &str,
    token: &str,
) -> Option<TokenSourceLocation> {
    let span = arena.span_of(reference)?;
    if span.file.is_none() {
        return None;
    }
    let file = arena.file(span.file);
    let position = file.line_map.line_and_column(span.start);

    Some(TokenSourceLocation {
        kind: arena.kind_of(arena.parent_of(reference)).to_string(),
        definition_path: definition_path.to_string(),
        token: token.to_string(),
        file_name: file.file_name.clone(),
        start: span.start,
        length: span.len(),
        text: arena.node_text(reference).to_string(),
        line: position.line,
        column: position.column,
    })
}
