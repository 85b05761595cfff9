//! Debug dumps of nodes and symbols.
//!
//! Summary records are serde-serializable so they can go straight into
//! snapshot fixtures and listings.

use serde::Serialize;
use tsref_oracle::{SymbolId, TypeOracle};
use tsref_syntax::{NodeArena, NodeIndex, SyntaxKind};

use crate::path::named_path_to_node;

/// A human-oriented snapshot of one node: where it is and what to call it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NodeSummary {
    pub kind: String,
    pub name: String,
    pub path: String,
    pub file_name: String,
    pub line: u32,
    pub column: u32,
}

/// Summarize a node for debug output.
///
/// The display name is the first line of the node's text, except that an
/// anonymous function takes the name of the variable binding it and a
/// function declaration uses its declared name.
pub fn dump_node(arena: &NodeArena, index: NodeIndex) -> NodeSummary {
    let kind = arena.kind_of(index);
    let span = arena.span_of(index);

    let (file_name, line, column) = match span {
        Some(span) if !span.file.is_none() => {
            let file = arena.file(span.file);
            let position = file.line_map.line_and_column(span.start);
            (file.file_name.clone(), position.line, position.column)
        }
        _ => (String::new(), 1, 1),
    };

    let mut name = arena
        .node_text(index)
        .lines()
        .next()
        .unwrap_or_default()
        .to_string();
    match kind {
        SyntaxKind::ArrowFunction | SyntaxKind::FunctionExpression => {
            let parent = arena.parent_of(index);
            if arena.kind_of(parent) == SyntaxKind::VariableDeclaration {
                name = arena.node_text(arena.name_of(parent)).to_string();
            }
        }
        SyntaxKind::FunctionDeclaration => {
            let declared = arena.name_of(index);
            if declared.is_some() {
                name = arena.node_text(declared).to_string();
            }
        }
        _ => {}
    }

    NodeSummary {
        kind: kind.to_string(),
        name,
        path: named_path_to_node(arena, index),
        file_name,
        line,
        column,
    }
}

/// Summarize a symbol's declarations for debug output.
///
/// An intrinsic symbol has no source declaration; it is reported as a
/// single keyword record instead.
pub fn dump_symbol(
    arena: &NodeArena,
    oracle: &dyn TypeOracle,
    symbol: SymbolId,
) -> Vec<NodeSummary> {
    let declarations = oracle.declarations_of(symbol);
    if declarations.is_empty() && oracle.is_intrinsic_type(oracle.declared_type_of(symbol)) {
        let name = oracle.symbol_name(symbol).to_string();
        return vec![NodeSummary {
            kind: "keyword".to_string(),
            name: name.clone(),
            path: name,
            file_name: "intrinsic".to_string(),
            line: 1,
            column: 1,
        }];
    }

    declarations
        .iter()
        .map(|&declaration| dump_node(arena, declaration))
        .collect()
}
