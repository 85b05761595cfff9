//! The reverse reference index.
//!
//! One depth-first pass over every non-excluded file, resolving each
//! identifier reference to its definition symbol and recording the
//! reference under that symbol. Declaration sites are never recorded as
//! references to themselves.

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxBuildHasher;
use tsref_common::DiagnosticsSink;
use tsref_oracle::{SymbolId, TypeOracle};
use tsref_syntax::{NodeArena, NodeIndex, SyntaxKind};

use crate::config::Config;
use crate::define::{Resolution, Resolver};
use crate::dump::dump_node;
use crate::error::ResolveError;

/// Definition symbol to the set of nodes referencing it. Iteration follows
/// insertion order, which makes listings deterministic.
pub type SymbolTable = IndexMap<SymbolId, IndexSet<NodeIndex, FxBuildHasher>, FxBuildHasher>;

/// Build the reverse index for every non-excluded file in the arena.
pub fn parse_symbol_table(
    arena: &NodeArena,
    oracle: &dyn TypeOracle,
    config: &Config,
    sink: &dyn DiagnosticsSink,
) -> Result<SymbolTable, ResolveError> {
    let resolver = Resolver::new(arena, oracle, sink);
    let mut table = SymbolTable::default();

    for (_, file) in arena.files() {
        if config.exclude(&file.file_name) {
            continue;
        }
        sink.info(&format!("Parsing symbols in {}", file.file_name));
        if file.root.is_some() {
            visit(&resolver, file.root, &mut table)?;
        }
    }

    Ok(table)
}

fn visit(
    resolver: &Resolver<'_>,
    index: NodeIndex,
    table: &mut SymbolTable,
) -> Result<(), ResolveError> {
    let arena = resolver.arena;
    let mut children: smallvec::SmallVec<[NodeIndex; 8]> = smallvec::SmallVec::new();
    arena.collect_children(index, &mut children);
    for child in children {
        visit_node(resolver, child, table)?;
    }
    Ok(())
}

fn visit_node(
    resolver: &Resolver<'_>,
    index: NodeIndex,
    table: &mut SymbolTable,
) -> Result<(), ResolveError> {
    let arena = resolver.arena;
    let kind = arena.kind_of(index);

    // Closing elements repeat what their opening element already told us.
    if kind == SyntaxKind::JsxClosingElement {
        return Ok(());
    }

    // Type positions are the checker's business; lookups through them never
    // contribute value references.
    if matches!(
        kind,
        SyntaxKind::TypeAliasDeclaration
            | SyntaxKind::TypeReference
            | SyntaxKind::TypeQuery
            | SyntaxKind::TypeLiteral
    ) {
        return Ok(());
    }

    // Import and export clauses resolve through the module graph, not
    // through in-file references.
    if matches!(
        kind,
        SyntaxKind::ImportDeclaration | SyntaxKind::ExportDeclaration
    ) || arena.kind_of(arena.parent_of(index)) == SyntaxKind::ExportAssignment
    {
        return Ok(());
    }

    if kind == SyntaxKind::Identifier {
        record_identifier(resolver, index, table)?;
    }

    visit(resolver, index, table)
}

fn record_identifier(
    resolver: &Resolver<'_>,
    index: NodeIndex,
    table: &mut SymbolTable,
) -> Result<(), ResolveError> {
    let arena = resolver.arena;
    let oracle = resolver.oracle;

    // A declaration's own name needs no entry.
    let parent = arena.parent_of(index);
    let parent_kind = arena.kind_of(parent);
    if matches!(
        parent_kind,
        SyntaxKind::FunctionDeclaration
            | SyntaxKind::VariableDeclaration
            | SyntaxKind::Parameter
            | SyntaxKind::PropertyDeclaration
            | SyntaxKind::ImportSpecifier
            | SyntaxKind::PropertySignature
    ) && arena.name_of(parent) == index
    {
        return Ok(());
    }

    // Pseudo-identifiers with no explicit symbol.
    let text = arena.node_text(index);
    if text == "undefined" || text == "arguments" {
        return Ok(());
    }

    let Some(symbol) = oracle.symbol_at(index) else {
        resolver
            .sink
            .verbose(&format!("No symbol: {:?}", dump_node(arena, index)));
        return Ok(());
    };

    // Intrinsic types have no source declarations to index.
    if oracle.is_intrinsic_type(oracle.declared_type_of(symbol)) {
        return Ok(());
    }

    let symbol_declaration = oracle
        .symbol_declaration(symbol)
        .ok_or_else(|| ResolveError::at_node("No declaration for symbol", arena, index))?;

    // The symbol that serves as the primary key for reference tracking.
    let mut definition_symbol = oracle.type_symbol(oracle.type_at(index));
    let mut explicitly_absent = false;

    if definition_symbol.is_none() {
        match resolver.define_symbol(index)? {
            Resolution::Resolved(definition) => definition_symbol = definition.symbol,
            Resolution::NoDefinition => explicitly_absent = true,
            Resolution::Unhandled => {}
        }
    }

    // Parameters of a named function are their own identity.
    if definition_symbol.is_none() && arena.kind_of(symbol_declaration) == SyntaxKind::Parameter {
        let function = arena.parent_of(symbol_declaration);
        if matches!(
            arena.kind_of(function),
            SyntaxKind::FunctionDeclaration | SyntaxKind::ArrowFunction
        ) {
            definition_symbol = Some(symbol);
        }
    }

    // So are variable declarations and property members.
    if definition_symbol.is_none()
        && matches!(
            arena.kind_of(symbol_declaration),
            SyntaxKind::VariableDeclaration
                | SyntaxKind::PropertySignature
                | SyntaxKind::PropertyAssignment
        )
    {
        definition_symbol = Some(symbol);
    }

    let Some(definition_symbol) = definition_symbol else {
        if explicitly_absent {
            return Ok(());
        }
        return Err(ResolveError::at_node(
            "unable to determine definition symbol",
            arena,
            index,
        ));
    };

    // A definition with no locatable declaration cannot be indexed.
    let Some(definition_node) = oracle.symbol_declaration(definition_symbol) else {
        return Ok(());
    };

    // A reference sitting on its own declaration is not a reference.
    if let (Some(definition_span), Some(reference_span)) =
        (arena.span_of(definition_node), arena.span_of(index))
    {
        if definition_span.same_position(&reference_span) {
            return Ok(());
        }
    }

    table.entry(definition_symbol).or_default().insert(index);
    Ok(())
}

/// Flatten the table into sorted `{path, size}` rows for summaries.
pub fn extract_symbol_summary(arena: &NodeArena, oracle: &dyn TypeOracle, table: &SymbolTable) -> Vec<SymbolSummaryRow> {
    let mut rows: Vec<SymbolSummaryRow> = table
        .iter()
        .filter_map(|(&symbol, references)| {
            let declaration = oracle.symbol_declaration(symbol)?;
            let path = crate::path::named_path_to_node(arena, declaration);
            if path.is_empty() {
                return None;
            }
            Some(SymbolSummaryRow {
                path,
                size: references.len(),
            })
        })
        .collect();
    rows.sort_by(|a, b| a.path.cmp(&b.path));
    rows
}

/// One row of a symbol table summary.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SymbolSummaryRow {
    pub path: String,
    pub size: usize,
}
