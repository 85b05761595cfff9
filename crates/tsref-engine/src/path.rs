//! Dotted path names for declarations.
//!
//! A path like `Console.log` names a declaration relative to its enclosing
//! named scopes. Paths are external-facing keys only (coverage matching,
//! grouping, test fixtures) and play no part in resolution.

use tsref_syntax::{NodeArena, NodeIndex, SyntaxKind, classify};

/// The dotted path naming `index` relative to its enclosing named scopes.
///
/// An identifier contributes its own text; enclosing named declarations
/// contribute their names; arrow functions contribute a literal `=>`
/// segment; source files contribute nothing. An anonymous function
/// expression has no name of its own, so the variable binding it supplies
/// the segment.
pub fn named_path_to_node(arena: &NodeArena, index: NodeIndex) -> String {
    let mut segments: Vec<&str> = Vec::new();
    let mut current = index;

    // A name-like starting node contributes itself. When it is the name of
    // its parent declaration, the parent contributes the same text, so the
    // contribution is deferred to the declaration.
    match arena.kind_of(current) {
        SyntaxKind::Identifier | SyntaxKind::PrivateIdentifier | SyntaxKind::StringLiteral => {
            if !classify::is_declaration_name(arena, current) {
                segments.push(arena.node_text(current));
            }
            current = arena.parent_of(current);
        }
        _ => {}
    }

    while current.is_some() {
        match arena.kind_of(current) {
            SyntaxKind::SourceFile => break,
            SyntaxKind::ArrowFunction => segments.push("=>"),
            _ => {
                if classify::is_named_declaration(arena, current) {
                    let name = arena.name_of(current);
                    segments.push(arena.node_text(name));
                }
            }
        }
        current = arena.parent_of(current);
    }

    segments.reverse();
    segments.join(".")
}

/// Match a dotted path against a token filter pattern.
///
/// Patterns are `.`-separated: a literal segment matches itself, `*`
/// matches exactly one path segment, and a trailing `**` matches any
/// remaining suffix (including none).
pub fn path_matches_token_filter(path: &str, pattern: &str) -> bool {
    let path_segments: Vec<&str> = path.split('.').collect();
    let pattern_segments: Vec<&str> = pattern.split('.').collect();

    let mut position = 0;
    for (i, pattern_segment) in pattern_segments.iter().enumerate() {
        if *pattern_segment == "**" && i == pattern_segments.len() - 1 {
            return true;
        }
        match path_segments.get(position) {
            Some(segment) if *pattern_segment == "*" || pattern_segment == segment => {
                position += 1;
            }
            _ => return false,
        }
    }
    position == path_segments.len()
}
