//! Resolution primitives.
//!
//! The composable operations every dispatch rule is built from: direct
//! binding, contextual binding, array element unwrapping, alias following,
//! and ancestor type collection.

use tsref_oracle::TypeId;
use tsref_syntax::{NodeData, NodeIndex, SyntaxKind, classify};

use super::{Definition, Resolution, ResolveResult, Resolver};
use crate::error::ResolveError;

impl Resolver<'_> {
    /// The symbol bound at a node and its type at this location.
    ///
    /// Accessor symbols and their location types can diverge, so getter
    /// declarations always take the type at the node directly. Symbol-based
    /// type lookup can also produce the checker's error sentinel where the
    /// node-based lookup succeeds (observed for symbols pointing at
    /// structural declarations); retry through the node in that case.
    pub fn direct_type_and_symbol(&self, index: NodeIndex) -> Definition {
        let symbol = self.oracle.symbol_at(index);
        let mut ty = match symbol {
            Some(sym) if self.arena.kind_of(index) != SyntaxKind::GetAccessor => {
                self.oracle.type_of_symbol_at(sym, index)
            }
            _ => self.oracle.type_at(index),
        };

        if self.oracle.is_error_type(ty) {
            ty = self.oracle.type_at(index);
        }

        Definition {
            symbol: symbol.or_else(|| self.oracle.type_symbol(ty)),
            ty: Some(ty),
        }
    }

    /// Resolve through the contextual (expected) type of an expression
    /// position, falling back to direct binding when the context has no
    /// expectation. Array-shaped context types unwrap to their element.
    pub fn contextual_type_and_symbol(&self, index: NodeIndex) -> Result<Definition, ResolveError> {
        classify::expect_node(self.arena, index, "expression", classify::is_expression_kind)
            .map_err(|mismatch| self.fatal_shape(mismatch, index))?;

        if let Some(context_type) = self.oracle.contextual_type_at(index) {
            return Ok(self.array_element_type(Definition {
                symbol: self.oracle.type_symbol(context_type),
                ty: Some(context_type),
            }));
        }
        Ok(self.direct_type_and_symbol(index))
    }

    /// If the definition's type is array-shaped, rewrite it to the numeric
    /// index element type. The element type's own symbol wins only when it
    /// has one; an anonymous element type keeps the array-level symbol.
    pub fn array_element_type(&self, inferred: Definition) -> Definition {
        let Some(ty) = inferred.ty else {
            return inferred;
        };
        if !self.oracle.is_array_type(ty) {
            return inferred;
        }
        if let Some(element) = self.oracle.number_index_type(ty) {
            return Definition {
                symbol: self.oracle.type_symbol(element).or(inferred.symbol),
                ty: Some(element),
            };
        }
        inferred
    }

    /// Follow a resolved symbol through its alias chain.
    ///
    /// A target different from the symbol ends the chase immediately (the
    /// oracle resolves transitively); a target equal to the symbol means no
    /// alias, in which case the symbol's own declaration is re-resolved to
    /// pick up a more specific symbol while keeping the original type. An
    /// alias whose source has no reachable declaration is an oracle
    /// consistency violation.
    pub fn follow_symbol(&self, index: NodeIndex, resolution: Resolution) -> ResolveResult {
        let Resolution::Resolved(definition) = resolution else {
            return Ok(resolution);
        };
        let Some(symbol) = definition.symbol else {
            return Ok(resolution);
        };

        let target = self.oracle.alias_target_of(symbol);
        if target != symbol {
            if self.oracle.symbol_declaration(symbol).is_none() {
                return Err(ResolveError::at_node(
                    format!(
                        "expected a declaration for aliased symbol {}",
                        self.oracle.symbol_name(symbol)
                    ),
                    self.arena,
                    index,
                ));
            }
            return Ok(Resolution::Resolved(Definition {
                symbol: Some(target),
                ty: definition.ty,
            }));
        }

        if let Some(declaration) = self.oracle.symbol_declaration(symbol) {
            let followed = self.define_symbol(declaration)?;
            if let Some(followed) = followed.definition() {
                if followed.is_complete() {
                    return Ok(Resolution::Resolved(Definition {
                        symbol: followed.symbol,
                        ty: definition.ty,
                    }));
                }
            }
        }

        Ok(Resolution::Resolved(definition))
    }

    /// Flatten the heritage (extends/implements) clauses of an inheriting
    /// declaration into resolved types, post-order: ancestors of ancestors
    /// precede their immediate parent. Object literal shorthand method
    /// containers have no ancestors.
    pub fn collect_ancestor_types(&self, index: NodeIndex) -> Result<Vec<TypeId>, ResolveError> {
        if self.arena.kind_of(index) == SyntaxKind::ObjectLiteralExpression {
            return Ok(Vec::new());
        }

        let node = classify::expect_node(self.arena, index, "inheriting declaration", |k| {
            classify::is_inheriting_declaration_kind(k)
        })
        .map_err(|mismatch| self.fatal_shape(mismatch, index))?;

        let NodeData::ClassLike {
            heritage_clauses, ..
        } = &node.data
        else {
            return Ok(Vec::new());
        };

        let mut ancestors = Vec::new();
        for clause in heritage_clauses.iter() {
            let Some(NodeData::HeritageClause { types }) = self.arena.get(clause).map(|n| &n.data)
            else {
                continue;
            };
            for type_node in types.iter() {
                let ty = self.oracle.type_at(type_node);
                if let Some(symbol) = self.oracle.type_symbol(ty) {
                    if let Some(declaration) = self.oracle.symbol_declaration(symbol) {
                        if classify::is_inheriting_declaration_kind(
                            self.arena.kind_of(declaration),
                        ) {
                            ancestors.extend(self.collect_ancestor_types(declaration)?);
                        }
                    }
                }
                ancestors.push(ty);
            }
        }
        Ok(ancestors)
    }
}
