//! Invocation and function family operations.

use tsref_syntax::{NodeData, NodeIndex, SyntaxKind, classify};

use super::{Definition, Resolution, ResolveResult, Resolver};

impl Resolver<'_> {
    /// Calls and construct expressions resolve to the return type of the
    /// signature the checker selected for them.
    pub(super) fn define_call_return(&self, index: NodeIndex) -> ResolveResult {
        debug_assert!(matches!(
            self.arena.kind_of(index),
            SyntaxKind::CallExpression | SyntaxKind::NewExpression
        ));

        if let Some(signature) = self.oracle.resolved_signature_of(index) {
            let return_type = self.oracle.signature_return_type(signature);
            return Ok(Resolution::Resolved(Definition {
                symbol: self.oracle.type_symbol(return_type),
                ty: Some(return_type),
            }));
        }
        Ok(Resolution::Unhandled)
    }

    /// Parameters resolve directly, except when the bound symbol has no
    /// locatable declaration (constructor-promoted properties with no
    /// separate annotation); those resolve through the parameter's name
    /// node instead.
    pub(super) fn define_parameter(&self, index: NodeIndex) -> ResolveResult {
        let node = classify::expect_node(self.arena, index, "parameter", |k| {
            k == SyntaxKind::Parameter
        })
        .map_err(|mismatch| self.fatal_shape(mismatch, index))?;

        let definition = self.direct_type_and_symbol(index);

        let has_declaration = definition
            .symbol
            .is_some_and(|sym| self.oracle.symbol_declaration(sym).is_some());
        if !has_declaration {
            if let NodeData::Parameter { name, .. } = node.data {
                return Ok(Resolution::Resolved(self.direct_type_and_symbol(name)));
            }
        }

        Ok(Resolution::Resolved(definition))
    }

    /// Return statements resolve to the enclosing function's annotated
    /// return type when present, else to the returned expression itself.
    /// A bare `return` affirmatively has no definition.
    pub(super) fn define_return_statement(&self, index: NodeIndex) -> ResolveResult {
        let node = classify::expect_node(self.arena, index, "return statement", |k| {
            k == SyntaxKind::ReturnStatement
        })
        .map_err(|mismatch| self.fatal_shape(mismatch, index))?;

        let enclosing = self
            .arena
            .find_ancestor(index, |arena, idx| {
                classify::is_function_like_kind(arena.kind_of(idx))
            });
        if let Some(function) = enclosing {
            if let Some(NodeData::Function { return_type, .. }) =
                self.arena.get(function).map(|n| &n.data)
            {
                if return_type.is_some() {
                    return Ok(Resolution::Resolved(
                        self.direct_type_and_symbol(*return_type),
                    ));
                }
            }
        }

        if let NodeData::Return { expression } = node.data {
            if expression.is_some() {
                return Ok(Resolution::Resolved(self.direct_type_and_symbol(expression)));
            }
        }

        Ok(Resolution::NoDefinition)
    }
}
