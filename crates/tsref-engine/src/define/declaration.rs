//! Declaration family operations.
//!
//! Most declarations resolve via direct binding. Class members get one
//! extra step: a member whose name is also declared by an inherited
//! ancestor denotes the ancestor's member (the originating definition),
//! found by flattening the heritage chain base-first.

use tsref_syntax::{NodeIndex, SyntaxKind, classify};

use super::{Definition, Resolution, ResolveResult, Resolver};

impl Resolver<'_> {
    pub(super) fn define_class_member(&self, index: NodeIndex) -> ResolveResult {
        let definition = self.direct_type_and_symbol(index);

        let name_node = self.arena.name_of(index);
        if name_node.is_none() {
            return Ok(Resolution::Resolved(definition));
        }
        let member_name = self.arena.node_text(name_node);

        // The container is the member's immediate parent. An enclosing class
        // further up must not capture a member of a nested object literal.
        let container = self.arena.parent_of(index);
        let container_kind = self.arena.kind_of(container);
        if container_kind != SyntaxKind::ObjectLiteralExpression
            && !classify::is_inheriting_declaration_kind(container_kind)
        {
            return Ok(Resolution::Resolved(definition));
        }

        // Post-order flattening puts the most distant ancestor first, so the
        // first hit is the member's originating declaration.
        for ancestor in self.collect_ancestor_types(container)? {
            if let Some(member) = self.oracle.property_of_type(member_name, ancestor) {
                let ty = self
                    .oracle
                    .symbol_declaration(member)
                    .map(|declaration| self.oracle.type_at(declaration))
                    .or(definition.ty);
                return Ok(Resolution::Resolved(Definition {
                    symbol: Some(member),
                    ty,
                }));
            }
        }

        Ok(Resolution::Resolved(definition))
    }
}
