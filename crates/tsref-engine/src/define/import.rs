//! Import and export family operations.
//!
//! Most import/export constituents resolve via direct binding (wired in the
//! dispatch table). The named import specifier is the special case: it is
//! traced through the external module's export table so that the reference
//! lands on the exported member's own declaration rather than the local
//! binding.

use tsref_syntax::{NodeData, NodeIndex, SyntaxKind, classify};

use crate::error::ResolveError;

use super::{Definition, Resolution, ResolveResult, Resolver};

impl Resolver<'_> {
    pub(super) fn define_import_specifier(&self, index: NodeIndex) -> ResolveResult {
        let node = classify::expect_node(self.arena, index, "import specifier", |k| {
            k == SyntaxKind::ImportSpecifier
        })
        .map_err(|mismatch| self.fatal_shape(mismatch, index))?;

        let import_declaration = self
            .arena
            .find_ancestor(index, |arena, idx| {
                arena.kind_of(idx) == SyntaxKind::ImportDeclaration
            })
            .ok_or_else(|| {
                ResolveError::at_node(
                    "import specifier outside an import declaration",
                    self.arena,
                    index,
                )
            })?;
        let Some(NodeData::ImportDecl {
            module_specifier, ..
        }) = self.arena.get(import_declaration).map(|n| &n.data)
        else {
            return Err(ResolveError::at_node(
                "malformed import declaration",
                self.arena,
                import_declaration,
            ));
        };

        let Some(external_module) = self.oracle.resolve_external_module(*module_specifier) else {
            self.sink.warn(&format!(
                "failed to resolve external module {}",
                self.arena.node_text(*module_specifier)
            ));
            return Ok(Resolution::Resolved(self.direct_type_and_symbol(index)));
        };

        // Imported name on the module side: `propertyName` when the binding
        // is locally aliased (`import { x as y }`), else the local name.
        let NodeData::Specifier {
            name,
            property_name,
        } = node.data
        else {
            return Err(ResolveError::at_node(
                "malformed import specifier",
                self.arena,
                index,
            ));
        };
        let lookup = if property_name.is_some() {
            property_name
        } else {
            name
        };
        let member_name = self.arena.node_text(lookup);

        let member = self
            .oracle
            .member_of_module_exports(member_name, external_module);
        if let Some(member) = member {
            if let Some(member_declaration) = self.oracle.symbol_declaration(member) {
                return Ok(Resolution::Resolved(Definition {
                    symbol: Some(member),
                    ty: Some(self.oracle.type_at(member_declaration)),
                }));
            }
        }

        self.sink.warn(&format!(
            "could not find member {member_name} in {}",
            self.oracle.symbol_name(external_module)
        ));
        Ok(Resolution::Resolved(self.direct_type_and_symbol(index)))
    }
}
