//! Expression family operations: identifiers, assignments, and the
//! contextual (expected-type) positions.

use tsref_syntax::{NodeData, NodeIndex, classify};

use super::{Resolution, ResolveResult, Resolver};

impl Resolver<'_> {
    /// An identifier that names a declaration takes its meaning from the
    /// declaration; any other identifier resolves directly, then follows
    /// its alias chain (import bindings, re-exports).
    pub(super) fn define_identifier(&self, index: NodeIndex) -> ResolveResult {
        if classify::is_declaration_name(self.arena, index) {
            return self.define_symbol(self.arena.parent_of(index));
        }
        self.follow_symbol(index, Resolution::Resolved(self.direct_type_and_symbol(index)))
    }

    /// Assignment expressions take their meaning from the assignment
    /// target; every other binary expression answers with its own type
    /// (comma yields the right operand's type, relational operators a
    /// boolean, and so on - the oracle already folded that in).
    pub(super) fn define_binary_expression(&self, index: NodeIndex) -> ResolveResult {
        if classify::is_assignment_expression(self.arena, index) {
            if let Some(NodeData::Binary { left, .. }) = self.arena.get(index).map(|n| &n.data) {
                return self.define_symbol(*left);
            }
        }
        Ok(Resolution::Resolved(self.direct_type_and_symbol(index)))
    }

    /// Contextual positions: what the surrounding usage expects is more
    /// informative than the node's own type.
    pub(super) fn define_contextual(&self, index: NodeIndex) -> ResolveResult {
        Ok(Resolution::Resolved(self.contextual_type_and_symbol(index)?))
    }

    /// A spread assignment's meaning is the contextual expectation placed
    /// on its source expression.
    pub(super) fn define_spread_assignment(&self, index: NodeIndex) -> ResolveResult {
        if let Some(NodeData::Wrapper { expression }) = self.arena.get(index).map(|n| &n.data) {
            if expression.is_some() {
                return Ok(Resolution::Resolved(
                    self.contextual_type_and_symbol(*expression)?,
                ));
            }
        }
        Ok(Resolution::Unhandled)
    }

    /// JSX expression containers resolve through their inner expression.
    pub(super) fn define_jsx_expression(&self, index: NodeIndex) -> ResolveResult {
        if let Some(NodeData::Wrapper { expression }) = self.arena.get(index).map(|n| &n.data) {
            if expression.is_some() {
                return self.define_symbol(*expression);
            }
        }
        Ok(Resolution::Unhandled)
    }
}
