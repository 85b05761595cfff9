//! Documentation-comment family operations.
//!
//! Every JSDoc node kind resolves via direct binding; the oracle already
//! associates whatever semantics these carry.

use tsref_syntax::NodeIndex;

use super::{Resolution, ResolveResult, Resolver};

impl Resolver<'_> {
    pub(super) fn define_jsdoc(&self, index: NodeIndex) -> ResolveResult {
        debug_assert!(self.arena.kind_of(index).is_jsdoc());
        Ok(Resolution::Resolved(self.direct_type_and_symbol(index)))
    }
}
