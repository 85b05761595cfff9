//! The type system oracle query contract.

use tsref_syntax::NodeIndex;

use crate::flags::TypeFlags;
use crate::ids::{SignatureId, SymbolId, TypeId};

/// Queries the resolution engine issues against the host's fully
/// type-checked program model.
///
/// `type_at` never fails: when the checker has no answer it returns its
/// error/unresolved sentinel (a type with `TypeFlags::ERROR`). Everything
/// else is `Option` for genuinely absent answers.
pub trait TypeOracle {
    // ========================================================================
    // Node queries
    // ========================================================================

    /// The symbol bound at a node, if any.
    fn symbol_at(&self, node: NodeIndex) -> Option<SymbolId>;

    /// The type of the expression/declaration at a node. Never fails; may
    /// return the error sentinel.
    fn type_at(&self, node: NodeIndex) -> TypeId;

    /// The type of `symbol` as observed at `node` (narrowed/instantiated
    /// for this location, not the symbol's generic type).
    fn type_of_symbol_at(&self, symbol: SymbolId, node: NodeIndex) -> TypeId;

    /// The contextual (expected) type at an expression position, if the
    /// surrounding usage implies one.
    fn contextual_type_at(&self, node: NodeIndex) -> Option<TypeId>;

    /// The signature selected for a call or construct expression.
    fn resolved_signature_of(&self, call: NodeIndex) -> Option<SignatureId>;

    /// Resolve a module specifier node to the external module's symbol.
    fn resolve_external_module(&self, specifier: NodeIndex) -> Option<SymbolId>;

    // ========================================================================
    // Symbol queries
    // ========================================================================

    /// Look up a named member of a module's export table.
    fn member_of_module_exports(&self, name: &str, module: SymbolId) -> Option<SymbolId>;

    /// A symbol's declaration nodes. Empty only for intrinsics.
    fn declarations_of(&self, symbol: SymbolId) -> &[NodeIndex];

    /// The alias target of a symbol; identity when the symbol is not an
    /// alias. Callers must treat `alias_target_of(s) == s` as chain
    /// termination.
    fn alias_target_of(&self, symbol: SymbolId) -> SymbolId;

    /// The declared type of a symbol (its type as a declaration, not at a
    /// use site).
    fn declared_type_of(&self, symbol: SymbolId) -> TypeId;

    fn symbol_name(&self, symbol: SymbolId) -> &str;

    // ========================================================================
    // Type queries
    // ========================================================================

    /// The symbol a type points back at (a class/interface type's
    /// declaration), if any.
    fn type_symbol(&self, ty: TypeId) -> Option<SymbolId>;

    /// The numeric-index element type of an array-shaped type.
    fn number_index_type(&self, ty: TypeId) -> Option<TypeId>;

    /// A named property of a type, searching the type's own members only
    /// (no inherited lookup; the engine walks ancestor types itself).
    fn property_of_type(&self, name: &str, ty: TypeId) -> Option<SymbolId>;

    fn type_flags(&self, ty: TypeId) -> TypeFlags;

    /// Human-readable type display, for listings and diagnostics.
    fn type_display(&self, ty: TypeId) -> &str;

    fn signature_return_type(&self, signature: SignatureId) -> TypeId;

    // ========================================================================
    // Provided helpers
    // ========================================================================

    fn is_error_type(&self, ty: TypeId) -> bool {
        self.type_flags(ty).contains(TypeFlags::ERROR)
    }

    fn is_intrinsic_type(&self, ty: TypeId) -> bool {
        self.type_flags(ty).contains(TypeFlags::INTRINSIC)
    }

    fn is_array_type(&self, ty: TypeId) -> bool {
        self.type_flags(ty).contains(TypeFlags::ARRAY)
    }

    /// First declaration of a symbol, the node used for indexing and
    /// self-reference checks.
    fn symbol_declaration(&self, symbol: SymbolId) -> Option<NodeIndex> {
        self.declarations_of(symbol).first().copied()
    }
}
