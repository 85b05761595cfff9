//! Type shape flags.

use bitflags::bitflags;

bitflags! {
    /// Coarse classification of a type as the resolution engine needs it:
    /// whether it is the checker's error sentinel, an intrinsic/primitive
    /// with no source declaration, array-shaped, or a union.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct TypeFlags: u16 {
        /// The checker's error/unresolved sentinel.
        const ERROR = 1 << 0;
        /// Intrinsic/primitive type with no source declaration
        /// (`number`, `string`, `boolean`, `undefined`, ...).
        const INTRINSIC = 1 << 1;
        /// Array-shaped; expected to expose a numeric-index element type.
        const ARRAY = 1 << 2;
        /// Union of unrelated constituents; typically symbol-less.
        const UNION = 1 << 3;
    }
}
