//! Table-backed oracle implementation.
//!
//! Hosts (and test fixtures) populate `ProgramOracle` with the answers
//! their checker produced; the resolution engine consumes it through the
//! `TypeOracle` trait. The engine never mutates these tables.

use rustc_hash::FxHashMap;
use tsref_syntax::NodeIndex;

use crate::flags::TypeFlags;
use crate::ids::{SignatureId, SymbolId, TypeId};
use crate::oracle::TypeOracle;

#[derive(Debug, Default)]
struct SymbolData {
    name: String,
    declarations: Vec<NodeIndex>,
    alias_target: Option<SymbolId>,
    declared_type: Option<TypeId>,
    exports: FxHashMap<String, SymbolId>,
}

#[derive(Debug, Default)]
struct TypeData {
    display: String,
    flags: TypeFlags,
    symbol: Option<SymbolId>,
    number_index: Option<TypeId>,
    properties: FxHashMap<String, SymbolId>,
}

#[derive(Debug)]
struct SignatureData {
    return_type: TypeId,
}

/// A queryable program model assembled from tables.
pub struct ProgramOracle {
    symbols: Vec<SymbolData>,
    types: Vec<TypeData>,
    signatures: Vec<SignatureData>,

    symbol_at: FxHashMap<NodeIndex, SymbolId>,
    type_at: FxHashMap<NodeIndex, TypeId>,
    /// Location-specific symbol types; falls back to `type_of_symbol`.
    type_of_symbol_at: FxHashMap<(SymbolId, NodeIndex), TypeId>,
    type_of_symbol: FxHashMap<SymbolId, TypeId>,
    contextual_type_at: FxHashMap<NodeIndex, TypeId>,
    resolved_signatures: FxHashMap<NodeIndex, SignatureId>,
    external_modules: FxHashMap<NodeIndex, SymbolId>,

    /// The checker's error/unresolved sentinel, created up front so
    /// `type_at` can always answer.
    error_type: TypeId,
}

impl ProgramOracle {
    pub fn new() -> ProgramOracle {
        let mut oracle = ProgramOracle {
            symbols: Vec::new(),
            types: Vec::new(),
            signatures: Vec::new(),
            symbol_at: FxHashMap::default(),
            type_at: FxHashMap::default(),
            type_of_symbol_at: FxHashMap::default(),
            type_of_symbol: FxHashMap::default(),
            contextual_type_at: FxHashMap::default(),
            resolved_signatures: FxHashMap::default(),
            external_modules: FxHashMap::default(),
            error_type: TypeId(0),
        };
        oracle.error_type = oracle.add_type("<error>", TypeFlags::ERROR);
        oracle
    }

    pub fn error_type(&self) -> TypeId {
        self.error_type
    }

    // ========================================================================
    // Table population
    // ========================================================================

    pub fn add_symbol(&mut self, name: impl Into<String>) -> SymbolId {
        let id = SymbolId(self.symbols.len() as u32);
        self.symbols.push(SymbolData {
            name: name.into(),
            ..SymbolData::default()
        });
        id
    }

    pub fn add_type(&mut self, display: impl Into<String>, flags: TypeFlags) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(TypeData {
            display: display.into(),
            flags,
            ..TypeData::default()
        });
        id
    }

    pub fn add_signature(&mut self, return_type: TypeId) -> SignatureId {
        let id = SignatureId(self.signatures.len() as u32);
        self.signatures.push(SignatureData { return_type });
        id
    }

    pub fn add_declaration(&mut self, symbol: SymbolId, node: NodeIndex) {
        self.symbols[symbol.0 as usize].declarations.push(node);
    }

    pub fn set_alias_target(&mut self, symbol: SymbolId, target: SymbolId) {
        self.symbols[symbol.0 as usize].alias_target = Some(target);
    }

    pub fn set_declared_type(&mut self, symbol: SymbolId, ty: TypeId) {
        self.symbols[symbol.0 as usize].declared_type = Some(ty);
    }

    pub fn add_module_export(&mut self, module: SymbolId, name: impl Into<String>, member: SymbolId) {
        self.symbols[module.0 as usize]
            .exports
            .insert(name.into(), member);
    }

    pub fn set_type_symbol(&mut self, ty: TypeId, symbol: SymbolId) {
        self.types[ty.0 as usize].symbol = Some(symbol);
    }

    pub fn set_number_index_type(&mut self, ty: TypeId, element: TypeId) {
        self.types[ty.0 as usize].number_index = Some(element);
    }

    pub fn add_type_property(&mut self, ty: TypeId, name: impl Into<String>, member: SymbolId) {
        self.types[ty.0 as usize].properties.insert(name.into(), member);
    }

    pub fn set_symbol_at(&mut self, node: NodeIndex, symbol: SymbolId) {
        self.symbol_at.insert(node, symbol);
    }

    pub fn set_type_at(&mut self, node: NodeIndex, ty: TypeId) {
        self.type_at.insert(node, ty);
    }

    /// Default type of a symbol, used wherever no location-specific entry
    /// exists.
    pub fn set_type_of_symbol(&mut self, symbol: SymbolId, ty: TypeId) {
        self.type_of_symbol.insert(symbol, ty);
    }

    pub fn set_type_of_symbol_at(&mut self, symbol: SymbolId, node: NodeIndex, ty: TypeId) {
        self.type_of_symbol_at.insert((symbol, node), ty);
    }

    pub fn set_contextual_type_at(&mut self, node: NodeIndex, ty: TypeId) {
        self.contextual_type_at.insert(node, ty);
    }

    pub fn set_resolved_signature(&mut self, call: NodeIndex, signature: SignatureId) {
        self.resolved_signatures.insert(call, signature);
    }

    pub fn set_external_module(&mut self, specifier: NodeIndex, module: SymbolId) {
        self.external_modules.insert(specifier, module);
    }
}

impl TypeOracle for ProgramOracle {
    fn symbol_at(&self, node: NodeIndex) -> Option<SymbolId> {
        self.symbol_at.get(&node).copied()
    }

    fn type_at(&self, node: NodeIndex) -> TypeId {
        self.type_at.get(&node).copied().unwrap_or(self.error_type)
    }

    fn type_of_symbol_at(&self, symbol: SymbolId, node: NodeIndex) -> TypeId {
        if let Some(ty) = self.type_of_symbol_at.get(&(symbol, node)) {
            return *ty;
        }
        self.type_of_symbol
            .get(&symbol)
            .copied()
            .unwrap_or(self.error_type)
    }

    fn contextual_type_at(&self, node: NodeIndex) -> Option<TypeId> {
        self.contextual_type_at.get(&node).copied()
    }

    fn resolved_signature_of(&self, call: NodeIndex) -> Option<SignatureId> {
        self.resolved_signatures.get(&call).copied()
    }

    fn resolve_external_module(&self, specifier: NodeIndex) -> Option<SymbolId> {
        self.external_modules.get(&specifier).copied()
    }

    fn member_of_module_exports(&self, name: &str, module: SymbolId) -> Option<SymbolId> {
        self.symbols[module.0 as usize].exports.get(name).copied()
    }

    fn declarations_of(&self, symbol: SymbolId) -> &[NodeIndex] {
        &self.symbols[symbol.0 as usize].declarations
    }

    fn alias_target_of(&self, symbol: SymbolId) -> SymbolId {
        self.symbols[symbol.0 as usize]
            .alias_target
            .unwrap_or(symbol)
    }

    fn declared_type_of(&self, symbol: SymbolId) -> TypeId {
        self.symbols[symbol.0 as usize]
            .declared_type
            .unwrap_or(self.error_type)
    }

    fn symbol_name(&self, symbol: SymbolId) -> &str {
        &self.symbols[symbol.0 as usize].name
    }

    fn type_symbol(&self, ty: TypeId) -> Option<SymbolId> {
        self.types[ty.0 as usize].symbol
    }

    fn number_index_type(&self, ty: TypeId) -> Option<TypeId> {
        self.types[ty.0 as usize].number_index
    }

    fn property_of_type(&self, name: &str, ty: TypeId) -> Option<SymbolId> {
        self.types[ty.0 as usize].properties.get(name).copied()
    }

    fn type_flags(&self, ty: TypeId) -> TypeFlags {
        self.types[ty.0 as usize].flags
    }

    fn type_display(&self, ty: TypeId) -> &str {
        &self.types[ty.0 as usize].display
    }

    fn signature_return_type(&self, signature: SignatureId) -> TypeId {
        self.signatures[signature.0 as usize].return_type
    }
}
