//! Arena-allocated syntax trees.
//!
//! Nodes live in one flat `Vec` addressed by `NodeIndex`; parent links are
//! kept in a parallel vector and wired at node creation, so the tree is a
//! pure index graph with no ownership cycles. The arena also owns the
//! source file table, which is why node text can be sliced on demand.

use smallvec::SmallVec;
use tsref_common::{FileId, LineMap, Span};

use crate::kind::SyntaxKind;

/// Handle to a node in the arena. `NONE` is the absent sentinel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    #[inline]
    pub fn is_some(self) -> bool {
        self != Self::NONE
    }
}

/// An ordered list of child nodes.
#[derive(Clone, Debug, Default)]
pub struct NodeList {
    pub nodes: SmallVec<[NodeIndex; 4]>,
}

impl NodeList {
    pub fn new() -> NodeList {
        NodeList::default()
    }

    pub fn from_nodes(nodes: impl IntoIterator<Item = NodeIndex>) -> NodeList {
        NodeList {
            nodes: nodes.into_iter().collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.nodes.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Kind-specific payload. One variant per structural shape; kinds that share
/// a shape share a variant (e.g. property declarations, signatures, and
/// assignments all carry `Property` data).
#[derive(Clone, Debug)]
pub enum NodeData {
    /// Tokens, keywords, literals, and other leaf kinds.
    None,
    SourceFile {
        statements: NodeList,
    },
    /// `VariableStatement` wrapping a declaration list.
    VariableStatement {
        declaration_list: NodeIndex,
    },
    VariableDeclarationList {
        declarations: NodeList,
    },
    Variable {
        name: NodeIndex,
        type_annotation: NodeIndex,
        initializer: NodeIndex,
    },
    /// Function-like kinds: declarations, expressions, arrows, methods,
    /// accessors, constructors.
    Function {
        name: NodeIndex,
        parameters: NodeList,
        return_type: NodeIndex,
        body: NodeIndex,
    },
    Parameter {
        name: NodeIndex,
        type_annotation: NodeIndex,
        initializer: NodeIndex,
    },
    /// Class and interface declarations.
    ClassLike {
        name: NodeIndex,
        heritage_clauses: NodeList,
        members: NodeList,
    },
    Enum {
        name: NodeIndex,
        members: NodeList,
    },
    EnumMember {
        name: NodeIndex,
        initializer: NodeIndex,
    },
    Module {
        name: NodeIndex,
        body: NodeIndex,
    },
    /// Property declarations/signatures, property assignments, shorthand
    /// assignments, enum-like named members, JSX attributes.
    Property {
        name: NodeIndex,
        type_annotation: NodeIndex,
        initializer: NodeIndex,
    },
    HeritageClause {
        types: NodeList,
    },
    ExpressionWithTypeArguments {
        expression: NodeIndex,
        type_arguments: NodeList,
    },
    TypeRef {
        type_name: NodeIndex,
        type_arguments: NodeList,
    },
    /// Call and construct expressions; tagged templates reuse this with the
    /// template as the single argument.
    Call {
        expression: NodeIndex,
        arguments: NodeList,
    },
    /// Property access (`name` is an identifier), element access (`name` is
    /// the argument expression), and qualified names.
    Access {
        expression: NodeIndex,
        name: NodeIndex,
    },
    Binary {
        left: NodeIndex,
        operator: SyntaxKind,
        right: NodeIndex,
    },
    /// Prefix and postfix unary expressions.
    Unary {
        operator: SyntaxKind,
        operand: NodeIndex,
    },
    Conditional {
        condition: NodeIndex,
        when_true: NodeIndex,
        when_false: NodeIndex,
    },
    /// Single-expression wrappers: parenthesized, await, non-null, delete,
    /// typeof, void, spread, yield, template spans, computed property names,
    /// JSX expression containers, expression statements, export assignments.
    Wrapper {
        expression: NodeIndex,
    },
    Template {
        spans: NodeList,
    },
    ObjectLiteral {
        properties: NodeList,
    },
    ArrayLiteral {
        elements: NodeList,
    },
    Block {
        statements: NodeList,
    },
    Return {
        expression: NodeIndex,
    },
    If {
        condition: NodeIndex,
        then_statement: NodeIndex,
        else_statement: NodeIndex,
    },
    ImportDecl {
        import_clause: NodeIndex,
        module_specifier: NodeIndex,
    },
    ImportClause {
        name: NodeIndex,
        named_bindings: NodeIndex,
    },
    /// `NamedImports` and `NamedExports`.
    NamedBindings {
        elements: NodeList,
    },
    /// Import/export specifiers and namespace imports. `property_name` is
    /// the module-side name when the binding is locally aliased.
    Specifier {
        name: NodeIndex,
        property_name: NodeIndex,
    },
    ExportDecl {
        export_clause: NodeIndex,
        module_specifier: NodeIndex,
    },
    /// JSX elements (`attributes` points at a `JsxAttributes` node).
    Jsx {
        tag: NodeIndex,
        attributes: NodeIndex,
        children: NodeList,
    },
    JsxAttributes {
        properties: NodeList,
    },
    TypeParam {
        name: NodeIndex,
    },
}

#[derive(Clone, Debug)]
pub struct Node {
    pub kind: SyntaxKind,
    pub span: Span,
    pub data: NodeData,
}

impl Node {
    pub fn new(kind: SyntaxKind, span: Span, data: NodeData) -> Node {
        Node { kind, span, data }
    }
}

/// Per-file bookkeeping: name, full text, line map, and the root node.
#[derive(Clone, Debug)]
pub struct SourceFileData {
    pub file_name: String,
    pub text: String,
    pub line_map: LineMap,
    pub root: NodeIndex,
}

#[derive(Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
    /// Parent link per node, parallel to `nodes`.
    parents: Vec<NodeIndex>,
    files: Vec<SourceFileData>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    pub fn with_capacity(capacity: usize) -> NodeArena {
        NodeArena {
            nodes: Vec::with_capacity(capacity),
            parents: Vec::with_capacity(capacity),
            files: Vec::new(),
        }
    }

    // ========================================================================
    // Source files
    // ========================================================================

    pub fn add_source_file_text(
        &mut self,
        file_name: impl Into<String>,
        text: impl Into<String>,
    ) -> FileId {
        let text = text.into();
        let line_map = LineMap::new(&text);
        let id = FileId(self.files.len() as u32);
        self.files.push(SourceFileData {
            file_name: file_name.into(),
            text,
            line_map,
            root: NodeIndex::NONE,
        });
        id
    }

    pub fn set_root(&mut self, file: FileId, root: NodeIndex) {
        self.files[file.0 as usize].root = root;
    }

    pub fn file(&self, file: FileId) -> &SourceFileData {
        &self.files[file.0 as usize]
    }

    pub fn file_name(&self, file: FileId) -> &str {
        &self.files[file.0 as usize].file_name
    }

    pub fn files(&self) -> impl Iterator<Item = (FileId, &SourceFileData)> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, f)| (FileId(i as u32), f))
    }

    // ========================================================================
    // Node creation
    // ========================================================================

    /// Add a node and wire the parent links of every child named in its
    /// payload. Children must already exist in the arena.
    pub fn add_node(&mut self, kind: SyntaxKind, span: Span, data: NodeData) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(Node::new(kind, span, data));
        self.parents.push(NodeIndex::NONE);
        let mut children: SmallVec<[NodeIndex; 8]> = SmallVec::new();
        self.collect_children(index, &mut children);
        for child in children {
            self.set_parent(child, index);
        }
        index
    }

    /// Add a leaf token node.
    pub fn add_token(&mut self, kind: SyntaxKind, span: Span) -> NodeIndex {
        self.add_node(kind, span, NodeData::None)
    }

    #[inline]
    fn set_parent(&mut self, child: NodeIndex, parent: NodeIndex) {
        if child.is_some() {
            if let Some(slot) = self.parents.get_mut(child.0 as usize) {
                *slot = parent;
            }
        }
    }

    // ========================================================================
    // Node access
    // ========================================================================

    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            return None;
        }
        self.nodes.get(index.0 as usize)
    }

    pub fn kind_of(&self, index: NodeIndex) -> SyntaxKind {
        self.get(index).map_or(SyntaxKind::Unknown, |n| n.kind)
    }

    pub fn span_of(&self, index: NodeIndex) -> Option<Span> {
        self.get(index).map(|n| n.span)
    }

    #[inline]
    pub fn parent_of(&self, index: NodeIndex) -> NodeIndex {
        if index.is_none() {
            return NodeIndex::NONE;
        }
        self.parents
            .get(index.0 as usize)
            .copied()
            .unwrap_or(NodeIndex::NONE)
    }

    /// Walk up the parent chain, returning the first ancestor (starting from
    /// the node itself) satisfying the predicate.
    pub fn find_ancestor(
        &self,
        index: NodeIndex,
        predicate: impl Fn(&NodeArena, NodeIndex) -> bool,
    ) -> Option<NodeIndex> {
        let mut current = index;
        while current.is_some() {
            if predicate(self, current) {
                return Some(current);
            }
            current = self.parent_of(current);
        }
        None
    }

    /// The source text covered by a node's span.
    pub fn node_text(&self, index: NodeIndex) -> &str {
        let Some(node) = self.get(index) else {
            return "";
        };
        if node.span.file.is_none() {
            return "";
        }
        let file = &self.files[node.span.file.0 as usize];
        &file.text[node.span.start as usize..node.span.end as usize]
    }

    /// The `name` child of a named declaration, if the kind carries one.
    pub fn name_of(&self, index: NodeIndex) -> NodeIndex {
        let Some(node) = self.get(index) else {
            return NodeIndex::NONE;
        };
        match &node.data {
            NodeData::Variable { name, .. }
            | NodeData::Function { name, .. }
            | NodeData::Parameter { name, .. }
            | NodeData::ClassLike { name, .. }
            | NodeData::Enum { name, .. }
            | NodeData::EnumMember { name, .. }
            | NodeData::Module { name, .. }
            | NodeData::Property { name, .. }
            | NodeData::ImportClause { name, .. }
            | NodeData::Specifier { name, .. }
            | NodeData::TypeParam { name } => *name,
            _ => NodeIndex::NONE,
        }
    }

    /// Count of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ========================================================================
    // Child traversal
    // ========================================================================

    /// Push every direct child of `index` (in source order) into `out`.
    pub fn collect_children(&self, index: NodeIndex, out: &mut SmallVec<[NodeIndex; 8]>) {
        let Some(node) = self.get(index) else {
            return;
        };
        fn push(out: &mut SmallVec<[NodeIndex; 8]>, idx: NodeIndex) {
            if idx.is_some() {
                out.push(idx);
            }
        }
        fn push_list(out: &mut SmallVec<[NodeIndex; 8]>, list: &NodeList) {
            for idx in list.iter() {
                if idx.is_some() {
                    out.push(idx);
                }
            }
        }
        match &node.data {
            NodeData::None => {}
            NodeData::SourceFile { statements } => push_list(out, statements),
            NodeData::VariableStatement { declaration_list } => push(out, *declaration_list),
            NodeData::VariableDeclarationList { declarations } => push_list(out, declarations),
            NodeData::Variable {
                name,
                type_annotation,
                initializer,
            }
            | NodeData::Parameter {
                name,
                type_annotation,
                initializer,
            }
            | NodeData::Property {
                name,
                type_annotation,
                initializer,
            } => {
                push(out, *name);
                push(out, *type_annotation);
                push(out, *initializer);
            }
            NodeData::Function {
                name,
                parameters,
                return_type,
                body,
            } => {
                push(out, *name);
                push_list(out, parameters);
                push(out, *return_type);
                push(out, *body);
            }
            NodeData::ClassLike {
                name,
                heritage_clauses,
                members,
            } => {
                push(out, *name);
                push_list(out, heritage_clauses);
                push_list(out, members);
            }
            NodeData::Enum { name, members } => {
                push(out, *name);
                push_list(out, members);
            }
            NodeData::EnumMember { name, initializer } => {
                push(out, *name);
                push(out, *initializer);
            }
            NodeData::Module { name, body } => {
                push(out, *name);
                push(out, *body);
            }
            NodeData::HeritageClause { types } => push_list(out, types),
            NodeData::ExpressionWithTypeArguments {
                expression,
                type_arguments,
            } => {
                push(out, *expression);
                push_list(out, type_arguments);
            }
            NodeData::TypeRef {
                type_name,
                type_arguments,
            } => {
                push(out, *type_name);
                push_list(out, type_arguments);
            }
            NodeData::Call {
                expression,
                arguments,
            } => {
                push(out, *expression);
                push_list(out, arguments);
            }
            NodeData::Access { expression, name } => {
                push(out, *expression);
                push(out, *name);
            }
            NodeData::Binary { left, right, .. } => {
                push(out, *left);
                push(out, *right);
            }
            NodeData::Unary { operand, .. } => push(out, *operand),
            NodeData::Conditional {
                condition,
                when_true,
                when_false,
            } => {
                push(out, *condition);
                push(out, *when_true);
                push(out, *when_false);
            }
            NodeData::Wrapper { expression } => push(out, *expression),
            NodeData::Template { spans } => push_list(out, spans),
            NodeData::ObjectLiteral { properties } => push_list(out, properties),
            NodeData::ArrayLiteral { elements } => push_list(out, elements),
            NodeData::Block { statements } => push_list(out, statements),
            NodeData::Return { expression } => push(out, *expression),
            NodeData::If {
                condition,
                then_statement,
                else_statement,
            } => {
                push(out, *condition);
                push(out, *then_statement);
                push(out, *else_statement);
            }
            NodeData::ImportDecl {
                import_clause,
                module_specifier,
            } => {
                push(out, *import_clause);
                push(out, *module_specifier);
            }
            NodeData::ImportClause {
                name,
                named_bindings,
            } => {
                push(out, *name);
                push(out, *named_bindings);
            }
            NodeData::NamedBindings { elements } => push_list(out, elements),
            NodeData::Specifier {
                name,
                property_name,
            } => {
                push(out, *property_name);
                push(out, *name);
            }
            NodeData::ExportDecl {
                export_clause,
                module_specifier,
            } => {
                push(out, *export_clause);
                push(out, *module_specifier);
            }
            NodeData::Jsx {
                tag,
                attributes,
                children,
            } => {
                push(out, *tag);
                push(out, *attributes);
                push_list(out, children);
            }
            NodeData::JsxAttributes { properties } => push_list(out, properties),
            NodeData::TypeParam { name } => push(out, *name),
        }
    }

    /// Invoke `f` for each direct child of `index`.
    pub fn for_each_child(&self, index: NodeIndex, mut f: impl FnMut(NodeIndex)) {
        let mut children: SmallVec<[NodeIndex; 8]> = SmallVec::new();
        self.collect_children(index, &mut children);
        for child in children {
            f(child);
        }
    }
}
