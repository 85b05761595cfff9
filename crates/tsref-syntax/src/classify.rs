//! Node classification predicates and shape narrowing.
//!
//! These are pure functions over a node's kind and shape. They back the
//! dispatch resolver's invariants: a mismatch between an operation and the
//! node shape it expects is a wiring bug, surfaced through `ShapeMismatch`
//! rather than a recoverable condition.

use tsref_common::Span;

use crate::arena::{Node, NodeArena, NodeIndex};
use crate::kind::SyntaxKind;

/// True for kinds that occupy an expression position, including the JSX
/// attribute-container position (which the checker treats contextually even
/// though it is not a grammar expression).
pub fn is_expression_kind(kind: SyntaxKind) -> bool {
    use SyntaxKind::*;
    match kind {
        Identifier | PrivateIdentifier | ThisKeyword | SuperKeyword | NullKeyword
        | TrueKeyword | FalseKeyword | StringLiteral | NumericLiteral
        | NoSubstitutionTemplateLiteral | RegularExpressionLiteral | ArrayLiteralExpression
        | ObjectLiteralExpression | PropertyAccessExpression | ElementAccessExpression
        | CallExpression | NewExpression | TaggedTemplateExpression | ParenthesizedExpression
        | FunctionExpression | ArrowFunction | DeleteExpression | TypeOfExpression
        | VoidExpression | AwaitExpression | PrefixUnaryExpression | PostfixUnaryExpression
        | BinaryExpression | ConditionalExpression | TemplateExpression | YieldExpression
        | SpreadElement | ClassExpression | NonNullExpression | MetaProperty | AsExpression
        | JsxElement | JsxSelfClosingElement | JsxFragment | JsxExpression
        | JsxSpreadAttribute | JsxAttributes => true,
        _ => false,
    }
}

/// True for declaration kinds (value, type, and member declarations, plus
/// the binding forms of imports and exports).
pub fn is_declaration_kind(kind: SyntaxKind) -> bool {
    use SyntaxKind::*;
    match kind {
        TypeParameter | Parameter | PropertySignature | PropertyDeclaration | MethodSignature
        | MethodDeclaration | Constructor | GetAccessor | SetAccessor | VariableDeclaration
        | FunctionDeclaration | ClassDeclaration | ClassExpression | InterfaceDeclaration
        | TypeAliasDeclaration | EnumDeclaration | EnumMember | ModuleDeclaration
        | FunctionExpression | ArrowFunction | PropertyAssignment | ShorthandPropertyAssignment
        | SpreadAssignment | ImportClause | NamespaceImport | ImportSpecifier | ExportSpecifier
        | NamespaceExport | ImportEqualsDeclaration | JsxAttribute => true,
        _ => false,
    }
}

/// A declaration that carries a name child.
pub fn is_named_declaration(arena: &NodeArena, index: NodeIndex) -> bool {
    is_declaration_kind(arena.kind_of(index)) && arena.name_of(index).is_some()
}

/// Class-like and interface declarations: the kinds that can carry heritage
/// clauses.
pub fn is_inheriting_declaration_kind(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::ClassDeclaration | SyntaxKind::ClassExpression | SyntaxKind::InterfaceDeclaration
    )
}

/// Function-like kinds: everything with parameters and an optional return
/// type annotation.
pub fn is_function_like_kind(kind: SyntaxKind) -> bool {
    use SyntaxKind::*;
    matches!(
        kind,
        FunctionDeclaration
            | FunctionExpression
            | ArrowFunction
            | MethodDeclaration
            | MethodSignature
            | Constructor
            | GetAccessor
            | SetAccessor
    )
}

/// A binary expression whose operator is in the assignment operator set.
pub fn is_assignment_expression(arena: &NodeArena, index: NodeIndex) -> bool {
    let Some(node) = arena.get(index) else {
        return false;
    };
    if node.kind != SyntaxKind::BinaryExpression {
        return false;
    }
    match node.data {
        crate::arena::NodeData::Binary { operator, .. } => operator.is_assignment_operator(),
        _ => false,
    }
}

/// True when `index` is the name child of its parent declaration.
pub fn is_declaration_name(arena: &NodeArena, index: NodeIndex) -> bool {
    let parent = arena.parent_of(index);
    parent.is_some() && arena.name_of(parent) == index
}

/// Shape expectation failure: an operation received a node of a kind it has
/// no rule for. This models a dispatch-table wiring bug, never bad input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapeMismatch {
    pub expected: &'static str,
    pub found: SyntaxKind,
    pub span: Option<Span>,
}

impl std::fmt::Display for ShapeMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unexpected node kind {}, expected {}", self.found, self.expected)
    }
}

/// Narrow a node to an expected shape. The caller escalates a mismatch to
/// the fatal tier; there is no recovery path.
pub fn expect_node<'a>(
    arena: &'a NodeArena,
    index: NodeIndex,
    expected: &'static str,
    predicate: impl Fn(SyntaxKind) -> bool,
) -> Result<&'a Node, ShapeMismatch> {
    match arena.get(index) {
        Some(node) if predicate(node.kind) => Ok(node),
        Some(node) => Err(ShapeMismatch {
            expected,
            found: node.kind,
            span: Some(node.span),
        }),
        None => Err(ShapeMismatch {
            expected,
            found: SyntaxKind::Unknown,
            span: None,
        }),
    }
}
