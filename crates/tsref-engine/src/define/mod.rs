//! The dispatch resolver.
//!
//! `Resolver::define_symbol` is the single recursive entry point mapping a
//! syntax node to the definition it denotes. The kind -> operation table of
//! the design is the exhaustive `match` below; operations live in the
//! family modules and are mutually recursive with `define_symbol` (return
//! statements resolve their function's return type node, function
//! expressions defer to their binding site, and so on).

mod declaration;
mod expression;
mod function;
mod import;
mod jsdoc;
mod utils;

use tsref_common::DiagnosticsSink;
use tsref_oracle::{SymbolId, TypeId, TypeOracle};
use tsref_syntax::{NodeArena, NodeIndex, SyntaxKind, classify};

use crate::error::ResolveError;

/// The resolver's unit of output: the symbol and type a reference denotes.
/// Either side can be absent on its own (an anonymous type has no symbol;
/// an import binding may carry a symbol before its type is known).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Definition {
    pub symbol: Option<SymbolId>,
    pub ty: Option<TypeId>,
}

impl Definition {
    pub fn new(symbol: Option<SymbolId>, ty: Option<TypeId>) -> Definition {
        Definition { symbol, ty }
    }

    /// Both sides present.
    pub fn is_complete(&self) -> bool {
        self.symbol.is_some() && self.ty.is_some()
    }
}

/// Three-state resolution outcome. The distinction between `Unhandled` and
/// `NoDefinition` matters to callers: the former invites a fallback, the
/// latter forbids one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// A definition was determined.
    Resolved(Definition),
    /// Affirmatively no definition exists for this node. Do not fall back.
    NoDefinition,
    /// No rule applies here. The caller may try a fallback.
    Unhandled,
}

impl Resolution {
    pub fn definition(self) -> Option<Definition> {
        match self {
            Resolution::Resolved(definition) => Some(definition),
            _ => None,
        }
    }
}

pub type ResolveResult = Result<Resolution, ResolveError>;

/// Borrowed resolution state: the arena and oracle being navigated plus the
/// injected diagnostics sink. Cheap to construct per pass.
pub struct Resolver<'a> {
    pub arena: &'a NodeArena,
    pub oracle: &'a dyn TypeOracle,
    pub sink: &'a dyn DiagnosticsSink,
}

impl<'a> Resolver<'a> {
    pub fn new(
        arena: &'a NodeArena,
        oracle: &'a dyn TypeOracle,
        sink: &'a dyn DiagnosticsSink,
    ) -> Resolver<'a> {
        Resolver {
            arena,
            oracle,
            sink,
        }
    }

    /// Resolve the definition a node denotes.
    ///
    /// Recursion is bounded: every recursive call either strictly descends,
    /// moves to a parent of a kind that does not recurse back, or follows a
    /// cycle-guarded alias chain.
    pub fn define_symbol(&self, index: NodeIndex) -> ResolveResult {
        let Some(node) = self.arena.get(index) else {
            return Ok(Resolution::Unhandled);
        };
        let kind = node.kind;

        // Documentation-comment family: never carries semantics beyond what
        // the oracle already associates with the node.
        if kind.is_jsdoc() {
            return self.define_jsdoc(index);
        }

        use SyntaxKind::*;
        match kind {
            // Invocation / function family
            CallExpression | NewExpression => self.define_call_return(index),
            ArrowFunction => Ok(Resolution::Resolved(self.direct_type_and_symbol(index))),
            FunctionExpression => self.define_symbol(self.arena.parent_of(index)),
            FunctionDeclaration => Ok(Resolution::Resolved(self.direct_type_and_symbol(index))),
            Parameter => self.define_parameter(index),
            Block => Ok(Resolution::Unhandled),
            YieldExpression => Ok(Resolution::Resolved(self.direct_type_and_symbol(index))),
            ReturnStatement => self.define_return_statement(index),

            // Import / export family
            ImportSpecifier => self.define_import_specifier(index),
            ImportType | NamespaceExportDeclaration | ImportEqualsDeclaration
            | ImportDeclaration | ImportClause | NamespaceImport | NamedImports
            | ExportAssignment | ExportDeclaration | NamedExports | NamespaceExport
            | ExportSpecifier | ExternalModuleReference | MetaProperty => {
                Ok(Resolution::Resolved(self.direct_type_and_symbol(index)))
            }

            // Identifiers and name-like references
            Identifier | PrivateIdentifier => self.define_identifier(index),
            QualifiedName | PropertyAccessExpression | ElementAccessExpression => {
                Ok(Resolution::Resolved(self.direct_type_and_symbol(index)))
            }

            // Expressions whose own type answers the question
            ParenthesizedExpression | AwaitExpression | NonNullExpression | DeleteExpression
            | TypeOfExpression | VoidExpression | PrefixUnaryExpression
            | PostfixUnaryExpression | ConditionalExpression | TemplateExpression
            | TaggedTemplateExpression | NoSubstitutionTemplateLiteral | StringLiteral
            | NumericLiteral | RegularExpressionLiteral | TrueKeyword | FalseKeyword
            | NullKeyword | ThisKeyword | SuperKeyword | AsExpression | ClassExpression
            | TemplateSpan | ComputedPropertyName => {
                Ok(Resolution::Resolved(self.direct_type_and_symbol(index)))
            }
            BinaryExpression => self.define_binary_expression(index),

            // Contextual (expected-type) positions
            ObjectLiteralExpression | ArrayLiteralExpression | SpreadElement | JsxAttributes
            | JsxSpreadAttribute => self.define_contextual(index),
            SpreadAssignment => self.define_spread_assignment(index),
            JsxExpression => self.define_jsx_expression(index),

            // JSX structure
            JsxElement | JsxSelfClosingElement | JsxOpeningElement | JsxFragment
            | JsxAttribute => Ok(Resolution::Resolved(self.direct_type_and_symbol(index))),
            JsxClosingElement | JsxText => Ok(Resolution::Unhandled),

            // Declaration family
            VariableDeclaration | ClassDeclaration | InterfaceDeclaration
            | TypeAliasDeclaration | EnumDeclaration | EnumMember | ModuleDeclaration
            | Constructor | TypeParameter => {
                Ok(Resolution::Resolved(self.direct_type_and_symbol(index)))
            }
            PropertyDeclaration | MethodDeclaration | GetAccessor | SetAccessor => {
                self.define_class_member(index)
            }
            PropertySignature | MethodSignature | PropertyAssignment
            | ShorthandPropertyAssignment => {
                Ok(Resolution::Resolved(self.direct_type_and_symbol(index)))
            }
            ExpressionWithTypeArguments | TypeReference | TypeQuery | TypeLiteral
            | ArrayType => Ok(Resolution::Resolved(self.direct_type_and_symbol(index))),

            // Structure with no definition semantics of its own
            SourceFile | VariableStatement | VariableDeclarationList | ExpressionStatement
            | IfStatement | ModuleBlock | HeritageClause => Ok(Resolution::Unhandled),

            // Tokens, operators, and anything else: no rule.
            _ => Ok(Resolution::Unhandled),
        }
    }

    /// Escalate a shape mismatch to the fatal tier with node context.
    pub(crate) fn fatal_shape(
        &self,
        mismatch: classify::ShapeMismatch,
        node: NodeIndex,
    ) -> ResolveError {
        ResolveError::at_node(mismatch.to_string(), self.arena, node)
    }
}
