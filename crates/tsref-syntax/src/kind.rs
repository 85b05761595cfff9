//! The closed syntax kind enumeration.
//!
//! Every node and operator token the resolution engine dispatches on gets a
//! kind here. Discriminants are grouped so that token and node families can
//! be range-checked (assignment operators, JSDoc nodes).

use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[repr(u16)]
pub enum SyntaxKind {
    Unknown = 0,

    // Punctuation and non-assignment operator tokens
    CommaToken = 1,
    LessThanToken,
    GreaterThanToken,
    PlusToken,
    MinusToken,
    AsteriskToken,
    SlashToken,
    PlusPlusToken,
    MinusMinusToken,
    AmpersandAmpersandToken,
    BarBarToken,
    ExclamationToken,
    QuestionQuestionToken,

    // Assignment operator tokens (contiguous; see `is_assignment_operator`)
    EqualsToken = 20,
    PlusEqualsToken,
    MinusEqualsToken,
    AsteriskEqualsToken,
    AsteriskAsteriskEqualsToken,
    SlashEqualsToken,
    PercentEqualsToken,
    LessThanLessThanEqualsToken,
    GreaterThanGreaterThanEqualsToken,
    GreaterThanGreaterThanGreaterThanEqualsToken,
    AmpersandEqualsToken,
    BarEqualsToken,
    CaretEqualsToken,
    AmpersandAmpersandEqualsToken,
    BarBarEqualsToken,
    QuestionQuestionEqualsToken = 35,

    // Keywords with expression positions
    ThisKeyword = 40,
    SuperKeyword,
    NullKeyword,
    TrueKeyword,
    FalseKeyword,

    // Names and literals
    Identifier = 50,
    PrivateIdentifier,
    QualifiedName,
    StringLiteral,
    NumericLiteral,
    NoSubstitutionTemplateLiteral,
    RegularExpressionLiteral,
    ComputedPropertyName,

    // Declarations and signature elements
    TypeParameter = 70,
    Parameter,
    PropertySignature,
    PropertyDeclaration,
    MethodSignature,
    MethodDeclaration,
    Constructor,
    GetAccessor,
    SetAccessor,
    VariableDeclaration,
    VariableDeclarationList,
    FunctionDeclaration,
    ClassDeclaration,
    InterfaceDeclaration,
    TypeAliasDeclaration,
    EnumDeclaration,
    EnumMember,
    ModuleDeclaration,
    ModuleBlock,

    // Type nodes
    TypeReference = 95,
    TypeQuery,
    TypeLiteral,
    ArrayType,
    ExpressionWithTypeArguments,
    HeritageClause,

    // Expressions
    ArrayLiteralExpression = 110,
    ObjectLiteralExpression,
    PropertyAccessExpression,
    ElementAccessExpression,
    CallExpression,
    NewExpression,
    TaggedTemplateExpression,
    ParenthesizedExpression,
    FunctionExpression,
    ArrowFunction,
    DeleteExpression,
    TypeOfExpression,
    VoidExpression,
    AwaitExpression,
    PrefixUnaryExpression,
    PostfixUnaryExpression,
    BinaryExpression,
    ConditionalExpression,
    TemplateExpression,
    YieldExpression,
    SpreadElement,
    ClassExpression,
    NonNullExpression,
    MetaProperty,
    AsExpression,

    // Object literal members and template parts
    TemplateSpan = 140,
    PropertyAssignment,
    ShorthandPropertyAssignment,
    SpreadAssignment,

    // Statements
    Block = 150,
    VariableStatement,
    ExpressionStatement,
    IfStatement,
    ReturnStatement,

    // Module structure, imports and exports
    SourceFile = 160,
    ImportDeclaration,
    ImportEqualsDeclaration,
    ImportClause,
    NamespaceImport,
    NamedImports,
    ImportSpecifier,
    ExportAssignment,
    ExportDeclaration,
    NamedExports,
    NamespaceExport,
    ExportSpecifier,
    ExternalModuleReference,
    NamespaceExportDeclaration,
    ImportType,

    // JSX
    JsxElement = 180,
    JsxSelfClosingElement,
    JsxOpeningElement,
    JsxClosingElement,
    JsxFragment,
    JsxAttribute,
    JsxAttributes,
    JsxSpreadAttribute,
    JsxExpression,
    JsxText,

    // JSDoc (contiguous; see `is_jsdoc`)
    JSDocTypeExpression = 200,
    JSDocNameReference,
    JSDocMemberName,
    JSDocAllType,
    JSDocNullableType,
    JSDocNonNullableType,
    JSDocOptionalType,
    JSDocFunctionType,
    JSDocVariadicType,
    JSDocComment,
    JSDocText,
    JSDocTypeLiteral,
    JSDocSignature,
    JSDocLink,
    JSDocTag,
    JSDocAugmentsTag,
    JSDocDeprecatedTag,
    JSDocParameterTag,
    JSDocReturnTag,
    JSDocThisTag,
    JSDocTypeTag,
    JSDocTemplateTag,
    JSDocTypedefTag,
    JSDocSeeTag,
    JSDocPropertyTag = 224,
}

impl SyntaxKind {
    pub const FIRST_ASSIGNMENT: SyntaxKind = SyntaxKind::EqualsToken;
    pub const LAST_ASSIGNMENT: SyntaxKind = SyntaxKind::QuestionQuestionEqualsToken;
    pub const FIRST_JSDOC: SyntaxKind = SyntaxKind::JSDocTypeExpression;
    pub const LAST_JSDOC: SyntaxKind = SyntaxKind::JSDocPropertyTag;

    /// True for the de-duplicated assignment operator set: plain assignment
    /// plus every compound arithmetic/bitwise/shift/logical/nullish form.
    #[inline]
    pub fn is_assignment_operator(self) -> bool {
        Self::FIRST_ASSIGNMENT <= self && self <= Self::LAST_ASSIGNMENT
    }

    /// True for every documentation-comment node kind.
    #[inline]
    pub fn is_jsdoc(self) -> bool {
        Self::FIRST_JSDOC <= self && self <= Self::LAST_JSDOC
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}
