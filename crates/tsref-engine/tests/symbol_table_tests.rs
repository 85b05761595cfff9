//! Reverse index construction.

mod common;

use common::Fixture;
use tsref_common::{CollectingSink, NullSink};
use tsref_engine::{Config, Resolution, extract_symbol_summary, parse_symbol_table};
use tsref_oracle::TypeFlags;
use tsref_syntax::{NodeData, NodeIndex, NodeList, SyntaxKind};

/// `const value = start; value;` with the reference wired to the variable's
/// symbol.
fn variable_fixture() -> (Fixture, NodeIndex, NodeIndex) {
    let mut fx = Fixture::new("app.ts", "const value = start;\nvalue;");
    let name = fx.token(SyntaxKind::Identifier, 6, 11);
    let initializer = fx.token(SyntaxKind::Identifier, 14, 19);
    let declaration = fx.node(
        SyntaxKind::VariableDeclaration,
        6,
        19,
        NodeData::Variable {
            name,
            type_annotation: NodeIndex::NONE,
            initializer,
        },
    );
    let list = fx.node(
        SyntaxKind::VariableDeclarationList,
        6,
        19,
        NodeData::VariableDeclarationList {
            declarations: NodeList::from_nodes([declaration]),
        },
    );
    let statement = fx.node(
        SyntaxKind::VariableStatement,
        0,
        20,
        NodeData::VariableStatement {
            declaration_list: list,
        },
    );
    let reference = fx.token(SyntaxKind::Identifier, 21, 26);
    let expr_statement = fx.node(
        SyntaxKind::ExpressionStatement,
        21,
        27,
        NodeData::Wrapper {
            expression: reference,
        },
    );
    let root = fx.node(
        SyntaxKind::SourceFile,
        0,
        27,
        NodeData::SourceFile {
            statements: NodeList::from_nodes([statement, expr_statement]),
        },
    );
    fx.set_root(root);

    let sym = fx.oracle.add_symbol("value");
    let ty = fx.oracle.add_type("Widget", TypeFlags::empty());
    fx.oracle.add_declaration(sym, declaration);
    fx.oracle.set_symbol_at(reference, sym);
    fx.oracle.set_type_of_symbol(sym, ty);
    // The initializer has no symbol and is skipped with a verbose notice.
    (fx, declaration, reference)
}

#[test]
fn references_are_indexed_under_their_definition() {
    let (fx, _declaration, reference) = variable_fixture();
    let sink = NullSink;
    let table = parse_symbol_table(&fx.arena, &fx.oracle, &Config::new(), &sink).unwrap();

    assert_eq!(table.len(), 1);
    let (_, references) = table.first().unwrap();
    assert_eq!(references.len(), 1);
    assert!(references.contains(&reference));
}

#[test]
fn declaration_names_are_not_references() {
    let (fx, declaration, _reference) = variable_fixture();
    let name = fx.arena.name_of(declaration);
    let sink = NullSink;
    let table = parse_symbol_table(&fx.arena, &fx.oracle, &Config::new(), &sink).unwrap();

    for (_, references) in &table {
        assert!(!references.contains(&name));
        assert!(!references.contains(&declaration));
    }
}

#[test]
fn same_position_reference_is_not_recorded() {
    let mut fx = Fixture::new("app.ts", "shadow;");
    let reference = fx.token(SyntaxKind::Identifier, 0, 6);
    let statement = fx.node(
        SyntaxKind::ExpressionStatement,
        0,
        7,
        NodeData::Wrapper {
            expression: reference,
        },
    );
    let root = fx.node(
        SyntaxKind::SourceFile,
        0,
        7,
        NodeData::SourceFile {
            statements: NodeList::from_nodes([statement]),
        },
    );
    fx.set_root(root);

    // The oracle answers with a definition whose declaration starts at the
    // reference's own offset.
    let sym = fx.oracle.add_symbol("shadow");
    let ty = fx.oracle.add_type("Shadow", TypeFlags::empty());
    fx.oracle.set_type_symbol(ty, sym);
    fx.oracle.add_declaration(sym, reference);
    fx.oracle.set_symbol_at(reference, sym);
    fx.oracle.set_type_at(reference, ty);

    let sink = NullSink;
    let table = parse_symbol_table(&fx.arena, &fx.oracle, &Config::new(), &sink).unwrap();
    assert!(table.is_empty());
}

#[test]
fn type_symbol_takes_precedence_over_binding() {
    let mut fx = Fixture::new("app.ts", "widget;");
    let reference = fx.token(SyntaxKind::Identifier, 0, 6);
    let statement = fx.node(
        SyntaxKind::ExpressionStatement,
        0,
        7,
        NodeData::Wrapper {
            expression: reference,
        },
    );
    let root = fx.node(
        SyntaxKind::SourceFile,
        0,
        7,
        NodeData::SourceFile {
            statements: NodeList::from_nodes([statement]),
        },
    );
    fx.set_root(root);

    let class_file = fx.add_file("widget.ts", "class Widget {}");
    let class_name = fx.token_in(class_file, SyntaxKind::Identifier, 6, 12);
    let class_decl = fx.node_in(
        class_file,
        SyntaxKind::ClassDeclaration,
        0,
        15,
        NodeData::ClassLike {
            name: class_name,
            heritage_clauses: NodeList::new(),
            members: NodeList::new(),
        },
    );

    let binding = fx.oracle.add_symbol("widget");
    let binding_decl = fx.token(SyntaxKind::VariableDeclaration, 0, 6);
    fx.oracle.add_declaration(binding, binding_decl);
    let class_sym = fx.oracle.add_symbol("Widget");
    fx.oracle.add_declaration(class_sym, class_decl);
    let class_type = fx.oracle.add_type("Widget", TypeFlags::empty());
    fx.oracle.set_type_symbol(class_type, class_sym);
    fx.oracle.set_symbol_at(reference, binding);
    fx.oracle.set_type_at(reference, class_type);

    let sink = NullSink;
    let table = parse_symbol_table(&fx.arena, &fx.oracle, &Config::new(), &sink).unwrap();
    assert_eq!(table.len(), 1);
    let (&key, references) = table.first().unwrap();
    assert_eq!(key, class_sym);
    assert!(references.contains(&reference));
}

#[test]
fn intrinsic_and_pseudo_identifiers_are_skipped() {
    let mut fx = Fixture::new("app.ts", "undefined;\narguments;\nflag;");
    let undef = fx.token(SyntaxKind::Identifier, 0, 9);
    let undef_stmt = fx.node(
        SyntaxKind::ExpressionStatement,
        0,
        10,
        NodeData::Wrapper { expression: undef },
    );
    let args = fx.token(SyntaxKind::Identifier, 11, 20);
    let args_stmt = fx.node(
        SyntaxKind::ExpressionStatement,
        11,
        21,
        NodeData::Wrapper { expression: args },
    );
    let flag = fx.token(SyntaxKind::Identifier, 22, 26);
    let flag_stmt = fx.node(
        SyntaxKind::ExpressionStatement,
        22,
        27,
        NodeData::Wrapper { expression: flag },
    );
    let root = fx.node(
        SyntaxKind::SourceFile,
        0,
        27,
        NodeData::SourceFile {
            statements: NodeList::from_nodes([undef_stmt, args_stmt, flag_stmt]),
        },
    );
    fx.set_root(root);

    // `flag` is bound to a boolean intrinsic.
    let flag_sym = fx.oracle.add_symbol("flag");
    let boolean = fx.oracle.add_type("boolean", TypeFlags::INTRINSIC);
    fx.oracle.set_symbol_at(flag, flag_sym);
    fx.oracle.set_declared_type(flag_sym, boolean);

    let sink = NullSink;
    let table = parse_symbol_table(&fx.arena, &fx.oracle, &Config::new(), &sink).unwrap();
    assert!(table.is_empty());
}

#[test]
fn unresolved_identifier_is_skipped_with_verbose_notice() {
    let mut fx = Fixture::new("app.ts", "mystery;");
    let reference = fx.token(SyntaxKind::Identifier, 0, 7);
    let statement = fx.node(
        SyntaxKind::ExpressionStatement,
        0,
        8,
        NodeData::Wrapper {
            expression: reference,
        },
    );
    let root = fx.node(
        SyntaxKind::SourceFile,
        0,
        8,
        NodeData::SourceFile {
            statements: NodeList::from_nodes([statement]),
        },
    );
    fx.set_root(root);

    let sink = NullSink;
    let table = parse_symbol_table(&fx.arena, &fx.oracle, &Config::new(), &sink).unwrap();
    assert!(table.is_empty());
}

#[test]
fn symbol_without_declaration_is_fatal() {
    let mut fx = Fixture::new("app.ts", "orphan;");
    let reference = fx.token(SyntaxKind::Identifier, 0, 6);
    let statement = fx.node(
        SyntaxKind::ExpressionStatement,
        0,
        7,
        NodeData::Wrapper {
            expression: reference,
        },
    );
    let root = fx.node(
        SyntaxKind::SourceFile,
        0,
        7,
        NodeData::SourceFile {
            statements: NodeList::from_nodes([statement]),
        },
    );
    fx.set_root(root);

    let sym = fx.oracle.add_symbol("orphan");
    fx.oracle.set_symbol_at(reference, sym);

    let sink = NullSink;
    let err = parse_symbol_table(&fx.arena, &fx.oracle, &Config::new(), &sink).unwrap_err();
    assert!(err.message.contains("No declaration"), "{err}");
    assert_eq!(err.file_name.as_deref(), Some("app.ts"));
}

#[test]
fn excluded_files_are_not_walked() {
    let (fx, _, _) = variable_fixture();
    let config = Config::new()
        .with_exclude_globs(&["**/app.ts", "app.ts"])
        .unwrap();
    let sink = CollectingSink::new();
    let table = parse_symbol_table(&fx.arena, &fx.oracle, &config, &sink).unwrap();
    assert!(table.is_empty());
    assert!(sink.infos().is_empty());
}

#[test]
fn type_positions_are_not_descended() {
    let mut fx = Fixture::new("app.ts", "type Alias = Widget;");
    let inner = fx.token(SyntaxKind::Identifier, 13, 19);
    let alias_name = fx.token(SyntaxKind::Identifier, 5, 10);
    // Model the alias as a variable-shaped node so the reference sits in
    // its initializer position.
    let alias = fx.node(
        SyntaxKind::TypeAliasDeclaration,
        0,
        20,
        NodeData::Variable {
            name: alias_name,
            type_annotation: NodeIndex::NONE,
            initializer: inner,
        },
    );
    let root = fx.node(
        SyntaxKind::SourceFile,
        0,
        20,
        NodeData::SourceFile {
            statements: NodeList::from_nodes([alias]),
        },
    );
    fx.set_root(root);

    // Were the alias descended, this reference would be indexed.
    let widget = fx.oracle.add_symbol("Widget");
    let widget_decl = fx.token(SyntaxKind::ClassDeclaration, 0, 1);
    fx.oracle.add_declaration(widget, widget_decl);
    fx.oracle.set_symbol_at(inner, widget);

    let sink = NullSink;
    let table = parse_symbol_table(&fx.arena, &fx.oracle, &Config::new(), &sink).unwrap();
    assert!(table.is_empty());
}

#[test]
fn import_declarations_are_not_descended() {
    let mut fx = Fixture::new("app.ts", "import { helper } from \"lib\";");
    let name = fx.token(SyntaxKind::Identifier, 9, 15);
    let specifier = fx.node(
        SyntaxKind::ImportSpecifier,
        9,
        15,
        NodeData::Specifier {
            name,
            property_name: NodeIndex::NONE,
        },
    );
    let named = fx.node(
        SyntaxKind::NamedImports,
        7,
        17,
        NodeData::NamedBindings {
            elements: NodeList::from_nodes([specifier]),
        },
    );
    let clause = fx.node(
        SyntaxKind::ImportClause,
        7,
        17,
        NodeData::ImportClause {
            name: NodeIndex::NONE,
            named_bindings: named,
        },
    );
    let module_specifier = fx.token(SyntaxKind::StringLiteral, 23, 28);
    let decl = fx.node(
        SyntaxKind::ImportDeclaration,
        0,
        29,
        NodeData::ImportDecl {
            import_clause: clause,
            module_specifier,
        },
    );
    let root = fx.node(
        SyntaxKind::SourceFile,
        0,
        29,
        NodeData::SourceFile {
            statements: NodeList::from_nodes([decl]),
        },
    );
    fx.set_root(root);

    let helper = fx.oracle.add_symbol("helper");
    let helper_decl = fx.token(SyntaxKind::FunctionDeclaration, 0, 1);
    fx.oracle.add_declaration(helper, helper_decl);
    fx.oracle.set_symbol_at(name, helper);

    let sink = NullSink;
    let table = parse_symbol_table(&fx.arena, &fx.oracle, &Config::new(), &sink).unwrap();
    assert!(table.is_empty());
}

#[test]
fn summary_rows_are_sorted_by_path() {
    let (fx, _, _) = variable_fixture();
    let sink = NullSink;
    let table = parse_symbol_table(&fx.arena, &fx.oracle, &Config::new(), &sink).unwrap();
    let rows = extract_symbol_summary(&fx.arena, &fx.oracle, &table);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].path, "value");
    assert_eq!(rows[0].size, 1);
}

// End-to-end resolution scenarios observed against real checker output.

#[test]
fn awaited_promise_variable_resolves_to_inner_type() {
    let mut fx = Fixture::new("app.ts", "const test = await makeTest();\ntest;");
    let reference = fx.token(SyntaxKind::Identifier, 31, 35);
    let statement = fx.node(
        SyntaxKind::ExpressionStatement,
        31,
        36,
        NodeData::Wrapper {
            expression: reference,
        },
    );
    let root = fx.node(
        SyntaxKind::SourceFile,
        0,
        36,
        NodeData::SourceFile {
            statements: NodeList::from_nodes([statement]),
        },
    );
    fx.set_root(root);

    let types_file = fx.add_file("types.ts", "interface Test {}");
    let test_name = fx.token_in(types_file, SyntaxKind::Identifier, 10, 14);
    let test_decl = fx.node_in(
        types_file,
        SyntaxKind::InterfaceDeclaration,
        0,
        17,
        NodeData::ClassLike {
            name: test_name,
            heritage_clauses: NodeList::new(),
            members: NodeList::new(),
        },
    );

    let binding = fx.oracle.add_symbol("test");
    let binding_decl = fx.token(SyntaxKind::VariableDeclaration, 6, 10);
    fx.oracle.add_declaration(binding, binding_decl);
    let test_sym = fx.oracle.add_symbol("Test");
    fx.oracle.add_declaration(test_sym, test_decl);
    // The await already unwrapped Promise<Test> to Test at the use site.
    let test_type = fx.oracle.add_type("Test", TypeFlags::empty());
    fx.oracle.set_type_symbol(test_type, test_sym);
    fx.oracle.set_symbol_at(reference, binding);
    fx.oracle.set_type_at(reference, test_type);

    let sink = NullSink;
    let table = parse_symbol_table(&fx.arena, &fx.oracle, &Config::new(), &sink).unwrap();
    let (&key, references) = table.first().unwrap();
    assert_eq!(key, test_sym);
    assert!(references.contains(&reference));
}

#[test]
fn ternary_of_unrelated_branches_is_a_symbolless_union() {
    let mut fx = Fixture::new("app.ts", "flag ? left : right");
    let condition = fx.token(SyntaxKind::Identifier, 0, 4);
    let when_true = fx.token(SyntaxKind::Identifier, 7, 11);
    let when_false = fx.token(SyntaxKind::Identifier, 14, 19);
    let ternary = fx.node(
        SyntaxKind::ConditionalExpression,
        0,
        19,
        NodeData::Conditional {
            condition,
            when_true,
            when_false,
        },
    );
    let union = fx.oracle.add_type("Left | Right", TypeFlags::UNION);
    fx.oracle.set_type_at(ternary, union);

    let sink = NullSink;
    let resolver = fx.resolver(&sink);
    let resolution = resolver.define_symbol(ternary).unwrap();
    let Resolution::Resolved(definition) = resolution else {
        panic!("expected a resolved definition, got {resolution:?}");
    };
    assert_eq!(definition.ty, Some(union));
    assert_eq!(definition.symbol, None);
}

#[test]
fn postfix_increment_is_a_symbolless_numeric() {
    let mut fx = Fixture::new("app.ts", "count++");
    let operand = fx.token(SyntaxKind::Identifier, 0, 5);
    let postfix = fx.node(
        SyntaxKind::PostfixUnaryExpression,
        0,
        7,
        NodeData::Unary {
            operator: SyntaxKind::PlusPlusToken,
            operand,
        },
    );
    let count = fx.oracle.add_symbol("count");
    fx.oracle.set_symbol_at(operand, count);
    let number = fx.oracle.add_type("number", TypeFlags::INTRINSIC);
    fx.oracle.set_type_at(postfix, number);

    let sink = NullSink;
    let resolver = fx.resolver(&sink);
    let resolution = resolver.define_symbol(postfix).unwrap();
    let Resolution::Resolved(definition) = resolution else {
        panic!("expected a resolved definition, got {resolution:?}");
    };
    assert_eq!(definition.ty, Some(number));
    assert_eq!(definition.symbol, None);
}
