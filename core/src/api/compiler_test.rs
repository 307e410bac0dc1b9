use super::*;
use crate::api::CompileOptions;
use crate::ast::{BinaryOp, Class, Expr, Formal, Ident, Method};
use crate::codegen::TypeTag;
use crate::{ToString, vec};
use expect_test::expect;
use pretty_assertions::assert_eq;

fn method(name: &str, returns: &str, body: Block) -> Method {
    Method {
        name: Ident::new(name),
        formals: Vec::new(),
        returns: Ident::new(returns),
        body,
    }
}

fn point_class(methods: Vec<Method>) -> Class {
    Class {
        name: Ident::new("Pt"),
        superclass: Ident::new("Obj"),
        constructor: Method {
            name: Ident::new("Pt"),
            formals: vec![Formal {
                var: Ident::new("x"),
                ty: Ident::new("Int"),
            }],
            returns: Ident::new("Pt"),
            body: Block::new([Expr::assign(Expr::ident("x"), Expr::int(1))]),
        },
        methods,
    }
}

fn program(classes: Vec<Class>, statements: Block) -> Program {
    Program {
        classes,
        statements,
    }
}

#[test]
fn test_compile_units_in_order() {
    let show = method(
        "show",
        "String",
        Block::new([Expr::Return {
            expr: Expr::call(Expr::string("Pt"), "STRING", []).into(),
        }]),
    );
    let program = program(
        vec![point_class(vec![show])],
        Block::new([
            Expr::construct("Pt", [Expr::int(1)]),
            Expr::call(Expr::string("x"), "PRINT", []),
        ]),
    );

    let listing = Compiler::new(CompileOptions::default())
        .compile(&program)
        .unwrap();

    let names: Vec<&str> = listing.units.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, ["main", "Pt_constructor", "Pt_method_show"]);
    assert_eq!(listing.instruction_count(), 8);

    expect![[r#"
        // main
        tmp__1 = int_literal(1);
        tmp__2 = (obj_Obj) the_class_Pt->constructor((obj_Int) tmp__1);
        tmp__3 = str_literal("x");
        tmp__4 = (obj_Obj) ((obj_String) tmp__3)->clazz->PRINT((obj_String) tmp__3);

        // Pt_constructor
        tmp__0 = int_literal(1);

        // Pt_method_show
        tmp__0 = str_literal("Pt");
        tmp__1 = (obj_Obj) ((obj_String) tmp__0)->clazz->STRING((obj_String) tmp__0);
        return (obj_Obj) tmp__1;"#]]
    .assert_eq(&listing.to_string());
}

#[test]
fn test_units_number_registers_independently() {
    let program = program(
        vec![point_class(Vec::new())],
        Block::new([Expr::int(7)]),
    );
    let listing = Compiler::new(CompileOptions::default())
        .compile(&program)
        .unwrap();

    for unit in &listing.units {
        assert_eq!(unit.result.number(), 0, "{}", unit.name);
        assert!(unit.instructions[0].starts_with("tmp__0 = "), "{}", unit.name);
    }
}

#[test]
fn test_failing_method_aborts_compile() {
    let bad = method(
        "bad",
        "Int",
        Block::new([Expr::binop(BinaryOp::Minus, Expr::int(5), Expr::int(2))]),
    );
    let program = program(vec![point_class(vec![bad])], Block::default());

    let err = Compiler::new(CompileOptions::default())
        .compile(&program)
        .unwrap_err();

    assert_eq!(err.unit(), Some("Pt_method_bad"));
    let diagnostic = err.diagnostic().unwrap();
    assert_eq!(diagnostic.code.as_deref(), Some("E0001"));
    assert_eq!(
        diagnostic.message,
        "no method `MINUS` on a receiver of class Int"
    );
}

#[test]
fn test_lenient_options_reach_generator() {
    let program = program(
        Vec::new(),
        Block::new([Expr::binop(BinaryOp::Minus, Expr::int(5), Expr::int(2))]),
    );

    let listing = Compiler::new(CompileOptions::lenient())
        .compile(&program)
        .unwrap();
    let main = listing.unit(MAIN_UNIT).unwrap();
    assert_eq!(main.instructions.len(), 3);
    assert_eq!(main.result.to_string(), "tmp__2");
}

#[test]
fn test_custom_table() {
    let table = DispatchTable::builtin()
        .clone()
        .with_method(TypeTag::Int, "MINUS", TypeTag::Int);
    let compiler = Compiler::with_table(&table, CompileOptions::default());

    let unit = compiler
        .compile_block(&Block::new([Expr::call(
            Expr::binop(BinaryOp::Minus, Expr::int(5), Expr::int(2)),
            "STRING",
            [],
        )]))
        .unwrap();

    assert_eq!(unit.name, "main");
    assert_eq!(
        unit.instructions.last().unwrap(),
        "tmp__3 = (obj_Obj) ((obj_Int) tmp__2)->clazz->STRING((obj_Int) tmp__2);"
    );
}

#[test]
fn test_compile_block_matches_main_unit() {
    let block = Block::new([Expr::int(1), Expr::string("two")]);
    let compiler = Compiler::new(CompileOptions::default());

    let unit = compiler.compile_block(&block).unwrap();
    let listing = compiler
        .compile(&program(Vec::new(), block))
        .unwrap();

    assert_eq!(Some(&unit), listing.unit(MAIN_UNIT));
}

#[test]
fn test_empty_listing_display() {
    assert_eq!(Listing::default().to_string(), "");

    let unit = Unit {
        name: "main".to_string(),
        instructions: Vec::new(),
        result: crate::codegen::CodegenContext::new().allocate_register(),
    };
    assert_eq!(unit.to_string(), "// main");
}
