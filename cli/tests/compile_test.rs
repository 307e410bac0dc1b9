//! Integration tests for the `compile` command.

mod common;

use common::{ADD_PROGRAM, MINUS_PROGRAM, check_output, check_stdout, quackc, temp_file};
use expect_test::expect;
use predicates::prelude::*;

const CLASS_PROGRAM: &str = r#"{
    "classes": [
        {
            "name": { "text": "Pt" },
            "super": { "text": "Obj" },
            "constructor": {
                "name": { "text": "Pt" },
                "formals": [],
                "returns": { "text": "Pt" },
                "body": { "statements": [] }
            },
            "methods": [
                {
                    "name": { "text": "label" },
                    "formals": [],
                    "returns": { "text": "String" },
                    "body": { "statements": [
                        { "kind": "Return",
                          "expr": { "kind": "Dot",
                                    "left": { "kind": "StrConst", "value": "pt" },
                                    "right": { "text": "STRING" } } }
                    ] }
                }
            ]
        }
    ],
    "statements": { "statements": [] }
}"#;

#[test]
fn compile_file() {
    let file = temp_file(ADD_PROGRAM);

    check_stdout(
        &["compile", file.path().to_str().unwrap()],
        None,
        expect![[r#"
            // main
            tmp__0 = int_literal(3);
            tmp__1 = int_literal(4);
            tmp__2 = (obj_Obj) ((obj_Int) tmp__0)->clazz->PLUS((obj_Int) tmp__0, (obj_Int) tmp__1);
        "#]],
    );
}

#[test]
fn compile_stdin() {
    quackc()
        .args(["compile", "-"])
        .write_stdin(ADD_PROGRAM)
        .assert()
        .success()
        .stdout(predicate::str::contains("->clazz->PLUS("));
}

#[test]
fn compile_class_units() {
    check_stdout(
        &["compile", "-"],
        Some(CLASS_PROGRAM),
        expect![[r#"
            // main

            // Pt_constructor

            // Pt_method_label
            tmp__0 = str_literal("pt");
            tmp__1 = (obj_Obj) ((obj_String) tmp__0)->clazz->STRING((obj_String) tmp__0);
            return (obj_Obj) tmp__1;
        "#]],
    );
}

#[test]
fn compile_single_unit() {
    check_stdout(
        &["compile", "-", "--unit", "Pt_method_label"],
        Some(CLASS_PROGRAM),
        expect![[r#"
            // Pt_method_label
            tmp__0 = str_literal("pt");
            tmp__1 = (obj_Obj) ((obj_String) tmp__0)->clazz->STRING((obj_String) tmp__0);
            return (obj_Obj) tmp__1;
        "#]],
    );
}

#[test]
fn compile_missing_unit() {
    quackc()
        .args(["--no-color", "compile", "-", "--unit", "nope"])
        .write_stdin(CLASS_PROGRAM)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "no unit named `nope` (available: main, Pt_constructor, Pt_method_label)",
        ));
}

#[test]
fn compile_unknown_method() {
    check_output(
        &["--no-color", "compile", "-"],
        Some(MINUS_PROGRAM),
        expect![""],
        expect![[r#"
            error[E0001]: no method `MINUS` on a receiver of class Int
              ╭─▶ <stdin>: in unit `main`
              ╰─ help: the runtime method table for Int has no such slot
        "#]],
    );

    quackc()
        .args(["compile", "-"])
        .write_stdin(MINUS_PROGRAM)
        .assert()
        .code(1);
}

#[test]
fn compile_lenient() {
    quackc()
        .args(["compile", "--lenient", "-"])
        .write_stdin(MINUS_PROGRAM)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "tmp__2 = (obj_Obj) ((obj_Int) tmp__0)->clazz->MINUS((obj_Int) tmp__0, (obj_Int) tmp__1);",
        ))
        .stderr(predicate::str::contains("Unknown method"));
}

#[test]
fn compile_error_names_file() {
    let file = temp_file(MINUS_PROGRAM);
    let path = file.path().to_str().unwrap();

    quackc()
        .args(["--no-color", "compile", path])
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!("{path}: in unit `main`")));
}

#[test]
fn compile_malformed_json() {
    quackc()
        .args(["--no-color", "compile", "-"])
        .write_stdin("{ \"classes\": ")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: invalid input:"));
}

#[test]
fn compile_unknown_kind() {
    quackc()
        .args(["--no-color", "compile", "-"])
        .write_stdin(r#"{ "classes": [], "statements": { "statements": [ { "kind": "Goto" } ] } }"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown variant `Goto`"));
}

#[test]
fn compile_int_literal_out_of_range() {
    quackc()
        .args(["--no-color", "compile", "-"])
        .write_stdin(
            r#"{ "classes": [], "statements": { "statements": [ { "kind": "IntConst", "value": 4294967301 } ] } }"#,
        )
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: invalid input:"))
        .stderr(predicate::str::contains("expected i32"));
}

#[test]
fn compile_missing_file() {
    quackc()
        .args(["--no-color", "compile", "does/not/exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does/not/exist.json"));
}

#[test]
fn compile_control_flow_unsupported() {
    let program = r#"{
        "classes": [],
        "statements": { "statements": [
            { "kind": "If",
              "cond": { "kind": "IntConst", "value": 1 },
              "then_part": { "statements": [] },
              "else_part": { "statements": [] } }
        ] }
    }"#;

    quackc()
        .args(["--no-color", "compile", "-"])
        .write_stdin(program)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "error[E0003]: code generation for `If` nodes is not implemented",
        ));
}
