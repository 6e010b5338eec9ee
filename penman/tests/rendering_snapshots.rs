//! Snapshot tests for rendered output.
//!
//! These build small but realistic files the way a code generator would and
//! pin the exact text. Run `cargo insta review` to update snapshots when
//! making intentional changes.

use penman::{
    Block, CodeWriter, Delimiters, Indent, List, Wrap, WriterConfig, to_pascal_case,
    to_snake_case,
};

const LICENSE: &str = "// Copyright (c) Example Authors.
// Licensed under the MIT license.
";

fn rust_struct(name: &str, fields: &[(&str, &str)]) -> String {
    let mut w = CodeWriter::rust();
    w.emit_raw(LICENSE);
    w.blank();
    w.emit_wrapped_text(
        &format!("Generated definition of the {name} record, kept in sync with its schema."),
        &Wrap::new().prefix("/// ").width(40),
    )
    .unwrap();
    w.emit("#[derive(Debug, Clone)]");

    let header = format!("pub struct {}", to_pascal_case(name));
    w.block(&Block::new(&header).delimiters(Delimiters::braces()), |w| {
        for (field, ty) in fields {
            w.emit(&format!("pub {}: {ty},", to_snake_case(field)));
        }
    });
    w.render()
}

#[test]
fn snapshot_rust_struct() {
    let code = rust_struct("user-account", &[("userId", "u64"), ("DisplayName", "String")]);
    insta::assert_snapshot!(code, @r"
    // Copyright (c) Example Authors.
    // Licensed under the MIT license.

    /// Generated definition of the
    /// user-account record, kept in sync
    /// with its schema.
    #[derive(Debug, Clone)]
    pub struct UserAccount {
        pub user_id: u64,
        pub display_name: String,
    }
    ");
}

#[test]
fn snapshot_python_function() {
    let mut w = CodeWriter::rust();
    w.block(&Block::new("def handler(event, context):"), |w| {
        w.emit_wrapped_text(
            "Dispatch the incoming event to the route registered for its type.",
            &Wrap::new().prefix("# ").width(40),
        )
        .unwrap();
        w.emit_list(
            &["\"get\"", "\"put\"", "\"delete\""],
            &List::new("(", ")").before("methods = ").compact(),
        )
        .unwrap();
        w.block(&Block::new("for method in methods:"), |w| {
            w.emit("register(method)");
            w.blank();
        });
        w.trim_last_line_if_empty();
        w.emit("return dispatch(event)");
    });
    insta::assert_snapshot!(w.render(), @r#"
    def handler(event, context):
        # Dispatch the incoming event to the
        # route registered for its type.
        methods = ("get",
                   "put",
                   "delete")
        for method in methods:
            register(method)
        return dispatch(event)
    "#);
}

#[test]
fn snapshot_typescript_object() {
    let config = WriterConfig::new(Indent::TYPESCRIPT).with_delimiters(Delimiters::braces());
    let mut w = CodeWriter::new(config).unwrap();
    w.block(&Block::new("export const routes =").after(";"), |w| {
        let paths = List::new("[", "]").before("paths: ").after(",");
        w.emit_list(&["\"/users\"", "\"/teams\""], &paths).unwrap();
        w.emit_list::<&str>(&[], &List::new("[", "]").before("middleware: ").after(","))
            .unwrap();
    });
    insta::assert_snapshot!(w.render(), @r#"
    export const routes = {
      paths: [
        "/users",
        "/teams",
      ],
      middleware: [],
    };
    "#);
}

#[test]
fn snapshot_json_array() {
    let mut w = CodeWriter::typescript();
    w.emit_list(
        &["1", "2", "3"],
        &List::new("[", "]").before("\"ids\": ").skip_last_sep(),
    )
    .unwrap();
    insta::assert_snapshot!(w.render(), @r#"
    "ids": [
      1,
      2,
      3
    ]
    "#);
}

#[test]
fn snapshot_spaced_loop_body() {
    let mut w = CodeWriter::rust();
    w.block(&Block::new("if:"), |w| {
        for i in 0..3 {
            w.emit(&i.to_string());
            w.blank();
        }
    });
    w.trim_last_line_if_empty();
    w.emit("end");
    insta::assert_snapshot!(w.render(), @r"
    if:
        0

        1

        2
    end
    ");
}
