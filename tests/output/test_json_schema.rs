// Shape of the JSON document consumers rely on.
use ctxarg_output::json::JsonFormatter;
use ctxarg_output::OutputFormatter;
use indoc::indoc;

use crate::common::lint_go;

#[test]
fn test_json_document_fields() {
    let result = lint_go(indoc! {r#"
        package p

        import "context"

        func Twice(a context.Context, b context.Context) {}
    "#});
    let out = JsonFormatter.format_lint(&result);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["analyzer"], "ctxarg");
    assert_eq!(value["status"], "violations");
    assert!(value["version"].is_string());
    assert_eq!(value["files_analyzed"], serde_json::json!(["main.go"]));

    let v = &value["violations"][0];
    assert_eq!(v["code"], "C001");
    assert_eq!(v["message"], "more than one context parameter");
    assert_eq!(v["file"], "main.go");
    assert_eq!(v["line"], 5);
    assert_eq!(v["column"], 1);
    assert_eq!(v["signature"], "function Twice");
    assert_eq!(v["suppressed"], false);
    assert!(v["suppress_hint"].is_null());
}

#[test]
fn test_clean_json_status() {
    let result = lint_go("package p\n");
    let value: serde_json::Value =
        serde_json::from_str(&JsonFormatter.format_lint(&result)).unwrap();
    assert_eq!(value["status"], "ok");
    assert_eq!(value["violations"], serde_json::json!([]));
    assert!(value.get("skipped").is_none());
}
