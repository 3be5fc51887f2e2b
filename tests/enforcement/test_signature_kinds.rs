// Every function-like construct is checked, at the right position.
use ctxarg_core::types::RuleCode;
use indoc::indoc;

use crate::common::{findings, lint_go};

#[test]
fn test_method_receiver_is_not_a_parameter() {
    let result = lint_go(indoc! {r#"
        package p

        import "context"

        type Server struct{}

        func (s *Server) Run(ctx context.Context) {}

        func (s *Server) Stop(force bool, ctx context.Context) {}
    "#});
    assert_eq!(findings(&result), vec![(9, 1, RuleCode::NotFirst)]);
    assert_eq!(result.violations[0].signature.as_deref(), Some("method Stop"));
}

#[test]
fn test_nested_func_literal() {
    let result = lint_go(indoc! {r#"
        package p

        import "context"

        func outer(ctx context.Context) {
            go func(id int, c context.Context) {}(1, ctx)
        }
    "#});
    assert_eq!(
        findings(&result),
        vec![(6, 8, RuleCode::NotFirst), (6, 8, RuleCode::NotNamedCtx)]
    );
    assert_eq!(result.violations[0].signature.as_deref(), Some("func literal"));
}

#[test]
fn test_function_typed_parameter() {
    let result = lint_go(indoc! {r#"
        package p

        import "context"

        func Run(f func(int, context.Context)) {}
    "#});
    // Anonymous, so only the order check applies.
    assert_eq!(findings(&result), vec![(5, 12, RuleCode::NotFirst)]);
    assert_eq!(result.violations[0].signature.as_deref(), Some("func type"));
}

#[test]
fn test_named_func_type() {
    let result = lint_go(indoc! {r#"
        package p

        import "context"

        type Handler func(a context.Context, b context.Context) error
    "#});
    assert_eq!(findings(&result), vec![(5, 14, RuleCode::MultipleContexts)]);
}

#[test]
fn test_interface_method_reports_at_parameter_list() {
    let result = lint_go(indoc! {r#"
        package p

        import "context"

        type Store interface {
            Get(id string, ctx context.Context) error
            Put(ctx context.Context, id string) error
        }
    "#});
    assert_eq!(findings(&result), vec![(6, 8, RuleCode::NotFirst)]);
    assert_eq!(
        result.violations[0].signature.as_deref(),
        Some("interface method Get")
    );
}

#[test]
fn test_struct_field_func_type() {
    let result = lint_go(indoc! {r#"
        package p

        import "context"

        type Options struct {
            OnDone func(err error, c context.Context)
        }
    "#});
    assert_eq!(
        findings(&result),
        vec![(6, 12, RuleCode::NotFirst), (6, 12, RuleCode::NotNamedCtx)]
    );
}

#[test]
fn test_generic_function() {
    let result = lint_go(indoc! {r#"
        package p

        import "context"

        func Map[T any](items []T, ctx context.Context) {}
    "#});
    assert_eq!(findings(&result), vec![(5, 1, RuleCode::NotFirst)]);
}

#[test]
fn test_file_with_syntax_errors_still_checked() {
    let result = lint_go(indoc! {r#"
        package p

        import "context"

        func broken( {

        func later(x int, ctx context.Context) {}
    "#});
    assert!(result.skipped.is_empty());
    assert_eq!(result.files_analyzed, vec!["main.go"]);
}
