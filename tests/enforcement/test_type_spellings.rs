// Recognising the context type however it is spelled, and nothing else.
use ctxarg_core::config::RuleConfig;
use ctxarg_core::types::{RuleCode, TypeIdentity};
use indoc::indoc;

use crate::common::{findings, lint_go, lint_go_with};

#[test]
fn test_renamed_import() {
    let result = lint_go(indoc! {r#"
        package p

        import stdctx "context"

        func f(x int, ctx stdctx.Context) {}
    "#});
    assert_eq!(findings(&result), vec![(5, 1, RuleCode::NotFirst)]);
}

#[test]
fn test_dot_import() {
    let result = lint_go(indoc! {r#"
        package p

        import . "context"

        func f(x int, ctx Context) {}
    "#});
    assert_eq!(findings(&result), vec![(5, 1, RuleCode::NotFirst)]);
}

#[test]
fn test_several_dot_imports_are_ambiguous() {
    let result = lint_go(indoc! {r#"
        package p

        import (
            . "context"
            . "net/http"
        )

        func f(x int, c Context) {}
    "#});
    assert!(result.violations.is_empty());
}

#[test]
fn test_local_alias_is_followed() {
    let result = lint_go(indoc! {r#"
        package p

        import "context"

        type Ctx = context.Context
        type Alias = Ctx

        func f(x int, c Alias) {}
    "#});
    assert_eq!(
        findings(&result),
        vec![(8, 1, RuleCode::NotFirst), (8, 1, RuleCode::NotNamedCtx)]
    );
}

#[test]
fn test_alias_cycle_does_not_hang() {
    let result = lint_go(indoc! {r#"
        package p

        type A = B
        type B = A

        func f(x int, c A) {}
    "#});
    assert!(result.violations.is_empty());
}

#[test]
fn test_defined_type_is_distinct() {
    let result = lint_go(indoc! {r#"
        package p

        import "context"

        type MyCtx context.Context

        func f(x int, c MyCtx) {}
    "#});
    assert!(result.violations.is_empty());
}

#[test]
fn test_local_context_type_is_not_context() {
    let result = lint_go(indoc! {r#"
        package server

        type Context struct{}

        func f(x int, c Context) {}
    "#});
    assert!(result.violations.is_empty());
}

#[test]
fn test_package_named_context_declaring_context() {
    let result = lint_go(indoc! {r#"
        package context

        type Context interface{}

        func f(x int, c Context) {}
    "#});
    assert!(result.violations.is_empty());
}

#[test]
fn test_same_name_from_other_package() {
    let result = lint_go(indoc! {r#"
        package p

        import "golang.org/x/net/context"

        func f(x int, c context.Context) {}
    "#});
    assert!(result.violations.is_empty());
}

#[test]
fn test_pointer_and_variadic_contexts_are_ignored() {
    let result = lint_go(indoc! {r#"
        package p

        import "context"

        func f(x int, c *context.Context) {}

        func g(x int, cs ...context.Context) {}
    "#});
    assert!(result.violations.is_empty());
}

#[test]
fn test_parenthesized_type_is_context() {
    let result = lint_go(indoc! {r#"
        package p

        import "context"

        func f(x int, ctx (context.Context)) {}
    "#});
    assert_eq!(findings(&result), vec![(5, 1, RuleCode::NotFirst)]);
}

#[test]
fn test_configured_context_type_with_major_version() {
    let config = RuleConfig {
        context_type: TypeIdentity::new("example.com/reqctx/v2", "Ctx"),
        ..RuleConfig::default()
    };
    let result = lint_go_with(
        config,
        indoc! {r#"
            package p

            import (
                "context"

                "example.com/reqctx/v2"
            )

            func f(std context.Context, r reqctx.Ctx) {}
        "#},
    );
    assert_eq!(
        findings(&result),
        vec![(9, 1, RuleCode::NotFirst), (9, 1, RuleCode::NotNamedCtx)]
    );
}

#[test]
fn test_type_parameter_named_like_dot_imported_context() {
    let result = lint_go(indoc! {r#"
        package p

        import . "context"

        func F[Context any](x int, c Context) {}

        func G[T any](x T, c Context) {}
    "#});
    assert_eq!(
        findings(&result),
        vec![(7, 1, RuleCode::NotFirst), (7, 1, RuleCode::NotNamedCtx)]
    );
}

#[test]
fn test_function_local_type_does_not_hide_dot_import() {
    let result = lint_go(indoc! {r#"
        package p

        import . "context"

        func g() {
            type Context int
            _ = Context(0)
        }

        func F(x int, c Context) {}
    "#});
    assert_eq!(
        findings(&result),
        vec![(10, 1, RuleCode::NotFirst), (10, 1, RuleCode::NotNamedCtx)]
    );
}
