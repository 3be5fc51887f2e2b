// Signature enumeration and per-file resolution through the public API.
use ctxarg_core::types::{Position, TypeIdentity};
use ctxarg_parsers::resolver::{SignatureKind, SignatureSource, TypeExpr, TypeResolver};
use indoc::indoc;

use crate::common::parse_go;

const SOURCE: &str = indoc! {r#"
    package handlers

    import (
        "context"
        web "net/http"
    )

    type Fetcher interface {
        Fetch(ctx context.Context, url string) ([]byte, error)
    }

    type Handler struct{}

    func (h *Handler) ServeHTTP(w web.ResponseWriter, r *web.Request) {
        run := func(ctx context.Context) {}
        _ = run
    }

    func New(opts ...func(*Handler)) *Handler { return &Handler{} }
"#};

#[test]
fn test_preorder_enumeration() {
    let file = parse_go(SOURCE);
    let kinds: Vec<(SignatureKind, Option<String>, Position)> = file
        .signatures()
        .map(|s| (s.kind, s.name, s.position))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (
                SignatureKind::InterfaceMethod,
                Some("Fetch".to_string()),
                Position::new(9, 10)
            ),
            (
                SignatureKind::Method,
                Some("ServeHTTP".to_string()),
                Position::new(14, 1)
            ),
            (SignatureKind::Literal, None, Position::new(15, 12)),
            (SignatureKind::Function, Some("New".to_string()), Position::new(19, 1)),
            (SignatureKind::FuncType, None, Position::new(19, 18)),
        ]
    );
}

#[test]
fn test_parameter_types() {
    let file = parse_go(SOURCE);
    let serve = file
        .signatures()
        .find(|s| s.name.as_deref() == Some("ServeHTTP"))
        .unwrap();
    assert_eq!(serve.params.len(), 2);
    assert_eq!(serve.params[0].ty, TypeExpr::qualified("web", "ResponseWriter"));
    assert_eq!(
        serve.params[1].ty,
        TypeExpr::Pointer(Box::new(TypeExpr::qualified("web", "Request")))
    );

    let new = file
        .signatures()
        .find(|s| s.name.as_deref() == Some("New"))
        .unwrap();
    assert!(matches!(new.params[0].ty, TypeExpr::Variadic(_)));
}

#[test]
fn test_resolver_uses_file_imports() {
    let file = parse_go(SOURCE);
    let resolver = file.type_resolver();
    assert_eq!(
        resolver.resolve(&TypeExpr::qualified("context", "Context")),
        Some(TypeIdentity::context())
    );
    assert_eq!(
        resolver.resolve(&TypeExpr::qualified("web", "Request")),
        Some(TypeIdentity::new("net/http", "Request"))
    );
    assert_eq!(resolver.resolve(&TypeExpr::qualified("http", "Request")), None);
    assert_eq!(
        resolver.resolve(&TypeExpr::named("Handler")),
        Some(TypeIdentity::local("handlers", "Handler"))
    );
    assert_eq!(
        resolver.resolve(&TypeExpr::named("string")),
        Some(TypeIdentity::builtin("string"))
    );
}

#[test]
fn test_signature_source_trait_object() {
    let file = parse_go(SOURCE);
    let source: &dyn SignatureSource = &file;
    assert_eq!(source.signatures().count(), 5);
    // Each call restarts the walk.
    assert_eq!(source.signatures().count(), 5);
}
