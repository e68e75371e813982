//! Lower-level expression-translator tests: drive `translate_expr`
//! directly against a hand-built `TranslationContext` rather than going
//! through the whole `parse_file` pipeline.

use pycpg::base::{Location, SourceMap};
use pycpg::config::TranslationConfig;
use pycpg::cpg::{builders, CallKind, Expression};
use pycpg::translate::expr::translate_expr;
use pycpg::translate::TranslationContext;

use crate::helpers::fixtures::first_expr_statement_value;

fn context_for<'cfg>(source: &str, config: &'cfg TranslationConfig) -> TranslationContext<'cfg> {
    let mut ctx = TranslationContext::new(SourceMap::new(source), config);
    ctx.scopes.reset_to_global();
    ctx
}

#[test]
fn a_name_resolves_to_a_declaration_already_in_scope() {
    let config = TranslationConfig::default();
    let mut ctx = context_for("x", &config);

    let decl_id = ctx.graph.insert_declaration(builders::variable("x", None, None, false), Location::NoLocation);
    ctx.scopes.add_declaration(&ctx.graph, decl_id);

    let expr_ast = first_expr_statement_value("x\n");
    let expr_id = translate_expr(&mut ctx, &expr_ast);

    match ctx.graph.expression(expr_id) {
        Expression::Reference { name, refers_to } => {
            assert_eq!(name.as_str(), "x");
            assert_eq!(*refers_to, Some(decl_id));
        }
        other => panic!("expected a Reference, got {other:?}"),
    }
}

#[test]
fn an_unbound_name_resolves_to_none_rather_than_erroring() {
    let config = TranslationConfig::default();
    let mut ctx = context_for("unbound", &config);

    let expr_ast = first_expr_statement_value("unbound\n");
    let expr_id = translate_expr(&mut ctx, &expr_ast);

    match ctx.graph.expression(expr_id) {
        Expression::Reference { refers_to, .. } => assert_eq!(*refers_to, None),
        other => panic!("expected a Reference, got {other:?}"),
    }
}

#[test]
fn a_chained_compare_becomes_a_dummy_with_a_diagnostic() {
    let config = TranslationConfig::default();
    let mut ctx = context_for("a < b < c", &config);

    let expr_ast = first_expr_statement_value("a < b < c\n");
    let expr_id = translate_expr(&mut ctx, &expr_ast);

    match ctx.graph.expression(expr_id) {
        Expression::Dummy(reason) => assert_eq!(reason.as_str(), "chained-compare"),
        other => panic!("expected a Dummy, got {other:?}"),
    }
    assert!(!ctx.diagnostics.is_empty());
}

#[test]
fn a_bare_name_call_on_a_known_record_is_a_construct() {
    let config = TranslationConfig::default();
    let mut ctx = context_for("Foo()", &config);

    let record_id = ctx.graph.insert_declaration(builders::record("Foo", Vec::new()), Location::NoLocation);
    ctx.scopes.add_declaration(&ctx.graph, record_id);

    let expr_ast = first_expr_statement_value("Foo()\n");
    let expr_id = translate_expr(&mut ctx, &expr_ast);

    match ctx.graph.expression(expr_id) {
        Expression::Call(call) => {
            assert_eq!(call.kind, CallKind::Construct);
            assert_eq!(call.resolved_record, Some(record_id));
        }
        other => panic!("expected a Call, got {other:?}"),
    }
}

#[test]
fn a_call_through_an_attribute_access_is_a_member_call() {
    let config = TranslationConfig::default();
    let mut ctx = context_for("obj.method()", &config);

    let expr_ast = first_expr_statement_value("obj.method()\n");
    let expr_id = translate_expr(&mut ctx, &expr_ast);

    match ctx.graph.expression(expr_id) {
        Expression::Call(call) => assert_eq!(call.kind, CallKind::Member),
        other => panic!("expected a Call, got {other:?}"),
    }
}

#[test]
fn a_boolop_with_three_or_more_operands_folds_to_its_first_two() {
    let config = TranslationConfig::default();
    let mut ctx = context_for("a and b and c", &config);

    let expr_ast = first_expr_statement_value("a and b and c\n");
    let expr_id = translate_expr(&mut ctx, &expr_ast);

    match ctx.graph.expression(expr_id) {
        Expression::Binary { operator, .. } => assert_eq!(operator.as_str(), "&&"),
        other => panic!("expected a Binary, got {other:?}"),
    }
    assert!(!ctx.diagnostics.is_empty());
}
