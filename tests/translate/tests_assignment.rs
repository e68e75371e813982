//! Lower-level assignment-discriminator tests: drive `translate_stmt`
//! directly so the interesting scope states (inside a record, inside a
//! method body, rebinding an existing name) can be set up explicitly
//! instead of relying only on whatever `parse_file` produces.

use pycpg::base::{Location, SourceMap};
use pycpg::config::TranslationConfig;
use pycpg::cpg::{builders, Declaration, Expression, Statement, StatementLike, TypeRef};
use pycpg::scope::ScopeOwner;
use pycpg::translate::stmt::translate_stmt;
use pycpg::translate::TranslationContext;

use crate::helpers::fixtures::first_statement;

fn context_for<'cfg>(source: &str, config: &'cfg TranslationConfig) -> TranslationContext<'cfg> {
    let mut ctx = TranslationContext::new(SourceMap::new(source), config);
    ctx.scopes.reset_to_global();
    ctx
}

#[test]
fn a_fresh_name_at_top_level_becomes_a_variable_declaration() {
    let config = TranslationConfig::default();
    let mut ctx = context_for("x = 1", &config);

    let stmt_ast = first_statement("x = 1\n");
    let result = translate_stmt(&mut ctx, &stmt_ast);

    let decl_id = match result {
        StatementLike::Stmt(stmt_id) => match ctx.graph.statement(stmt_id) {
            Statement::DeclarationStmt(decl_id) => *decl_id,
            other => panic!("expected a DeclarationStmt, got {other:?}"),
        },
        StatementLike::Expr(_) => panic!("expected a Stmt"),
    };
    match ctx.graph.declaration(decl_id) {
        Declaration::Variable(v) => {
            assert_eq!(v.name.as_str(), "x");
            assert!(!v.implicit);
        }
        other => panic!("expected a Variable, got {other:?}"),
    }
}

#[test]
fn rebinding_an_existing_name_emits_an_assign_binary_not_a_new_declaration() {
    let config = TranslationConfig::default();
    let mut ctx = context_for("x = 2", &config);

    let existing = ctx.graph.insert_declaration(builders::variable("x", None, None, false), Location::NoLocation);
    ctx.scopes.add_declaration(&ctx.graph, existing);

    let stmt_ast = first_statement("x = 2\n");
    let result = translate_stmt(&mut ctx, &stmt_ast);

    match result {
        StatementLike::Expr(expr_id) => match ctx.graph.expression(expr_id) {
            Expression::Binary { operator, .. } => assert_eq!(operator.as_str(), "="),
            other => panic!("expected a Binary, got {other:?}"),
        },
        StatementLike::Stmt(_) => panic!("rebinding should not mint a new declaration"),
    }
    assert_eq!(ctx.graph.declaration_count(), 1, "no second `x` declaration should appear");
}

#[test]
fn assigning_to_a_bare_name_inside_a_record_body_becomes_a_field() {
    let config = TranslationConfig::default();
    let mut ctx = context_for("y = 1", &config);

    let record_id = ctx.graph.insert_declaration(builders::record("A", Vec::new()), Location::NoLocation);
    ctx.scopes.enter(ScopeOwner::Record(record_id));

    let stmt_ast = first_statement("y = 1\n");
    let result = translate_stmt(&mut ctx, &stmt_ast);

    let decl_id = match result {
        StatementLike::Stmt(stmt_id) => match ctx.graph.statement(stmt_id) {
            Statement::DeclarationStmt(decl_id) => *decl_id,
            other => panic!("expected a DeclarationStmt, got {other:?}"),
        },
        StatementLike::Expr(_) => panic!("expected a Stmt"),
    };
    match ctx.graph.declaration(decl_id) {
        Declaration::Field(f) => {
            assert_eq!(f.name.as_str(), "y");
            assert_eq!(f.record, record_id);
        }
        other => panic!("expected a Field, got {other:?}"),
    }
}

#[test]
fn self_attribute_assignment_inside_a_method_becomes_a_field_on_the_record() {
    let config = TranslationConfig::default();
    let mut ctx = context_for("self.y = x", &config);

    let record_id = ctx.graph.insert_declaration(builders::record("A", Vec::new()), Location::NoLocation);
    ctx.scopes.enter(ScopeOwner::Record(record_id));
    let method_id = ctx.graph.insert_declaration(builders::variable("<placeholder>", None, None, true), Location::NoLocation);
    ctx.scopes.enter(ScopeOwner::Method(method_id));
    let receiver = ctx.graph.insert_declaration(builders::parameter("self", TypeRef::Named("A".into()), false), Location::NoLocation);
    ctx.scopes.add_declaration(&ctx.graph, receiver);
    ctx.scopes.set_receiver(receiver);
    let param = ctx.graph.insert_declaration(builders::parameter("x", TypeRef::Unknown, false), Location::NoLocation);
    ctx.scopes.add_declaration(&ctx.graph, param);

    let stmt_ast = first_statement("self.y = x\n");
    let result = translate_stmt(&mut ctx, &stmt_ast);

    let decl_id = match result {
        StatementLike::Stmt(stmt_id) => match ctx.graph.statement(stmt_id) {
            Statement::DeclarationStmt(decl_id) => *decl_id,
            other => panic!("expected a DeclarationStmt, got {other:?}"),
        },
        StatementLike::Expr(_) => panic!("expected a Stmt"),
    };
    match ctx.graph.declaration(decl_id) {
        Declaration::Field(f) => {
            assert_eq!(f.name.as_str(), "y");
            assert_eq!(f.record, record_id);
        }
        other => panic!("expected a Field, got {other:?}"),
    }
}

#[test]
fn augmented_assignment_to_an_unresolved_name_still_emits_a_binary_but_warns() {
    let config = TranslationConfig::default();
    let mut ctx = context_for("x += 1", &config);

    let stmt_ast = first_statement("x += 1\n");
    let result = translate_stmt(&mut ctx, &stmt_ast);

    match result {
        StatementLike::Expr(expr_id) => match ctx.graph.expression(expr_id) {
            Expression::Binary { operator, .. } => assert_eq!(operator.as_str(), "+"),
            other => panic!("expected a Binary, got {other:?}"),
        },
        StatementLike::Stmt(_) => panic!("augmented assignment is always an expression"),
    }
    assert!(!ctx.diagnostics.is_empty());
}
