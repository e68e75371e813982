//! Assignment discriminator: decides, per assignment target, whether
//! it denotes an existing binding or a fresh declaration.

use rustpython_ast::{self as py, Ranged};

use crate::base::Location;
use crate::cpg::{self as cpg, DeclId, Declaration, ExprId, StatementLike, TypeRef};
use crate::lexicon;
use crate::translate::context::TranslationContext;
use crate::translate::expr::translate_expr;

const ORIGIN: &str = "translate_assign";

pub fn translate_assign(ctx: &mut TranslationContext, assign: &py::StmtAssign) -> StatementLike {
    let location = ctx.location(assign.range());

    if assign.targets.len() != 1 {
        ctx.diagnostics.unsupported(ORIGIN, location, "multi-target assignment is not fully modeled");
    }

    let rhs = translate_expr(ctx, &assign.value);
    bind_target(ctx, &assign.targets[0], Some(rhs), location)
}

pub fn translate_ann_assign(ctx: &mut TranslationContext, assign: &py::StmtAnnAssign) -> StatementLike {
    let location = ctx.location(assign.range());
    let rhs = assign.value.as_deref().map(|v| translate_expr(ctx, v));
    bind_target(ctx, &assign.target, rhs, location)
}

/// Augmented assignment (`x += y`) is always a binary operator; the LHS
/// must pre-exist. If it does not resolve, the binary carries an
/// unresolved reference rather than minting a new declaration.
pub fn translate_aug_assign(ctx: &mut TranslationContext, assign: &py::StmtAugAssign) -> StatementLike {
    let location = ctx.location(assign.range());
    let lhs = translate_expr(ctx, &assign.target);
    let rhs = translate_expr(ctx, &assign.value);

    if let Some(name) = target_name(&assign.target) {
        if ctx.resolver().resolve(name).is_none() {
            ctx.diagnostics.unsupported(ORIGIN, location, "augmented assignment target does not resolve");
        }
    }

    let op = lexicon::binary_op_code(&assign.op);
    let built = cpg::builders::binary(op, lhs, rhs);
    let expr_id = ctx.graph.insert_expression(built, location);
    StatementLike::Expr(expr_id)
}

fn target_name(target: &py::Expr) -> Option<&str> {
    match target {
        py::Expr::Name(name) => Some(name.id.as_str()),
        _ => None,
    }
}

/// The core of the discriminator: steps 1-2 of the algorithm.
fn bind_target(ctx: &mut TranslationContext, target: &py::Expr, rhs: Option<ExprId>, location: Location) -> StatementLike {
    match target {
        py::Expr::Name(name) => bind_name_target(ctx, name.id.as_str(), rhs, location),
        py::Expr::Attribute(attr) => bind_attribute_target(ctx, attr, rhs, location),
        py::Expr::Tuple(_) | py::Expr::List(_) => {
            ctx.diagnostics.unsupported(ORIGIN, location, "multi-target tuple/list assignment is not fully modeled");
            let lhs = translate_expr(ctx, target);
            let rhs = rhs.unwrap_or_else(|| {
                let placeholder = cpg::builders::dummy_expression("multi-target-rhs");
                ctx.graph.insert_expression(placeholder, location)
            });
            emit_assign(ctx, lhs, rhs, location)
        }
        _ => {
            ctx.diagnostics.shape_mismatch(ORIGIN, location, "unsupported assignment target shape");
            let dummy = cpg::builders::dummy_statement("assign-target");
            let stmt_id = ctx.graph.insert_statement(dummy, location);
            StatementLike::Stmt(stmt_id)
        }
    }
}

fn bind_name_target(ctx: &mut TranslationContext, name: &str, rhs: Option<ExprId>, location: Location) -> StatementLike {
    // Step 1: an existing binding is a plain assignment.
    if let Some(_existing) = ctx.resolver().resolve(name) {
        let lhs = ctx.graph.insert_expression(cpg::builders::reference(name), location);
        if let Some(rhs) = rhs {
            return emit_assign(ctx, lhs, rhs, location);
        }
        // Annotation-only re-assignment of an existing name: nothing to
        // do structurally; surface the reference alone.
        return StatementLike::Expr(lhs);
    }

    // Step 2: fresh binding. Where it lands depends on the scope kind.
    let declared_type = rhs.and_then(|id| super::expr::declared_type_of(ctx, id));

    if let Some(record_id) = ctx.resolver().current_record() {
        if !ctx.resolver().in_method_body() {
            // Record scope, not inside a method body -> Field on the record.
            return make_field(ctx, name, declared_type, rhs, record_id, location);
        }
        // Record scope, inside a method body, plain Name target -> a
        // local Variable in the method scope.
        return make_variable(ctx, name, declared_type, rhs, location, false);
    }

    // Top level or free function -> Variable in the current scope.
    make_variable(ctx, name, declared_type, rhs, location, false)
}

fn bind_attribute_target(ctx: &mut TranslationContext, attr: &py::ExprAttribute, rhs: Option<ExprId>, location: Location) -> StatementLike {
    let receiver_decl = ctx.resolver().current_receiver();
    let base_is_receiver = match (attr.value.as_ref(), receiver_decl) {
        (py::Expr::Name(name), Some(_)) => is_receiver_name(ctx, name.id.as_str()),
        _ => false,
    };

    if ctx.resolver().in_method_body() && base_is_receiver {
        if let Some(record_id) = ctx.resolver().current_record() {
            let declared_type = rhs.and_then(|id| super::expr::declared_type_of(ctx, id));
            return make_field(ctx, attr.attr.as_str(), declared_type, rhs, record_id, location);
        }
    }

    // Anything else (attribute of a resolved non-receiver object, or an
    // already-existing field) degrades to an ordinary binary `=` over
    // the translated member access, or an unresolved-member diagnostic
    // when we cannot decide where to attach it.
    if ctx.resolver().in_method_body() && !base_is_receiver {
        ctx.diagnostics.unsupported(
            ORIGIN,
            location,
            "cannot decide where to attach this member assignment",
        );
    }

    let lhs = super::expr::translate_expr(ctx, &py::Expr::Attribute(attr.clone()));
    let rhs = rhs.unwrap_or_else(|| {
        let placeholder = cpg::builders::dummy_expression("member-assign-rhs");
        ctx.graph.insert_expression(placeholder, location)
    });
    emit_assign(ctx, lhs, rhs, location)
}

fn is_receiver_name(ctx: &TranslationContext, name: &str) -> bool {
    match ctx.resolver().current_receiver() {
        Some(decl_id) => matches!(ctx.graph.declaration(decl_id).name(), Some(n) if n == name),
        None => false,
    }
}

fn make_field(
    ctx: &mut TranslationContext,
    name: &str,
    declared_type: Option<TypeRef>,
    initializer: Option<ExprId>,
    record_id: DeclId,
    location: Location,
) -> StatementLike {
    let field = cpg::builders::field(name, declared_type, initializer, record_id);
    let field_id = ctx.graph.insert_declaration(field, location);
    ctx.scopes.add_declaration(&ctx.graph, field_id);

    let field_name = ctx.graph.declaration(field_id).name().map(str::to_owned);
    let existing_fields = match ctx.graph.declaration(record_id) {
        Declaration::Record(record) => record.fields.clone(),
        _ => Vec::new(),
    };
    let existing_pos = field_name.as_deref().and_then(|n| {
        existing_fields
            .iter()
            .position(|id| ctx.graph.declaration(*id).name() == Some(n))
    });

    if let Declaration::Record(record) = ctx.graph.declaration_mut(record_id) {
        match existing_pos {
            Some(pos) => record.fields[pos] = field_id,
            None => record.fields.push(field_id),
        }
    }

    let stmt = cpg::builders::declaration_stmt(field_id);
    let stmt_id = ctx.graph.insert_statement(stmt, location);
    StatementLike::Stmt(stmt_id)
}

fn make_variable(
    ctx: &mut TranslationContext,
    name: &str,
    declared_type: Option<TypeRef>,
    initializer: Option<ExprId>,
    location: Location,
    implicit: bool,
) -> StatementLike {
    let variable = cpg::builders::variable(name, declared_type, initializer, implicit);
    let decl_id = ctx.graph.insert_declaration(variable, location);
    ctx.scopes.add_declaration(&ctx.graph, decl_id);

    let stmt = cpg::builders::declaration_stmt(decl_id);
    let stmt_id = ctx.graph.insert_statement(stmt, location);
    StatementLike::Stmt(stmt_id)
}

fn emit_assign(ctx: &mut TranslationContext, lhs: ExprId, rhs: ExprId, location: Location) -> StatementLike {
    let built = cpg::builders::binary(lexicon::ASSIGN_OPERATOR_CODE, lhs, rhs);
    let expr_id = ctx.graph.insert_expression(built, location);
    StatementLike::Expr(expr_id)
}

/// Used by the `for`-loop translator: binds the loop variable the same
/// way a fresh top-level/function-scope Name target
/// would, or reuses the existing binding when the target already
/// resolves — either way producing a `StatementLike` that can be
/// spliced into the for-each node's `variable` slot.
pub fn bind_loop_variable(ctx: &mut TranslationContext, target: &py::Expr, location: Location) -> StatementLike {
    match target {
        py::Expr::Name(name) => {
            let ident = name.id.as_str();
            if ctx.resolver().resolve(ident).is_some() {
                let reference = ctx.graph.insert_expression(cpg::builders::reference(ident), location);
                StatementLike::Expr(reference)
            } else {
                make_variable(ctx, ident, None, None, location, true)
            }
        }
        _ => {
            ctx.diagnostics.unsupported(ORIGIN, location, "non-name for-loop targets are not fully modeled");
            let expr_id = super::expr::translate_expr(ctx, target);
            StatementLike::Expr(expr_id)
        }
    }
}
