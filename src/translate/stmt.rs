//! Statement translator. Dispatch is structural over the AST
//! statement's kind; every case returns a `StatementLike` so compound
//! assembly and the top-level driver can treat all of them uniformly.

use rustpython_ast::{self as py, Ranged};
use smol_str::SmolStr;

use crate::base::Location;
use crate::cpg::{self as cpg, DeclId, ExceptHandler, StatementLike};
use crate::scope::ScopeOwner;
use crate::translate::assign::{bind_loop_variable, translate_ann_assign, translate_assign, translate_aug_assign};
use crate::translate::context::TranslationContext;
use crate::translate::expr::{translate_expr, translate_raise_operand};
use crate::translate::functions::{translate_class_def, translate_function_def};
use crate::translate::imports::{translate_import, translate_import_from};

const ORIGIN: &str = "translate_stmt";

pub fn translate_stmt(ctx: &mut TranslationContext, stmt: &py::Stmt) -> StatementLike {
    let location = ctx.location(stmt.range());

    match stmt {
        py::Stmt::FunctionDef(def) => wrap_decl(ctx, translate_function_def(ctx, def, None), location),
        py::Stmt::AsyncFunctionDef(def) => {
            wrap_decl(ctx, translate_function_def_async(ctx, def, None), location)
        }
        py::Stmt::ClassDef(def) => wrap_decl(ctx, translate_class_def(ctx, def), location),
        py::Stmt::Return(ret) => {
            let value = ret.value.as_deref().map(|v| translate_expr(ctx, v));
            let built = cpg::builders::return_statement(value);
            wrap_stmt(ctx, built, location)
        }
        py::Stmt::Pass(_) => wrap_stmt(ctx, cpg::builders::empty_statement(), location),
        py::Stmt::Break(_) => wrap_stmt(ctx, cpg::builders::break_statement(), location),
        py::Stmt::Continue(_) => {
            ctx.diagnostics.unsupported(ORIGIN, location, "continue is not modeled");
            wrap_stmt(ctx, cpg::builders::dummy_statement("continue"), location)
        }
        py::Stmt::If(if_stmt) => translate_if(ctx, if_stmt, location),
        py::Stmt::While(while_stmt) => translate_while(ctx, while_stmt, location),
        py::Stmt::For(for_stmt) => translate_for(ctx, &for_stmt.target, &for_stmt.iter, &for_stmt.body, &for_stmt.orelse, location),
        py::Stmt::AsyncFor(for_stmt) => translate_for(ctx, &for_stmt.target, &for_stmt.iter, &for_stmt.body, &for_stmt.orelse, location),
        py::Stmt::Try(try_stmt) => translate_try(ctx, &try_stmt.body, &try_stmt.handlers, &try_stmt.orelse, &try_stmt.finalbody, location),
        py::Stmt::TryStar(try_stmt) => translate_try(ctx, &try_stmt.body, &try_stmt.handlers, &try_stmt.orelse, &try_stmt.finalbody, location),
        py::Stmt::Raise(raise) => {
            let operand = translate_raise_operand(ctx, raise.exc.as_deref(), location);
            StatementLike::Expr(operand)
        }
        py::Stmt::With(_) | py::Stmt::AsyncWith(_) => {
            ctx.diagnostics.unsupported(ORIGIN, location, "with-statements are not modeled");
            wrap_stmt(ctx, cpg::builders::dummy_statement("with"), location)
        }
        py::Stmt::Match(_) => {
            ctx.diagnostics.unsupported(ORIGIN, location, "match-statements are not modeled");
            wrap_stmt(ctx, cpg::builders::dummy_statement("match"), location)
        }
        py::Stmt::Global(g) => {
            let names = g.names.iter().map(|n| SmolStr::new(n.as_str())).collect();
            wrap_stmt(ctx, cpg::builders::global_decl(names, false), location)
        }
        py::Stmt::Nonlocal(n) => {
            let names = n.names.iter().map(|name| SmolStr::new(name.as_str())).collect();
            wrap_stmt(ctx, cpg::builders::global_decl(names, true), location)
        }
        py::Stmt::Assert(_) => {
            ctx.diagnostics.unsupported(ORIGIN, location, "assert is not modeled");
            wrap_stmt(ctx, cpg::builders::dummy_statement("assert"), location)
        }
        py::Stmt::Delete(_) => {
            ctx.diagnostics.unsupported(ORIGIN, location, "del is not modeled");
            wrap_stmt(ctx, cpg::builders::dummy_statement("delete"), location)
        }
        py::Stmt::Import(import) => translate_import(ctx, import),
        py::Stmt::ImportFrom(import) => translate_import_from(ctx, import),
        py::Stmt::Assign(assign) => translate_assign(ctx, assign),
        py::Stmt::AugAssign(assign) => translate_aug_assign(ctx, assign),
        py::Stmt::AnnAssign(assign) => translate_ann_assign(ctx, assign),
        py::Stmt::Expr(expr_stmt) => StatementLike::Expr(translate_expr(ctx, &expr_stmt.value)),
    }
}

fn wrap_decl(ctx: &mut TranslationContext, decl_id: DeclId, location: Location) -> StatementLike {
    let stmt = cpg::builders::declaration_stmt(decl_id);
    let stmt_id = ctx.graph.insert_statement(stmt, location);
    StatementLike::Stmt(stmt_id)
}

fn wrap_stmt(ctx: &mut TranslationContext, stmt: crate::cpg::Statement, location: Location) -> StatementLike {
    let stmt_id = ctx.graph.insert_statement(stmt, location);
    StatementLike::Stmt(stmt_id)
}

/// Compound-statement assembly: one compound node per list of sibling
/// statements. Empty input never produces `null`: a warning and a
/// dummy empty compound instead.
pub fn translate_block(ctx: &mut TranslationContext, stmts: &[py::Stmt], block_location: Location) -> crate::cpg::StmtId {
    if stmts.is_empty() {
        ctx.diagnostics.unsupported(ORIGIN, block_location, "empty statement block");
        return ctx.graph.insert_statement(cpg::builders::compound(Vec::new()), block_location);
    }

    let owner = ctx.scopes.enter_block();
    let children: Vec<StatementLike> = stmts.iter().map(|s| translate_stmt(ctx, s)).collect();
    ctx.scopes.leave(owner).expect("block scope entered immediately above");

    ctx.graph.insert_statement(cpg::builders::compound(children), block_location)
}

fn translate_if(ctx: &mut TranslationContext, if_stmt: &py::StmtIf, location: Location) -> StatementLike {
    let condition = translate_expr(ctx, &if_stmt.test);
    let then_branch = translate_block(ctx, &if_stmt.body, location);
    let else_branch = if if_stmt.orelse.is_empty() {
        None
    } else {
        Some(translate_block(ctx, &if_stmt.orelse, location))
    };
    wrap_stmt(ctx, cpg::builders::if_statement(condition, then_branch, else_branch), location)
}

fn translate_while(ctx: &mut TranslationContext, while_stmt: &py::StmtWhile, location: Location) -> StatementLike {
    if !while_stmt.orelse.is_empty() {
        ctx.diagnostics.unsupported(ORIGIN, location, "while-else is not supported");
    }
    let condition = translate_expr(ctx, &while_stmt.test);
    let body = translate_block(ctx, &while_stmt.body, location);
    wrap_stmt(ctx, cpg::builders::while_statement(condition, body), location)
}

fn translate_for(
    ctx: &mut TranslationContext,
    target: &py::Expr,
    iter: &py::Expr,
    body: &[py::Stmt],
    orelse: &[py::Stmt],
    location: Location,
) -> StatementLike {
    if !orelse.is_empty() {
        ctx.diagnostics.unsupported(ORIGIN, location, "for-else is not supported");
    }
    let variable = bind_loop_variable(ctx, target, location);
    let iterable = translate_expr(ctx, iter);
    let body_id = translate_block(ctx, body, location);
    wrap_stmt(ctx, cpg::builders::for_each(variable, iterable, body_id), location)
}

fn translate_try(
    ctx: &mut TranslationContext,
    body: &[py::Stmt],
    handlers: &[py::ExceptHandler],
    orelse: &[py::Stmt],
    finalbody: &[py::Stmt],
    location: Location,
) -> StatementLike {
    if !orelse.is_empty() {
        ctx.diagnostics.unsupported(ORIGIN, location, "try-else is not supported");
    }

    let body_id = translate_block(ctx, body, location);

    let translated_handlers = handlers
        .iter()
        .map(|handler| translate_except_handler(ctx, handler, location))
        .collect();

    let finally = if finalbody.is_empty() {
        None
    } else {
        Some(translate_block(ctx, finalbody, location))
    };

    wrap_stmt(ctx, cpg::builders::try_statement(body_id, translated_handlers, finally), location)
}

/// Handlers are stored opaquely until a later pass refines them: we
/// keep the declared exception type name and bound name as plain text,
/// not resolved.
fn translate_except_handler(ctx: &mut TranslationContext, handler: &py::ExceptHandler, block_location: Location) -> ExceptHandler {
    let py::ExceptHandler::ExceptHandler(handler) = handler;
    let exception_type = handler.type_.as_deref().and_then(|t| match t {
        py::Expr::Name(name) => Some(SmolStr::new(name.id.as_str())),
        _ => None,
    });
    let bound_name = handler.name.as_ref().map(|n| SmolStr::new(n.as_str()));
    let body = translate_block(ctx, &handler.body, block_location);

    ExceptHandler {
        exception_type,
        bound_name,
        body,
    }
}

fn translate_function_def_async(ctx: &mut TranslationContext, def: &py::StmtAsyncFunctionDef, record: Option<DeclId>) -> DeclId {
    crate::translate::functions::translate_async_function_def(ctx, def, record)
}
