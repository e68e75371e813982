//! Import/alias translator: normalizes Python's import shapes into one
//! `Declaration::Import` representation.

use rustpython_ast::{self as py, Ranged};
use smol_str::SmolStr;

use crate::base::Location;
use crate::cpg::{self as cpg, ImportSymbol, StatementLike};
use crate::config::ImplicitDeclarationPolicy;
use crate::translate::context::TranslationContext;

/// `import m` / `import m as a`. Each alias in the statement becomes
/// its own Import declaration, matching the AST shape (Python allows
/// `import a, b as c` as one statement importing two modules).
pub fn translate_import(ctx: &mut TranslationContext, import: &py::StmtImport) -> StatementLike {
    let location = ctx.location(import.range());

    // Only the first module is returned as the statement's own
    // StatementLike; additional comma-separated modules are registered
    // as collateral declarations in the enclosing scope, the same way
    // implicit globals are registered for `from...import` symbols below.
    let mut first: Option<StatementLike> = None;

    for alias in &import.names {
        let module = SmolStr::new(alias.name.as_str());
        let decl_alias = alias.asname.as_ref().map(|n| SmolStr::new(n.as_str()));
        let decl = cpg::builders::import(Some(module), decl_alias.clone(), Vec::new(), false);
        let decl_id = ctx.graph.insert_declaration(decl, location);
        ctx.scopes.add_declaration(&ctx.graph, decl_id);

        register_implicit_global(ctx, decl_alias.as_deref().unwrap_or(alias.name.as_str()), location);

        if first.is_none() {
            let stmt = cpg::builders::declaration_stmt(decl_id);
            let stmt_id = ctx.graph.insert_statement(stmt, location);
            first = Some(StatementLike::Stmt(stmt_id));
        }
    }

    first.unwrap_or_else(|| {
        let empty = ctx.graph.insert_statement(cpg::builders::empty_statement(), location);
        StatementLike::Stmt(empty)
    })
}

/// `from m import s` / `from m import s as a` / `from m import *`.
pub fn translate_import_from(ctx: &mut TranslationContext, import: &py::StmtImportFrom) -> StatementLike {
    let location = ctx.location(import.range());
    let module = import.module.as_ref().map(|m| SmolStr::new(m.as_str()));

    let wildcard = import.names.iter().any(|alias| alias.name.as_str() == "*");

    let symbols: Vec<ImportSymbol> = import
        .names
        .iter()
        .filter(|alias| alias.name.as_str() != "*")
        .map(|alias| ImportSymbol {
            name: SmolStr::new(alias.name.as_str()),
            alias: alias.asname.as_ref().map(|n| SmolStr::new(n.as_str())),
        })
        .collect();

    for symbol in &symbols {
        register_implicit_global(ctx, symbol.alias.as_deref().unwrap_or(&symbol.name), location);
    }

    let decl = cpg::builders::import(module, None, symbols, wildcard);
    let decl_id = ctx.graph.insert_declaration(decl, location);
    ctx.scopes.add_declaration(&ctx.graph, decl_id);

    let stmt = cpg::builders::declaration_stmt(decl_id);
    let stmt_id = ctx.graph.insert_statement(stmt, location);
    StatementLike::Stmt(stmt_id)
}

/// For every top-level imported name, registers a Variable declaration
/// of type "unknown" so later references resolve to something rather
/// than dangle; gated by `ImplicitDeclarationPolicy`.
fn register_implicit_global(ctx: &mut TranslationContext, name: &str, location: Location) {
    if ctx.config.implicit_declaration_policy != ImplicitDeclarationPolicy::Always {
        return;
    }

    let decl = cpg::builders::variable(
        name,
        Some(crate::cpg::TypeRef::Unknown),
        None,
        true,
    );
    let decl_id = ctx.graph.insert_declaration(decl, location);
    ctx.scopes.add_declaration(&ctx.graph, decl_id);
}
