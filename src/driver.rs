//! Translation-unit driver: the single public entry point that turns
//! one Python source file into a sealed `TranslationUnit`.

use rustpython_ast::Mod;

use crate::base::SourceMap;
use crate::comments::{collect_comment_tokens, CommentToken};
use crate::config::TranslationConfig;
use crate::cpg::{self as cpg, DeclId, Graph, StatementLike};
use crate::diagnostics::DiagnosticSink;
use crate::error::{TranslationError, TranslationFailed, TranslationResult};
use crate::pyast::parse_module;
use crate::scope::ScopeOwner;
use crate::translate::{translate_stmt, TranslationContext};

/// One file's worth of translated CPG, sealed for downstream use —
/// declarations outlive the scope that produced them.
pub struct TranslationUnit {
    pub graph: Graph,
    pub diagnostics: DiagnosticSink,
    pub root: DeclId,
    pub namespace: DeclId,
    pub file_name: String,
    /// Lexical comment tokens, ready to hand to an external matcher via
    /// [`crate::comments::emit_to_matcher`].
    pub comment_tokens: Vec<CommentToken>,
}

/// Basename, strip only the final extension, keep interior dots.
/// Matches the algorithm
/// `".".join(fname.split("/")[-1].split(".")[:-1])` exactly, including
/// its behavior on an extension-less basename (the whole name, since
/// there is nothing after the last dot to strip away except itself).
pub fn namespace_name_for_file(file_name: &str) -> String {
    let basename = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    let mut parts: Vec<&str> = basename.split('.').collect();
    if parts.len() > 1 {
        parts.pop();
    }
    parts.join(".")
}

/// Parses and translates one Python source file end to end.
pub fn parse_file(file_name: &str, source_text: &str, config: &TranslationConfig) -> TranslationResult<TranslationUnit> {
    let _span = tracing::info_span!("parse_file", file = %file_name).entered();

    let module = parse_module(source_text, file_name)
        .map_err(|err| TranslationFailed::new(file_name, TranslationError::OracleFailure(err)))?;

    let body = match module {
        Mod::Module(m) => m.body,
        _ => Vec::new(),
    };

    let source_map = SourceMap::new(source_text);
    let mut ctx = TranslationContext::new(source_map, config);
    ctx.scopes.reset_to_global();

    let namespace_name = namespace_name_for_file(file_name);
    let namespace_decl = cpg::builders::namespace(namespace_name);
    let namespace_id = ctx.graph.insert_declaration(namespace_decl, crate::base::Location::NoLocation);

    let tu_decl = cpg::builders::translation_unit(file_name, namespace_id);
    let tu_id = ctx.graph.insert_declaration(tu_decl, crate::base::Location::NoLocation);

    ctx.scopes.enter(ScopeOwner::Namespace(namespace_id));

    let mut statements = Vec::with_capacity(body.len());
    let mut declarations = Vec::new();
    for stmt in &body {
        let translated = translate_stmt(&mut ctx, stmt);
        if let StatementLike::Stmt(stmt_id) = translated {
            if let crate::cpg::Statement::DeclarationStmt(decl_id) = ctx.graph.statement(stmt_id) {
                declarations.push(*decl_id);
            }
        }
        statements.push(translated);
    }

    ctx.scopes.leave(ScopeOwner::Namespace(namespace_id)).map_err(|mismatch| {
        TranslationFailed::new(
            file_name,
            TranslationError::ScopeImbalance {
                expected: mismatch.expected.to_string(),
                found: mismatch.found,
            },
        )
    })?;

    if let cpg::Declaration::Namespace(namespace) = ctx.graph.declaration_mut(namespace_id) {
        namespace.statements = statements;
        namespace.declarations = declarations;
    }

    let comment_tokens = collect_comment_tokens(&ctx, source_text);

    Ok(TranslationUnit {
        graph: ctx.graph,
        diagnostics: ctx.diagnostics,
        root: tu_id,
        namespace: namespace_id,
        file_name: file_name.to_string(),
        comment_tokens,
    })
}
