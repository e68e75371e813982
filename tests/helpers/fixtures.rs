//! Shared fixture builders for the integration-test tree, mirroring the
//! teacher's `tests/helpers/source_fixtures.rs` + `hir_helpers.rs` split:
//! one place to turn a snippet of source into a translated unit, and a
//! handful of small accessors for poking at the resulting graph.

use pycpg::config::TranslationConfig;
use pycpg::cpg::{DeclId, Declaration, Variable};
use pycpg::driver::TranslationUnit;

/// Translates `source` with the default policy, panicking on failure —
/// every fixture here is expected to be well-formed Python.
pub fn translate(source: &str) -> TranslationUnit {
    let config = TranslationConfig::default();
    pycpg::parse_file("<fixture>.py", source, &config).expect("fixture source should translate")
}

pub fn translate_with(source: &str, config: &TranslationConfig) -> TranslationUnit {
    pycpg::parse_file("<fixture>.py", source, config).expect("fixture source should translate")
}

pub fn all_declarations<'a>(unit: &'a TranslationUnit) -> Vec<&'a Declaration> {
    (0..unit.graph.declaration_count())
        .map(DeclId::from_index)
        .map(|id| unit.graph.declaration(id))
        .collect()
}

/// The first declaration with this name. Panics if none exists — tests
/// name the one they expect to find.
pub fn find_named<'a>(unit: &'a TranslationUnit, name: &str) -> &'a Declaration {
    all_declarations(unit)
        .into_iter()
        .find(|d| d.name() == Some(name))
        .unwrap_or_else(|| panic!("no declaration named `{name}`"))
}

pub fn find_all_named<'a>(unit: &'a TranslationUnit, name: &str) -> Vec<&'a Declaration> {
    all_declarations(unit).into_iter().filter(|d| d.name() == Some(name)).collect()
}

pub fn variables_named<'a>(unit: &'a TranslationUnit, name: &str) -> Vec<&'a Variable> {
    find_all_named(unit, name)
        .into_iter()
        .filter_map(|d| match d {
            Declaration::Variable(v) => Some(v),
            _ => None,
        })
        .collect()
}

pub fn as_function(decl: &Declaration) -> &pycpg::cpg::Function {
    match decl {
        Declaration::Function(f) => f,
        other => panic!("expected a Function declaration, got {other:?}"),
    }
}

pub fn as_record(decl: &Declaration) -> &pycpg::cpg::Record {
    match decl {
        Declaration::Record(r) => r,
        other => panic!("expected a Record declaration, got {other:?}"),
    }
}

pub fn as_method(decl: &Declaration) -> &pycpg::cpg::Method {
    match decl {
        Declaration::Method(m) => m,
        other => panic!("expected a Method declaration, got {other:?}"),
    }
}

pub fn as_variable(decl: &Declaration) -> &Variable {
    match decl {
        Declaration::Variable(v) => v,
        other => panic!("expected a Variable declaration, got {other:?}"),
    }
}

pub fn as_import(decl: &Declaration) -> &pycpg::cpg::Import {
    match decl {
        Declaration::Import(i) => i,
        other => panic!("expected an Import declaration, got {other:?}"),
    }
}

/// Parses `source`, which must be a single expression statement, and
/// returns its AST expression node (for feeding directly to
/// `translate_expr` in lower-level translator tests).
pub fn first_expr_statement_value(source: &str) -> pycpg::pyast::ast::Expr {
    use pycpg::pyast::ast::{Mod, Stmt};

    let module = pycpg::pyast::parse_module(source, "<fixture>.py").expect("fixture parses");
    match module {
        Mod::Module(m) => match m.body.into_iter().next().expect("fixture has a statement") {
            Stmt::Expr(e) => *e.value,
            other => panic!("expected an expression statement, got {other:?}"),
        },
        other => panic!("expected a module, got {other:?}"),
    }
}

/// Parses `source`, which must be a single statement, and returns its
/// AST node for feeding directly to `translate_stmt`.
pub fn first_statement(source: &str) -> pycpg::pyast::ast::Stmt {
    use pycpg::pyast::ast::Mod;

    let module = pycpg::pyast::parse_module(source, "<fixture>.py").expect("fixture parses");
    match module {
        Mod::Module(m) => m.body.into_iter().next().expect("fixture has a statement"),
        other => panic!("expected a module, got {other:?}"),
    }
}
