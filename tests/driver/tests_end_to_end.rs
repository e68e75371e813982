//! End-to-end scenarios, one per case named in the specification: feed
//! `parse_file` a small snippet and inspect the resulting graph shape.

use pycpg::cpg::{CallKind, Declaration, Expression, Statement, StatementLike};
use pycpg::lexicon::PrimitiveType;

use crate::helpers::fixtures::{as_function, as_method, as_record, as_variable, find_named, translate};

#[test]
fn simple_function_and_call() {
    let unit = translate("def add(a, b):\n    return a + b\nc = add(1, 2)\n");

    let add_decl = find_named(&unit, "add");
    let add_id = match unit.graph.declaration(unit.namespace) {
        Declaration::Namespace(ns) => *ns
            .declarations
            .iter()
            .find(|id| unit.graph.declaration(**id).name() == Some("add"))
            .expect("add is a namespace-level declaration"),
        _ => unreachable!(),
    };
    let add = as_function(add_decl);
    assert_eq!(add.parameters.len(), 2);
    assert!(add.receiver.is_none());

    let body = match unit.graph.statement(add.body) {
        Statement::Compound(children) => children.clone(),
        other => panic!("expected a compound body, got {other:?}"),
    };
    assert_eq!(body.len(), 1);
    let ret_value = match body[0] {
        StatementLike::Stmt(stmt_id) => match unit.graph.statement(stmt_id) {
            Statement::Return(Some(expr_id)) => *expr_id,
            other => panic!("expected a Return, got {other:?}"),
        },
        StatementLike::Expr(_) => panic!("expected a Return statement"),
    };
    match unit.graph.expression(ret_value) {
        Expression::Binary { operator, lhs, .. } => {
            assert_eq!(operator.as_str(), "+");
            match unit.graph.expression(*lhs) {
                Expression::Reference { refers_to, .. } => {
                    assert_eq!(*refers_to, Some(add.parameters[0]));
                }
                other => panic!("expected a Reference, got {other:?}"),
            }
        }
        other => panic!("expected a Binary, got {other:?}"),
    }

    let c = as_variable(find_named(&unit, "c"));
    let call_id = c.initializer.expect("c has an initializer");
    match unit.graph.expression(call_id) {
        Expression::Call(call) => {
            assert_eq!(call.kind, CallKind::Plain);
            assert_eq!(call.arguments.len(), 2);
            match unit.graph.expression(call.callee) {
                Expression::Reference { name, refers_to } => {
                    assert_eq!(name.as_str(), "add");
                    assert_eq!(*refers_to, Some(add_id));
                }
                other => panic!("expected a Reference callee, got {other:?}"),
            }
        }
        other => panic!("expected a Call, got {other:?}"),
    }
}

#[test]
fn constructor_discrimination() {
    let unit = translate("class Foo:\n    pass\nx = Foo()\n");

    as_record(find_named(&unit, "Foo"));
    let foo_id = (0..unit.graph.declaration_count())
        .map(pycpg::cpg::DeclId::from_index)
        .find(|id| unit.graph.declaration(*id).name() == Some("Foo"))
        .expect("Foo is a declared record");

    let x = as_variable(find_named(&unit, "x"));
    let call_id = x.initializer.expect("x has an initializer");
    match unit.graph.expression(call_id) {
        Expression::Call(call) => {
            assert_eq!(call.kind, CallKind::Construct);
            assert_eq!(call.resolved_record, Some(foo_id));
        }
        other => panic!("expected a Call, got {other:?}"),
    }
}

#[test]
fn method_receiver_and_field_assignment() {
    let unit = translate("class A:\n    def m(self, x):\n        self.y = x\n");

    let record_id = (0..unit.graph.declaration_count())
        .map(pycpg::cpg::DeclId::from_index)
        .find(|id| unit.graph.declaration(*id).name() == Some("A"))
        .expect("A is a declared record");
    let record = as_record(find_named(&unit, "A"));
    assert_eq!(record.methods.len(), 1);
    let method = as_method(unit.graph.declaration(record.methods[0]));
    assert_eq!(method.function.name.as_str(), "m");
    assert_eq!(method.function.parameters.len(), 2);
    assert_eq!(method.function.receiver, Some(method.function.parameters[0]));

    assert_eq!(record.fields.len(), 1);
    let field = match unit.graph.declaration(record.fields[0]) {
        Declaration::Field(f) => f,
        other => panic!("expected a Field, got {other:?}"),
    };
    assert_eq!(field.name.as_str(), "y");
    assert_eq!(field.record, record_id);
}

#[test]
fn cast_shortcut() {
    let unit = translate("s = str(123)\n");

    let s = as_variable(find_named(&unit, "s"));
    let call_id = s.initializer.expect("s has an initializer");
    match unit.graph.expression(call_id) {
        Expression::Call(call) => {
            assert_eq!(call.kind, CallKind::Cast);
            assert_eq!(call.cast_type.as_deref(), Some("str"));
        }
        other => panic!("expected a Call, got {other:?}"),
    }
}

#[test]
fn import_normalization() {
    let unit = translate("import m as a\nfrom p import q, r as s\n");

    let imports: Vec<&pycpg::cpg::Import> = (0..unit.graph.declaration_count())
        .map(pycpg::cpg::DeclId::from_index)
        .filter_map(|id| match unit.graph.declaration(id) {
            Declaration::Import(i) => Some(i),
            _ => None,
        })
        .collect();
    assert_eq!(imports.len(), 2);

    let m_import = imports
        .iter()
        .find(|i| i.module.as_deref() == Some("m"))
        .expect("an import of module `m`");
    assert_eq!(m_import.alias.as_deref(), Some("a"));

    let p_import = imports
        .iter()
        .find(|i| i.module.as_deref() == Some("p"))
        .expect("an import of module `p`");
    assert_eq!(p_import.symbols.len(), 2);
    assert_eq!(p_import.symbols[0].name.as_str(), "q");
    assert!(p_import.symbols[0].alias.is_none());
    assert_eq!(p_import.symbols[1].name.as_str(), "r");
    assert_eq!(p_import.symbols[1].alias.as_deref(), Some("s"));

    for implicit_name in ["a", "q", "s"] {
        let has_implicit_variable = (0..unit.graph.declaration_count())
            .map(pycpg::cpg::DeclId::from_index)
            .any(|id| match unit.graph.declaration(id) {
                Declaration::Variable(v) => v.name.as_str() == implicit_name && v.implicit,
                _ => false,
            });
        assert!(has_implicit_variable, "expected an implicit global named `{implicit_name}`");
    }
}

#[test]
fn complex_literal_folding() {
    let unit = translate("z = 3 + 5j\n");

    let z = as_variable(find_named(&unit, "z"));
    let value_id = z.initializer.expect("z has an initializer");
    match unit.graph.expression(value_id) {
        Expression::Literal { value, primitive_type } => {
            assert_eq!(*primitive_type, PrimitiveType::Complex);
            assert_eq!(value.as_str(), "(3+5j)");
        }
        other => panic!("expected a complex Literal, got {other:?}"),
    }

    let has_binary = (0..unit.graph.expression_count())
        .map(pycpg::cpg::ExprId::from_index)
        .any(|id| matches!(unit.graph.expression(id), Expression::Binary { .. }));
    assert!(!has_binary, "complex folding should never emit a Binary node");
}
