//! Expression translator. Every AST expression node maps to
//! exactly one CPG expression variant; children are always translated
//! (and inserted into the graph) before the parent, by direct recursion.

use rustpython_ast::{self as py, Constant, Ranged};
use smol_str::SmolStr;

use crate::cpg::{self as cpg, Argument, ExprId, Expression, TypeRef};
use crate::lexicon;
use crate::translate::context::TranslationContext;

const ORIGIN: &str = "translate_expr";

pub fn translate_expr(ctx: &mut TranslationContext, expr: &py::Expr) -> ExprId {
    let location = ctx.location(expr.range());

    let built = match expr {
        py::Expr::Name(name) => translate_name(ctx, name),
        py::Expr::Constant(constant) => translate_constant(constant),
        py::Expr::BinOp(binop) => return translate_binop(ctx, binop),
        py::Expr::Compare(compare) => return translate_compare(ctx, compare),
        py::Expr::Call(call) => return translate_call(ctx, call),
        py::Expr::Attribute(attr) => return translate_attribute(ctx, attr),
        py::Expr::Subscript(sub) => return translate_subscript(ctx, sub),
        py::Expr::List(list) => return translate_sequence(ctx, &list.elts, expr.range()),
        py::Expr::Tuple(tuple) => return translate_sequence(ctx, &tuple.elts, expr.range()),
        py::Expr::Dict(dict) => return translate_dict(ctx, dict),
        py::Expr::IfExp(ifexp) => return translate_ifexp(ctx, ifexp),
        py::Expr::Await(await_) => return translate_expr(ctx, &await_.value),
        py::Expr::BoolOp(boolop) => return translate_boolop(ctx, boolop),
        py::Expr::UnaryOp(unary) => return translate_unaryop(ctx, unary),
        py::Expr::FormattedValue(_) | py::Expr::JoinedStr(_) => {
            ctx.diagnostics.unsupported(ORIGIN, location, "f-string formatting is not modeled");
            cpg::builders::unsupported("formatted-string")
        }
        py::Expr::Set(_) => {
            ctx.diagnostics.unsupported(ORIGIN, location, "set literals are not modeled");
            cpg::builders::unsupported("set")
        }
        py::Expr::ListComp(_) | py::Expr::SetComp(_) | py::Expr::DictComp(_) | py::Expr::GeneratorExp(_) => {
            ctx.diagnostics.unsupported(ORIGIN, location, "comprehensions are not modeled");
            cpg::builders::unsupported("comprehension")
        }
        py::Expr::Lambda(_) => {
            ctx.diagnostics.unsupported(ORIGIN, location, "lambda expressions are not modeled");
            cpg::builders::unsupported("lambda")
        }
        py::Expr::NamedExpr(_) => {
            ctx.diagnostics.unsupported(ORIGIN, location, "walrus assignment is not modeled");
            cpg::builders::unsupported("named-expr")
        }
        py::Expr::Starred(_) => {
            ctx.diagnostics.unsupported(ORIGIN, location, "starred expressions are not modeled");
            cpg::builders::unsupported("starred")
        }
        py::Expr::Yield(_) | py::Expr::YieldFrom(_) => {
            ctx.diagnostics.unsupported(ORIGIN, location, "generators are lowered to a placeholder, not a coroutine");
            cpg::builders::unsupported("yield")
        }
        py::Expr::Slice(_) => {
            // Reached only if a slice appears outside subscript position.
            ctx.diagnostics.shape_mismatch(ORIGIN, location, "slice expression outside subscript");
            cpg::builders::dummy_expression("slice-outside-subscript")
        }
    };

    ctx.graph.insert_expression(built, location)
}

fn translate_name(ctx: &mut TranslationContext, name: &py::ExprName) -> Expression {
    let ident = name.id.as_str();

    // The receiver is registered as an ordinary Parameter declaration
    // under its own name, so plain lexical resolve already finds it;
    // the hint only matters when the host renamed the convention.
    let refers_to = match &ctx.config.receiver_name_hint {
        Some(hint) if hint == ident => ctx.resolver().current_receiver().or_else(|| ctx.resolver().resolve(ident)),
        _ => ctx.resolver().resolve(ident),
    };

    Expression::Reference {
        name: SmolStr::new(ident),
        refers_to,
    }
}

fn translate_constant(constant: &py::ExprConstant) -> Expression {
    let (primitive_type, value) = lexicon::classify_constant(&constant.value);
    cpg::builders::literal(value, primitive_type)
}

/// Folds `x + <complex literal>` into one complex Literal rather than
/// emitting a Binary node — a known lossy shortcut.
fn translate_binop(ctx: &mut TranslationContext, binop: &py::ExprBinOp) -> ExprId {
    let location = ctx.location(binop.range());

    if binop.op == py::Operator::Add {
        if let py::Expr::Constant(rhs_const) = binop.right.as_ref() {
            if let Constant::Complex { real, imag } = &rhs_const.value {
                if let Some(lhs_real) = numeric_value(&binop.left) {
                    let value = SmolStr::new(lexicon::format_complex(lhs_real + real, *imag));
                    let literal = cpg::builders::literal(value, lexicon::PrimitiveType::Complex);
                    return ctx.graph.insert_expression(literal, location);
                }
            }
        }
    }

    let lhs = translate_expr(ctx, &binop.left);
    let rhs = translate_expr(ctx, &binop.right);
    let built = cpg::builders::binary(lexicon::binary_op_code(&binop.op), lhs, rhs);
    ctx.graph.insert_expression(built, location)
}

fn numeric_value(expr: &py::Expr) -> Option<f64> {
    match expr {
        py::Expr::Constant(c) => match &c.value {
            Constant::Int(i) => i.to_string().parse::<f64>().ok(),
            Constant::Float(f) => Some(*f),
            _ => None,
        },
        _ => None,
    }
}

/// A chained compare (`a < b < c`, more than one comparator) is a shape
/// the core does not model; it becomes a DUMMY binary carrying an
/// Unsupported diagnostic rather than being silently approximated.
fn translate_compare(ctx: &mut TranslationContext, compare: &py::ExprCompare) -> ExprId {
    let location = ctx.location(compare.range());

    if compare.ops.len() != 1 || compare.comparators.len() != 1 {
        ctx.diagnostics.unsupported(
            ORIGIN,
            location,
            "chained comparisons are not modeled; emitting a DUMMY binary",
        );
        let dummy = cpg::builders::dummy_expression("chained-compare");
        return ctx.graph.insert_expression(dummy, location);
    }

    let lhs = translate_expr(ctx, &compare.left);
    let rhs = translate_expr(ctx, &compare.comparators[0]);
    let built = cpg::builders::binary(lexicon::cmp_op_code(&compare.ops[0]), lhs, rhs);
    ctx.graph.insert_expression(built, location)
}

/// The call-kind discrimination procedure.
fn translate_call(ctx: &mut TranslationContext, call: &py::ExprCall) -> ExprId {
    let location = ctx.location(call.range());
    let callee = translate_expr(ctx, &call.func);

    let arguments = translate_arguments(ctx, call);

    let kind_expr = match ctx.graph.expression(callee) {
        Expression::Member { .. } => cpg::builders::member_call(callee, arguments),
        Expression::Reference { name, .. } => {
            let name = name.clone();
            if let Some(record_id) = ctx.resolver().record_for_name(&name) {
                cpg::builders::construct_call(callee, arguments, record_id)
            } else if name.as_str() == "str" && single_positional(call) {
                cpg::builders::cast_call(callee, arguments, "str")
            } else {
                cpg::builders::plain_call(callee, arguments)
            }
        }
        _ => cpg::builders::plain_call(callee, arguments),
    };

    ctx.graph.insert_expression(kind_expr, location)
}

fn single_positional(call: &py::ExprCall) -> bool {
    call.args.len() == 1 && call.keywords.is_empty()
}

fn translate_arguments(ctx: &mut TranslationContext, call: &py::ExprCall) -> Vec<Argument> {
    let mut arguments: Vec<Argument> = call
        .args
        .iter()
        .map(|arg| Argument {
            name: None,
            value: translate_expr(ctx, arg),
        })
        .collect();

    for keyword in &call.keywords {
        match &keyword.arg {
            Some(name) => arguments.push(Argument {
                name: Some(SmolStr::new(name.as_str())),
                value: translate_expr(ctx, &keyword.value),
            }),
            None => {
                let location = ctx.location(keyword.range());
                ctx.diagnostics.unsupported(ORIGIN, location, "**kwargs expansion is not modeled");
            }
        }
    }

    arguments
}

fn translate_attribute(ctx: &mut TranslationContext, attr: &py::ExprAttribute) -> ExprId {
    let location = ctx.location(attr.range());
    let base = translate_expr(ctx, &attr.value);
    let built = cpg::builders::member(base, attr.attr.as_str());
    ctx.graph.insert_expression(built, location)
}

fn translate_subscript(ctx: &mut TranslationContext, sub: &py::ExprSubscript) -> ExprId {
    let location = ctx.location(sub.range());
    let base = translate_expr(ctx, &sub.value);

    let subscript = match sub.slice.as_ref() {
        py::Expr::Slice(slice) => translate_slice(ctx, slice),
        other => translate_expr(ctx, other),
    };

    let built = cpg::builders::subscript(base, subscript);
    ctx.graph.insert_expression(built, location)
}

fn translate_slice(ctx: &mut TranslationContext, slice: &py::ExprSlice) -> ExprId {
    let location = ctx.location(slice.range());
    let lower = slice.lower.as_deref().map(|e| translate_expr(ctx, e));
    let upper = slice.upper.as_deref().map(|e| translate_expr(ctx, e));
    let step = slice.step.as_deref().map(|e| translate_expr(ctx, e));

    if step.is_some() {
        ctx.diagnostics.unsupported(ORIGIN, location, "slice step is not modeled");
    }

    let built = cpg::builders::range(lower, upper, step);
    ctx.graph.insert_expression(built, location)
}

fn translate_sequence(ctx: &mut TranslationContext, elts: &[py::Expr], range: text_size::TextRange) -> ExprId {
    let location = ctx.location(range);
    let elements = elts.iter().map(|e| translate_expr(ctx, e)).collect();
    let built = cpg::builders::initializer_list(elements);
    ctx.graph.insert_expression(built, location)
}

fn translate_dict(ctx: &mut TranslationContext, dict: &py::ExprDict) -> ExprId {
    let location = ctx.location(dict.range());
    let mut entries = Vec::with_capacity(dict.keys.len());

    for (key, value) in dict.keys.iter().zip(dict.values.iter()) {
        let value_id = translate_expr(ctx, value);
        let entry = match key {
            Some(key_expr) => {
                let key_id = translate_expr(ctx, key_expr);
                let kv_location = ctx.location(key_expr.range());
                let kv = cpg::builders::key_value(key_id, value_id);
                ctx.graph.insert_expression(kv, kv_location)
            }
            None => {
                // `**other` inside a dict literal: not modeled.
                ctx.diagnostics.unsupported(ORIGIN, location, "dict unpacking (**) is not modeled");
                value_id
            }
        };
        entries.push(entry);
    }

    let built = cpg::builders::key_value_list(entries);
    ctx.graph.insert_expression(built, location)
}

fn translate_ifexp(ctx: &mut TranslationContext, ifexp: &py::ExprIfExp) -> ExprId {
    let location = ctx.location(ifexp.range());
    let test = translate_expr(ctx, &ifexp.test);
    let then_expr = translate_expr(ctx, &ifexp.body);
    let else_expr = translate_expr(ctx, &ifexp.orelse);
    let built = cpg::builders::conditional(test, then_expr, else_expr);
    ctx.graph.insert_expression(built, location)
}

/// Binary operator over the first two operands; three or more operands
/// emit a diagnostic rather than desugaring into a left-associative
/// chain.
fn translate_boolop(ctx: &mut TranslationContext, boolop: &py::ExprBoolOp) -> ExprId {
    let location = ctx.location(boolop.range());

    if boolop.values.len() > 2 {
        ctx.diagnostics.unsupported(
            ORIGIN,
            location,
            "boolean operator with 3+ operands is folded to its first two",
        );
    }

    let lhs = translate_expr(ctx, &boolop.values[0]);
    let rhs = translate_expr(ctx, &boolop.values[1]);
    let built = cpg::builders::binary(lexicon::bool_op_code(&boolop.op), lhs, rhs);
    ctx.graph.insert_expression(built, location)
}

fn translate_unaryop(ctx: &mut TranslationContext, unary: &py::ExprUnaryOp) -> ExprId {
    let location = ctx.location(unary.range());
    let operand = translate_expr(ctx, &unary.operand);
    let built = cpg::builders::unary(lexicon::unary_op_code(&unary.op), Some(operand));
    ctx.graph.insert_expression(built, location)
}

/// Builds a raise-as-unary-operator expression, used by the statement
/// translator rather than from the dispatch table above since `raise`
/// has no `Expr` AST counterpart. A bare `raise` carries no operand.
pub fn translate_raise_operand(ctx: &mut TranslationContext, operand: Option<&py::Expr>, location: crate::base::Location) -> ExprId {
    let operand = operand.map(|expr| translate_expr(ctx, expr));
    let built = cpg::builders::unary(lexicon::RAISE_OPERATOR_CODE, operand);
    ctx.graph.insert_expression(built, location)
}

/// Mismatches the assignment discriminator must wrap the LHS
/// reference with the scope's `TypeRef`; exposed for `assign.rs`.
pub fn declared_type_of(ctx: &TranslationContext, expr_id: ExprId) -> Option<TypeRef> {
    match ctx.graph.expression(expr_id) {
        Expression::Literal { primitive_type, .. } => Some(TypeRef::Primitive(*primitive_type)),
        _ => None,
    }
}
