//! Function/class translator: receiver promotion, decorator lowering
//! to Annotations, and record (class) construction.

use rustpython_ast::{self as py, Ranged};
use smol_str::SmolStr;
use text_size::TextRange;

use crate::cpg::{
    self as cpg, Annotation, AnnotationMember, Constructor, DeclId, Declaration, Function, Method,
    MethodModifier, TypeRef,
};
use crate::scope::ScopeOwner;
use crate::translate::context::TranslationContext;
use crate::translate::expr::translate_expr;
use crate::translate::stmt::{translate_block, translate_stmt};

const ORIGIN: &str = "translate_function";

pub fn translate_function_def(ctx: &mut TranslationContext, def: &py::StmtFunctionDef, record: Option<DeclId>) -> DeclId {
    translate_function_shape(
        ctx,
        def.name.as_str(),
        &def.args,
        &def.body,
        &def.decorator_list,
        def.range(),
        record,
    )
}

pub fn translate_async_function_def(ctx: &mut TranslationContext, def: &py::StmtAsyncFunctionDef, record: Option<DeclId>) -> DeclId {
    translate_function_shape(
        ctx,
        def.name.as_str(),
        &def.args,
        &def.body,
        &def.decorator_list,
        def.range(),
        record,
    )
}

/// `FunctionDef` and `AsyncFunctionDef` share this shape entirely; only
/// the "async" bit is lost, since generators/coroutines are not
/// modeled and lower to the same shape as an ordinary function.
fn translate_function_shape(
    ctx: &mut TranslationContext,
    name: &str,
    args: &py::Arguments,
    body: &[py::Stmt],
    decorators: &[py::Expr],
    range: TextRange,
    record: Option<DeclId>,
) -> DeclId {
    let location = ctx.location(range);

    // Step 1: determine kind.
    let is_constructor = record.is_some() && ctx.config.is_constructor_name(name);
    let modifiers = decorator_modifiers(decorators);
    let is_static = modifiers.contains(&MethodModifier::Static);

    // Reserve a DeclId so the function's own scope can be tagged with
    // it; the placeholder value is never observed
    // because nothing reads `decl_id` back out of the graph until after
    // it is overwritten below, just before the scope is left.
    let placeholder = cpg::builders::variable("<function-placeholder>", None, None, true);
    let decl_id = ctx.graph.insert_declaration(placeholder, location);

    let owner = match (record, is_constructor) {
        (Some(_), true) => ScopeOwner::Constructor(decl_id),
        (Some(_), false) => ScopeOwner::Method(decl_id),
        (None, _) => ScopeOwner::Function(decl_id),
    };
    ctx.scopes.enter(owner);

    // Steps 3-4: positional parameters, with receiver promotion.
    let positional: Vec<&py::ArgWithDefault> = args.posonlyargs.iter().chain(args.args.iter()).collect();
    let mut parameter_ids = Vec::with_capacity(positional.len());
    let mut receiver = None;

    for (index, arg_with_default) in positional.iter().enumerate() {
        let arg = &arg_with_default.def;
        let param_name = arg.arg.as_str();
        let param_location = ctx.location(arg.range());

        if index == 0 && record.is_some() && !is_static {
            let record_name = match ctx.graph.declaration(record.unwrap()) {
                Declaration::Record(r) => r.name.clone(),
                _ => SmolStr::new(param_name),
            };
            let receiver_decl = cpg::builders::parameter(param_name, TypeRef::Named(record_name), false);
            let receiver_id = ctx.graph.insert_declaration(receiver_decl, param_location);
            ctx.scopes.add_declaration(&ctx.graph, receiver_id);
            ctx.scopes.set_receiver(receiver_id);
            receiver = Some(receiver_id);
            parameter_ids.push(receiver_id);
            continue;
        }

        let declared_type = arg
            .annotation
            .as_deref()
            .map(type_ref_from_annotation)
            .unwrap_or(TypeRef::Unknown);
        let param_decl = cpg::builders::parameter(param_name, declared_type, false);
        let param_id = ctx.graph.insert_declaration(param_decl, param_location);
        ctx.scopes.add_declaration(&ctx.graph, param_id);
        parameter_ids.push(param_id);
    }

    // Step 5: the rest of the partitions are recognized but unmodeled.
    if args.vararg.is_some() || args.kwarg.is_some() || !args.kwonlyargs.is_empty() {
        ctx.diagnostics.unsupported(
            ORIGIN,
            location,
            "*args/**kwargs/keyword-only parameters are recognized structurally but not fully modeled",
        );
    }

    // Step 6: body.
    let body_id = translate_block(ctx, body, location);

    // Step 7: decorators -> annotations.
    let annotations: Vec<Annotation> = decorators.iter().map(|d| decorator_to_annotation(ctx, d)).collect();

    let function = Function {
        name: SmolStr::new(name),
        parameters: parameter_ids,
        receiver,
        body: body_id,
        annotations,
    };

    let finished = match (record, is_constructor) {
        (Some(record_id), true) => Declaration::Constructor(Constructor {
            method: Method {
                function,
                record: record_id,
                modifiers,
            },
        }),
        (Some(record_id), false) => Declaration::Method(Method {
            function,
            record: record_id,
            modifiers,
        }),
        (None, _) => Declaration::Function(function),
    };
    *ctx.graph.declaration_mut(decl_id) = finished;

    // Step 8: leave the scope, then register in the (now current) enclosing scope.
    ctx.scopes.leave(owner).expect("function scope entered immediately above");
    ctx.scopes.add_declaration(&ctx.graph, decl_id);

    decl_id
}

fn type_ref_from_annotation(annotation: &py::Expr) -> TypeRef {
    match annotation {
        py::Expr::Name(name) => TypeRef::Named(SmolStr::new(name.id.as_str())),
        py::Expr::Constant(c) if matches!(c.value, py::Constant::None) => TypeRef::Primitive(crate::lexicon::PrimitiveType::None),
        _ => TypeRef::Unknown,
    }
}

const MODIFIER_NAMES: &[(&str, MethodModifier)] = &[
    ("staticmethod", MethodModifier::Static),
    ("classmethod", MethodModifier::ClassMethod),
    ("property", MethodModifier::Property),
];

/// A bare-name decorator matching one of the three well-known names
/// additionally tags the method, since it changes whether the first
/// parameter is promoted to receiver at all.
fn decorator_modifiers(decorators: &[py::Expr]) -> Vec<MethodModifier> {
    decorators
        .iter()
        .filter_map(|d| match d {
            py::Expr::Name(name) => MODIFIER_NAMES
                .iter()
                .find(|(n, _)| *n == name.id.as_str())
                .map(|(_, modifier)| *modifier),
            _ => None,
        })
        .collect()
}

/// Every decorator becomes a generic Annotation regardless of whether
/// it also set a `MethodModifier` above.
fn decorator_to_annotation(ctx: &mut TranslationContext, decorator: &py::Expr) -> Annotation {
    match decorator {
        py::Expr::Name(name) => Annotation {
            name: SmolStr::new(name.id.as_str()),
            members: Vec::new(),
        },
        py::Expr::Attribute(attr) => {
            let base = translate_expr(ctx, &attr.value);
            Annotation {
                name: SmolStr::new(attr.attr.as_str()),
                members: vec![AnnotationMember {
                    name: SmolStr::new("receiver"),
                    value: base,
                }],
            }
        }
        py::Expr::Call(call) => {
            let (name, mut members) = match call.func.as_ref() {
                py::Expr::Name(n) => (SmolStr::new(n.id.as_str()), Vec::new()),
                py::Expr::Attribute(attr) => {
                    let base = translate_expr(ctx, &attr.value);
                    (
                        SmolStr::new(attr.attr.as_str()),
                        vec![AnnotationMember {
                            name: SmolStr::new("receiver"),
                            value: base,
                        }],
                    )
                }
                _ => {
                    let location = ctx.location(decorator.range());
                    ctx.diagnostics.unsupported(ORIGIN, location, "unsupported decorator callee shape");
                    (SmolStr::new("unknown"), Vec::new())
                }
            };

            for arg in &call.args {
                let value = translate_expr(ctx, arg);
                members.push(AnnotationMember {
                    name: SmolStr::new("value"),
                    value,
                });
            }
            for keyword in &call.keywords {
                if let Some(arg_name) = &keyword.arg {
                    let value = translate_expr(ctx, &keyword.value);
                    members.push(AnnotationMember {
                        name: SmolStr::new(arg_name.as_str()),
                        value,
                    });
                }
            }

            Annotation { name, members }
        }
        other => {
            let location = ctx.location(other.range());
            ctx.diagnostics.unsupported(ORIGIN, location, "unsupported decorator expression shape");
            Annotation {
                name: SmolStr::new("unknown"),
                members: Vec::new(),
            }
        }
    }
}

pub fn translate_class_def(ctx: &mut TranslationContext, def: &py::StmtClassDef) -> DeclId {
    let location = ctx.location(def.range());

    let record_decl = cpg::builders::record(def.name.as_str(), Vec::new());
    let record_id = ctx.graph.insert_declaration(record_decl, location);

    ctx.scopes.enter(ScopeOwner::Record(record_id));

    for base in &def.bases {
        match base {
            py::Expr::Name(name) => {
                let type_ref = TypeRef::Named(SmolStr::new(name.id.as_str()));
                if let Declaration::Record(r) = ctx.graph.declaration_mut(record_id) {
                    r.super_types.push(type_ref);
                }
            }
            _ => {
                ctx.diagnostics.unsupported(ORIGIN, location, "non-name base classes are not modeled");
            }
        }
    }
    if !def.keywords.is_empty() {
        ctx.diagnostics.unsupported(ORIGIN, location, "keyword base classes (e.g. metaclass=) are not supported");
    }

    for stmt in &def.body {
        match stmt {
            py::Stmt::FunctionDef(fd) => {
                let method_id = translate_function_def(ctx, fd, Some(record_id));
                if let Declaration::Record(r) = ctx.graph.declaration_mut(record_id) {
                    r.methods.push(method_id);
                }
            }
            py::Stmt::AsyncFunctionDef(fd) => {
                let method_id = translate_async_function_def(ctx, fd, Some(record_id));
                if let Declaration::Record(r) = ctx.graph.declaration_mut(record_id) {
                    r.methods.push(method_id);
                }
            }
            other => {
                let translated = translate_stmt(ctx, other);
                if let Declaration::Record(r) = ctx.graph.declaration_mut(record_id) {
                    r.statements.push(translated);
                }
            }
        }
    }

    if !def.decorator_list.is_empty() {
        ctx.diagnostics.unsupported(ORIGIN, location, "class decorators are not modeled");
    }

    ctx.scopes
        .leave(ScopeOwner::Record(record_id))
        .expect("record scope entered immediately above");
    ctx.scopes.add_declaration(&ctx.graph, record_id);

    record_id
}
