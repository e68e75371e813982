//! Pure constructors: each function allocates a value of the right
//! kind and sets its invariant attributes. None of them touch a
//! `Graph` or a `Location` — the translator inserts the result and
//! attaches a location immediately afterward, at the call site.

use smol_str::SmolStr;

use crate::cpg::ids::{DeclId, ExprId, StmtId};
use crate::cpg::node::*;
use crate::lexicon::PrimitiveType;

// --- Declarations -------------------------------------------------------

pub fn variable(
    name: impl Into<SmolStr>,
    declared_type: Option<TypeRef>,
    initializer: Option<ExprId>,
    implicit: bool,
) -> Declaration {
    Declaration::Variable(Variable {
        name: name.into(),
        declared_type,
        initializer,
        implicit,
    })
}

pub fn field(
    name: impl Into<SmolStr>,
    declared_type: Option<TypeRef>,
    initializer: Option<ExprId>,
    record: DeclId,
) -> Declaration {
    Declaration::Field(Field {
        name: name.into(),
        declared_type,
        initializer,
        record,
    })
}

pub fn parameter(name: impl Into<SmolStr>, declared_type: TypeRef, variadic: bool) -> Declaration {
    Declaration::Parameter(Parameter {
        name: name.into(),
        declared_type,
        variadic,
    })
}

pub fn function(
    name: impl Into<SmolStr>,
    parameters: Vec<DeclId>,
    receiver: Option<DeclId>,
    body: StmtId,
    annotations: Vec<Annotation>,
) -> Declaration {
    Declaration::Function(Function {
        name: name.into(),
        parameters,
        receiver,
        body,
        annotations,
    })
}

pub fn method(function: Function, record: DeclId, modifiers: Vec<MethodModifier>) -> Declaration {
    Declaration::Method(Method {
        function,
        record,
        modifiers,
    })
}

pub fn constructor(method: Method) -> Declaration {
    Declaration::Constructor(Constructor { method })
}

pub fn record(name: impl Into<SmolStr>, super_types: Vec<TypeRef>) -> Declaration {
    Declaration::Record(Record {
        name: name.into(),
        super_types,
        fields: Vec::new(),
        methods: Vec::new(),
        statements: Vec::new(),
    })
}

pub fn import(
    module: Option<SmolStr>,
    alias: Option<SmolStr>,
    symbols: Vec<ImportSymbol>,
    wildcard: bool,
) -> Declaration {
    Declaration::Import(Import {
        module,
        alias,
        symbols,
        wildcard,
    })
}

pub fn namespace(name: impl Into<SmolStr>) -> Declaration {
    Declaration::Namespace(Namespace {
        name: name.into(),
        declarations: Vec::new(),
        statements: Vec::new(),
    })
}

pub fn translation_unit(file_name: impl Into<SmolStr>, namespace: DeclId) -> Declaration {
    Declaration::TranslationUnit(TranslationUnitDecl {
        file_name: file_name.into(),
        namespace,
    })
}

// --- Statements ----------------------------------------------------------

pub fn compound(children: Vec<StatementLike>) -> Statement {
    Statement::Compound(children)
}

pub fn declaration_stmt(decl: DeclId) -> Statement {
    Statement::DeclarationStmt(decl)
}

pub fn empty_statement() -> Statement {
    Statement::Empty
}

pub fn return_statement(value: Option<ExprId>) -> Statement {
    Statement::Return(value)
}

pub fn break_statement() -> Statement {
    Statement::Break
}

pub fn if_statement(condition: ExprId, then_branch: StmtId, else_branch: Option<StmtId>) -> Statement {
    Statement::If {
        condition,
        then_branch,
        else_branch,
    }
}

pub fn while_statement(condition: ExprId, body: StmtId) -> Statement {
    Statement::While { condition, body }
}

pub fn for_each(variable: StatementLike, iterable: ExprId, body: StmtId) -> Statement {
    Statement::ForEach {
        variable,
        iterable,
        body,
    }
}

pub fn try_statement(body: StmtId, handlers: Vec<ExceptHandler>, finally: Option<StmtId>) -> Statement {
    Statement::Try {
        body,
        handlers,
        finally,
    }
}

pub fn global_decl(names: Vec<SmolStr>, nonlocal: bool) -> Statement {
    Statement::GlobalDecl { names, nonlocal }
}

pub fn dummy_statement(reason: impl Into<SmolStr>) -> Statement {
    Statement::Dummy(reason.into())
}

// --- Expressions ----------------------------------------------------------

pub fn literal(value: impl Into<SmolStr>, primitive_type: PrimitiveType) -> Expression {
    Expression::Literal {
        value: value.into(),
        primitive_type,
    }
}

pub fn reference(name: impl Into<SmolStr>) -> Expression {
    Expression::Reference {
        name: name.into(),
        refers_to: None,
    }
}

pub fn member(base: ExprId, attribute: impl Into<SmolStr>) -> Expression {
    Expression::Member {
        base,
        attribute: attribute.into(),
        operator: SmolStr::new("."),
    }
}

pub fn subscript(base: ExprId, subscript: ExprId) -> Expression {
    Expression::Subscript { base, subscript }
}

pub fn range(lower: Option<ExprId>, upper: Option<ExprId>, step: Option<ExprId>) -> Expression {
    Expression::Range { lower, upper, step }
}

pub fn plain_call(callee: ExprId, arguments: Vec<Argument>) -> Expression {
    Expression::Call(Call {
        kind: CallKind::Plain,
        callee,
        arguments,
        resolved_record: None,
        cast_type: None,
    })
}

pub fn member_call(callee: ExprId, arguments: Vec<Argument>) -> Expression {
    Expression::Call(Call {
        kind: CallKind::Member,
        callee,
        arguments,
        resolved_record: None,
        cast_type: None,
    })
}

pub fn construct_call(callee: ExprId, arguments: Vec<Argument>, record: DeclId) -> Expression {
    Expression::Call(Call {
        kind: CallKind::Construct,
        callee,
        arguments,
        resolved_record: Some(record),
        cast_type: None,
    })
}

pub fn cast_call(callee: ExprId, arguments: Vec<Argument>, target_type: impl Into<SmolStr>) -> Expression {
    Expression::Call(Call {
        kind: CallKind::Cast,
        callee,
        arguments,
        resolved_record: None,
        cast_type: Some(target_type.into()),
    })
}

pub fn binary(operator: impl Into<SmolStr>, lhs: ExprId, rhs: ExprId) -> Expression {
    Expression::Binary {
        operator: operator.into(),
        lhs,
        rhs,
    }
}

pub fn unary(operator: impl Into<SmolStr>, operand: Option<ExprId>) -> Expression {
    Expression::Unary {
        operator: operator.into(),
        operand,
    }
}

pub fn conditional(test: ExprId, then_expr: ExprId, else_expr: ExprId) -> Expression {
    Expression::Conditional {
        test,
        then_expr,
        else_expr,
    }
}

pub fn initializer_list(elements: Vec<ExprId>) -> Expression {
    Expression::InitializerList { elements }
}

pub fn key_value(key: ExprId, value: ExprId) -> Expression {
    Expression::KeyValue { key, value }
}

pub fn key_value_list(entries: Vec<ExprId>) -> Expression {
    Expression::KeyValueList { entries }
}

pub fn annotation(name: impl Into<SmolStr>, members: Vec<AnnotationMember>) -> Expression {
    Expression::Annotation(Annotation {
        name: name.into(),
        members,
    })
}

pub fn unsupported(kind: impl Into<SmolStr>) -> Expression {
    Expression::Unsupported { kind: kind.into() }
}

pub fn dummy_expression(reason: impl Into<SmolStr>) -> Expression {
    Expression::Dummy(reason.into())
}
