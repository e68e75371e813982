//! The closed node-kind model: a tagged union per component instead of
//! a dynamic-dispatch class hierarchy.

use smol_str::SmolStr;

use crate::cpg::ids::{DeclId, ExprId, StmtId};
use crate::lexicon::PrimitiveType;

/// A type reference attached to a parameter, variable, or cast target.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeRef {
    Primitive(PrimitiveType),
    /// A named type, usually a record reachable by name.
    Named(SmolStr),
    Unknown,
}

/// A node that sits in statement position but was translated as an
/// expression (a bare call statement, `raise`, ...): a closed sum type
/// standing in for what other CPGs model via inheritance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatementLike {
    Stmt(StmtId),
    Expr(ExprId),
}

// --- Declarations -------------------------------------------------------

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variable {
    pub name: SmolStr,
    pub declared_type: Option<TypeRef>,
    pub initializer: Option<ExprId>,
    pub implicit: bool,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    pub name: SmolStr,
    pub declared_type: Option<TypeRef>,
    pub initializer: Option<ExprId>,
    pub record: DeclId,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    pub name: SmolStr,
    pub declared_type: TypeRef,
    pub variadic: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MethodModifier {
    Static,
    ClassMethod,
    Property,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Function {
    pub name: SmolStr,
    pub parameters: Vec<DeclId>,
    pub receiver: Option<DeclId>,
    pub body: StmtId,
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Method {
    pub function: Function,
    pub record: DeclId,
    pub modifiers: Vec<MethodModifier>,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constructor {
    pub method: Method,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    pub name: SmolStr,
    pub super_types: Vec<TypeRef>,
    pub fields: Vec<DeclId>,
    pub methods: Vec<DeclId>,
    pub statements: Vec<StatementLike>,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImportSymbol {
    pub name: SmolStr,
    pub alias: Option<SmolStr>,
}

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Import {
    pub module: Option<SmolStr>,
    pub alias: Option<SmolStr>,
    pub symbols: Vec<ImportSymbol>,
    pub wildcard: bool,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Namespace {
    pub name: SmolStr,
    pub declarations: Vec<DeclId>,
    pub statements: Vec<StatementLike>,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TranslationUnitDecl {
    pub file_name: SmolStr,
    pub namespace: DeclId,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Declaration {
    Variable(Variable),
    Field(Field),
    Parameter(Parameter),
    Function(Function),
    Method(Method),
    Constructor(Constructor),
    Record(Record),
    Import(Import),
    Namespace(Namespace),
    TranslationUnit(TranslationUnitDecl),
}

impl Declaration {
    /// The declared name, when this kind of declaration has one
    /// (everything except the translation unit itself).
    pub fn name(&self) -> Option<&str> {
        match self {
            Declaration::Variable(v) => Some(&v.name),
            Declaration::Field(f) => Some(&f.name),
            Declaration::Parameter(p) => Some(&p.name),
            Declaration::Function(f) => Some(&f.name),
            Declaration::Method(m) => Some(&m.function.name),
            Declaration::Constructor(c) => Some(&c.method.function.name),
            Declaration::Record(r) => Some(&r.name),
            Declaration::Import(i) => i.alias.as_deref().or(i.module.as_deref()),
            Declaration::Namespace(n) => Some(&n.name),
            Declaration::TranslationUnit(_) => None,
        }
    }
}

// --- Statements -----------------------------------------------------------

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExceptHandler {
    pub exception_type: Option<SmolStr>,
    pub bound_name: Option<SmolStr>,
    pub body: StmtId,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Statement {
    Compound(Vec<StatementLike>),
    /// Wraps one declaration so it can appear inside a statement
    /// sequence.
    DeclarationStmt(DeclId),
    /// `pass`.
    Empty,
    Return(Option<ExprId>),
    Break,
    If {
        condition: ExprId,
        then_branch: StmtId,
        else_branch: Option<StmtId>,
    },
    While {
        condition: ExprId,
        body: StmtId,
    },
    ForEach {
        variable: StatementLike,
        iterable: ExprId,
        body: StmtId,
    },
    Try {
        body: StmtId,
        handlers: Vec<ExceptHandler>,
        finally: Option<StmtId>,
    },
    /// `global`/`nonlocal`: recorded structurally, resolution behavior
    /// is unchanged.
    GlobalDecl {
        names: Vec<SmolStr>,
        nonlocal: bool,
    },
    /// A shape the translator asserts cannot occur.
    Dummy(SmolStr),
}

// --- Expressions ----------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CallKind {
    Plain,
    Member,
    Construct,
    Cast,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Argument {
    pub name: Option<SmolStr>,
    pub value: ExprId,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Call {
    pub kind: CallKind,
    pub callee: ExprId,
    pub arguments: Vec<Argument>,
    /// Set when `kind == Construct`: the record the callee resolved to.
    pub resolved_record: Option<DeclId>,
    /// Set when `kind == Cast`: the primitive type name being cast to.
    pub cast_type: Option<SmolStr>,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnotationMember {
    pub name: SmolStr,
    pub value: ExprId,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Annotation {
    pub name: SmolStr,
    pub members: Vec<AnnotationMember>,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expression {
    Literal {
        value: SmolStr,
        primitive_type: PrimitiveType,
    },
    Reference {
        name: SmolStr,
        refers_to: Option<DeclId>,
    },
    Member {
        base: ExprId,
        attribute: SmolStr,
        operator: SmolStr,
    },
    Subscript {
        base: ExprId,
        subscript: ExprId,
    },
    Range {
        lower: Option<ExprId>,
        upper: Option<ExprId>,
        step: Option<ExprId>,
    },
    Call(Call),
    Binary {
        operator: SmolStr,
        lhs: ExprId,
        rhs: ExprId,
    },
    Unary {
        operator: SmolStr,
        /// `None` for a bare `raise` with no operand.
        operand: Option<ExprId>,
    },
    Conditional {
        test: ExprId,
        then_expr: ExprId,
        else_expr: ExprId,
    },
    InitializerList {
        elements: Vec<ExprId>,
    },
    KeyValue {
        key: ExprId,
        value: ExprId,
    },
    KeyValueList {
        entries: Vec<ExprId>,
    },
    Annotation(Annotation),
    /// A recognized-but-deliberately-unmapped construct.
    Unsupported {
        kind: SmolStr,
    },
    /// A shape the translator asserts cannot occur.
    Dummy(SmolStr),
}
