//! One entry in the scope stack.

use crate::cpg::DeclId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Global,
    Namespace,
    Function,
    Method,
    Constructor,
    Record,
    Block,
}

/// Identifies what was pushed, so `leave` can detect an imbalance if
/// top-of-stack doesn't match the argument. `Block` carries a
/// synthetic counter since if/while/for bodies have no owning
/// declaration of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeOwner {
    Global,
    Namespace(DeclId),
    Function(DeclId),
    Method(DeclId),
    Constructor(DeclId),
    Record(DeclId),
    Block(u32),
}

impl ScopeOwner {
    pub fn kind(self) -> ScopeKind {
        match self {
            ScopeOwner::Global => ScopeKind::Global,
            ScopeOwner::Namespace(_) => ScopeKind::Namespace,
            ScopeOwner::Function(_) => ScopeKind::Function,
            ScopeOwner::Method(_) => ScopeKind::Method,
            ScopeOwner::Constructor(_) => ScopeKind::Constructor,
            ScopeOwner::Record(_) => ScopeKind::Record,
            ScopeOwner::Block(_) => ScopeKind::Block,
        }
    }
}

impl std::fmt::Display for ScopeOwner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScopeOwner::Global => write!(f, "global"),
            ScopeOwner::Namespace(id) => write!(f, "namespace({id})"),
            ScopeOwner::Function(id) => write!(f, "function({id})"),
            ScopeOwner::Method(id) => write!(f, "method({id})"),
            ScopeOwner::Constructor(id) => write!(f, "constructor({id})"),
            ScopeOwner::Record(id) => write!(f, "record({id})"),
            ScopeOwner::Block(n) => write!(f, "block({n})"),
        }
    }
}

/// One entry in the nested scope stack. Declarations outlive the scope
/// that owned them — they're re-parented to the enclosing declaration —
/// so the scope itself only holds ids, never owns nodes.
#[derive(Debug, Clone)]
pub struct Scope {
    pub owner: ScopeOwner,
    pub declarations: Vec<DeclId>,
    /// Set for `Method`/`Constructor` scopes: the receiver's declaration,
    /// exposed as a queryable attribute of the scope.
    pub receiver: Option<DeclId>,
}

impl Scope {
    pub fn new(owner: ScopeOwner) -> Self {
        Self {
            owner,
            declarations: Vec::new(),
            receiver: None,
        }
    }

    pub fn kind(&self) -> ScopeKind {
        self.owner.kind()
    }
}
