//! The scope manager: a per-translation mutable stack, passed
//! explicitly through the translation state rather than reached
//! through ambient context.

use thiserror::Error;

use crate::cpg::{DeclId, Declaration, Graph};
use crate::scope::scope::{Scope, ScopeKind, ScopeOwner};

#[derive(Debug, Error)]
#[error("scope imbalance: expected to leave {expected}, found {found}")]
pub struct ScopeMismatch {
    pub expected: ScopeOwner,
    pub found: String,
}

#[derive(Debug, Default)]
pub struct ScopeManager {
    scopes: Vec<Scope>,
    next_block_id: u32,
}

impl ScopeManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets state at the start of a new file. Leaves exactly the
    /// global sentinel on the stack.
    pub fn reset_to_global(&mut self) {
        self.scopes.clear();
        self.next_block_id = 0;
        self.scopes.push(Scope::new(ScopeOwner::Global));
    }

    pub fn enter(&mut self, owner: ScopeOwner) {
        tracing::trace!(owner = %owner, "enter scope");
        self.scopes.push(Scope::new(owner));
    }

    /// Allocates a fresh synthetic owner for an anonymous block scope
    /// (if/while/for bodies) and enters it.
    pub fn enter_block(&mut self) -> ScopeOwner {
        let owner = ScopeOwner::Block(self.next_block_id);
        self.next_block_id += 1;
        self.enter(owner);
        owner
    }

    pub fn leave(&mut self, owner: ScopeOwner) -> Result<Scope, ScopeMismatch> {
        let top = self.scopes.last().map(|s| s.owner);
        if top != Some(owner) {
            let found = top.map(|o| o.to_string()).unwrap_or_else(|| "<empty stack>".to_string());
            return Err(ScopeMismatch { expected: owner, found });
        }
        tracing::trace!(owner = %owner, "leave scope");
        Ok(self.scopes.pop().expect("checked non-empty above"))
    }

    pub fn is_balanced(&self) -> bool {
        self.scopes.len() == 1 && self.scopes[0].kind() == ScopeKind::Global
    }

    pub fn current(&self) -> &Scope {
        self.scopes.last().expect("scope stack is never empty after reset")
    }

    fn current_mut(&mut self) -> &mut Scope {
        self.scopes.last_mut().expect("scope stack is never empty after reset")
    }

    /// Registers `decl_id` in the current scope. Duplicate names are
    /// accepted in general (Python rebinds); a duplicate **field**
    /// declaration in a record scope is deduplicated by name.
    pub fn add_declaration(&mut self, graph: &Graph, decl_id: DeclId) {
        let is_field = matches!(graph.declaration(decl_id), Declaration::Field(_));
        let name = graph.declaration(decl_id).name().map(str::to_owned);

        if is_field {
            if let Some(name) = &name {
                let scope = self.current_mut();
                if let Some(existing) = scope
                    .declarations
                    .iter()
                    .position(|id| graph.declaration(*id).name() == Some(name.as_str()))
                {
                    scope.declarations[existing] = decl_id;
                    return;
                }
            }
        }

        tracing::trace!(name = name.as_deref().unwrap_or("<anon>"), "add declaration");
        self.current_mut().declarations.push(decl_id);
    }

    pub fn set_receiver(&mut self, decl_id: DeclId) {
        self.current_mut().receiver = Some(decl_id);
    }

    /// Lexical search outward from the current scope. Within one
    /// scope, the most recently added declaration with a
    /// matching name wins, matching Python's rebind-in-place semantics.
    pub fn resolve(&self, graph: &Graph, name: &str) -> Option<DeclId> {
        for scope in self.scopes.iter().rev() {
            if let Some(id) = scope
                .declarations
                .iter()
                .rev()
                .find(|id| graph.declaration(**id).name() == Some(name))
            {
                return Some(*id);
            }
        }
        None
    }

    /// Nearest enclosing Record scope, regardless of intervening Method
    /// scopes — a method body is still "inside" its record.
    pub fn current_record(&self) -> Option<DeclId> {
        self.scopes.iter().rev().find_map(|scope| match scope.owner {
            ScopeOwner::Record(id) => Some(id),
            _ => None,
        })
    }

    /// Nearest enclosing Function/Method/Constructor scope.
    pub fn current_function(&self) -> Option<DeclId> {
        self.scopes.iter().rev().find_map(|scope| match scope.owner {
            ScopeOwner::Function(id) | ScopeOwner::Method(id) | ScopeOwner::Constructor(id) => Some(id),
            _ => None,
        })
    }

    /// True when the nearest enclosing function-like scope is a Method
    /// or Constructor, i.e. translation is inside a method body.
    pub fn in_method_body(&self) -> bool {
        self.scopes.iter().rev().find_map(|scope| match scope.owner {
            ScopeOwner::Method(_) | ScopeOwner::Constructor(_) => Some(true),
            ScopeOwner::Function(_) => Some(false),
            _ => None,
        }).unwrap_or(false)
    }

    /// The receiver declaration of the nearest enclosing Method/Constructor
    /// scope, used to recognize the implicit receiver by name.
    pub fn current_receiver(&self) -> Option<DeclId> {
        self.scopes.iter().rev().find_map(|scope| match scope.owner {
            ScopeOwner::Method(_) | ScopeOwner::Constructor(_) => scope.receiver,
            _ => None,
        })
    }

    /// Looks up a record declaration reachable from the current scope;
    /// enables call-kind discrimination.
    pub fn record_for_name(&self, graph: &Graph, name: &str) -> Option<DeclId> {
        let id = self.resolve(graph, name)?;
        match graph.declaration(id) {
            Declaration::Record(_) => Some(id),
            _ => None,
        }
    }
}
