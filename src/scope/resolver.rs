//! A read-only view over the scope manager: a mutating `ScopeManager`
//! paired with a borrowing `Resolver<'a>`. Translators that only need
//! to look things up borrow a `Resolver` instead of the full
//! `&mut ScopeManager`.

use crate::cpg::{DeclId, Graph};
use crate::scope::manager::ScopeManager;

pub struct Resolver<'a> {
    manager: &'a ScopeManager,
    graph: &'a Graph,
}

impl<'a> Resolver<'a> {
    pub fn new(manager: &'a ScopeManager, graph: &'a Graph) -> Self {
        Self { manager, graph }
    }

    pub fn resolve(&self, name: &str) -> Option<DeclId> {
        self.manager.resolve(self.graph, name)
    }

    pub fn record_for_name(&self, name: &str) -> Option<DeclId> {
        self.manager.record_for_name(self.graph, name)
    }

    pub fn current_record(&self) -> Option<DeclId> {
        self.manager.current_record()
    }

    pub fn current_function(&self) -> Option<DeclId> {
        self.manager.current_function()
    }

    pub fn current_receiver(&self) -> Option<DeclId> {
        self.manager.current_receiver()
    }

    pub fn in_method_body(&self) -> bool {
        self.manager.in_method_body()
    }
}
