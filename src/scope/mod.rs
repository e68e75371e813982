//! The scope manager: hierarchical lexical scopes, declaration
//! registration, and name resolution with configurable policies.

mod manager;
mod resolver;
mod scope;

pub use manager::{ScopeManager, ScopeMismatch};
pub use resolver::Resolver;
pub use scope::{Scope, ScopeKind, ScopeOwner};
