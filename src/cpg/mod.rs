//! The CPG node model and builders, plus the arena that owns instances
//! of them.

pub mod builders;
pub mod graph;
pub mod ids;
pub mod node;

pub use graph::Graph;
pub use ids::{DeclId, ExprId, StmtId};
pub use node::*;
