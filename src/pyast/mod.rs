//! Adapter over the Python parser oracle. This module is the *only* place that talks to
//! `rustpython-parser`/`rustpython-ast`; everything downstream consumes
//! `rustpython_ast` types directly but never calls the parser itself.

mod oracle;

pub use oracle::{parse_module, OracleError};

/// Re-exported so `translate/` and `driver.rs` can match on AST node
/// kinds without depending on `rustpython-ast` directly.
pub use rustpython_ast as ast;
