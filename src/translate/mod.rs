//! The translator proper: one submodule per concern, all sharing the
//! same `TranslationContext`.

pub mod assign;
pub mod context;
pub mod expr;
pub mod functions;
pub mod imports;
pub mod stmt;

pub use context::TranslationContext;
pub use stmt::{translate_block, translate_stmt};
