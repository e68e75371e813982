//! `pycpg`: a Python AST → code-property-graph (CPG) frontend.
//!
//! Translates one Python source file at a time into a scope-resolved,
//! language-neutral graph suitable for later data-flow and security
//! analyses. The Python tokenizer/parser itself is treated as an
//! external oracle (`rustpython-parser`); this crate owns everything
//! downstream of the AST: node-kind model, scope/symbol resolution,
//! the expression/statement/function/class/assignment/import
//! translators, the comment-linker hook, and the translation-unit
//! driver.

pub mod base;
pub mod comments;
pub mod config;
pub mod cpg;
pub mod diagnostics;
pub mod driver;
pub mod error;
pub mod lexicon;
pub mod pyast;
pub mod scope;
pub mod translate;

pub use config::{ImplicitDeclarationPolicy, TranslationConfig};
pub use driver::{namespace_name_for_file, parse_file, TranslationUnit};
pub use error::{TranslationError, TranslationFailed, TranslationResult};
