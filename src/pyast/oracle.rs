//! The oracle call itself: source text + file name → a concrete AST.
//! The Python tokenizer/parser is treated as an external collaborator;
//! this function is the one call site.

use rustpython_ast::Mod;
use rustpython_parser::{parse, Mode};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{0}")]
pub struct OracleError(String);

/// Parses `source` (from `file_name`, used only for error messages) in
/// module mode, yielding the root `Mod::Module` node.
pub fn parse_module(source: &str, file_name: &str) -> Result<Mod, OracleError> {
    parse(source, Mode::Module, file_name).map_err(|err| OracleError(err.to_string()))
}
