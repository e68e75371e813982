//! Comment linker hook. The comment matcher itself is an external
//! collaborator; this module only emits its input: the filtered
//! comment token spans plus a way to invoke the matcher against the
//! translation-unit root.

use rustpython_parser::lexer::lex;
use rustpython_parser::{Mode, Tok};

use crate::base::Span;
use crate::cpg::DeclId;
use crate::translate::context::TranslationContext;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentToken {
    pub text: String,
    pub span: Span,
}

/// Lexes `source` and keeps only comment tokens, with 1-based inclusive
/// regions.
pub fn collect_comment_tokens(ctx: &TranslationContext, source: &str) -> Vec<CommentToken> {
    lex(source, Mode::Module)
        .filter_map(|result| result.ok())
        .filter_map(|(tok, range)| match tok {
            Tok::Comment(text) => Some(CommentToken {
                text,
                span: ctx.span(range),
            }),
            _ => None,
        })
        .collect()
}

/// Invokes `matcher` once per lexical comment with `(text, region,
/// tu_root)`. The matcher itself is supplied by the host analysis
/// driver.
pub fn emit_to_matcher(tokens: &[CommentToken], tu_root: DeclId, mut matcher: impl FnMut(&str, Span, DeclId)) {
    for token in tokens {
        matcher(&token.text, token.span, tu_root);
    }
}
