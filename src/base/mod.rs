//! Foundation types shared by every other module: source positions,
//! spans, and the snippet extractor.

mod span;

pub use span::{Location, Position, SourceMap, Span};
