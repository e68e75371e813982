//! The bundle of mutable state threaded through every translator
//! function: scope stack, graph, source map, diagnostics, and config,
//! carried explicitly through function arguments rather than read off
//! ambient globals.

use text_size::TextRange;

use crate::base::{Location, SourceMap, Span};
use crate::config::TranslationConfig;
use crate::cpg::Graph;
use crate::diagnostics::DiagnosticSink;
use crate::scope::{Resolver, ScopeManager};

pub struct TranslationContext<'cfg> {
    pub graph: Graph,
    pub scopes: ScopeManager,
    pub source_map: SourceMap,
    pub diagnostics: DiagnosticSink,
    pub config: &'cfg TranslationConfig,
}

impl<'cfg> TranslationContext<'cfg> {
    pub fn new(source_map: SourceMap, config: &'cfg TranslationConfig) -> Self {
        Self {
            graph: Graph::new(),
            scopes: ScopeManager::new(),
            source_map,
            diagnostics: DiagnosticSink::new(config.max_diagnostics),
            config,
        }
    }

    /// Attaches a location to a freshly built node; builders never do
    /// this themselves.
    pub fn location(&self, range: TextRange) -> Location {
        Location::Physical(self.span(range))
    }

    pub fn span(&self, range: TextRange) -> Span {
        self.source_map.span_for_range(range)
    }

    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.scopes, &self.graph)
    }
}
