//! Diagnostics — the non-fatal taxonomy.
//!
//! A diagnostic never aborts translation; it is recorded here *and*
//! logged through `tracing` at the matching level, recording the
//! calling function and source region for every message.

use crate::base::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    Warn,
    Error,
}

/// One diagnostic: origin function, region, message. No structured
/// error codes are required by the core.
///
/// `origin` is `&'static str` (always a literal at the call site), so
/// only `Serialize` is derived here — `Deserialize` cannot produce a
/// borrow of `'static` lifetime from arbitrary input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostic {
    pub severity: Severity,
    pub origin: &'static str,
    pub location: Location,
    pub message: String,
}

impl Diagnostic {
    pub fn unsupported(origin: &'static str, location: Location, message: impl Into<String>) -> Self {
        let message = message.into();
        match location.span() {
            Some(span) => tracing::warn!(origin, %span, %message, "unsupported construct"),
            None => tracing::warn!(origin, %message, "unsupported construct"),
        }
        Self {
            severity: Severity::Warn,
            origin,
            location,
            message,
        }
    }

    pub fn shape_mismatch(origin: &'static str, location: Location, message: impl Into<String>) -> Self {
        let message = message.into();
        match location.span() {
            Some(span) => tracing::error!(origin, %span, %message, "shape mismatch"),
            None => tracing::error!(origin, %message, "shape mismatch"),
        }
        Self {
            severity: Severity::Error,
            origin,
            location,
            message,
        }
    }
}

/// Collects diagnostics for one translation unit. Travels alongside the
/// sealed `TranslationUnit` so the host can decide how strict to be.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
    cap: Option<usize>,
}

impl DiagnosticSink {
    pub fn new(cap: Option<usize>) -> Self {
        Self {
            diagnostics: Vec::new(),
            cap,
        }
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        if let Some(cap) = self.cap {
            if self.diagnostics.len() >= cap {
                return;
            }
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn unsupported(&mut self, origin: &'static str, location: Location, message: impl Into<String>) {
        self.push(Diagnostic::unsupported(origin, location, message));
    }

    pub fn shape_mismatch(&mut self, origin: &'static str, location: Location, message: impl Into<String>) {
        self.push(Diagnostic::shape_mismatch(origin, location, message));
    }

    pub fn all(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
