//! Translation policies. All defaults reproduce the fixed behavior of
//! the reference translator with no surprises.

/// Whether an unresolved top-level imported name is registered as an
/// `unknown`-typed global `Variable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImplicitDeclarationPolicy {
    /// Always register the placeholder global (the default behavior).
    #[default]
    Always,
    /// Never register it; references to such names simply stay
    /// unresolved.
    Never,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationConfig {
    pub implicit_declaration_policy: ImplicitDeclarationPolicy,
    pub receiver_name_hint: Option<String>,
    pub constructor_name: String,
    pub max_diagnostics: Option<usize>,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            implicit_declaration_policy: ImplicitDeclarationPolicy::default(),
            receiver_name_hint: None,
            constructor_name: "__init__".to_string(),
            max_diagnostics: None,
        }
    }
}

impl TranslationConfig {
    pub fn is_constructor_name(&self, name: &str) -> bool {
        self.constructor_name == name
    }
}
