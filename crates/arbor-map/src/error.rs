use thiserror::Error;

/// Key failures surfaced by the dynamically-keyed facade.
///
/// The generic typed maps cannot express these conditions; they exist
/// where keys arrive as runtime values ([`crate::json::JsonMap`]).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// A null key reached a comparison site.
    #[error("null key")]
    NullKey,

    /// A key whose runtime kind cannot be compared with the tree's keys.
    #[error("key type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}
