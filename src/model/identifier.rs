use std::fmt;

use super::validation::ValidationError;

/// Normalized crane model identifier.
///
/// Names that differ only in letter case or in spaces versus underscores map
/// to the same identifier, and therefore to the same store:
/// `"Tower A"`, `"tower_a"` and `"TOWER A"` are all `tower_a`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelId(String);

impl ModelId {
    /// Normalizes a human-entered model name.
    ///
    /// Returns [`ValidationError::EmptyModelName`] for the empty string. A name
    /// of spaces is a real name: `"   "` and `"___"` are the same model.
    pub fn new(model_name: &str) -> Result<Self, ValidationError> {
        if model_name.is_empty() {
            return Err(ValidationError::EmptyModelName);
        }
        Ok(Self(normalize_model_name(model_name)))
    }

    /// Wraps an identifier recovered from a store file name.
    pub(crate) fn from_normalized(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ModelId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[mutants::skip]
impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lower-cases a model name and replaces spaces with underscores.
///
/// Path separators are replaced too, so the result is always a single file
/// name component.
pub fn normalize_model_name(model_name: &str) -> String {
    model_name
        .to_lowercase()
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            c => c,
        })
        .collect()
}
