use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// - Unset: field not provided => keep current value
// - Null: explicitly null => clear (nullable fields only)
// - Value(v): replace with v
//
// Pair every field with `#[serde(default, skip_serializing_if = "PatchField::is_unset")]`
// so omitted fields stay Unset and never reach the serializer.
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Resolves a nullable column: Unset keeps `current`, Null clears it.
    pub fn apply_nullable(self, current: Option<T>) -> Option<T> {
        match self {
            PatchField::Unset => current,
            PatchField::Null => None,
            PatchField::Value(v) => Some(v),
        }
    }

    /// Resolves a required column. Null is treated like Unset; callers reject it earlier.
    pub fn apply_required(self, current: T) -> T {
        match self {
            PatchField::Value(v) => v,
            PatchField::Unset | PatchField::Null => current,
        }
    }
}
