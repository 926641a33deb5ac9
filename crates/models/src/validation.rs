use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Field name -> message for every field that failed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Record `message` against `field` when `value` is empty.
    /// Whitespace counts as content.
    pub fn require(&mut self, field: &str, value: &str, message: &str) {
        if value.is_empty() {
            self.insert(field, message);
        }
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Form-level validation of an input payload.
pub trait Validate {
    fn validate(&self) -> Result<(), FieldErrors>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_flags_only_empty_values() {
        let mut errors = FieldErrors::new();
        errors.require("name", "", "Name is required");
        errors.require("category", "   ", "Category is required");
        errors.require("fee", "KES 1", "Fee is required");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert!(!errors.contains("category"));
        assert!(!errors.contains("fee"));
    }

    #[test]
    fn into_result_ok_when_empty() {
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[test]
    fn display_joins_fields_in_order() {
        let mut errors = FieldErrors::new();
        errors.insert("name", "missing");
        errors.insert("category", "missing");
        assert_eq!(errors.to_string(), "category: missing; name: missing");
    }

    #[test]
    fn serializes_as_flat_object() {
        let mut errors = FieldErrors::new();
        errors.insert("fee", "Fee is required");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({"fee": "Fee is required"}));
    }
}
