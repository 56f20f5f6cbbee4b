//! Secret record type.
//!
//! The unit of synchronization: a parameter name plus its decrypted value
//! and optional store-side metadata.

use serde::Serialize;
use zeroize::Zeroize;

/// A fully loaded secret, ready for upload.
///
/// `value` never appears in serialized output; the JSON printer relies on
/// this to keep dry runs safe to share. Empty metadata fields are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Secret {
    /// Parameter name, always with a leading separator.
    pub name: String,
    /// Decrypted payload. Wiped from memory on drop.
    #[serde(skip_serializing)]
    pub value: String,
    /// Optional human-readable description for the store.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Optional validation regex, enforced by the store rather than locally.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pattern: String,
}

impl Drop for Secret {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_secret() -> Secret {
        Secret {
            name: "/blah/blah/hi".to_string(),
            value: "secret value".to_string(),
            description: "I am a description".to_string(),
            pattern: "^.*$".to_string(),
        }
    }

    #[test]
    fn test_serialized_form_never_contains_the_value() {
        let json = serde_json::to_string(&full_secret()).unwrap();

        assert!(!json.contains("secret value"));
        assert!(!json.contains("value"));
        assert!(json.contains("/blah/blah/hi"));
        assert!(json.contains("I am a description"));
        assert!(json.contains("^.*$"));
    }

    #[test]
    fn test_empty_metadata_is_omitted() {
        let secret = Secret {
            name: "hi".to_string(),
            value: "should be suppressed".to_string(),
            description: String::new(),
            pattern: String::new(),
        };

        assert_eq!(serde_json::to_string(&secret).unwrap(), r#"{"name":"hi"}"#);
    }

    #[test]
    fn test_display_is_the_name() {
        assert_eq!(format!("{}", full_secret()), "/blah/blah/hi");
    }
}
