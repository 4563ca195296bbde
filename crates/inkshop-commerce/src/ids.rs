//! Newtype IDs for type-safe identifiers.
//!
//! Product ids come straight from page markup and are opaque: the cart
//! only ever compares them for equality.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// An opaque identifier.
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("sleeve-01");
        assert_eq!(id.as_str(), "sleeve-01");
    }

    #[test]
    fn test_id_from_string() {
        let id: ProductId = "flash-7".into();
        assert_eq!(id.as_str(), "flash-7");
    }

    #[test]
    fn test_id_display() {
        let id = ProductId::new("aftercare");
        assert_eq!(format!("{}", id), "aftercare");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ProductId::new("a");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"a\"");
        let back: ProductId = serde_json::from_str("\"a\"").unwrap();
        assert_eq!(back, id);
    }
}
