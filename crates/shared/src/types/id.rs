//! Typed document IDs.
//!
//! The document store assigns opaque string keys. Wrapping them keeps a
//! `ReportId` from being passed where an `ExpenseId` is expected.

use serde::{Deserialize, Serialize};

/// Macro to generate typed ID wrappers around store document keys.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Creates an ID from a document key.
            #[must_use]
            pub fn new(key: impl Into<String>) -> Self {
                Self(key.into())
            }

            /// Returns the document key.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(key: &str) -> Self {
                Self(key.to_string())
            }
        }
    };
}

typed_id!(ReportId, "Document key of a daily earnings report.");
typed_id!(ExpenseId, "Document key of a salon expense.");
typed_id!(StaffId, "Document key of a staff member.");
typed_id!(AppointmentId, "Document key of an appointment.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_is_raw_key() {
        let id = ReportId::new("f3Kx9");
        assert_eq!(id.to_string(), "f3Kx9");
        assert_eq!(id.as_str(), "f3Kx9");
    }

    #[test]
    fn test_id_serializes_transparently() {
        let id = ExpenseId::from("exp-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"exp-1\"");
        let back: ExpenseId = serde_json::from_str("\"exp-1\"").unwrap();
        assert_eq!(back, id);
    }
}
