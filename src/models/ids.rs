//! Strongly-typed ID wrappers for catalog entities
//!
//! Newtype wrappers around UUIDs keep product and sale identifiers from
//! being mixed up at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }
    };
}

define_id!(ProductId, "prd-");
define_id!(SaleId, "sal-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_distinct() {
        assert_ne!(ProductId::new(), ProductId::new());
    }

    #[test]
    fn test_id_display() {
        let id = SaleId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("sal-"));
        assert_eq!(display.len(), 12); // "sal-" + 8 chars
    }

    #[test]
    fn test_id_serialization() {
        let id = SaleId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: SaleId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
