//! Domain error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable: callers report it to the user and carry on.
/// None of these leave the inventory partially mutated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. non-positive price, malformed number).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Registration rejected because a product with the same name already exists.
    #[error("product '{name}' is already registered (id: {existing_id})")]
    DuplicateName { name: String, existing_id: ProductId },

    /// Lookup by id or name matched nothing.
    #[error("product '{0}' not found")]
    NotFound(String),

    /// Outbound movement larger than the quantity on hand.
    #[error("cannot remove {requested} unit(s) of '{product}': only {available} in stock")]
    InsufficientStock {
        product: String,
        requested: u32,
        available: u32,
    },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound(identifier.into())
    }

    pub fn duplicate_name(name: impl Into<String>, existing_id: ProductId) -> Self {
        Self::DuplicateName {
            name: name.into(),
            existing_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_product() {
        let err = DomainError::duplicate_name("Widget", ProductId::new(3));
        assert_eq!(err.to_string(), "product 'Widget' is already registered (id: 3)");

        let err = DomainError::InsufficientStock {
            product: "Widget".to_string(),
            requested: 10,
            available: 4,
        };
        assert_eq!(
            err.to_string(),
            "cannot remove 10 unit(s) of 'Widget': only 4 in stock"
        );

        assert_eq!(DomainError::not_found("gadget").to_string(), "product 'gadget' not found");
    }
}
