use crate::store::StoreError;

// ============================================================================
// Order Business Rule Errors
// ============================================================================
//
// Validation failures carry enough detail to identify the offending field or
// line; messages double as the HTTP error bodies. `Store` is the
// infrastructure escape hatch, kept distinct so the adapter can map it to a
// 500-class response instead of a validation 400.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Missing required customer details: {field}")]
    InvalidCustomer { field: &'static str },

    #[error("Order must contain at least one item")]
    EmptyOrder,

    #[error("Invalid menu item: {0}")]
    UnknownItem(String),

    #[error("Quantity must be greater than zero for {item_id} (got {quantity})")]
    InvalidQuantity { item_id: String, quantity: i32 },

    #[error("Order not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl OrderError {
    /// Short stable label for the rejection metrics counter.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::InvalidCustomer { .. } => "invalid_customer",
            Self::EmptyOrder => "empty_order",
            Self::UnknownItem(_) => "unknown_item",
            Self::InvalidQuantity { .. } => "invalid_quantity",
            Self::NotFound => "not_found",
            Self::Store(_) => "store",
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
