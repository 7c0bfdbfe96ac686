use serde::{Deserialize, Serialize};

use crate::domain::menu::MenuItem;
use crate::domain::order::{Customer, OrderLineInput};

// ============================================================================
// HTTP Request/Response Shapes
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    /// Kept as a raw string so junk values clamp to page 1 instead of
    /// failing extraction.
    pub page: Option<String>,
    pub search: Option<String>,
}

impl MenuQuery {
    /// 1-indexed page; non-numeric or sub-1 values clamp to 1.
    pub fn page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(1)
            .max(1)
    }

    /// A present, non-blank search term; blank means a plain listing.
    pub fn search(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
}

#[derive(Debug, Serialize)]
pub struct MenuResponse {
    pub items: Vec<MenuItem>,
    pub pagination: Pagination,
}

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    /// Missing items deserialize as an empty list so the ledger reports
    /// `EmptyOrder` rather than the extractor rejecting the body.
    #[serde(default)]
    pub items: Vec<OrderLineInput>,
    pub customer: Customer,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
}

// ============================================================================
// Unit Tests
// ============================================================================
