use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Order Value Objects
// ============================================================================
//
// Wire format note: orders serialize with camelCase field names and statuses
// as SCREAMING_SNAKE_CASE strings; both are part of the storefront contract
// and of the persisted document shape.
//
// ============================================================================

/// Lifecycle stage of an order. A strictly forward-moving chain with no
/// terminal state beyond delivery dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    OrderReceived,
    Preparing,
    OutForDelivery,
}

impl OrderStatus {
    /// The stage that follows this one; `OutForDelivery` is absorbing.
    #[allow(dead_code)]
    pub fn next(self) -> Self {
        match self {
            Self::OrderReceived => Self::Preparing,
            Self::Preparing => Self::OutForDelivery,
            Self::OutForDelivery => Self::OutForDelivery,
        }
    }

    /// Parse a wire-format status name. `None` for anything unrecognized.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "ORDER_RECEIVED" => Some(Self::OrderReceived),
            "PREPARING" => Some(Self::Preparing),
            "OUT_FOR_DELIVERY" => Some(Self::OutForDelivery),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OrderReceived => "ORDER_RECEIVED",
            Self::Preparing => "PREPARING",
            Self::OutForDelivery => "OUT_FOR_DELIVERY",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of an order. Name and price are snapshots of the catalog at
/// creation time, deliberately decoupled from later catalog edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub item_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
}

/// An incoming line as submitted by the storefront, before catalog
/// validation resolves it into an `OrderLine`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineInput {
    pub item_id: String,
    pub quantity: i32,
}

/// Delivery contact details. All three fields must be non-blank after
/// trimming whitespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub address: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub items: Vec<OrderLine>,
    pub customer: Customer,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Order total derived from the snapshotted lines.
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|line| line.price * f64::from(line.quantity))
            .sum()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
