use chrono::{DateTime, Utc};

use super::value_objects::{Order, OrderStatus};

// ============================================================================
// Status Clock - Age-Based Lifecycle Stage
// ============================================================================
//
// Simulated kitchen/delivery timeline standing in for a real fulfillment
// integration. Deterministic and side-effect free; callers decide whether
// and when to persist the result (the Ledger does so lazily on read).
//
// ============================================================================

/// Age in seconds at which an order leaves ORDER_RECEIVED.
pub const PREPARING_AFTER_SECS: i64 = 20;

/// Age in seconds at which an order leaves PREPARING.
pub const OUT_FOR_DELIVERY_AFTER_SECS: i64 = 60;

/// Map an order's age at `now` to its lifecycle stage.
pub fn status_for(order: &Order, now: DateTime<Utc>) -> OrderStatus {
    // A clock skew can put created_at in the future; treat that as age zero.
    let age_secs = (now - order.created_at).num_seconds().max(0);

    if age_secs < PREPARING_AFTER_SECS {
        OrderStatus::OrderReceived
    } else if age_secs < OUT_FOR_DELIVERY_AFTER_SECS {
        OrderStatus::Preparing
    } else {
        OrderStatus::OutForDelivery
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
