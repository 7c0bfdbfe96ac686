use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::metrics::Metrics;
use crate::store::DocumentStore;

use super::errors::OrderError;
use super::status::status_for;
use super::value_objects::{Customer, Order, OrderLine, OrderLineInput, OrderStatus};

// ============================================================================
// Order Ledger - Authoritative Collection of Placed Orders
// ============================================================================
//
// Orchestrates: validation -> snapshot -> persist, and the lazy status
// refresh on every read.
//
// Responsibilities:
// 1. Create orders against catalog validation, in a deterministic order:
//    customer fields, then emptiness, then per-line id before quantity
// 2. Snapshot line name/price at creation time
// 3. Recompute status from age on read and persist the advance (best effort)
// 4. Apply administrative status overrides verbatim
//
// Each operation is its own read/validate/write unit against the shared
// store; concurrent writes to the same order are last-write-wins. That is an
// accepted weak-consistency tradeoff for this coarse, forward-moving field.
//
// ============================================================================

pub struct OrderLedger {
    store: Arc<dyn DocumentStore>,
    metrics: Arc<Metrics>,
}

impl OrderLedger {
    pub fn new(store: Arc<dyn DocumentStore>, metrics: Arc<Metrics>) -> Self {
        Self { store, metrics }
    }

    /// Validate, snapshot, and persist a new order. Either every check
    /// passes and the order is written once, or nothing is persisted.
    pub async fn create_order(
        &self,
        lines: &[OrderLineInput],
        customer: &Customer,
    ) -> Result<Order, OrderError> {
        let result = self.validate_and_persist(lines, customer).await;

        match &result {
            Ok(order) => {
                self.metrics.record_order_created();
                tracing::info!(
                    order_id = %order.id,
                    item_count = order.items.len(),
                    total = order.total(),
                    "✅ Created order"
                );
            }
            Err(OrderError::Store(err)) => {
                tracing::warn!(error = %err, "Order creation failed against backing store");
            }
            Err(err) => {
                self.metrics.record_order_rejected(err.reason());
                tracing::debug!(reason = err.reason(), error = %err, "Rejected order");
            }
        }

        result
    }

    /// Look up one order, refreshing its status from the clock.
    pub async fn get_order(&self, id: &str) -> Result<Order, OrderError> {
        let order = self
            .store
            .get_order(id)
            .await?
            .ok_or(OrderError::NotFound)?;
        Ok(self.refresh_status(order).await)
    }

    /// All orders in insertion order, each with a refreshed status.
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        let orders = self.store.list_orders().await?;
        let mut refreshed = Vec::with_capacity(orders.len());
        for order in orders {
            refreshed.push(self.refresh_status(order).await);
        }
        Ok(refreshed)
    }

    /// Administrative override. An authoritative overwrite, not a transition
    /// request: the new status may move backwards relative to the current
    /// one. Absent ids report `NotFound` instead of creating a record.
    pub async fn set_status(&self, id: &str, status: OrderStatus) -> Result<Order, OrderError> {
        let mut order = self
            .store
            .get_order(id)
            .await?
            .ok_or(OrderError::NotFound)?;

        order.status = status;
        self.store.put_order(&order).await?;

        self.metrics.record_status_override();
        tracing::info!(order_id = %order.id, status = %status, "Order status overridden");
        Ok(order)
    }

    /// Clears every order. Test/bench isolation only; never routed to
    /// normal clients.
    #[allow(dead_code)]
    pub async fn reset(&self) -> Result<(), OrderError> {
        self.store.clear_orders().await?;
        tracing::info!("Cleared all orders");
        Ok(())
    }

    async fn validate_and_persist(
        &self,
        lines: &[OrderLineInput],
        customer: &Customer,
    ) -> Result<Order, OrderError> {
        validate_customer(customer)?;

        if lines.is_empty() {
            return Err(OrderError::EmptyOrder);
        }

        let mut items = Vec::with_capacity(lines.len());
        for line in lines {
            // Unknown id is reported before a bad quantity on the same line.
            let menu_item = self
                .store
                .get_menu_item(&line.item_id)
                .await?
                .ok_or_else(|| OrderError::UnknownItem(line.item_id.clone()))?;

            if line.quantity <= 0 {
                return Err(OrderError::InvalidQuantity {
                    item_id: line.item_id.clone(),
                    quantity: line.quantity,
                });
            }

            items.push(OrderLine {
                item_id: line.item_id.clone(),
                name: menu_item.name,
                price: menu_item.price,
                quantity: line.quantity,
            });
        }

        let order = Order {
            id: next_order_id(),
            items,
            customer: customer.clone(),
            status: OrderStatus::OrderReceived,
            created_at: Utc::now(),
        };

        self.store.put_order(&order).await?;
        Ok(order)
    }

    /// Lazy advancement: recompute the status from the order's age and
    /// persist it when it moved. The write is best effort; a failure is
    /// logged and the refreshed order is still returned, never a read error.
    async fn refresh_status(&self, mut order: Order) -> Order {
        let computed = status_for(&order, Utc::now());
        if computed != order.status {
            order.status = computed;
            match self.store.put_order(&order).await {
                Ok(()) => {
                    self.metrics.record_status_refresh();
                    tracing::debug!(
                        order_id = %order.id,
                        status = %computed,
                        "Advanced order status on read"
                    );
                }
                Err(err) => {
                    tracing::warn!(
                        order_id = %order.id,
                        error = %err,
                        "Failed to persist refreshed status"
                    );
                }
            }
        }
        order
    }
}

fn validate_customer(customer: &Customer) -> Result<(), OrderError> {
    if customer.name.trim().is_empty() {
        return Err(OrderError::InvalidCustomer { field: "name" });
    }
    if customer.address.trim().is_empty() {
        return Err(OrderError::InvalidCustomer { field: "address" });
    }
    if customer.phone.trim().is_empty() {
        return Err(OrderError::InvalidCustomer { field: "phone" });
    }
    Ok(())
}

/// Time-derived prefix plus random suffix: ids sort roughly by creation
/// time while staying unguessable and collision-resistant.
fn next_order_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix = Uuid::new_v4().simple().to_string();
    format!("ord_{}_{}", millis, &suffix[..6])
}

// ============================================================================
// Unit Tests
// ============================================================================
