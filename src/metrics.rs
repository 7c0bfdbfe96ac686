use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Provides counters for:
// - Order creation and validation rejections (by reason)
// - Lazy status refresh writes
// - Administrative status overrides
// - Access guard denials
//
// All metrics are registered with Prometheus and can be scraped via /metrics
// ============================================================================

/// Central metrics registry for the entire application
pub struct Metrics {
    registry: Registry,

    pub orders_created: IntCounter,
    pub orders_rejected: IntCounterVec,
    pub status_refreshes: IntCounter,
    pub status_overrides: IntCounter,
    pub unauthorized_requests: IntCounter,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let orders_created = IntCounter::new(
            "orders_created_total",
            "Total orders accepted and persisted",
        )?;
        registry.register(Box::new(orders_created.clone()))?;

        let orders_rejected = IntCounterVec::new(
            Opts::new("orders_rejected_total", "Total orders rejected by validation"),
            &["reason"],
        )?;
        registry.register(Box::new(orders_rejected.clone()))?;

        let status_refreshes = IntCounter::new(
            "order_status_refreshes_total",
            "Total lazy status advancements persisted on read",
        )?;
        registry.register(Box::new(status_refreshes.clone()))?;

        let status_overrides = IntCounter::new(
            "order_status_overrides_total",
            "Total administrative status overwrites",
        )?;
        registry.register(Box::new(status_overrides.clone()))?;

        let unauthorized_requests = IntCounter::new(
            "unauthorized_requests_total",
            "Total requests denied by the access guard",
        )?;
        registry.register(Box::new(unauthorized_requests.clone()))?;

        Ok(Self {
            registry,
            orders_created,
            orders_rejected,
            status_refreshes,
            status_overrides,
            unauthorized_requests,
        })
    }

    /// Get the Prometheus registry for exposing metrics via HTTP
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_order_created(&self) {
        self.orders_created.inc();
    }

    pub fn record_order_rejected(&self, reason: &str) {
        self.orders_rejected.with_label_values(&[reason]).inc();
    }

    pub fn record_status_refresh(&self) {
        self.status_refreshes.inc();
    }

    pub fn record_status_override(&self) {
        self.status_overrides.inc();
    }

    pub fn record_unauthorized(&self) {
        self.unauthorized_requests.inc();
    }

    /// Render the registry in the Prometheus text exposition format.
    pub fn render(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
