// Private module declarations
mod dto;
mod error;
mod handlers;

use actix_web::web;

// ============================================================================
// HTTP Adapter - Route Wiring
// ============================================================================
//
// Shared between the real server in main.rs and the in-process test
// harness, so both exercise identical routing and extractor configuration.
//
// ============================================================================

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(error::json_config())
        .route("/api/menu", web::get().to(handlers::get_menu))
        .route("/api/orders", web::post().to(handlers::create_order))
        .route("/api/orders/{id}", web::get().to(handlers::get_order))
        .route("/api/admin/orders", web::get().to(handlers::list_orders))
        .route(
            "/api/admin/orders/{id}",
            web::patch().to(handlers::set_order_status),
        )
        .route("/api/admin/login", web::post().to(handlers::admin_login))
        .route("/health", web::get().to(handlers::health_handler))
        .route("/metrics", web::get().to(handlers::metrics_handler));
}
