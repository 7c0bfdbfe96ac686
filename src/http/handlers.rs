use actix_web::{web, HttpRequest, HttpResponse};

use crate::domain::menu::Catalog;
use crate::domain::order::OrderStatus;
use crate::state::AppState;

use super::dto::{
    CreateOrderRequest, LoginRequest, LoginResponse, MenuQuery, MenuResponse, Pagination,
    UpdateStatusRequest,
};
use super::error::ApiError;

// ============================================================================
// HTTP Handlers
// ============================================================================
//
// Thin adapter: translate requests into store operations and serialize the
// results. No business rules live here; validation and status logic belong
// to the Catalog and the Ledger.
//
// ============================================================================

/// Header carrying the admin shared secret.
const ADMIN_SECRET_HEADER: &str = "x-admin-secret";

pub async fn get_menu(
    state: web::Data<AppState>,
    query: web::Query<MenuQuery>,
) -> Result<HttpResponse, ApiError> {
    let page = query.page();
    let page_size = state.menu_page_size;

    let (items, total) = match query.search() {
        Some(term) => (
            state.catalog.search_items(term, page, page_size).await?,
            state.catalog.search_count(term).await?,
        ),
        None => (
            state.catalog.list_items(page, page_size).await?,
            state.catalog.count().await?,
        ),
    };

    Ok(HttpResponse::Ok().json(MenuResponse {
        items,
        pagination: Pagination {
            page,
            page_size,
            total,
            total_pages: Catalog::page_count(total, page_size),
        },
    }))
}

pub async fn create_order(
    state: web::Data<AppState>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, ApiError> {
    let order = state
        .ledger
        .create_order(&body.items, &body.customer)
        .await?;
    Ok(HttpResponse::Created().json(order))
}

pub async fn get_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let order = state.ledger.get_order(&id).await?;
    Ok(HttpResponse::Ok().json(order))
}

pub async fn list_orders(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    authorize_admin(&state, &req)?;
    let orders = state.ledger.list_orders().await?;
    Ok(HttpResponse::Ok().json(orders))
}

pub async fn set_order_status(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<UpdateStatusRequest>,
) -> Result<HttpResponse, ApiError> {
    authorize_admin(&state, &req)?;

    let status = body
        .status
        .as_deref()
        .and_then(OrderStatus::parse)
        .ok_or(ApiError::InvalidStatus)?;

    let id = path.into_inner();
    let order = state.ledger.set_status(&id, status).await?;
    Ok(HttpResponse::Ok().json(order))
}

/// Liveness check for the shared secret, not a session issuer.
pub async fn admin_login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let password = body.password.as_deref().ok_or(ApiError::MissingPassword)?;

    if state.guard.authorize(Some(password)).is_err() {
        state.metrics.record_unauthorized();
        return Err(ApiError::InvalidPassword);
    }

    Ok(HttpResponse::Ok().json(LoginResponse { success: true }))
}

pub async fn health_handler() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "food-orders"
    }))
}

pub async fn metrics_handler(state: web::Data<AppState>) -> HttpResponse {
    match state.metrics.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/plain; version=0.0.4")
            .body(body),
        Err(err) => {
            tracing::error!(error = %err, "Failed to encode metrics");
            HttpResponse::InternalServerError().finish()
        }
    }
}

fn authorize_admin(state: &AppState, req: &HttpRequest) -> Result<(), ApiError> {
    let provided = req
        .headers()
        .get(ADMIN_SECRET_HEADER)
        .and_then(|value| value.to_str().ok());

    state.guard.authorize(provided).map_err(|_| {
        state.metrics.record_unauthorized();
        tracing::warn!(path = %req.path(), "Rejected administrative request");
        ApiError::Unauthorized
    })
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use redis::RedisError;
    use serde_json::{json, Value};

    use crate::auth::{AccessGuard, AuthMode};
    use crate::domain::menu::{Catalog, MenuItem};
    use crate::domain::order::{Order, OrderLedger};
    use crate::metrics::Metrics;
    use crate::state::AppState;
    use crate::store::{DocumentStore, MemoryStore, StoreError};

    async fn test_state(mode: AuthMode) -> actix_web::web::Data<AppState> {
        let store = Arc::new(MemoryStore::new());
        let catalog = Catalog::new(store.clone());
        catalog.ensure_seeded().await.unwrap();

        let metrics = Arc::new(Metrics::new().unwrap());
        let ledger = OrderLedger::new(store, metrics.clone());

        actix_web::web::Data::new(AppState {
            catalog,
            ledger,
            guard: AccessGuard::new(mode),
            metrics,
            menu_page_size: 12,
        })
    }

    fn order_body() -> Value {
        json!({
            "items": [{"itemId": "margherita-pizza", "quantity": 2}],
            "customer": {"name": "Alice", "address": "123 Main St", "phone": "1234567890"}
        })
    }

    fn outage() -> StoreError {
        StoreError::Backend(RedisError::from((
            redis::ErrorKind::IoError,
            "simulated outage",
        )))
    }

    /// Every operation fails, standing in for an unreachable backend.
    struct UnavailableStore;

    #[async_trait]
    impl DocumentStore for UnavailableStore {
        async fn get_menu_item(&self, _id: &str) -> Result<Option<MenuItem>, StoreError> {
            Err(outage())
        }

        async fn list_menu_items(&self) -> Result<Vec<MenuItem>, StoreError> {
            Err(outage())
        }

        async fn count_menu_items(&self) -> Result<usize, StoreError> {
            Err(outage())
        }

        async fn put_menu_item(&self, _item: &MenuItem) -> Result<(), StoreError> {
            Err(outage())
        }

        async fn get_order(&self, _id: &str) -> Result<Option<Order>, StoreError> {
            Err(outage())
        }

        async fn list_orders(&self) -> Result<Vec<Order>, StoreError> {
            Err(outage())
        }

        async fn put_order(&self, _order: &Order) -> Result<(), StoreError> {
            Err(outage())
        }

        async fn clear_orders(&self) -> Result<(), StoreError> {
            Err(outage())
        }
    }

    #[actix_web::test]
    async fn test_menu_lists_seeded_items_with_pagination() {
        let state = test_state(AuthMode::Open).await;
        let app =
            test::init_service(App::new().app_data(state).configure(super::super::configure))
                .await;

        let req = test::TestRequest::get().uri("/api/menu").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["items"].as_array().unwrap().len(), 3);
        assert_eq!(body["items"][0]["id"], "margherita-pizza");
        assert_eq!(body["pagination"]["page"], 1);
        assert_eq!(body["pagination"]["pageSize"], 12);
        assert_eq!(body["pagination"]["total"], 3);
        assert_eq!(body["pagination"]["totalPages"], 1);
    }

    #[actix_web::test]
    async fn test_menu_search_filters_items() {
        let state = test_state(AuthMode::Open).await;
        let app =
            test::init_service(App::new().app_data(state).configure(super::super::configure))
                .await;

        let req = test::TestRequest::get()
            .uri("/api/menu?search=pizza")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["items"].as_array().unwrap().len(), 1);
        assert_eq!(body["items"][0]["id"], "margherita-pizza");
        assert_eq!(body["pagination"]["total"], 1);
    }

    #[actix_web::test]
    async fn test_menu_page_past_end_is_empty() {
        let state = test_state(AuthMode::Open).await;
        let app =
            test::init_service(App::new().app_data(state).configure(super::super::configure))
                .await;

        let req = test::TestRequest::get()
            .uri("/api/menu?page=99")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert!(body["items"].as_array().unwrap().is_empty());
        assert_eq!(body["pagination"]["page"], 99);
        assert_eq!(body["pagination"]["total"], 3);
    }

    #[actix_web::test]
    async fn test_menu_tolerates_junk_page_value() {
        let state = test_state(AuthMode::Open).await;
        let app =
            test::init_service(App::new().app_data(state).configure(super::super::configure))
                .await;

        let req = test::TestRequest::get()
            .uri("/api/menu?page=banana")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["pagination"]["page"], 1);
    }

    #[actix_web::test]
    async fn test_create_order_returns_201_with_wire_fields() {
        let state = test_state(AuthMode::Open).await;
        let app =
            test::init_service(App::new().app_data(state).configure(super::super::configure))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/orders")
            .set_json(order_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["id"].as_str().unwrap().starts_with("ord_"));
        assert_eq!(body["status"], "ORDER_RECEIVED");
        assert_eq!(body["items"][0]["itemId"], "margherita-pizza");
        assert_eq!(body["items"][0]["price"], 10.99);
        assert!(body["createdAt"].is_string());
    }

    #[actix_web::test]
    async fn test_create_order_validation_maps_to_400() {
        let state = test_state(AuthMode::Open).await;
        let app =
            test::init_service(App::new().app_data(state).configure(super::super::configure))
                .await;

        let empty = json!({
            "items": [],
            "customer": {"name": "Bob", "address": "Somewhere", "phone": "999"}
        });
        let req = test::TestRequest::post()
            .uri("/api/orders")
            .set_json(empty)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Order must contain at least one item");

        let unknown = json!({
            "items": [{"itemId": "sushi-boat", "quantity": 1}],
            "customer": {"name": "Bob", "address": "Somewhere", "phone": "999"}
        });
        let req = test::TestRequest::post()
            .uri("/api/orders")
            .set_json(unknown)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid menu item: sushi-boat");
    }

    #[actix_web::test]
    async fn test_get_order_round_trip() {
        let state = test_state(AuthMode::Open).await;
        let app =
            test::init_service(App::new().app_data(state).configure(super::super::configure))
                .await;

        let create = test::TestRequest::post()
            .uri("/api/orders")
            .set_json(order_body())
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, create).await;
        let id = created["id"].as_str().unwrap();

        let req = test::TestRequest::get()
            .uri(&format!("/api/orders/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let fetched: Value = test::read_body_json(resp).await;
        assert_eq!(fetched["id"], created["id"]);
    }

    #[actix_web::test]
    async fn test_get_order_missing_id_is_404() {
        let state = test_state(AuthMode::Open).await;
        let app =
            test::init_service(App::new().app_data(state).configure(super::super::configure))
                .await;

        let req = test::TestRequest::get()
            .uri("/api/orders/ord_missing")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Order not found");
    }

    #[actix_web::test]
    async fn test_admin_orders_requires_the_shared_secret() {
        let state = test_state(AuthMode::SharedSecret("swordfish".to_string())).await;
        let app =
            test::init_service(App::new().app_data(state).configure(super::super::configure))
                .await;

        let req = test::TestRequest::get().uri("/api/admin/orders").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Unauthorized");

        let req = test::TestRequest::get()
            .uri("/api/admin/orders")
            .insert_header(("x-admin-secret", "wrong"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get()
            .uri("/api/admin/orders")
            .insert_header(("x-admin-secret", "swordfish"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert!(body.as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_admin_orders_open_mode_needs_no_secret() {
        let state = test_state(AuthMode::Open).await;
        let app =
            test::init_service(App::new().app_data(state).configure(super::super::configure))
                .await;

        let req = test::TestRequest::get().uri("/api/admin/orders").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_patch_status_overrides_and_validates() {
        let state = test_state(AuthMode::SharedSecret("swordfish".to_string())).await;
        let app =
            test::init_service(App::new().app_data(state).configure(super::super::configure))
                .await;

        let create = test::TestRequest::post()
            .uri("/api/orders")
            .set_json(order_body())
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, create).await;
        let id = created["id"].as_str().unwrap();

        // Without the secret the override never reaches the ledger.
        let req = test::TestRequest::patch()
            .uri(&format!("/api/admin/orders/{id}"))
            .set_json(json!({"status": "OUT_FOR_DELIVERY"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::patch()
            .uri(&format!("/api/admin/orders/{id}"))
            .insert_header(("x-admin-secret", "swordfish"))
            .set_json(json!({"status": "OUT_FOR_DELIVERY"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "OUT_FOR_DELIVERY");

        let req = test::TestRequest::patch()
            .uri(&format!("/api/admin/orders/{id}"))
            .insert_header(("x-admin-secret", "swordfish"))
            .set_json(json!({"status": "DELIVERED"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["error"],
            "Invalid status. Use ORDER_RECEIVED, PREPARING, or OUT_FOR_DELIVERY"
        );

        let req = test::TestRequest::patch()
            .uri("/api/admin/orders/ord_missing")
            .insert_header(("x-admin-secret", "swordfish"))
            .set_json(json!({"status": "PREPARING"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_admin_login_checks_the_secret() {
        let state = test_state(AuthMode::SharedSecret("swordfish".to_string())).await;
        let app =
            test::init_service(App::new().app_data(state).configure(super::super::configure))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/login")
            .set_json(json!({"password": "swordfish"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);

        let req = test::TestRequest::post()
            .uri("/api/admin/login")
            .set_json(json!({"password": "wrong"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid password");

        let req = test::TestRequest::post()
            .uri("/api/admin/login")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Password is required");
    }

    #[actix_web::test]
    async fn test_admin_login_open_mode_accepts_any_password() {
        let state = test_state(AuthMode::Open).await;
        let app =
            test::init_service(App::new().app_data(state).configure(super::super::configure))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/login")
            .set_json(json!({"password": ""}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_backend_outage_maps_to_500() {
        let store = Arc::new(UnavailableStore);
        let metrics = Arc::new(Metrics::new().unwrap());
        let state = actix_web::web::Data::new(AppState {
            catalog: Catalog::new(store.clone()),
            ledger: OrderLedger::new(store, metrics.clone()),
            guard: AccessGuard::new(AuthMode::Open),
            metrics,
            menu_page_size: 12,
        });
        let app =
            test::init_service(App::new().app_data(state).configure(super::super::configure))
                .await;

        let req = test::TestRequest::get()
            .uri("/api/orders/ord_x")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("backing store unavailable"));

        // The catalog's seeding read fails the same way on the menu route.
        let req = test::TestRequest::get().uri("/api/menu").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_health_endpoint() {
        let state = test_state(AuthMode::Open).await;
        let app =
            test::init_service(App::new().app_data(state).configure(super::super::configure))
                .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_metrics_exposition_counts_orders() {
        let state = test_state(AuthMode::Open).await;
        let app =
            test::init_service(App::new().app_data(state).configure(super::super::configure))
                .await;

        let create = test::TestRequest::post()
            .uri("/api/orders")
            .set_json(order_body())
            .to_request();
        test::call_service(&app, create).await;

        let req = test::TestRequest::get().uri("/metrics").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("orders_created_total 1"));
    }
}
