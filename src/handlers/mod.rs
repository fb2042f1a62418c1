pub mod dto;
pub mod health;
pub mod orders;

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{web, HttpRequest};

use crate::errors::AppError;

/// Registers every route plus the extractor configs that turn malformed
/// bodies and query strings into `400 { "error": ... }` responses.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .route("/health", web::get().to(health::health))
        .route("/order-now", web::post().to(orders::create_order))
        .route("/get-orders", web::get().to(orders::get_orders))
        .route("/order-detail/{id}", web::get().to(orders::get_order))
        .route("/{id}/status", web::patch().to(orders::update_order_status));
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::Deserialize(e) => e.to_string(),
        JsonPayloadError::ContentType => "Content type must be application/json".to_string(),
        other => other.to_string(),
    };
    AppError::BadRequest(message).into()
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use serde_json::{json, Value};

    use super::configure;
    use crate::application::OrderService;
    use crate::infrastructure::memory::InMemoryOrderRepository;

    #[actix_web::test]
    async fn health_returns_ok() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(OrderService::new(
                    InMemoryOrderRepository::failing(),
                )))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[actix_web::test]
    async fn malformed_json_is_reported_as_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(OrderService::new(
                    InMemoryOrderRepository::default(),
                )))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/order-now")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"items\": [")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }
}
