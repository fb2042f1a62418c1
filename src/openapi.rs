use utoipa::OpenApi;

use crate::domain::order::OrderStatus;
use crate::handlers;
use crate::handlers::dto::{
    CreateOrderItemRequest, CreateOrderRequest, ErrorResponse, HealthResponse, MenuItemResponse,
    OrderItemResponse, OrderResponse, UpdateStatusRequest,
};

/// OpenAPI document served at `/api-docs/openapi.json` and rendered by
/// Swagger UI under `/swagger-ui/`.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health,
        handlers::orders::create_order,
        handlers::orders::get_orders,
        handlers::orders::get_order,
        handlers::orders::update_order_status,
    ),
    components(schemas(
        CreateOrderRequest,
        CreateOrderItemRequest,
        UpdateStatusRequest,
        OrderResponse,
        OrderItemResponse,
        MenuItemResponse,
        OrderStatus,
        ErrorResponse,
        HealthResponse,
    )),
    tags(
        (name = "orders", description = "Placing and tracking pizza and soda orders"),
        (name = "health", description = "Liveness check"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/order-now",
            "/get-orders",
            "/order-detail/{id}",
            "/{id}/status",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
