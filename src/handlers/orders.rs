use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::application::OrderService;
use crate::errors::AppError;
use crate::validation::{validate_create_order, validate_status};

use super::dto::{
    CreateOrderRequest, ErrorResponse, ListOrdersParams, OrderResponse, UpdateStatusRequest,
};

/// A path segment that is not a UUID cannot name an order.
fn parse_order_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound)
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /order-now
///
/// Validates the submission and stores the order together with its items.
/// The new order always starts as `PENDING`.
#[utoipa::path(
    post,
    path = "/order-now",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created successfully", body = OrderResponse),
        (status = 400, description = "Invalid order payload", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "orders"
)]
pub async fn create_order(
    service: web::Data<OrderService>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let new_order = validate_create_order(body.into_inner())?;
    let service = service.into_inner();

    let order = web::block(move || service.create_order(new_order))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(OrderResponse::from(order)))
}

/// GET /get-orders
///
/// Returns every order, or only the ones in `status` when the filter is
/// given. The list is not paginated.
#[utoipa::path(
    get,
    path = "/get-orders",
    params(ListOrdersParams),
    responses(
        (status = 200, description = "Orders with their items", body = Vec<OrderResponse>),
        (status = 400, description = "Unknown status filter", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "orders"
)]
pub async fn get_orders(
    service: web::Data<OrderService>,
    query: web::Query<ListOrdersParams>,
) -> Result<HttpResponse, AppError> {
    let status = query
        .into_inner()
        .status
        .as_deref()
        .map(validate_status)
        .transpose()?;
    let service = service.into_inner();

    let orders = web::block(move || service.list_orders(status))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let body: Vec<OrderResponse> = orders.into_iter().map(OrderResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /order-detail/{id}
#[utoipa::path(
    get,
    path = "/order-detail/{id}",
    params(
        ("id" = Uuid, Path, description = "Order UUID"),
    ),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "Order not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "orders"
)]
pub async fn get_order(
    service: web::Data<OrderService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let order_id = parse_order_id(&path.into_inner())?;
    let service = service.into_inner();

    let order = web::block(move || service.get_order(order_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    match order {
        Some(order) => Ok(HttpResponse::Ok().json(OrderResponse::from(order))),
        None => Err(AppError::NotFound),
    }
}

/// PATCH /{id}/status
///
/// Overwrites the order's status. The body is validated before the order is
/// looked up.
#[utoipa::path(
    patch,
    path = "/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Order UUID"),
    ),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = OrderResponse),
        (status = 400, description = "Unknown status", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "orders"
)]
pub async fn update_order_status(
    service: web::Data<OrderService>,
    path: web::Path<String>,
    body: web::Json<UpdateStatusRequest>,
) -> Result<HttpResponse, AppError> {
    let status = validate_status(&body.status)?;
    let order_id = parse_order_id(&path.into_inner())?;
    let service = service.into_inner();

    let order = web::block(move || service.update_status(order_id, status))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    match order {
        Some(order) => Ok(HttpResponse::Ok().json(OrderResponse::from(order))),
        None => Err(AppError::NotFound),
    }
}
