use std::fmt;

use bigdecimal::{BigDecimal, ToPrimitive};
use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::domain::order::{MenuItemView, OrderItemView, OrderStatus, OrderView};

// ── Requests ──────────────────────────────────────────────────────────────────
//
// Request fields are loosely typed; constraints are checked in
// `crate::validation`. Unknown keys are rejected.

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateOrderItemRequest {
    /// UUID of the menu item being ordered.
    pub menu_item_id: String,
    /// Whole number, at least 1.
    #[serde(deserialize_with = "lenient_number")]
    pub quantity: f64,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateOrderRequest {
    pub items: Vec<CreateOrderItemRequest>,
    #[serde(deserialize_with = "lenient_number")]
    pub total_price: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub pizza_count: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub soda_count: f64,
    #[serde(default)]
    pub estimated_completion_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateStatusRequest {
    /// One of `PENDING`, `IN_PROGRESS`, `COMPLETED`.
    pub status: String,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(deny_unknown_fields)]
#[into_params(parameter_in = Query)]
pub struct ListOrdersParams {
    /// Only return orders in this status.
    pub status: Option<String>,
}

/// Accepts a JSON number or a string holding a finite decimal number, so
/// `2`, `2.0` and `"2"` all decode to the same value.
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientNumber;

    impl<'de> Visitor<'de> for LenientNumber {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number or a numeric string")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            match v.parse::<f64>() {
                Ok(n) if n.is_finite() => Ok(n),
                _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
            }
        }
    }

    deserializer.deserialize_any(LenientNumber)
}

// ── Responses ─────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemResponse {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub id: Uuid,
    pub order_id: Uuid,
    pub menu_item_id: Uuid,
    pub quantity: i32,
    /// `null` when the menu item no longer exists.
    pub menu_item: Option<MenuItemResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: Uuid,
    pub status: OrderStatus,
    pub total_price: f64,
    pub pizza_count: i32,
    pub soda_count: i32,
    pub estimated_completion_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub items: Vec<OrderItemResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

fn to_json_number(value: &BigDecimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

impl From<MenuItemView> for MenuItemResponse {
    fn from(m: MenuItemView) -> Self {
        Self {
            id: m.id,
            name: m.name,
            price: to_json_number(&m.price),
        }
    }
}

impl From<OrderItemView> for OrderItemResponse {
    fn from(i: OrderItemView) -> Self {
        Self {
            id: i.id,
            order_id: i.order_id,
            menu_item_id: i.menu_item_id,
            quantity: i.quantity,
            menu_item: i.menu_item.map(MenuItemResponse::from),
        }
    }
}

impl From<OrderView> for OrderResponse {
    fn from(o: OrderView) -> Self {
        Self {
            id: o.id,
            status: o.status,
            total_price: to_json_number(&o.total_price),
            pizza_count: o.pizza_count,
            soda_count: o.soda_count,
            estimated_completion_time: o.estimated_completion_time,
            created_at: o.created_at,
            updated_at: o.updated_at,
            items: o.items.into_iter().map(OrderItemResponse::from).collect(),
        }
    }
}
