//! Request validation.
//!
//! Each function checks a decoded request against its constraints and either
//! returns the typed domain value or the first violation found. Fields are
//! checked in declaration order, then the cross-field rules.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::order::{NewOrder, NewOrderItem, OrderStatus};
use crate::handlers::dto::{CreateOrderItemRequest, CreateOrderRequest};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

pub fn validate_create_order(req: CreateOrderRequest) -> Result<NewOrder, ValidationError> {
    if req.items.is_empty() {
        return Err(ValidationError::new(
            "\"items\" must contain at least 1 item",
        ));
    }
    let items = req
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| validate_item(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    if !req.total_price.is_finite() || req.total_price <= 0.0 {
        return Err(ValidationError::new("\"totalPrice\" must be a positive number"));
    }
    let total_price = BigDecimal::from_str(&req.total_price.to_string())
        .map_err(|_| ValidationError::new("\"totalPrice\" must be a positive number"))?;

    let pizza_count = int32("pizzaCount", req.pizza_count, 0)?;
    let soda_count = int32("sodaCount", req.soda_count, 0)?;

    if i64::from(pizza_count) + i64::from(soda_count) <= 0 {
        return Err(ValidationError::new(
            "Total of pizzaCount and sodaCount must be greater than 0",
        ));
    }

    Ok(NewOrder {
        total_price,
        pizza_count,
        soda_count,
        estimated_completion_time: req.estimated_completion_time,
        items,
    })
}

fn validate_item(index: usize, item: &CreateOrderItemRequest) -> Result<NewOrderItem, ValidationError> {
    let menu_item_id = Uuid::parse_str(&item.menu_item_id).map_err(|_| {
        ValidationError::new(format!(
            "\"items[{}].menuItemId\" must be a valid GUID",
            index
        ))
    })?;
    let quantity = int32(&format!("items[{}].quantity", index), item.quantity, 1)?;
    Ok(NewOrderItem {
        menu_item_id,
        quantity,
    })
}

/// Status literals are matched exactly; used for both the list filter and
/// the status update body.
pub fn validate_status(raw: &str) -> Result<OrderStatus, ValidationError> {
    raw.parse::<OrderStatus>().map_err(|_| {
        let allowed: Vec<&str> = OrderStatus::ALL.iter().map(|s| s.as_str()).collect();
        ValidationError::new(format!(
            "\"status\" must be one of [{}]",
            allowed.join(", ")
        ))
    })
}

/// Checks a decoded JSON number against an integer column: whole, at least
/// `min`, within `i32`.
fn int32(field: &str, value: f64, min: i32) -> Result<i32, ValidationError> {
    if value.fract() != 0.0 {
        return Err(ValidationError::new(format!(
            "\"{}\" must be an integer",
            field
        )));
    }
    if value < f64::from(min) {
        return Err(ValidationError::new(format!(
            "\"{}\" must be greater than or equal to {}",
            field, min
        )));
    }
    if value > f64::from(i32::MAX) {
        return Err(ValidationError::new(format!(
            "\"{}\" must be less than or equal to {}",
            field,
            i32::MAX
        )));
    }
    Ok(value as i32)
}
