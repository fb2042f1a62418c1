use std::collections::HashMap;

use chrono::Utc;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::order::{MenuItemView, NewOrder, OrderItemView, OrderStatus, OrderView};
use crate::domain::ports::OrderRepository;
use crate::schema::{menu_items, order_items, orders};

use super::models::{MenuItemRow, NewOrderItemRow, NewOrderRow, OrderItemRow, OrderRow};

/// Postgres accepts at most 65535 bind parameters per statement and each
/// `order_items` row binds five.
const ITEM_ROWS_PER_INSERT: usize = 65535 / 5;

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

// ── Row → view assembly ───────────────────────────────────────────────────────

/// Attaches items (in submission order) and their menu items to each order,
/// using one query for all items and one for all referenced menu items.
fn load_views(conn: &mut PgConnection, rows: Vec<OrderRow>) -> Result<Vec<OrderView>, DomainError> {
    if rows.is_empty() {
        return Ok(vec![]);
    }

    let items = OrderItemRow::belonging_to(&rows)
        .select(OrderItemRow::as_select())
        .order(order_items::position.asc())
        .load(conn)?;

    let mut menu_item_ids: Vec<Uuid> = items.iter().map(|i| i.menu_item_id).collect();
    menu_item_ids.sort_unstable();
    menu_item_ids.dedup();

    let menu: HashMap<Uuid, MenuItemView> = menu_items::table
        .filter(menu_items::id.eq_any(menu_item_ids))
        .select(MenuItemRow::as_select())
        .load(conn)?
        .into_iter()
        .map(|m| {
            (
                m.id,
                MenuItemView {
                    id: m.id,
                    name: m.name,
                    price: m.price,
                },
            )
        })
        .collect();

    items
        .grouped_by(&rows)
        .into_iter()
        .zip(rows)
        .map(|(items, order)| order_view(order, items, &menu))
        .collect()
}

fn order_view(
    order: OrderRow,
    items: Vec<OrderItemRow>,
    menu: &HashMap<Uuid, MenuItemView>,
) -> Result<OrderView, DomainError> {
    let status = order
        .status
        .parse::<OrderStatus>()
        .map_err(|e| DomainError::Internal(format!("order {}: {}", order.id, e)))?;

    Ok(OrderView {
        id: order.id,
        status,
        total_price: order.total_price,
        pizza_count: order.pizza_count,
        soda_count: order.soda_count,
        estimated_completion_time: order.estimated_completion_time,
        created_at: order.created_at,
        updated_at: order.updated_at,
        items: items
            .into_iter()
            .map(|i| OrderItemView {
                id: i.id,
                order_id: i.order_id,
                menu_item_id: i.menu_item_id,
                quantity: i.quantity,
                menu_item: menu.get(&i.menu_item_id).cloned(),
            })
            .collect(),
    })
}

fn fetch_one(conn: &mut PgConnection, id: Uuid) -> Result<Option<OrderView>, DomainError> {
    let order = orders::table
        .find(id)
        .select(OrderRow::as_select())
        .first(conn)
        .optional()?;

    let Some(order) = order else {
        return Ok(None);
    };

    Ok(load_views(conn, vec![order])?.pop())
}

// ── Repository ────────────────────────────────────────────────────────────────

pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl OrderRepository for DieselOrderRepository {
    fn create(&self, order: NewOrder) -> Result<OrderView, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            // 1. Insert the order
            let order_id = Uuid::new_v4();
            diesel::insert_into(orders::table)
                .values(&NewOrderRow {
                    id: order_id,
                    status: OrderStatus::Pending.as_str().to_string(),
                    total_price: order.total_price.clone(),
                    pizza_count: order.pizza_count,
                    soda_count: order.soda_count,
                    estimated_completion_time: order.estimated_completion_time,
                })
                .execute(conn)?;

            // 2. Insert its items, remembering their submission order
            let new_items = order
                .items
                .iter()
                .enumerate()
                .map(|(position, item)| {
                    let position = i32::try_from(position).map_err(|_| {
                        DomainError::InvalidInput("too many items in one order".to_string())
                    })?;
                    Ok(NewOrderItemRow {
                        id: Uuid::new_v4(),
                        order_id,
                        menu_item_id: item.menu_item_id,
                        quantity: item.quantity,
                        position,
                    })
                })
                .collect::<Result<Vec<_>, DomainError>>()?;
            for chunk in new_items.chunks(ITEM_ROWS_PER_INSERT) {
                diesel::insert_into(order_items::table)
                    .values(chunk)
                    .execute(conn)?;
            }

            // 3. Read back the stored representation
            fetch_one(conn, order_id)?.ok_or_else(|| {
                DomainError::Internal(format!("order {} missing right after insert", order_id))
            })
        })
    }

    fn list(&self, status: Option<OrderStatus>) -> Result<Vec<OrderView>, DomainError> {
        let mut conn = self.pool.get()?;

        let mut query = orders::table
            .select(OrderRow::as_select())
            .order((orders::created_at.asc(), orders::id.asc()))
            .into_boxed();
        if let Some(status) = status {
            query = query.filter(orders::status.eq(status.as_str()));
        }

        let rows = query.load(&mut conn)?;
        load_views(&mut conn, rows)
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<OrderView>, DomainError> {
        let mut conn = self.pool.get()?;
        fetch_one(&mut conn, id)
    }

    fn update_status(
        &self,
        id: Uuid,
        status: OrderStatus,
    ) -> Result<Option<OrderView>, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            let updated = diesel::update(orders::table.find(id))
                .set((
                    orders::status.eq(status.as_str()),
                    orders::updated_at.eq(Utc::now()),
                ))
                .execute(conn)?;

            if updated == 0 {
                return Ok(None);
            }
            fetch_one(conn, id)
        })
    }
}
