//! In-memory `OrderRepository` used by handler tests.

use std::sync::Mutex;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrder, OrderItemView, OrderStatus, OrderView};
use crate::domain::ports::OrderRepository;

#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: Mutex<Vec<OrderView>>,
    failing: bool,
}

impl InMemoryOrderRepository {
    /// A repository whose every call fails like a lost database connection.
    pub fn failing() -> Self {
        Self {
            orders: Mutex::default(),
            failing: true,
        }
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.failing {
            return Err(DomainError::Internal("connection refused".to_string()));
        }
        Ok(())
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn create(&self, order: NewOrder) -> Result<OrderView, DomainError> {
        self.check()?;
        let id = Uuid::new_v4();
        let now = Utc::now();
        let view = OrderView {
            id,
            status: OrderStatus::Pending,
            total_price: order.total_price,
            pizza_count: order.pizza_count,
            soda_count: order.soda_count,
            estimated_completion_time: order.estimated_completion_time,
            created_at: now,
            updated_at: now,
            items: order
                .items
                .into_iter()
                .map(|item| OrderItemView {
                    id: Uuid::new_v4(),
                    order_id: id,
                    menu_item_id: item.menu_item_id,
                    quantity: item.quantity,
                    menu_item: None,
                })
                .collect(),
        };
        self.orders.lock().unwrap().push(view.clone());
        Ok(view)
    }

    fn list(&self, status: Option<OrderStatus>) -> Result<Vec<OrderView>, DomainError> {
        self.check()?;
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| status.map_or(true, |s| o.status == s))
            .cloned()
            .collect())
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<OrderView>, DomainError> {
        self.check()?;
        Ok(self.orders.lock().unwrap().iter().find(|o| o.id == id).cloned())
    }

    fn update_status(
        &self,
        id: Uuid,
        status: OrderStatus,
    ) -> Result<Option<OrderView>, DomainError> {
        self.check()?;
        let mut orders = self.orders.lock().unwrap();
        Ok(orders.iter_mut().find(|o| o.id == id).map(|o| {
            o.status = status;
            o.updated_at = Utc::now();
            o.clone()
        }))
    }
}
