use std::sync::Arc;

use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrder, OrderStatus, OrderView};
use crate::domain::ports::OrderRepository;

/// Entry point of the HTTP layer into the order domain.
pub struct OrderService {
    repo: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(repo: impl OrderRepository) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }

    pub fn create_order(&self, order: NewOrder) -> Result<OrderView, DomainError> {
        let created = self.repo.create(order)?;
        log::info!(
            "Created order {} with {} item(s)",
            created.id,
            created.items.len()
        );
        Ok(created)
    }

    pub fn get_order(&self, id: Uuid) -> Result<Option<OrderView>, DomainError> {
        self.repo.find_by_id(id)
    }

    pub fn list_orders(&self, status: Option<OrderStatus>) -> Result<Vec<OrderView>, DomainError> {
        let orders = self.repo.list(status)?;
        log::debug!(
            "Listed {} order(s) (status filter: {:?})",
            orders.len(),
            status
        );
        Ok(orders)
    }

    /// Any status may replace any other, `Completed` included.
    pub fn update_status(
        &self,
        id: Uuid,
        status: OrderStatus,
    ) -> Result<Option<OrderView>, DomainError> {
        let updated = self.repo.update_status(id, status)?;
        if updated.is_some() {
            log::info!("Order {} moved to {}", id, status);
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use uuid::Uuid;

    use super::*;
    use crate::domain::order::NewOrderItem;
    use crate::infrastructure::memory::InMemoryOrderRepository;

    fn new_order() -> NewOrder {
        NewOrder {
            total_price: BigDecimal::from_str("7.00").unwrap(),
            pizza_count: 0,
            soda_count: 2,
            estimated_completion_time: None,
            items: vec![NewOrderItem {
                menu_item_id: Uuid::new_v4(),
                quantity: 2,
            }],
        }
    }

    #[test]
    fn new_orders_start_pending() {
        let service = OrderService::new(InMemoryOrderRepository::default());
        let order = service.create_order(new_order()).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn status_update_is_reflected_in_listing() {
        let service = OrderService::new(InMemoryOrderRepository::default());
        let order = service.create_order(new_order()).unwrap();
        service.create_order(new_order()).unwrap();

        service
            .update_status(order.id, OrderStatus::Completed)
            .unwrap()
            .expect("order exists");

        let completed = service.list_orders(Some(OrderStatus::Completed)).unwrap();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, order.id);
        assert_eq!(service.list_orders(None).unwrap().len(), 2);
    }

    #[test]
    fn updating_unknown_order_yields_none() {
        let service = OrderService::new(InMemoryOrderRepository::default());
        assert!(service
            .update_status(Uuid::new_v4(), OrderStatus::InProgress)
            .unwrap()
            .is_none());
    }
}
