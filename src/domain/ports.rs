use uuid::Uuid;

use super::errors::DomainError;
use super::order::{NewOrder, OrderStatus, OrderView};

/// Persistence port for orders and their items.
///
/// Implementations are synchronous; callers on an async runtime are expected
/// to run them on a blocking thread.
pub trait OrderRepository: Send + Sync + 'static {
    /// Inserts the order and all of its items atomically, returning the
    /// stored representation.
    fn create(&self, order: NewOrder) -> Result<OrderView, DomainError>;

    /// Returns every order, or only those in `status` when given.
    fn list(&self, status: Option<OrderStatus>) -> Result<Vec<OrderView>, DomainError>;

    fn find_by_id(&self, id: Uuid) -> Result<Option<OrderView>, DomainError>;

    /// Overwrites the status of an order. `Ok(None)` means no order has `id`.
    fn update_status(
        &self,
        id: Uuid,
        status: OrderStatus,
    ) -> Result<Option<OrderView>, DomainError>;
}
