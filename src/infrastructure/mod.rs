pub mod models;
pub mod order_repo;

#[cfg(test)]
pub mod memory;

pub use order_repo::DieselOrderRepository;
