// crates/domain/src/model.rs
pub mod customer;
pub mod order;

pub use customer::Customer;
pub use order::{Order, OrderItem};
