pub mod api;
pub mod entities;
pub mod health;
pub mod seed;
pub mod shared;
pub mod store;
pub mod technologies;
