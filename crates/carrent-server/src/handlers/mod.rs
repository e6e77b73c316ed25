//! Request handlers, one module per route group.

pub mod owner;
pub mod user;
