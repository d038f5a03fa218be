//! HTTP adapter for member endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::member_routes;
