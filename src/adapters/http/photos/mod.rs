//! HTTP adapter for photo upload.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::photo_routes;
