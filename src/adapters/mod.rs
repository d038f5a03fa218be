//! Adapters: concrete implementations of the ports.

pub mod auth;
pub mod cloudinary;
pub mod http;
pub mod memory;
pub mod mongo;
