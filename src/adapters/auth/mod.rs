//! Authentication adapter.

mod static_password;

pub use static_password::StaticPasswordAuthenticator;
