//! GymDesk: gym-membership administration backend.
//!
//! The engineering core is calendar-accurate billing arithmetic
//! (`domain::billing::calendar`) and the dual-period renewal state
//! machine (`domain::billing::renewal`). Everything else follows the
//! hexagonal layout: `ports` declares the trait seams, `adapters`
//! implements them (MongoDB, Cloudinary, HTTP), and `application`
//! hosts one handler per operation.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
