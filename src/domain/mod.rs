//! Domain layer: foundation value objects, billing core, member aggregate.

pub mod billing;
pub mod foundation;
pub mod member;
