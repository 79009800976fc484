//! Role-based authorization gate.

pub mod action;
pub mod enforcer;

pub use action::Action;
pub use enforcer::RoleGate;
