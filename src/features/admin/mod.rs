//! Admin console: project review decisions, featured flag, users, stats and
//! the activity feed. Every route requires the admin role.

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::{AdminService, ApprovalService};
