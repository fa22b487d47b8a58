//! User accounts and self-service profile management.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | PATCH | `/api/users/me` | Update display name |
//! | PUT | `/api/users/me/password` | Change password |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::UserService;
