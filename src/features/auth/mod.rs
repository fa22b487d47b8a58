//! Local accounts and self-issued JWT authentication.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/auth/register` | No | Register entrepreneur or investor |
//! | POST | `/api/auth/login` | No | Exchange credentials for tokens |
//! | POST | `/api/auth/refresh` | No | Exchange refresh token for new pair |
//! | GET | `/api/auth/me` | Yes | Current account |

pub mod dtos;
pub mod guards;
pub mod handlers;
pub mod model;
pub mod password;
pub mod routes;
pub mod services;

pub use services::{AuthService, TokenService};
