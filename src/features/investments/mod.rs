//! Investment commitments.
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/investments` | Investor | Commit funds to an approved project |
//! | GET | `/api/investments` | Investor | Own portfolio |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CommitmentService;
