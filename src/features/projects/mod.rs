//! Projects, their media, and live funding aggregates.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/projects` | No | Browse approved projects |
//! | GET | `/api/projects/featured` | No | Featured approved projects |
//! | GET | `/api/projects/filter-options` | No | Distinct categories and reward types |
//! | GET | `/api/projects/aggregates?ids=` | No | Batch funding totals |
//! | GET | `/api/projects/{id}` | No | Project detail |
//! | GET | `/api/projects/{id}/aggregate` | No | Funding totals of one project |
//! | GET | `/api/my/projects` | Entrepreneur | Own projects |
//! | POST | `/api/my/projects` | Entrepreneur | Submit a project |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{AggregationService, ProjectService};
