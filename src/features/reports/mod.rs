//! Flags raised by users against projects, and their admin review.
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/reports` | Any role | Flag a project |
//! | GET | `/api/admin/reports` | Admin | List flags |
//! | PATCH | `/api/admin/reports/{id}` | Admin | Update flag status |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ReportService;
