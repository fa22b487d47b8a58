pub mod aggregation_service;
pub mod project_service;

pub use aggregation_service::AggregationService;
pub use project_service::ProjectService;
