pub mod aggregate;
pub mod project;
pub mod project_media;

pub use aggregate::ProjectAggregate;
pub use project::{ApprovalAction, Project, ProjectStatus};
pub use project_media::{MediaType, ProjectMedia};
