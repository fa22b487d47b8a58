pub mod admin_service;
pub mod approval_service;

pub use admin_service::AdminService;
pub use approval_service::ApprovalService;
