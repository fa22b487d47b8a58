pub mod commitment_service;

pub use commitment_service::{calculate_platform_fee, CommitmentService};
