pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod investments;
pub mod projects;
pub mod reports;
pub mod users;
