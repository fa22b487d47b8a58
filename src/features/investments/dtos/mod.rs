pub mod investment_dto;

pub use investment_dto::*;
