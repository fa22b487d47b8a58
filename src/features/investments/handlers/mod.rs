pub mod investment_handler;

pub use investment_handler::*;
