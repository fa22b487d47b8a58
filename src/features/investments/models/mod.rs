pub mod investment;

pub use investment::{Investment, InvestmentStatus};
