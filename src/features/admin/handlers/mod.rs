pub mod approval_handlers;
pub mod console_handlers;

pub use approval_handlers::*;
pub use console_handlers::*;
