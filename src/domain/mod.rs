pub mod customer;
pub mod session;

pub use customer::*;
pub use session::*;
