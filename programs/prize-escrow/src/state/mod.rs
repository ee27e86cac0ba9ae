pub mod deposit;
pub mod escrow_pool;
pub mod registry;

pub use deposit::*;
pub use escrow_pool::*;
pub use registry::*;
