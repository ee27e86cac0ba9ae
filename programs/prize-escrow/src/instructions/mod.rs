pub mod create_escrow;
pub mod distribute_winnings;
pub mod get_escrow_details;
pub mod initialize_registry;
pub mod join_escrow;

pub use create_escrow::*;
pub use distribute_winnings::*;
pub use get_escrow_details::*;
pub use initialize_registry::*;
pub use join_escrow::*;
