use anchor_lang::prelude::*;

mod constants;
mod errors;
mod events;
mod instructions;
mod state;

pub use constants::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("EDSN8vZ9BMuZBuSsoUKBU3Xf6jtVwAsm3T9egMLjQMsM");

#[program]
pub mod prize_escrow {
    use super::*;

    pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
        instructions::initialize_registry::handler(ctx)
    }

    /// Opens a new pool and returns its id. With `join_as_organizer` the
    /// organizer pays `dues` into the pool in the same transaction.
    pub fn create_escrow(
        ctx: Context<CreateEscrow>,
        dues: u64,
        start_time: i64,
        end_time: i64,
        join_as_organizer: bool,
    ) -> Result<u64> {
        instructions::create_escrow::handler(ctx, dues, start_time, end_time, join_as_organizer)
    }

    pub fn join_escrow(ctx: Context<JoinEscrow>, escrow_id: u64, amount: u64) -> Result<()> {
        instructions::join_escrow::handler(ctx, escrow_id, amount)
    }

    /// Pays out the whole pot in one shot. Remaining accounts hold a
    /// deposit record and a token account for each recipient.
    pub fn distribute_winnings<'info>(
        ctx: Context<'_, '_, '_, 'info, DistributeWinnings<'info>>,
        escrow_id: u64,
        recipients: Vec<Pubkey>,
        amounts: Vec<u64>,
    ) -> Result<()> {
        instructions::distribute_winnings::handler(ctx, escrow_id, recipients, amounts)
    }

    pub fn get_escrow_details(
        ctx: Context<GetEscrowDetails>,
        escrow_id: u64,
    ) -> Result<EscrowDetails> {
        instructions::get_escrow_details::handler(ctx, escrow_id)
    }
}
