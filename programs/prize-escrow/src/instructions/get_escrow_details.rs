use anchor_lang::prelude::*;

use crate::{
    constants::ESCROW_SEED,
    state::{EscrowDetails, EscrowPool},
};

#[derive(Accounts)]
#[instruction(escrow_id: u64)]
pub struct GetEscrowDetails<'info> {
    #[account(
        seeds = [ESCROW_SEED, &escrow_id.to_le_bytes()],
        bump = escrow.bump,
    )]
    pub escrow: Account<'info, EscrowPool>,
}

pub fn handler(ctx: Context<GetEscrowDetails>, _escrow_id: u64) -> Result<EscrowDetails> {
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx.accounts.escrow.details(now))
}
