use anchor_lang::prelude::*;

use crate::{constants::REGISTRY_SEED, state::EscrowRegistry};

#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    #[account(
        init,
        payer = payer,
        space = 8 + EscrowRegistry::LEN,
        seeds = [REGISTRY_SEED],
        bump
    )]
    pub registry: Account<'info, EscrowRegistry>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeRegistry>) -> Result<()> {
    let registry = &mut ctx.accounts.registry;

    registry.next_escrow_id = 0;
    registry.bump = ctx.bumps.registry;

    msg!("Escrow registry initialized by {}", ctx.accounts.payer.key());

    Ok(())
}
