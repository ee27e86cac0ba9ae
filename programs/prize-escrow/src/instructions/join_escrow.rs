use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    constants::*,
    events::EscrowJoined,
    state::{Deposit, EscrowPool},
};

#[derive(Accounts)]
#[instruction(escrow_id: u64)]
pub struct JoinEscrow<'info> {
    #[account(
        mut,
        seeds = [ESCROW_SEED, &escrow_id.to_le_bytes()],
        bump = escrow.bump,
    )]
    pub escrow: Box<Account<'info, EscrowPool>>,

    #[account(
        mut,
        seeds = [VAULT_SEED, escrow.key().as_ref()],
        bump = escrow.vault_bump,
        token::mint = escrow.token_mint,
        token::authority = escrow,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = depositor,
        space = 8 + Deposit::LEN,
        seeds = [DEPOSIT_SEED, escrow.key().as_ref(), depositor.key().as_ref()],
        bump
    )]
    pub deposit: Account<'info, Deposit>,

    #[account(
        mut,
        token::mint = escrow.token_mint,
        token::authority = depositor,
    )]
    pub depositor_token_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub depositor: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<JoinEscrow>, escrow_id: u64, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let escrow_key = ctx.accounts.escrow.key();
    let depositor_key = ctx.accounts.depositor.key();

    ctx.accounts.escrow.check_entry(clock.unix_timestamp)?;
    ctx.accounts.escrow.check_deposit_amount(amount)?;

    // Pull the deposit into the vault; the depositor's signature authorizes it
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.depositor_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.depositor.to_account_info(),
            },
        ),
        amount,
    )?;

    let deposit = &mut ctx.accounts.deposit;
    deposit.bind(escrow_key, depositor_key, ctx.bumps.deposit);

    let escrow = &mut ctx.accounts.escrow;
    escrow.record_deposit(deposit, amount)?;

    emit!(EscrowJoined {
        escrow_id,
        depositor: depositor_key,
        amount,
        total_amount: escrow.total_amount,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "{} joined escrow {} with {} (pot now {})",
        depositor_key,
        escrow_id,
        amount,
        escrow.total_amount
    );

    Ok(())
}
