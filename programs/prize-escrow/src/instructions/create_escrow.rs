use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::{
    constants::*,
    errors::EscrowError,
    events::EscrowCreated,
    state::{Deposit, EscrowPool, EscrowRegistry},
};

#[derive(Accounts)]
pub struct CreateEscrow<'info> {
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, EscrowRegistry>,

    #[account(
        init,
        payer = organizer,
        space = 8 + EscrowPool::LEN,
        seeds = [ESCROW_SEED, &registry.next_escrow_id.to_le_bytes()],
        bump
    )]
    pub escrow: Box<Account<'info, EscrowPool>>,

    #[account(
        init,
        payer = organizer,
        seeds = [VAULT_SEED, escrow.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = escrow,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    pub token_mint: Box<Account<'info, Mint>>,

    /// Only needed when the organizer joins on creation
    #[account(
        init,
        payer = organizer,
        space = 8 + Deposit::LEN,
        seeds = [DEPOSIT_SEED, escrow.key().as_ref(), organizer.key().as_ref()],
        bump
    )]
    pub organizer_deposit: Option<Account<'info, Deposit>>,

    /// Source of the organizer's dues when joining on creation
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = organizer,
    )]
    pub organizer_token_account: Option<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub organizer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateEscrow>,
    dues: u64,
    start_time: i64,
    end_time: i64,
    join_as_organizer: bool,
) -> Result<u64> {
    check_organizer_accounts(
        join_as_organizer,
        ctx.accounts.organizer_deposit.is_some(),
        ctx.accounts.organizer_token_account.is_some(),
    )?;

    let clock = Clock::get()?;
    let escrow_id = ctx.accounts.registry.allocate_id()?;
    let escrow_key = ctx.accounts.escrow.key();
    let organizer_key = ctx.accounts.organizer.key();
    let token_mint = ctx.accounts.token_mint.key();

    let escrow = &mut ctx.accounts.escrow;
    escrow.escrow_id = escrow_id;
    escrow.organizer = organizer_key;
    escrow.token_mint = token_mint;
    escrow.vault = ctx.accounts.vault.key();
    escrow.dues = dues;
    escrow.start_time = start_time;
    escrow.end_time = end_time;
    escrow.total_amount = 0;
    escrow.finalized = false;
    escrow.created_at = clock.unix_timestamp;
    escrow.bump = ctx.bumps.escrow;
    escrow.vault_bump = ctx.bumps.vault;

    if join_as_organizer {
        let (Some(deposit), Some(source)) = (
            ctx.accounts.organizer_deposit.as_mut(),
            ctx.accounts.organizer_token_account.as_ref(),
        ) else {
            return err!(EscrowError::OrganizerAccountsMissing);
        };

        // Open-contribution pools record the organizer with nothing paid in
        if dues > 0 {
            token::transfer(
                CpiContext::new(
                    ctx.accounts.token_program.to_account_info(),
                    Transfer {
                        from: source.to_account_info(),
                        to: ctx.accounts.vault.to_account_info(),
                        authority: ctx.accounts.organizer.to_account_info(),
                    },
                ),
                dues,
            )?;
        }

        let (_, deposit_bump) = Pubkey::find_program_address(
            &[DEPOSIT_SEED, escrow_key.as_ref(), organizer_key.as_ref()],
            ctx.program_id,
        );
        deposit.bind(escrow_key, organizer_key, deposit_bump);
        escrow.record_deposit(deposit, dues)?;

        msg!("Organizer {} joined escrow {} with {}", organizer_key, escrow_id, dues);
    }

    emit!(EscrowCreated {
        escrow_id,
        escrow: escrow_key,
        organizer: organizer_key,
        token_mint,
        dues,
        start_time,
        end_time,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Escrow {} created by {}: dues {}, window {}..{}",
        escrow_id,
        organizer_key,
        dues,
        start_time,
        end_time
    );

    Ok(escrow_id)
}

/// The organizer's deposit and source accounts come as a pair, and only
/// when the organizer joins.
fn check_organizer_accounts(
    join_as_organizer: bool,
    has_deposit: bool,
    has_source: bool,
) -> Result<()> {
    if join_as_organizer {
        require!(
            has_deposit && has_source,
            EscrowError::OrganizerAccountsMissing
        );
    } else {
        require!(!has_deposit, EscrowError::UnexpectedOrganizerDeposit);
    }

    Ok(())
}
