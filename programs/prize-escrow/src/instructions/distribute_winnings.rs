use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    constants::*,
    errors::EscrowError,
    events::WinningsDistributed,
    state::{Deposit, EscrowPool},
};

#[derive(Accounts)]
#[instruction(escrow_id: u64)]
pub struct DistributeWinnings<'info> {
    #[account(
        mut,
        seeds = [ESCROW_SEED, &escrow_id.to_le_bytes()],
        bump = escrow.bump,
        has_one = organizer @ EscrowError::NotOrganizer,
    )]
    pub escrow: Box<Account<'info, EscrowPool>>,

    #[account(
        mut,
        seeds = [VAULT_SEED, escrow.key().as_ref()],
        bump = escrow.vault_bump,
        token::authority = escrow,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    pub organizer: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// Remaining accounts carry one `(deposit record, recipient token account)`
/// pair per recipient, in the same order as `recipients`.
pub fn handler<'info>(
    ctx: Context<'_, '_, '_, 'info, DistributeWinnings<'info>>,
    escrow_id: u64,
    recipients: Vec<Pubkey>,
    amounts: Vec<u64>,
) -> Result<()> {
    let clock = Clock::get()?;
    let escrow_key = ctx.accounts.escrow.key();
    let organizer_key = ctx.accounts.organizer.key();

    ctx.accounts.escrow.check_payout(
        &organizer_key,
        clock.unix_timestamp,
        &recipients,
        &amounts,
    )?;

    let expected_accounts = recipients
        .len()
        .checked_mul(ACCOUNTS_PER_RECIPIENT)
        .ok_or(EscrowError::Overflow)?;
    require!(
        ctx.remaining_accounts.len() == expected_accounts,
        EscrowError::RecipientAccountsMismatch
    );

    // Validate every payout line before moving anything
    let mut destinations = Vec::with_capacity(recipients.len());
    for (recipient, pair) in recipients
        .iter()
        .zip(ctx.remaining_accounts.chunks_exact(ACCOUNTS_PER_RECIPIENT))
    {
        let (deposit_info, destination_info) = (&pair[0], &pair[1]);

        require_keys_eq!(*deposit_info.owner, crate::ID, EscrowError::NotDepositor);
        let deposit = {
            let data = deposit_info.try_borrow_data()?;
            Deposit::try_deserialize(&mut &data[..])?
        };

        require_keys_eq!(
            *destination_info.owner,
            token::ID,
            EscrowError::InvalidRecipientAccount
        );
        let destination = {
            let data = destination_info.try_borrow_data()?;
            TokenAccount::try_deserialize(&mut &data[..])?
        };
        ctx.accounts.escrow.check_recipient(
            &escrow_key,
            recipient,
            &deposit,
            &destination.mint,
            &destination.owner,
        )?;

        destinations.push(destination_info.clone());
    }

    let id_bytes = escrow_id.to_le_bytes();
    let bump = ctx.accounts.escrow.bump;
    let seeds = &[ESCROW_SEED, &id_bytes, &[bump]];
    let signer = &[&seeds[..]];

    for ((destination, amount), recipient) in destinations
        .into_iter()
        .zip(amounts.iter().copied())
        .zip(recipients.iter())
    {
        if amount == 0 {
            continue;
        }

        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: destination,
                    authority: ctx.accounts.escrow.to_account_info(),
                },
                signer,
            ),
            amount,
        )?;

        msg!("Paid {} from escrow {} to {}", amount, escrow_id, recipient);
    }

    let paid_recipients = recipient_count(recipients.len())?;
    let paid = ctx.accounts.escrow.finalize()?;

    emit!(WinningsDistributed {
        escrow_id,
        organizer: organizer_key,
        recipients: paid_recipients,
        amount: paid,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Escrow {} finalized: {} paid to {} recipient(s)",
        escrow_id,
        paid,
        recipients.len()
    );

    Ok(())
}

fn recipient_count(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| error!(EscrowError::Overflow))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipient_count_never_truncates() {
        assert_eq!(recipient_count(3).unwrap(), 3);
        assert_eq!(recipient_count(u32::MAX as usize).unwrap(), u32::MAX);
        assert_eq!(
            recipient_count(u32::MAX as usize + 1).unwrap_err(),
            anchor_lang::error::Error::from(EscrowError::Overflow)
        );
    }
}
