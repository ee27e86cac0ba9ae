use anchor_lang::prelude::*;

use crate::{constants::NO_START_TIME, errors::EscrowError, state::Deposit};

#[account]
pub struct EscrowPool {
    pub escrow_id: u64,
    pub organizer: Pubkey,
    pub token_mint: Pubkey,
    pub vault: Pubkey,
    pub dues: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub total_amount: u64,
    pub finalized: bool,
    pub created_at: i64,
    pub bump: u8,
    pub vault_bump: u8,
}

/// Where a pool stands at a given moment. Derived from `finalized` and the
/// clock on every read, never stored.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolPhase {
    Open,
    EntryClosed,
    AwaitingDistribution,
    Finalized,
}

/// Read-only view returned by `get_escrow_details`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct EscrowDetails {
    pub escrow_id: u64,
    pub organizer: Pubkey,
    pub token_mint: Pubkey,
    pub dues: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub total_amount: u64,
    pub finalized: bool,
    pub phase: PoolPhase,
}

impl EscrowPool {
    pub const LEN: usize = 8  // escrow_id
        + 32  // organizer
        + 32  // token_mint
        + 32  // vault
        + 8   // dues
        + 8   // start_time
        + 8   // end_time
        + 8   // total_amount
        + 1   // finalized
        + 8   // created_at
        + 1   // bump
        + 1;  // vault_bump

    pub fn has_start_time(&self) -> bool {
        self.start_time != NO_START_TIME
    }

    pub fn is_open_contribution(&self) -> bool {
        self.dues == 0
    }

    /// With a start time, entry closes when the contest starts; without one
    /// it closes at the end time.
    pub fn is_entry_open(&self, now: i64) -> bool {
        if self.has_start_time() {
            now < self.start_time
        } else {
            now < self.end_time
        }
    }

    pub fn has_ended(&self, now: i64) -> bool {
        now >= self.end_time
    }

    pub fn phase(&self, now: i64) -> PoolPhase {
        if self.finalized {
            PoolPhase::Finalized
        } else if self.has_ended(now) {
            PoolPhase::AwaitingDistribution
        } else if self.is_entry_open(now) {
            PoolPhase::Open
        } else {
            PoolPhase::EntryClosed
        }
    }

    pub fn details(&self, now: i64) -> EscrowDetails {
        EscrowDetails {
            escrow_id: self.escrow_id,
            organizer: self.organizer,
            token_mint: self.token_mint,
            dues: self.dues,
            start_time: self.start_time,
            end_time: self.end_time,
            total_amount: self.total_amount,
            finalized: self.finalized,
            phase: self.phase(now),
        }
    }

    pub fn check_entry(&self, now: i64) -> Result<()> {
        require!(!self.finalized, EscrowError::AlreadyFinalized);

        if self.has_start_time() {
            require!(now < self.start_time, EscrowError::AlreadyStarted);
        } else {
            require!(now < self.end_time, EscrowError::ContestEnded);
        }

        Ok(())
    }

    pub fn check_deposit_amount(&self, amount: u64) -> Result<()> {
        if self.is_open_contribution() {
            require!(amount > 0, EscrowError::ZeroDeposit);
        } else {
            require!(amount == self.dues, EscrowError::DuesMismatch);
        }

        Ok(())
    }

    /// Credits `amount` to the pool total and to the depositor's record.
    /// Neither side is written unless both additions fit.
    pub fn record_deposit(&mut self, deposit: &mut Deposit, amount: u64) -> Result<()> {
        require!(!self.finalized, EscrowError::AlreadyFinalized);

        let total_amount = self
            .total_amount
            .checked_add(amount)
            .ok_or(EscrowError::Overflow)?;
        let deposited = deposit
            .amount
            .checked_add(amount)
            .ok_or(EscrowError::Overflow)?;

        self.total_amount = total_amount;
        deposit.amount = deposited;

        Ok(())
    }

    /// Everything a payout must satisfy before any token moves, except the
    /// per-recipient checks done by `check_recipient`.
    pub fn check_payout(
        &self,
        caller: &Pubkey,
        now: i64,
        recipients: &[Pubkey],
        amounts: &[u64],
    ) -> Result<()> {
        require_keys_eq!(*caller, self.organizer, EscrowError::NotOrganizer);
        require!(!self.finalized, EscrowError::AlreadyFinalized);
        require!(self.has_ended(now), EscrowError::NotEnded);
        require!(
            recipients.len() == amounts.len(),
            EscrowError::LengthMismatch
        );

        let payout = amounts
            .iter()
            .try_fold(0u64, |sum, amount| sum.checked_add(*amount))
            .ok_or(EscrowError::Overflow)?;
        require!(payout == self.total_amount, EscrowError::PayoutMismatch);

        Ok(())
    }

    /// One payout line: the recipient must hold a funded deposit record for
    /// this pool, and the destination must be its own account in the pool mint.
    pub fn check_recipient(
        &self,
        escrow: &Pubkey,
        recipient: &Pubkey,
        deposit: &Deposit,
        destination_mint: &Pubkey,
        destination_owner: &Pubkey,
    ) -> Result<()> {
        require!(
            deposit.is_depositor_of(escrow, recipient),
            EscrowError::NotDepositor
        );
        require_keys_eq!(
            *destination_mint,
            self.token_mint,
            EscrowError::InvalidRecipientAccount
        );
        require_keys_eq!(
            *destination_owner,
            *recipient,
            EscrowError::InvalidRecipientAccount
        );

        Ok(())
    }

    /// Closes the pool for good and returns the amount that was paid out.
    pub fn finalize(&mut self) -> Result<u64> {
        require!(!self.finalized, EscrowError::AlreadyFinalized);

        let paid = self.total_amount;
        self.total_amount = 0;
        self.finalized = true;

        Ok(paid)
    }
}
