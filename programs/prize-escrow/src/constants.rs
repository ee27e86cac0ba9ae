use anchor_lang::prelude::*;

#[constant]
pub const REGISTRY_SEED: &[u8] = b"registry";

#[constant]
pub const ESCROW_SEED: &[u8] = b"escrow";

#[constant]
pub const VAULT_SEED: &[u8] = b"vault";

#[constant]
pub const DEPOSIT_SEED: &[u8] = b"deposit";

// A start time of zero leaves entry open until the end time
pub const NO_START_TIME: i64 = 0;

// Remaining accounts per payout line: deposit record, recipient token account
pub const ACCOUNTS_PER_RECIPIENT: usize = 2;
