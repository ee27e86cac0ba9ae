use anchor_lang::prelude::*;

#[event]
pub struct EscrowCreated {
    pub escrow_id: u64,
    pub escrow: Pubkey,
    pub organizer: Pubkey,
    pub token_mint: Pubkey,
    pub dues: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub timestamp: i64,
}

#[event]
pub struct EscrowJoined {
    pub escrow_id: u64,
    pub depositor: Pubkey,
    pub amount: u64,
    pub total_amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct WinningsDistributed {
    pub escrow_id: u64,
    pub organizer: Pubkey,
    pub recipients: u32,
    pub amount: u64,
    pub timestamp: i64,
}
