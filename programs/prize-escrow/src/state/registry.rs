use anchor_lang::prelude::*;

use crate::errors::EscrowError;

/// Global counter handing out escrow ids. Ids start at 0 and are never reused.
#[account]
pub struct EscrowRegistry {
    pub next_escrow_id: u64,
    pub bump: u8,
}

impl EscrowRegistry {
    pub const LEN: usize = 8  // next_escrow_id
        + 1;  // bump

    pub fn allocate_id(&mut self) -> Result<u64> {
        let escrow_id = self.next_escrow_id;
        self.next_escrow_id = escrow_id
            .checked_add(1)
            .ok_or(EscrowError::Overflow)?;
        Ok(escrow_id)
    }
}
