use anchor_lang::prelude::*;

/// Amount one identity has put into one escrow. Repeated joins accumulate.
#[account]
pub struct Deposit {
    pub escrow: Pubkey,
    pub depositor: Pubkey,
    pub amount: u64,
    pub bump: u8,
}

impl Deposit {
    pub const LEN: usize = 32  // escrow
        + 32  // depositor
        + 8   // amount
        + 1;  // bump

    pub fn is_bound(&self) -> bool {
        self.escrow != Pubkey::default()
    }

    /// Ties a freshly created record to its escrow and depositor.
    /// A record that is already bound keeps its owner and amount.
    pub fn bind(&mut self, escrow: Pubkey, depositor: Pubkey, bump: u8) {
        if self.is_bound() {
            return;
        }
        self.escrow = escrow;
        self.depositor = depositor;
        self.amount = 0;
        self.bump = bump;
    }

    /// Only a positive recorded amount makes someone eligible for a payout.
    pub fn is_depositor_of(&self, escrow: &Pubkey, who: &Pubkey) -> bool {
        self.escrow == *escrow && self.depositor == *who && self.amount > 0
    }
}
