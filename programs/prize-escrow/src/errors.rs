use anchor_lang::prelude::*;

#[error_code]
pub enum EscrowError {
    #[msg("Only the organizer can distribute winnings")]
    NotOrganizer,
    #[msg("Escrow has already started")]
    AlreadyStarted,
    #[msg("Contest has ended & closed to new entries")]
    ContestEnded,
    #[msg("Deposit amount must equal the set dues")]
    DuesMismatch,
    #[msg("Deposit amount must be greater than zero")]
    ZeroDeposit,
    #[msg("Total payout must equal total amount in escrow")]
    PayoutMismatch,
    #[msg("A recipient was not a depositor")]
    NotDepositor,
    #[msg("Escrow already finalized")]
    AlreadyFinalized,
    #[msg("Contest has not ended yet")]
    NotEnded,
    #[msg("Recipients and amounts must have the same length")]
    LengthMismatch,
    #[msg("Expected a deposit record and a token account for every recipient")]
    RecipientAccountsMismatch,
    #[msg("Recipient token account must hold the escrow mint and belong to the recipient")]
    InvalidRecipientAccount,
    #[msg("Organizer deposit and token accounts are required to join on creation")]
    OrganizerAccountsMissing,
    #[msg("Organizer deposit account is only accepted when joining on creation")]
    UnexpectedOrganizerDeposit,
    #[msg("Arithmetic overflow")]
    Overflow,
}
