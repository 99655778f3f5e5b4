use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Account already exists for this key.")]
    AlreadyExists,
    #[msg("No deposit record at this address.")]
    NotFound,
    #[msg("Amount must be greater than zero.")]
    InvalidAmount,
    #[msg("Token balance is lower than the requested amount.")]
    InsufficientFunds,
    #[msg("You are not authorized to perform this action.")]
    Unauthorized,
    #[msg("Supplied account does not match the derived or recorded address.")]
    AccountMismatch,
    #[msg("Batch arrays and account list lengths do not line up.")]
    MalformedBatch,
    #[msg("User ID cannot be empty.")]
    EmptyUserId,
    #[msg("User ID too long (max 32 bytes).")]
    UserIdTooLong,
    #[msg("Token mint does not match the vault or treasury asset type.")]
    InvalidMint,
    #[msg("New admin cannot be the default address.")]
    InvalidNewAdmin,
    #[msg("New admin is already the current admin.")]
    SameAdminUpdate,
    #[msg("Batch must contain at least one user.")]
    EmptyBatch,
    #[msg("Too many users in one batch (max 5).")]
    BatchTooLarge,
    #[msg("User ID appears more than once in the batch.")]
    DuplicateBatchEntry,
    #[msg("Arithmetic overflow.")]
    ArithmeticOverflow,
}
