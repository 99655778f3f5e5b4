// PDA namespace tags
pub const USER_DEPOSIT_SEED: &[u8] = b"deposit";
pub const ADMIN_SEED: &[u8] = b"admin";
pub const TREASURY_SEED: &[u8] = b"treasury";

/// Upper bound on a user id in bytes. The id is used verbatim as a PDA seed,
/// and the runtime rejects seeds longer than 32 bytes.
pub const MAX_USER_ID_LEN: usize = 32;

/// Entries per batch sweep. Each entry costs one token CPI plus two account
/// loads, which keeps a full batch inside the default compute budget.
pub const MAX_BATCH_USERS: usize = 5;
