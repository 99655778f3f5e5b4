use anchor_lang::prelude::*;

/// Program-wide admin singleton at the PDA `["admin"]`.
/// `admin` is the only field that changes after initialization.
#[account]
pub struct AdminState {
    pub admin: Pubkey,
    pub bump: u8,
    pub created_at: i64,
}

impl AdminState {
    // 8 discriminator + 32 admin + 1 bump + 8 created_at
    pub const SPACE: usize = 8 + 32 + 1 + 8;
}
