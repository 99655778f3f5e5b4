use anchor_lang::prelude::*;

/// Per-user deposit record. Lives at the PDA `["deposit", user_id]` and is
/// the token authority of its own vault ATA.
#[account]
pub struct UserDeposit {
    pub user_id: String,
    /// Payer that created the record.
    pub owner: Pubkey,
    /// ATA of (this record, mint).
    pub vault: Pubkey,
    pub mint: Pubkey,
    pub bump: u8,
    pub created_at: i64,
}

impl UserDeposit {
    pub fn space(user_id: &str) -> usize {
        8 +                     // discriminator
            4 + user_id.len() + // string prefix + bytes
            32 +                // owner
            32 +                // vault
            32 +                // mint
            1 +                 // bump
            8                   // created_at
    }
}
