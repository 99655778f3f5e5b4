use anchor_lang::prelude::*;

/// Treasury record for one asset type, at the PDA `["treasury", mint]`.
#[account]
pub struct TreasuryState {
    pub asset_type: Pubkey,
    /// ATA of (this record, asset_type). Receives every sweep.
    pub treasury_vault: Pubkey,
    pub bump: u8,
    pub created_at: i64,
}

impl TreasuryState {
    // 8 discriminator + 32 asset_type + 32 treasury_vault + 1 bump + 8 created_at
    pub const SPACE: usize = 8 + 32 + 32 + 1 + 8;
}
