use anchor_lang::prelude::*;

#[event]
pub struct ProgramInitialized {
    pub admin: Pubkey,
    pub asset_type: Pubkey,
    pub treasury_vault: Pubkey,
}

#[event]
pub struct TreasuryRegistered {
    pub asset_type: Pubkey,
    pub treasury_vault: Pubkey,
    pub admin: Pubkey,
}

#[event]
pub struct UserDepositAccountCreated {
    pub user_id: String,
    pub record: Pubkey,
    pub vault: Pubkey,
    pub owner: Pubkey,
}

#[event]
pub struct TokensDeposited {
    pub user_id: String,
    pub amount: u64,
    pub depositor: Pubkey,
    pub vault: Pubkey,
    pub vault_balance: u64,
}

#[event]
pub struct AdminTransferredToTreasury {
    pub user_id: String,
    pub amount: u64,
    pub admin: Pubkey,
    pub from_vault: Pubkey,
    pub treasury_vault: Pubkey,
    pub remaining_balance: u64,
}

#[event]
pub struct AdminUpdated {
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
}

#[event]
pub struct BatchTransferCompleted {
    pub admin: Pubkey,
    pub transfers: u8,
    pub total: u64,
}
