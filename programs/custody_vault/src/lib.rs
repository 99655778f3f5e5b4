use anchor_lang::prelude::*;

pub mod batch;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod pda;
pub mod state;

use instructions::*;
use pda::DerivedAddress;

declare_id!("4S4yRUaox9VVenTacrS9EfAY6zmEmccSEsUnERCuxArw");

#[program]
pub mod custody_vault {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, asset_type: Pubkey) -> Result<()> {
        instructions::admin::initialize(ctx, asset_type)
    }

    pub fn register_treasury(ctx: Context<RegisterTreasury>, asset_type: Pubkey) -> Result<()> {
        instructions::admin::register_treasury(ctx, asset_type)
    }

    pub fn update_admin(ctx: Context<UpdateAdmin>, new_admin: Pubkey) -> Result<()> {
        instructions::admin::update_admin(ctx, new_admin)
    }

    pub fn get_admin_info(ctx: Context<GetAdminInfo>) -> Result<AdminInfo> {
        instructions::admin::get_admin_info(ctx)
    }

    pub fn get_treasury_info(ctx: Context<GetTreasuryInfo>) -> Result<TreasuryInfo> {
        instructions::admin::get_treasury_info(ctx)
    }

    pub fn derive_user_address(ctx: Context<DeriveUserAddress>, user_id: String) -> Result<DerivedAddress> {
        instructions::user::derive_user_address(ctx, user_id)
    }

    pub fn create_user_deposit_account(
        ctx: Context<CreateUserDepositAccount>,
        user_id: String,
    ) -> Result<CreateAccountResult> {
        instructions::user::create_user_deposit_account(ctx, user_id)
    }

    pub fn get_user_deposit_info(ctx: Context<GetUserDepositInfo>) -> Result<UserDepositInfo> {
        instructions::user::get_user_deposit_info(ctx)
    }

    pub fn deposit_tokens(ctx: Context<DepositTokens>, user_id: String, amount: u64) -> Result<u64> {
        instructions::deposit::deposit_tokens(ctx, user_id, amount)
    }

    pub fn admin_transfer_to_treasury(
        ctx: Context<AdminTransferToTreasury>,
        user_id: String,
        amount: u64,
    ) -> Result<SweepResult> {
        instructions::sweep::admin_transfer_to_treasury(ctx, user_id, amount)
    }

    pub fn admin_batch_transfer_to_treasury<'info>(
        ctx: Context<'_, '_, 'info, 'info, AdminBatchTransferToTreasury<'info>>,
        user_ids: Vec<String>,
        amounts: Vec<u64>,
    ) -> Result<BatchResult> {
        instructions::sweep::admin_batch_transfer_to_treasury(ctx, user_ids, amounts)
    }
}
