use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token};
use crate::errors::ErrorCode;
use crate::events::*;
use crate::ledger::{create_program_account, create_vault};
use crate::pda::{DerivedAddress, DerivedAuthority};
use crate::state::*;

/// Read-only: record address and bump for `user_id`, so clients can build
/// the creation transaction up front.
pub fn derive_user_address(ctx: Context<DeriveUserAddress>, user_id: String) -> Result<DerivedAddress> {
    let authority = DerivedAuthority::user_deposit(ctx.program_id, &user_id)?;
    msg!("Record address for user '{}': {}", user_id, authority.address());
    Ok(DerivedAddress::from(&authority))
}

/// Creates the user's record and its vault ATA in one instruction.
/// The record PDA is the vault's token authority.
pub fn create_user_deposit_account(
    ctx: Context<CreateUserDepositAccount>,
    user_id: String,
) -> Result<CreateAccountResult> {
    let authority = DerivedAuthority::user_deposit(ctx.program_id, &user_id)?;
    let mint = ctx.accounts.mint.key();
    let vault = authority.vault_for(&mint);
    require_keys_eq!(ctx.accounts.user_vault.key(), vault, ErrorCode::AccountMismatch);

    let owner = ctx.accounts.payer.key();
    let record = UserDeposit {
        user_id: user_id.clone(),
        owner,
        vault,
        mint,
        bump: authority.bump(),
        created_at: Clock::get()?.unix_timestamp,
    };

    let payer = ctx.accounts.payer.to_account_info();
    let user_deposit = ctx.accounts.user_deposit.to_account_info();
    let system_program = ctx.accounts.system_program.to_account_info();

    create_program_account(
        &payer,
        &user_deposit,
        &system_program,
        &authority,
        UserDeposit::space(&user_id),
        &record,
    )?;
    create_vault(
        &payer,
        &ctx.accounts.user_vault.to_account_info(),
        &user_deposit,
        &ctx.accounts.mint.to_account_info(),
        &system_program,
        &ctx.accounts.token_program.to_account_info(),
        &ctx.accounts.associated_token_program.to_account_info(),
    )?;

    let record_address = authority.address();
    msg!("Created deposit record for user '{}': {}", user_id, record_address);
    msg!("Vault {} (authority {})", vault, record_address);

    emit!(UserDepositAccountCreated {
        user_id: user_id.clone(),
        record: record_address,
        vault,
        owner,
    });

    Ok(CreateAccountResult {
        record_address,
        vault_address: vault,
        user_id,
    })
}

pub fn get_user_deposit_info(ctx: Context<GetUserDepositInfo>) -> Result<UserDepositInfo> {
    let account = ctx.accounts.user_deposit.to_account_info();
    require!(
        account.owner == ctx.program_id && !account.data_is_empty(),
        ErrorCode::NotFound
    );

    let data = account.try_borrow_data()?;
    let record = UserDeposit::try_deserialize(&mut &data[..])
        .map_err(|_| error!(ErrorCode::NotFound))?;

    msg!("Record {} - user: {}, vault: {}", account.key(), record.user_id, record.vault);

    Ok(UserDepositInfo {
        record_address: account.key(),
        user_id: record.user_id,
        owner: record.owner,
        vault: record.vault,
        mint: record.mint,
        created_at: record.created_at,
    })
}

#[derive(Accounts)]
pub struct DeriveUserAddress {}

#[derive(Accounts)]
pub struct CreateUserDepositAccount<'info> {
    /// CHECK: allocated in the handler; key must equal the PDA derived from user_id.
    #[account(mut)]
    pub user_deposit: UncheckedAccount<'info>,

    /// CHECK: ATA created in the handler; key must equal ATA(user_deposit, mint).
    #[account(mut)]
    pub user_vault: UncheckedAccount<'info>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct GetUserDepositInfo<'info> {
    /// CHECK: ownership and discriminator checked in the handler so a miss reports NotFound.
    pub user_deposit: UncheckedAccount<'info>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct CreateAccountResult {
    pub record_address: Pubkey,
    pub vault_address: Pubkey,
    pub user_id: String,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct UserDepositInfo {
    pub record_address: Pubkey,
    pub user_id: String,
    pub owner: Pubkey,
    pub vault: Pubkey,
    pub mint: Pubkey,
    pub created_at: i64,
}
