use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, TransferChecked};
use crate::batch::{plan_batch, AccountSlot};
use crate::constants::{ADMIN_SEED, TREASURY_SEED, USER_DEPOSIT_SEED};
use crate::errors::ErrorCode;
use crate::events::*;
use crate::pda::DerivedAuthority;
use crate::state::*;

/// Moves `amount` from one user vault to the treasury vault, signed by the
/// vault's record PDA. Returns the vault balance left after the transfer.
/// Shared by the single and batch sweeps.
pub(crate) fn sweep_to_treasury<'info>(
    token_program: &AccountInfo<'info>,
    mint: &Account<'info, Mint>,
    user_vault: &Account<'info, TokenAccount>,
    treasury_vault: &AccountInfo<'info>,
    record: &AccountInfo<'info>,
    authority: &DerivedAuthority,
    amount: u64,
) -> Result<u64> {
    require!(amount > 0, ErrorCode::InvalidAmount);
    require!(user_vault.amount >= amount, ErrorCode::InsufficientFunds);
    require_keys_eq!(record.key(), authority.address(), ErrorCode::AccountMismatch);

    let seeds = authority.signer_seeds();
    let signer = &[seeds.as_slice()];

    let cpi_accounts = TransferChecked {
        from: user_vault.to_account_info(),
        mint: mint.to_account_info(),
        to: treasury_vault.clone(),
        authority: record.clone(),
    };
    let cpi_ctx = CpiContext::new_with_signer(token_program.clone(), cpi_accounts, signer);
    token::transfer_checked(cpi_ctx, amount, mint.decimals)?;

    Ok(user_vault.amount - amount)
}

pub fn admin_transfer_to_treasury(
    ctx: Context<AdminTransferToTreasury>,
    user_id: String,
    amount: u64,
) -> Result<SweepResult> {
    let authority = DerivedAuthority::user_deposit(ctx.program_id, &user_id)?;

    let remaining_balance = sweep_to_treasury(
        &ctx.accounts.token_program.to_account_info(),
        &ctx.accounts.mint,
        &ctx.accounts.user_vault,
        &ctx.accounts.treasury_vault.to_account_info(),
        &ctx.accounts.user_deposit.to_account_info(),
        &authority,
        amount,
    )?;

    ctx.accounts.treasury_vault.reload()?;
    let treasury_balance = ctx.accounts.treasury_vault.amount;

    msg!("Admin transferred {} tokens from user '{}' to treasury", amount, user_id);
    msg!("User remaining balance: {}", remaining_balance);

    emit!(AdminTransferredToTreasury {
        user_id,
        amount,
        admin: ctx.accounts.admin.key(),
        from_vault: ctx.accounts.user_vault.key(),
        treasury_vault: ctx.accounts.treasury_vault.key(),
        remaining_balance,
    });

    Ok(SweepResult {
        remaining_balance,
        treasury_balance,
    })
}

/// Sweeps several users in one instruction. `remaining_accounts` holds
/// `[record_0, vault_0, record_1, vault_1, ...]` aligned with `user_ids`.
/// Entries are checked and executed in order; the first failure aborts the
/// instruction and the runtime discards earlier transfers.
pub fn admin_batch_transfer_to_treasury<'info>(
    ctx: Context<'_, '_, 'info, 'info, AdminBatchTransferToTreasury<'info>>,
    user_ids: Vec<String>,
    amounts: Vec<u64>,
) -> Result<BatchResult> {
    let mint_key = ctx.accounts.mint.key();
    let slots: Vec<AccountSlot> = ctx.remaining_accounts.iter().map(AccountSlot::from).collect();
    let mut plan = plan_batch(ctx.program_id, &mint_key, &user_ids, &amounts, slots.len())?;

    let admin = ctx.accounts.admin.key();
    let token_program = ctx.accounts.token_program.to_account_info();
    let treasury_vault = ctx.accounts.treasury_vault.to_account_info();

    for i in 0..plan.entry_count() {
        let entry = plan.check_entry(i, &slots[2 * i], &slots[2 * i + 1])?;
        let record_info = &ctx.remaining_accounts[entry.slot];
        let vault_info = &ctx.remaining_accounts[entry.slot + 1];

        let record: Account<'info, UserDeposit> = Account::try_from(record_info)?;
        let user_vault: Account<'info, TokenAccount> = Account::try_from(vault_info)?;
        require!(record.bump == entry.authority.bump(), ErrorCode::AccountMismatch);
        require_keys_eq!(record.vault, entry.vault, ErrorCode::AccountMismatch);
        require_keys_eq!(record.mint, mint_key, ErrorCode::InvalidMint);

        let remaining_balance = sweep_to_treasury(
            &token_program,
            &ctx.accounts.mint,
            &user_vault,
            &treasury_vault,
            record_info,
            &entry.authority,
            entry.amount,
        )?;

        msg!(
            "Transferred {} tokens from user '{}' (vault: {}) to treasury",
            entry.amount,
            entry.user_id,
            entry.vault
        );

        emit!(AdminTransferredToTreasury {
            user_id: entry.user_id.to_string(),
            amount: entry.amount,
            admin,
            from_vault: entry.vault,
            treasury_vault: treasury_vault.key(),
            remaining_balance,
        });
    }

    ctx.accounts.treasury_vault.reload()?;
    let treasury_balance = ctx.accounts.treasury_vault.amount;
    // plan_batch caps entries at MAX_BATCH_USERS.
    let transfers = plan.entry_count() as u8;
    let total = plan.total();

    msg!("Batch transfer completed. Total transferred: {}", total);

    emit!(BatchTransferCompleted {
        admin,
        transfers,
        total,
    });

    Ok(BatchResult {
        transfers,
        total,
        treasury_balance,
    })
}

#[derive(Accounts)]
#[instruction(user_id: String)]
pub struct AdminTransferToTreasury<'info> {
    #[account(
        seeds = [ADMIN_SEED],
        bump = admin_state.bump,
        has_one = admin @ ErrorCode::Unauthorized,
    )]
    pub admin_state: Account<'info, AdminState>,

    #[account(
        seeds = [TREASURY_SEED, mint.key().as_ref()],
        bump = treasury_state.bump,
    )]
    pub treasury_state: Account<'info, TreasuryState>,

    #[account(
        seeds = [USER_DEPOSIT_SEED, user_id.as_bytes()],
        bump = user_deposit.bump,
        constraint = user_deposit.mint == mint.key() @ ErrorCode::InvalidMint,
    )]
    pub user_deposit: Account<'info, UserDeposit>,

    #[account(
        mut,
        constraint = user_vault.key() == user_deposit.vault @ ErrorCode::AccountMismatch,
    )]
    pub user_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = treasury_vault.key() == treasury_state.treasury_vault @ ErrorCode::AccountMismatch,
    )]
    pub treasury_vault: Account<'info, TokenAccount>,

    #[account(
        constraint = mint.key() == treasury_state.asset_type @ ErrorCode::InvalidMint
    )]
    pub mint: Account<'info, Mint>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct AdminBatchTransferToTreasury<'info> {
    #[account(
        seeds = [ADMIN_SEED],
        bump = admin_state.bump,
        has_one = admin @ ErrorCode::Unauthorized,
    )]
    pub admin_state: Account<'info, AdminState>,

    #[account(
        seeds = [TREASURY_SEED, mint.key().as_ref()],
        bump = treasury_state.bump,
    )]
    pub treasury_state: Account<'info, TreasuryState>,

    #[account(
        mut,
        constraint = treasury_vault.key() == treasury_state.treasury_vault @ ErrorCode::AccountMismatch,
    )]
    pub treasury_vault: Account<'info, TokenAccount>,

    #[account(
        constraint = mint.key() == treasury_state.asset_type @ ErrorCode::InvalidMint
    )]
    pub mint: Account<'info, Mint>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    // remaining_accounts: (UserDeposit, vault) pairs
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SweepResult {
    pub remaining_balance: u64,
    pub treasury_balance: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchResult {
    pub transfers: u8,
    pub total: u64,
    pub treasury_balance: u64,
}
