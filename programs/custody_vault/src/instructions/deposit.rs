use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, TransferChecked};
use crate::constants::USER_DEPOSIT_SEED;
use crate::errors::ErrorCode;
use crate::events::*;
use crate::state::*;

/// Credits a user's vault from a token account the depositor controls.
/// Anyone may deposit into any vault. Returns the vault balance afterwards.
pub fn deposit_tokens(ctx: Context<DepositTokens>, user_id: String, amount: u64) -> Result<u64> {
    require!(amount > 0, ErrorCode::InvalidAmount);
    require!(ctx.accounts.source.amount >= amount, ErrorCode::InsufficientFunds);

    let cpi_accounts = TransferChecked {
        from: ctx.accounts.source.to_account_info(),
        mint: ctx.accounts.mint.to_account_info(),
        to: ctx.accounts.user_vault.to_account_info(),
        authority: ctx.accounts.depositor.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer_checked(cpi_ctx, amount, ctx.accounts.mint.decimals)?;

    ctx.accounts.user_vault.reload()?;
    let vault_balance = ctx.accounts.user_vault.amount;
    msg!("Deposited {} tokens for user '{}'. Vault balance: {}", amount, user_id, vault_balance);

    emit!(TokensDeposited {
        user_id,
        amount,
        depositor: ctx.accounts.depositor.key(),
        vault: ctx.accounts.user_vault.key(),
        vault_balance,
    });

    Ok(vault_balance)
}

#[derive(Accounts)]
#[instruction(user_id: String)]
pub struct DepositTokens<'info> {
    #[account(
        seeds = [USER_DEPOSIT_SEED, user_id.as_bytes()],
        bump = user_deposit.bump,
    )]
    pub user_deposit: Account<'info, UserDeposit>,

    /// Vault recorded for this user. Guards against a substituted destination.
    #[account(
        mut,
        constraint = user_vault.key() == user_deposit.vault @ ErrorCode::AccountMismatch,
    )]
    pub user_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = depositor,
    )]
    pub source: Account<'info, TokenAccount>,

    #[account(
        constraint = mint.key() == user_deposit.mint @ ErrorCode::InvalidMint
    )]
    pub mint: Account<'info, Mint>,

    pub depositor: Signer<'info>,

    pub token_program: Program<'info, Token>,
}
