use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::constants::{ADMIN_SEED, TREASURY_SEED};
use crate::errors::ErrorCode;
use crate::events::*;
use crate::ledger::{create_program_account, create_vault};
use crate::pda::DerivedAuthority;
use crate::state::*;

/// One-time setup: admin singleton (admin = payer) plus the treasury for
/// `asset_type`. Fails with AlreadyExists if either record is present.
pub fn initialize(ctx: Context<Initialize>, asset_type: Pubkey) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let admin = ctx.accounts.payer.key();

    let admin_authority = DerivedAuthority::admin_state(ctx.program_id)?;
    let admin_state = AdminState {
        admin,
        bump: admin_authority.bump(),
        created_at: now,
    };
    create_program_account(
        &ctx.accounts.payer.to_account_info(),
        &ctx.accounts.admin_state.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        &admin_authority,
        AdminState::SPACE,
        &admin_state,
    )?;

    let treasury_vault = open_treasury(
        ctx.program_id,
        asset_type,
        now,
        TreasuryAccounts {
            payer: ctx.accounts.payer.to_account_info(),
            treasury_state: ctx.accounts.treasury_state.to_account_info(),
            treasury_vault: ctx.accounts.treasury_vault.to_account_info(),
            mint: ctx.accounts.mint.to_account_info(),
            token_program: ctx.accounts.token_program.to_account_info(),
            associated_token_program: ctx.accounts.associated_token_program.to_account_info(),
            system_program: ctx.accounts.system_program.to_account_info(),
        },
    )?;

    msg!("Program initialized. Admin: {}", admin);
    msg!("Treasury for mint {}: {}", asset_type, treasury_vault);

    emit!(ProgramInitialized {
        admin,
        asset_type,
        treasury_vault,
    });

    Ok(())
}

/// Admin only. Opens a treasury for an additional asset type.
pub fn register_treasury(ctx: Context<RegisterTreasury>, asset_type: Pubkey) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let treasury_vault = open_treasury(
        ctx.program_id,
        asset_type,
        now,
        TreasuryAccounts {
            payer: ctx.accounts.admin.to_account_info(),
            treasury_state: ctx.accounts.treasury_state.to_account_info(),
            treasury_vault: ctx.accounts.treasury_vault.to_account_info(),
            mint: ctx.accounts.mint.to_account_info(),
            token_program: ctx.accounts.token_program.to_account_info(),
            associated_token_program: ctx.accounts.associated_token_program.to_account_info(),
            system_program: ctx.accounts.system_program.to_account_info(),
        },
    )?;

    msg!("Registered treasury for mint {}: {}", asset_type, treasury_vault);

    emit!(TreasuryRegistered {
        asset_type,
        treasury_vault,
        admin: ctx.accounts.admin.key(),
    });

    Ok(())
}

/// Rotates the admin in place. The previous admin loses access as soon as
/// this commits.
pub fn update_admin(ctx: Context<UpdateAdmin>, new_admin: Pubkey) -> Result<()> {
    require!(new_admin != Pubkey::default(), ErrorCode::InvalidNewAdmin);

    let admin_state = &mut ctx.accounts.admin_state;
    require!(admin_state.admin != new_admin, ErrorCode::SameAdminUpdate);

    let old_admin = admin_state.admin;
    admin_state.admin = new_admin;

    msg!("Admin updated from {} to {}", old_admin, new_admin);

    emit!(AdminUpdated {
        old_admin,
        new_admin,
    });

    Ok(())
}

pub fn get_admin_info(ctx: Context<GetAdminInfo>) -> Result<AdminInfo> {
    let admin_state = &ctx.accounts.admin_state;
    msg!("Admin: {}, created at: {}", admin_state.admin, admin_state.created_at);
    Ok(AdminInfo {
        admin: admin_state.admin,
        created_at: admin_state.created_at,
    })
}

pub fn get_treasury_info(ctx: Context<GetTreasuryInfo>) -> Result<TreasuryInfo> {
    let treasury_state = &ctx.accounts.treasury_state;
    let balance = ctx.accounts.treasury_vault.amount;
    msg!(
        "Treasury - mint: {}, vault: {}, balance: {}",
        treasury_state.asset_type,
        treasury_state.treasury_vault,
        balance
    );
    Ok(TreasuryInfo {
        asset_type: treasury_state.asset_type,
        treasury_vault: treasury_state.treasury_vault,
        balance,
        created_at: treasury_state.created_at,
    })
}

struct TreasuryAccounts<'info> {
    payer: AccountInfo<'info>,
    treasury_state: AccountInfo<'info>,
    treasury_vault: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    associated_token_program: AccountInfo<'info>,
    system_program: AccountInfo<'info>,
}

/// Creates the treasury record for `asset_type` and its vault ATA.
/// Returns the vault address.
fn open_treasury(
    program_id: &Pubkey,
    asset_type: Pubkey,
    now: i64,
    accounts: TreasuryAccounts<'_>,
) -> Result<Pubkey> {
    let authority = DerivedAuthority::treasury(program_id, &asset_type)?;
    let treasury_vault = authority.vault_for(&asset_type);
    require_keys_eq!(accounts.treasury_vault.key(), treasury_vault, ErrorCode::AccountMismatch);

    let record = TreasuryState {
        asset_type,
        treasury_vault,
        bump: authority.bump(),
        created_at: now,
    };
    create_program_account(
        &accounts.payer,
        &accounts.treasury_state,
        &accounts.system_program,
        &authority,
        TreasuryState::SPACE,
        &record,
    )?;
    create_vault(
        &accounts.payer,
        &accounts.treasury_vault,
        &accounts.treasury_state,
        &accounts.mint,
        &accounts.system_program,
        &accounts.token_program,
        &accounts.associated_token_program,
    )?;

    Ok(treasury_vault)
}

#[derive(Accounts)]
#[instruction(asset_type: Pubkey)]
pub struct Initialize<'info> {
    /// CHECK: allocated in the handler at the PDA ["admin"].
    #[account(mut)]
    pub admin_state: UncheckedAccount<'info>,

    /// CHECK: allocated in the handler at the PDA ["treasury", asset_type].
    #[account(mut)]
    pub treasury_state: UncheckedAccount<'info>,

    /// CHECK: ATA created in the handler; key must equal ATA(treasury_state, asset_type).
    #[account(mut)]
    pub treasury_vault: UncheckedAccount<'info>,

    #[account(address = asset_type @ ErrorCode::InvalidMint)]
    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(asset_type: Pubkey)]
pub struct RegisterTreasury<'info> {
    #[account(
        seeds = [ADMIN_SEED],
        bump = admin_state.bump,
        has_one = admin @ ErrorCode::Unauthorized,
    )]
    pub admin_state: Account<'info, AdminState>,

    /// CHECK: allocated in the handler at the PDA ["treasury", asset_type].
    #[account(mut)]
    pub treasury_state: UncheckedAccount<'info>,

    /// CHECK: ATA created in the handler; key must equal ATA(treasury_state, asset_type).
    #[account(mut)]
    pub treasury_vault: UncheckedAccount<'info>,

    #[account(address = asset_type @ ErrorCode::InvalidMint)]
    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct UpdateAdmin<'info> {
    #[account(
        mut,
        seeds = [ADMIN_SEED],
        bump = admin_state.bump,
        has_one = admin @ ErrorCode::Unauthorized,
    )]
    pub admin_state: Account<'info, AdminState>,
    pub admin: Signer<'info>,
}

#[derive(Accounts)]
pub struct GetAdminInfo<'info> {
    #[account(
        seeds = [ADMIN_SEED],
        bump = admin_state.bump,
    )]
    pub admin_state: Account<'info, AdminState>,
}

#[derive(Accounts)]
pub struct GetTreasuryInfo<'info> {
    #[account(
        seeds = [TREASURY_SEED, treasury_state.asset_type.as_ref()],
        bump = treasury_state.bump,
    )]
    pub treasury_state: Account<'info, TreasuryState>,

    #[account(
        constraint = treasury_vault.key() == treasury_state.treasury_vault @ ErrorCode::AccountMismatch
    )]
    pub treasury_vault: Account<'info, TokenAccount>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct AdminInfo {
    pub admin: Pubkey,
    pub created_at: i64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct TreasuryInfo {
    pub asset_type: Pubkey,
    pub treasury_vault: Pubkey,
    pub balance: u64,
    pub created_at: i64,
}
