use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};
use anchor_spl::associated_token::{self, Create};
use anchor_spl::token::TokenAccount;

use crate::errors::ErrorCode;
use crate::pda::DerivedAuthority;

/// Allocates `target` as a `space`-byte account owned by this program and
/// writes `record` into it. Used instead of `#[account(init)]` so that a
/// collision surfaces as `AlreadyExists` rather than a System program error.
pub fn create_program_account<'info, T: AccountSerialize>(
    payer: &AccountInfo<'info>,
    target: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    authority: &DerivedAuthority,
    space: usize,
    record: &T,
) -> Result<()> {
    require_keys_eq!(target.key(), authority.address(), ErrorCode::AccountMismatch);
    require!(
        target.data_is_empty() && target.owner == &system_program::ID,
        ErrorCode::AlreadyExists
    );

    let seeds = authority.signer_seeds();
    let signer = &[seeds.as_slice()];
    let required = Rent::get()?.minimum_balance(space);
    let current = target.lamports();

    if current == 0 {
        let cpi_ctx = CpiContext::new_with_signer(
            system_program.clone(),
            CreateAccount {
                from: payer.clone(),
                to: target.clone(),
            },
            signer,
        );
        system_program::create_account(cpi_ctx, required, space as u64, &crate::ID)?;
    } else {
        // Someone pre-funded the address; top up, then allocate and assign in place.
        let top_up = required.saturating_sub(current);
        if top_up > 0 {
            let cpi_ctx = CpiContext::new(
                system_program.clone(),
                Transfer {
                    from: payer.clone(),
                    to: target.clone(),
                },
            );
            system_program::transfer(cpi_ctx, top_up)?;
        }
        let cpi_ctx = CpiContext::new_with_signer(
            system_program.clone(),
            Allocate {
                account_to_allocate: target.clone(),
            },
            signer,
        );
        system_program::allocate(cpi_ctx, space as u64)?;
        let cpi_ctx = CpiContext::new_with_signer(
            system_program.clone(),
            Assign {
                account_to_assign: target.clone(),
            },
            signer,
        );
        system_program::assign(cpi_ctx, &crate::ID)?;
    }

    let mut data = target.try_borrow_mut_data()?;
    let mut dst: &mut [u8] = &mut data;
    record.try_serialize(&mut dst)?;
    Ok(())
}

/// Creates the ATA of `authority` for `mint`, rent paid by `payer`.
/// The vault address is public, so it may already have been opened by
/// anyone; an existing account is accepted only if it is a token account of
/// `token_program` held by `authority` for `mint`.
pub fn create_vault<'info>(
    payer: &AccountInfo<'info>,
    vault: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    token_program: &AccountInfo<'info>,
    associated_token_program: &AccountInfo<'info>,
) -> Result<()> {
    let cpi_ctx = CpiContext::new(
        associated_token_program.clone(),
        Create {
            payer: payer.clone(),
            associated_token: vault.clone(),
            authority: authority.clone(),
            mint: mint.clone(),
            system_program: system_program.clone(),
            token_program: token_program.clone(),
        },
    );
    associated_token::create_idempotent(cpi_ctx)?;

    require_keys_eq!(*vault.owner, token_program.key(), ErrorCode::AccountMismatch);
    let data = vault.try_borrow_data()?;
    let token_account = TokenAccount::try_deserialize(&mut &data[..])
        .map_err(|_| error!(ErrorCode::AccountMismatch))?;
    require_keys_eq!(token_account.owner, authority.key(), ErrorCode::AccountMismatch);
    require_keys_eq!(token_account.mint, mint.key(), ErrorCode::AccountMismatch);
    Ok(())
}
