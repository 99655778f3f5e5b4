//! Deterministic addressing for every account the program owns or controls.
//!
//! A [`DerivedAuthority`] is an off-curve address plus the seeds that produced
//! it. Nothing outside the program can sign for it; the program signs by
//! handing [`DerivedAuthority::signer_seeds`] to `CpiContext::new_with_signer`.
//! Externally held keys never take this type and only reach the program as
//! `Signer<'info>` accounts.

use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;

use crate::constants::{ADMIN_SEED, MAX_USER_ID_LEN, TREASURY_SEED, USER_DEPOSIT_SEED};
use crate::errors::ErrorCode;

/// Address and bump returned by the `derive_user_address` view.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DerivedAddress {
    pub address: Pubkey,
    pub bump: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivedAuthority {
    address: Pubkey,
    bump: u8,
    seeds: Vec<Vec<u8>>,
}

impl DerivedAuthority {
    fn derive(program_id: &Pubkey, seeds: Vec<Vec<u8>>) -> Result<Self> {
        let refs: Vec<&[u8]> = seeds.iter().map(Vec::as_slice).collect();
        let (address, bump) = Pubkey::try_find_program_address(&refs, program_id)
            .ok_or(ErrorCode::AccountMismatch)?;
        Ok(Self { address, bump, seeds })
    }

    /// Record authority for one user: `["deposit", user_id]`.
    pub fn user_deposit(program_id: &Pubkey, user_id: &str) -> Result<Self> {
        validate_user_id(user_id)?;
        Self::derive(
            program_id,
            vec![USER_DEPOSIT_SEED.to_vec(), user_id.as_bytes().to_vec()],
        )
    }

    /// The admin singleton: `["admin"]`.
    pub fn admin_state(program_id: &Pubkey) -> Result<Self> {
        Self::derive(program_id, vec![ADMIN_SEED.to_vec()])
    }

    /// Treasury record for one asset type: `["treasury", mint]`.
    pub fn treasury(program_id: &Pubkey, mint: &Pubkey) -> Result<Self> {
        Self::derive(program_id, vec![TREASURY_SEED.to_vec(), mint.to_bytes().to_vec()])
    }

    pub fn address(&self) -> Pubkey {
        self.address
    }

    pub fn bump(&self) -> u8 {
        self.bump
    }

    /// Vault (ATA) held by this authority for `mint`.
    pub fn vault_for(&self, mint: &Pubkey) -> Pubkey {
        get_associated_token_address(&self.address, mint)
    }

    /// Seeds followed by the bump, in the shape `invoke_signed` expects.
    pub fn signer_seeds(&self) -> Vec<&[u8]> {
        self.seeds
            .iter()
            .map(Vec::as_slice)
            .chain(std::iter::once(std::slice::from_ref(&self.bump)))
            .collect()
    }

    /// Re-derives the address from the stored seeds and bump.
    pub fn verify(&self, program_id: &Pubkey) -> bool {
        Pubkey::create_program_address(&self.signer_seeds(), program_id)
            .map(|key| key == self.address)
            .unwrap_or(false)
    }
}

impl From<&DerivedAuthority> for DerivedAddress {
    fn from(authority: &DerivedAuthority) -> Self {
        Self {
            address: authority.address,
            bump: authority.bump,
        }
    }
}

pub fn validate_user_id(user_id: &str) -> Result<()> {
    require!(!user_id.is_empty(), ErrorCode::EmptyUserId);
    require!(user_id.len() <= MAX_USER_ID_LEN, ErrorCode::UserIdTooLong);
    Ok(())
}
