//! Validation of batch sweeps.
//!
//! The caller supplies `user_ids`, `amounts` and a flat account list laid out
//! as `[record_0, vault_0, record_1, vault_1, ...]`. The list is untrusted.
//! [`plan_batch`] checks the overall shape up front. Each entry is then
//! matched positionally against the addresses derived from its user id by
//! [`BatchPlan::check_entry`] just before it executes, so the first failing
//! index is the one reported.

use std::collections::BTreeSet;

use anchor_lang::prelude::*;

use crate::constants::MAX_BATCH_USERS;
use crate::errors::ErrorCode;
use crate::pda::DerivedAuthority;

/// One entry of the remaining-accounts list, reduced to what planning needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccountSlot {
    pub key: Pubkey,
    pub is_writable: bool,
}

impl From<&AccountInfo<'_>> for AccountSlot {
    fn from(info: &AccountInfo<'_>) -> Self {
        Self {
            key: *info.key,
            is_writable: info.is_writable,
        }
    }
}

#[derive(Debug)]
pub struct BatchEntry<'a> {
    pub user_id: &'a str,
    pub amount: u64,
    pub authority: DerivedAuthority,
    pub vault: Pubkey,
    /// Index of the record slot; the vault slot follows it.
    pub slot: usize,
}

#[derive(Debug)]
pub struct BatchPlan<'a> {
    program_id: Pubkey,
    mint: Pubkey,
    user_ids: &'a [String],
    amounts: &'a [u64],
    seen: BTreeSet<&'a str>,
    total: u64,
}

pub fn plan_batch<'a>(
    program_id: &Pubkey,
    mint: &Pubkey,
    user_ids: &'a [String],
    amounts: &'a [u64],
    slot_count: usize,
) -> Result<BatchPlan<'a>> {
    require!(!user_ids.is_empty(), ErrorCode::EmptyBatch);
    require!(user_ids.len() <= MAX_BATCH_USERS, ErrorCode::BatchTooLarge);
    require!(user_ids.len() == amounts.len(), ErrorCode::MalformedBatch);
    require!(slot_count == user_ids.len() * 2, ErrorCode::MalformedBatch);

    Ok(BatchPlan {
        program_id: *program_id,
        mint: *mint,
        user_ids,
        amounts,
        seen: BTreeSet::new(),
        total: 0,
    })
}

impl<'a> BatchPlan<'a> {
    pub fn entry_count(&self) -> usize {
        self.user_ids.len()
    }

    /// Sum of the amounts of every entry checked so far.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Validates entry `i` against its `(record, vault)` slots.
    pub fn check_entry(
        &mut self,
        i: usize,
        record: &AccountSlot,
        vault: &AccountSlot,
    ) -> Result<BatchEntry<'a>> {
        let user_ids = self.user_ids;
        let user_id = user_ids[i].as_str();
        let amount = self.amounts[i];

        require!(amount > 0, ErrorCode::InvalidAmount);
        require!(self.seen.insert(user_id), ErrorCode::DuplicateBatchEntry);

        let authority = DerivedAuthority::user_deposit(&self.program_id, user_id)?;
        let vault_key = authority.vault_for(&self.mint);

        if record.key != authority.address() || vault.key != vault_key {
            msg!("Batch entry {} ('{}') has mismatched accounts", i, user_id);
            return err!(ErrorCode::AccountMismatch);
        }
        require!(vault.is_writable, ErrorCode::AccountMismatch);

        self.total = self.total.checked_add(amount).ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(BatchEntry {
            user_id,
            amount,
            authority,
            vault: vault_key,
            slot: 2 * i,
        })
    }
}
