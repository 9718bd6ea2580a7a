//! Address derivation for the vault state and vault PDAs.
//!
//! Clients use these to build instructions; the program itself re-derives
//! the same addresses through its `seeds`/`bump` account constraints.

use anchor_lang::prelude::*;

use crate::constants::{STATE_SEED, VAULT_SEED};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VaultAddresses {
    pub vault_state: Pubkey,
    pub state_bump: u8,
    pub vault: Pubkey,
    pub vault_bump: u8,
}

pub fn vault_state_address(owner: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STATE_SEED, owner.as_ref()], program_id)
}

pub fn vault_address(vault_state: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED, vault_state.as_ref()], program_id)
}

/// Both addresses for `owner`, in derivation order (owner -> state -> vault).
pub fn derive(owner: &Pubkey, program_id: &Pubkey) -> VaultAddresses {
    let (vault_state, state_bump) = vault_state_address(owner, program_id);
    let (vault, vault_bump) = vault_address(&vault_state, program_id);
    VaultAddresses {
        vault_state,
        state_bump,
        vault,
        vault_bump,
    }
}
