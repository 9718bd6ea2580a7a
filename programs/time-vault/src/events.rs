use anchor_lang::prelude::*;

#[event]
pub struct VaultInitialized {
    pub owner: Pubkey,
    pub vault_state: Pubkey,
    pub vault: Pubkey,
    /// Lamports moved into the vault to make it rent exempt.
    pub reserve: u64,
    pub timestamp: i64,
}

#[event]
pub struct DepositMade {
    pub owner: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
    pub unlocks_at: i64,
    pub timestamp: i64,
}

#[event]
pub struct WithdrawMade {
    pub owner: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
    pub timestamp: i64,
}

#[event]
pub struct VaultClosed {
    pub owner: Pubkey,
    /// Everything that was left in the vault, reserve included.
    pub amount: u64,
    pub timestamp: i64,
}
