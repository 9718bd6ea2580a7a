use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    #[msg("Vault state is already initialized for this owner")]
    AlreadyInitialized,
    #[msg("Signer is not the vault owner")]
    NotOwner,
    #[msg("Amount must be greater than zero and fit in the vault balance")]
    InvalidAmount,
    #[msg("Signer does not hold enough lamports")]
    InsufficientFunds,
    #[msg("Vault cannot cover the amount while keeping its rent reserve")]
    InsufficientVaultBalance,
    #[msg("Withdrawal is locked for 2 days after the last deposit")]
    TimelockActive,
}
