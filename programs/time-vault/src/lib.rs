#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

declare_id!("8fegMuK3ZrhxZNBh9woL1Nx8aiqHUpwscQQhfAaSvA2C");

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;

pub use instructions::*;
pub use state::*;

#[program]
pub mod time_vault {
    use super::*;

    /// Create the vault state for the signer and fund the vault PDA up to
    /// its rent reserve.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    /// Move lamports into the vault and restart the two day lock.
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit(ctx, amount)
    }

    /// Move lamports back to the owner once the lock has elapsed.
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw(ctx, amount)
    }

    /// Drain the vault to the owner and close the vault state.
    pub fn close(ctx: Context<CloseVault>) -> Result<()> {
        instructions::close(ctx)
    }
}
