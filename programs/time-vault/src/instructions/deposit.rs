use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::constants::{STATE_SEED, VAULT_SEED};
use crate::events::DepositMade;
use crate::state::VaultState;

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    /// Seeds come from the stored owner, so a foreign signer still resolves
    /// the account and is turned away by the owner check.
    #[account(
        mut,
        seeds = [STATE_SEED, vault_state.owner.as_ref()],
        bump = vault_state.state_bump
    )]
    pub vault_state: Account<'info, VaultState>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault_state.key().as_ref()],
        bump = vault_state.vault_bump
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.user.key();

    let vault_balance = ctx.accounts.vault_state.check_deposit(
        &owner,
        amount,
        ctx.accounts.user.lamports(),
        ctx.accounts.vault.lamports(),
        Rent::get()?.minimum_balance(0),
    )?;

    transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.user.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        amount,
    )?;

    let unlocks_at = ctx.accounts.vault_state.record_deposit(now);

    emit!(DepositMade {
        owner,
        amount,
        vault_balance,
        unlocks_at,
        timestamp: now,
    });

    msg!("Deposited {} lamports. Vault balance: {}", amount, vault_balance);
    msg!("Funds locked until {}", unlocks_at);
    Ok(())
}
