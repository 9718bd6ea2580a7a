use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::constants::{STATE_SEED, VAULT_SEED};
use crate::events::WithdrawMade;
use crate::state::VaultState;

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
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

pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.user.key();

    let vault_balance = ctx.accounts.vault_state.check_withdraw(
        &owner,
        amount,
        now,
        ctx.accounts.vault.lamports(),
        Rent::get()?.minimum_balance(0),
    )?;

    let vault_state_key = ctx.accounts.vault_state.key();
    let bump = [ctx.accounts.vault_state.vault_bump];
    let seeds: &[&[u8]] = &[VAULT_SEED, vault_state_key.as_ref(), &bump];
    let signer_seeds = &[seeds];

    transfer(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.user.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(WithdrawMade {
        owner,
        amount,
        vault_balance,
        timestamp: now,
    });

    msg!("Withdrew {} lamports. Vault balance: {}", amount, vault_balance);
    Ok(())
}
