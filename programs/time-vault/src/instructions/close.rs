use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::constants::{CLOSE_POLICY, STATE_SEED, VAULT_SEED};
use crate::events::VaultClosed;
use crate::state::VaultState;

#[derive(Accounts)]
pub struct CloseVault<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    /// Anchor's close constraint returns the rent to `user` and zeroes the
    /// data once the handler succeeds.
    #[account(
        mut,
        seeds = [STATE_SEED, vault_state.owner.as_ref()],
        bump = vault_state.state_bump,
        close = user
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

pub fn close(ctx: Context<CloseVault>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.user.key();

    ctx.accounts
        .vault_state
        .check_close(&owner, now, CLOSE_POLICY)?;

    let amount = ctx.accounts.vault.lamports();
    if amount > 0 {
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
    }

    emit!(VaultClosed {
        owner,
        amount,
        timestamp: now,
    });

    msg!("Vault closed. Returned {} lamports to {}", amount, owner);
    Ok(())
}
