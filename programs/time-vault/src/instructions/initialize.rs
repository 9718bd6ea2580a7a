use anchor_lang::prelude::*;
use anchor_lang::system_program::{
    allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount, Transfer,
};

use crate::constants::{STATE_SEED, VAULT_SEED};
use crate::events::VaultInitialized;
use crate::state::{initialize_cost, VaultState};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    /// CHECK: address pinned by the seeds. The handler creates and writes the
    /// account itself, after pricing both reserves against the signer, so a
    /// short signer fails with `InsufficientFunds` and a repeat call fails
    /// with `AlreadyInitialized`.
    #[account(
        mut,
        seeds = [STATE_SEED, user.key().as_ref()],
        bump
    )]
    pub vault_state: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault_state.key().as_ref()],
        bump
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let owner = ctx.accounts.user.key();
    let vault = ctx.accounts.vault.key();
    let state_info = ctx.accounts.vault_state.to_account_info();

    let mut state = if state_info.data_is_empty() {
        VaultState::default()
    } else {
        VaultState::try_deserialize(&mut &state_info.try_borrow_data()?[..])?
    };
    state.initialize(owner, vault, ctx.bumps.vault_state, ctx.bumps.vault)?;

    let rent = Rent::get()?;
    let cost = initialize_cost(
        ctx.accounts.user.lamports(),
        state_info.lamports(),
        ctx.accounts.vault.lamports(),
        rent.minimum_balance(VaultState::LEN),
        rent.minimum_balance(0),
    )?;

    let bump = [ctx.bumps.vault_state];
    let seeds: &[&[u8]] = &[STATE_SEED, owner.as_ref(), &bump];
    let signer_seeds = &[seeds];
    let system_program = ctx.accounts.system_program.to_account_info();

    if state_info.lamports() == 0 {
        create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                CreateAccount {
                    from: ctx.accounts.user.to_account_info(),
                    to: state_info.clone(),
                },
                signer_seeds,
            ),
            cost.state_rent,
            VaultState::LEN as u64,
            &crate::ID,
        )?;
    } else {
        // Someone sent lamports to the address first; create_account would refuse it.
        if cost.state_rent > 0 {
            transfer(
                CpiContext::new(
                    system_program.clone(),
                    Transfer {
                        from: ctx.accounts.user.to_account_info(),
                        to: state_info.clone(),
                    },
                ),
                cost.state_rent,
            )?;
        }
        allocate(
            CpiContext::new_with_signer(
                system_program.clone(),
                Allocate {
                    account_to_allocate: state_info.clone(),
                },
                signer_seeds,
            ),
            VaultState::LEN as u64,
        )?;
        assign(
            CpiContext::new_with_signer(
                system_program.clone(),
                Assign {
                    account_to_assign: state_info.clone(),
                },
                signer_seeds,
            ),
            &crate::ID,
        )?;
    }

    {
        let mut data = state_info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        state.try_serialize(&mut writer)?;
    }

    if cost.vault_reserve > 0 {
        transfer(
            CpiContext::new(
                system_program,
                Transfer {
                    from: ctx.accounts.user.to_account_info(),
                    to: ctx.accounts.vault.to_account_info(),
                },
            ),
            cost.vault_reserve,
        )?;
    }

    emit!(VaultInitialized {
        owner,
        vault_state: state_info.key(),
        vault,
        reserve: cost.vault_reserve,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Vault initialized for owner: {}", owner);
    msg!(
        "Paid {} lamports of state rent and {} of vault reserve",
        cost.state_rent,
        cost.vault_reserve
    );
    Ok(())
}
