use anchor_lang::prelude::*;

use crate::constants::LOCK_DURATION;
use crate::errors::VaultError;

/// Bookkeeping for one owner's vault (PDA, seeds = [b"state", owner]).
///
/// The lamports themselves live in the paired system account
/// (PDA, seeds = [b"vault", vault_state]). Every precondition of the four
/// instructions is checked here, against the signer key and the balances
/// the instruction read, before any lamports move.
#[account]
#[derive(Default, InitSpace)]
pub struct VaultState {
    /// Depositor; the only key allowed to touch the vault
    pub owner: Pubkey,
    /// Address of the system-owned vault PDA
    pub vault: Pubkey,
    /// Unix timestamp of the latest deposit, `None` until the first one
    pub last_deposit_time: Option<i64>,
    pub state_bump: u8,
    pub vault_bump: u8,
}

/// Whether `close` has to wait for the deposit lock like `withdraw` does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClosePolicy {
    /// Close is a full exit and ignores the lock.
    Unrestricted,
    /// Close is rejected while the latest deposit is still locked.
    RespectTimelock,
}

impl VaultState {
    pub const LEN: usize = 8 + Self::INIT_SPACE; // discriminator + fields

    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    pub fn initialize(
        &mut self,
        owner: Pubkey,
        vault: Pubkey,
        state_bump: u8,
        vault_bump: u8,
    ) -> Result<()> {
        require!(!self.is_initialized(), VaultError::AlreadyInitialized);

        self.owner = owner;
        self.vault = vault;
        self.last_deposit_time = None;
        self.state_bump = state_bump;
        self.vault_bump = vault_bump;
        Ok(())
    }

    pub fn authorize(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, VaultError::NotOwner);
        Ok(())
    }

    /// When the latest deposit unlocks. Saturates so a corrupt timestamp
    /// keeps the vault locked instead of wrapping around.
    pub fn unlocks_at(&self) -> Option<i64> {
        self.last_deposit_time
            .map(|deposited| deposited.saturating_add(LOCK_DURATION))
    }

    /// Seconds left on the lock at `now`, or `None` if nothing is locked.
    pub fn remaining_lock(&self, now: i64) -> Option<i64> {
        self.unlocks_at()
            .filter(|unlocks_at| now < *unlocks_at)
            .map(|unlocks_at| unlocks_at.saturating_sub(now))
    }

    fn ensure_unlocked(&self, now: i64) -> Result<()> {
        if let Some(remaining) = self.remaining_lock(now) {
            msg!(
                "Vault is locked for another {} seconds (unlocks at {})",
                remaining,
                now.saturating_add(remaining)
            );
            return err!(VaultError::TimelockActive);
        }
        Ok(())
    }

    /// Validates a deposit and returns the vault balance after it. `reserve`
    /// is the rent-exempt minimum the signer has to keep unless it sends
    /// everything.
    pub fn check_deposit(
        &self,
        caller: &Pubkey,
        amount: u64,
        caller_lamports: u64,
        vault_lamports: u64,
        reserve: u64,
    ) -> Result<u64> {
        self.authorize(caller)?;
        require!(amount > 0, VaultError::InvalidAmount);

        let vault_balance = vault_lamports
            .checked_add(amount)
            .ok_or(VaultError::InvalidAmount)?;

        if !can_pay(caller_lamports, amount, reserve) {
            msg!(
                "Deposit of {} lamports would leave signer balance {} below the {} lamport reserve",
                amount,
                caller_lamports,
                reserve
            );
            return err!(VaultError::InsufficientFunds);
        }

        Ok(vault_balance)
    }

    /// Stamps a successful deposit and returns the new unlock time.
    /// The stamp never moves backwards, even if the clock does.
    pub fn record_deposit(&mut self, now: i64) -> i64 {
        let stamped = match self.last_deposit_time {
            Some(last) => last.max(now),
            None => now,
        };
        self.last_deposit_time = Some(stamped);
        stamped.saturating_add(LOCK_DURATION)
    }

    /// Validates a withdrawal and returns the vault balance after it.
    pub fn check_withdraw(
        &self,
        caller: &Pubkey,
        amount: u64,
        now: i64,
        vault_lamports: u64,
        reserve: u64,
    ) -> Result<u64> {
        self.authorize(caller)?;
        require!(amount > 0, VaultError::InvalidAmount);

        if self.last_deposit_time.is_none() {
            msg!("Nothing has been deposited into this vault yet");
            return err!(VaultError::InsufficientVaultBalance);
        }
        self.ensure_unlocked(now)?;

        let available = withdrawable(vault_lamports, reserve);
        if amount > available {
            msg!(
                "Requested {} lamports but only {} are withdrawable",
                amount,
                available
            );
            return err!(VaultError::InsufficientVaultBalance);
        }

        vault_lamports
            .checked_sub(amount)
            .ok_or_else(|| error!(VaultError::InsufficientVaultBalance))
    }

    pub fn check_close(&self, caller: &Pubkey, now: i64, policy: ClosePolicy) -> Result<()> {
        self.authorize(caller)?;
        if policy == ClosePolicy::RespectTimelock {
            self.ensure_unlocked(now)?;
        }
        Ok(())
    }
}

/// Lamports that can leave the vault without dropping it below `reserve`.
pub fn withdrawable(vault_lamports: u64, reserve: u64) -> u64 {
    vault_lamports.saturating_sub(reserve)
}

/// Whether a system account holding `balance` can send `amount` under the
/// runtime rent rule: afterwards it must be empty or still hold `reserve`.
pub fn can_pay(balance: u64, amount: u64, reserve: u64) -> bool {
    match balance.checked_sub(amount) {
        Some(left) => left == 0 || left >= reserve,
        None => false,
    }
}

/// Lamports `initialize` takes from the signer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitializeCost {
    /// Rent the state account still lacks
    pub state_rent: u64,
    /// Lamports the vault still lacks to reach its reserve
    pub vault_reserve: u64,
}

impl InitializeCost {
    pub fn total(&self) -> u64 {
        self.state_rent.saturating_add(self.vault_reserve)
    }
}

/// Prices `initialize` before anything is allocated. Lamports already sitting
/// at the state or vault address count toward their share.
pub fn initialize_cost(
    payer_lamports: u64,
    state_lamports: u64,
    vault_lamports: u64,
    state_rent_exempt: u64,
    reserve: u64,
) -> Result<InitializeCost> {
    let cost = InitializeCost {
        state_rent: state_rent_exempt.saturating_sub(state_lamports),
        vault_reserve: reserve.saturating_sub(vault_lamports),
    };

    if !can_pay(payer_lamports, cost.total(), reserve) {
        msg!(
            "Initialize needs {} lamports ({} state rent, {} vault reserve), signer holds {}",
            cost.total(),
            cost.state_rent,
            cost.vault_reserve,
            payer_lamports
        );
        return err!(VaultError::InsufficientFunds);
    }
    Ok(cost)
}
