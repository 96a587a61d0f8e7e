//! Ledger engine.
//!
//! All token semantics live here as plain methods on [`TokenLedger`]. Each
//! operation receives the calling address, the holder records it touches and
//! the current unix time, runs its guards first and only then commits, so a
//! rejected call never leaves partial state behind. Instruction handlers are
//! thin wrappers that load the holder accounts, supply the signer and `Clock`
//! and emit events.

mod access;
mod liquidity;
mod supply;
mod transfer_guard;
mod vesting;

#[cfg(test)]
mod fixture;
#[cfg(test)]
mod props;

pub use transfer_guard::TransferOutcome;
pub use vesting::ClaimOutcome;

use anchor_lang::prelude::Pubkey;

use crate::constants::{MAX_EXEMPT_WALLETS, MAX_NAME_LEN, MAX_SYMBOL_LEN, PERCENT_DENOMINATOR};
use crate::error::TokenError;
use crate::state::{HolderEntry, InitializeParams, LiquidityLock, TokenLedger};
use crate::utils::time;

impl TokenLedger {
    /// Builds the initial ledger and credits the whole initial supply to
    /// `owner_holder`. `params.exempt_wallets` start out whitelisted.
    pub fn genesis(
        owner: Pubkey,
        treasury: Pubkey,
        bump: u8,
        params: InitializeParams,
        now: i64,
        owner_holder: &mut HolderEntry,
    ) -> Result<Self, TokenError> {
        if owner == Pubkey::default() || owner_holder.wallet != owner {
            return Err(TokenError::InvalidOwner);
        }
        if params.name.is_empty() || params.name.len() > MAX_NAME_LEN {
            return Err(TokenError::InvalidConfig);
        }
        if params.symbol.is_empty() || params.symbol.len() > MAX_SYMBOL_LEN {
            return Err(TokenError::InvalidConfig);
        }
        if params.burn_rate_percent as u64 > PERCENT_DENOMINATOR {
            return Err(TokenError::InvalidBurnRate);
        }
        if params.liquidity_lock_duration < 0 {
            return Err(TokenError::InvalidTimestamp);
        }
        if params.exempt_wallets.len() > MAX_EXEMPT_WALLETS
            || params.exempt_wallets.contains(&Pubkey::default())
        {
            return Err(TokenError::InvalidConfig);
        }
        let transfer_allowed_at = time::deadline_after(now, params.transfer_delay)?;

        let mut exempt_wallets = Vec::with_capacity(params.exempt_wallets.len());
        for wallet in params.exempt_wallets {
            if !exempt_wallets.contains(&wallet) {
                exempt_wallets.push(wallet);
            }
        }
        owner_holder.balance = params.initial_supply;

        Ok(Self {
            owner,
            treasury,
            name: params.name,
            symbol: params.symbol,
            decimals: params.decimals,
            total_supply: params.initial_supply,
            paused: false,
            max_transfer_amount: params.max_transfer_amount,
            transfer_allowed_at,
            deflationary: params.deflationary,
            burn_rate_percent: params.burn_rate_percent,
            liquidity: LiquidityLock::default(),
            liquidity_lock_duration: params.liquidity_lock_duration,
            entered: false,
            bump,
            exempt_wallets,
            schedules: Vec::new(),
        })
    }

    pub fn current_owner(&self) -> Pubkey {
        self.owner
    }

    pub fn total_supply(&self) -> u64 {
        self.total_supply
    }

    /// Balance minus anything withheld by an active liquidity lock.
    pub fn spendable_balance(&self, holder: &HolderEntry) -> u64 {
        if holder.wallet == self.treasury {
            holder.balance.saturating_sub(self.liquidity.withheld())
        } else {
            holder.balance
        }
    }

    /// Runs a value-moving operation with the reentrancy flag held.
    pub(crate) fn non_reentrant<T>(
        &mut self,
        op: impl FnOnce(&mut Self) -> Result<T, TokenError>,
    ) -> Result<T, TokenError> {
        if self.entered {
            return Err(TokenError::Reentrancy);
        }
        self.entered = true;
        let result = op(self);
        self.entered = false;
        result
    }
}
