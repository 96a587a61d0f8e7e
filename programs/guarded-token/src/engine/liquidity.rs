use anchor_lang::prelude::Pubkey;

use crate::error::TokenError;
use crate::state::{HolderEntry, LiquidityLock, TokenLedger};
use crate::utils::time;

impl TokenLedger {
    /// Withholds `amount` of the treasury balance until the configured lock
    /// duration has elapsed.
    pub fn lock_liquidity(
        &mut self,
        caller: &Pubkey,
        treasury: &HolderEntry,
        amount: u64,
        now: i64,
    ) -> Result<LiquidityLock, TokenError> {
        self.non_reentrant(|ledger| {
            ledger.require_owner(caller)?;
            if ledger.liquidity.locked {
                return Err(TokenError::AlreadyLocked);
            }
            if amount == 0 {
                return Err(TokenError::InvalidAmount);
            }
            if treasury.wallet != ledger.treasury {
                return Err(TokenError::HolderMismatch);
            }
            if ledger.spendable_balance(treasury) < amount {
                return Err(TokenError::InsufficientBalance);
            }
            let unlock_at = time::deadline_after(now, ledger.liquidity_lock_duration)?;
            ledger.liquidity = LiquidityLock {
                locked: true,
                amount,
                unlock_at,
            };
            Ok(ledger.liquidity)
        })
    }

    /// Releases the whole lock back to the treasury's spendable balance.
    /// `amount` must equal the locked amount exactly.
    pub fn unlock_liquidity(
        &mut self,
        caller: &Pubkey,
        amount: u64,
        now: i64,
    ) -> Result<u64, TokenError> {
        self.non_reentrant(|ledger| {
            ledger.require_owner(caller)?;
            if !ledger.liquidity.locked {
                return Err(TokenError::NotLocked);
            }
            if !time::has_reached(now, ledger.liquidity.unlock_at) {
                return Err(TokenError::LiquidityStillLocked);
            }
            if amount != ledger.liquidity.amount {
                return Err(TokenError::UnlockAmountMismatch);
            }
            ledger.liquidity = LiquidityLock::default();
            Ok(amount)
        })
    }

    pub fn liquidity_locked(&self) -> bool {
        self.liquidity.locked
    }

    pub fn locked_liquidity_amount(&self) -> u64 {
        self.liquidity.amount
    }
}
