use anchor_lang::prelude::Pubkey;

use crate::constants::PERCENT_DENOMINATOR;
use crate::error::TokenError;
use crate::state::{HolderEntry, Restriction, TokenLedger};
use crate::utils::time;

impl TokenLedger {
    pub fn require_owner(&self, caller: &Pubkey) -> Result<(), TokenError> {
        if *caller != self.owner {
            return Err(TokenError::Unauthorized);
        }
        Ok(())
    }

    /// Hands administration, including the owner's transfer-delay exemption,
    /// to `new_owner`; returns the previous owner.
    pub fn transfer_ownership(
        &mut self,
        caller: &Pubkey,
        new_owner: Pubkey,
    ) -> Result<Pubkey, TokenError> {
        self.require_owner(caller)?;
        if new_owner == Pubkey::default() {
            return Err(TokenError::InvalidOwner);
        }
        let previous = self.owner;
        self.owner = new_owner;
        Ok(previous)
    }

    pub fn pause(&mut self, caller: &Pubkey) -> Result<(), TokenError> {
        self.require_owner(caller)?;
        if self.paused {
            return Err(TokenError::Paused);
        }
        self.paused = true;
        Ok(())
    }

    pub fn unpause(&mut self, caller: &Pubkey) -> Result<(), TokenError> {
        self.require_owner(caller)?;
        if !self.paused {
            return Err(TokenError::NotPaused);
        }
        self.paused = false;
        Ok(())
    }

    /// Adds `holder` to or removes it from one of the restriction sets.
    /// Removing an address that is not a member is a no-op. Returns whether
    /// membership changed.
    pub fn set_restriction(
        &mut self,
        caller: &Pubkey,
        holder: &mut HolderEntry,
        restriction: Restriction,
        enabled: bool,
    ) -> Result<bool, TokenError> {
        self.require_owner(caller)?;
        let was_member = match restriction {
            Restriction::Whitelist => self.is_whitelisted(holder),
            other => holder.flag(other),
        };
        holder.set_flag(restriction, enabled);
        if restriction == Restriction::Whitelist && !enabled {
            self.exempt_wallets.retain(|w| *w != holder.wallet);
        }
        Ok(was_member != enabled)
    }

    pub fn set_max_transfer_amount(&mut self, caller: &Pubkey, amount: u64) -> Result<(), TokenError> {
        self.require_owner(caller)?;
        self.max_transfer_amount = amount;
        Ok(())
    }

    /// Opens non-whitelisted transfers `delay` seconds from `now`; returns the
    /// new allowed-at timestamp.
    pub fn set_transfer_delay(
        &mut self,
        caller: &Pubkey,
        delay: i64,
        now: i64,
    ) -> Result<i64, TokenError> {
        self.require_owner(caller)?;
        let allowed_at = time::deadline_after(now, delay)?;
        self.transfer_allowed_at = allowed_at;
        Ok(allowed_at)
    }

    pub fn set_deflationary(&mut self, caller: &Pubkey, enabled: bool) -> Result<(), TokenError> {
        self.require_owner(caller)?;
        self.deflationary = enabled;
        Ok(())
    }

    pub fn set_burn_rate(&mut self, caller: &Pubkey, percent: u8) -> Result<(), TokenError> {
        self.require_owner(caller)?;
        if percent as u64 > PERCENT_DENOMINATOR {
            return Err(TokenError::InvalidBurnRate);
        }
        self.burn_rate_percent = percent;
        Ok(())
    }

    pub fn set_liquidity_lock_duration(
        &mut self,
        caller: &Pubkey,
        seconds: i64,
    ) -> Result<(), TokenError> {
        self.require_owner(caller)?;
        if seconds < 0 {
            return Err(TokenError::InvalidTimestamp);
        }
        self.liquidity_lock_duration = seconds;
        Ok(())
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_blacklisted(&self, holder: &HolderEntry) -> bool {
        holder.blacklisted
    }

    pub fn is_frozen(&self, holder: &HolderEntry) -> bool {
        holder.frozen
    }

    /// Whitelisted by flag or as a construction-time exempt wallet.
    pub fn is_whitelisted(&self, holder: &HolderEntry) -> bool {
        holder.whitelisted || self.exempt_wallets.contains(&holder.wallet)
    }

    /// The current owner skips the transfer delay but not the cap.
    pub fn is_delay_exempt(&self, holder: &HolderEntry) -> bool {
        holder.wallet == self.owner || self.is_whitelisted(holder)
    }

    pub fn is_deflationary(&self) -> bool {
        self.deflationary
    }

    pub fn transfer_allowed_at(&self) -> i64 {
        self.transfer_allowed_at
    }
}
