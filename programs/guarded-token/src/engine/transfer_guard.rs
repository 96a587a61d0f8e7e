use anchor_lang::prelude::Pubkey;

use crate::error::TokenError;
use crate::state::{tranche_amount, HolderEntry, TokenLedger};
use crate::utils::time;

/// Balance effect of a completed transfer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransferOutcome {
    /// Taken from the sender.
    pub debited: u64,
    /// Given to the recipient.
    pub credited: u64,
    /// Removed from total supply (deflationary mode only).
    pub burned: u64,
}

impl TokenLedger {
    /// Moves `amount` from `sender` to a distinct `recipient` after the
    /// restriction checks pass. Self-transfers go through
    /// [`TokenLedger::transfer_to_self`].
    pub fn transfer(
        &mut self,
        sender: &mut HolderEntry,
        recipient: &mut HolderEntry,
        amount: u64,
        now: i64,
    ) -> Result<TransferOutcome, TokenError> {
        self.non_reentrant(|ledger| {
            ledger.check_transfer(sender, amount, now)?;
            if recipient.wallet == Pubkey::default() || recipient.wallet == sender.wallet {
                return Err(TokenError::InvalidRecipient);
            }
            if amount == 0 {
                return Ok(TransferOutcome::default());
            }
            let (burned, credited) = ledger.burn_split(amount)?;
            let sender_balance = sender
                .balance
                .checked_sub(amount)
                .ok_or(TokenError::ArithmeticUnderflow)?;
            let recipient_balance = recipient
                .balance
                .checked_add(credited)
                .ok_or(TokenError::ArithmeticOverflow)?;
            let supply = ledger
                .total_supply
                .checked_sub(burned)
                .ok_or(TokenError::ArithmeticUnderflow)?;

            sender.balance = sender_balance;
            recipient.balance = recipient_balance;
            ledger.total_supply = supply;
            Ok(TransferOutcome {
                debited: amount,
                credited,
                burned,
            })
        })
    }

    /// Transfer whose recipient is the sender: passes the same checks and
    /// only the deflationary burn changes the balance.
    pub fn transfer_to_self(
        &mut self,
        holder: &mut HolderEntry,
        amount: u64,
        now: i64,
    ) -> Result<TransferOutcome, TokenError> {
        self.non_reentrant(|ledger| {
            ledger.check_transfer(holder, amount, now)?;
            if holder.wallet == Pubkey::default() {
                return Err(TokenError::InvalidRecipient);
            }
            if amount == 0 {
                return Ok(TransferOutcome::default());
            }
            let (burned, credited) = ledger.burn_split(amount)?;
            let balance = holder
                .balance
                .checked_sub(burned)
                .ok_or(TokenError::ArithmeticUnderflow)?;
            let supply = ledger
                .total_supply
                .checked_sub(burned)
                .ok_or(TokenError::ArithmeticUnderflow)?;

            holder.balance = balance;
            ledger.total_supply = supply;
            Ok(TransferOutcome {
                debited: amount,
                credited,
                burned,
            })
        })
    }

    /// Restriction checks in their fixed order; the first failure wins:
    /// pause, blacklist, freeze, cap (skipped for whitelisted senders),
    /// delay (skipped for whitelisted senders and the owner), then balance.
    pub fn check_transfer(&self, sender: &HolderEntry, amount: u64, now: i64) -> Result<(), TokenError> {
        if self.paused {
            return Err(TokenError::Paused);
        }
        if sender.blacklisted {
            return Err(TokenError::Blacklisted);
        }
        if sender.frozen {
            return Err(TokenError::SenderFrozen);
        }
        if !self.is_whitelisted(sender) && amount > self.max_transfer_amount {
            return Err(TokenError::ExceedsMaxTransfer);
        }
        if !self.is_delay_exempt(sender) && !time::has_reached(now, self.transfer_allowed_at) {
            return Err(TokenError::TransferNotYetAllowed);
        }
        if self.spendable_balance(sender) < amount {
            return Err(TokenError::InsufficientBalance);
        }
        Ok(())
    }

    /// Splits `amount` into (burned, credited) under the current deflation
    /// setting.
    pub fn burn_split(&self, amount: u64) -> Result<(u64, u64), TokenError> {
        if !self.deflationary {
            return Ok((0, amount));
        }
        let burned = tranche_amount(amount, self.burn_rate_percent)?;
        let credited = amount
            .checked_sub(burned)
            .ok_or(TokenError::ArithmeticUnderflow)?;
        Ok((burned, credited))
    }
}
