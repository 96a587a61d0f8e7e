use anchor_lang::prelude::Pubkey;

use crate::error::TokenError;
use crate::state::{HolderEntry, TokenLedger};

impl TokenLedger {
    /// Owner-only issuance into `to`; returns the new total supply.
    pub fn mint(
        &mut self,
        caller: &Pubkey,
        to: &mut HolderEntry,
        amount: u64,
    ) -> Result<u64, TokenError> {
        self.non_reentrant(|ledger| {
            ledger.require_owner(caller)?;
            if to.wallet == Pubkey::default() {
                return Err(TokenError::InvalidRecipient);
            }
            if amount == 0 {
                return Err(TokenError::InvalidAmount);
            }
            let supply = ledger
                .total_supply
                .checked_add(amount)
                .ok_or(TokenError::ArithmeticOverflow)?;
            let balance = to
                .balance
                .checked_add(amount)
                .ok_or(TokenError::ArithmeticOverflow)?;

            to.balance = balance;
            ledger.total_supply = supply;
            Ok(supply)
        })
    }

    /// Destroys `amount` of the holder's own balance; returns the new total
    /// supply.
    pub fn burn(&mut self, holder: &mut HolderEntry, amount: u64) -> Result<u64, TokenError> {
        self.non_reentrant(|ledger| {
            if ledger.paused {
                return Err(TokenError::Paused);
            }
            if ledger.spendable_balance(holder) < amount {
                return Err(TokenError::InsufficientBalance);
            }
            if amount == 0 {
                return Ok(ledger.total_supply);
            }
            let supply = ledger
                .total_supply
                .checked_sub(amount)
                .ok_or(TokenError::ArithmeticUnderflow)?;
            let balance = holder
                .balance
                .checked_sub(amount)
                .ok_or(TokenError::ArithmeticUnderflow)?;

            holder.balance = balance;
            ledger.total_supply = supply;
            Ok(supply)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixture::*;
    use super::*;

    #[test]
    fn owner_burns_own_tokens() {
        let mut f = deployed();
        let before = f.balance(&f.owner);
        let supply = f.burn(f.owner, 10_000 * UNIT).unwrap();
        assert_eq!(f.balance(&f.owner), before - 10_000 * UNIT);
        assert_eq!(supply, INITIAL_SUPPLY - 10_000 * UNIT);
        f.assert_conserved();
    }

    #[test]
    fn holder_cannot_burn_more_than_balance() {
        let mut f = deployed();
        f.transfer(f.owner, f.user1, 5 * UNIT, T0).unwrap();
        let r = f.burn(f.user1, 5 * UNIT + 1);
        assert!(matches!(r, Err(TokenError::InsufficientBalance)));
        f.burn(f.user1, 5 * UNIT).unwrap();
        assert_eq!(f.balance(&f.user1), 0);
        // The emptied account persists.
        assert!(f.holders.contains_key(&f.user1));
        f.assert_conserved();
    }

    #[test]
    fn burn_is_blocked_while_paused() {
        let mut f = deployed();
        f.ledger.pause(&f.owner).unwrap();
        assert!(matches!(f.burn(f.owner, UNIT), Err(TokenError::Paused)));
    }

    #[test]
    fn treasury_cannot_burn_locked_tokens() {
        let mut f = deployed();
        f.fund_treasury(100 * UNIT);
        f.lock(f.owner, 60 * UNIT, T0).unwrap();
        let treasury = f.treasury;
        let r = f.burn(treasury, 41 * UNIT);
        assert!(matches!(r, Err(TokenError::InsufficientBalance)));
        f.burn(treasury, 40 * UNIT).unwrap();
        assert_eq!(f.balance(&treasury), 60 * UNIT);
    }

    #[test]
    fn mint_grows_supply_and_balance() {
        let mut f = deployed();
        let supply = f.mint(f.owner, f.user2, 42 * UNIT).unwrap();
        assert_eq!(supply, INITIAL_SUPPLY + 42 * UNIT);
        assert_eq!(f.balance(&f.user2), 42 * UNIT);
        f.assert_conserved();
    }

    #[test]
    fn mint_ignores_pause_but_rejects_bad_input() {
        let mut f = deployed();
        f.ledger.pause(&f.owner).unwrap();
        f.mint(f.owner, f.user1, UNIT).unwrap();

        let r = f.mint(f.owner, Pubkey::default(), UNIT);
        assert!(matches!(r, Err(TokenError::InvalidRecipient)));
        let r = f.mint(f.owner, f.user1, 0);
        assert!(matches!(r, Err(TokenError::InvalidAmount)));
    }

    #[test]
    fn mint_overflow_is_reported_not_wrapped() {
        let mut f = deployed();
        let r = f.mint(f.owner, f.user1, u64::MAX);
        assert!(matches!(r, Err(TokenError::ArithmeticOverflow)));
        assert_eq!(f.ledger.total_supply(), INITIAL_SUPPLY);
        assert!(!f.holders.contains_key(&f.user1));
    }
}
