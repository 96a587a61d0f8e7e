//! Shared test deployment: 1,000,000 tokens, a 10,000 token transfer cap and
//! a one hour transfer delay.
//!
//! Holder accounts are kept in a map and loaded and stored around each call,
//! the way the instruction handlers load them from their PDAs.

use std::collections::BTreeMap;

use anchor_lang::prelude::Pubkey;

use crate::constants::{DEFAULT_BURN_RATE_PERCENT, DEFAULT_LIQUIDITY_LOCK_SECONDS};
use crate::error::TokenError;
use crate::state::{HolderEntry, InitializeParams, LiquidityLock, Restriction, TokenLedger};

use super::{ClaimOutcome, TransferOutcome};

/// One whole token at 9 decimals.
pub const UNIT: u64 = 1_000_000_000;
pub const T0: i64 = 1_700_000_000;
pub const DELAY: i64 = 3_600;
pub const INITIAL_SUPPLY: u64 = 1_000_000 * UNIT;
pub const MAX_TRANSFER: u64 = 10_000 * UNIT;

pub struct Fixture {
    pub ledger: TokenLedger,
    pub holders: BTreeMap<Pubkey, HolderEntry>,
    pub owner: Pubkey,
    pub treasury: Pubkey,
    pub user1: Pubkey,
    pub user2: Pubkey,
}

pub fn params(initial_supply: u64) -> InitializeParams {
    InitializeParams {
        name: "CustomToken".to_string(),
        symbol: "CT".to_string(),
        decimals: 9,
        initial_supply,
        max_transfer_amount: u64::MAX,
        transfer_delay: 0,
        deflationary: false,
        burn_rate_percent: DEFAULT_BURN_RATE_PERCENT,
        liquidity_lock_duration: DEFAULT_LIQUIDITY_LOCK_SECONDS,
        exempt_wallets: Vec::new(),
    }
}

pub fn deployed() -> Fixture {
    deployed_with(Pubkey::new_unique(), Pubkey::new_unique())
}

/// Deployment with a 10,000 token cap and a delay set at `T0`.
pub fn deployed_with(owner: Pubkey, treasury: Pubkey) -> Fixture {
    let mut f = Fixture::genesis(owner, treasury, params(INITIAL_SUPPLY)).unwrap();
    f.ledger.set_max_transfer_amount(&owner, MAX_TRANSFER).unwrap();
    f.ledger.set_transfer_delay(&owner, DELAY, T0).unwrap();
    f
}

impl Fixture {
    pub fn genesis(
        owner: Pubkey,
        treasury: Pubkey,
        params: InitializeParams,
    ) -> Result<Self, TokenError> {
        let mut owner_holder = HolderEntry::new(owner, 255);
        let ledger = TokenLedger::genesis(owner, treasury, 255, params, T0, &mut owner_holder)?;
        let mut holders = BTreeMap::new();
        holders.insert(treasury, HolderEntry::new(treasury, 254));
        holders.insert(owner, owner_holder);
        Ok(Self {
            ledger,
            holders,
            owner,
            treasury,
            user1: Pubkey::new_unique(),
            user2: Pubkey::new_unique(),
        })
    }

    /// Current record of `wallet`; a fresh one if it was never opened.
    pub fn holder(&self, wallet: &Pubkey) -> HolderEntry {
        self.holders
            .get(wallet)
            .copied()
            .unwrap_or_else(|| HolderEntry::new(*wallet, 0))
    }

    pub fn balance(&self, wallet: &Pubkey) -> u64 {
        self.holder(wallet).balance
    }

    pub fn spendable(&self, wallet: &Pubkey) -> u64 {
        self.ledger.spendable_balance(&self.holder(wallet))
    }

    pub fn is_whitelisted(&self, wallet: &Pubkey) -> bool {
        self.ledger.is_whitelisted(&self.holder(wallet))
    }

    /// Writes `entry` back. Untouched records of unknown wallets are not
    /// opened.
    fn store(&mut self, entry: HolderEntry) {
        if self.holders.contains_key(&entry.wallet) || entry != HolderEntry::new(entry.wallet, 0) {
            self.holders.insert(entry.wallet, entry);
        }
    }

    pub fn transfer(
        &mut self,
        from: Pubkey,
        to: Pubkey,
        amount: u64,
        now: i64,
    ) -> Result<TransferOutcome, TokenError> {
        let mut sender = self.holder(&from);
        if from == to {
            let r = self.ledger.transfer_to_self(&mut sender, amount, now);
            self.store(sender);
            return r;
        }
        let mut recipient = self.holder(&to);
        let r = self.ledger.transfer(&mut sender, &mut recipient, amount, now);
        self.store(sender);
        self.store(recipient);
        r
    }

    pub fn mint(&mut self, caller: Pubkey, to: Pubkey, amount: u64) -> Result<u64, TokenError> {
        let mut recipient = self.holder(&to);
        let r = self.ledger.mint(&caller, &mut recipient, amount);
        self.store(recipient);
        r
    }

    pub fn burn(&mut self, wallet: Pubkey, amount: u64) -> Result<u64, TokenError> {
        let mut holder = self.holder(&wallet);
        let r = self.ledger.burn(&mut holder, amount);
        self.store(holder);
        r
    }

    pub fn set_restriction(
        &mut self,
        caller: Pubkey,
        wallet: Pubkey,
        restriction: Restriction,
        enabled: bool,
    ) -> Result<bool, TokenError> {
        let mut holder = self.holder(&wallet);
        let r = self
            .ledger
            .set_restriction(&caller, &mut holder, restriction, enabled);
        self.store(holder);
        r
    }

    pub fn restrict(&mut self, wallet: Pubkey, restriction: Restriction, enabled: bool) {
        let owner = self.ledger.current_owner();
        self.set_restriction(owner, wallet, restriction, enabled)
            .unwrap();
    }

    pub fn claim(&mut self, wallet: Pubkey, now: i64) -> Result<ClaimOutcome, TokenError> {
        let mut beneficiary = self.holder(&wallet);
        let mut treasury = self.holder(&self.treasury);
        let r = self.ledger.claim(&mut beneficiary, &mut treasury, now);
        self.store(treasury);
        self.store(beneficiary);
        r
    }

    pub fn lock(&mut self, caller: Pubkey, amount: u64, now: i64) -> Result<LiquidityLock, TokenError> {
        let treasury = self.holder(&self.treasury);
        self.ledger.lock_liquidity(&caller, &treasury, amount, now)
    }

    /// Mints `amount` into the treasury so vesting and liquidity have funds.
    pub fn fund_treasury(&mut self, amount: u64) {
        let (owner, treasury) = (self.ledger.current_owner(), self.treasury);
        self.mint(owner, treasury, amount).unwrap();
    }

    pub fn balances_sum(&self) -> u128 {
        self.holders.values().map(|h| h.balance as u128).sum()
    }

    pub fn assert_conserved(&self) {
        assert_eq!(self.balances_sum(), self.ledger.total_supply as u128);
    }
}
