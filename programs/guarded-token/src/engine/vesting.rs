use anchor_lang::prelude::Pubkey;

use crate::constants::{MAX_SCHEDULES, PERCENT_DENOMINATOR};
use crate::error::TokenError;
use crate::state::{tranche_amount, HolderEntry, TokenLedger, VestingInfo, VestingKind, VestingSchedule};
use crate::utils::time;

/// Result of a successful claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimOutcome {
    /// Paid out by this claim.
    pub amount: u64,
    /// Paid out over the schedule's lifetime, this claim included.
    pub claimed_total: u64,
    /// Still owed by the schedule.
    pub remaining: u64,
}

impl TokenLedger {
    /// Interval/percentage schedule: one tranche of `percentage`% per elapsed
    /// `interval` seconds, counted from `now`.
    pub fn add_vesting_schedule(
        &mut self,
        caller: &Pubkey,
        beneficiary: Pubkey,
        amount: u64,
        percentage: u8,
        interval: i64,
        now: i64,
    ) -> Result<(), TokenError> {
        self.require_owner(caller)?;
        if percentage == 0 || percentage as u64 > PERCENT_DENOMINATOR || interval <= 0 {
            return Err(TokenError::InvalidVestingParams);
        }
        if amount > 0 && tranche_amount(amount, percentage)? == 0 {
            return Err(TokenError::InvalidVestingParams);
        }
        self.insert_schedule(VestingSchedule {
            beneficiary,
            amount,
            claimed: 0,
            created_at: now,
            kind: VestingKind::Interval {
                percentage,
                interval,
            },
        })
    }

    /// Start/duration schedule: the whole amount at `start + duration`.
    pub fn add_vesting(
        &mut self,
        caller: &Pubkey,
        beneficiary: Pubkey,
        amount: u64,
        start: i64,
        duration: i64,
        now: i64,
    ) -> Result<(), TokenError> {
        self.require_owner(caller)?;
        if start < 0 || duration <= 0 {
            return Err(TokenError::InvalidVestingParams);
        }
        time::deadline_after(start, duration)?;
        self.insert_schedule(VestingSchedule {
            beneficiary,
            amount,
            claimed: 0,
            created_at: now,
            kind: VestingKind::Cliff { start, duration },
        })
    }

    fn insert_schedule(&mut self, schedule: VestingSchedule) -> Result<(), TokenError> {
        if schedule.beneficiary == Pubkey::default() || schedule.beneficiary == self.treasury {
            return Err(TokenError::InvalidRecipient);
        }
        if schedule.amount == 0 {
            return Err(TokenError::InvalidAmount);
        }
        if self.schedule_of(&schedule.beneficiary).is_some() {
            return Err(TokenError::VestingAlreadyExists);
        }
        if self.schedules.len() >= MAX_SCHEDULES {
            return Err(TokenError::VestingBookFull);
        }
        self.schedules.push(schedule);
        Ok(())
    }

    pub fn schedule_of(&self, beneficiary: &Pubkey) -> Option<&VestingSchedule> {
        self.schedules.iter().find(|s| s.beneficiary == *beneficiary)
    }

    pub fn vesting_info(&self, beneficiary: &Pubkey, now: i64) -> Result<VestingInfo, TokenError> {
        self.schedule_of(beneficiary)
            .ok_or(TokenError::NoVestingFound)?
            .info(now)
    }

    /// Pays the beneficiary everything vested and not yet claimed, out of the
    /// treasury's spendable balance.
    pub fn claim(
        &mut self,
        beneficiary: &mut HolderEntry,
        treasury: &mut HolderEntry,
        now: i64,
    ) -> Result<ClaimOutcome, TokenError> {
        self.non_reentrant(|ledger| ledger.execute_claim(beneficiary, treasury, now))
    }

    fn execute_claim(
        &mut self,
        beneficiary: &mut HolderEntry,
        treasury: &mut HolderEntry,
        now: i64,
    ) -> Result<ClaimOutcome, TokenError> {
        if self.paused {
            return Err(TokenError::Paused);
        }
        if treasury.wallet != self.treasury {
            return Err(TokenError::HolderMismatch);
        }
        let idx = self
            .schedules
            .iter()
            .position(|s| s.beneficiary == beneficiary.wallet)
            .ok_or(TokenError::NoVestingFound)?;
        let schedule = self.schedules[idx];
        if schedule.is_exhausted() {
            return Err(TokenError::NothingToClaim);
        }
        let releasable = schedule.releasable(now)?;
        if releasable == 0 {
            return Err(TokenError::NothingToClaim);
        }

        if self.spendable_balance(treasury) < releasable {
            return Err(TokenError::InsufficientBalance);
        }
        let treasury_balance = treasury
            .balance
            .checked_sub(releasable)
            .ok_or(TokenError::ArithmeticUnderflow)?;
        let beneficiary_balance = beneficiary
            .balance
            .checked_add(releasable)
            .ok_or(TokenError::ArithmeticOverflow)?;
        let claimed_total = schedule
            .claimed
            .checked_add(releasable)
            .ok_or(TokenError::ArithmeticOverflow)?;

        treasury.balance = treasury_balance;
        beneficiary.balance = beneficiary_balance;
        self.schedules[idx].claimed = claimed_total;

        Ok(ClaimOutcome {
            amount: releasable,
            claimed_total,
            remaining: schedule.amount.saturating_sub(claimed_total),
        })
    }
}
