use anchor_lang::prelude::{borsh, AnchorDeserialize, AnchorSerialize, Pubkey};

use crate::constants::PERCENT_DENOMINATOR;
use crate::error::TokenError;
use crate::utils::time;

/// Release shape of a vesting schedule.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VestingKind {
    /// Releases `amount * percentage / 100` per elapsed `interval` seconds
    /// (counted from schedule creation), capped at the total amount.
    Interval { percentage: u8, interval: i64 },
    /// Cliff: releases the whole amount once `start + duration` is reached.
    Cliff { start: i64, duration: i64 },
}

impl VestingKind {
    /// Borsh tag + largest variant.
    pub const SIZE: usize = 1 + 8 + 8;
}

/// Vesting schedule for a single beneficiary, funded from the treasury.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingSchedule {
    pub beneficiary: Pubkey,
    /// Total amount the schedule will ever release.
    pub amount: u64,
    /// Cumulative amount already paid out; never exceeds `amount`.
    pub claimed: u64,
    pub created_at: i64,
    pub kind: VestingKind,
}

impl VestingSchedule {
    pub const SIZE: usize =
        32 + // beneficiary
        8 +  // amount
        8 +  // claimed
        8 +  // created_at
        VestingKind::SIZE;

    /// Amount released by `now`, regardless of what has been claimed.
    /// Non-decreasing in `now`.
    pub fn vested_amount(&self, now: i64) -> Result<u64, TokenError> {
        match self.kind {
            VestingKind::Interval { percentage, interval } => {
                let tranche = tranche_amount(self.amount, percentage)?;
                let intervals = time::elapsed_intervals(now, self.created_at, interval)?;
                let vested = (tranche as u128)
                    .checked_mul(intervals as u128)
                    .ok_or(TokenError::ArithmeticOverflow)?;
                let capped = vested.min(self.amount as u128);
                u64::try_from(capped).map_err(|_| TokenError::ArithmeticOverflow)
            }
            VestingKind::Cliff { start, duration } => {
                let end = time::deadline_after(start, duration)?;
                if time::has_reached(now, end) {
                    Ok(self.amount)
                } else {
                    Ok(0)
                }
            }
        }
    }

    /// Vested but not yet claimed.
    pub fn releasable(&self, now: i64) -> Result<u64, TokenError> {
        self.vested_amount(now)?
            .checked_sub(self.claimed)
            .ok_or(TokenError::ArithmeticUnderflow)
    }

    pub fn is_exhausted(&self) -> bool {
        self.claimed >= self.amount
    }

    pub fn info(&self, now: i64) -> Result<VestingInfo, TokenError> {
        let vested = self.vested_amount(now)?;
        Ok(VestingInfo {
            beneficiary: self.beneficiary,
            amount: self.amount,
            claimed: self.claimed,
            vested,
            releasable: vested
                .checked_sub(self.claimed)
                .ok_or(TokenError::ArithmeticUnderflow)?,
            created_at: self.created_at,
            kind: self.kind,
        })
    }
}

/// `amount * percentage / 100`, computed without overflow.
pub fn tranche_amount(amount: u64, percentage: u8) -> Result<u64, TokenError> {
    let v = (amount as u128)
        .checked_mul(percentage as u128)
        .ok_or(TokenError::ArithmeticOverflow)?
        / PERCENT_DENOMINATOR as u128;
    u64::try_from(v).map_err(|_| TokenError::ArithmeticOverflow)
}

/// Point-in-time view of a schedule, returned by `get_vesting_info`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingInfo {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub claimed: u64,
    pub vested: u64,
    pub releasable: u64,
    pub created_at: i64,
    pub kind: VestingKind,
}
