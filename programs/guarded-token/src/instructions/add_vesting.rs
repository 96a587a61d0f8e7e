use anchor_lang::prelude::*;

use crate::constants::LEDGER_SEED;
use crate::state::{TokenLedger, VestingKind};

/// Interval schedule: `percentage`% of `amount` per elapsed `interval`.
pub fn handle_add_vesting_schedule(
    ctx: Context<AddVesting>,
    beneficiary: Pubkey,
    amount: u64,
    percentage: u8,
    interval: i64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.owner.key();
    let ledger: &mut TokenLedger = &mut ctx.accounts.ledger;
    ledger.add_vesting_schedule(&owner, beneficiary, amount, percentage, interval, now)?;
    emit!(VestingScheduleAdded {
        beneficiary,
        amount,
        created_at: now,
        kind: VestingKind::Interval {
            percentage,
            interval,
        },
    });
    Ok(())
}

/// Cliff schedule: all of `amount` at `start + duration`.
pub fn handle_add_vesting(
    ctx: Context<AddVesting>,
    beneficiary: Pubkey,
    amount: u64,
    start: i64,
    duration: i64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.owner.key();
    let ledger: &mut TokenLedger = &mut ctx.accounts.ledger;
    ledger.add_vesting(&owner, beneficiary, amount, start, duration, now)?;
    emit!(VestingScheduleAdded {
        beneficiary,
        amount,
        created_at: now,
        kind: VestingKind::Cliff { start, duration },
    });
    Ok(())
}

#[derive(Accounts)]
pub struct AddVesting<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, TokenLedger>,
    pub owner: Signer<'info>,
}

#[event]
pub struct VestingScheduleAdded {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub created_at: i64,
    pub kind: VestingKind,
}
