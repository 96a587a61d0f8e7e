use anchor_lang::prelude::*;

use crate::constants::LEDGER_SEED;
use crate::state::TokenLedger;

pub fn handle_set_max_transfer_amount(ctx: Context<Configure>, amount: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let ledger: &mut TokenLedger = &mut ctx.accounts.ledger;
    ledger.set_max_transfer_amount(&owner, amount)?;
    emit!(MaxTransferAmountSet { amount });
    Ok(())
}

pub fn handle_set_transfer_delay(ctx: Context<Configure>, delay: i64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.owner.key();
    let ledger: &mut TokenLedger = &mut ctx.accounts.ledger;
    let allowed_at = ledger.set_transfer_delay(&owner, delay, now)?;
    emit!(TransferDelaySet { delay, allowed_at });
    Ok(())
}

pub fn handle_set_deflationary(ctx: Context<Configure>, enabled: bool) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let ledger: &mut TokenLedger = &mut ctx.accounts.ledger;
    ledger.set_deflationary(&owner, enabled)?;
    emit!(DeflationSet {
        enabled,
        burn_rate_percent: ledger.burn_rate_percent,
    });
    Ok(())
}

pub fn handle_set_burn_rate(ctx: Context<Configure>, percent: u8) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let ledger: &mut TokenLedger = &mut ctx.accounts.ledger;
    ledger.set_burn_rate(&owner, percent)?;
    emit!(BurnRateSet { percent });
    Ok(())
}

pub fn handle_set_liquidity_lock_duration(ctx: Context<Configure>, seconds: i64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let ledger: &mut TokenLedger = &mut ctx.accounts.ledger;
    ledger.set_liquidity_lock_duration(&owner, seconds)?;
    emit!(LiquidityLockDurationSet { seconds });
    Ok(())
}

#[derive(Accounts)]
pub struct Configure<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, TokenLedger>,
    pub owner: Signer<'info>,
}

#[event]
pub struct MaxTransferAmountSet {
    pub amount: u64,
}

#[event]
pub struct TransferDelaySet {
    pub delay: i64,
    pub allowed_at: i64,
}

#[event]
pub struct DeflationSet {
    pub enabled: bool,
    pub burn_rate_percent: u8,
}

#[event]
pub struct BurnRateSet {
    pub percent: u8,
}

#[event]
pub struct LiquidityLockDurationSet {
    pub seconds: i64,
}
