use anchor_lang::prelude::*;

use crate::constants::{HOLDER_SEED, LEDGER_SEED};
use crate::state::{HolderEntry, TokenLedger};

pub fn handle_lock_liquidity(ctx: Context<ManageLiquidity>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.owner.key();
    let ledger: &mut TokenLedger = &mut ctx.accounts.ledger;

    let lock = ledger.lock_liquidity(&owner, &ctx.accounts.treasury_holder, amount, now)?;

    emit!(LiquidityLocked {
        amount: lock.amount,
        unlock_at: lock.unlock_at,
    });
    msg!("locked {} until {}", lock.amount, lock.unlock_at);
    Ok(())
}

pub fn handle_unlock_liquidity(ctx: Context<ManageLiquidity>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.owner.key();
    let ledger: &mut TokenLedger = &mut ctx.accounts.ledger;

    let released = ledger.unlock_liquidity(&owner, amount, now)?;

    emit!(LiquidityUnlocked {
        amount: released,
        unlocked_at: now,
    });
    msg!("unlocked {}", released);
    Ok(())
}

#[derive(Accounts)]
pub struct ManageLiquidity<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, TokenLedger>,

    #[account(seeds = [HOLDER_SEED, ledger.key().as_ref()], bump = treasury_holder.bump)]
    pub treasury_holder: Account<'info, HolderEntry>,

    pub owner: Signer<'info>,
}

#[event]
pub struct LiquidityLocked {
    pub amount: u64,
    pub unlock_at: i64,
}

#[event]
pub struct LiquidityUnlocked {
    pub amount: u64,
    pub unlocked_at: i64,
}
