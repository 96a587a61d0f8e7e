use anchor_lang::prelude::*;

use crate::constants::{HOLDER_SEED, LEDGER_SEED};
use crate::state::{HolderEntry, TokenLedger};

/// Pays the signer what their schedule has vested since the last claim.
/// Backs both `claim` and `claim_vested_tokens`.
pub fn handle_claim(ctx: Context<ClaimVested>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let beneficiary = ctx.accounts.beneficiary.key();
    let accounts = &mut *ctx.accounts;
    let ledger: &mut TokenLedger = &mut accounts.ledger;

    let outcome = ledger.claim(
        &mut accounts.beneficiary_holder,
        &mut accounts.treasury_holder,
        now,
    )?;

    emit!(VestingClaimed {
        beneficiary,
        amount: outcome.amount,
        claimed_total: outcome.claimed_total,
        remaining: outcome.remaining,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ClaimVested<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, TokenLedger>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, beneficiary.key().as_ref()],
        bump = beneficiary_holder.bump
    )]
    pub beneficiary_holder: Account<'info, HolderEntry>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, ledger.key().as_ref()],
        bump = treasury_holder.bump
    )]
    pub treasury_holder: Account<'info, HolderEntry>,

    pub beneficiary: Signer<'info>,
}

#[event]
pub struct VestingClaimed {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub claimed_total: u64,
    pub remaining: u64,
}
