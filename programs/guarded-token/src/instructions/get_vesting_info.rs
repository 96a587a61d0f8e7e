use anchor_lang::prelude::*;

use crate::state::{VestingInfo, VestingKind};

use super::ReadLedger;

/// Returns the schedule of `wallet` as of now and mirrors it in a
/// `VestingQuote` event for clients that read logs instead of return data.
pub fn handle_get_vesting_info(ctx: Context<ReadLedger>, wallet: Pubkey) -> Result<VestingInfo> {
    let now = Clock::get()?.unix_timestamp;
    let info = ctx.accounts.ledger.vesting_info(&wallet, now)?;

    emit!(VestingQuote {
        wallet,
        amount: info.amount,
        vested_amount: info.vested,
        claimed_amount: info.claimed,
        releasable: info.releasable,
        kind: info.kind,
    });

    Ok(info)
}

#[event]
pub struct VestingQuote {
    pub wallet: Pubkey,
    pub amount: u64,
    pub vested_amount: u64,
    pub claimed_amount: u64,
    pub releasable: u64,
    pub kind: VestingKind,
}
