use anchor_lang::prelude::*;

use crate::constants::{HOLDER_SEED, LEDGER_SEED};
use crate::state::{HolderEntry, TokenLedger};

/// Wallets without a holder account hold nothing.
pub fn handle_balance_of(ctx: Context<ReadBalance>, _wallet: Pubkey) -> Result<u64> {
    Ok(ctx
        .accounts
        .holder
        .as_ref()
        .map_or(0, |holder| holder.balance))
}

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct ReadBalance<'info> {
    #[account(seeds = [HOLDER_SEED, wallet.as_ref()], bump)]
    pub holder: Option<Account<'info, HolderEntry>>,
}

/// Read-only access to the ledger for query instructions.
#[derive(Accounts)]
pub struct ReadLedger<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, TokenLedger>,
}
