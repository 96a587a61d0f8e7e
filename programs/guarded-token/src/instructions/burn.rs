use anchor_lang::prelude::*;

use crate::constants::{HOLDER_SEED, LEDGER_SEED};
use crate::state::{HolderEntry, TokenLedger};

pub fn handle_burn(ctx: Context<BurnTokens>, amount: u64) -> Result<()> {
    let holder = ctx.accounts.holder.key();
    let accounts = &mut *ctx.accounts;
    let ledger: &mut TokenLedger = &mut accounts.ledger;
    let total_supply = ledger.burn(&mut accounts.holder_account, amount)?;
    emit!(TokensBurned {
        from: holder,
        amount,
        total_supply,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct BurnTokens<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, TokenLedger>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, holder.key().as_ref()],
        bump = holder_account.bump
    )]
    pub holder_account: Account<'info, HolderEntry>,

    pub holder: Signer<'info>,
}

#[event]
pub struct TokensBurned {
    pub from: Pubkey,
    pub amount: u64,
    pub total_supply: u64,
}
