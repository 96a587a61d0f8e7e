use anchor_lang::prelude::*;

use crate::constants::LEDGER_SEED;
use crate::state::TokenLedger;

pub fn handle_pause(ctx: Context<Pause>) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let ledger: &mut TokenLedger = &mut ctx.accounts.ledger;
    ledger.pause(&owner)?;
    emit!(TokenPaused { owner });
    Ok(())
}

#[derive(Accounts)]
pub struct Pause<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, TokenLedger>,
    pub owner: Signer<'info>,
}

#[event]
pub struct TokenPaused {
    pub owner: Pubkey,
}
