use anchor_lang::prelude::*;

use crate::constants::LEDGER_SEED;
use crate::state::TokenLedger;

pub fn handle_unpause(ctx: Context<Unpause>) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let ledger: &mut TokenLedger = &mut ctx.accounts.ledger;
    ledger.unpause(&owner)?;
    emit!(TokenUnpaused { owner });
    Ok(())
}

#[derive(Accounts)]
pub struct Unpause<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, TokenLedger>,
    pub owner: Signer<'info>,
}

#[event]
pub struct TokenUnpaused {
    pub owner: Pubkey,
}
