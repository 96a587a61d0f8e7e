use anchor_lang::prelude::*;

use crate::constants::{HOLDER_SEED, LEDGER_SEED};
use crate::state::{HolderEntry, InitializeParams, TokenLedger};

pub fn handle_initialize_token(ctx: Context<InitializeToken>, params: InitializeParams) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.owner.key();
    let treasury = ctx.accounts.ledger.key();

    let mut owner_holder = HolderEntry::new(owner, ctx.bumps.owner_holder);
    let ledger = TokenLedger::genesis(
        owner,
        treasury,
        ctx.bumps.ledger,
        params,
        now,
        &mut owner_holder,
    )?;

    emit!(TokenInitialized {
        owner,
        treasury,
        name: ledger.name.clone(),
        symbol: ledger.symbol.clone(),
        decimals: ledger.decimals,
        total_supply: ledger.total_supply,
        transfer_allowed_at: ledger.transfer_allowed_at,
    });
    msg!(
        "initialized {} ({}) supply={} allowed_at={}",
        ledger.name,
        ledger.symbol,
        ledger.total_supply,
        ledger.transfer_allowed_at
    );

    ctx.accounts.ledger.set_inner(ledger);
    ctx.accounts.owner_holder.set_inner(owner_holder);
    ctx.accounts
        .treasury_holder
        .set_inner(HolderEntry::new(treasury, ctx.bumps.treasury_holder));
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeToken<'info> {
    #[account(
        init,
        payer = owner,
        space = TokenLedger::space(),
        seeds = [LEDGER_SEED],
        bump
    )]
    pub ledger: Account<'info, TokenLedger>,

    #[account(
        init,
        payer = owner,
        space = 8 + HolderEntry::SIZE,
        seeds = [HOLDER_SEED, owner.key().as_ref()],
        bump
    )]
    pub owner_holder: Account<'info, HolderEntry>,

    /// Holder account of the treasury, keyed by the ledger address.
    #[account(
        init,
        payer = owner,
        space = 8 + HolderEntry::SIZE,
        seeds = [HOLDER_SEED, ledger.key().as_ref()],
        bump
    )]
    pub treasury_holder: Account<'info, HolderEntry>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct TokenInitialized {
    pub owner: Pubkey,
    pub treasury: Pubkey,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: u64,
    pub transfer_allowed_at: i64,
}
