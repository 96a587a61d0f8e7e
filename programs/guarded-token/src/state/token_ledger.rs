use anchor_lang::prelude::*;

use crate::constants::{MAX_EXEMPT_WALLETS, MAX_NAME_LEN, MAX_SCHEDULES, MAX_SYMBOL_LEN};
use crate::state::{LiquidityLock, VestingSchedule};

/// Ledger state PDA: token configuration, supply, the vesting book and the
/// liquidity lock. Balances and restriction flags live in per-wallet
/// `HolderEntry` accounts.
#[account]
pub struct TokenLedger {
    /// Administrative authority; never the zero address once initialized.
    pub owner: Pubkey,
    /// The ledger PDA's own address. Its holder account funds vesting claims
    /// and liquidity locks.
    pub treasury: Pubkey,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Always equals the sum of all holder balances.
    pub total_supply: u64,
    pub paused: bool,
    /// Anti-whale cap for non-whitelisted senders.
    pub max_transfer_amount: u64,
    /// Senders that are neither whitelisted nor the owner may transfer from
    /// this unix time on.
    pub transfer_allowed_at: i64,
    pub deflationary: bool,
    /// Share of each deflationary transfer that is burned.
    pub burn_rate_percent: u8,
    pub liquidity: LiquidityLock,
    /// Seconds between `lock_liquidity` and the earliest unlock.
    pub liquidity_lock_duration: i64,
    /// Set for the duration of a value-moving call.
    pub entered: bool,
    pub bump: u8,
    /// Whitelisted at construction without a stored holder flag.
    pub exempt_wallets: Vec<Pubkey>,
    pub schedules: Vec<VestingSchedule>,
}

impl TokenLedger {
    /// Discriminator + fields at their maximum bounded size.
    pub const fn space() -> usize {
        8 +                                         // discriminator
        32 +                                        // owner
        32 +                                        // treasury
        4 + MAX_NAME_LEN +                          // name
        4 + MAX_SYMBOL_LEN +                        // symbol
        1 +                                         // decimals
        8 +                                         // total_supply
        1 +                                         // paused
        8 +                                         // max_transfer_amount
        8 +                                         // transfer_allowed_at
        1 +                                         // deflationary
        1 +                                         // burn_rate_percent
        LiquidityLock::SIZE +                       // liquidity
        8 +                                         // liquidity_lock_duration
        1 +                                         // entered
        1 +                                         // bump
        4 + MAX_EXEMPT_WALLETS * 32 +               // exempt_wallets
        4 + MAX_SCHEDULES * VestingSchedule::SIZE   // schedules
    }
}

/// Construction arguments of `initialize_token`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct InitializeParams {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Credited to the owner's holder account.
    pub initial_supply: u64,
    pub max_transfer_amount: u64,
    /// Seconds after initialization before non-whitelisted transfers open.
    pub transfer_delay: i64,
    pub deflationary: bool,
    pub burn_rate_percent: u8,
    pub liquidity_lock_duration: i64,
    /// Whitelisted at construction.
    pub exempt_wallets: Vec<Pubkey>,
}
