//! Program-wide constants.

/// PDA seed of the single ledger account.
pub const LEDGER_SEED: &[u8] = b"token_ledger";

/// PDA seed prefix of per-wallet holder accounts: `[HOLDER_SEED, wallet]`.
pub const HOLDER_SEED: &[u8] = b"holder";

/// Max vesting schedules (one per beneficiary).
pub const MAX_SCHEDULES: usize = 32;

/// Max wallets exempted from transfer limits at construction.
pub const MAX_EXEMPT_WALLETS: usize = 8;

/// Max byte length of the token name.
pub const MAX_NAME_LEN: usize = 32;

/// Max byte length of the token symbol.
pub const MAX_SYMBOL_LEN: usize = 10;

/// Percentages are expressed out of 100.
pub const PERCENT_DENOMINATOR: u64 = 100;

/// Burn rate applied to deflationary transfers unless configured otherwise.
pub const DEFAULT_BURN_RATE_PERCENT: u8 = 2;

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Liquidity lock duration unless configured otherwise (30 days).
pub const DEFAULT_LIQUIDITY_LOCK_SECONDS: i64 = 30 * SECONDS_PER_DAY;
