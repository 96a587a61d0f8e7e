use anchor_lang::prelude::*;

/// Failure reasons surfaced by the token program. Every rejected call maps to
/// exactly one variant and leaves the ledger untouched.
#[error_code]
pub enum TokenError {
    #[msg("Ownable: caller is not the owner")]
    Unauthorized,

    #[msg("New owner cannot be zero address")]
    InvalidOwner,

    #[msg("Pausable: paused")]
    Paused,

    #[msg("Pausable: not paused")]
    NotPaused,

    #[msg("Sender is blacklisted")]
    Blacklisted,

    #[msg("Sender's wallet is frozen")]
    SenderFrozen,

    #[msg("Amount exceeds maximum")]
    ExceedsMaxTransfer,

    #[msg("Transfer not allowed yet")]
    TransferNotYetAllowed,

    #[msg("Insufficient balance")]
    InsufficientBalance,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Arithmetic underflow")]
    ArithmeticUnderflow,

    #[msg("Invalid recipient: zero address")]
    InvalidRecipient,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid burn rate (must be <= 100)")]
    InvalidBurnRate,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("No vesting schedule found for caller")]
    NoVestingFound,

    #[msg("Nothing to claim")]
    NothingToClaim,

    #[msg("Vesting schedule already exists for beneficiary")]
    VestingAlreadyExists,

    #[msg("Invalid vesting parameters")]
    InvalidVestingParams,

    #[msg("Vesting book is full")]
    VestingBookFull,

    #[msg("Liquidity is still locked")]
    LiquidityStillLocked,

    #[msg("Liquidity is not locked")]
    NotLocked,

    #[msg("Liquidity is already locked")]
    AlreadyLocked,

    #[msg("Unlock amount must equal the locked amount")]
    UnlockAmountMismatch,

    #[msg("Reentrant call rejected")]
    Reentrancy,

    #[msg("Holder account belongs to another wallet")]
    HolderMismatch,
}
