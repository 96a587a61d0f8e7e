pub mod holders;
pub mod liquidity;
pub mod token_ledger;
pub mod vesting;

pub use holders::*;
pub use liquidity::*;
pub use token_ledger::*;
pub use vesting::*;
