pub mod initialize_token;
pub mod open_holder;
pub mod transfer;
pub mod transfer_ownership;
pub mod pause;
pub mod unpause;
pub mod restrictions;
pub mod configure;
pub mod mint;
pub mod burn;
pub mod add_vesting;
pub mod claim;
pub mod liquidity;
pub mod balance_of;
pub mod get_vesting_info;

pub use initialize_token::*;
pub use open_holder::*;
pub use transfer::*;
pub use transfer_ownership::*;
pub use pause::*;
pub use unpause::*;
pub use restrictions::*;
pub use configure::*;
pub use mint::*;
pub use burn::*;
pub use add_vesting::*;
pub use claim::*;
pub use liquidity::*;
pub use balance_of::*;
pub use get_vesting_info::*;
