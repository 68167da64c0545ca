mod bridge;
mod flags;
mod rpc;
mod storage;
mod use_monster;
mod use_restore;

pub use bridge::BrowserSdk;
pub use flags::{SessionLoading, TxnLoading};
pub use storage::{clear_last_wallet, save_last_wallet};
pub use use_monster::{refetch_monster, use_controller};
pub use use_restore::use_restore;
