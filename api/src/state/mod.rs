mod monster;
mod wallet;

pub use monster::*;
pub use wallet::*;
