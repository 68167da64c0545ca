/// Publish address of the monster contract.
pub const MONSTER_CONTRACT: &str =
    "0xc884e7019d1f68755ea944efbae61f2292b25c4257ef90bbea61ec1ac4b45e36";

/// Move module holding the monster entry functions.
pub const MONSTER_MODULE: &str = "monsters";

/// Name the session key is registered under.
pub const APP_NAME: &str = "rooch_monster";

/// Callback URL recorded with the session key.
pub const APP_URL: &str = "http://localhost:5173";

/// Seconds of inactivity after which a session key expires.
pub const MAX_INACTIVE_INTERVAL: u64 = 1000;

/// Label shown in the header chip.
pub const NETWORK_LABEL: &str = "Rooch Testnet";

/// Leading/trailing characters kept when shortening the connected address.
pub const SHORT_ADDRESS_HEAD: usize = 8;
pub const SHORT_ADDRESS_TAIL: usize = 6;
