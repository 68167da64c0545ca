//! Last connected wallet, kept across page loads.

#[cfg(feature = "web")]
mod imp {
    use gloo_storage::{LocalStorage, Storage};

    const LAST_WALLET_KEY: &str = "rooch_monster.last_wallet";

    pub fn load_last_wallet() -> Option<String> {
        LocalStorage::get(LAST_WALLET_KEY).ok()
    }

    pub fn save_last_wallet(name: &str) {
        if let Err(e) = LocalStorage::set(LAST_WALLET_KEY, name) {
            tracing::error!("Failed to save wallet name: {}", e);
        }
    }

    pub fn clear_last_wallet() {
        LocalStorage::delete(LAST_WALLET_KEY);
    }
}

#[cfg(not(feature = "web"))]
mod imp {
    pub fn load_last_wallet() -> Option<String> {
        None
    }

    pub fn save_last_wallet(_name: &str) {}

    pub fn clear_last_wallet() {}
}

pub use imp::*;
