use dioxus::prelude::*;
use monster_api::prelude::*;

use super::storage::load_last_wallet;
use super::use_controller;

/// Reconnect the last wallet and reload the persisted session key once,
/// when the app mounts.
pub fn use_restore() {
    let controller = use_controller();
    let mut wallet = use_context::<Signal<WalletState>>();

    use_future(move || {
        let controller = controller.clone();
        async move {
            let last_wallet = load_last_wallet();
            if last_wallet.is_some() {
                wallet.write().status = ConnectionStatus::Connecting;
            }
            match controller.restore(last_wallet.as_deref()).await {
                Ok(restored) => wallet.set(restored),
                Err(e) => {
                    wallet.set(WalletState::default());
                    tracing::error!("Failed to restore wallet: {}", e);
                }
            }
        }
    });
}
