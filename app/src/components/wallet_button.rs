use dioxus::prelude::*;
use futures::StreamExt;
use monster_api::prelude::*;

use crate::hooks::{clear_last_wallet, save_last_wallet, use_controller};

#[derive(Clone)]
enum WalletAction {
    Toggle,
}

#[component]
pub fn WalletButton() -> Element {
    let controller = use_controller();
    let mut wallet = use_context::<Signal<WalletState>>();

    // Use coroutine for lifecycle-safe async operations
    let wallet_coro = use_coroutine(move |mut rx: UnboundedReceiver<WalletAction>| {
        let controller = controller.clone();
        async move {
            while let Some(action) = rx.next().await {
                match action {
                    WalletAction::Toggle => {
                        let status = wallet.peek().status;
                        if status == ConnectionStatus::Connecting {
                            continue;
                        }
                        if status != ConnectionStatus::Connected {
                            wallet.write().status = ConnectionStatus::Connecting;
                        }

                        match controller.toggle_connection(status).await {
                            Ok(Connection::Connected { wallet: handle, address }) => {
                                save_last_wallet(&handle.name);
                                wallet.write().apply(Connection::Connected { wallet: handle, address });
                                match controller.sdk().current_session().await {
                                    Ok(current) => wallet.write().session = current,
                                    Err(e) => tracing::error!("Failed to load session: {}", e),
                                }
                            }
                            Ok(Connection::Disconnected) => {
                                clear_last_wallet();
                                wallet.write().apply(Connection::Disconnected);
                            }
                            Err(e) => {
                                // Back to where the attempt started
                                wallet.write().status = ConnectionStatus::Disconnected;
                                tracing::error!("Wallet connection failed: {}", e);
                            }
                        }
                    }
                }
            }
        }
    });

    let wallet_read = wallet.read();
    let control = wallet_control(wallet_read.status, wallet_read.address.as_ref());

    rsx! {
        button {
            class: "btn btn-outlined",
            disabled: control.loading,
            onclick: move |_| wallet_coro.send(WalletAction::Toggle),
            "{control.label}"
        }
    }
}
