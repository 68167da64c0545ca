use dioxus::prelude::*;
use monster_api::prelude::*;

use crate::hooks::{use_controller, SessionLoading};

#[component]
pub fn SessionPanel() -> Element {
    let controller = use_controller();
    let mut wallet = use_context::<Signal<WalletState>>();
    let session_loading = use_context::<SessionLoading>();

    let create_session = {
        let controller = controller.clone();
        move |_| {
            let controller = controller.clone();
            spawn(async move {
                let mut loading = session_loading;
                if let Ok(Some(created)) = controller.create_session_key(&mut loading).await {
                    wallet.write().session = Some(created);
                }
            });
        }
    };

    let clear_session = move |_| {
        let controller = controller.clone();
        let Some(current) = wallet.peek().session.clone() else {
            return;
        };
        spawn(async move {
            match controller.remove_session_key(&current).await {
                Ok(()) => wallet.write().session = None,
                Err(e) => tracing::error!("Failed to remove session key: {}", e),
            }
        });
    };

    let wallet_read = wallet.read();
    let current = wallet_read.session.clone();
    let status = wallet_read.status;
    drop(wallet_read);
    let control = session_control(
        status,
        current.as_ref(),
        *session_loading.0.read(),
    );

    let rooch_address = current.as_ref().map(|s| s.rooch_address.clone()).unwrap_or_default();
    let key_scheme = current.as_ref().map(|s| s.key_scheme.clone()).unwrap_or_default();
    let create_time = current.as_ref().map(|s| s.create_time.to_string()).unwrap_or_default();

    rsx! {
        hr { class: "w-full mt-12" }
        div { class: "flex flex-col items-start mt-4 w-full font-medium",
            h2 { class: "text-3xl font-bold", "Session Key" }
            div { class: "flex flex-col items-start mt-4 text-left space-y-2",
                SessionRow { label: "Session Rooch address:", value: rooch_address }
                SessionRow { label: "Key scheme:", value: key_scheme }
                SessionRow { label: "Create time:", value: create_time }
            }

            if current.is_none() {
                button {
                    class: "btn btn-contained mt-4",
                    disabled: control.disabled || control.loading,
                    onclick: create_session,
                    if control.loading { "Creating..." } else { "{control.label}" }
                }
            } else {
                button {
                    class: "btn btn-contained mt-4",
                    onclick: clear_session,
                    "{control.label}"
                }
            }
        }
    }
}

#[component]
fn SessionRow(label: &'static str, value: String) -> Element {
    rsx! {
        p { class: "text-xl",
            "{label} "
            span { class: "underline tracking-wide underline-offset-8 ml-2", "{value}" }
        }
    }
}
