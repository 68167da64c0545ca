use dioxus::prelude::*;

use monster_api::state::WalletState;

#[component]
pub fn AddressPanel() -> Element {
    let wallet = use_context::<Signal<WalletState>>();
    let address = wallet.read().address.clone().unwrap_or_default();

    rsx! {
        div { class: "flex flex-col mt-4 font-medium font-serif w-full text-left space-y-2",
            AddressRow { label: "Rooch Address:", value: address.rooch }
            AddressRow { label: "Hex Address:", value: address.hex }
            AddressRow { label: "Bitcoin Address:", value: address.bitcoin }
        }
    }
}

#[component]
fn AddressRow(label: &'static str, value: String) -> Element {
    rsx! {
        p { class: "text-xl",
            "{label}"
            span { class: "underline tracking-wide underline-offset-8 ml-2", "{value}" }
        }
    }
}
