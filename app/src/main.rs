#![allow(non_snake_case)]

mod components;
mod hooks;
mod pages;
mod route;

use dioxus::prelude::*;
use monster_api::prelude::*;
use route::Route;

use hooks::{use_restore, BrowserSdk, SessionLoading, TxnLoading};

// Configuration
pub const RPC_URL: &str = "https://test-seed.rooch.network";

fn main() {
    #[cfg(feature = "web")]
    {
        tracing_wasm::set_as_global_default();
        dioxus::launch(App);
    }

    #[cfg(feature = "desktop")]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    // Global state providers
    use_context_provider(|| Controller::new(BrowserSdk::new(RPC_URL)));
    use_context_provider(|| Signal::new(WalletState::default()));
    use_context_provider(|| Signal::new(MonsterState::default()));
    use_context_provider(|| SessionLoading(Signal::new(false)));
    use_context_provider(|| TxnLoading(Signal::new(false)));

    use_restore();

    rsx! {
        Router::<Route> {}
    }
}

// Global state types
#[derive(Clone, Default, Debug)]
pub struct MonsterState {
    pub token_id: String,       // Raw input, parsed on query
    pub record: Option<MonsterRecord>,
}

impl MonsterState {
    pub fn parsed_token_id(&self) -> Option<U256> {
        parse_u256(&self.token_id).ok()
    }
}
