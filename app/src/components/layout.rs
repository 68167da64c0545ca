use dioxus::prelude::*;
use monster_api::consts::NETWORK_LABEL;

use crate::components::WalletButton;
use crate::route::Route;

#[component]
pub fn Layout() -> Element {
    rsx! {
        div { class: "font-sans min-w-[1024px] flex flex-col",
            style: "min-height: calc(100vh - 4rem);",
            // Header
            div { class: "flex justify-between w-full",
                img { src: "./rooch_black_combine.svg", width: "120px", alt: "" }
                div { class: "flex items-center space-x-2",
                    span { class: "px-3 py-2 rounded-full font-semibold bg-slate-950 text-slate-50 min-h-10",
                        "{NETWORK_LABEL}"
                    }
                    WalletButton {}
                }
            }

            h1 { class: "text-4xl font-semibold mt-6 text-left w-full mb-4",
                "ROOCH Monster | "
                span { class: "text-2xl", "Pokemon" }
            }
            hr { class: "w-full" }

            // Main content
            main { class: "w-full",
                Outlet::<Route> {}
            }
        }
    }
}
