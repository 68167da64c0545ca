use dioxus::prelude::*;

use crate::components::{AddressPanel, MonsterPanel, SessionPanel};

#[component]
pub fn Home() -> Element {
    rsx! {
        AddressPanel {}
        SessionPanel {}
        MonsterPanel {}
    }
}
