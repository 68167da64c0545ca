use dioxus::prelude::*;
use monster_api::prelude::*;

use crate::hooks::{refetch_monster, use_controller, TxnLoading};
use crate::MonsterState;

#[component]
pub fn MonsterPanel() -> Element {
    let controller = use_controller();
    let mut monster = use_context::<Signal<MonsterState>>();
    let wallet = use_context::<Signal<WalletState>>();
    let txn_loading = use_context::<TxnLoading>();

    let query = move |_| {
        spawn(refetch_monster(controller.clone(), monster));
    };

    let current_session = wallet.read().session.clone();
    let loading = *txn_loading.0.read();
    let monster_read = monster.read();
    let token_id = monster_read.token_id.clone();
    let token_valid = monster_read.parsed_token_id().is_some();
    let record = monster_read.record.clone();
    drop(monster_read);

    rsx! {
        hr { class: "w-full mt-12" }
        div { class: "flex flex-col items-start mt-4 w-full font-medium",
            h2 { class: "text-3xl font-bold",
                "dApp integration"
                span { class: "text-base font-normal ml-4", "({MONSTER_CONTRACT})" }
            }

            div { class: "flex flex-col items-start mt-4 space-y-2 w-full",
                // Token to query
                div { class: "flex items-center gap-2 w-full",
                    input {
                        class: "border rounded px-3 py-2 font-mono w-full",
                        placeholder: "Monster token id",
                        value: "{token_id}",
                        oninput: move |e| monster.write().token_id = e.value(),
                    }
                    button {
                        class: "btn btn-contained",
                        disabled: !token_valid,
                        onclick: query,
                        {MonsterFunction::GetMonsterPermanentState(U256::ZERO).label()}
                    }
                }

                div { class: "text-xl",
                    "Monster data:"
                    div { class: "ml-2",
                        if let Some(record) = record {
                            MonsterDetails { record }
                        } else {
                            p { "No monster data available." }
                        }
                    }
                }

                for function in [MonsterFunction::MintMonster, MonsterFunction::TrainMonster, MonsterFunction::HarvestMonster] {
                    TxnButton {
                        key: "{function:?}",
                        function,
                        control: transaction_control(function, current_session.as_ref(), loading),
                    }
                }
            }
        }
    }
}

#[component]
fn TxnButton(function: MonsterFunction, control: Control) -> Element {
    let controller = use_controller();
    let monster = use_context::<Signal<MonsterState>>();
    let txn_loading = use_context::<TxnLoading>();

    let submit = move |_| {
        let controller = controller.clone();
        spawn(async move {
            let mut loading = txn_loading;
            let refetch_with = controller.clone();
            if let Err(e) = controller
                .submit(function, &mut loading, || refetch_monster(refetch_with, monster))
                .await
            {
                tracing::debug!("{} not submitted: {}", function.label(), e);
            }
        });
    };

    rsx! {
        button {
            class: "btn btn-contained w-full",
            disabled: control.disabled || control.loading,
            onclick: submit,
            if control.loading { "Submitting..." } else { "{control.label}" }
        }
    }
}

#[component]
fn MonsterDetails(record: MonsterRecord) -> Element {
    let rows = [
        ("Variety", field(record.variety)),
        ("Level", field(record.level)),
        ("Experience", field(record.experience)),
        ("Health", field(record.health)),
        ("Last Training Time", field(record.last_training_time.map(format_timestamp))),
        ("Wins", field(record.wins)),
        ("Losses", field(record.losses)),
        ("Achievement", field(record.achievement)),
    ];

    rsx! {
        for (label, value) in rows {
            p { "{label}: {value}" }
        }
    }
}

fn field<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

// Falls back to the raw value when it does not fit a timestamp.
fn format_timestamp(secs: U256) -> String {
    match u64::try_from(secs) {
        Ok(secs) => locale_time(secs),
        Err(_) => secs.to_string(),
    }
}

#[cfg(feature = "web")]
fn locale_time(secs: u64) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(secs as f64 * 1000.0));
    date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

#[cfg(not(feature = "web"))]
fn locale_time(secs: u64) -> String {
    secs.to_string()
}
