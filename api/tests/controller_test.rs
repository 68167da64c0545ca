use std::cell::{Cell, RefCell};
use std::rc::Rc;

use monster_api::prelude::*;
use serde_json::json;

/// Records every SDK call; failures are switched on per operation.
#[derive(Clone, Default)]
struct MockSdk {
    inner: Rc<MockState>,
}

#[derive(Default)]
struct MockState {
    wallets: RefCell<Vec<WalletHandle>>,
    calls: RefCell<Vec<String>>,
    fail_connect: Cell<bool>,
    fail_remove: Cell<bool>,
    fail_sign: Cell<bool>,
    fail_session: Cell<bool>,
    fail_view: Cell<bool>,
    persisted_session: RefCell<Option<SessionInfo>>,
    // Observed state of the txn flag while signing.
    flag_seen_while_signing: RefCell<Option<Rc<Cell<bool>>>>,
    flag_during_sign: Cell<Option<bool>>,
}

impl MockSdk {
    fn with_wallets(names: &[&str]) -> Self {
        let sdk = Self::default();
        *sdk.inner.wallets.borrow_mut() = names
            .iter()
            .map(|n| WalletHandle { name: n.to_string() })
            .collect();
        sdk
    }

    fn calls(&self) -> Vec<String> {
        self.inner.calls.borrow().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.inner.calls.borrow_mut().push(call.into());
    }
}

fn session() -> SessionInfo {
    SessionInfo {
        rooch_address: "rooch1session".to_string(),
        key_scheme: "Ed25519".to_string(),
        create_time: 1_717_000_000_000,
        auth_key: "0xauth".to_string(),
    }
}

impl WalletSdk for MockSdk {
    async fn wallets(&self) -> Vec<WalletHandle> {
        self.inner.wallets.borrow().clone()
    }

    async fn connect(&self, wallet: &WalletHandle) -> Result<CurrentAddress, SdkError> {
        self.record(format!("connect:{}", wallet.name));
        if self.inner.fail_connect.get() {
            return Err(SdkError::Rejected("user closed the popup".to_string()));
        }
        Ok(CurrentAddress {
            rooch: "rooch1owner".to_string(),
            hex: "0x0a".to_string(),
            bitcoin: "bc1qowner".to_string(),
        })
    }

    fn disconnect(&self) {
        self.record("disconnect");
    }

    async fn current_session(&self) -> Result<Option<SessionInfo>, SdkError> {
        self.record("current_session");
        Ok(self.inner.persisted_session.borrow().clone())
    }

    async fn create_session(&self, args: &SessionArgs) -> Result<SessionInfo, SdkError> {
        self.record(format!("create_session:{}", args.scopes.join(",")));
        if self.inner.fail_session.get() {
            return Err(SdkError::Rejected("user cancelled".to_string()));
        }
        Ok(session())
    }

    async fn remove_session(&self, auth_key: &str) -> Result<(), SdkError> {
        self.record(format!("remove_session:{}", auth_key));
        if self.inner.fail_remove.get() {
            return Err(SdkError::Rejected("signature declined".to_string()));
        }
        Ok(())
    }

    async fn sign_and_execute(&self, call: &CallFunction) -> Result<ExecutionInfo, SdkError> {
        self.record(format!("sign:{}", call.function_id.function));
        if let Some(flag) = self.inner.flag_seen_while_signing.borrow().as_ref() {
            self.inner.flag_during_sign.set(Some(flag.get()));
        }
        if self.inner.fail_sign.get() {
            return Err(SdkError::Rpc {
                code: -32000,
                message: "MoveAbort".to_string(),
            });
        }
        Ok(ExecutionInfo {
            tx_hash: "0xhash".to_string(),
            status: "executed".to_string(),
        })
    }

    async fn execute_view(&self, call: &CallFunction) -> Result<AnnotatedFunctionResult, SdkError> {
        self.record(format!("view:{}", call.function_id.function));
        if self.inner.fail_view.get() {
            return Err(SdkError::Unavailable("offline".to_string()));
        }
        Ok(serde_json::from_value(json!({
            "vm_status": "Executed",
            "return_values": [{ "value": {}, "decoded_value": { "level": "3", "wins": 2 } }]
        }))?)
    }
}

#[tokio::test]
async fn connect_uses_first_wallet_once() {
    let sdk = MockSdk::with_wallets(&["UniSat", "OKX"]);
    let controller = Controller::new(sdk.clone());

    let outcome = controller
        .toggle_connection(ConnectionStatus::Disconnected)
        .await
        .unwrap();

    assert!(matches!(
        outcome,
        Connection::Connected { ref wallet, ref address }
            if wallet.name == "UniSat" && address.rooch == "rooch1owner"
    ));
    assert_eq!(sdk.calls(), vec!["connect:UniSat"]);
}

#[tokio::test]
async fn connect_picks_the_only_installed_wallet() {
    let sdk = MockSdk::with_wallets(&["OKX"]);
    let controller = Controller::new(sdk.clone());

    controller
        .toggle_connection(ConnectionStatus::Disconnected)
        .await
        .unwrap();

    assert_eq!(sdk.calls(), vec!["connect:OKX"]);
}

#[tokio::test]
async fn connect_rejection_reaches_the_caller() {
    let sdk = MockSdk::with_wallets(&["UniSat", "OKX"]);
    sdk.inner.fail_connect.set(true);
    let controller = Controller::new(sdk.clone());

    let result = controller
        .toggle_connection(ConnectionStatus::Disconnected)
        .await;

    assert!(matches!(result, Err(SdkError::Rejected(_))));
    assert_eq!(sdk.calls(), vec!["connect:UniSat"]);
}

#[tokio::test]
async fn connect_without_wallet_fails() {
    let controller = Controller::new(MockSdk::default());
    assert_eq!(
        controller.toggle_connection(ConnectionStatus::Disconnected).await,
        Err(SdkError::NoWallet)
    );
}

#[tokio::test]
async fn disconnect_issues_no_remote_request() {
    let sdk = MockSdk::with_wallets(&["UniSat"]);
    let controller = Controller::new(sdk.clone());

    let outcome = controller
        .toggle_connection(ConnectionStatus::Connected)
        .await
        .unwrap();

    assert_eq!(outcome, Connection::Disconnected);
    assert_eq!(sdk.calls(), vec!["disconnect"]);
}

#[tokio::test]
async fn successful_submit_refetches_exactly_once() -> anyhow::Result<()> {
    for function in [
        MonsterFunction::MintMonster,
        MonsterFunction::TrainMonster,
        MonsterFunction::HarvestMonster,
    ] {
        let sdk = MockSdk::default();
        let controller = Controller::new(sdk.clone());
        let refetches = Rc::new(Cell::new(0));
        let mut loading = false;

        let counter = refetches.clone();
        let info = controller
            .submit(function, &mut loading, || async move {
                counter.set(counter.get() + 1);
            })
            .await?;

        assert_eq!(info.map(|i| i.tx_hash), Some("0xhash".to_string()));
        assert_eq!(refetches.get(), 1);
        assert!(!loading);
        assert_eq!(sdk.calls(), vec![format!("sign:{}", function.name())]);
    }
    Ok(())
}

#[tokio::test]
async fn submit_precedes_refetch() {
    let sdk = MockSdk::default();
    let controller = Controller::new(sdk.clone());
    let mut loading = false;

    let inner = controller.clone();
    controller
        .submit(MonsterFunction::TrainMonster, &mut loading, || async move {
            inner.query_monster(U256::from(1u64)).await;
        })
        .await
        .unwrap();

    assert_eq!(
        sdk.calls(),
        vec!["sign:train_monster", "view:get_monster_permanent_state"]
    );
}

#[tokio::test]
async fn failed_submit_clears_flag_and_skips_refetch() {
    let sdk = MockSdk::default();
    sdk.inner.fail_sign.set(true);
    let controller = Controller::new(sdk.clone());

    let flag = Rc::new(Cell::new(false));
    *sdk.inner.flag_seen_while_signing.borrow_mut() = Some(flag.clone());
    let refetches = Rc::new(Cell::new(0));

    let mut handle = flag.clone();
    let counter = refetches.clone();
    let result = controller
        .submit(MonsterFunction::MintMonster, &mut handle, || async move {
            counter.set(counter.get() + 1);
        })
        .await;

    assert!(matches!(result, Err(SdkError::Rpc { code: -32000, .. })));
    assert_eq!(sdk.inner.flag_during_sign.get(), Some(true));
    assert!(!flag.get());
    assert_eq!(refetches.get(), 0);
}

#[tokio::test]
async fn submit_while_loading_sends_nothing() {
    let sdk = MockSdk::default();
    let controller = Controller::new(sdk.clone());
    let mut loading = true;

    let result = controller
        .submit(MonsterFunction::HarvestMonster, &mut loading, || async {})
        .await
        .unwrap();

    assert_eq!(result, None);
    assert!(loading);
    assert!(sdk.calls().is_empty());
}

#[tokio::test]
async fn session_creation_resets_flag_on_success_and_failure() {
    let sdk = MockSdk::default();
    let controller = Controller::new(sdk.clone());
    let mut loading = false;

    let created = controller.create_session_key(&mut loading).await.unwrap();
    assert_eq!(created, Some(session()));
    assert!(!loading);
    assert_eq!(
        sdk.calls(),
        vec![format!("create_session:{}::*::*", MONSTER_CONTRACT)]
    );

    sdk.inner.fail_session.set(true);
    let failed = controller.create_session_key(&mut loading).await;
    assert!(matches!(failed, Err(SdkError::Rejected(_))));
    assert!(!loading);
}

#[tokio::test]
async fn session_creation_in_progress_is_ignored() {
    let sdk = MockSdk::default();
    let controller = Controller::new(sdk.clone());
    let mut loading = true;

    assert_eq!(controller.create_session_key(&mut loading).await, Ok(None));
    assert!(sdk.calls().is_empty());
}

#[tokio::test]
async fn remove_session_uses_auth_key() {
    let sdk = MockSdk::default();
    let controller = Controller::new(sdk.clone());

    controller.remove_session_key(&session()).await.unwrap();
    assert_eq!(sdk.calls(), vec!["remove_session:0xauth"]);
}

#[tokio::test]
async fn remove_session_failure_is_returned() {
    let sdk = MockSdk::default();
    sdk.inner.fail_remove.set(true);
    let controller = Controller::new(sdk.clone());

    let result = controller.remove_session_key(&session()).await;

    assert!(matches!(result, Err(SdkError::Rejected(_))));
    assert_eq!(sdk.calls(), vec!["remove_session:0xauth"]);
}

#[tokio::test]
async fn restore_reconnects_last_wallet_and_reads_persisted_session() {
    let sdk = MockSdk::with_wallets(&["UniSat", "OKX"]);
    *sdk.inner.persisted_session.borrow_mut() = Some(session());
    let controller = Controller::new(sdk.clone());

    let state = controller.restore(Some("OKX")).await.unwrap();

    assert!(state.is_connected());
    assert_eq!(state.wallet.map(|w| w.name), Some("OKX".to_string()));
    assert_eq!(state.session, Some(session()));
    assert_eq!(sdk.calls(), vec!["connect:OKX", "current_session"]);
}

#[tokio::test]
async fn restore_without_connection_loads_no_session() {
    let sdk = MockSdk::with_wallets(&["UniSat"]);
    *sdk.inner.persisted_session.borrow_mut() = Some(session());
    let controller = Controller::new(sdk.clone());

    assert_eq!(controller.restore(None).await, Ok(WalletState::default()));
    assert_eq!(controller.restore(Some("Leather")).await, Ok(WalletState::default()));
    assert!(sdk.calls().is_empty());
}

#[tokio::test]
async fn restore_connect_failure_is_returned() {
    let sdk = MockSdk::with_wallets(&["UniSat"]);
    sdk.inner.fail_connect.set(true);
    let controller = Controller::new(sdk.clone());

    let result = controller.restore(Some("UniSat")).await;

    assert!(matches!(result, Err(SdkError::Rejected(_))));
    assert_eq!(sdk.calls(), vec!["connect:UniSat"]);
}

#[tokio::test]
async fn submit_outside_session_scope_is_not_signed() {
    let sdk = MockSdk::default();
    let mut args = SessionArgs::monster_default();
    args.scopes = vec![format!("{}::monsters::train_monster", MONSTER_CONTRACT)];
    let controller = Controller::with_session_args(sdk.clone(), args);
    let mut loading = false;

    let result = controller
        .submit(MonsterFunction::MintMonster, &mut loading, || async {})
        .await;

    assert!(matches!(result, Err(SdkError::OutOfScope(_))));
    assert!(!loading);
    assert!(sdk.calls().is_empty());

    controller
        .submit(MonsterFunction::TrainMonster, &mut loading, || async {})
        .await
        .unwrap();
    assert_eq!(sdk.calls(), vec!["sign:train_monster"]);
}

#[tokio::test]
async fn query_failure_reads_as_no_data() {
    let sdk = MockSdk::default();
    let controller = Controller::new(sdk.clone());

    let record = controller.query_monster(U256::from(9u64)).await.unwrap();
    assert_eq!(record.level, Some(U256::from(3u64)));
    assert_eq!(record.wins, Some(U256::from(2u64)));

    sdk.inner.fail_view.set(true);
    assert_eq!(controller.query_monster(U256::from(9u64)).await, None);
}
