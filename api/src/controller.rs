use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use crate::args::U256;
use crate::call::{CallFunction, MonsterFunction};
use crate::error::SdkError;
use crate::sdk::{ConnectionStatus, ExecutionInfo, WalletSdk};
use crate::session::{SessionArgs, SessionInfo};
use crate::state::{Connection, MonsterRecord, WalletState};

/// A boolean "request outstanding" flag owned by the UI.
///
/// It only stops the same control from submitting twice; it is not a lock.
pub trait LoadingFlag {
    fn is_set(&self) -> bool;
    fn set(&mut self, value: bool);
}

impl LoadingFlag for bool {
    fn is_set(&self) -> bool {
        *self
    }

    fn set(&mut self, value: bool) {
        *self = value;
    }
}

impl LoadingFlag for Rc<Cell<bool>> {
    fn is_set(&self) -> bool {
        self.get()
    }

    fn set(&mut self, value: bool) {
        Cell::set(self, value);
    }
}

/// Holds a flag raised until dropped, on success, error or early return alike.
struct Loading<'a, F: LoadingFlag> {
    flag: &'a mut F,
}

impl<'a, F: LoadingFlag> Loading<'a, F> {
    /// `None` if the flag is already raised.
    fn begin(flag: &'a mut F) -> Option<Self> {
        if flag.is_set() {
            return None;
        }
        flag.set(true);
        Some(Self { flag })
    }
}

impl<F: LoadingFlag> Drop for Loading<'_, F> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

/// Every user action of the dApp, expressed against a [`WalletSdk`].
///
/// Actions guarded by a [`LoadingFlag`] return `Ok(None)` when the flag was
/// already raised and nothing was sent.
#[derive(Clone, Debug)]
pub struct Controller<S> {
    sdk: S,
    session_args: SessionArgs,
}

impl<S: WalletSdk> Controller<S> {
    pub fn new(sdk: S) -> Self {
        Self::with_session_args(sdk, SessionArgs::monster_default())
    }

    /// Session keys are requested with `session_args`, and only calls its
    /// scopes permit are submitted.
    pub fn with_session_args(sdk: S, session_args: SessionArgs) -> Self {
        Self { sdk, session_args }
    }

    pub fn sdk(&self) -> &S {
        &self.sdk
    }

    /// Disconnect when connected, otherwise connect the first available wallet.
    pub async fn toggle_connection(&self, status: ConnectionStatus) -> Result<Connection, SdkError> {
        if status == ConnectionStatus::Connected {
            self.sdk.disconnect();
            return Ok(Connection::Disconnected);
        }

        let wallet = self
            .sdk
            .wallets()
            .await
            .into_iter()
            .next()
            .ok_or(SdkError::NoWallet)?;
        tracing::debug!("Connecting wallet {}", wallet.name);
        let address = self.sdk.connect(&wallet).await?;
        Ok(Connection::Connected { wallet, address })
    }

    /// Rebuild wallet state on page load: reconnect `last_wallet` if it is
    /// still installed, then pick up the session key the SDK persisted.
    /// Without a connection no session is loaded.
    pub async fn restore(&self, last_wallet: Option<&str>) -> Result<WalletState, SdkError> {
        let mut state = WalletState::default();
        let Some(name) = last_wallet else {
            return Ok(state);
        };

        let installed = self.sdk.wallets().await;
        let Some(wallet) = installed.into_iter().find(|w| w.name == name) else {
            tracing::debug!("Wallet {} no longer installed", name);
            return Ok(state);
        };

        let address = self.sdk.connect(&wallet).await?;
        state.apply(Connection::Connected { wallet, address });
        state.session = self.sdk.current_session().await?;
        Ok(state)
    }

    pub async fn create_session_key<F: LoadingFlag>(
        &self,
        loading: &mut F,
    ) -> Result<Option<SessionInfo>, SdkError> {
        let Some(_loading) = Loading::begin(loading) else {
            return Ok(None);
        };

        match self.sdk.create_session(&self.session_args).await {
            Ok(session) => {
                tracing::info!("session key {:?}", session);
                Ok(Some(session))
            }
            Err(e) => {
                tracing::error!("Session key creation failed: {}", e);
                Err(e)
            }
        }
    }

    pub async fn remove_session_key(&self, session: &SessionInfo) -> Result<(), SdkError> {
        self.sdk.remove_session(&session.auth_key).await
    }

    /// Read a monster's permanent state. Any failure reads as "no data".
    pub async fn query_monster(&self, token_id: U256) -> Option<MonsterRecord> {
        let call = CallFunction::monster(MonsterFunction::GetMonsterPermanentState(token_id));
        match self.sdk.execute_view(&call).await.and_then(|r| r.check()) {
            Ok(result) => MonsterRecord::from_view(&result),
            Err(e) => {
                tracing::error!("Monster query failed: {}", e);
                None
            }
        }
    }

    /// Sign and execute `function`, then run `refetch` once if it succeeded.
    pub async fn submit<F, R, Fut>(
        &self,
        function: MonsterFunction,
        loading: &mut F,
        refetch: R,
    ) -> Result<Option<ExecutionInfo>, SdkError>
    where
        F: LoadingFlag,
        R: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        let Some(_loading) = Loading::begin(loading) else {
            return Ok(None);
        };

        let call = CallFunction::monster(function);
        if !self.session_args.permits(&call.function_id) {
            let e = SdkError::OutOfScope(call.function_id.to_string());
            tracing::error!("{}", e);
            return Err(e);
        }

        match self.sdk.sign_and_execute(&call).await {
            Ok(info) => {
                tracing::debug!("{} {}: {}", call.function_id, info.status, info.tx_hash);
                refetch().await;
                Ok(Some(info))
            }
            Err(e) => {
                tracing::error!("{}", e);
                Err(e)
            }
        }
    }
}
