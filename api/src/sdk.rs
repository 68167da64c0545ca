use serde::{Deserialize, Serialize};

use crate::call::CallFunction;
use crate::error::SdkError;
use crate::rpc::AnnotatedFunctionResult;
use crate::session::{SessionArgs, SessionInfo};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// A wallet the SDK found installed in the browser.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletHandle {
    pub name: String,
}

/// The connected account in each of its encodings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentAddress {
    /// Bech32 `rooch1...` form.
    pub rooch: String,
    pub hex: String,
    pub bitcoin: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInfo {
    #[serde(default)]
    pub tx_hash: String,
    #[serde(default)]
    pub status: String,
}

/// Operations this application consumes from the wallet SDK.
///
/// Connection state, key management and signing all live behind this
/// trait; the app only invokes it and renders what comes back.
#[allow(async_fn_in_trait)]
pub trait WalletSdk {
    /// Wallets installed in the browser, in discovery order.
    async fn wallets(&self) -> Vec<WalletHandle>;

    async fn connect(&self, wallet: &WalletHandle) -> Result<CurrentAddress, SdkError>;

    /// Forget the connection locally. Issues no remote request.
    fn disconnect(&self);

    /// The session key the SDK has persisted, if any.
    async fn current_session(&self) -> Result<Option<SessionInfo>, SdkError>;

    async fn create_session(&self, args: &SessionArgs) -> Result<SessionInfo, SdkError>;

    async fn remove_session(&self, auth_key: &str) -> Result<(), SdkError>;

    async fn sign_and_execute(&self, call: &CallFunction) -> Result<ExecutionInfo, SdkError>;

    async fn execute_view(&self, call: &CallFunction) -> Result<AnnotatedFunctionResult, SdkError>;
}
