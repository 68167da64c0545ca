use monster_api::prelude::*;
use serde::de::DeserializeOwned;

use super::rpc::execute_view_function;

/// [`WalletSdk`] backed by the Rooch JS SDK in the page.
///
/// View functions go straight to the JSON-RPC endpoint; everything that
/// needs a wallet or a session key goes through `js/rooch_bridge.js`.
#[derive(Clone, Debug)]
pub struct BrowserSdk {
    client: reqwest::Client,
    rpc_url: &'static str,
}

impl BrowserSdk {
    pub fn new(rpc_url: &'static str) -> Self {
        Self {
            client: reqwest::Client::new(),
            rpc_url,
        }
    }
}

fn decode<T: DeserializeOwned>(json: &str) -> Result<T, SdkError> {
    Ok(serde_json::from_str(json)?)
}

impl WalletSdk for BrowserSdk {
    async fn wallets(&self) -> Vec<WalletHandle> {
        let names: Vec<String> = match js::available_wallets().await.and_then(|json| decode(&json)) {
            Ok(names) => names,
            Err(e) => {
                tracing::error!("Wallet discovery failed: {}", e);
                Vec::new()
            }
        };
        names.into_iter().map(|name| WalletHandle { name }).collect()
    }

    async fn connect(&self, wallet: &WalletHandle) -> Result<CurrentAddress, SdkError> {
        decode(&js::connect_wallet(&wallet.name).await?)
    }

    fn disconnect(&self) {
        js::disconnect_wallet();
    }

    async fn current_session(&self) -> Result<Option<SessionInfo>, SdkError> {
        decode(&js::current_session().await?)
    }

    async fn create_session(&self, args: &SessionArgs) -> Result<SessionInfo, SdkError> {
        let args = serde_json::to_string(args)?;
        decode(&js::create_session(&args).await?)
    }

    async fn remove_session(&self, auth_key: &str) -> Result<(), SdkError> {
        js::remove_session(auth_key).await.map(|_| ())
    }

    async fn sign_and_execute(&self, call: &CallFunction) -> Result<ExecutionInfo, SdkError> {
        let args = serde_json::to_string(&call.hex_args())?;
        decode(&js::sign_and_execute(&call.function_id.to_string(), &args).await?)
    }

    async fn execute_view(&self, call: &CallFunction) -> Result<AnnotatedFunctionResult, SdkError> {
        execute_view_function(&self.client, self.rpc_url, call).await
    }
}

/// Calls into the JS bridge. Every async call resolves to a JSON string.
#[cfg(feature = "web")]
mod js {
    use monster_api::error::SdkError;
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(module = "/js/rooch_bridge.js")]
    extern "C" {
        #[wasm_bindgen(catch, js_name = availableWallets)]
        async fn available_wallets_js() -> Result<JsValue, JsValue>;

        #[wasm_bindgen(catch, js_name = connectWallet)]
        async fn connect_wallet_js(name: &str) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(js_name = disconnectWallet)]
        fn disconnect_wallet_js();

        #[wasm_bindgen(catch, js_name = currentSession)]
        async fn current_session_js() -> Result<JsValue, JsValue>;

        #[wasm_bindgen(catch, js_name = createSession)]
        async fn create_session_js(args: &str) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(catch, js_name = removeSession)]
        async fn remove_session_js(auth_key: &str) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(catch, js_name = signAndExecute)]
        async fn sign_and_execute_js(function_id: &str, args: &str) -> Result<JsValue, JsValue>;
    }

    fn settle(result: Result<JsValue, JsValue>) -> Result<String, SdkError> {
        let value = result.map_err(|e| SdkError::Rejected(format!("{:?}", e)))?;
        if value.is_undefined() || value.is_null() {
            return Ok("null".to_string());
        }
        value
            .as_string()
            .ok_or_else(|| SdkError::Decode("Bridge did not return a string".to_string()))
    }

    pub async fn available_wallets() -> Result<String, SdkError> {
        settle(available_wallets_js().await)
    }

    pub async fn connect_wallet(name: &str) -> Result<String, SdkError> {
        settle(connect_wallet_js(name).await)
    }

    pub fn disconnect_wallet() {
        disconnect_wallet_js();
    }

    pub async fn current_session() -> Result<String, SdkError> {
        settle(current_session_js().await)
    }

    pub async fn create_session(args: &str) -> Result<String, SdkError> {
        settle(create_session_js(args).await)
    }

    pub async fn remove_session(auth_key: &str) -> Result<String, SdkError> {
        settle(remove_session_js(auth_key).await)
    }

    pub async fn sign_and_execute(function_id: &str, args: &str) -> Result<String, SdkError> {
        settle(sign_and_execute_js(function_id, args).await)
    }
}

#[cfg(not(feature = "web"))]
mod js {
    use monster_api::error::SdkError;

    fn unavailable() -> SdkError {
        SdkError::Unavailable("Wallet only available in web mode".to_string())
    }

    pub async fn available_wallets() -> Result<String, SdkError> {
        Ok("[]".to_string())
    }

    pub async fn connect_wallet(_name: &str) -> Result<String, SdkError> {
        Err(unavailable())
    }

    pub fn disconnect_wallet() {}

    pub async fn current_session() -> Result<String, SdkError> {
        Err(unavailable())
    }

    pub async fn create_session(_args: &str) -> Result<String, SdkError> {
        Err(unavailable())
    }

    pub async fn remove_session(_auth_key: &str) -> Result<String, SdkError> {
        Err(unavailable())
    }

    pub async fn sign_and_execute(_function_id: &str, _args: &str) -> Result<String, SdkError> {
        Err(unavailable())
    }
}
