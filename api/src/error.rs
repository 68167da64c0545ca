use thiserror::Error;

/// Failures reported across the wallet SDK boundary.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SdkError {
    #[error("No wallet available")]
    NoWallet,

    #[error("Wallet rejected the request: {0}")]
    Rejected(String),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("View function failed with status {0}")]
    ViewFailed(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("{0} is outside the session key scope")]
    OutOfScope(String),

    #[error("{0}")]
    Unavailable(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty input")]
    Empty,

    #[error("Invalid number {0:?}: {1}")]
    Number(String, String),

    #[error("Invalid function id {0:?}, expected address::module::function")]
    FunctionId(String),
}

impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        SdkError::Decode(e.to_string())
    }
}
