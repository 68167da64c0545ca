//! What each control shows, computed from wallet and session state.

use crate::call::MonsterFunction;
use crate::consts::{SHORT_ADDRESS_HEAD, SHORT_ADDRESS_TAIL};
use crate::sdk::{ConnectionStatus, CurrentAddress};
use crate::session::SessionInfo;

/// Rendering of a single button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Control {
    pub label: String,
    pub disabled: bool,
    pub loading: bool,
}

/// Keep `head` leading and `tail` trailing chars around an ellipsis.
pub fn short_address(address: &str, head: usize, tail: usize) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= head + tail {
        return address.to_string();
    }
    let start: String = chars[..head].iter().collect();
    let end: String = chars[chars.len() - tail..].iter().collect();
    format!("{}...{}", start, end)
}

pub fn wallet_control(status: ConnectionStatus, address: Option<&CurrentAddress>) -> Control {
    let label = match (status, address) {
        (ConnectionStatus::Connected, Some(address)) => {
            short_address(&address.rooch, SHORT_ADDRESS_HEAD, SHORT_ADDRESS_TAIL)
        }
        (ConnectionStatus::Connected, None) => String::new(),
        _ => "Connect Wallet".to_string(),
    };
    Control {
        label,
        disabled: false,
        loading: status == ConnectionStatus::Connecting,
    }
}

/// Create button without a key, clear button with one.
pub fn session_control(
    status: ConnectionStatus,
    session: Option<&SessionInfo>,
    loading: bool,
) -> Control {
    if session.is_some() {
        return Control {
            label: "Clear Session".to_string(),
            disabled: false,
            loading: false,
        };
    }

    let connected = status == ConnectionStatus::Connected;
    Control {
        label: if connected {
            "Create".to_string()
        } else {
            "Please connect wallet first".to_string()
        },
        disabled: !connected,
        loading,
    }
}

/// Transaction buttons are only usable once a session key exists.
pub fn transaction_control(
    function: MonsterFunction,
    session: Option<&SessionInfo>,
    loading: bool,
) -> Control {
    match session {
        Some(_) => Control {
            label: function.label().to_string(),
            disabled: false,
            loading,
        },
        None => Control {
            label: "Please create Session Key first".to_string(),
            disabled: true,
            loading,
        },
    }
}
