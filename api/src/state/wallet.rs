use crate::sdk::{ConnectionStatus, CurrentAddress, WalletHandle};
use crate::session::SessionInfo;

/// What clicking the wallet button did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Connection {
    Connected {
        wallet: WalletHandle,
        address: CurrentAddress,
    },
    Disconnected,
}

/// Wallet connection and the session key shown alongside it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalletState {
    pub status: ConnectionStatus,
    pub wallet: Option<WalletHandle>,
    pub address: Option<CurrentAddress>,
    pub session: Option<SessionInfo>,
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        self.status == ConnectionStatus::Connected
    }

    /// Dropping the connection also drops the session key from view.
    pub fn apply(&mut self, connection: Connection) {
        match connection {
            Connection::Connected { wallet, address } => {
                self.status = ConnectionStatus::Connected;
                self.wallet = Some(wallet);
                self.address = Some(address);
            }
            Connection::Disconnected => *self = WalletState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call::MonsterFunction;
    use crate::view::transaction_control;

    fn connected_with_session() -> WalletState {
        let mut state = WalletState::default();
        state.apply(Connection::Connected {
            wallet: WalletHandle { name: "UniSat".to_string() },
            address: CurrentAddress::default(),
        });
        state.session = Some(SessionInfo {
            rooch_address: "rooch1session".to_string(),
            key_scheme: "Ed25519".to_string(),
            create_time: 1,
            auth_key: "0xauth".to_string(),
        });
        state
    }

    #[test]
    fn disconnect_clears_session_and_disables_transactions() {
        let mut state = connected_with_session();
        assert!(state.is_connected());
        assert!(!transaction_control(MonsterFunction::MintMonster, state.session.as_ref(), false).disabled);

        state.apply(Connection::Disconnected);

        assert_eq!(state, WalletState::default());
        assert!(transaction_control(MonsterFunction::MintMonster, state.session.as_ref(), false).disabled);
    }
}
