mod address_panel;
mod layout;
mod monster_panel;
mod session_panel;
mod wallet_button;

pub use address_panel::AddressPanel;
pub use layout::Layout;
pub use monster_panel::MonsterPanel;
pub use session_panel::SessionPanel;
pub use wallet_button::WalletButton;
