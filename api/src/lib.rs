pub mod args;
pub mod call;
pub mod consts;
pub mod controller;
pub mod error;
pub mod rpc;
pub mod sdk;
pub mod session;
pub mod state;
pub mod view;

pub mod prelude {
    pub use crate::args::*;
    pub use crate::call::*;
    pub use crate::consts::*;
    pub use crate::controller::*;
    pub use crate::error::*;
    pub use crate::rpc::*;
    pub use crate::sdk::*;
    pub use crate::session::*;
    pub use crate::state::*;
    pub use crate::view::*;
}
