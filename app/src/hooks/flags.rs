use dioxus::prelude::*;
use monster_api::controller::LoadingFlag;

/// Raised while a session key request is outstanding.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionLoading(pub Signal<bool>);

/// Raised while a transaction is being signed and executed.
#[derive(Clone, Copy, PartialEq)]
pub struct TxnLoading(pub Signal<bool>);

impl LoadingFlag for SessionLoading {
    fn is_set(&self) -> bool {
        *self.0.peek()
    }

    fn set(&mut self, value: bool) {
        self.0.set(value);
    }
}

impl LoadingFlag for TxnLoading {
    fn is_set(&self) -> bool {
        *self.0.peek()
    }

    fn set(&mut self, value: bool) {
        self.0.set(value);
    }
}
