use std::str::FromStr;

pub use alloy_primitives::U256;

use crate::error::ParseError;

/// Parse a token id given as decimal, or hex with a `0x` prefix.
pub fn parse_u256(s: &str) -> Result<U256, ParseError> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("0x") {
        return Err(ParseError::Empty);
    }
    U256::from_str(s).map_err(|e| ParseError::Number(s.to_string(), e.to_string()))
}

/// A Move call argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arg {
    U256(U256),
}

impl Arg {
    /// BCS encoding: integers are fixed-width little-endian.
    pub fn to_bcs_bytes(&self) -> Vec<u8> {
        match self {
            Arg::U256(v) => v.to_le_bytes::<32>().to_vec(),
        }
    }

    /// `0x`-prefixed hex of the BCS bytes, the form the JSON-RPC takes.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.to_bcs_bytes()))
    }
}
