use serde::{Deserialize, Serialize};

use crate::call::FunctionId;
use crate::consts::{APP_NAME, APP_URL, MAX_INACTIVE_INTERVAL, MONSTER_CONTRACT};

/// Arguments for creating a session key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionArgs {
    pub app_name: String,
    pub app_url: String,
    /// Seconds.
    pub max_inactive_interval: u64,
    pub scopes: Vec<String>,
}

impl SessionArgs {
    /// A key allowed to call every function of every module at the monster contract.
    pub fn monster_default() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            app_url: APP_URL.to_string(),
            max_inactive_interval: MAX_INACTIVE_INTERVAL,
            scopes: vec![format!("{}::*::*", MONSTER_CONTRACT)],
        }
    }

    /// Whether any scope permits calling `function_id`.
    pub fn permits(&self, function_id: &FunctionId) -> bool {
        self.scopes
            .iter()
            .filter_map(|s| ScopePattern::parse(s))
            .any(|p| p.matches(function_id))
    }
}

/// `address::module::function` glob, `*` matching any single segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScopePattern {
    address: String,
    module: String,
    function: String,
}

impl ScopePattern {
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split("::");
        let address = parts.next()?;
        let module = parts.next()?;
        let function = parts.next()?;
        if parts.next().is_some() || address.is_empty() || module.is_empty() || function.is_empty()
        {
            return None;
        }
        Some(Self {
            address: address.to_string(),
            module: module.to_string(),
            function: function.to_string(),
        })
    }

    pub fn matches(&self, id: &FunctionId) -> bool {
        segment_matches(&self.address, &id.address, true)
            && segment_matches(&self.module, &id.module, false)
            && segment_matches(&self.function, &id.function, false)
    }
}

fn segment_matches(pattern: &str, value: &str, ignore_case: bool) -> bool {
    if pattern == "*" {
        return true;
    }
    if ignore_case {
        pattern.eq_ignore_ascii_case(value)
    } else {
        pattern == value
    }
}

/// The session key currently held by the SDK.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub rooch_address: String,
    pub key_scheme: String,
    /// Milliseconds since the epoch.
    pub create_time: u64,
    pub auth_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call::{CallFunction, MonsterFunction};

    #[test]
    fn default_scope_covers_all_monster_functions() {
        let args = SessionArgs::monster_default();
        assert_eq!(args.max_inactive_interval, 1000);
        for f in [
            MonsterFunction::MintMonster,
            MonsterFunction::TrainMonster,
            MonsterFunction::HarvestMonster,
        ] {
            assert!(args.permits(&CallFunction::monster(f).function_id));
        }
        assert!(!args.permits(&FunctionId::new("0x3", "monsters", "mint_monster")));
    }

    #[test]
    fn pattern_segments() {
        let p = ScopePattern::parse("0xAB::monsters::*").unwrap();
        assert!(p.matches(&FunctionId::new("0xab", "monsters", "train_monster")));
        assert!(!p.matches(&FunctionId::new("0xab", "other", "train_monster")));
        assert!(ScopePattern::parse("0xab::*").is_none());
        assert!(ScopePattern::parse("0xab::*::*::*").is_none());
    }

    #[test]
    fn session_args_serialize_camel_case() {
        let json = serde_json::to_value(SessionArgs::monster_default()).unwrap();
        assert_eq!(json["appName"], "rooch_monster");
        assert_eq!(json["maxInactiveInterval"], 1000);
        assert_eq!(json["scopes"].as_array().unwrap().len(), 1);
    }
}
