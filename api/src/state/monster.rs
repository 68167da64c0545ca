use serde_json::Value;

use crate::args::{parse_u256, U256};
use crate::rpc::AnnotatedFunctionResult;

/// Permanent state of a monster as returned by `get_monster_permanent_state`.
///
/// Fields the contract did not return stay `None`; nothing is validated
/// beyond presence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MonsterRecord {
    pub variety: Option<U256>,
    pub level: Option<U256>,
    pub experience: Option<U256>,
    pub health: Option<U256>,

    /// Seconds since the epoch.
    pub last_training_time: Option<U256>,

    pub wins: Option<U256>,
    pub losses: Option<U256>,
    pub achievement: Option<bool>,
}

impl MonsterRecord {
    /// Decode the first return value, `None` when the call returned nothing.
    pub fn from_view(result: &AnnotatedFunctionResult) -> Option<Self> {
        match result.first_decoded()? {
            Value::Null => None,
            decoded => Some(Self::from_decoded(decoded)),
        }
    }

    /// Accepts a bare field object or a struct wrapped as `{ "value": {...} }`.
    pub fn from_decoded(decoded: &Value) -> Self {
        let fields = match decoded.get("value") {
            Some(inner @ Value::Object(_)) => inner,
            _ => decoded,
        };

        Self {
            variety: integer(fields, "variety"),
            level: integer(fields, "level"),
            experience: integer(fields, "experience"),
            health: integer(fields, "health"),
            last_training_time: integer(fields, "last_training_time"),
            wins: integer(fields, "wins"),
            losses: integer(fields, "losses"),
            achievement: fields.get("achievement").and_then(boolean),
        }
    }
}

// Move integers above u32 come back as decimal strings, up to u256.
fn integer(fields: &Value, key: &str) -> Option<U256> {
    match fields.get(key)? {
        Value::Number(n) => n.as_u64().map(U256::from),
        Value::String(s) => parse_u256(s).ok(),
        _ => None,
    }
}

fn boolean(v: &Value) -> Option<bool> {
    match v {
        Value::Bool(b) => Some(*b),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_wrapped_struct_with_string_integers() {
        let result: AnnotatedFunctionResult = serde_json::from_value(json!({
            "vm_status": "Executed",
            "return_values": [{
                "value": { "type_tag": "0x1::monsters::MonsterPermanentState", "value": "0x00" },
                "decoded_value": {
                    "abilities": 7,
                    "type": "0x1::monsters::MonsterPermanentState",
                    "value": {
                        "variety": 3,
                        "level": "12",
                        "experience": "450",
                        "health": 80,
                        "last_training_time": "1717000000",
                        "wins": 4,
                        "losses": 1,
                        "achievement": true
                    }
                }
            }]
        }))
        .unwrap();

        let record = MonsterRecord::from_view(&result).unwrap();
        assert_eq!(record.variety, Some(U256::from(3u64)));
        assert_eq!(record.level, Some(U256::from(12u64)));
        assert_eq!(record.experience, Some(U256::from(450u64)));
        assert_eq!(record.last_training_time, Some(U256::from(1_717_000_000u64)));
        assert_eq!(record.wins, Some(U256::from(4u64)));
        assert_eq!(record.losses, Some(U256::from(1u64)));
        assert_eq!(record.achievement, Some(true));
    }

    #[test]
    fn missing_fields_stay_none() {
        let record = MonsterRecord::from_decoded(&json!({ "level": 2 }));
        assert_eq!(record.level, Some(U256::from(2u64)));
        assert_eq!(record.health, None);
        assert_eq!(record.achievement, None);
    }

    #[test]
    fn integers_wider_than_u64_are_kept() {
        let record = MonsterRecord::from_decoded(&json!({
            "experience": "18446744073709551616",
            "level": 1
        }));
        assert_eq!(record.experience, Some(U256::from(u64::MAX) + U256::from(1u64)));
        assert_eq!(record.experience.map(|v| v.to_string()), Some("18446744073709551616".to_string()));
        assert_eq!(record.level, Some(U256::from(1u64)));
    }

    #[test]
    fn empty_return_values_mean_no_data() {
        let result: AnnotatedFunctionResult = serde_json::from_value(json!({
            "vm_status": "Executed",
            "return_values": []
        }))
        .unwrap();
        assert_eq!(MonsterRecord::from_view(&result), None);
    }
}
