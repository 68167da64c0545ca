use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::args::{Arg, U256};
use crate::consts::{MONSTER_CONTRACT, MONSTER_MODULE};
use crate::error::ParseError;

/// Entry and view functions of the `monsters` module.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MonsterFunction {
    GetMonsterPermanentState(U256),
    MintMonster,
    TrainMonster,
    HarvestMonster,
}

impl MonsterFunction {
    pub fn name(&self) -> &'static str {
        match self {
            MonsterFunction::GetMonsterPermanentState(_) => "get_monster_permanent_state",
            MonsterFunction::MintMonster => "mint_monster",
            MonsterFunction::TrainMonster => "train_monster",
            MonsterFunction::HarvestMonster => "harvest_monster",
        }
    }

    pub fn args(&self) -> Vec<Arg> {
        match self {
            MonsterFunction::GetMonsterPermanentState(token_id) => vec![Arg::U256(*token_id)],
            _ => vec![],
        }
    }

    /// Label of the control that triggers this function.
    pub fn label(&self) -> &'static str {
        match self {
            MonsterFunction::GetMonsterPermanentState(_) => "monster data",
            MonsterFunction::MintMonster => "Mint monster",
            MonsterFunction::TrainMonster => "Train monster",
            MonsterFunction::HarvestMonster => "Harvest monster",
        }
    }
}

/// Fully qualified Move function: `address::module::function`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FunctionId {
    pub address: String,
    pub module: String,
    pub function: String,
}

impl FunctionId {
    pub fn new(address: &str, module: &str, function: &str) -> Self {
        Self {
            address: address.to_string(),
            module: module.to_string(),
            function: function.to_string(),
        }
    }
}

impl fmt::Display for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}::{}", self.address, self.module, self.function)
    }
}

impl FromStr for FunctionId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split("::").collect();
        match parts.as_slice() {
            [address, module, function]
                if !address.is_empty() && !module.is_empty() && !function.is_empty() =>
            {
                Ok(FunctionId::new(address, module, function))
            }
            _ => Err(ParseError::FunctionId(s.to_string())),
        }
    }
}

impl Serialize for FunctionId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Transaction descriptor: which function to call and with what.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallFunction {
    pub function_id: FunctionId,
    pub args: Vec<Arg>,
}

impl CallFunction {
    pub fn new(function_id: FunctionId, args: Vec<Arg>) -> Self {
        Self { function_id, args }
    }

    /// Call of `function` on the monster contract.
    pub fn monster(function: MonsterFunction) -> Self {
        Self::new(
            FunctionId::new(MONSTER_CONTRACT, MONSTER_MODULE, function.name()),
            function.args(),
        )
    }

    pub fn hex_args(&self) -> Vec<String> {
        self.args.iter().map(Arg::to_hex).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monster_calls_target_the_fixed_contract() {
        let call = CallFunction::monster(MonsterFunction::MintMonster);
        assert_eq!(
            call.function_id.to_string(),
            format!("{}::monsters::mint_monster", MONSTER_CONTRACT)
        );
        assert!(call.args.is_empty());
    }

    #[test]
    fn query_carries_one_u256() {
        let call = CallFunction::monster(MonsterFunction::GetMonsterPermanentState(U256::from(5u64)));
        assert_eq!(call.function_id.function, "get_monster_permanent_state");
        assert_eq!(call.args, vec![Arg::U256(U256::from(5u64))]);
        assert_eq!(call.hex_args().len(), 1);
    }

    #[test]
    fn function_id_parse() {
        let id: FunctionId = "0x1::monsters::train_monster".parse().unwrap();
        assert_eq!(id, FunctionId::new("0x1", "monsters", "train_monster"));
        assert!("0x1::monsters".parse::<FunctionId>().is_err());
        assert!("0x1::::train".parse::<FunctionId>().is_err());
        assert!("a::b::c::d".parse::<FunctionId>().is_err());
    }
}
