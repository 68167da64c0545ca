use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::call::{CallFunction, FunctionId};
use crate::error::SdkError;

pub const EXECUTE_VIEW_FUNCTION: &str = "rooch_executeViewFunction";

#[derive(Serialize)]
pub struct RpcRequest {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'static str,
    pub params: Vec<Value>,
}

impl RpcRequest {
    pub fn new(method: &'static str, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: "2.0",
            id: 1,
            method,
            params,
        }
    }

    pub fn execute_view(call: &CallFunction) -> Result<Self, SdkError> {
        let view = FunctionCallView::from(call);
        Ok(Self::new(EXECUTE_VIEW_FUNCTION, vec![serde_json::to_value(view)?]))
    }
}

#[derive(Deserialize, Debug)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<RpcError>,
}

impl<T> RpcResponse<T> {
    pub fn into_result(self) -> Result<T, SdkError> {
        if let Some(error) = self.error {
            return Err(SdkError::Rpc {
                code: error.code,
                message: error.message,
            });
        }
        self.result
            .ok_or_else(|| SdkError::Decode("No result returned".to_string()))
    }
}

#[derive(Deserialize, Debug)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct FunctionCallView {
    pub function_id: FunctionId,
    pub ty_args: Vec<String>,
    pub args: Vec<String>,
}

impl From<&CallFunction> for FunctionCallView {
    fn from(call: &CallFunction) -> Self {
        Self {
            function_id: call.function_id.clone(),
            ty_args: vec![],
            args: call.hex_args(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AnnotatedFunctionResult {
    pub vm_status: Value,
    #[serde(default)]
    pub return_values: Option<Vec<AnnotatedReturnValue>>,
}

impl AnnotatedFunctionResult {
    pub fn is_executed(&self) -> bool {
        self.vm_status.as_str() == Some("Executed")
    }

    /// Errors unless the VM reported `Executed`.
    pub fn check(self) -> Result<Self, SdkError> {
        if self.is_executed() {
            Ok(self)
        } else {
            Err(SdkError::ViewFailed(self.vm_status.to_string()))
        }
    }

    pub fn first_decoded(&self) -> Option<&Value> {
        self.return_values
            .as_ref()
            .and_then(|values| values.first())
            .map(|v| &v.decoded_value)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AnnotatedReturnValue {
    #[serde(default)]
    pub decoded_value: Value,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::args::U256;
    use crate::call::MonsterFunction;

    #[test]
    fn view_request_shape() {
        let call = CallFunction::monster(MonsterFunction::GetMonsterPermanentState(U256::from(1u64)));
        let request = serde_json::to_value(RpcRequest::execute_view(&call).unwrap()).unwrap();
        assert_eq!(request["method"], "rooch_executeViewFunction");
        let params = &request["params"][0];
        assert!(params["function_id"]
            .as_str()
            .unwrap()
            .ends_with("::monsters::get_monster_permanent_state"));
        assert_eq!(params["ty_args"], json!([]));
        assert_eq!(params["args"][0], format!("0x01{}", "00".repeat(31)));
    }

    #[test]
    fn rpc_error_wins_over_result() {
        let response: RpcResponse<u64> = serde_json::from_value(json!({
            "result": 1,
            "error": { "code": -32000, "message": "boom" }
        }))
        .unwrap();
        assert_eq!(
            response.into_result(),
            Err(SdkError::Rpc {
                code: -32000,
                message: "boom".to_string()
            })
        );
    }

    #[test]
    fn non_executed_status_is_an_error() {
        let result: AnnotatedFunctionResult = serde_json::from_value(json!({
            "vm_status": { "MoveAbort": { "location": "0x1::monsters", "abort_code": "1" } },
            "return_values": null
        }))
        .unwrap();
        assert!(matches!(result.check(), Err(SdkError::ViewFailed(_))));
    }
}
