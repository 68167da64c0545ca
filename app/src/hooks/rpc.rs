use monster_api::prelude::*;

/// Run a view function through `rooch_executeViewFunction`.
pub async fn execute_view_function(
    client: &reqwest::Client,
    rpc_url: &str,
    call: &CallFunction,
) -> Result<AnnotatedFunctionResult, SdkError> {
    let request = RpcRequest::execute_view(call)?;
    tracing::debug!("{} {}", EXECUTE_VIEW_FUNCTION, call.function_id);

    let response = client
        .post(rpc_url)
        .json(&request)
        .send()
        .await
        .map_err(|e| SdkError::Unavailable(e.to_string()))?;

    let rpc_response: RpcResponse<AnnotatedFunctionResult> = response
        .json()
        .await
        .map_err(|e| SdkError::Decode(e.to_string()))?;

    rpc_response.into_result()
}
