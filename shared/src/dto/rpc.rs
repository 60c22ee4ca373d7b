use serde::{Deserialize, Serialize};

/// JSON-RPC protocol version sent with every request.
pub const JSONRPC_VERSION: &str = "2.0";

/// Commitment level used for balance queries.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

/// Per-request options object (second positional param).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommitmentConfig {
    pub commitment: Commitment,
}

/// JSON-RPC 2.0 request envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    pub params: serde_json::Value,
}

impl RpcRequest {
    /// Build a `getBalance` request for `address`.
    pub fn get_balance(id: u64, address: &str, commitment: Commitment) -> Self {
        let options = CommitmentConfig { commitment };
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            method: "getBalance".to_string(),
            params: serde_json::json!([address, options]),
        }
    }
}

/// Slot context attached to most RPC results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RpcContext {
    pub slot: u64,
}

/// Result wrapper `{ context, value }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RpcResponseValue<T> {
    pub context: RpcContext,
    pub value: T,
}

/// Error object returned in place of `result`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response envelope. Exactly one of `result` / `error` is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RpcResponse<T> {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcErrorObject>,
}

impl<T> RpcResponse<T> {
    /// Collapse the envelope into the result or the error object.
    ///
    /// A response carrying neither is reported as an error with code `-32603`.
    pub fn into_result(self) -> Result<T, RpcErrorObject> {
        match (self.result, self.error) {
            (_, Some(error)) => Err(error),
            (Some(result), None) => Ok(result),
            (None, None) => Err(RpcErrorObject {
                code: -32603,
                message: "response carried neither result nor error".to_string(),
                data: None,
            }),
        }
    }
}

/// `getBalance` response: lamports inside a context wrapper.
pub type BalanceResponse = RpcResponse<RpcResponseValue<u64>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_balance_request_shape() {
        let req = RpcRequest::get_balance(1, "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL", Commitment::Confirmed);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "getBalance",
                "params": ["8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL", {"commitment": "confirmed"}]
            })
        );
    }

    #[test]
    fn test_decode_balance_result() {
        let body = r#"{"jsonrpc":"2.0","result":{"context":{"slot":42},"value":1500000000},"id":1}"#;
        let resp: BalanceResponse = serde_json::from_str(body).unwrap();
        let value = resp.into_result().unwrap();
        assert_eq!(value.value, 1_500_000_000);
        assert_eq!(value.context.slot, 42);
    }

    #[test]
    fn test_decode_balance_error() {
        let body = r#"{"jsonrpc":"2.0","error":{"code":-32602,"message":"Invalid param: WrongSize"},"id":1}"#;
        let resp: BalanceResponse = serde_json::from_str(body).unwrap();
        let err = resp.into_result().unwrap_err();
        assert_eq!(err.code, -32602);
        assert_eq!(err.message, "Invalid param: WrongSize");
    }

    #[test]
    fn test_decode_empty_envelope() {
        let resp: BalanceResponse = serde_json::from_str(r#"{"jsonrpc":"2.0","id":1}"#).unwrap();
        assert_eq!(resp.into_result().unwrap_err().code, -32603);
    }
}
