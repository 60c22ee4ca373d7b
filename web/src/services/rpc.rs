//! Solana JSON-RPC connection
//!
//! A thin client for the one call the page makes: `getBalance`. The widget only
//! sees the [`BalanceSource`] trait, so tests can swap in an in-memory source.

use async_trait::async_trait;
use gloo_net::http::Request;
use shared::{BalanceResponse, Commitment, RpcRequest};

use crate::error::RpcError;

/// Anything that can report an account balance in lamports.
#[async_trait(?Send)]
pub trait BalanceSource {
    async fn get_balance(&self, address: &str) -> Result<u64, RpcError>;
}

/// Long-lived connection bound to one cluster endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RpcConnection {
    endpoint: String,
    commitment: Commitment,
}

impl RpcConnection {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            commitment: Commitment::Confirmed,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Request body for a balance query against this connection.
    pub fn balance_request(&self, address: &str) -> RpcRequest {
        RpcRequest::get_balance(1, address, self.commitment)
    }
}

/// Map a decoded `getBalance` envelope to lamports.
pub fn balance_from_response(response: BalanceResponse) -> Result<u64, RpcError> {
    response
        .into_result()
        .map(|value| value.value)
        .map_err(RpcError::from)
}

/// Map a raw HTTP reply (status and body text) to lamports.
pub fn balance_from_http(status: u16, body: &str) -> Result<u64, RpcError> {
    if !(200..300).contains(&status) {
        return Err(RpcError::Status(status));
    }

    let decoded: BalanceResponse =
        serde_json::from_str(body).map_err(|e| RpcError::Decode(e.to_string()))?;
    balance_from_response(decoded)
}

#[async_trait(?Send)]
impl BalanceSource for RpcConnection {
    async fn get_balance(&self, address: &str) -> Result<u64, RpcError> {
        if shared::parse_address(address).is_none() {
            return Err(RpcError::InvalidAddress(address.to_string()));
        }

        let body = self.balance_request(address);
        let response = Request::post(&self.endpoint)
            .json(&body)
            .map_err(|e| RpcError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| RpcError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| RpcError::Transport(e.to_string()))?;

        balance_from_http(status, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_request_uses_confirmed_commitment() {
        let conn = RpcConnection::new("https://api.devnet.solana.com");
        let req = conn.balance_request("8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL");
        assert_eq!(req.method, "getBalance");
        assert_eq!(req.params[1]["commitment"], "confirmed");
        assert_eq!(conn.endpoint(), "https://api.devnet.solana.com");
    }

    #[test]
    fn test_balance_from_response() {
        let ok: BalanceResponse = serde_json::from_str(
            r#"{"jsonrpc":"2.0","result":{"context":{"slot":7},"value":2500000000},"id":1}"#,
        )
        .unwrap();
        assert_eq!(balance_from_response(ok), Ok(2_500_000_000));

        let err: BalanceResponse = serde_json::from_str(
            r#"{"jsonrpc":"2.0","error":{"code":-32005,"message":"Node is behind"},"id":1}"#,
        )
        .unwrap();
        assert_eq!(
            balance_from_response(err),
            Err(RpcError::Rpc {
                code: -32005,
                message: "Node is behind".to_string()
            })
        );
    }

    #[test]
    fn test_balance_from_http() {
        let body = r#"{"jsonrpc":"2.0","result":{"context":{"slot":9},"value":42},"id":1}"#;
        assert_eq!(balance_from_http(200, body), Ok(42));

        // Status is checked before the body is read
        assert_eq!(balance_from_http(503, body), Err(RpcError::Status(503)));
        assert_eq!(balance_from_http(429, "Too Many Requests"), Err(RpcError::Status(429)));

        assert!(matches!(
            balance_from_http(200, "<html>gateway error</html>"),
            Err(RpcError::Decode(_))
        ));
        assert!(matches!(
            balance_from_http(200, r#"{"jsonrpc":"2.0","result":{"value":"lots"},"id":1}"#),
            Err(RpcError::Decode(_))
        ));

        let rpc_err = r#"{"jsonrpc":"2.0","error":{"code":-32602,"message":"Invalid param"},"id":1}"#;
        assert_eq!(
            balance_from_http(200, rpc_err),
            Err(RpcError::Rpc {
                code: -32602,
                message: "Invalid param".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_invalid_address_rejected_before_request() {
        let conn = RpcConnection::new("https://api.devnet.solana.com");
        let result = conn.get_balance("not an address").await;
        assert_eq!(
            result,
            Err(RpcError::InvalidAddress("not an address".to_string()))
        );
    }
}
