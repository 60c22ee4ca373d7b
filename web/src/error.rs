//! Error types for the RPC connection and the wallet bindings

use thiserror::Error;

/// Failure while querying the cluster over JSON-RPC
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RpcError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("RPC transport error: {0}")]
    Transport(String),

    #[error("RPC endpoint returned HTTP {0}")]
    Status(u16),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("RPC response decoding error: {0}")]
    Decode(String),
}

/// Failure reported by a browser wallet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("{0} wallet not found")]
    NotInstalled(String),

    #[error("Failed to connect wallet: {0}")]
    Connect(String),

    #[error("Failed to disconnect wallet: {0}")]
    Disconnect(String),

    #[error("Wallet returned an invalid public key: {0}")]
    InvalidPublicKey(String),
}

impl From<shared::RpcErrorObject> for RpcError {
    fn from(err: shared::RpcErrorObject) -> Self {
        RpcError::Rpc {
            code: err.code,
            message: err.message,
        }
    }
}

/// Render a JavaScript exception as a plain message.
pub(crate) fn js_error_message(err: &wasm_bindgen::JsValue) -> String {
    if let Some(msg) = err.as_string() {
        return msg;
    }
    js_sys::Reflect::get(err, &wasm_bindgen::JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_error_from_error_object() {
        let obj = shared::RpcErrorObject {
            code: -32602,
            message: "Invalid param".to_string(),
            data: None,
        };
        let err = RpcError::from(obj);
        assert_eq!(
            err,
            RpcError::Rpc {
                code: -32602,
                message: "Invalid param".to_string()
            }
        );
        assert_eq!(err.to_string(), "RPC error -32602: Invalid param");
    }

    #[test]
    fn test_wallet_error_display() {
        assert_eq!(
            WalletError::NotInstalled("Phantom".to_string()).to_string(),
            "Phantom wallet not found"
        );
    }
}
