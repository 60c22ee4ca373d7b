//! RPC connection context

use leptos::prelude::*;
use std::sync::Arc;

use crate::services::rpc::RpcConnection;

/// Connection shared by every component that queries the cluster
#[derive(Clone)]
pub struct ConnectionContext {
    pub connection: Arc<RpcConnection>,
}

impl ConnectionContext {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            connection: Arc::new(RpcConnection::new(endpoint)),
        }
    }
}

pub fn provide_connection_context(endpoint: impl Into<String>) -> ConnectionContext {
    let context = ConnectionContext::new(endpoint);
    log::info!("RPC endpoint: {}", context.connection.endpoint());
    provide_context(context.clone());
    context
}

pub fn use_connection_context() -> ConnectionContext {
    expect_context::<ConnectionContext>()
}
