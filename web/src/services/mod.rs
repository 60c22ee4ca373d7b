//! Browser and network services

pub mod rpc;
pub mod wallet;
