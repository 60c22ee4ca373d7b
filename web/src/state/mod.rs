//! Context-provided application state

pub mod connection;
pub mod wallet;
