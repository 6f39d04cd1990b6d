//! Editor UI: server-rendered pages backed by the File Gateway.

pub mod client;
pub mod pages;
pub mod routes;
pub mod state;

#[cfg(test)]
pub(crate) mod mock_gateway;
