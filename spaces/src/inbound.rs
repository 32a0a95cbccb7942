//! Inbound adapters for the spaces api

/// Converts lambda http events into [router::SpaceRequest]s and renders the responses
pub mod lambda;
/// Method dispatch and error mapping, independent of the transport
pub mod router;
