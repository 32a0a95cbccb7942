#![deny(missing_docs)]
//! This crate contains the spaces api: a thin request/response mapper over a dynamodb table
//! holding [domain::model::SpaceRecord]s, laid out following the hexagonal architecture pattern

/// The domain module contains the models, validation and ports for spaces
pub mod domain;

/// The inbound module turns http requests into calls against the domain ports
pub mod inbound;

/// The outbound module contains the storage and id generation implementations
pub mod outbound;
