//! Implementations of the domain ports

/// DynamoDB backed [crate::domain::ports::SpaceRepository]
pub mod dynamodb;
/// uuid backed [crate::domain::ports::IdGenerator]
pub mod id_generator;
/// In-memory port implementations for tests
#[cfg(test)]
pub mod memory;
