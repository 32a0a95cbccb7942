//! The spaces domain

/// Parsing and serialization of request and response bodies
pub mod codec;
/// Models and errors for spaces
pub mod model;
/// The ports the domain requires from the outside world
pub mod ports;
/// The field schema and the checks run against client supplied data
pub mod validation;
