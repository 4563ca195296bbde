//! Commerce error types.

use thiserror::Error;

/// Errors that can occur outside the cart's fail-open paths.
///
/// Cart operations themselves never fail: storage problems degrade to an
/// empty cart and unknown ids are no-ops. Only loading the shop
/// configuration can be rejected.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Shop configuration did not parse.
    #[error("Invalid shop configuration: {0}")]
    InvalidConfig(#[from] toml::de::Error),
}
