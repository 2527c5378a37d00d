//! Errors raised while loading or validating a chain configuration.

use {crate::upgrade::Upgrade, thiserror::Error};

/// Errors in a network upgrade schedule or its serialized form.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An upgrade is scheduled while an upgrade that must precede it is not.
    #[error("upgrade {upgrade} is scheduled at {activation} but prerequisite {prerequisite} is not scheduled")]
    MissingPrerequisite {
        upgrade: Upgrade,
        activation: u64,
        prerequisite: Upgrade,
    },

    /// An upgrade activates before an upgrade that precedes it in the protocol sequence.
    #[error("upgrade {upgrade} at {activation} activates before {previous} at {previous_activation}")]
    OutOfOrder {
        upgrade: Upgrade,
        activation: u64,
        previous: Upgrade,
        previous_activation: u64,
    },

    /// The configuration body could not be parsed.
    #[error("invalid chain config json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
