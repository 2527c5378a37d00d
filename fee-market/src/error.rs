use thiserror::Error;

/// Errors produced while deriving a base fee.
///
/// Every variant is deterministic: retrying with the same inputs yields the
/// same error. Validators treat all of them except
/// [`FeeError::NoFeeMarketActive`] as proof that the block is invalid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeeError {
    /// The candidate timestamp precedes the parent's.
    #[error("invalid timestamp: {timestamp} is prior to parent timestamp {parent_timestamp}")]
    InvalidTimestamp { timestamp: u64, parent_timestamp: u64 },

    /// The parent's extra data is too short to hold a fee window.
    #[error("fee window too short: expected at least {expected} bytes, got {actual}")]
    WindowTooShort { expected: usize, actual: usize },

    /// The parent's extra data is too short to hold the exponential fee state.
    #[error("exponential fee state too short: expected at least {expected} bytes, got {actual}")]
    ExponentialStateTooShort { expected: usize, actual: usize },

    /// A base fee was requested for a chain that never schedules a fee market.
    #[error("cannot estimate base fee: no fee market upgrade is scheduled")]
    NoFeeMarketActive,

    /// A parent past genesis running a windowed fee market carries no base fee.
    #[error("parent block {number} has no base fee")]
    MissingParentBaseFee { number: u64 },
}
