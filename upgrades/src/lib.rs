//! # Network upgrade schedule
//!
//! Every protocol change that alters how the base fee is derived is a named
//! [`Upgrade`]. A chain activates upgrades at block timestamps recorded in its
//! [`NetworkUpgrades`] schedule; an upgrade without a timestamp is simply
//! never active.
//!
//! Upgrades are ordered by the protocol sequence, not by their timestamps:
//!
//! ```text
//! Bootstrap < GasRepricing < DynamicFees < BlockGasCost < FeeRetune < LowerFeeFloor < ExponentialFees
//!                            └──────────────── fee market ──────────────────────────────────────┘
//! ```
//!
//! ```rust
//! use evmfee_upgrades::{NetworkUpgrades, Upgrade};
//!
//! let upgrades = NetworkUpgrades {
//!     dynamic_fees_timestamp: Some(100),
//!     ..NetworkUpgrades::active_through(Upgrade::GasRepricing)
//! };
//!
//! assert_eq!(upgrades.latest_active(99), Some(Upgrade::GasRepricing));
//! assert_eq!(upgrades.latest_active(100), Some(Upgrade::DynamicFees));
//! assert!(upgrades.is_fee_market_active(100));
//! ```

pub mod config;
pub mod error;
pub mod schedule;
pub mod upgrade;

pub use config::ChainConfig;
pub use error::{ConfigError, Result};
pub use schedule::NetworkUpgrades;
pub use upgrade::Upgrade;
