//! # EVM Base Fee Engine
//!
//! Computes the base fee of the next block from its parent header and the
//! chain's upgrade schedule.
//!
//! Five fee-market generations have been in force over a chain's lifetime.
//! The first four keep a ten-second rolling window of gas in the header and
//! nudge the fee toward a target (additive increase, multiplicative decrease).
//! The fifth replaces the window with an excess-gas accumulator and prices gas
//! exponentially in it. Which generation applies is decided by the block's
//! timestamp against the [`ChainConfig`]'s schedule.
//!
//! ## Quick start
//!
//! ```rust
//! use {
//!     evmfee_market::{calculator, ChainConfig, Header, NetworkUpgrades, Upgrade, INITIAL_BASE_FEE},
//!     num_bigint::BigUint,
//! };
//!
//! let config = ChainConfig::new(43_114, NetworkUpgrades::active_through(Upgrade::LowerFeeFloor));
//! let genesis = Header::default();
//!
//! // The first block after genesis pays the initial base fee.
//! let outcome = calculator::next_fee_state(&config, &genesis, 2).unwrap().unwrap();
//! assert_eq!(outcome.base_fee, BigUint::from(INITIAL_BASE_FEE));
//!
//! // Its header carries the encoded window for its own child.
//! let block = Header {
//!     number: 1,
//!     timestamp: 2,
//!     extra: outcome.state.to_bytes(),
//!     base_fee: Some(outcome.base_fee),
//!     gas_used: 30_000_000,
//!     ..Header::default()
//! };
//! let next = calculator::base_fee(&config, &block, 4).unwrap().unwrap();
//! assert!(next > BigUint::from(INITIAL_BASE_FEE));
//! ```
//!
//! See [`calculator`] for the entry points, [`windowed`] and [`exponential`]
//! for the two mechanisms.

pub mod block_gas_cost;
pub mod calculator;
pub mod config;
pub mod error;
pub mod exponential;
pub mod generation;
pub mod header;
pub mod state;
pub mod window;
pub mod windowed;


pub use {
    calculator::{base_fee, estimate_next_base_fee, genesis_fee_state, next_fee_state},
    config::{WindowParams, INITIAL_BASE_FEE},
    error::FeeError,
    evmfee_upgrades::{ChainConfig, NetworkUpgrades, Upgrade},
    exponential::ExponentialState,
    generation::FeeGeneration,
    header::Header,
    state::{FeeOutcome, FeeState},
    window::Window,
};
