//! Shared helpers for fee engine benchmarks.

use {
    evmfee_market::{ChainConfig, ExponentialState, FeeOutcome, Header, NetworkUpgrades, Upgrade, Window},
    num_bigint::BigUint,
    rand::Rng,
};

/// A chain with every upgrade up to and including `last` active from genesis.
pub fn config_through(last: Upgrade) -> ChainConfig {
    ChainConfig::new(1, NetworkUpgrades::active_through(last))
}

/// A windowed parent at height 1 with an empty window.
pub fn windowed_parent(base_fee: u64, gas_used: u64) -> Header {
    Header {
        number: 1,
        extra: Window::default().to_bytes(),
        base_fee: Some(BigUint::from(base_fee)),
        gas_used,
        ext_data_gas_used: Some(0),
        block_gas_cost: Some(0),
        ..Header::default()
    }
}

/// An exponential parent at height 1 with the given accumulators.
pub fn exponential_parent(excess: u64, target_excess: u64) -> Header {
    Header {
        number: 1,
        extra: ExponentialState {
            excess,
            target_excess,
        }
        .to_bytes(),
        ..Header::default()
    }
}

/// The header of the block built from `outcome` on top of `parent`.
pub fn child(parent: &Header, outcome: FeeOutcome, timestamp: u64, gas_used: u64) -> Header {
    Header {
        number: parent.number.saturating_add(1),
        timestamp,
        extra: outcome.state.to_bytes(),
        base_fee: Some(outcome.base_fee),
        gas_used,
        ..Header::default()
    }
}

/// `n` (seconds elapsed, gas used) pairs for a chain with random load.
pub fn random_load<R: Rng>(rng: &mut R, n: usize, max_gas: u64) -> Vec<(u64, u64)> {
    (0..n)
        .map(|_| (rng.random_range(0..=4), rng.random_range(0..=max_gas)))
        .collect()
}
