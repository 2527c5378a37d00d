use {
    crate::{error::FeeError, generation::FeeGeneration, header::Header, state::FeeOutcome},
    evmfee_upgrades::ChainConfig,
    log::debug,
    num_bigint::BigUint,
};

/// Base fee of a block at `timestamp` on top of `parent`.
///
/// Returns `Ok(None)` when no fee market is active at `timestamp`.
///
/// # Windowed generations
///
/// ```text
/// window = parent window + parent gas (+ ext data gas) (+ block overhead)
/// window = window rolled forward by (timestamp - parent.timestamp) seconds
///
/// total == target: fee = parent fee
/// total >  target: fee = parent fee + max(1, parent fee * (total - target) / target / denominator)
/// total <  target: fee = parent fee - max(1, parent fee * (target - total) / target / denominator)
///                        (times the number of elapsed windows when more than one)
/// ```
///
/// The result is clamped to the generation's bounds.
///
/// # Exponential generation
///
/// ```text
/// excess = max(0, excess + parent gas - target * (timestamp - parent.timestamp))
/// fee    = fake_exponential(MIN_GAS_PRICE, excess, target * 87)
/// ```
pub fn base_fee(
    config: &ChainConfig,
    parent: &Header,
    timestamp: u64,
) -> Result<Option<BigUint>, FeeError> {
    Ok(next_fee_state(config, parent, timestamp)?.map(|outcome| outcome.base_fee))
}

/// Base fee of a block at `timestamp` on top of `parent`, together with the
/// fee state its header must carry.
///
/// Returns `Ok(None)` when no fee market is active at `timestamp`.
pub fn next_fee_state(
    config: &ChainConfig,
    parent: &Header,
    timestamp: u64,
) -> Result<Option<FeeOutcome>, FeeError> {
    let upgrades = &config.network_upgrades;
    let Some(generation) = FeeGeneration::active_at(upgrades, timestamp) else {
        return Ok(None);
    };

    let outcome = generation.compute(upgrades, parent, timestamp)?;
    debug!(
        "base fee of child of block {} at {timestamp} under {generation}: {}",
        parent.number, outcome.base_fee,
    );
    Ok(Some(outcome))
}

/// Estimate the base fee of the next block on top of `parent`.
///
/// `timestamp` is a lower bound: the estimate is never taken earlier than the
/// parent, nor earlier than the first fee-market activation. A fee market that
/// is scheduled but not yet active is estimated as of its activation.
pub fn estimate_next_base_fee(
    config: &ChainConfig,
    parent: &Header,
    timestamp: u64,
) -> Result<BigUint, FeeError> {
    let activation = config
        .network_upgrades
        .first_fee_market_activation()
        .ok_or(FeeError::NoFeeMarketActive)?;

    let timestamp = timestamp.max(parent.timestamp).max(activation);
    base_fee(config, parent, timestamp)?.ok_or(FeeError::NoFeeMarketActive)
}

/// Base fee and fee state of a genesis block at `timestamp`.
///
/// Returns `None` when no fee market is active at `timestamp`.
pub fn genesis_fee_state(config: &ChainConfig, timestamp: u64) -> Option<FeeOutcome> {
    FeeGeneration::active_at(&config.network_upgrades, timestamp)
        .map(|generation| generation.genesis())
}
