//! Windowed AIMD fee market.
//!
//! The parent's gas is added to a ten-second rolling [`Window`]. When the
//! window holds more than the target the fee rises, when it holds less the fee
//! falls, in both cases proportionally to the deviation:
//!
//! ```text
//! delta = max(1, parent_fee * |total - target| / target / denominator)
//! ```
//!
//! A decrease is multiplied by the number of whole windows that elapsed
//! without a block. The result is clamped to the generation's bounds.
//!
//! Parameters come from the generation active at the *parent's* timestamp:
//! that generation defined what the parent's gas accounting means.

use {
    crate::{
        block_gas_cost::{block_gas_cost, BLOCK_GAS_COST_STEP, MIN_BLOCK_GAS_COST},
        config::{BlockOverhead, WindowParams, INITIAL_BASE_FEE},
        error::FeeError,
        header::Header,
        state::FeeOutcome,
        window::{Window, WINDOW_LEN},
    },
    evmfee_upgrades::NetworkUpgrades,
    log::trace,
    num_bigint::{BigInt, BigUint},
};

/// Smallest non-zero change of the base fee, in wei.
pub const MIN_BASE_FEE_DELTA: u64 = 1;

/// Base fee and window for a block at `timestamp` on top of `parent`.
pub fn next_fee(
    upgrades: &NetworkUpgrades,
    parent: &Header,
    timestamp: u64,
) -> Result<FeeOutcome, FeeError> {
    // Genesis and blocks before the fee market carry no window.
    let params = match WindowParams::active_at(upgrades, parent.timestamp) {
        Some(params) if !parent.is_genesis() => params,
        _ => return Ok(FeeOutcome::new(INITIAL_BASE_FEE, Window::default())),
    };

    let window = fee_window(params, parent, timestamp)?;
    let parent_fee = parent
        .base_fee
        .as_ref()
        .ok_or(FeeError::MissingParentBaseFee {
            number: parent.number,
        })?;
    let elapsed = timestamp.saturating_sub(parent.timestamp);
    let base_fee = adjust_base_fee(params, parent_fee, window.sum(), elapsed);
    Ok(FeeOutcome::new(base_fee, window))
}

/// The parent's window with the parent's gas added and rolled forward to
/// `timestamp`.
pub fn fee_window(
    params: &WindowParams,
    parent: &Header,
    timestamp: u64,
) -> Result<Window, FeeError> {
    let mut window = Window::parse(&parent.extra)?;
    let elapsed = timestamp
        .checked_sub(parent.timestamp)
        .ok_or(FeeError::InvalidTimestamp {
            timestamp,
            parent_timestamp: parent.timestamp,
        })?;

    window.add(&[parent.gas_used]);
    if params.counts_ext_data_gas {
        // Absent on the first blocks after the upgrade.
        if let Some(ext_data_gas_used) = parent.ext_data_gas_used {
            window.add(&[ext_data_gas_used]);
        }
    }
    match params.overhead {
        BlockOverhead::Intrinsic(gas) => window.add(&[gas]),
        BlockOverhead::BlockGasCost => {
            let parent_cost = parent.block_gas_cost.unwrap_or(MIN_BLOCK_GAS_COST);
            window.add(&[block_gas_cost(parent_cost, BLOCK_GAS_COST_STEP, elapsed)]);
        }
        BlockOverhead::None => {}
    }

    trace!(
        "rolling fee window of block {} by {elapsed}s under {}",
        parent.number,
        params.upgrade,
    );
    window.shift(elapsed);
    Ok(window)
}

/// Apply one AIMD step to `parent_fee` given the window total.
pub fn adjust_base_fee(
    params: &WindowParams,
    parent_fee: &BigUint,
    total_gas: u64,
    elapsed: u64,
) -> BigUint {
    let target = params.target_gas;
    let mut base_fee = BigInt::from(parent_fee.clone());

    if total_gas != target {
        let deviation = BigInt::from(total_gas.abs_diff(target));
        let delta = deviation * &base_fee
            / BigInt::from(target)
            / BigInt::from(params.base_fee_change_denominator);
        let mut delta = delta.max(BigInt::from(MIN_BASE_FEE_DELTA));

        if total_gas > target {
            base_fee += delta;
        } else {
            // Blocks that were never produced would each have lowered the fee.
            let windows_elapsed = elapsed / WINDOW_LEN as u64;
            if windows_elapsed > 1 {
                delta *= windows_elapsed;
            }
            base_fee -= delta;
        }
    }

    clamp(base_fee, params.min_base_fee, params.max_base_fee)
}

fn clamp(fee: BigInt, min: u64, max: u64) -> BigUint {
    if fee < BigInt::from(min) {
        BigUint::from(min)
    } else if fee > BigInt::from(max) {
        BigUint::from(max)
    } else {
        fee.magnitude().clone()
    }
}
