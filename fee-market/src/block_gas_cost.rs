//! Per-block gas charge introduced with the block-gas-cost upgrade.
//!
//! Blocks produced faster than [`TARGET_BLOCK_RATE`] pay a growing charge,
//! slower blocks a shrinking one. The windowed fee market counts this charge
//! as gas used by the parent.

/// Lowest block gas cost.
pub const MIN_BLOCK_GAS_COST: u64 = 0;

/// Highest block gas cost.
pub const MAX_BLOCK_GAS_COST: u64 = 1_000_000;

/// Desired seconds between blocks.
pub const TARGET_BLOCK_RATE: u64 = 2;

/// Cost change per second of deviation from [`TARGET_BLOCK_RATE`].
pub const BLOCK_GAS_COST_STEP: u64 = 50_000;

/// The gas cost of a block produced `time_elapsed` seconds after a parent
/// whose cost was `parent_cost`.
///
/// ```text
/// deviation = |TARGET_BLOCK_RATE - time_elapsed|
/// cost      = parent_cost + step * deviation   if time_elapsed < TARGET_BLOCK_RATE
///             parent_cost - step * deviation   otherwise
/// ```
///
/// The result is clamped to `[MIN_BLOCK_GAS_COST, MAX_BLOCK_GAS_COST]`.
pub fn block_gas_cost(parent_cost: u64, step: u64, time_elapsed: u64) -> u64 {
    let deviation = TARGET_BLOCK_RATE.abs_diff(time_elapsed);
    let change = step.saturating_mul(deviation);
    let cost = if time_elapsed < TARGET_BLOCK_RATE {
        parent_cost.saturating_add(change)
    } else {
        parent_cost.saturating_sub(change)
    };
    cost.clamp(MIN_BLOCK_GAS_COST, MAX_BLOCK_GAS_COST)
}
