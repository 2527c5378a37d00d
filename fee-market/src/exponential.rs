//! Continuous exponential fee market.
//!
//! Instead of a window, the header carries two accumulators:
//!
//! * `excess`: gas consumed above the per-second target, integrated over
//!   time and floored at zero. The gas price is
//!   `MIN_GAS_PRICE * e^(excess / (target * TARGET_TO_PRICE_UPDATE_CONVERSION))`.
//! * `target_excess`: steers the per-second gas target:
//!   `target = MIN_TARGET_PER_SECOND * e^(target_excess / TARGET_CONVERSION)`.
//!
//! Both exponentials go through [`calculate_price`], a pinned integer
//! approximation. Every node must produce identical results, so no floating
//! point is used anywhere in this module.

use {
    crate::{error::FeeError, header::Header, state::FeeOutcome},
    evmfee_upgrades::{NetworkUpgrades, Upgrade},
    log::trace,
    num_bigint::BigUint,
    num_traits::{ToPrimitive, Zero},
};

/// Lowest gas price, in wei.
pub const MIN_GAS_PRICE: u64 = 1;

/// Per-second gas target when `target_excess` is zero.
pub const MIN_TARGET_PER_SECOND: u64 = 1_000_000;

/// Largest change to `target_excess` a single block may make.
pub const MAX_TARGET_EXCESS_DIFF: u64 = 1 << 15;

/// Blocks needed to double or halve the target at the maximum change rate.
pub const MAX_TARGET_CHANGE_RATE: u64 = 1 << 10;

/// Converts `target_excess` into the target's exponent.
pub const TARGET_CONVERSION: u64 = MAX_TARGET_CHANGE_RATE * MAX_TARGET_EXCESS_DIFF;

/// Multiplies the target into the price exponent's denominator.
pub const TARGET_TO_PRICE_UPDATE_CONVERSION: u64 = 87;

/// Smallest `target_excess` whose target saturates at `u64::MAX`.
pub const MAX_TARGET_EXCESS: u64 = 1_024_950_627;

/// Encoded size of an [`ExponentialState`] in bytes.
pub const STATE_SIZE: usize = 2 * std::mem::size_of::<u64>();

/// Approximates `min_price * e^(excess / excess_conversion)`.
///
/// This is the EIP-4844 `fake_exponential` Taylor expansion on unbounded
/// integers, with every division truncating:
///
/// ```text
/// i = 1; output = 0; accum = min_price * excess_conversion
/// while accum > 0:
///     output += accum
///     accum = accum * excess / (excess_conversion * i)
///     i += 1
/// return output / excess_conversion
/// ```
///
/// Results that would exceed `u64::MAX` return `u64::MAX`.
pub fn calculate_price(min_price: u64, excess: u64, excess_conversion: u64) -> u64 {
    if excess_conversion == 0 {
        return min_price;
    }

    let numerator = BigUint::from(excess);
    let denominator = BigUint::from(excess_conversion);
    let max_output = &denominator * BigUint::from(u64::MAX);

    let mut i = BigUint::from(1u64);
    let mut output = BigUint::zero();
    let mut accum = BigUint::from(min_price) * &denominator;
    while !accum.is_zero() {
        output += &accum;
        if output >= max_output {
            return u64::MAX;
        }
        accum = accum * &numerator / (&denominator * &i);
        i += 1u64;
    }
    (output / denominator).to_u64().unwrap_or(u64::MAX)
}

/// Fee state of the exponential market, carried in the header's extra data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ExponentialState {
    /// Accumulated gas above target.
    pub excess: u64,
    /// Drives the per-second gas target.
    pub target_excess: u64,
}

impl ExponentialState {
    /// Decode from the front of `bytes`. Trailing bytes are ignored.
    pub fn parse(bytes: &[u8]) -> Result<Self, FeeError> {
        let encoded = bytes
            .get(..STATE_SIZE)
            .ok_or(FeeError::ExponentialStateTooShort {
                expected: STATE_SIZE,
                actual: bytes.len(),
            })?;

        let mut excess = [0u8; 8];
        let mut target_excess = [0u8; 8];
        excess.copy_from_slice(&encoded[..8]);
        target_excess.copy_from_slice(&encoded[8..]);
        Ok(Self {
            excess: u64::from_be_bytes(excess),
            target_excess: u64::from_be_bytes(target_excess),
        })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(STATE_SIZE);
        bytes.extend_from_slice(&self.excess.to_be_bytes());
        bytes.extend_from_slice(&self.target_excess.to_be_bytes());
        bytes
    }

    /// Per-second gas target.
    pub fn target(&self) -> u64 {
        calculate_price(MIN_TARGET_PER_SECOND, self.target_excess, TARGET_CONVERSION)
    }

    /// Current gas price, in wei.
    pub fn gas_price(&self) -> u64 {
        let price_update_conversion = self
            .target()
            .saturating_mul(TARGET_TO_PRICE_UPDATE_CONVERSION);
        calculate_price(MIN_GAS_PRICE, self.excess, price_update_conversion)
    }

    /// Account for `gas_used` by the previous block and `seconds` of
    /// elapsed time at the current target.
    ///
    /// `excess` never goes below zero.
    pub fn advance(&mut self, gas_used: u64, seconds: u64) {
        let drained = self.target().saturating_mul(seconds);
        self.excess = self.excess.saturating_add(gas_used).saturating_sub(drained);
    }

    /// Move `target_excess` toward `desired` by at most
    /// [`MAX_TARGET_EXCESS_DIFF`].
    ///
    /// `excess` is rescaled by `new_target / previous_target` so the gas price
    /// is unaffected by the change of target.
    pub fn update_target_excess(&mut self, desired: u64) {
        let previous_target = self.target();
        let change = self.target_excess.abs_diff(desired).min(MAX_TARGET_EXCESS_DIFF);
        self.target_excess = if self.target_excess < desired {
            self.target_excess.saturating_add(change)
        } else {
            self.target_excess.saturating_sub(change)
        };
        self.excess = scale_excess(self.excess, self.target(), previous_target);
    }
}

/// The smallest `target_excess` in `[0, MAX_TARGET_EXCESS]` whose target is at
/// least `desired_target`.
///
/// Found by binary search over the integer target function rather than by a
/// logarithm, so the answer is exact.
pub fn desired_target_excess(desired_target: u64) -> u64 {
    let target_at = |target_excess| {
        calculate_price(MIN_TARGET_PER_SECOND, target_excess, TARGET_CONVERSION)
    };
    let (mut low, mut high) = (0u64, MAX_TARGET_EXCESS);
    while low < high {
        let mid = low + (high - low) / 2;
        if target_at(mid) >= desired_target {
            high = mid;
        } else {
            low = mid + 1;
        }
    }
    low
}

/// Gas price and fee state for a block at `timestamp` on top of `parent`.
///
/// A genesis parent, or one produced before the exponential fee market,
/// starts the market from the zero state at [`MIN_GAS_PRICE`]. The candidate
/// may never precede its parent, genesis included.
pub fn next_fee(
    upgrades: &NetworkUpgrades,
    parent: &Header,
    timestamp: u64,
) -> Result<FeeOutcome, FeeError> {
    let elapsed = timestamp
        .checked_sub(parent.timestamp)
        .ok_or(FeeError::InvalidTimestamp {
            timestamp,
            parent_timestamp: parent.timestamp,
        })?;
    if parent.is_genesis() || !upgrades.is_active(Upgrade::ExponentialFees, parent.timestamp) {
        return Ok(FeeOutcome::new(MIN_GAS_PRICE, ExponentialState::default()));
    }

    let mut state = ExponentialState::parse(&parent.extra)?;

    state.advance(parent.gas_used, elapsed);
    trace!(
        "advanced exponential fee state of block {} by {elapsed}s: excess={} target_excess={}",
        parent.number,
        state.excess,
        state.target_excess,
    );
    Ok(FeeOutcome::new(state.gas_price(), state))
}

fn scale_excess(excess: u64, new_target: u64, previous_target: u64) -> u64 {
    if previous_target == 0 {
        return excess;
    }
    let scaled = BigUint::from(excess) * BigUint::from(new_target) / BigUint::from(previous_target);
    scaled.to_u64().unwrap_or(u64::MAX)
}
