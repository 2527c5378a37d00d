//! Property-based tests for the exponential fee market.
//!
//! Properties tested:
//! 1. Gas price is monotone in excess
//! 2. Elapsed time without gas never raises the excess
//! 3. Target excess moves by at most MAX_TARGET_EXCESS_DIFF per update
//! 4. desired_target_excess returns the smallest sufficient excess
//! 5. The fee reported for a block is the price of the state it carries

#[cfg(test)]
mod tests {
    use {
        evmfee_market::{
            calculator::next_fee_state,
            exponential::{
                calculate_price, desired_target_excess, MAX_TARGET_EXCESS, MAX_TARGET_EXCESS_DIFF,
                MIN_TARGET_PER_SECOND, TARGET_CONVERSION,
            },
            ChainConfig, ExponentialState, FeeState, Header, NetworkUpgrades, Upgrade,
        },
        num_bigint::BigUint,
        proptest::prelude::*,
    };

    // Keeps the fake exponential's term count small.
    const MAX_TEST_TARGET_EXCESS: u64 = 100_000_000;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn price_monotone_in_excess(
            low in 0..10_000_000_000u64,
            gap in 0..1_000_000_000u64,
            target_excess in 0..MAX_TEST_TARGET_EXCESS,
        ) {
            let lower = ExponentialState { excess: low, target_excess };
            let higher = ExponentialState { excess: low + gap, target_excess };
            prop_assert!(lower.gas_price() <= higher.gas_price());
        }

        #[test]
        fn idle_time_never_raises_excess(
            excess in any::<u64>(),
            target_excess in 0..MAX_TEST_TARGET_EXCESS,
            seconds in any::<u64>(),
        ) {
            let mut state = ExponentialState { excess, target_excess };
            state.advance(0, seconds);
            prop_assert!(state.excess <= excess);
            prop_assert_eq!(state.target_excess, target_excess);
        }

        #[test]
        fn target_excess_change_is_rate_limited(
            excess in 0..10_000_000_000u64,
            target_excess in 0..MAX_TEST_TARGET_EXCESS,
            desired in 0..MAX_TEST_TARGET_EXCESS,
        ) {
            let mut state = ExponentialState { excess, target_excess };
            state.update_target_excess(desired);
            prop_assert!(state.target_excess.abs_diff(target_excess) <= MAX_TARGET_EXCESS_DIFF);
            // Either the desired value was reached or a full step was taken.
            prop_assert!(
                state.target_excess == desired
                    || state.target_excess.abs_diff(target_excess) == MAX_TARGET_EXCESS_DIFF
            );
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn desired_target_excess_is_minimal(desired_target in MIN_TARGET_PER_SECOND..100_000_000u64) {
            let excess = desired_target_excess(desired_target);
            prop_assert!(excess <= MAX_TARGET_EXCESS);
            let target = |excess| calculate_price(MIN_TARGET_PER_SECOND, excess, TARGET_CONVERSION);
            prop_assert!(target(excess) >= desired_target);
            if excess > 0 {
                prop_assert!(target(excess - 1) < desired_target);
            }
        }

        #[test]
        fn reported_fee_prices_carried_state(
            excess in 0..10_000_000_000u64,
            target_excess in 0..MAX_TEST_TARGET_EXCESS,
            gas_used in 0..100_000_000u64,
            elapsed in 0..60u64,
        ) {
            let config = ChainConfig::new(1, NetworkUpgrades::active_through(Upgrade::ExponentialFees));
            let parent = Header {
                number: 1,
                extra: ExponentialState { excess, target_excess }.to_bytes(),
                gas_used,
                ..Header::default()
            };
            let outcome = next_fee_state(&config, &parent, elapsed).unwrap().unwrap();
            let FeeState::Exponential(state) = outcome.state else {
                panic!("exponential parent produced {:?}", outcome.state);
            };
            prop_assert_eq!(outcome.base_fee, BigUint::from(state.gas_price()));
            prop_assert_eq!(state.target_excess, target_excess);
        }
    }
}
