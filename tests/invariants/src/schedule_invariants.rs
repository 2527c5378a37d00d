//! Property-based tests for upgrade schedules.
//!
//! Properties tested:
//! 1. Schedules in protocol order validate
//! 2. The latest active upgrade is the last one activated
//! 3. A gap in the schedule is rejected
//! 4. Config encodings are lossless

#[cfg(test)]
mod tests {
    use {
        borsh::BorshDeserialize,
        evmfee_upgrades::{ChainConfig, ConfigError, NetworkUpgrades, Upgrade},
        proptest::prelude::*,
    };

    /// A schedule activating the first `scheduled` upgrades at non-decreasing
    /// timestamps, plus those timestamps.
    fn ordered_schedule() -> impl Strategy<Value = (NetworkUpgrades, Vec<u64>)> {
        (0..=Upgrade::ALL.len(), proptest::collection::vec(any::<u64>(), Upgrade::ALL.len()))
            .prop_map(|(scheduled, mut timestamps)| {
                timestamps.sort_unstable();
                timestamps.truncate(scheduled);
                let mut upgrades = NetworkUpgrades::default();
                for (upgrade, timestamp) in Upgrade::ALL.into_iter().zip(&timestamps) {
                    set_activation(&mut upgrades, upgrade, Some(*timestamp));
                }
                (upgrades, timestamps)
            })
    }

    fn set_activation(upgrades: &mut NetworkUpgrades, upgrade: Upgrade, activation: Option<u64>) {
        let slot = match upgrade {
            Upgrade::Bootstrap => &mut upgrades.bootstrap_timestamp,
            Upgrade::GasRepricing => &mut upgrades.gas_repricing_timestamp,
            Upgrade::DynamicFees => &mut upgrades.dynamic_fees_timestamp,
            Upgrade::BlockGasCost => &mut upgrades.block_gas_cost_timestamp,
            Upgrade::FeeRetune => &mut upgrades.fee_retune_timestamp,
            Upgrade::LowerFeeFloor => &mut upgrades.lower_fee_floor_timestamp,
            Upgrade::ExponentialFees => &mut upgrades.exponential_fees_timestamp,
        };
        *slot = activation;
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 1000, max_global_rejects: 8192, ..ProptestConfig::default() })]

        #[test]
        fn ordered_schedules_validate((upgrades, _) in ordered_schedule()) {
            prop_assert!(upgrades.validate().is_ok());
        }

        #[test]
        fn latest_active_is_last_activated(
            (upgrades, timestamps) in ordered_schedule(),
            timestamp in any::<u64>(),
        ) {
            let expected = timestamps
                .iter()
                .rposition(|activation| *activation <= timestamp)
                .map(|index| Upgrade::ALL[index]);
            prop_assert_eq!(upgrades.latest_active(timestamp), expected);
        }

        #[test]
        fn gap_is_rejected(
            (upgrades, timestamps) in ordered_schedule(),
            gap in 0..Upgrade::ALL.len(),
        ) {
            // Unschedule an upgrade that has a scheduled successor.
            prop_assume!(gap + 1 < timestamps.len());
            let mut upgrades = upgrades;
            set_activation(&mut upgrades, Upgrade::ALL[gap], None);
            let is_missing_prerequisite =
                matches!(upgrades.validate(), Err(ConfigError::MissingPrerequisite { .. }));
            prop_assert!(is_missing_prerequisite);
        }

        #[test]
        fn config_encodings_are_lossless(
            chain_id in any::<u64>(),
            (upgrades, _) in ordered_schedule(),
        ) {
            let config = ChainConfig::new(chain_id, upgrades);

            let json = serde_json::to_string(&config).unwrap();
            prop_assert_eq!(ChainConfig::from_json(&json).unwrap(), config.clone());

            let bytes = borsh::to_vec(&config).unwrap();
            prop_assert_eq!(ChainConfig::try_from_slice(&bytes).unwrap(), config);
        }
    }
}
