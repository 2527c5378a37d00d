use {
    crate::{
        error::{ConfigError, Result},
        upgrade::Upgrade,
    },
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};

/// Activation timestamps for every [`Upgrade`].
///
/// `None` means the upgrade is not scheduled and never becomes active.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkUpgrades {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bootstrap_timestamp: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_repricing_timestamp: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_fees_timestamp: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_gas_cost_timestamp: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_retune_timestamp: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_fee_floor_timestamp: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exponential_fees_timestamp: Option<u64>,
}

impl NetworkUpgrades {
    /// A schedule where every upgrade up to and including `last` is active
    /// from timestamp 0 and every later upgrade is unscheduled.
    pub fn active_through(last: Upgrade) -> Self {
        let mut upgrades = Self::default();
        for upgrade in Upgrade::ALL.into_iter().filter(|upgrade| *upgrade <= last) {
            *upgrades.activation_mut(upgrade) = Some(0);
        }
        upgrades
    }

    /// The activation timestamp of `upgrade`, if scheduled.
    pub fn activation(&self, upgrade: Upgrade) -> Option<u64> {
        match upgrade {
            Upgrade::Bootstrap => self.bootstrap_timestamp,
            Upgrade::GasRepricing => self.gas_repricing_timestamp,
            Upgrade::DynamicFees => self.dynamic_fees_timestamp,
            Upgrade::BlockGasCost => self.block_gas_cost_timestamp,
            Upgrade::FeeRetune => self.fee_retune_timestamp,
            Upgrade::LowerFeeFloor => self.lower_fee_floor_timestamp,
            Upgrade::ExponentialFees => self.exponential_fees_timestamp,
        }
    }

    fn activation_mut(&mut self, upgrade: Upgrade) -> &mut Option<u64> {
        match upgrade {
            Upgrade::Bootstrap => &mut self.bootstrap_timestamp,
            Upgrade::GasRepricing => &mut self.gas_repricing_timestamp,
            Upgrade::DynamicFees => &mut self.dynamic_fees_timestamp,
            Upgrade::BlockGasCost => &mut self.block_gas_cost_timestamp,
            Upgrade::FeeRetune => &mut self.fee_retune_timestamp,
            Upgrade::LowerFeeFloor => &mut self.lower_fee_floor_timestamp,
            Upgrade::ExponentialFees => &mut self.exponential_fees_timestamp,
        }
    }

    /// Whether `upgrade` is active at `timestamp`.
    #[inline]
    pub fn is_active(&self, upgrade: Upgrade, timestamp: u64) -> bool {
        self.activation(upgrade)
            .is_some_and(|activation| activation <= timestamp)
    }

    /// The highest-ordered upgrade active at `timestamp`.
    ///
    /// Ordering follows the protocol sequence, so a misconfigured schedule
    /// that activates a later upgrade earlier still resolves to the later one.
    pub fn latest_active(&self, timestamp: u64) -> Option<Upgrade> {
        Upgrade::ALL
            .into_iter()
            .rev()
            .find(|upgrade| self.is_active(*upgrade, timestamp))
    }

    /// Whether any fee-market upgrade is active at `timestamp`.
    pub fn is_fee_market_active(&self, timestamp: u64) -> bool {
        self.latest_active(timestamp)
            .is_some_and(Upgrade::is_fee_market)
    }

    /// The earliest timestamp at which any fee-market upgrade is scheduled.
    pub fn first_fee_market_activation(&self) -> Option<u64> {
        Upgrade::ALL
            .into_iter()
            .filter(|upgrade| upgrade.is_fee_market())
            .filter_map(|upgrade| self.activation(upgrade))
            .min()
    }

    /// Check that the schedule respects the protocol sequence.
    ///
    /// A scheduled upgrade requires every preceding upgrade to be scheduled
    /// at or before it.
    pub fn validate(&self) -> Result<()> {
        let mut previous: Option<(Upgrade, Option<u64>)> = None;
        for upgrade in Upgrade::ALL {
            let activation = self.activation(upgrade);
            if let (Some(activation), Some((prev, prev_activation))) = (activation, previous) {
                let Some(prev_activation) = prev_activation else {
                    return Err(ConfigError::MissingPrerequisite {
                        upgrade,
                        activation,
                        prerequisite: prev,
                    });
                };
                if activation < prev_activation {
                    return Err(ConfigError::OutOfOrder {
                        upgrade,
                        activation,
                        previous: prev,
                        previous_activation: prev_activation,
                    });
                }
            }
            previous = Some((upgrade, activation));
        }
        Ok(())
    }
}
