//! Chain configuration shared by block validation, block building and fee
//! estimation.

use {
    crate::{error::Result, schedule::NetworkUpgrades, upgrade::Upgrade},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};

/// Immutable per-chain configuration.
///
/// Built once at startup and shared read-only between threads.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig {
    /// EIP-155 chain id.
    pub chain_id: u64,

    /// When each protocol upgrade activates.
    #[serde(default)]
    pub network_upgrades: NetworkUpgrades,
}

impl ChainConfig {
    /// A configuration with the given upgrade schedule.
    pub fn new(chain_id: u64, network_upgrades: NetworkUpgrades) -> Self {
        Self {
            chain_id,
            network_upgrades,
        }
    }

    /// Parse and validate a JSON chain config.
    ///
    /// ```rust
    /// use evmfee_upgrades::{ChainConfig, Upgrade};
    ///
    /// let config = ChainConfig::from_json(
    ///     r#"{"chainId": 43112, "networkUpgrades": {"bootstrapTimestamp": 0, "gasRepricingTimestamp": 0, "dynamicFeesTimestamp": 5}}"#,
    /// )
    /// .unwrap();
    /// assert_eq!(config.latest_active(5), Some(Upgrade::DynamicFees));
    /// ```
    pub fn from_json(body: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(body)?;
        config.network_upgrades.validate()?;
        Ok(config)
    }

    /// The highest-ordered upgrade active at `timestamp`.
    #[inline]
    pub fn latest_active(&self, timestamp: u64) -> Option<Upgrade> {
        self.network_upgrades.latest_active(timestamp)
    }

    /// Whether `upgrade` is active at `timestamp`.
    #[inline]
    pub fn is_active(&self, upgrade: Upgrade, timestamp: u64) -> bool {
        self.network_upgrades.is_active(upgrade, timestamp)
    }
}
