use std::fmt;

/// A named protocol upgrade.
///
/// The derived ordering is the protocol sequence. It is fixed and independent
/// of the timestamps a particular chain activates the upgrades at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Upgrade {
    /// Launch rules. No dynamic fee.
    Bootstrap,
    /// Gas schedule repricing. No dynamic fee.
    GasRepricing,
    /// First fee market: windowed AIMD with a fixed intrinsic block gas charge.
    DynamicFees,
    /// Windowed AIMD charging a variable per-block gas cost.
    BlockGasCost,
    /// Windowed AIMD with a larger target and a slower change denominator.
    FeeRetune,
    /// Same as [`Upgrade::FeeRetune`] with a lower minimum base fee.
    LowerFeeFloor,
    /// Continuous exponential pricing over an excess accumulator.
    ExponentialFees,
}

impl Upgrade {
    /// Every upgrade, in protocol order.
    pub const ALL: [Upgrade; 7] = [
        Upgrade::Bootstrap,
        Upgrade::GasRepricing,
        Upgrade::DynamicFees,
        Upgrade::BlockGasCost,
        Upgrade::FeeRetune,
        Upgrade::LowerFeeFloor,
        Upgrade::ExponentialFees,
    ];

    /// The first upgrade that prices gas dynamically.
    pub const FIRST_FEE_MARKET: Upgrade = Upgrade::DynamicFees;

    /// Whether this upgrade runs a dynamic fee market.
    pub fn is_fee_market(self) -> bool {
        self >= Self::FIRST_FEE_MARKET
    }

    /// Canonical name, as used in logs and config keys.
    pub fn name(self) -> &'static str {
        match self {
            Upgrade::Bootstrap => "bootstrap",
            Upgrade::GasRepricing => "gasRepricing",
            Upgrade::DynamicFees => "dynamicFees",
            Upgrade::BlockGasCost => "blockGasCost",
            Upgrade::FeeRetune => "feeRetune",
            Upgrade::LowerFeeFloor => "lowerFeeFloor",
            Upgrade::ExponentialFees => "exponentialFees",
        }
    }
}

impl fmt::Display for Upgrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
