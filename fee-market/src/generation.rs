use {
    crate::{
        config::{WindowParams, INITIAL_BASE_FEE},
        error::FeeError,
        exponential::{self, ExponentialState, MIN_GAS_PRICE},
        header::Header,
        state::FeeOutcome,
        window::Window,
        windowed,
    },
    evmfee_upgrades::{NetworkUpgrades, Upgrade},
    std::fmt,
};

/// The fee mechanism in force for a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeGeneration {
    /// One of the four windowed generations.
    Windowed(&'static WindowParams),
    /// The continuous exponential market.
    Exponential,
}

impl FeeGeneration {
    /// The generation a block at `timestamp` is priced under, or `None`
    /// before the fee market.
    pub fn active_at(upgrades: &NetworkUpgrades, timestamp: u64) -> Option<Self> {
        match upgrades.latest_active(timestamp)? {
            Upgrade::ExponentialFees => Some(Self::Exponential),
            upgrade => WindowParams::for_upgrade(upgrade).map(Self::Windowed),
        }
    }

    /// The upgrade that introduced this generation.
    pub fn upgrade(&self) -> Upgrade {
        match self {
            Self::Windowed(params) => params.upgrade,
            Self::Exponential => Upgrade::ExponentialFees,
        }
    }

    /// Fee and state of a block at `timestamp` on top of `parent`.
    pub fn compute(
        &self,
        upgrades: &NetworkUpgrades,
        parent: &Header,
        timestamp: u64,
    ) -> Result<FeeOutcome, FeeError> {
        match self {
            Self::Windowed(_) => windowed::next_fee(upgrades, parent, timestamp),
            Self::Exponential => exponential::next_fee(upgrades, parent, timestamp),
        }
    }

    /// Fee and state of the first block of this generation.
    pub fn genesis(&self) -> FeeOutcome {
        match self {
            Self::Windowed(_) => FeeOutcome::new(INITIAL_BASE_FEE, Window::default()),
            Self::Exponential => FeeOutcome::new(MIN_GAS_PRICE, ExponentialState::default()),
        }
    }
}

impl fmt::Display for FeeGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.upgrade(), f)
    }
}
