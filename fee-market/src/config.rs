use evmfee_upgrades::{NetworkUpgrades, Upgrade};

/// One gwei in wei.
pub const GWEI: u64 = 1_000_000_000;

/// Base fee of the first block of any windowed fee market.
pub const INITIAL_BASE_FEE: u64 = 225 * GWEI;

/// Gas charged to every block under [`DYNAMIC_FEES`], on top of the gas it reports.
pub const INTRINSIC_BLOCK_GAS: u64 = 1_000_000;

/// Gas the parent is charged beyond what its header reports as `gas_used`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOverhead {
    /// A fixed amount per block.
    Intrinsic(u64),
    /// The variable block gas cost, see [`crate::block_gas_cost`].
    BlockGasCost,
    /// Nothing beyond the reported gas.
    None,
}

/// Parameters of one windowed fee-market generation.
///
/// These are protocol constants; one value exists per upgrade and nothing
/// is read from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowParams {
    /// The upgrade that activates these parameters.
    pub upgrade: Upgrade,

    /// Gas the whole window should hold. Above this the fee rises, below it
    /// falls.
    pub target_gas: u64,

    /// Each adjustment moves the fee by at most `1 / base_fee_change_denominator`
    /// of the relative deviation from target.
    pub base_fee_change_denominator: u64,

    /// Floor, in wei.
    pub min_base_fee: u64,

    /// Ceiling, in wei.
    pub max_base_fee: u64,

    /// Extra gas attributed to every block.
    pub overhead: BlockOverhead,

    /// Whether the parent's `ext_data_gas_used` counts toward the window.
    pub counts_ext_data_gas: bool,
}

/// First fee market.
pub const DYNAMIC_FEES: WindowParams = WindowParams {
    upgrade: Upgrade::DynamicFees,
    target_gas: 10_000_000,
    base_fee_change_denominator: 12,
    min_base_fee: 75 * GWEI,
    max_base_fee: 225 * GWEI,
    overhead: BlockOverhead::Intrinsic(INTRINSIC_BLOCK_GAS),
    counts_ext_data_gas: false,
};

/// Block gas cost replaces the intrinsic charge; bounds widen.
pub const BLOCK_GAS_COST: WindowParams = WindowParams {
    upgrade: Upgrade::BlockGasCost,
    target_gas: 10_000_000,
    base_fee_change_denominator: 12,
    min_base_fee: 25 * GWEI,
    max_base_fee: 1_000 * GWEI,
    overhead: BlockOverhead::BlockGasCost,
    counts_ext_data_gas: true,
};

/// Larger target, slower adjustment, no per-block charge.
pub const FEE_RETUNE: WindowParams = WindowParams {
    upgrade: Upgrade::FeeRetune,
    target_gas: 15_000_000,
    base_fee_change_denominator: 36,
    min_base_fee: 25 * GWEI,
    max_base_fee: 1_000 * GWEI,
    overhead: BlockOverhead::None,
    counts_ext_data_gas: true,
};

/// [`FEE_RETUNE`] with a 1 gwei floor.
pub const LOWER_FEE_FLOOR: WindowParams = WindowParams {
    min_base_fee: GWEI,
    upgrade: Upgrade::LowerFeeFloor,
    ..FEE_RETUNE
};

/// Every windowed generation, oldest first.
pub const WINDOWED_GENERATIONS: [&WindowParams; 4] =
    [&DYNAMIC_FEES, &BLOCK_GAS_COST, &FEE_RETUNE, &LOWER_FEE_FLOOR];

impl WindowParams {
    /// The latest windowed generation active at `timestamp`, if any.
    ///
    /// Once the exponential fee market activates this still returns the last
    /// windowed generation, which is what the final windowed blocks were
    /// produced under.
    pub fn active_at(upgrades: &NetworkUpgrades, timestamp: u64) -> Option<&'static WindowParams> {
        WINDOWED_GENERATIONS
            .into_iter()
            .rev()
            .find(|params| upgrades.is_active(params.upgrade, timestamp))
    }

    /// The generation introduced by `upgrade`, if it is a windowed one.
    pub fn for_upgrade(upgrade: Upgrade) -> Option<&'static WindowParams> {
        WINDOWED_GENERATIONS
            .into_iter()
            .find(|params| params.upgrade == upgrade)
    }
}
