use num_bigint::BigUint;

/// 32-byte block hash.
pub type Hash = [u8; 32];

/// The header fields the fee engine reads.
///
/// Headers are owned by the caller; the engine only borrows them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    /// Block height. Genesis is 0.
    pub number: u64,
    /// Hash of the parent block.
    pub parent_hash: Hash,
    /// Block timestamp in seconds.
    pub timestamp: u64,
    /// Free-form bytes. Fee-market blocks store their encoded fee state at
    /// the front.
    pub extra: Vec<u8>,
    /// Base fee the block paid. `None` before the fee market.
    pub base_fee: Option<BigUint>,
    /// Gas consumed by the block's EVM transactions.
    pub gas_used: u64,
    /// Gas consumed by the block's extension data (cross-chain transfers).
    /// Only present from the block-gas-cost upgrade on.
    pub ext_data_gas_used: Option<u64>,
    /// Per-block gas charge. Only present from the block-gas-cost upgrade on.
    pub block_gas_cost: Option<u64>,
}

impl Header {
    #[inline]
    pub fn is_genesis(&self) -> bool {
        self.number == 0
    }
}
