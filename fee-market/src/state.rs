use {
    crate::{exponential::ExponentialState, window::Window},
    num_bigint::BigUint,
};

/// Fee state a header carries at the front of its extra data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeeState {
    /// Rolling gas window of the windowed generations.
    Window(Window),
    /// Accumulators of the exponential generation.
    Exponential(ExponentialState),
}

impl FeeState {
    /// Encoding written into the child header's extra data.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            FeeState::Window(window) => window.to_bytes(),
            FeeState::Exponential(state) => state.to_bytes(),
        }
    }
}

impl From<Window> for FeeState {
    fn from(window: Window) -> Self {
        FeeState::Window(window)
    }
}

impl From<ExponentialState> for FeeState {
    fn from(state: ExponentialState) -> Self {
        FeeState::Exponential(state)
    }
}

/// Base fee of a new block and the fee state its header must carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeOutcome {
    /// Base fee, in wei.
    pub base_fee: BigUint,
    pub state: FeeState,
}

impl FeeOutcome {
    pub fn new(base_fee: impl Into<BigUint>, state: impl Into<FeeState>) -> Self {
        Self {
            base_fee: base_fee.into(),
            state: state.into(),
        }
    }
}
