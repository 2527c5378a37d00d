//! Rolling window of recent gas usage.
//!
//! Slot `WINDOW_LEN - 1` holds the gas of the most recent second; slot 0
//! holds the oldest. The window travels in the header's extra data as
//! `WINDOW_LEN` big-endian `u64`s.

use crate::error::FeeError;

/// Number of one-second slots in the window.
pub const WINDOW_LEN: usize = 10;

/// Encoded size of a [`Window`] in bytes.
pub const WINDOW_SIZE: usize = WINDOW_LEN * std::mem::size_of::<u64>();

/// Gas used per second over the last [`WINDOW_LEN`] seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Window([u64; WINDOW_LEN]);

impl Window {
    pub const fn new(slots: [u64; WINDOW_LEN]) -> Self {
        Self(slots)
    }

    /// Decode a window from the front of `bytes`. Trailing bytes are ignored.
    pub fn parse(bytes: &[u8]) -> Result<Self, FeeError> {
        let encoded = bytes.get(..WINDOW_SIZE).ok_or(FeeError::WindowTooShort {
            expected: WINDOW_SIZE,
            actual: bytes.len(),
        })?;

        let mut slots = [0u64; WINDOW_LEN];
        for (slot, chunk) in slots.iter_mut().zip(encoded.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *slot = u64::from_be_bytes(word);
        }
        Ok(Self(slots))
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.iter().flat_map(|slot| slot.to_be_bytes()).collect()
    }

    pub fn slots(&self) -> &[u64; WINDOW_LEN] {
        &self.0
    }

    /// Add `amounts` to the most recent slot, saturating at `u64::MAX`.
    pub fn add(&mut self, amounts: &[u64]) {
        let newest = &mut self.0[WINDOW_LEN - 1];
        *newest = amounts
            .iter()
            .fold(*newest, |sum, amount| sum.saturating_add(*amount));
    }

    /// Drop the oldest `n` slots and open `n` empty ones.
    pub fn shift(&mut self, n: u64) {
        let n = match usize::try_from(n) {
            Ok(n) if n < WINDOW_LEN => n,
            _ => {
                self.0 = [0; WINDOW_LEN];
                return;
            }
        };
        self.0.rotate_left(n);
        self.0[WINDOW_LEN - n..].fill(0);
    }

    /// Total gas in the window, saturating at `u64::MAX`.
    pub fn sum(&self) -> u64 {
        self.0.iter().fold(0u64, |sum, slot| sum.saturating_add(*slot))
    }
}
