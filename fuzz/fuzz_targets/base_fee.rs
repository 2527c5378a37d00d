//! Fuzz base fee derivation with arbitrary schedules and parent headers.
//!
//! Goals:
//! - Find panics, overflows or unbounded loops on untrusted headers.
//! - Verify windowed results stay within the parent generation's bounds.
//! - Verify every entry point agrees with `next_fee_state`.

#![no_main]

use {
    arbitrary::{Arbitrary, Unstructured},
    evmfee_market::{
        calculator::{base_fee, estimate_next_base_fee, genesis_fee_state, next_fee_state},
        ChainConfig, ExponentialState, FeeError, FeeGeneration, Header, NetworkUpgrades, Window,
        WindowParams,
    },
    libfuzzer_sys::fuzz_target,
    num_bigint::BigUint,
};

/// How the parent's extra data is produced.
#[derive(Debug, Arbitrary)]
enum Extra {
    Window([u64; 10]),
    Exponential { excess: u64, target_excess: u64 },
    Raw(Vec<u8>),
}

impl Extra {
    fn into_bytes(self) -> Vec<u8> {
        match self {
            Extra::Window(slots) => Window::new(slots).to_bytes(),
            Extra::Exponential {
                excess,
                target_excess,
            } => ExponentialState {
                excess,
                target_excess,
            }
            .to_bytes(),
            Extra::Raw(bytes) => bytes,
        }
    }
}

#[derive(Debug)]
struct FuzzInput {
    upgrades: [Option<u64>; 7],
    number: u64,
    parent_timestamp: u64,
    timestamp: u64,
    extra: Extra,
    base_fee: Option<u64>,
    gas_used: u64,
    ext_data_gas_used: Option<u64>,
    block_gas_cost: Option<u64>,
}

impl<'a> Arbitrary<'a> for FuzzInput {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let parent_timestamp = u.arbitrary()?;
        Ok(FuzzInput {
            upgrades: u.arbitrary()?,
            number: u.int_in_range(0..=3)?,
            parent_timestamp,
            // Mostly forward in time, sometimes backwards.
            timestamp: if u.ratio(1, 8)? {
                u.arbitrary()?
            } else {
                parent_timestamp.saturating_add(u.int_in_range(0..=100)?)
            },
            extra: u.arbitrary()?,
            base_fee: u.arbitrary()?,
            gas_used: u.arbitrary()?,
            ext_data_gas_used: u.arbitrary()?,
            block_gas_cost: u.arbitrary()?,
        })
    }
}

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let input: FuzzInput = match u.arbitrary() {
        Ok(i) => i,
        Err(_) => return,
    };

    // The schedule is deliberately not validated.
    let [bootstrap, gas_repricing, dynamic_fees, block_gas_cost, fee_retune, lower_fee_floor, exponential_fees] =
        input.upgrades;
    let upgrades = NetworkUpgrades {
        bootstrap_timestamp: bootstrap,
        gas_repricing_timestamp: gas_repricing,
        dynamic_fees_timestamp: dynamic_fees,
        block_gas_cost_timestamp: block_gas_cost,
        fee_retune_timestamp: fee_retune,
        lower_fee_floor_timestamp: lower_fee_floor,
        exponential_fees_timestamp: exponential_fees,
    };
    let config = ChainConfig::new(1, upgrades);

    let parent = Header {
        number: input.number,
        timestamp: input.parent_timestamp,
        extra: input.extra.into_bytes(),
        base_fee: input.base_fee.map(BigUint::from),
        gas_used: input.gas_used,
        ext_data_gas_used: input.ext_data_gas_used,
        block_gas_cost: input.block_gas_cost,
        ..Header::default()
    };

    // ── next_fee_state must not panic and base_fee must agree with it ──

    let outcome = next_fee_state(&config, &parent, input.timestamp);
    let fee = base_fee(&config, &parent, input.timestamp);
    assert_eq!(
        fee,
        outcome.clone().map(|outcome| outcome.map(|outcome| outcome.base_fee))
    );

    // ── Windowed results stay within the parent generation's bounds ──

    if let Ok(Some(outcome)) = &outcome {
        let generation = FeeGeneration::active_at(&upgrades, input.timestamp);
        let parent_params = WindowParams::active_at(&upgrades, parent.timestamp);
        if let (Some(FeeGeneration::Windowed(_)), Some(params)) = (generation, parent_params) {
            if !parent.is_genesis() {
                assert!(outcome.base_fee >= BigUint::from(params.min_base_fee));
                assert!(outcome.base_fee <= BigUint::from(params.max_base_fee));
            }
        }
    }

    // ── Estimator only fails when the parent is malformed ──

    match estimate_next_base_fee(&config, &parent, input.timestamp) {
        Ok(_) => {}
        Err(FeeError::NoFeeMarketActive) => {
            assert_eq!(upgrades.first_fee_market_activation(), None);
        }
        Err(FeeError::InvalidTimestamp { .. }) => panic!("estimator moved backwards in time"),
        Err(_) => {}
    }

    // ── Genesis state never panics and matches a genesis parent ──

    if let Some(genesis) = genesis_fee_state(&config, input.timestamp) {
        let genesis_parent = Header {
            timestamp: input.parent_timestamp,
            ..Header::default()
        };
        let from_parent = next_fee_state(&config, &genesis_parent, input.timestamp);
        let exponential = FeeGeneration::active_at(&upgrades, input.timestamp)
            == Some(FeeGeneration::Exponential);
        if exponential && input.timestamp < input.parent_timestamp {
            assert_eq!(
                from_parent,
                Err(FeeError::InvalidTimestamp {
                    timestamp: input.timestamp,
                    parent_timestamp: input.parent_timestamp,
                })
            );
        } else {
            assert_eq!(from_parent, Ok(Some(genesis)));
        }
    }
});
