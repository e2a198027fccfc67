use mintcurve_economics::{
    format_base_units, generate, report, to_base_units, validate, EmissionConfig, RuleViolation,
};
use proptest::prelude::*;

// Property-based tests for the emission engine
// Randomized configs must keep the schedule and the aggregates consistent

fn arbitrary_valid_config() -> impl Strategy<Value = EmissionConfig> {
    (
        1u64..=64,                        // target eras
        1u64..=1_000,                     // epoches per era
        1u64..=100_000,                   // seconds per epoch
        50u64..100,                       // reduce ratio
        1u128..=1_000_000_000_000,        // initial mint size (up to 1000 tokens)
        10u128..=10_000,                  // epoch target as a multiple of mint size
        0u128..=10_000_000_000,           // fee rate
        1u64..=50,                        // liquidity ratio
    )
        .prop_map(
            |(eras, epoches, seconds, reduce, mint, multiple, fee, liquidity)| EmissionConfig {
                target_eras: eras,
                epoches_per_era: epoches,
                target_seconds_per_epoch: seconds,
                reduce_ratio_percent: reduce,
                initial_mint_size: mint,
                initial_target_mint_size_per_epoch: mint * multiple,
                fee_rate: fee,
                liquidity_tokens_ratio_percent: liquidity,
            },
        )
}

fn canonical_decimal() -> impl Strategy<Value = String> {
    (0u64..=1_000_000_000_000, proptest::collection::vec(0u8..10, 0..=9)).prop_map(
        |(whole, digits)| {
            let fraction: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                whole.to_string()
            } else {
                format!("{whole}.{fraction}")
            }
        },
    )
}

proptest! {
    #[test]
    fn decay_is_monotonic(config in arbitrary_valid_config()) {
        let schedule = generate(&config);
        prop_assert_eq!(schedule.len() as u64, config.target_eras);
        prop_assert!(schedule.is_monotonic());

        for pair in schedule.eras().windows(2) {
            prop_assert!(pair[1].target_mint_size_per_epoch <= pair[0].target_mint_size_per_epoch);
            prop_assert_eq!(
                pair[1].target_mint_size_per_epoch,
                pair[0].target_mint_size_per_epoch * config.reduce_ratio_percent as u128 / 100
            );
        }
    }
}

proptest! {
    #[test]
    fn supply_split_is_exact(config in arbitrary_valid_config()) {
        let metrics = report(&config, &generate(&config));
        prop_assert_eq!(metrics.liquidity_supply + metrics.community_supply, metrics.total_supply);
        prop_assert!(metrics.liquidity_supply <= metrics.total_supply / 2);
        prop_assert_eq!(
            metrics.total_duration_seconds,
            config.target_eras * config.epoches_per_era * config.target_seconds_per_epoch
        );
    }
}

proptest! {
    #[test]
    fn scale_round_trips(text in canonical_decimal()) {
        let units = to_base_units(&text).unwrap();
        prop_assert_eq!(format_base_units(units), text);
    }
}

proptest! {
    #[test]
    fn validation_is_deterministic(config in arbitrary_valid_config()) {
        let schedule = generate(&config);
        let first = validate(&config, &schedule);
        let second = validate(&config, &generate(&config));
        prop_assert_eq!(&first, &second);

        // Parameter rules all hold, so only schedule rules can fire
        if let Some(kind) = first.violation() {
            prop_assert!(matches!(
                kind,
                RuleViolation::DecayExhausted | RuleViolation::SupplyExceedsTokenLimit
            ));
        }
    }
}
