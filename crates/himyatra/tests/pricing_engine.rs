use himyatra::pricing::{compute_final_price, PricingInput};

fn input(base: f64, occupancy: f64, dynamic: bool, event: bool, multiplier: f64) -> PricingInput {
    PricingInput {
        base_price: base,
        occupancy_rate: occupancy,
        dynamic_pricing_enabled: dynamic,
        special_event_enabled: event,
        event_multiplier: multiplier,
    }
}

const BASE_PRICES: [f64; 6] = [0.0, 1.0, 499.5, 1000.0, 2350.25, 5000.0];
const OCCUPANCY: [f64; 6] = [0.0, 12.5, 33.0, 50.0, 87.0, 100.0];
const MULTIPLIERS: [f64; 5] = [1.0, 1.25, 1.5, 2.2, 3.0];

#[test]
fn disabled_dynamic_pricing_returns_rounded_base() {
    for base in BASE_PRICES {
        for occupancy in OCCUPANCY {
            let expected = (base + 0.5).floor() as u64;
            assert_eq!(
                compute_final_price(&input(base, occupancy, false, true, 2.0)),
                expected,
                "base {base} occupancy {occupancy}"
            );
        }
    }
}

#[test]
fn zero_occupancy_without_event_is_identity() {
    for base in BASE_PRICES {
        assert_eq!(
            compute_final_price(&input(base, 0.0, true, false, 3.0)),
            (base + 0.5).floor() as u64
        );
    }
}

#[test]
fn event_pricing_never_exceeds_triple_occupancy_price() {
    for base in BASE_PRICES {
        for occupancy in OCCUPANCY {
            for multiplier in MULTIPLIERS {
                let price = compute_final_price(&input(base, occupancy, true, true, multiplier));
                let ceiling = (base * (1.0 + occupancy / 100.0) * 3.0 + 0.5).floor() as u64;
                assert!(
                    price <= ceiling,
                    "{price} > {ceiling} for base {base} occupancy {occupancy} x{multiplier}"
                );
            }
        }
    }
}

#[test]
fn zero_base_price_is_always_free() {
    for occupancy in OCCUPANCY {
        for multiplier in MULTIPLIERS {
            assert_eq!(
                compute_final_price(&input(0.0, occupancy, true, true, multiplier)),
                0
            );
        }
    }
}

#[test]
fn dashboard_scenarios() {
    assert_eq!(compute_final_price(&input(1000.0, 50.0, true, false, 1.5)), 1500);
    assert_eq!(compute_final_price(&input(1000.0, 50.0, true, true, 1.5)), 2625);
    assert_eq!(PricingInput::default().final_price(), 1500);
}

#[test]
fn pricing_input_defaults_missing_json_fields() {
    let parsed: PricingInput =
        serde_json::from_str(r#"{"base_price": 2000, "occupancy_rate": 25}"#).expect("parses");
    assert!(parsed.dynamic_pricing_enabled);
    assert!(!parsed.special_event_enabled);
    assert_eq!(parsed.event_multiplier, 1.5);
    assert_eq!(parsed.final_price(), 2500);
}
