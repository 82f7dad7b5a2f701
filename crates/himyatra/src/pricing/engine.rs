use serde::{Deserialize, Serialize};

/// Ceiling applied to the occupancy-adjusted special event multiplier.
pub const MAX_EVENT_MULTIPLIER: f64 = 3.0;
pub const MIN_EVENT_MULTIPLIER: f64 = 1.0;

/// Snapshot of the pricing controls for a single room rate.
///
/// Ranges (`occupancy_rate` in `[0, 100]`, `event_multiplier` in `[1, 3]`) are the
/// caller's responsibility; the engine computes a result for any numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingInput {
    pub base_price: f64,
    pub occupancy_rate: f64,
    #[serde(default = "dynamic_pricing_default")]
    pub dynamic_pricing_enabled: bool,
    #[serde(default)]
    pub special_event_enabled: bool,
    #[serde(default = "event_multiplier_default")]
    pub event_multiplier: f64,
}

fn dynamic_pricing_default() -> bool {
    true
}

fn event_multiplier_default() -> f64 {
    1.5
}

impl Default for PricingInput {
    fn default() -> Self {
        Self {
            base_price: 1000.0,
            occupancy_rate: 50.0,
            dynamic_pricing_enabled: dynamic_pricing_default(),
            special_event_enabled: false,
            event_multiplier: event_multiplier_default(),
        }
    }
}

impl PricingInput {
    /// Replace the base price, flooring negative entries at zero.
    pub fn with_base_price(mut self, base_price: f64) -> Self {
        self.base_price = if base_price.is_nan() {
            0.0
        } else {
            base_price.max(0.0)
        };
        self
    }

    /// Replace the event multiplier, clamped to `[1, 3]` at two-decimal precision.
    pub fn with_event_multiplier(mut self, multiplier: f64) -> Self {
        let clamped = if multiplier.is_nan() {
            MIN_EVENT_MULTIPLIER
        } else {
            multiplier.clamp(MIN_EVENT_MULTIPLIER, MAX_EVENT_MULTIPLIER)
        };
        self.event_multiplier = (clamped * 100.0).round() / 100.0;
        self
    }

    pub fn final_price(&self) -> u64 {
        compute_final_price(self)
    }

    /// Final price together with the multipliers that produced it.
    pub fn breakdown(&self) -> PriceBreakdown {
        let final_price = compute_final_price(self);

        if !self.dynamic_pricing_enabled {
            return PriceBreakdown {
                base_price: self.base_price,
                occupancy_multiplier: None,
                event_multiplier: None,
                final_price,
                explanation: "Base price (Dynamic pricing disabled)".to_string(),
            };
        }

        let occupancy = occupancy_multiplier(self.occupancy_rate);
        let mut explanation = format!("Base price: ₹{}", self.base_price);
        if self.occupancy_rate > 0.0 {
            explanation.push_str(&format!(
                " × {:.2} (Occupancy: {}%)",
                occupancy, self.occupancy_rate
            ));
        }

        let event = self
            .special_event_enabled
            .then(|| effective_event_multiplier(self.event_multiplier, self.occupancy_rate));
        if let Some(multiplier) = event {
            explanation.push_str(&format!(" × {:.2} (Special Event)", multiplier));
        }

        PriceBreakdown {
            base_price: self.base_price,
            occupancy_multiplier: (self.occupancy_rate > 0.0).then_some(occupancy),
            event_multiplier: event,
            final_price,
            explanation,
        }
    }
}

/// Computed price plus the factors shown to dashboard operators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBreakdown {
    pub base_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupancy_multiplier: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_multiplier: Option<f64>,
    pub final_price: u64,
    pub explanation: String,
}

/// Nightly price after occupancy and special event adjustments, rounded half-up.
pub fn compute_final_price(input: &PricingInput) -> u64 {
    let mut price = input.base_price;

    if !input.dynamic_pricing_enabled {
        return round_price(price);
    }

    price *= occupancy_multiplier(input.occupancy_rate);

    if input.special_event_enabled {
        price *= effective_event_multiplier(input.event_multiplier, input.occupancy_rate);
    }

    round_price(price)
}

pub fn occupancy_multiplier(occupancy_rate: f64) -> f64 {
    1.0 + occupancy_rate / 100.0
}

/// Event premium amplified by occupancy, never above [`MAX_EVENT_MULTIPLIER`].
pub fn effective_event_multiplier(event_multiplier: f64, occupancy_rate: f64) -> f64 {
    let influence = occupancy_rate / 100.0;
    let effective = 1.0 + (event_multiplier - 1.0) * (1.0 + influence);
    effective.min(MAX_EVENT_MULTIPLIER)
}

// Negative and NaN prices collapse to zero.
fn round_price(price: f64) -> u64 {
    if price.is_nan() || price <= 0.0 {
        return 0;
    }
    (price + 0.5).floor() as u64
}
