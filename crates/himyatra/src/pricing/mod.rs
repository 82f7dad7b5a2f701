mod engine;
mod rate_card;

pub use engine::{
    compute_final_price, effective_event_multiplier, occupancy_multiplier, PriceBreakdown,
    PricingInput, MAX_EVENT_MULTIPLIER, MIN_EVENT_MULTIPLIER,
};
pub use rate_card::{RateCard, RateCardEntry, RateCardError, RoomQuote};
