//! File-backed hotel price store and its HTTP surface.
//!
//! Hotels are kept as one JSON array. Reads return the records unchanged; updates
//! rewrite the price of every room type labelled `Deluxe` or `Premium Suite` and
//! persist the whole array again.

pub mod domain;
pub mod router;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{
    HotelRecord, PriceUpdate, PriceUpdateReceipt, UpdatedPrices, DELUXE_LABEL,
    PREMIUM_SUITE_LABEL,
};
pub use router::hotel_router;
pub use service::{apply_prices, HotelPricingService, HotelServiceError};
pub use store::{parse_hotels, HotelRepository, HotelStoreError, JsonFileHotelRepository};
