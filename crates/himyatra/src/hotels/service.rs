use std::sync::{Arc, Mutex, PoisonError};

use serde_json::Value;
use tracing::{info, warn};

use super::domain::{
    offering_name, HotelRecord, PriceUpdate, PriceUpdateReceipt, UpdatedPrices, DELUXE_LABEL,
    PREMIUM_SUITE_LABEL,
};
use super::store::{HotelRepository, HotelStoreError};

/// Service exposing read access and label-based price rewrites over a hotel repository.
pub struct HotelPricingService<R> {
    repository: Arc<R>,
    // Serializes load-modify-write cycles against the same repository.
    write_lock: Mutex<()>,
}

#[derive(Debug, thiserror::Error)]
pub enum HotelServiceError {
    #[error("Missing required price values")]
    MissingPrices,
    #[error(transparent)]
    Store(#[from] HotelStoreError),
}

impl<R> HotelPricingService<R>
where
    R: HotelRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            write_lock: Mutex::new(()),
        }
    }

    pub fn hotels(&self) -> Result<Vec<HotelRecord>, HotelServiceError> {
        Ok(self.repository.load()?)
    }

    /// Rewrite the Deluxe and Premium Suite prices of every hotel and persist the result.
    pub fn update_prices(
        &self,
        update: &PriceUpdate,
    ) -> Result<PriceUpdateReceipt, HotelServiceError> {
        let prices = update.prices().ok_or_else(|| {
            warn!(?update, "rejected price update with missing values");
            HotelServiceError::MissingPrices
        })?;

        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut hotels = self.repository.load()?;
        let offerings_updated = apply_prices(&mut hotels, prices)?;
        self.repository.replace_all(&hotels)?;

        info!(
            deluxe = prices.deluxe,
            premium_suite = prices.premium_suite,
            hotels = hotels.len(),
            offerings_updated,
            "hotel prices updated"
        );

        Ok(PriceUpdateReceipt {
            message: "Prices updated successfully".to_string(),
            updated_prices: prices,
            offerings_updated,
        })
    }
}

/// Apply `prices` to every offering labelled Deluxe or Premium Suite.
///
/// Every hotel must carry a room type list; the first hotel without one aborts the
/// update before any record is touched. Entries that are not objects, or whose name
/// is any other label, are left as they are.
pub fn apply_prices(
    hotels: &mut [HotelRecord],
    prices: UpdatedPrices,
) -> Result<usize, HotelStoreError> {
    if let Some(hotel) = hotels
        .iter()
        .find(|hotel| !matches!(hotel.room_types, Some(Value::Array(_))))
    {
        return Err(HotelStoreError::InvalidRoomTypes {
            hotel_id: hotel.display_id(),
        });
    }

    let mut updated = 0;
    for offering in hotels
        .iter_mut()
        .filter_map(|hotel| hotel.room_types.as_mut().and_then(Value::as_array_mut))
        .flatten()
        .filter_map(Value::as_object_mut)
    {
        let price = match offering_name(offering) {
            Some(DELUXE_LABEL) => prices.deluxe,
            Some(PREMIUM_SUITE_LABEL) => prices.premium_suite,
            _ => continue,
        };
        offering.insert("price".to_string(), Value::from(price));
        updated += 1;
    }

    Ok(updated)
}
