use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::{json, Value};

use crate::hotels::domain::HotelRecord;
use crate::hotels::store::{HotelRepository, HotelStoreError};
use crate::hotels::{hotel_router, HotelPricingService};

pub(super) fn sample_hotels() -> Vec<HotelRecord> {
    serde_json::from_value(json!([
        {
            "id": 1,
            "name": "Snowline Retreat",
            "location": "Manali",
            "roomTypes": [
                { "name": "Standard", "price": 1500, "available": 12 },
                { "name": "Deluxe", "price": 2400, "available": 6 },
                { "name": "Premium Suite", "price": 5200, "available": 2 }
            ]
        },
        {
            "id": "hy-002",
            "name": "Cedar Ridge Lodge",
            "roomTypes": [
                { "name": "Deluxe", "price": 2100 },
                { "name": "Premium suite", "price": 4800 }
            ]
        }
    ]))
    .expect("sample hotels parse")
}

#[derive(Default)]
pub(super) struct MemoryHotels {
    pub(super) hotels: Mutex<Vec<HotelRecord>>,
    pub(super) writes: Mutex<usize>,
}

impl MemoryHotels {
    pub(super) fn seeded(hotels: Vec<HotelRecord>) -> Self {
        Self {
            hotels: Mutex::new(hotels),
            writes: Mutex::new(0),
        }
    }

    pub(super) fn snapshot(&self) -> Vec<HotelRecord> {
        self.hotels.lock().expect("hotels mutex poisoned").clone()
    }

    pub(super) fn write_count(&self) -> usize {
        *self.writes.lock().expect("writes mutex poisoned")
    }
}

impl HotelRepository for MemoryHotels {
    fn load(&self) -> Result<Vec<HotelRecord>, HotelStoreError> {
        Ok(self.snapshot())
    }

    fn replace_all(&self, hotels: &[HotelRecord]) -> Result<(), HotelStoreError> {
        *self.hotels.lock().expect("hotels mutex poisoned") = hotels.to_vec();
        *self.writes.lock().expect("writes mutex poisoned") += 1;
        Ok(())
    }
}

pub(super) struct UnreadableHotels;

impl HotelRepository for UnreadableHotels {
    fn load(&self) -> Result<Vec<HotelRecord>, HotelStoreError> {
        Err(HotelStoreError::NotAnArray)
    }

    fn replace_all(&self, _hotels: &[HotelRecord]) -> Result<(), HotelStoreError> {
        Ok(())
    }
}

pub(super) fn build_service(
    hotels: Vec<HotelRecord>,
) -> (Arc<HotelPricingService<MemoryHotels>>, Arc<MemoryHotels>) {
    let repository = Arc::new(MemoryHotels::seeded(hotels));
    let service = Arc::new(HotelPricingService::new(repository.clone()));
    (service, repository)
}

pub(super) fn router_with_service(service: Arc<HotelPricingService<MemoryHotels>>) -> axum::Router {
    hotel_router(service)
}

pub(super) fn price_of(hotels: &[HotelRecord], index: usize, label: &str) -> Option<i64> {
    hotels[index].offering_price(label)
}

pub(super) async fn json_body(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let value = serde_json::from_slice(&bytes).expect("body is json");
    (status, value)
}
