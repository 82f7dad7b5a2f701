use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use super::domain::HotelRecord;

/// Storage abstraction over the list of hotel records.
pub trait HotelRepository: Send + Sync {
    fn load(&self) -> Result<Vec<HotelRecord>, HotelStoreError>;
    fn replace_all(&self, hotels: &[HotelRecord]) -> Result<(), HotelStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum HotelStoreError {
    #[error("Hotel data file not found at: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to access hotel data: {0}")]
    Io(#[from] std::io::Error),
    #[error("hotel data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid hotel data format: expected an array of hotels")]
    NotAnArray,
    #[error("Invalid room types format for hotel {hotel_id}")]
    InvalidRoomTypes { hotel_id: String },
}

/// Hotel records persisted as a single pretty-printed JSON array.
#[derive(Debug, Clone)]
pub struct JsonFileHotelRepository {
    path: PathBuf,
}

impl JsonFileHotelRepository {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HotelRepository for JsonFileHotelRepository {
    fn load(&self) -> Result<Vec<HotelRecord>, HotelStoreError> {
        if !self.path.exists() {
            return Err(HotelStoreError::NotFound {
                path: self.path.clone(),
            });
        }

        debug!(path = %self.path.display(), "reading hotel data");
        let contents = fs::read_to_string(&self.path)?;
        parse_hotels(&contents)
    }

    fn replace_all(&self, hotels: &[HotelRecord]) -> Result<(), HotelStoreError> {
        let contents = serde_json::to_string_pretty(hotels)?;
        fs::write(&self.path, contents)?;
        debug!(path = %self.path.display(), hotels = hotels.len(), "hotel data written");
        Ok(())
    }
}

pub fn parse_hotels(contents: &str) -> Result<Vec<HotelRecord>, HotelStoreError> {
    let value: Value = serde_json::from_str(contents)?;
    if !value.is_array() {
        return Err(HotelStoreError::NotAnArray);
    }
    Ok(serde_json::from_value(value)?)
}
