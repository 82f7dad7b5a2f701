use serde::{Deserialize, Serialize};

use super::engine::{PriceBreakdown, PricingInput};
use crate::hotels::{PriceUpdate, DELUXE_LABEL, PREMIUM_SUITE_LABEL};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateCardEntry {
    pub name: String,
    pub base_price: f64,
}

/// Base nightly prices per room type, in display order.
///
/// Deserialized cards go through [`RateCard::add`], so they obey the same name and
/// price rules as cards built in code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RateCardRecord")]
pub struct RateCard {
    entries: Vec<RateCardEntry>,
}

#[derive(Deserialize)]
struct RateCardRecord {
    entries: Vec<RateCardEntry>,
}

impl TryFrom<RateCardRecord> for RateCard {
    type Error = RateCardError;

    fn try_from(record: RateCardRecord) -> Result<Self, Self::Error> {
        let mut card = RateCard {
            entries: Vec::with_capacity(record.entries.len()),
        };
        for entry in record.entries {
            card.add(&entry.name, entry.base_price)?;
        }
        Ok(card)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RoomQuote {
    pub name: String,
    #[serde(flatten)]
    pub breakdown: PriceBreakdown,
}

#[derive(Debug, thiserror::Error)]
pub enum RateCardError {
    #[error("room type '{name}' needs a name and a positive base price (got {base_price})")]
    InvalidEntry { name: String, base_price: f64 },
    #[error("room type '{0}' already has a base price")]
    DuplicateEntry(String),
    #[error("room type '{0}' is not on the rate card")]
    MissingEntry(String),
}

impl Default for RateCard {
    fn default() -> Self {
        Self::standard()
    }
}

impl RateCard {
    pub fn standard() -> Self {
        let entries = [
            ("Single", 1000.0),
            ("Deluxe", 2000.0),
            ("Suite", 3000.0),
            ("Premium Suite", 5000.0),
        ]
        .into_iter()
        .map(|(name, base_price)| RateCardEntry {
            name: name.to_string(),
            base_price,
        })
        .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[RateCardEntry] {
        &self.entries
    }

    pub fn base_price(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.base_price)
    }

    pub fn add(&mut self, name: &str, base_price: f64) -> Result<(), RateCardError> {
        let name = name.trim();
        if name.is_empty() || base_price.is_nan() || base_price <= 0.0 {
            return Err(RateCardError::InvalidEntry {
                name: name.to_string(),
                base_price,
            });
        }
        if self
            .entries
            .iter()
            .any(|entry| entry.name.eq_ignore_ascii_case(name))
        {
            return Err(RateCardError::DuplicateEntry(name.to_string()));
        }

        self.entries.push(RateCardEntry {
            name: name.to_string(),
            base_price,
        });
        Ok(())
    }

    /// Set a base price; negative values are stored as zero.
    pub fn set_base_price(&mut self, name: &str, base_price: f64) -> Result<(), RateCardError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.name == name)
            .ok_or_else(|| RateCardError::MissingEntry(name.to_string()))?;
        entry.base_price = PricingInput::default()
            .with_base_price(base_price)
            .base_price;
        Ok(())
    }

    /// Price one room type using the shared controls in `settings`.
    pub fn quote(&self, name: &str, settings: &PricingInput) -> Result<RoomQuote, RateCardError> {
        let base_price = self
            .base_price(name)
            .ok_or_else(|| RateCardError::MissingEntry(name.to_string()))?;
        Ok(RoomQuote {
            name: name.to_string(),
            breakdown: settings.with_base_price(base_price).breakdown(),
        })
    }

    pub fn quotes(&self, settings: &PricingInput) -> Vec<RoomQuote> {
        self.entries
            .iter()
            .map(|entry| RoomQuote {
                name: entry.name.clone(),
                breakdown: settings.with_base_price(entry.base_price).breakdown(),
            })
            .collect()
    }

    /// Final Deluxe and Premium Suite prices, ready to publish to the hotel store.
    pub fn price_update(&self, settings: &PricingInput) -> Result<PriceUpdate, RateCardError> {
        let deluxe = self.quote(DELUXE_LABEL, settings)?;
        let premium_suite = self.quote(PREMIUM_SUITE_LABEL, settings)?;
        Ok(PriceUpdate::new(
            saturating_i64(deluxe.breakdown.final_price),
            saturating_i64(premium_suite.breakdown.final_price),
        ))
    }
}

fn saturating_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_update_uses_final_prices() {
        let card = RateCard::standard();
        let settings = PricingInput {
            occupancy_rate: 50.0,
            special_event_enabled: true,
            event_multiplier: 1.5,
            ..PricingInput::default()
        };

        let update = card.price_update(&settings).expect("labels present");
        // 2000 * 1.5 * 1.75 and 5000 * 1.5 * 1.75
        assert_eq!(update, PriceUpdate::new(5250, 13125));
    }

    #[test]
    fn missing_label_blocks_publishing() {
        let card = RateCard {
            entries: vec![RateCardEntry {
                name: "Deluxe".to_string(),
                base_price: 2000.0,
            }],
        };
        let err = card
            .price_update(&PricingInput::default())
            .expect_err("premium suite missing");
        assert!(matches!(err, RateCardError::MissingEntry(name) if name == "Premium Suite"));
    }

    #[test]
    fn add_requires_positive_unique_entries() {
        let mut card = RateCard::standard();
        card.add("Family Cottage", 4200.0).expect("valid entry");
        assert_eq!(card.base_price("Family Cottage"), Some(4200.0));

        assert!(matches!(
            card.add("Dorm", 0.0),
            Err(RateCardError::InvalidEntry { .. })
        ));
        assert!(matches!(
            card.add("single", 900.0),
            Err(RateCardError::DuplicateEntry(_))
        ));
    }

    #[test]
    fn deserialized_cards_are_validated() {
        let card: RateCard = serde_json::from_value(serde_json::json!({
            "entries": [
                { "name": " Dorm ", "base_price": 600.0 },
                { "name": "Deluxe", "base_price": 2000.0 }
            ]
        }))
        .expect("valid card");
        assert_eq!(card.base_price("Dorm"), Some(600.0));
        assert_eq!(
            serde_json::from_value::<RateCard>(serde_json::to_value(&card).expect("serializes"))
                .expect("round trip"),
            card
        );

        let duplicate = serde_json::from_value::<RateCard>(serde_json::json!({
            "entries": [
                { "name": "Deluxe", "base_price": 2000.0 },
                { "name": "deluxe", "base_price": 2100.0 }
            ]
        }))
        .expect_err("duplicate names");
        assert!(duplicate.to_string().contains("already has a base price"));

        let blank = serde_json::from_value::<RateCard>(serde_json::json!({
            "entries": [{ "name": "  ", "base_price": 900.0 }]
        }))
        .expect_err("blank name");
        assert!(blank.to_string().contains("needs a name and a positive base price"));

        assert!(serde_json::from_value::<RateCard>(serde_json::json!({
            "entries": [{ "name": "Suite", "base_price": -1.0 }]
        }))
        .is_err());
    }

    #[test]
    fn set_base_price_floors_at_zero() {
        let mut card = RateCard::standard();
        card.set_base_price("Suite", -10.0).expect("suite exists");
        assert_eq!(card.base_price("Suite"), Some(0.0));
        assert_eq!(card.quotes(&PricingInput::default())[2].breakdown.final_price, 0);
    }
}
