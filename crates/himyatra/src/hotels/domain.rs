use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Room type label whose price follows `PriceUpdate::deluxe_price`.
pub const DELUXE_LABEL: &str = "Deluxe";
/// Room type label whose price follows `PriceUpdate::premium_suite_price`.
pub const PREMIUM_SUITE_LABEL: &str = "Premium Suite";

/// One hotel entry of the price store. Fields the service does not manage are kept
/// verbatim so a rewrite never drops data.
///
/// `roomTypes` stays an untyped value: reads pass it through whatever its shape, and
/// only a price update insists on it being a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(
        rename = "roomTypes",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub room_types: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HotelRecord {
    pub fn display_id(&self) -> String {
        match &self.id {
            Some(Value::String(id)) => id.clone(),
            Some(other) => other.to_string(),
            None => "<missing id>".to_string(),
        }
    }

    /// Room entries that are JSON objects; anything else in the list is skipped.
    pub fn offerings(&self) -> impl Iterator<Item = &Map<String, Value>> {
        self.room_types
            .as_ref()
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_object)
    }

    /// First room entry whose `name` is exactly `name`.
    pub fn offering(&self, name: &str) -> Option<&Map<String, Value>> {
        self.offerings()
            .find(|offering| offering_name(offering) == Some(name))
    }

    pub fn offering_price(&self, name: &str) -> Option<i64> {
        self.offering(name)?.get("price").and_then(Value::as_i64)
    }
}

pub(crate) fn offering_name(offering: &Map<String, Value>) -> Option<&str> {
    offering.get("name").and_then(Value::as_str)
}

/// Body of the price update request. Both values are required and must be non-zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceUpdate {
    #[serde(default)]
    pub deluxe_price: Option<i64>,
    #[serde(default)]
    pub premium_suite_price: Option<i64>,
}

impl PriceUpdate {
    pub fn new(deluxe_price: i64, premium_suite_price: i64) -> Self {
        Self {
            deluxe_price: Some(deluxe_price),
            premium_suite_price: Some(premium_suite_price),
        }
    }

    /// Both prices, or `None` when either is absent or zero.
    pub fn prices(&self) -> Option<UpdatedPrices> {
        match (self.deluxe_price, self.premium_suite_price) {
            (Some(deluxe), Some(premium_suite)) if deluxe != 0 && premium_suite != 0 => {
                Some(UpdatedPrices {
                    deluxe,
                    premium_suite,
                })
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedPrices {
    pub deluxe: i64,
    pub premium_suite: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceUpdateReceipt {
    pub message: String,
    pub updated_prices: UpdatedPrices,
    /// Number of room offerings whose price was rewritten.
    #[serde(skip)]
    pub offerings_updated: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn price_update_requires_both_non_zero_values() {
        assert!(PriceUpdate::new(2500, 6000).prices().is_some());
        assert!(PriceUpdate::new(0, 6000).prices().is_none());
        assert!(PriceUpdate {
            deluxe_price: Some(2500),
            premium_suite_price: None,
        }
        .prices()
        .is_none());
    }

    #[test]
    fn hotel_record_round_trips_unknown_fields() {
        let raw = json!({
            "id": 7,
            "name": "Snowline Retreat",
            "roomTypes": [
                { "name": "Deluxe", "price": 2400, "capacity": 2 }
            ]
        });
        let record: HotelRecord = serde_json::from_value(raw.clone()).expect("record parses");
        assert_eq!(record.display_id(), "7");
        assert_eq!(record.offering_price(DELUXE_LABEL), Some(2400));
        assert_eq!(serde_json::to_value(&record).expect("serializes"), raw);
    }

    #[test]
    fn loosely_shaped_room_types_pass_through() {
        let raw = json!({
            "id": 3,
            "roomTypes": [
                { "name": "Deluxe", "price": "2400" },
                { "label": "Dorm" },
                "closed for season"
            ]
        });
        let record: HotelRecord = serde_json::from_value(raw.clone()).expect("record parses");
        assert_eq!(record.offerings().count(), 2);
        assert!(record.offering(DELUXE_LABEL).is_some());
        assert_eq!(record.offering_price(DELUXE_LABEL), None);
        assert_eq!(serde_json::to_value(&record).expect("serializes"), raw);
    }
}
