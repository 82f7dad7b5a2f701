use serde::Serialize;
use tracing::debug;

use super::domain::{OccupancyError, Room, RoomStatus, RoomType};
use super::summary::OccupancySummary;

/// The room types tracked by the occupancy dashboard, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupancyBoard {
    room_types: Vec<RoomType>,
}

/// Narrows board views by room status and/or room type name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardFilter {
    pub status: Option<RoomStatus>,
    pub room_type: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoomTypeView {
    pub name: String,
    pub summary: OccupancySummary,
    pub rooms: Vec<Room>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoomTypeSummary {
    pub name: String,
    #[serde(flatten)]
    pub summary: OccupancySummary,
}

/// Result of toggling one room.
#[derive(Debug, Clone, Serialize)]
pub struct RoomAdvance {
    pub room_type: String,
    pub previous: RoomStatus,
    pub room: Room,
    pub summary: OccupancySummary,
}

impl OccupancyBoard {
    pub fn new(room_types: Vec<RoomType>) -> Self {
        Self { room_types }
    }

    /// Board seeded with the four standard room types and a realistic mid-week mix.
    pub fn standard() -> Self {
        Self::new(vec![
            seeded("Single", "single", 20, 15, 2, 1),
            seeded("Deluxe", "deluxe", 15, 10, 1, 2),
            seeded("Suite", "suite", 10, 8, 0, 1),
            seeded("Premium Suite", "premium", 5, 4, 0, 0),
        ])
    }

    pub fn room_types(&self) -> &[RoomType] {
        &self.room_types
    }

    pub fn room_type(&self, name: &str) -> Option<&RoomType> {
        self.room_types
            .iter()
            .find(|room_type| room_type.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn add_room_type(&mut self, name: &str, total: u32) -> Result<&RoomType, OccupancyError> {
        let name = name.trim();
        if self.room_type(name).is_some() {
            return Err(OccupancyError::DuplicateRoomType(name.to_string()));
        }

        let room_type = RoomType::new(name, total)?;
        debug!(room_type = name, total, "room type added");
        self.room_types.push(room_type);
        let index = self.room_types.len() - 1;
        Ok(&self.room_types[index])
    }

    /// Toggle one room to its next status and recompute that room type's summary.
    pub fn advance_room(
        &mut self,
        room_type: &str,
        number: u32,
    ) -> Result<RoomAdvance, OccupancyError> {
        let target = self
            .room_types
            .iter_mut()
            .find(|candidate| candidate.name().eq_ignore_ascii_case(room_type.trim()))
            .ok_or_else(|| OccupancyError::RoomTypeNotFound(room_type.to_string()))?;

        let previous = target
            .room(number)
            .map(|room| room.status)
            .ok_or_else(|| OccupancyError::RoomNotFound {
                room_type: target.name().to_string(),
                number,
            })?;
        let room = target.advance_room(number)?.clone();
        debug!(
            room_type = target.name(),
            number,
            from = previous.label(),
            to = room.status.label(),
            "room status advanced"
        );

        Ok(RoomAdvance {
            room_type: target.name().to_string(),
            previous,
            room,
            summary: target.summary(),
        })
    }

    pub fn summaries(&self) -> Vec<RoomTypeSummary> {
        self.room_types
            .iter()
            .map(|room_type| RoomTypeSummary {
                name: room_type.name().to_string(),
                summary: room_type.summary(),
            })
            .collect()
    }

    /// Room types matching the type filter, each listing only rooms matching the status
    /// filter. Summaries always cover the full room type.
    pub fn filtered(&self, filter: &BoardFilter) -> Vec<RoomTypeView> {
        self.room_types
            .iter()
            .filter(|room_type| match &filter.room_type {
                Some(name) => room_type.name().eq_ignore_ascii_case(name.trim()),
                None => true,
            })
            .map(|room_type| RoomTypeView {
                name: room_type.name().to_string(),
                summary: room_type.summary(),
                rooms: room_type
                    .rooms()
                    .iter()
                    .filter(|room| filter.status.map_or(true, |status| room.status == status))
                    .cloned()
                    .collect(),
            })
            .collect()
    }
}

fn seeded(
    name: &str,
    prefix: &str,
    total: u32,
    occupied: u32,
    maintenance: u32,
    cleaning: u32,
) -> RoomType {
    let rooms = (0..total)
        .map(|index| {
            let status = if index < occupied {
                RoomStatus::Occupied
            } else if index < occupied + maintenance {
                RoomStatus::Maintenance
            } else if index < occupied + maintenance + cleaning {
                RoomStatus::Cleaning
            } else {
                RoomStatus::Vacant
            };
            Room {
                id: format!("{prefix}-{}", index + 1),
                number: index + 1,
                status,
            }
        })
        .collect();
    RoomType::with_rooms(name, rooms)
}
