use serde::{Deserialize, Serialize};

use super::summary::{summarize, OccupancySummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    Vacant,
    Occupied,
    Maintenance,
    Cleaning,
}

impl RoomStatus {
    /// Statuses in the order rooms cycle through them.
    pub const fn ordered() -> [Self; 4] {
        [Self::Vacant, Self::Occupied, Self::Maintenance, Self::Cleaning]
    }

    /// Status reached by one toggle; `Cleaning` wraps back to `Vacant`.
    pub const fn next(self) -> Self {
        match self {
            Self::Vacant => Self::Occupied,
            Self::Occupied => Self::Maintenance,
            Self::Maintenance => Self::Cleaning,
            Self::Cleaning => Self::Vacant,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Vacant => "Vacant",
            Self::Occupied => "Occupied",
            Self::Maintenance => "Maintenance",
            Self::Cleaning => "Cleaning",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(raw.trim()))
    }
}

pub const fn next_status(current: RoomStatus) -> RoomStatus {
    current.next()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub number: u32,
    pub status: RoomStatus,
}

impl Room {
    /// Copy of this room moved one step along the status cycle.
    pub fn advanced(&self) -> Room {
        Room {
            status: self.status.next(),
            ..self.clone()
        }
    }
}

pub fn advance(room: &Room) -> Room {
    room.advanced()
}

/// A named group of rooms. The room total is always the length of the room list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RoomTypeRecord", into = "RoomTypeRecord")]
pub struct RoomType {
    name: String,
    rooms: Vec<Room>,
}

impl RoomType {
    /// Room type with `total` vacant rooms numbered from 1.
    pub fn new(name: impl Into<String>, total: u32) -> Result<Self, OccupancyError> {
        let name = name.into();
        if name.trim().is_empty() || total == 0 {
            return Err(OccupancyError::InvalidRoomType { name, total });
        }

        let slug = room_id_prefix(&name);
        let rooms = (1..=total)
            .map(|number| Room {
                id: format!("{slug}-{number}"),
                number,
                status: RoomStatus::Vacant,
            })
            .collect();

        Ok(Self { name, rooms })
    }

    pub fn with_rooms(name: impl Into<String>, rooms: Vec<Room>) -> Self {
        Self {
            name: name.into(),
            rooms,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total(&self) -> usize {
        self.rooms.len()
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, number: u32) -> Option<&Room> {
        self.rooms.iter().find(|room| room.number == number)
    }

    pub fn summary(&self) -> OccupancySummary {
        summarize(self)
    }

    /// Advance one room along the status cycle and return it.
    pub fn advance_room(&mut self, number: u32) -> Result<&Room, OccupancyError> {
        let index = self
            .rooms
            .iter()
            .position(|room| room.number == number)
            .ok_or_else(|| OccupancyError::RoomNotFound {
                room_type: self.name.clone(),
                number,
            })?;

        self.rooms[index] = self.rooms[index].advanced();
        Ok(&self.rooms[index])
    }

    /// Overwrite room statuses in order, e.g. to seed a board.
    pub(crate) fn assign_statuses<I>(&mut self, statuses: I)
    where
        I: IntoIterator<Item = RoomStatus>,
    {
        for (room, status) in self.rooms.iter_mut().zip(statuses) {
            room.status = status;
        }
    }
}

fn room_id_prefix(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Wire shape of a room type; `total` is optional on input and checked against the rooms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomTypeRecord {
    pub name: String,
    #[serde(default)]
    pub total: Option<usize>,
    pub rooms: Vec<Room>,
}

impl TryFrom<RoomTypeRecord> for RoomType {
    type Error = OccupancyError;

    fn try_from(record: RoomTypeRecord) -> Result<Self, Self::Error> {
        if let Some(total) = record.total {
            if total != record.rooms.len() {
                return Err(OccupancyError::TotalMismatch {
                    name: record.name,
                    total,
                    rooms: record.rooms.len(),
                });
            }
        }
        Ok(RoomType::with_rooms(record.name, record.rooms))
    }
}

impl From<RoomType> for RoomTypeRecord {
    fn from(room_type: RoomType) -> Self {
        Self {
            total: Some(room_type.rooms.len()),
            name: room_type.name,
            rooms: room_type.rooms,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OccupancyError {
    #[error("room type '{name}' needs a name and at least one room (got {total})")]
    InvalidRoomType { name: String, total: u32 },
    #[error("room type '{0}' already exists")]
    DuplicateRoomType(String),
    #[error("room type '{0}' not found")]
    RoomTypeNotFound(String),
    #[error("room {number} not found in room type '{room_type}'")]
    RoomNotFound { room_type: String, number: u32 },
    #[error("room type '{name}' declares {total} rooms but lists {rooms}")]
    TotalMismatch {
        name: String,
        total: usize,
        rooms: usize,
    },
}
