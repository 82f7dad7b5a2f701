use serde::Serialize;

use super::domain::{RoomStatus, RoomType};

/// Status counts and derived rates for one room type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OccupancySummary {
    pub total: usize,
    pub occupied: usize,
    pub vacant: usize,
    pub maintenance: usize,
    pub cleaning: usize,
    /// Percentage of all rooms that are occupied.
    pub occupancy_rate: u32,
    /// Percentage of rooms not in maintenance or cleaning that are occupied.
    pub utilization_rate: u32,
}

impl OccupancySummary {
    /// Rooms that could take a guest right now or already hold one.
    pub fn available(&self) -> usize {
        self.total
            .saturating_sub(self.maintenance)
            .saturating_sub(self.cleaning)
    }

    pub fn count(&self, status: RoomStatus) -> usize {
        match status {
            RoomStatus::Vacant => self.vacant,
            RoomStatus::Occupied => self.occupied,
            RoomStatus::Maintenance => self.maintenance,
            RoomStatus::Cleaning => self.cleaning,
        }
    }
}

/// Tally a room type by status. Rates with a zero denominator are reported as 0.
pub fn summarize(room_type: &RoomType) -> OccupancySummary {
    let mut occupied = 0;
    let mut maintenance = 0;
    let mut cleaning = 0;

    for room in room_type.rooms() {
        match room.status {
            RoomStatus::Occupied => occupied += 1,
            RoomStatus::Maintenance => maintenance += 1,
            RoomStatus::Cleaning => cleaning += 1,
            RoomStatus::Vacant => {}
        }
    }

    let total = room_type.total();
    let available = total - maintenance - cleaning;

    OccupancySummary {
        total,
        occupied,
        vacant: available - occupied,
        maintenance,
        cleaning,
        occupancy_rate: rounded_percentage(occupied, total),
        utilization_rate: rounded_percentage(occupied, available),
    }
}

// round(100 * part / whole), half-up, in integer arithmetic.
fn rounded_percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let scaled = (200 * part as u64 + whole as u64) / (2 * whole as u64);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}
