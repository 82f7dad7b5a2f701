//! Room status tracking for the occupancy dashboard.
//!
//! Rooms move through a fixed cycle (vacant, occupied, maintenance, cleaning) one toggle
//! at a time. Summaries are always recomputed from the room list rather than adjusted
//! in place, so counts cannot drift from room state.

mod board;
pub mod domain;
pub mod summary;

pub use board::{BoardFilter, OccupancyBoard, RoomAdvance, RoomTypeSummary, RoomTypeView};
pub use domain::{advance, next_status, OccupancyError, Room, RoomStatus, RoomType, RoomTypeRecord};
pub use summary::{summarize, OccupancySummary};
