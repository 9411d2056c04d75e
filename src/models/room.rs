//! Room model.
//!
//! Rooms are the physical resources assignments compete for: each has a
//! capacity, a type that must suit the section's delivery format, and an
//! unavailability set (maintenance, reservations).

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::Slot;

/// A teaching room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier (e.g. "A101").
    pub id: String,
    /// Seat count (must be positive).
    pub capacity: u32,
    /// Room classification.
    pub room_type: RoomType,
    /// Cells this room cannot be used in.
    pub unavailable: HashSet<Slot>,
}

/// Room type classification.
///
/// Decides which section types a room can host; see
/// [`SectionType::suits`](super::SectionType::suits).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    /// Large lecture venue.
    LectureHall,
    /// Standard classroom.
    Classroom,
    /// Laboratory (computer, electronics, ...).
    Lab,
    /// Domain-specific room kind.
    Custom(String),
}

impl Room {
    /// Creates a room of the given type.
    pub fn new(id: impl Into<String>, capacity: u32, room_type: RoomType) -> Self {
        Self {
            id: id.into(),
            capacity,
            room_type,
            unavailable: HashSet::new(),
        }
    }

    /// Creates a lecture hall.
    pub fn lecture_hall(id: impl Into<String>, capacity: u32) -> Self {
        Self::new(id, capacity, RoomType::LectureHall)
    }

    /// Creates a classroom.
    pub fn classroom(id: impl Into<String>, capacity: u32) -> Self {
        Self::new(id, capacity, RoomType::Classroom)
    }

    /// Creates a lab.
    pub fn lab(id: impl Into<String>, capacity: u32) -> Self {
        Self::new(id, capacity, RoomType::Lab)
    }

    /// Marks a cell as unavailable.
    pub fn with_unavailable(mut self, slot: Slot) -> Self {
        self.unavailable.insert(slot);
        self
    }

    /// Whether this room can be used in the given cell.
    pub fn is_available(&self, slot: Slot) -> bool {
        !self.unavailable.contains(&slot)
    }
}
