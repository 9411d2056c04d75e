//! Timetable (solution) model.
//!
//! A timetable is the accepted set of assignments for one program and
//! semester, in canonical (day, period, room) order, together with any
//! conflicts the reporter recorded against it.

use serde::{Deserialize, Serialize};

use super::{SessionRef, Slot};

/// A generated timetable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timetable {
    /// Placed sessions.
    pub assignments: Vec<Assignment>,
    /// Conflicts recorded by the reporter.
    pub conflicts: Vec<Conflict>,
}

/// One session bound to a slot and room.
///
/// `faculty_id` is denormalized from the owning section for query
/// convenience. `conflict` is set by the conflict reporter; the solver
/// itself only emits clean assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// The placed session.
    pub session: SessionRef,
    /// Teaching faculty (denormalized).
    pub faculty_id: String,
    /// Calendar cell.
    pub slot: Slot,
    /// Assigned room.
    pub room_id: String,
    /// Whether this assignment participates in a reported conflict.
    pub conflict: bool,
}

/// A recorded hard-constraint violation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conflict {
    /// Violation category.
    pub kind: ConflictKind,
    /// Primary entity involved (faculty, room, or section id).
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of hard-constraint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictKind {
    /// Two sessions of the same faculty share a cell.
    FacultyDoubleBooked,
    /// Two sessions share a room and cell.
    RoomDoubleBooked,
    /// Enrolled count exceeds room capacity.
    CapacityExceeded,
    /// Room type does not suit the section type.
    RoomTypeMismatch,
    /// Session placed in a cell its faculty marked unavailable.
    FacultyUnavailable,
    /// Session placed in a cell its room is unavailable.
    RoomUnavailable,
}

impl Assignment {
    /// Creates a clean assignment.
    pub fn new(
        session: SessionRef,
        faculty_id: impl Into<String>,
        slot: Slot,
        room_id: impl Into<String>,
    ) -> Self {
        Self {
            session,
            faculty_id: faculty_id.into(),
            slot,
            room_id: room_id.into(),
            conflict: false,
        }
    }
}

impl Conflict {
    /// Creates a faculty double-booking conflict.
    pub fn faculty_double_booked(faculty_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ConflictKind::FacultyDoubleBooked,
            entity_id: faculty_id.into(),
            message: message.into(),
        }
    }

    /// Creates a room double-booking conflict.
    pub fn room_double_booked(room_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ConflictKind::RoomDoubleBooked,
            entity_id: room_id.into(),
            message: message.into(),
        }
    }

    /// Creates a capacity conflict.
    pub fn capacity_exceeded(section_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ConflictKind::CapacityExceeded,
            entity_id: section_id.into(),
            message: message.into(),
        }
    }

    /// Creates a room-type mismatch conflict.
    pub fn room_type_mismatch(section_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ConflictKind::RoomTypeMismatch,
            entity_id: section_id.into(),
            message: message.into(),
        }
    }

    /// Creates a faculty-unavailable conflict.
    pub fn faculty_unavailable(faculty_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ConflictKind::FacultyUnavailable,
            entity_id: faculty_id.into(),
            message: message.into(),
        }
    }

    /// Creates a room-unavailable conflict.
    pub fn room_unavailable(room_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ConflictKind::RoomUnavailable,
            entity_id: room_id.into(),
            message: message.into(),
        }
    }
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an assignment.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Adds a conflict record.
    pub fn add_conflict(&mut self, conflict: Conflict) {
        self.conflicts.push(conflict);
    }

    /// Whether the timetable has no recorded conflicts.
    pub fn is_conflict_free(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Number of recorded conflicts.
    pub fn conflict_count(&self) -> usize {
        self.conflicts.len()
    }

    /// Number of placed sessions.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Finds the assignment for a given session.
    pub fn assignment_for_session(&self, session: &SessionRef) -> Option<&Assignment> {
        self.assignments.iter().find(|a| &a.session == session)
    }

    /// All assignments of a section, across its weekly meetings.
    pub fn assignments_for_section(&self, section_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.session.section_id == section_id)
            .collect()
    }

    /// All assignments in a room.
    pub fn assignments_for_room(&self, room_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.room_id == room_id)
            .collect()
    }

    /// All assignments taught by a faculty member.
    pub fn assignments_for_faculty(&self, faculty_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.faculty_id == faculty_id)
            .collect()
    }

    /// All assignments in a cell.
    pub fn assignments_at(&self, slot: Slot) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.slot == slot)
            .collect()
    }

    /// Sorts assignments into canonical (day, period, room, section) order.
    pub fn sort_canonical(&mut self) {
        self.assignments.sort_by(|a, b| {
            (a.slot, &a.room_id, &a.session)
                .cmp(&(b.slot, &b.room_id, &b.session))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Day;

    fn sample_timetable() -> Timetable {
        let mut tt = Timetable::new();
        tt.add_assignment(Assignment::new(
            SessionRef::new("CS301-A", 0),
            "F1",
            Slot::new(Day::Monday, 0),
            "A101",
        ));
        tt.add_assignment(Assignment::new(
            SessionRef::new("CS301-A", 1),
            "F1",
            Slot::new(Day::Wednesday, 1),
            "A101",
        ));
        tt.add_assignment(Assignment::new(
            SessionRef::new("CS302L-A", 0),
            "F2",
            Slot::new(Day::Monday, 3),
            "Lab1",
        ));
        tt
    }

    #[test]
    fn test_queries() {
        let tt = sample_timetable();
        assert_eq!(tt.assignment_count(), 3);
        assert_eq!(tt.assignments_for_section("CS301-A").len(), 2);
        assert_eq!(tt.assignments_for_room("A101").len(), 2);
        assert_eq!(tt.assignments_for_faculty("F2").len(), 1);
        assert_eq!(tt.assignments_at(Slot::new(Day::Monday, 0)).len(), 1);

        let a = tt
            .assignment_for_session(&SessionRef::new("CS302L-A", 0))
            .unwrap();
        assert_eq!(a.room_id, "Lab1");
        assert!(tt
            .assignment_for_session(&SessionRef::new("CS999", 0))
            .is_none());
    }

    #[test]
    fn test_conflict_bookkeeping() {
        let mut tt = sample_timetable();
        assert!(tt.is_conflict_free());

        tt.add_conflict(Conflict::faculty_double_booked(
            "F1",
            "F1 teaches twice on Monday P1",
        ));
        assert!(!tt.is_conflict_free());
        assert_eq!(tt.conflict_count(), 1);
        assert_eq!(tt.conflicts[0].kind, ConflictKind::FacultyDoubleBooked);
    }

    #[test]
    fn test_sort_canonical() {
        let mut tt = Timetable::new();
        tt.add_assignment(Assignment::new(
            SessionRef::new("B", 0),
            "F1",
            Slot::new(Day::Friday, 4),
            "A101",
        ));
        tt.add_assignment(Assignment::new(
            SessionRef::new("A", 0),
            "F1",
            Slot::new(Day::Monday, 0),
            "B201",
        ));
        tt.add_assignment(Assignment::new(
            SessionRef::new("C", 0),
            "F2",
            Slot::new(Day::Monday, 0),
            "A101",
        ));
        tt.sort_canonical();

        assert_eq!(tt.assignments[0].session.section_id, "C"); // Monday, A101
        assert_eq!(tt.assignments[1].session.section_id, "A"); // Monday, B201
        assert_eq!(tt.assignments[2].session.section_id, "B"); // Friday
    }

    #[test]
    fn test_empty_timetable() {
        let tt = Timetable::new();
        assert_eq!(tt.assignment_count(), 0);
        assert!(tt.is_conflict_free());
    }
}
