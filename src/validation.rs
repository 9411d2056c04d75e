//! Input normalization for timetable generation.
//!
//! Validates and cross-indexes the course catalog, faculty roster, and
//! room inventory before search. Detects:
//! - Missing mandatory fields
//! - Duplicate IDs
//! - Dangling faculty references
//! - Zero credits, capacity, or weekly session counts
//! - Unavailability entries outside the slot grid
//!
//! Pure transformation: the normalizer never mutates its inputs and has
//! no side effects. All errors are collected, not just the first.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::models::{CourseSection, Faculty, Room, SessionRef, SlotGrid};

/// Normalization result.
pub type NormalizeResult = Result<Problem, Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// A mandatory field is empty.
    MissingField,
    /// Two records share the same ID.
    DuplicateId,
    /// A section references a faculty member that doesn't exist.
    UnknownFaculty,
    /// A count that must be positive is zero.
    NonPositiveValue,
    /// An unavailability entry falls outside the slot grid.
    SlotOutOfGrid,
    /// The slot grid has no days or no periods.
    EmptyGrid,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validated, cross-indexed problem snapshot.
///
/// Everything the solver needs, pre-resolved: catalog records in their
/// original input order (which fixes solver determinism), ID lookup
/// indexes, and the expanded list of weekly sessions to place.
#[derive(Debug, Clone)]
pub struct Problem {
    /// The weekly calendar.
    pub grid: SlotGrid,
    /// Sections in input order.
    pub sections: Vec<CourseSection>,
    /// Faculty in input order.
    pub faculty: Vec<Faculty>,
    /// Rooms in input order.
    pub rooms: Vec<Room>,
    /// Weekly sessions to place, in section input order.
    pub sessions: Vec<SessionRef>,
    section_index: HashMap<String, usize>,
    faculty_index: HashMap<String, usize>,
    room_index: HashMap<String, usize>,
}

impl Problem {
    /// Looks up a section by ID.
    pub fn section(&self, id: &str) -> Option<&CourseSection> {
        self.section_index.get(id).map(|&i| &self.sections[i])
    }

    /// Looks up a faculty member by ID.
    pub fn faculty_member(&self, id: &str) -> Option<&Faculty> {
        self.faculty_index.get(id).map(|&i| &self.faculty[i])
    }

    /// Looks up a room by ID.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.room_index.get(id).map(|&i| &self.rooms[i])
    }

    /// The section owning a session.
    pub fn section_for(&self, session: &SessionRef) -> Option<&CourseSection> {
        self.section(&session.section_id)
    }

    /// Total number of sessions to place.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

/// Validates and cross-indexes raw catalog records.
///
/// Checks:
/// 1. The grid has at least one day and one period
/// 2. Mandatory IDs are non-empty
/// 3. No duplicate section, faculty, or room IDs
/// 4. Every section's faculty reference resolves
/// 5. Credits, room capacity, and weekly session counts are positive
/// 6. All unavailability entries fall inside the grid
///
/// # Returns
/// The indexed [`Problem`] if all checks pass, `Err(errors)` with every
/// detected issue otherwise.
pub fn normalize(
    sections: &[CourseSection],
    faculty: &[Faculty],
    rooms: &[Room],
    grid: &SlotGrid,
) -> NormalizeResult {
    let mut errors = Vec::new();

    if grid.days.is_empty() || grid.periods_per_day() == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyGrid,
            "Slot grid has no days or no periods",
        ));
    }

    // Faculty roster
    let mut faculty_ids = HashSet::new();
    for f in faculty {
        if f.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingField,
                "Faculty record with empty ID",
            ));
        } else if !faculty_ids.insert(f.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate faculty ID: {}", f.id),
            ));
        }
        for &slot in &f.unavailable {
            if !grid.contains(slot) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::SlotOutOfGrid,
                    format!(
                        "Faculty '{}' unavailability {} is outside the grid",
                        f.id, slot
                    ),
                ));
            }
        }
    }

    // Room inventory
    let mut room_ids = HashSet::new();
    for r in rooms {
        if r.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingField,
                "Room record with empty ID",
            ));
        } else if !room_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", r.id),
            ));
        }
        if r.capacity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveValue,
                format!("Room '{}' has zero capacity", r.id),
            ));
        }
        for &slot in &r.unavailable {
            if !grid.contains(slot) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::SlotOutOfGrid,
                    format!("Room '{}' unavailability {} is outside the grid", r.id, slot),
                ));
            }
        }
    }

    // Course catalog
    let mut section_ids = HashSet::new();
    for s in sections {
        if s.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingField,
                "Section record with empty ID",
            ));
        } else if !section_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate section ID: {}", s.id),
            ));
        }
        if s.faculty_id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingField,
                format!("Section '{}' has no faculty reference", s.id),
            ));
        } else if !faculty_ids.contains(s.faculty_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownFaculty,
                format!(
                    "Section '{}' references unknown faculty '{}'",
                    s.id, s.faculty_id
                ),
            ));
        }
        if s.credits == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveValue,
                format!("Section '{}' has zero credits", s.id),
            ));
        }
        if s.weekly_sessions == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveValue,
                format!("Section '{}' has zero weekly sessions", s.id),
            ));
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // Expand sections into individual weekly sessions, preserving input order.
    let sessions: Vec<SessionRef> = sections
        .iter()
        .flat_map(|s| (0..s.weekly_sessions).map(|m| SessionRef::new(&s.id, m)))
        .collect();

    Ok(Problem {
        grid: grid.clone(),
        section_index: index_by(sections, |s| &s.id),
        faculty_index: index_by(faculty, |f| &f.id),
        room_index: index_by(rooms, |r| &r.id),
        sections: sections.to_vec(),
        faculty: faculty.to_vec(),
        rooms: rooms.to_vec(),
        sessions,
    })
}

fn index_by<T>(items: &[T], id: impl Fn(&T) -> &String) -> HashMap<String, usize> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| (id(item).clone(), i))
        .collect()
}
