//! Course section model.
//!
//! A section is one offering of a course that needs one or more weekly
//! sessions placed on the grid. Sections are read-only input to the
//! solver; once a generation run starts they never change.

use serde::{Deserialize, Serialize};

use super::RoomType;

/// One offering of a course to be timetabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseSection {
    /// Unique section identifier.
    pub id: String,
    /// Course name (e.g. "Data Structures").
    pub name: String,
    /// Course code (e.g. "CS301").
    pub code: String,
    /// Credit count (must be positive).
    pub credits: u32,
    /// Delivery format, which decides the kind of room required.
    pub section_type: SectionType,
    /// Assigned faculty member.
    pub faculty_id: String,
    /// Number of weekly sessions to place (must be positive).
    pub weekly_sessions: u32,
    /// Enrolled student count; the assigned room must hold at least this many.
    pub enrolled: u32,
}

/// Delivery format of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionType {
    /// Lecture-style teaching.
    Theory,
    /// Equipment-bound lab session.
    Lab,
    /// Hands-on practical session (scheduled like a lab).
    Practical,
}

impl SectionType {
    /// Whether a room of the given type can host this section.
    ///
    /// Theory sections go to lecture halls or classrooms; lab and
    /// practical sections require a lab.
    pub fn suits(&self, room_type: &RoomType) -> bool {
        match self {
            SectionType::Theory => {
                matches!(room_type, RoomType::LectureHall | RoomType::Classroom)
            }
            SectionType::Lab | SectionType::Practical => {
                matches!(room_type, RoomType::Lab | RoomType::Custom(_))
            }
        }
    }
}

impl CourseSection {
    /// Creates a theory section with one weekly session.
    pub fn new(id: impl Into<String>, faculty_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            code: String::new(),
            credits: 1,
            section_type: SectionType::Theory,
            faculty_id: faculty_id.into(),
            weekly_sessions: 1,
            enrolled: 0,
        }
    }

    /// Sets the course name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the course code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the credit count.
    pub fn with_credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }

    /// Sets the section type.
    pub fn with_type(mut self, section_type: SectionType) -> Self {
        self.section_type = section_type;
        self
    }

    /// Sets the weekly session count.
    pub fn with_weekly_sessions(mut self, sessions: u32) -> Self {
        self.weekly_sessions = sessions;
        self
    }

    /// Sets the enrolled student count.
    pub fn with_enrolled(mut self, enrolled: u32) -> Self {
        self.enrolled = enrolled;
        self
    }
}

/// One weekly meeting of a section: the unit the solver places.
///
/// A section with `weekly_sessions = 3` expands to three session refs
/// with meeting indices 0, 1, 2.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct SessionRef {
    /// Owning section.
    pub section_id: String,
    /// Meeting index within the week (0-based).
    pub meeting: u32,
}

impl SessionRef {
    /// Creates a session reference.
    pub fn new(section_id: impl Into<String>, meeting: u32) -> Self {
        Self {
            section_id: section_id.into(),
            meeting,
        }
    }
}
