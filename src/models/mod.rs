//! Timetabling domain models.
//!
//! Core data types for academic timetable generation: the course
//! catalog, faculty and room inventories, the weekly slot grid, and the
//! generated timetable itself.
//!
//! Catalog records (`CourseSection`, `Faculty`, `Room`) are loaded once
//! per generation run and treated as immutable; `Assignment`s are
//! created and retracted during search and become final only in the
//! returned `Timetable`.

mod faculty;
mod room;
mod section;
mod slot;
mod timetable;

pub use faculty::Faculty;
pub use room::{Room, RoomType};
pub use section::{CourseSection, SectionType, SessionRef};
pub use slot::{Day, Slot, SlotGrid};
pub use timetable::{Assignment, Conflict, ConflictKind, Timetable};
