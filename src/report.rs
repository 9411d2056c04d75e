//! Conflict reporting.
//!
//! Post-processes a timetable that may contain forced overrides (an
//! admin pinning two sections into one room, a hand-edited grid) and
//! flags every residual hard-constraint violation. Read-only pass: the
//! input timetable is never mutated and no assignment is ever removed,
//! the returned copy only carries annotations.

use itertools::Itertools;

use crate::constraints;
use crate::models::{Conflict, Timetable};
use crate::validation::Problem;

/// Scans all assignment pairs and unary constraints, returning an
/// annotated copy of the timetable.
///
/// Each violation produces one [`Conflict`] record, and every
/// assignment involved in at least one violation gets its `conflict`
/// flag set. Assignments, their order, and their placements are
/// preserved exactly.
pub fn annotate(timetable: &Timetable, problem: &Problem) -> Timetable {
    let mut annotated = timetable.clone();
    let mut flagged = vec![false; annotated.assignments.len()];
    let mut conflicts = Vec::new();

    for ((i, a), (j, b)) in annotated.assignments.iter().enumerate().tuple_combinations() {
        if constraints::faculty_clash(a, b) {
            flagged[i] = true;
            flagged[j] = true;
            conflicts.push(Conflict::faculty_double_booked(
                &a.faculty_id,
                format!(
                    "Faculty '{}' teaches '{}' and '{}' at {}",
                    a.faculty_id, a.session.section_id, b.session.section_id, a.slot
                ),
            ));
        }
        if constraints::room_clash(a, b) {
            flagged[i] = true;
            flagged[j] = true;
            conflicts.push(Conflict::room_double_booked(
                &a.room_id,
                format!(
                    "Room '{}' hosts '{}' and '{}' at {}",
                    a.room_id, a.session.section_id, b.session.section_id, a.slot
                ),
            ));
        }
    }

    for (i, a) in annotated.assignments.iter().enumerate() {
        if constraints::capacity_exceeded(problem, a) {
            flagged[i] = true;
            conflicts.push(Conflict::capacity_exceeded(
                &a.session.section_id,
                format!(
                    "Section '{}' exceeds capacity of room '{}'",
                    a.session.section_id, a.room_id
                ),
            ));
        }
        if constraints::room_type_mismatch(problem, a) {
            flagged[i] = true;
            conflicts.push(Conflict::room_type_mismatch(
                &a.session.section_id,
                format!(
                    "Section '{}' does not suit room '{}'",
                    a.session.section_id, a.room_id
                ),
            ));
        }
        if constraints::faculty_unavailable(problem, a) {
            flagged[i] = true;
            conflicts.push(Conflict::faculty_unavailable(
                &a.faculty_id,
                format!("Faculty '{}' is unavailable at {}", a.faculty_id, a.slot),
            ));
        }
        if constraints::room_unavailable(problem, a) {
            flagged[i] = true;
            conflicts.push(Conflict::room_unavailable(
                &a.room_id,
                format!("Room '{}' is unavailable at {}", a.room_id, a.slot),
            ));
        }
    }

    for (assignment, flag) in annotated.assignments.iter_mut().zip(flagged) {
        assignment.conflict = flag;
    }
    annotated.conflicts = conflicts;
    annotated
}
