//! Hard constraint predicates and soft cost functions.
//!
//! Hard predicates decide feasibility: an assignment set is feasible
//! iff no pair and no single assignment violates any of them. Soft
//! costs score feasible timetables; the solver minimizes a weighted sum
//! of the enabled terms.
//!
//! All predicates are pure functions over the immutable [`Problem`]
//! snapshot and candidate assignments.

use crate::models::Assignment;
use crate::validation::Problem;

/// Whether two assignments double-book a faculty member.
///
/// True when distinct sessions share a faculty and a cell.
pub fn faculty_clash(a: &Assignment, b: &Assignment) -> bool {
    a.session != b.session && a.slot == b.slot && a.faculty_id == b.faculty_id
}

/// Whether two assignments double-book a room.
pub fn room_clash(a: &Assignment, b: &Assignment) -> bool {
    a.session != b.session && a.slot == b.slot && a.room_id == b.room_id
}

/// Whether the assigned room is too small for the section's enrollment.
///
/// Unresolvable references are not judged here; the normalizer
/// guarantees they don't occur in solver input.
pub fn capacity_exceeded(problem: &Problem, a: &Assignment) -> bool {
    match (problem.section_for(&a.session), problem.room(&a.room_id)) {
        (Some(section), Some(room)) => section.enrolled > room.capacity,
        _ => false,
    }
}

/// Whether the assigned room's type does not suit the section's format.
pub fn room_type_mismatch(problem: &Problem, a: &Assignment) -> bool {
    match (problem.section_for(&a.session), problem.room(&a.room_id)) {
        (Some(section), Some(room)) => !section.section_type.suits(&room.room_type),
        _ => false,
    }
}

/// Whether the assignment falls in a cell its faculty marked unavailable.
pub fn faculty_unavailable(problem: &Problem, a: &Assignment) -> bool {
    problem
        .faculty_member(&a.faculty_id)
        .is_some_and(|f| !f.is_available(a.slot))
}

/// Whether the assignment falls in a cell its room is unavailable.
pub fn room_unavailable(problem: &Problem, a: &Assignment) -> bool {
    problem
        .room(&a.room_id)
        .is_some_and(|r| !r.is_available(a.slot))
}

/// Whether a single assignment violates any unary hard constraint.
pub fn violates_unary(problem: &Problem, a: &Assignment) -> bool {
    capacity_exceeded(problem, a)
        || room_type_mismatch(problem, a)
        || faculty_unavailable(problem, a)
        || room_unavailable(problem, a)
}

/// Population variance of per-faculty session counts.
///
/// Counts every faculty member in the problem, including those with no
/// assignments, so concentrating load on few teachers scores worse than
/// spreading it.
pub fn faculty_load_variance(problem: &Problem, timetable: &crate::models::Timetable) -> f64 {
    let counts = problem
        .faculty
        .iter()
        .map(|f| timetable.assignments_for_faculty(&f.id).len() as f64);
    variance(counts)
}

/// Population variance of per-room used-slot counts.
pub fn room_utilization_variance(problem: &Problem, timetable: &crate::models::Timetable) -> f64 {
    let counts = problem
        .rooms
        .iter()
        .map(|r| timetable.assignments_for_room(&r.id).len() as f64);
    variance(counts)
}

fn variance(values: impl Iterator<Item = f64>) -> f64 {
    let values: Vec<f64> = values.collect();
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
}

/// Weighted combination of the enabled soft cost terms.
///
/// Built from the generation request's optimization options; disabled
/// terms contribute nothing to the score or to placement ordering.
#[derive(Debug, Clone)]
pub struct CostModel {
    /// Weight of `faculty_load_variance` (0 disables the term).
    pub load_weight: f64,
    /// Weight of `room_utilization_variance` (0 disables the term).
    pub utilization_weight: f64,
}

impl CostModel {
    /// Cost model with both terms disabled.
    pub fn none() -> Self {
        Self {
            load_weight: 0.0,
            utilization_weight: 0.0,
        }
    }

    /// Enables load balancing with unit weight.
    pub fn with_load_balancing(mut self) -> Self {
        self.load_weight = 1.0;
        self
    }

    /// Enables room utilization balancing with unit weight.
    pub fn with_utilization_balancing(mut self) -> Self {
        self.utilization_weight = 1.0;
        self
    }

    /// Total soft cost of a timetable. Non-negative; lower is better.
    pub fn cost(&self, problem: &Problem, timetable: &crate::models::Timetable) -> f64 {
        self.load_weight * faculty_load_variance(problem, timetable)
            + self.utilization_weight * room_utilization_variance(problem, timetable)
    }

    /// Greedy estimate of how much placing one more session on a
    /// faculty/room with the given current counts would raise the cost.
    ///
    /// Incrementing a count `c` raises its sum of squares by `2c + 1`,
    /// so ordering candidates by weighted current counts orders them by
    /// variance increase. Used by the solver for value ordering only.
    pub fn placement_bias(&self, faculty_sessions: u32, room_sessions: u32) -> f64 {
        self.load_weight * faculty_sessions as f64
            + self.utilization_weight * room_sessions as f64
    }

    /// Whether any soft term is enabled.
    pub fn is_active(&self) -> bool {
        self.load_weight > 0.0 || self.utilization_weight > 0.0
    }
}
