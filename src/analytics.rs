//! Timetable quality metrics.
//!
//! Computes the resource indicators the analytics view renders:
//! per-room utilization, per-faculty load against the weekly cap,
//! conflict count, and threshold-based advisories (saturated rooms,
//! spare capacity, underloaded faculty).

use std::collections::HashMap;

use crate::models::Timetable;
use crate::validation::Problem;

/// Resource indicators for one generated timetable.
#[derive(Debug, Clone)]
pub struct TimetableKpi {
    /// Per-room utilization: used slots / available slots (0.0..1.0).
    pub utilization_by_room: HashMap<String, f64>,
    /// Mean utilization across all rooms.
    pub avg_utilization: f64,
    /// Sessions taught per faculty member.
    pub load_by_faculty: HashMap<String, u32>,
    /// Number of recorded conflicts.
    pub conflict_count: usize,
}

/// A threshold-based suggestion derived from the KPIs.
#[derive(Debug, Clone, PartialEq)]
pub struct Advisory {
    /// Advisory category.
    pub kind: AdvisoryKind,
    /// Human-readable suggestion.
    pub message: String,
}

/// Categories of advisories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisoryKind {
    /// Room utilization at or above 90%.
    RoomSaturated,
    /// Room utilization at or below 50% while the timetable is non-empty.
    RoomUnderused,
    /// Faculty teaching less than half of their weekly cap.
    FacultyUnderloaded,
}

impl TimetableKpi {
    /// Computes KPIs from a timetable and its problem snapshot.
    pub fn calculate(problem: &Problem, timetable: &Timetable) -> Self {
        let mut utilization_by_room = HashMap::new();
        for room in &problem.rooms {
            let available = problem
                .grid
                .slots()
                .filter(|&s| room.is_available(s))
                .count();
            let used = timetable.assignments_for_room(&room.id).len();
            let utilization = if available == 0 {
                0.0
            } else {
                used as f64 / available as f64
            };
            utilization_by_room.insert(room.id.clone(), utilization);
        }

        let avg_utilization = if utilization_by_room.is_empty() {
            0.0
        } else {
            utilization_by_room.values().sum::<f64>() / utilization_by_room.len() as f64
        };

        let load_by_faculty = problem
            .faculty
            .iter()
            .map(|f| {
                (
                    f.id.clone(),
                    timetable.assignments_for_faculty(&f.id).len() as u32,
                )
            })
            .collect();

        Self {
            utilization_by_room,
            avg_utilization,
            load_by_faculty,
            conflict_count: timetable.conflict_count(),
        }
    }

    /// Derives threshold-based suggestions from the indicators.
    ///
    /// Rooms at ≥90% utilization are saturated; rooms at ≤50% have
    /// spare capacity (only reported when anything is scheduled at
    /// all); faculty under half their weekly cap can take more load.
    pub fn advisories(&self, problem: &Problem) -> Vec<Advisory> {
        let mut advisories = Vec::new();
        let anything_scheduled = self.load_by_faculty.values().any(|&l| l > 0);

        // Deterministic output order: iterate catalog order, not map order.
        for room in &problem.rooms {
            let utilization = self.utilization_by_room[&room.id];
            if utilization >= 0.9 {
                advisories.push(Advisory {
                    kind: AdvisoryKind::RoomSaturated,
                    message: format!(
                        "Room '{}' is at {:.0}% capacity; consider redistributing sessions",
                        room.id,
                        utilization * 100.0
                    ),
                });
            } else if utilization <= 0.5 && anything_scheduled {
                advisories.push(Advisory {
                    kind: AdvisoryKind::RoomUnderused,
                    message: format!(
                        "Room '{}' has low utilization ({:.0}%); it can host more sessions",
                        room.id,
                        utilization * 100.0
                    ),
                });
            }
        }

        for faculty in &problem.faculty {
            if let Some(cap) = faculty.max_weekly_load {
                let load = self.load_by_faculty[&faculty.id];
                if load * 2 < cap {
                    advisories.push(Advisory {
                        kind: AdvisoryKind::FacultyUnderloaded,
                        message: format!(
                            "Faculty '{}' teaches {load} of {cap} weekly sessions and can take more",
                            faculty.id
                        ),
                    });
                }
            }
        }

        advisories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Assignment, CourseSection, Day, Faculty, Room, SessionRef, Slot, SlotGrid,
    };
    use crate::validation::normalize;

    fn two_slot_grid() -> SlotGrid {
        SlotGrid::new(vec![Day::Monday], vec!["P1".into(), "P2".into()])
    }

    fn sample_problem() -> Problem {
        let sections = vec![
            CourseSection::new("S1", "F1"),
            CourseSection::new("S2", "F2"),
        ];
        let faculty = vec![
            Faculty::new("F1").with_max_weekly_load(10),
            Faculty::new("F2").with_max_weekly_load(4),
        ];
        let rooms = vec![Room::classroom("R1", 30), Room::classroom("R2", 30)];
        normalize(&sections, &faculty, &rooms, &two_slot_grid()).unwrap()
    }

    fn assign(section: &str, faculty: &str, period: u32, room: &str) -> Assignment {
        Assignment::new(
            SessionRef::new(section, 0),
            faculty,
            Slot::new(Day::Monday, period),
            room,
        )
    }

    #[test]
    fn test_kpi_utilization() {
        let problem = sample_problem();
        let mut tt = Timetable::new();
        tt.add_assignment(assign("S1", "F1", 0, "R1"));
        tt.add_assignment(assign("S2", "F2", 1, "R1"));

        let kpi = TimetableKpi::calculate(&problem, &tt);
        // R1: 2 of 2 slots used, R2: 0 of 2
        assert!((kpi.utilization_by_room["R1"] - 1.0).abs() < 1e-10);
        assert!((kpi.utilization_by_room["R2"]).abs() < 1e-10);
        assert!((kpi.avg_utilization - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_faculty_load() {
        let problem = sample_problem();
        let mut tt = Timetable::new();
        tt.add_assignment(assign("S1", "F1", 0, "R1"));
        tt.add_assignment(assign("S2", "F2", 1, "R2"));

        let kpi = TimetableKpi::calculate(&problem, &tt);
        assert_eq!(kpi.load_by_faculty["F1"], 1);
        assert_eq!(kpi.load_by_faculty["F2"], 1);
        assert_eq!(kpi.conflict_count, 0);
    }

    #[test]
    fn test_kpi_counts_unavailable_slots_out() {
        let sections = vec![CourseSection::new("S1", "F1")];
        let faculty = vec![Faculty::new("F1")];
        // R1 only has one available slot
        let rooms = vec![Room::classroom("R1", 30).with_unavailable(Slot::new(Day::Monday, 1))];
        let problem = normalize(&sections, &faculty, &rooms, &two_slot_grid()).unwrap();

        let mut tt = Timetable::new();
        tt.add_assignment(assign("S1", "F1", 0, "R1"));

        let kpi = TimetableKpi::calculate(&problem, &tt);
        assert!((kpi.utilization_by_room["R1"] - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_advisories() {
        let problem = sample_problem();
        let mut tt = Timetable::new();
        // R1 saturated (2/2), R2 idle, F2 teaches 0 of 4
        tt.add_assignment(assign("S1", "F1", 0, "R1"));
        tt.add_assignment(assign("S2", "F1", 1, "R1"));

        let kpi = TimetableKpi::calculate(&problem, &tt);
        let advisories = kpi.advisories(&problem);

        assert!(advisories
            .iter()
            .any(|a| a.kind == AdvisoryKind::RoomSaturated && a.message.contains("R1")));
        assert!(advisories
            .iter()
            .any(|a| a.kind == AdvisoryKind::RoomUnderused && a.message.contains("R2")));
        assert!(advisories
            .iter()
            .any(|a| a.kind == AdvisoryKind::FacultyUnderloaded && a.message.contains("F2")));
    }

    #[test]
    fn test_empty_timetable_no_underuse_noise() {
        let problem = sample_problem();
        let kpi = TimetableKpi::calculate(&problem, &Timetable::new());
        let advisories = kpi.advisories(&problem);
        // An empty timetable should not warn about every idle room
        assert!(advisories
            .iter()
            .all(|a| a.kind != AdvisoryKind::RoomUnderused));
    }
}
