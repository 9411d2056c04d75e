//! Weekly calendar coordinates.
//!
//! A timetable lives on a fixed finite grid of (day, period) cells.
//! `Slot` is one cell; `SlotGrid` owns the calendar shape and provides
//! deterministic iteration over all cells.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A teaching day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    /// All teaching days, Monday first.
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        };
        write!(f, "{name}")
    }
}

/// A (day, period) cell in the weekly grid.
///
/// `period` indexes into the grid's labelled periods (0-based).
/// Ordering is (day, period), which fixes the canonical output order
/// of a timetable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Slot {
    /// Teaching day.
    pub day: Day,
    /// Period index within the day (0-based).
    pub period: u32,
}

impl Slot {
    /// Creates a slot.
    pub fn new(day: Day, period: u32) -> Self {
        Self { day, period }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} P{}", self.day, self.period + 1)
    }
}

/// The weekly calendar: which days exist and how periods are labelled.
///
/// Shared coordinate space for faculty availability, room availability,
/// and assignments. Not owned by any entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotGrid {
    /// Teaching days, in order.
    pub days: Vec<Day>,
    /// Display labels for each period (e.g. "9:00-10:00").
    pub period_labels: Vec<String>,
}

impl SlotGrid {
    /// Creates a grid from days and period labels.
    pub fn new(days: Vec<Day>, period_labels: Vec<String>) -> Self {
        Self {
            days,
            period_labels,
        }
    }

    /// The standard 5-day, 5-period teaching week
    /// (three morning periods, two afternoon periods).
    pub fn standard_week() -> Self {
        Self::new(
            Day::ALL.to_vec(),
            vec![
                "9:00-10:00".into(),
                "10:00-11:00".into(),
                "11:00-12:00".into(),
                "2:00-3:00".into(),
                "3:00-4:00".into(),
            ],
        )
    }

    /// Number of periods per day.
    pub fn periods_per_day(&self) -> u32 {
        self.period_labels.len() as u32
    }

    /// Total number of cells in the grid.
    pub fn slot_count(&self) -> usize {
        self.days.len() * self.period_labels.len()
    }

    /// Whether a slot falls inside this grid.
    pub fn contains(&self, slot: Slot) -> bool {
        self.days.contains(&slot.day) && slot.period < self.periods_per_day()
    }

    /// Display label for a slot's period, if in range.
    pub fn period_label(&self, period: u32) -> Option<&str> {
        self.period_labels.get(period as usize).map(|s| s.as_str())
    }

    /// Iterates all slots in canonical (day, period) order.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        let periods = self.periods_per_day();
        self.days
            .iter()
            .flat_map(move |&day| (0..periods).map(move |p| Slot::new(day, p)))
    }
}
