//! Faculty model.
//!
//! Read-only input to the solver: identity, unavailable cells, and the
//! weekly teaching load cap.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::Slot;

/// A faculty member who teaches sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faculty {
    /// Unique faculty identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Cells this faculty cannot teach in (meetings, office hours).
    pub unavailable: HashSet<Slot>,
    /// Maximum sessions per week. `None` means uncapped.
    pub max_weekly_load: Option<u32>,
}

impl Faculty {
    /// Creates a faculty member with no unavailability and no load cap.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            unavailable: HashSet::new(),
            max_weekly_load: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Marks a cell as unavailable.
    pub fn with_unavailable(mut self, slot: Slot) -> Self {
        self.unavailable.insert(slot);
        self
    }

    /// Sets the weekly load cap.
    pub fn with_max_weekly_load(mut self, sessions: u32) -> Self {
        self.max_weekly_load = Some(sessions);
        self
    }

    /// Whether this faculty can teach in the given cell.
    pub fn is_available(&self, slot: Slot) -> bool {
        !self.unavailable.contains(&slot)
    }
}
