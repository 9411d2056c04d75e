//! Constraint-based academic timetable generation.
//!
//! Assigns course sections to (day, period, room) cells of a weekly
//! grid while avoiding faculty and room double-booking, respecting room
//! capacity and type requirements, and balancing faculty load and room
//! utilization.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `CourseSection`, `Faculty`, `Room`,
//!   `Slot`, `SlotGrid`, `Assignment`, `Timetable`, `Conflict`
//! - **`validation`**: Input normalization (missing fields, duplicate
//!   IDs, dangling references, zero counts)
//! - **`constraints`**: Hard predicates and soft cost functions
//! - **`solver`**: Deterministic backtracking search with budgets,
//!   cancellation, and best-effort partial results
//! - **`report`**: Conflict annotation of (possibly hand-edited)
//!   timetables
//! - **`engine`**: The `generate` facade a display layer calls
//! - **`analytics`**: Room utilization and faculty load indicators
//!
//! # Pipeline
//!
//! `Dataset` → [`validation::normalize`] → [`solver::Solver`] →
//! [`report::annotate`] → [`models::Timetable`]
//!
//! # References
//!
//! - Russell & Norvig (2021), "Artificial Intelligence: A Modern
//!   Approach", Ch. 6: Constraint Satisfaction Problems
//! - Schaerf (1999), "A Survey of Automated Timetabling"

pub mod analytics;
pub mod constraints;
pub mod engine;
pub mod models;
pub mod report;
pub mod solver;
pub mod validation;
