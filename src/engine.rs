//! Generation facade.
//!
//! Ties the pipeline together: normalize the dataset, run the
//! backtracking solver under the request's budget and optimization
//! options, and annotate the result. This is the surface a display
//! layer calls; it holds no process-wide state, so independent
//! requests can run in parallel over the same immutable dataset.

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constraints::CostModel;
use crate::models::{CourseSection, Faculty, Room, SessionRef, SlotGrid, Timetable};
use crate::report;
use crate::solver::{SearchBudget, SolveOutcome, Solver};
use crate::validation::{self, Problem, ValidationError};

/// Immutable input snapshot for one or more generation runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// Course catalog.
    pub sections: Vec<CourseSection>,
    /// Faculty roster.
    pub faculty: Vec<Faculty>,
    /// Room inventory.
    pub rooms: Vec<Room>,
    /// Weekly calendar.
    pub grid: SlotGrid,
}

impl Dataset {
    /// Creates an empty dataset on the given grid.
    pub fn new(grid: SlotGrid) -> Self {
        Self {
            sections: Vec::new(),
            faculty: Vec::new(),
            rooms: Vec::new(),
            grid,
        }
    }

    /// Adds a section.
    pub fn with_section(mut self, section: CourseSection) -> Self {
        self.sections.push(section);
        self
    }

    /// Adds a faculty member.
    pub fn with_faculty(mut self, faculty: Faculty) -> Self {
        self.faculty.push(faculty);
        self
    }

    /// Adds a room.
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    /// Validates and cross-indexes this dataset.
    pub fn normalize(&self) -> Result<Problem, Vec<ValidationError>> {
        validation::normalize(&self.sections, &self.faculty, &self.rooms, &self.grid)
    }
}

/// Soft-constraint toggles from the generation form.
///
/// Each flag enables one concern: `balance_load` the faculty load
/// variance term, `optimize_resources` the room utilization variance
/// term, and `resolve_conflicts` the conflict annotation pass on the
/// returned timetable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationOptions {
    /// Run the conflict reporter over the output.
    pub resolve_conflicts: bool,
    /// Minimize faculty load variance.
    pub balance_load: bool,
    /// Minimize room utilization variance.
    pub optimize_resources: bool,
}

impl Default for OptimizationOptions {
    /// All concerns enabled, matching the generation form's defaults.
    fn default() -> Self {
        Self {
            resolve_conflicts: true,
            balance_load: true,
            optimize_resources: true,
        }
    }
}

/// One generation request for a program and semester.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Program identifier (e.g. "Computer Science Engineering").
    pub program: String,
    /// Semester identifier (e.g. "Semester 3").
    pub semester: String,
    /// Soft-constraint toggles.
    pub options: OptimizationOptions,
    /// Search effort caps.
    pub budget: SearchBudget,
    /// Seed for tie-break diversification. `None` = canonical order.
    pub seed: Option<u64>,
}

impl GenerationRequest {
    /// Creates a request with default options and an unbounded budget.
    pub fn new(program: impl Into<String>, semester: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            semester: semester.into(),
            options: OptimizationOptions::default(),
            budget: SearchBudget::unbounded(),
            seed: None,
        }
    }

    /// Sets the optimization options.
    pub fn with_options(mut self, options: OptimizationOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the search budget.
    pub fn with_budget(mut self, budget: SearchBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Sets the tie-break seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// How a generation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GenerationStatus {
    /// Every session was placed.
    Complete,
    /// The budget ran out; the timetable is the best feasible partial.
    BudgetExceeded,
}

/// Result of a generation run.
#[derive(Debug, Clone, Serialize)]
pub struct Generation {
    /// The generated timetable, annotated when `resolve_conflicts` is set.
    pub timetable: Timetable,
    /// Sessions the solver could not place within budget.
    pub unplaced: Vec<SessionRef>,
    /// Terminal status.
    pub status: GenerationStatus,
}

/// A generation run failed before producing an acceptable timetable.
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    /// The dataset failed validation; search never started.
    #[error("input validation failed with {} error(s)", .0.len())]
    Validation(Vec<ValidationError>),
    /// The search space was exhausted without a complete assignment.
    #[error("no feasible timetable: {} session(s) unplaced", unplaced.len())]
    Infeasible {
        /// Best feasible partial timetable found.
        partial: Timetable,
        /// Sessions with no assignment.
        unplaced: Vec<SessionRef>,
    },
}

/// Runs generation requests against immutable datasets.
///
/// # Example
///
/// ```
/// use timetable_core::engine::{Dataset, GenerationRequest, Generator};
/// use timetable_core::models::{CourseSection, Faculty, Room, SlotGrid};
///
/// let dataset = Dataset::new(SlotGrid::standard_week())
///     .with_section(CourseSection::new("CS301-A", "F1").with_enrolled(40))
///     .with_faculty(Faculty::new("F1").with_name("Dr. Smith"))
///     .with_room(Room::lecture_hall("A101", 60));
/// let request = GenerationRequest::new("Computer Science Engineering", "Semester 3");
///
/// let generation = Generator::new().generate(&dataset, &request).unwrap();
/// assert_eq!(generation.timetable.assignment_count(), 1);
/// assert!(generation.timetable.is_conflict_free());
/// ```
#[derive(Default)]
pub struct Generator<'a> {
    progress: Option<Box<dyn FnMut(u8) + 'a>>,
}

impl<'a> Generator<'a> {
    /// Creates a generator with no progress observer.
    pub fn new() -> Self {
        Self { progress: None }
    }

    /// Registers a progress observer receiving a monotonically
    /// increasing percentage during search.
    pub fn with_progress(mut self, observer: impl FnMut(u8) + 'a) -> Self {
        self.progress = Some(Box::new(observer));
        self
    }

    /// Runs one generation request.
    ///
    /// Normalizes the dataset, searches under the request's budget, and
    /// annotates the output when `resolve_conflicts` is enabled. Budget
    /// exhaustion is a soft outcome on the `Ok` path; validation
    /// failures and infeasibility are errors. The core never retries;
    /// widening a budget is the caller's decision.
    pub fn generate(
        self,
        dataset: &Dataset,
        request: &GenerationRequest,
    ) -> Result<Generation, GenerationError> {
        info!(
            "Generating timetable for '{}' / '{}'",
            request.program, request.semester
        );
        let problem = dataset.normalize().map_err(GenerationError::Validation)?;

        let mut cost = CostModel::none();
        if request.options.balance_load {
            cost = cost.with_load_balancing();
        }
        if request.options.optimize_resources {
            cost = cost.with_utilization_balancing();
        }

        let mut solver = Solver::new(&problem)
            .with_cost_model(cost)
            .with_budget(request.budget.clone());
        if let Some(seed) = request.seed {
            solver = solver.with_seed(seed);
        }
        if let Some(observer) = self.progress {
            solver = solver.with_progress(observer);
        }

        let annotate = |tt: Timetable| {
            if request.options.resolve_conflicts {
                report::annotate(&tt, &problem)
            } else {
                tt
            }
        };

        match solver.solve() {
            Ok(SolveOutcome::Complete(timetable)) => Ok(Generation {
                timetable: annotate(timetable),
                unplaced: Vec::new(),
                status: GenerationStatus::Complete,
            }),
            Ok(SolveOutcome::BudgetExceeded { partial, unplaced }) => Ok(Generation {
                timetable: annotate(partial),
                unplaced,
                status: GenerationStatus::BudgetExceeded,
            }),
            Err(infeasible) => Err(GenerationError::Infeasible {
                partial: annotate(infeasible.partial),
                unplaced: infeasible.unplaced,
            }),
        }
    }
}

/// Runs independent generation requests on parallel worker threads.
///
/// Each run sees only the shared immutable dataset and its own request;
/// results come back in request order.
pub fn generate_batch(
    dataset: &Dataset,
    requests: &[GenerationRequest],
) -> Vec<Result<Generation, GenerationError>> {
    std::thread::scope(|scope| {
        let handles: Vec<_> = requests
            .iter()
            .map(|request| scope.spawn(move || Generator::new().generate(dataset, request)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("generation worker panicked"))
            .collect()
    })
}
