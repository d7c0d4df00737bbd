pub mod problem;
pub mod report;
pub mod state;

use crate::config::SearchConfig;
use crate::registry::Registry;
use crate::search::{SearchOutcome, astar};
use problem::FleetProblem;
use report::{PlanOutcome, Solution};
use tracing::info;

/// Searches for the most profitable closed-loop assignment and replays it into itineraries.
pub fn plan(registry: &Registry, config: &SearchConfig) -> PlanOutcome {
    let problem = FleetProblem::new(registry);
    let outcome = astar(&problem, config);
    let stats = outcome.stats();
    info!(
        expanded = stats.expanded,
        generated = stats.generated,
        peak_frontier = stats.peak_frontier,
        "search finished"
    );

    match outcome {
        SearchOutcome::Solved { state, .. } => {
            PlanOutcome::Solved(Solution::reconstruct(registry, &state))
        }
        SearchOutcome::Exhausted { .. } => PlanOutcome::Infeasible,
        SearchOutcome::Aborted { .. } => PlanOutcome::Aborted,
    }
}
