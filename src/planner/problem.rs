use crate::aircraft::{Aircraft, AircraftId};
use crate::leg::LegId;
use crate::planner::state::{FleetState, Progress};
use crate::registry::Registry;
use crate::search::Problem;
use crate::time::Time;

/// "Aircraft flies leg next". Only produced by [`FleetProblem::actions`].
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    aircraft: AircraftId,
    leg: LegId,
    profit: f64,
}

impl Assignment {
    pub fn aircraft(&self) -> AircraftId {
        self.aircraft
    }

    pub fn leg(&self) -> LegId {
        self.leg
    }

    /// Profit the aircraft's model earns on the leg.
    pub fn profit(&self) -> f64 {
        self.profit
    }
}

/// Departure instant of a leg and when the aircraft is ready again afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Turnaround {
    pub departure: Time,
    pub ready: Time,
}

/// Times an aircraft flying `leg` next. Without `available_at` the origin's opening time is
/// the earliest departure. If the leg would land before the destination opens, departure is
/// pushed back so it lands right at opening.
pub fn turnaround(
    registry: &Registry,
    aircraft: &Aircraft,
    leg: LegId,
    available_at: Option<Time>,
) -> Turnaround {
    let (origin, destination) = registry.route(leg);
    let flight = registry.leg(leg).duration;
    let start = available_at.unwrap_or(origin.opens);
    let delta = destination.opens - start;
    if delta <= flight {
        Turnaround {
            departure: start,
            ready: start + flight + aircraft.rotation,
        }
    } else {
        Turnaround {
            departure: destination.opens - flight,
            ready: destination.opens + aircraft.rotation,
        }
    }
}

/// Fleet assignment as a cost-minimizing search: every flown leg costs the global maximum
/// profit minus the profit it earns.
pub struct FleetProblem<'a> {
    registry: &'a Registry,
}

impl<'a> FleetProblem<'a> {
    pub fn new(registry: &'a Registry) -> FleetProblem<'a> {
        FleetProblem { registry }
    }

    /// Window-overlap test for flying `leg` with the origin window starting at `reference`
    /// (or at the origin's opening time when `None`).
    pub fn feasible(&self, leg: LegId, reference: Option<Time>) -> bool {
        let (origin, destination) = self.registry.route(leg);
        let t = self.registry.leg(leg).duration;
        let a0 = reference.unwrap_or(origin.opens);
        let (a1, b0, b1) = (origin.closes, destination.opens, destination.closes);

        if a0 > a1 {
            return false;
        }
        (a0 + t).is_within(b0, b1)
            || (a1 + t).is_within(b0, b1)
            || (b0 - t).is_within(a0, a1)
            || (b1 - t).is_within(a0, a1)
    }

    fn assignment(&self, aircraft: &Aircraft, leg: LegId) -> Option<Assignment> {
        self.registry
            .leg(leg)
            .profit_for(&aircraft.model)
            .map(|profit| Assignment {
                aircraft: aircraft.id,
                leg,
                profit,
            })
    }
}

impl Problem for FleetProblem<'_> {
    type State = FleetState;
    type Action = Assignment;

    fn initial_state(&self) -> FleetState {
        FleetState::initial(
            self.registry.legs().iter().map(|leg| leg.id),
            self.registry.fleet().iter().map(|aircraft| aircraft.id),
        )
    }

    fn actions(&self, state: &FleetState) -> Vec<Assignment> {
        let mut actions = vec![];
        if state.remaining().is_empty() {
            return actions;
        }

        for record in state.fleet() {
            let aircraft = self.registry.aircraft(record.aircraft);
            match &record.progress {
                Progress::NotFlown => actions.extend(
                    state
                        .remaining()
                        .iter()
                        .filter(|leg| self.feasible(**leg, None))
                        .filter_map(|leg| self.assignment(aircraft, *leg)),
                ),
                Progress::Flown { legs, available_at } => {
                    // non-empty by construction
                    let Some(last) = legs.last() else { continue };
                    let location = &self.registry.leg(*last).destination;
                    actions.extend(
                        state
                            .remaining()
                            .iter()
                            .filter(|leg| self.registry.leg(**leg).origin == *location)
                            .filter(|leg| self.feasible(**leg, Some(*available_at)))
                            .filter_map(|leg| self.assignment(aircraft, *leg)),
                    )
                }
            }
        }
        actions
    }

    fn result(&self, state: &FleetState, action: &Assignment) -> FleetState {
        let aircraft = self.registry.aircraft(action.aircraft());
        let available_at = state
            .progress(action.aircraft())
            .and_then(|progress| progress.available_at());
        let Turnaround { ready, .. } =
            turnaround(self.registry, aircraft, action.leg(), available_at);
        let next = state.with_flown(action.aircraft(), action.leg(), ready);

        debug_assert!(
            next.check_partition(self.registry.legs().len()),
            "Remaining <-> flown legs partition violated"
        );
        next
    }

    fn is_goal(&self, state: &FleetState) -> bool {
        state.remaining().is_empty()
            && state.fleet().iter().all(|record| match &record.progress {
                Progress::NotFlown => true,
                Progress::Flown { legs, .. } => match (legs.first(), legs.last()) {
                    (Some(first), Some(last)) if legs.len() >= 2 => {
                        self.registry.leg(*first).origin == self.registry.leg(*last).destination
                    }
                    _ => false,
                },
            })
    }

    fn path_cost(
        &self,
        cost: f64,
        _from: &FleetState,
        action: &Assignment,
        _to: &FleetState,
    ) -> f64 {
        cost + (self.registry.global_max_profit() - action.profit())
    }

    /// Every remaining leg flown by whichever model earns the most on it.
    fn heuristic(&self, state: &FleetState) -> f64 {
        if self.is_goal(state) {
            return 0.0;
        }
        state
            .remaining()
            .iter()
            .map(|leg| self.registry.global_max_profit() - self.registry.best_profit(*leg))
            .sum()
    }
}
