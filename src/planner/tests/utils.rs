use crate::aircraft::{Aircraft, AircraftId};
use crate::airport::Airport;
use crate::leg::{Leg, LegId};
use crate::planner::problem::FleetProblem;
use crate::planner::state::FleetState;
use crate::registry::Registry;
use crate::search::Problem;
use crate::time::Time;
use std::collections::HashMap;
use std::sync::Arc;

pub fn id(s: &str) -> Arc<str> {
    Arc::from(s)
}

pub fn add_airport(airports: &mut Vec<Airport>, code: &str, opens: u32, closes: u32) {
    airports.push(Airport {
        code: id(code),
        opens: Time::from_hhmm(opens),
        closes: Time::from_hhmm(closes),
    });
}

pub fn add_aircraft(aircraft: &mut Vec<Aircraft>, tail: &str, model: &str, rotation: u32) {
    aircraft.push(Aircraft {
        id: AircraftId(aircraft.len()),
        tail: id(tail),
        model: id(model),
        rotation: Time::from_hhmm(rotation),
    });
}

pub fn add_leg(
    legs: &mut Vec<Leg>,
    origin: &str,
    destination: &str,
    duration: u32,
    profits: &[(&str, f64)],
) {
    legs.push(Leg {
        id: LegId(legs.len()),
        origin: id(origin),
        destination: id(destination),
        duration: Time::from_hhmm(duration),
        profits: profits.iter().map(|(m, p)| (id(m), *p)).collect(),
    });
}

pub fn registry(airports: Vec<Airport>, aircraft: Vec<Aircraft>, legs: Vec<Leg>) -> Registry {
    Registry::new(airports, aircraft, legs).unwrap()
}

/// Two airports open 0600-2200, one aircraft of model M with a 30 minute rotation, and the
/// out-and-back pair X->Y, Y->X worth 100 each.
pub fn round_trip() -> Registry {
    let mut airports = vec![];
    let mut aircraft = vec![];
    let mut legs = vec![];
    add_airport(&mut airports, "X", 600, 2200);
    add_airport(&mut airports, "Y", 600, 2200);
    add_aircraft(&mut aircraft, "T1", "M", 30);
    add_leg(&mut legs, "X", "Y", 100, &[("M", 100.0)]);
    add_leg(&mut legs, "Y", "X", 100, &[("M", 100.0)]);
    registry(airports, aircraft, legs)
}

/// Applies the generated action in which `aircraft` flies `leg`.
pub fn fly(problem: &FleetProblem, state: &FleetState, aircraft: usize, leg: usize) -> FleetState {
    let action = problem
        .actions(state)
        .into_iter()
        .find(|a| a.aircraft() == AircraftId(aircraft) && a.leg() == LegId(leg))
        .unwrap_or_else(|| panic!("aircraft {} cannot fly leg {}", aircraft, leg));
    problem.result(state, &action)
}

/// Cheapest remaining cost from `state` to any goal, by exhaustive enumeration.
pub fn min_cost_to_goal(
    problem: &FleetProblem,
    state: &FleetState,
    memo: &mut HashMap<FleetState, Option<f64>>,
) -> Option<f64> {
    if let Some(known) = memo.get(state) {
        return *known;
    }
    let best = if problem.is_goal(state) {
        Some(0.0)
    } else {
        problem
            .actions(state)
            .iter()
            .filter_map(|action| {
                let child = problem.result(state, action);
                min_cost_to_goal(problem, &child, memo)
                    .map(|rest| problem.path_cost(0.0, state, action, &child) + rest)
            })
            .reduce(f64::min)
    };
    memo.insert(state.clone(), best);
    best
}

/// Every state reachable from the initial one.
pub fn reachable_states(problem: &FleetProblem) -> Vec<FleetState> {
    let mut seen = std::collections::HashSet::new();
    let mut stack = vec![problem.initial_state()];
    while let Some(state) = stack.pop() {
        if !seen.insert(state.clone()) {
            continue;
        }
        for action in problem.actions(&state) {
            stack.push(problem.result(&state, &action));
        }
    }
    seen.into_iter().collect()
}
