use crate::config::SearchConfig;
use crate::planner::plan;
use crate::planner::problem::FleetProblem;
use crate::planner::report::PlanOutcome;
use crate::planner::tests::utils::{
    add_aircraft, add_airport, add_leg, min_cost_to_goal, reachable_states, registry,
};
use crate::registry::Registry;
use crate::search::{Problem, SearchOutcome, astar};
use proptest::prelude::*;
use std::collections::HashMap;

const AIRPORTS: [&str; 3] = ["X", "Y", "Z"];
const MODELS: [&str; 2] = ["M1", "M2"];

fn arb_hhmm(hours: std::ops::Range<u32>) -> impl Strategy<Value = u32> {
    (hours, 0..4u32).prop_map(|(h, quarter)| h * 100 + quarter * 15)
}

fn arb_airport() -> impl Strategy<Value = (u32, u32)> {
    (arb_hhmm(5..10), arb_hhmm(14..23))
}

fn arb_leg() -> impl Strategy<Value = (usize, usize, u32, f64, Option<f64>)> {
    (
        0..AIRPORTS.len(),
        0..AIRPORTS.len(),
        arb_hhmm(0..4),
        0..500u32,
        prop::option::of(0..500u32),
    )
        .prop_map(|(o, d, dur, p1, p2)| (o, d, dur.max(15), p1 as f64, p2.map(|p| p as f64)))
}

fn arb_registry(max_legs: usize) -> impl Strategy<Value = Registry> {
    (
        prop::collection::vec(arb_airport(), AIRPORTS.len()),
        prop::collection::vec((0..MODELS.len(), arb_hhmm(0..2)), 1..3),
        prop::collection::vec(arb_leg(), 1..=max_legs),
    )
        .prop_map(|(windows, fleet, leg_specs)| {
            let mut airports = vec![];
            let mut aircraft = vec![];
            let mut legs = vec![];
            for (code, (opens, closes)) in AIRPORTS.iter().zip(windows) {
                add_airport(&mut airports, code, opens, closes);
            }
            for (i, (model, rotation)) in fleet.into_iter().enumerate() {
                add_aircraft(&mut aircraft, &format!("T{}", i), MODELS[model], rotation);
            }
            for (o, d, dur, p1, p2) in leg_specs {
                let mut profits = vec![(MODELS[0], p1)];
                if let Some(p2) = p2 {
                    profits.push((MODELS[1], p2));
                }
                add_leg(&mut legs, AIRPORTS[o], AIRPORTS[d], dur, &profits);
            }
            registry(airports, aircraft, legs)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_every_reachable_state_partitions_legs(registry in arb_registry(4)) {
        let problem = FleetProblem::new(&registry);
        for state in reachable_states(&problem) {
            prop_assert!(
                state.check_partition(registry.legs().len()),
                "partition violated in {:?}", state
            );
        }
    }

    #[test]
    fn test_heuristic_never_overestimates(registry in arb_registry(4)) {
        let problem = FleetProblem::new(&registry);
        let mut memo = HashMap::new();
        for state in reachable_states(&problem) {
            if let Some(true_cost) = min_cost_to_goal(&problem, &state, &mut memo) {
                prop_assert!(
                    problem.heuristic(&state) <= true_cost + 1e-9,
                    "h = {} > {} in {:?}", problem.heuristic(&state), true_cost, state
                );
            }
        }
    }

    #[test]
    fn test_astar_matches_exhaustive_search(registry in arb_registry(4)) {
        let problem = FleetProblem::new(&registry);
        let mut memo = HashMap::new();
        let best = min_cost_to_goal(&problem, &problem.initial_state(), &mut memo);

        match (astar(&problem, &SearchConfig::default()), best) {
            (SearchOutcome::Solved { state, cost, .. }, Some(best)) => {
                prop_assert!((cost - best).abs() < 1e-6, "A* cost {} vs optimum {}", cost, best);
                prop_assert!(problem.is_goal(&state));
            }
            (SearchOutcome::Exhausted { .. }, None) => {}
            (outcome, best) => {
                prop_assert!(false, "A* {:?} vs exhaustive {:?}", outcome, best);
            }
        }
    }

    #[test]
    fn test_profit_and_cost_agree(registry in arb_registry(4)) {
        let problem = FleetProblem::new(&registry);
        let outcome = astar(&problem, &SearchConfig::default());
        if let SearchOutcome::Solved { cost, .. } = outcome {
            let PlanOutcome::Solved(solution) = plan(&registry, &SearchConfig::default()) else {
                return Err(TestCaseError::fail("plan disagrees with search"));
            };
            // every goal flies every leg, so the offset is the same for all of them
            let offset = registry.global_max_profit() * registry.legs().len() as f64;
            prop_assert!((offset - cost - solution.total_profit).abs() < 1e-6);
        }
    }
}
