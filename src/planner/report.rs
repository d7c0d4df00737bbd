use crate::airport::AirportCode;
use crate::planner::problem::{Turnaround, turnaround};
use crate::planner::state::FleetState;
use crate::registry::Registry;
use crate::time::Time;
use std::fmt;
use std::sync::Arc;
use tabled::Tabled;
use tabled::settings::{Alignment, Style};

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledLeg {
    pub departure: Time,
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub profit: f64,
}

/// Chronological legs of one aircraft.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    pub tail: Arc<str>,
    pub legs: Vec<ScheduledLeg>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Only aircraft that flew, in fleet order.
    pub itineraries: Vec<Itinerary>,
    pub total_profit: f64,
}

impl Solution {
    /// Replays every aircraft's legs through the same time arithmetic as the search, reporting
    /// departures instead of ready times.
    pub fn reconstruct(registry: &Registry, state: &FleetState) -> Solution {
        let mut total_profit = 0.0;
        let mut itineraries = vec![];

        for record in state.fleet() {
            let flown = record.progress.legs();
            if flown.is_empty() {
                continue;
            }
            let aircraft = registry.aircraft(record.aircraft);
            let mut available_at = None;
            let mut legs = Vec::with_capacity(flown.len());
            for leg_id in flown {
                let Turnaround { departure, ready } =
                    turnaround(registry, aircraft, *leg_id, available_at);
                let leg = registry.leg(*leg_id);
                let profit = leg.profit_for(&aircraft.model).unwrap_or(0.0);
                total_profit += profit;
                legs.push(ScheduledLeg {
                    departure,
                    origin: leg.origin.clone(),
                    destination: leg.destination.clone(),
                    profit,
                });
                available_at = Some(ready);
            }
            itineraries.push(Itinerary {
                tail: aircraft.tail.clone(),
                legs,
            });
        }

        Solution {
            itineraries,
            total_profit,
        }
    }

    /// Console table with one row per scheduled leg.
    pub fn table(&self) -> String {
        let rows = self
            .itineraries
            .iter()
            .flat_map(|it| {
                it.legs.iter().map(|leg| ItineraryRow {
                    tail: it.tail.to_string(),
                    departure: leg.departure.to_hhmm(),
                    origin: leg.origin.to_string(),
                    destination: leg.destination.to_string(),
                    profit: format!("{:.1}", leg.profit),
                })
            })
            .collect::<Vec<_>>();
        let mut table = tabled::Table::new(&rows);
        table.with(Style::rounded());
        table.with(Alignment::left());
        table.to_string()
    }
}

#[derive(Tabled)]
struct ItineraryRow {
    #[tabled(rename = "Aircraft")]
    tail: String,
    #[tabled(rename = "Departs")]
    departure: String,
    #[tabled(rename = "From")]
    origin: String,
    #[tabled(rename = "To")]
    destination: String,
    #[tabled(rename = "Profit")]
    profit: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlanOutcome {
    Solved(Solution),
    /// No assignment closes every aircraft's loop.
    Infeasible,
    /// The search budget ran out before a goal or an empty frontier.
    Aborted,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for it in &self.itineraries {
            write!(f, "S {}", it.tail)?;
            for leg in &it.legs {
                write!(f, " {} {} {}", leg.departure, leg.origin, leg.destination)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "P {:.1}", self.total_profit)
    }
}

/// Solution file contents.
impl fmt::Display for PlanOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanOutcome::Solved(solution) => write!(f, "{}", solution),
            PlanOutcome::Infeasible => writeln!(f, "Infeasible"),
            PlanOutcome::Aborted => writeln!(f, "Aborted"),
        }
    }
}
