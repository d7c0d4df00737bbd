use crate::aircraft::AircraftId;
use crate::leg::LegId;
use crate::time::Time;
use std::collections::{BTreeSet, HashSet};

/// What an aircraft has done so far.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Progress {
    NotFlown,
    Flown {
        /// Legs in the order they were flown, never empty.
        legs: Vec<LegId>,
        /// When the aircraft is ready to depart again, rotation included.
        available_at: Time,
    },
}

impl Progress {
    pub fn legs(&self) -> &[LegId] {
        match self {
            Progress::NotFlown => &[],
            Progress::Flown { legs, .. } => legs.as_slice(),
        }
    }

    pub fn available_at(&self) -> Option<Time> {
        match self {
            Progress::NotFlown => None,
            Progress::Flown { available_at, .. } => Some(*available_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AircraftProgress {
    pub aircraft: AircraftId,
    pub progress: Progress,
}

/// An immutable search state: legs still to assign and what every aircraft has flown.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FleetState {
    remaining: BTreeSet<LegId>,
    fleet: Vec<AircraftProgress>,
}

impl FleetState {
    /// Records are kept sorted by aircraft id so equal assignments compare and hash equal
    /// whatever order they were supplied in.
    pub fn new(remaining: BTreeSet<LegId>, mut fleet: Vec<AircraftProgress>) -> FleetState {
        fleet.sort_by_key(|a| a.aircraft);
        FleetState { remaining, fleet }
    }

    /// Every leg unassigned and no aircraft flown.
    pub fn initial(
        legs: impl IntoIterator<Item = LegId>,
        fleet: impl IntoIterator<Item = AircraftId>,
    ) -> FleetState {
        FleetState::new(
            legs.into_iter().collect(),
            fleet
                .into_iter()
                .map(|aircraft| AircraftProgress {
                    aircraft,
                    progress: Progress::NotFlown,
                })
                .collect(),
        )
    }

    pub fn remaining(&self) -> &BTreeSet<LegId> {
        &self.remaining
    }

    pub fn fleet(&self) -> &[AircraftProgress] {
        &self.fleet
    }

    pub fn progress(&self, aircraft: AircraftId) -> Option<&Progress> {
        self.fleet
            .binary_search_by_key(&aircraft, |a| a.aircraft)
            .ok()
            .map(|i| &self.fleet[i].progress)
    }

    /// A new state where `aircraft` has flown `leg` and is next available at `available_at`.
    pub(crate) fn with_flown(
        &self,
        aircraft: AircraftId,
        leg: LegId,
        available_at: Time,
    ) -> FleetState {
        let mut remaining = self.remaining.clone();
        remaining.remove(&leg);
        let fleet = self
            .fleet
            .iter()
            .map(|record| {
                if record.aircraft != aircraft {
                    return record.clone();
                }
                let mut legs = record.progress.legs().to_vec();
                legs.push(leg);
                AircraftProgress {
                    aircraft,
                    progress: Progress::Flown { legs, available_at },
                }
            })
            .collect();
        FleetState { remaining, fleet }
    }

    /// Whether the remaining legs and every flown sequence together cover `0..leg_count`
    /// exactly once each.
    pub fn check_partition(&self, leg_count: usize) -> bool {
        let mut seen = HashSet::with_capacity(leg_count);
        let all = self
            .remaining
            .iter()
            .chain(self.fleet.iter().flat_map(|a| a.progress.legs()));
        for leg in all {
            if leg.0 >= leg_count || !seen.insert(*leg) {
                return false;
            }
        }
        seen.len() == leg_count
    }
}
