use crate::aircraft::{Aircraft, AircraftId, ModelCode};
use crate::airport::{Airport, AirportCode};
use crate::error::{AppError, RegistryError};
use crate::input::{self, Records};
use crate::leg::{Leg, LegId};
use crate::time::Time;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Read-only lookup tables for one problem instance.
#[derive(Debug, Clone)]
pub struct Registry {
    airports: Vec<Airport>,
    airports_index: HashMap<AirportCode, usize>,
    aircraft: Vec<Aircraft>,
    legs: Vec<Leg>,
    routes: Vec<(usize, usize)>,
    best_profits: Vec<f64>,
    global_max_profit: f64,
}

impl Registry {
    /// Added to the highest profit so every leg cost stays strictly positive.
    pub const PROFIT_SLACK: f64 = 10.0;

    pub fn new(
        airports: Vec<Airport>,
        aircraft: Vec<Aircraft>,
        legs: Vec<Leg>,
    ) -> Result<Registry, RegistryError> {
        let mut airports_index = HashMap::with_capacity(airports.len());
        for (i, airport) in airports.iter().enumerate() {
            if airports_index.insert(airport.code.clone(), i).is_some() {
                return Err(RegistryError::DuplicateAirport(airport.code.to_string()));
            }
        }

        let resolve = |leg: &Leg, code: &AirportCode| {
            airports_index
                .get(code)
                .copied()
                .ok_or_else(|| RegistryError::UnknownAirport {
                    leg: leg.id.0,
                    airport: code.to_string(),
                })
        };
        let routes = legs
            .iter()
            .map(|leg| -> Result<(usize, usize), RegistryError> {
                Ok((resolve(leg, &leg.origin)?, resolve(leg, &leg.destination)?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        for leg in &legs {
            let mut seen = HashSet::new();
            if let Some((model, _)) = leg.profits.iter().find(|(m, _)| !seen.insert(m.clone())) {
                return Err(RegistryError::DuplicateProfit {
                    leg: leg.id.0,
                    model: model.to_string(),
                });
            }
        }

        let best_profits = legs
            .iter()
            .map(|leg| leg.best_profit().unwrap_or(0.0))
            .collect::<Vec<_>>();
        let global_max_profit = legs
            .iter()
            .flat_map(|leg| leg.profits.iter().map(|(_, p)| *p))
            .reduce(f64::max)
            .unwrap_or(0.0)
            + Self::PROFIT_SLACK;

        Ok(Registry {
            airports,
            airports_index,
            aircraft,
            legs,
            routes,
            best_profits,
            global_max_profit,
        })
    }

    /// Resolves every aircraft's rotation time through its model and builds the registry.
    pub fn from_records(records: Records) -> Result<Registry, RegistryError> {
        let mut rotations: HashMap<ModelCode, Time> = HashMap::new();
        for (model, rotation) in records.rotations {
            if rotations.insert(model.clone(), rotation).is_some() {
                return Err(RegistryError::DuplicateModel(model.to_string()));
            }
        }

        let aircraft = records
            .aircraft
            .into_iter()
            .enumerate()
            .map(|(i, raw)| -> Result<Aircraft, RegistryError> {
                let rotation =
                    rotations
                        .get(&raw.model)
                        .copied()
                        .ok_or_else(|| RegistryError::UnknownModel {
                            tail: raw.tail.to_string(),
                            model: raw.model.to_string(),
                        })?;
                Ok(Aircraft {
                    id: AircraftId(i),
                    tail: raw.tail,
                    model: raw.model,
                    rotation,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Registry::new(records.airports, aircraft, records.legs)
    }

    pub fn load_from_file(path: &Path) -> Result<Registry, AppError> {
        let text = std::fs::read_to_string(path).map_err(|source| AppError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let records = input::parse(&text)?;
        Ok(Registry::from_records(records)?)
    }

    pub fn airport(&self, code: &str) -> Option<&Airport> {
        self.airports_index.get(code).map(|i| &self.airports[*i])
    }

    pub fn aircraft(&self, id: AircraftId) -> &Aircraft {
        &self.aircraft[id.0]
    }

    pub fn fleet(&self) -> &[Aircraft] {
        &self.aircraft
    }

    pub fn leg(&self, id: LegId) -> &Leg {
        &self.legs[id.0]
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Origin and destination airports of a leg.
    pub fn route(&self, id: LegId) -> (&Airport, &Airport) {
        let (origin, destination) = self.routes[id.0];
        (&self.airports[origin], &self.airports[destination])
    }

    /// Highest profit any model earns on the leg.
    pub fn best_profit(&self, id: LegId) -> f64 {
        self.best_profits[id.0]
    }

    pub fn global_max_profit(&self) -> f64 {
        self.global_max_profit
    }
}
