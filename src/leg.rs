use crate::aircraft::ModelCode;
use crate::airport::AirportCode;
use crate::time::Time;
use std::fmt;

/// Position of a leg in the input, assigned in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LegId(pub usize);

impl fmt::Display for LegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// A candidate flight. Models missing from `profits` cannot fly it.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    pub id: LegId,
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub duration: Time,
    pub profits: Vec<(ModelCode, f64)>,
}

impl Leg {
    pub fn profit_for(&self, model: &str) -> Option<f64> {
        self.profits
            .iter()
            .find(|(m, _)| m.as_ref() == model)
            .map(|(_, p)| *p)
    }

    pub fn best_profit(&self) -> Option<f64> {
        self.profits.iter().map(|(_, p)| *p).reduce(f64::max)
    }
}
