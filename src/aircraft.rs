use crate::time::Time;
use std::fmt;
use std::sync::Arc;

pub type ModelCode = Arc<str>;

/// Position of an aircraft in the fleet list, assigned in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AircraftId(pub usize);

impl fmt::Display for AircraftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Aircraft {
    pub id: AircraftId,
    pub tail: Arc<str>,
    pub model: ModelCode,
    /// Turnaround needed after every leg, taken from the aircraft's model.
    pub rotation: Time,
}
