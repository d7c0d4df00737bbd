use crate::time::Time;
use std::fmt;
use std::fmt::Formatter;
use std::sync::Arc;

pub type AirportCode = Arc<str>;

/// An airport and the daily window during which it accepts departures and arrivals.
#[derive(Clone, Debug, PartialEq)]
pub struct Airport {
    pub code: AirportCode,
    pub opens: Time,
    pub closes: Time,
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}
