use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

/// Clock time or duration in fractional hours (13:30 is `Time(13.5)`).
#[derive(Debug, Clone, Copy)]
pub struct Time(pub f64);

impl Time {
    /// Converts an `HHMM` integer such as `0830` into hours.
    pub fn from_hhmm(hhmm: u32) -> Time {
        Time((hhmm / 100) as f64 + (hhmm % 100) as f64 / 60.0)
    }

    /// Renders back to a zero-padded `HHMM` string. Minutes are rounded to the nearest integer
    /// and a rounded 60 carries into the hour.
    pub fn to_hhmm(self) -> String {
        let mut hours = self.0.trunc() as u64;
        let mut mins = ((self.0 - self.0.trunc()) * 60.0).round() as u64;
        if mins == 60 {
            hours += 1;
            mins = 0;
        }
        format!("{:02}{:02}", hours, mins)
    }

    pub fn is_within(self, from: Time, to: Time) -> bool {
        self >= from && self <= to
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hhmm())
    }
}

impl PartialEq for Time {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for Time {}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Time {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Time {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl Add<Time> for Time {
    type Output = Self;

    fn add(self, rhs: Time) -> Self::Output {
        Time(self.0 + rhs.0)
    }
}

impl Sub<Time> for Time {
    type Output = Self;

    fn sub(self, rhs: Time) -> Self::Output {
        Time(self.0 - rhs.0)
    }
}
