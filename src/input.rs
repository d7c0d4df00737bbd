//! Line-oriented problem input.
//!
//! Every non-blank line is a record whose first token names its type:
//!
//! ```text
//! A <code> <openHHMM> <closeHHMM>
//! P <tail> <model>
//! C <model> <rotationHHMM>
//! L <origin> <destination> <flightHHMM> <model> <profit> [<model> <profit> ...]
//! ```

use crate::aircraft::ModelCode;
use crate::airport::Airport;
use crate::error::{ParseError, ParseErrorKind};
use crate::leg::{Leg, LegId};
use crate::time::Time;
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub struct AircraftRecord {
    pub tail: Arc<str>,
    pub model: ModelCode,
}

/// Records in input order, not yet cross-checked against each other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Records {
    pub airports: Vec<Airport>,
    pub aircraft: Vec<AircraftRecord>,
    pub rotations: Vec<(ModelCode, Time)>,
    pub legs: Vec<Leg>,
}

pub fn parse(text: &str) -> Result<Records, ParseError> {
    let mut records = Records::default();
    for (idx, raw) in text.lines().enumerate() {
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        let Some((kind, fields)) = tokens.split_first() else {
            continue;
        };
        parse_record(&mut records, kind, fields).map_err(|kind| ParseError {
            line: idx + 1,
            kind,
        })?;
    }
    Ok(records)
}

fn parse_record(records: &mut Records, kind: &str, fields: &[&str]) -> Result<(), ParseErrorKind> {
    match kind {
        "A" => {
            expect_fields('A', "3", fields, fields.len() == 3)?;
            records.airports.push(Airport {
                code: Arc::from(fields[0]),
                opens: parse_hhmm("opening time", fields[1])?,
                closes: parse_hhmm("closing time", fields[2])?,
            });
        }
        "P" => {
            expect_fields('P', "2", fields, fields.len() == 2)?;
            records.aircraft.push(AircraftRecord {
                tail: Arc::from(fields[0]),
                model: model_code(fields[1]),
            });
        }
        "C" => {
            expect_fields('C', "2", fields, fields.len() == 2)?;
            records
                .rotations
                .push((model_code(fields[0]), parse_hhmm("rotation time", fields[1])?));
        }
        "L" => {
            expect_fields('L', "at least 5", fields, fields.len() >= 5)?;
            let pairs = &fields[3..];
            if pairs.len() % 2 != 0 {
                return Err(ParseErrorKind::DanglingModel(
                    pairs[pairs.len() - 1].to_string(),
                ));
            }
            let profits = pairs
                .chunks_exact(2)
                .map(|pair| {
                    let model = model_code(pair[0]);
                    pair[1]
                        .parse::<f64>()
                        .ok()
                        .filter(|p| p.is_finite())
                        .map(|p| (model.clone(), p))
                        .ok_or_else(|| ParseErrorKind::InvalidProfit {
                            model: model.to_string(),
                            value: pair[1].to_string(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            records.legs.push(Leg {
                id: LegId(records.legs.len()),
                origin: Arc::from(fields[0]),
                destination: Arc::from(fields[1]),
                duration: parse_hhmm("flight time", fields[2])?,
                profits,
            });
        }
        other => warn!(record = other, "skipping unknown record type"),
    }
    Ok(())
}

fn expect_fields(
    record: char,
    expected: &'static str,
    fields: &[&str],
    ok: bool,
) -> Result<(), ParseErrorKind> {
    if ok {
        Ok(())
    } else {
        Err(ParseErrorKind::FieldCount {
            record,
            expected,
            found: fields.len(),
        })
    }
}

fn parse_hhmm(field: &'static str, value: &str) -> Result<Time, ParseErrorKind> {
    value
        .parse::<u32>()
        .ok()
        .filter(|hhmm| hhmm % 100 < 60)
        .map(Time::from_hhmm)
        .ok_or_else(|| ParseErrorKind::InvalidTime {
            field,
            value: value.to_string(),
        })
}

fn model_code(token: &str) -> ModelCode {
    Arc::from(token.strip_suffix(':').unwrap_or(token))
}
