//! # PLOG breakpoint table
//!
//! A PLOG table is a list of Arrhenius coefficient sets, each bound to a breakpoint
//! pressure. [`PLOGTable::build`] validates the raw rows and sorts them once by ascending
//! pressure; afterwards the table is immutable and [`PLOGTable::locate`] finds, for a given
//! pressure, which rows the rate constant must be computed from:
//! - below the first or above the last breakpoint the boundary row is reused as is;
//! - at a breakpoint the row of that breakpoint is used directly;
//! - strictly between two breakpoints both bracketing rows are returned for interpolation;
//! - a NaN pressure matches no row.
//!
//! Text form of a row is `(p A beta Ta)`, see [`PLOGTable::write`] and
//! [`parse_arrhenius_data`].
use crate::Kinetics::arrhenius::ArrheniusCoeffs;
use crate::Kinetics::rate_errors::RateError;
use log::{info, warn};
use prettytable::{Table, row};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// one breakpoint: pressure and the Arrhenius coefficients valid at that pressure.
/// Serialized as the 4-element array [p, A, beta, Ta]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct ArrheniusData {
    pub p: f64,
    pub arrhenius: ArrheniusCoeffs,
}

impl ArrheniusData {
    pub fn new(p: f64, A: f64, beta: f64, Ta: f64) -> Self {
        Self {
            p,
            arrhenius: ArrheniusCoeffs::new(A, beta, Ta),
        }
    }
    pub fn to_row(&self) -> [f64; 4] {
        [self.p, self.arrhenius.A, self.arrhenius.beta, self.arrhenius.Ta]
    }
}

impl From<[f64; 4]> for ArrheniusData {
    fn from(row: [f64; 4]) -> Self {
        Self::new(row[0], row[1], row[2], row[3])
    }
}

impl From<ArrheniusData> for [f64; 4] {
    fn from(data: ArrheniusData) -> Self {
        data.to_row()
    }
}

/// result of the bracket search for a pressure
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Location<'a> {
    /// table has no rows
    Empty,
    /// boundary or exact breakpoint hit: a single row defines the rate
    Single(&'a ArrheniusData),
    /// pressure strictly between two adjacent breakpoints
    Interior {
        left: &'a ArrheniusData,
        right: &'a ArrheniusData,
    },
    /// pressure is NaN and has no place in the table
    Undefined,
}

/// breakpoints sorted by strictly ascending pressure
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PLOGTable {
    entries: Vec<ArrheniusData>,
}

impl PLOGTable {
    /// validates and sorts the raw breakpoints.
    /// Pressures must be finite, positive and pairwise distinct, the coefficients finite.
    /// An empty list is legal: the owner then works with its fallback coefficients only.
    pub fn build(raw: Vec<ArrheniusData>) -> Result<Self, RateError> {
        if raw.is_empty() {
            warn!("ArrheniusPLOG selected, but no PLOG defined");
            return Ok(Self::default());
        }
        for (index, entry) in raw.iter().enumerate() {
            let fields = [
                ("p", entry.p),
                ("A", entry.arrhenius.A),
                ("beta", entry.arrhenius.beta),
                ("Ta", entry.arrhenius.Ta),
            ];
            for (field, value) in fields {
                if !value.is_finite() {
                    return Err(RateError::NonFiniteValue {
                        index,
                        field,
                        value,
                    });
                }
            }
            if entry.p <= 0.0 {
                return Err(RateError::NonPositivePressure {
                    index,
                    pressure: entry.p,
                });
            }
        }
        let mut entries = raw;
        // stable, so equal pressures stay adjacent and are caught below
        entries.sort_by(|a, b| a.p.total_cmp(&b.p));
        if let Some(pair) = entries.windows(2).find(|pair| pair[0].p == pair[1].p) {
            return Err(RateError::DuplicatePressure(pair[0].p));
        }
        let table = Self { entries };
        table.log_rows();
        Ok(table)
    }

    pub fn entries(&self) -> &[ArrheniusData] {
        &self.entries
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// finds the row(s) the rate at pressure p is computed from. O(log n)
    #[inline]
    pub fn locate(&self, p: f64) -> Location<'_> {
        let (first, last) = match (self.entries.first(), self.entries.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Location::Empty,
        };
        if p.is_nan() {
            return Location::Undefined;
        }
        if p <= first.p {
            return Location::Single(first);
        }
        if p >= last.p {
            return Location::Single(last);
        }
        // smallest index with pressure >= p; 0 < right < len here
        let right = self.entries.partition_point(|e| e.p < p);
        let right_entry = &self.entries[right];
        if right_entry.p == p {
            return Location::Single(right_entry);
        }
        Location::Interior {
            left: &self.entries[right - 1],
            right: right_entry,
        }
    }

    /// writes the table as
    /// ```text
    /// ArrheniusData
    /// (
    ///     (p A beta Ta)
    /// );
    /// ```
    /// in sorted order. Floats are written in their shortest round-trip form.
    pub fn write(&self, os: &mut String) {
        let _ = writeln!(os, "ArrheniusData");
        let _ = writeln!(os, "(");
        for entry in &self.entries {
            let _ = writeln!(
                os,
                "    ({:?} {:?} {:?} {:?})",
                entry.p, entry.arrhenius.A, entry.arrhenius.beta, entry.arrhenius.Ta
            );
        }
        let _ = writeln!(os, ");");
    }

    fn log_rows(&self) {
        info!("Reading PLOG coefficients:");
        for entry in &self.entries {
            info!(
                "    PLOG / {} {} {} {} /",
                entry.p, entry.arrhenius.A, entry.arrhenius.beta, entry.arrhenius.Ta
            );
        }
    }

    pub fn pretty_print(&self) {
        let mut table = Table::new();
        table.add_row(row!["p", "A", "beta", "Ta"]);
        for entry in &self.entries {
            table.add_row(row![
                entry.p,
                entry.arrhenius.A,
                entry.arrhenius.beta,
                entry.arrhenius.Ta
            ]);
        }
        table.printstd();
    }
}

/// reads every innermost `( ... )` group of the text as one `(p A beta Ta)` row.
/// Rows are returned in text order, build a [`PLOGTable`] to validate and sort them.
pub fn parse_arrhenius_data(text: &str) -> Result<Vec<ArrheniusData>, RateError> {
    let group = Regex::new(r"\(([^()]*)\)").expect("valid regex");
    let mut rows = Vec::new();
    for cap in group.captures_iter(text) {
        let body = &cap[1];
        let numbers: Vec<f64> = body
            .split_whitespace()
            .map(|s| s.parse::<f64>())
            .collect::<Result<_, _>>()
            .map_err(|_| RateError::MalformedRow(body.trim().to_string()))?;
        let row: [f64; 4] = numbers
            .try_into()
            .map_err(|_| RateError::MalformedRow(body.trim().to_string()))?;
        rows.push(ArrheniusData::from(row));
    }
    Ok(rows)
}
