//! # Pressure dependent Arrhenius rate law (PLOG)
//!
//! The rate coefficient is tabulated as Arrhenius coefficients at a set of breakpoint
//! pressures. For a pressure p strictly between two breakpoints pl < p < pr the rate is
//! interpolated linearly in log10(k) against log10(p):
//!
//! log10(k) = log10(kl) + (log10(p) - log10(pl)) * (log10(kr) - log10(kl)) / (log10(pr) - log10(pl))
//!
//! where kl and kr are the Arrhenius rates of the two bracketing rows at the same temperature.
//! Outside the tabulated range the nearest boundary row is used without extrapolation.
//! Without a table the base coefficients (A, beta, Ta) are the rate law.
//!
//! # Example
//! ```
//! use KiPLOG::Kinetics::plog_rate::ArrheniusPLOGRate;
//! use KiPLOG::Kinetics::plog_table::ArrheniusData;
//! use KiPLOG::Kinetics::reaction_rate::ReactionRate;
//! let plog = ArrheniusPLOGRate::with_table(
//!     9.2e38, -9.43, 7000.0,
//!     vec![
//!         ArrheniusData::new(10.0, 1.5e45, -9.69, 15100.0),
//!         ArrheniusData::new(1.0, 9.5e42, -9.43, 11200.0),
//!     ],
//! ).unwrap();
//! let k = plog.rate(5.0, 1000.0);
//! let dk_dT = plog.ddT(5.0, 1000.0);
//! assert!(k > 0.0 && dk_dT.is_finite());
//! ```
use crate::Kinetics::arrhenius::ArrheniusCoeffs;
use crate::Kinetics::plog_table::{ArrheniusData, Location, PLOGTable};
use crate::Kinetics::rate_config::{ArrheniusConfig, RateContext};
use crate::Kinetics::rate_errors::RateError;
use crate::Kinetics::reaction_rate::ReactionRate;
use nalgebra::DVector;
use serde_json::{Value, json};

/// PLOG rate law: base (fallback) coefficients and the sorted breakpoint table
#[derive(Debug, Clone, PartialEq)]
pub struct ArrheniusPLOGRate {
    fallback: ArrheniusCoeffs,
    table: PLOGTable,
}

/// log-log interpolation between two rows at temperature T
struct Interpolation {
    k: f64,
    kl: f64,
    kr: f64,
    logp: f64,
    logpl: f64,
    logpr: f64,
}

impl Interpolation {
    #[inline]
    fn new(left: &ArrheniusData, right: &ArrheniusData, p: f64, T: f64) -> Self {
        let kl = left.arrhenius.K_const(T);
        let kr = right.arrhenius.K_const(T);
        let (logp, logpl, logpr) = (p.log10(), left.p.log10(), right.p.log10());
        let logk = kl.log10() + (logp - logpl) * (kr.log10() - kl.log10()) / (logpr - logpl);
        Self {
            k: 10.0_f64.powf(logk),
            kl,
            kr,
            logp,
            logpl,
            logpr,
        }
    }

    /// weights (a, b) of the left and right rows, a + b = 1:
    /// a = (log10(pr) - log10(p)) / (log10(pr) - log10(pl)),
    /// b = (log10(p) - log10(pl)) / (log10(pr) - log10(pl))
    #[inline]
    fn weights(&self) -> (f64, f64) {
        let span = self.logpr - self.logpl;
        ((self.logpr - self.logp) / span, (self.logp - self.logpl) / span)
    }
}

impl ArrheniusPLOGRate {
    /// rate law without breakpoints
    pub fn new(A: f64, beta: f64, Ta: f64) -> Self {
        Self {
            fallback: ArrheniusCoeffs::new(A, beta, Ta),
            table: PLOGTable::default(),
        }
    }
    /// rate law with breakpoints in any order; they are validated and sorted here
    pub fn with_table(
        A: f64,
        beta: f64,
        Ta: f64,
        arrhenius_data: Vec<ArrheniusData>,
    ) -> Result<Self, RateError> {
        Ok(Self {
            fallback: ArrheniusCoeffs::new(A, beta, Ta),
            table: PLOGTable::build(arrhenius_data)?,
        })
    }
    /// builds the rate law from its coefficient dictionary.
    /// An "ArrheniusData" entry that is present but empty is accepted with a warning.
    pub fn from_config(dict: &Value, ctx: &RateContext) -> Result<Self, RateError> {
        let config = ArrheniusConfig::from_value(dict)?;
        let fallback = config.coeffs(ctx)?;
        let table = match config.arrhenius_data {
            Some(arrhenius_data) => PLOGTable::build(arrhenius_data)?,
            None => PLOGTable::default(),
        };
        Ok(Self { fallback, table })
    }

    pub fn fallback(&self) -> &ArrheniusCoeffs {
        &self.fallback
    }
    pub fn table(&self) -> &PLOGTable {
        &self.table
    }

    /// rate constant at pressure p for n temperatures from T0 (included) to Tend (excluded)
    pub fn K_const_for_T_range(&self, p: f64, T0: f64, Tend: f64, n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| T0 + i as f64 * (Tend - T0) / n as f64)
            .map(|T| self.rate(p, T))
            .collect()
    }

    pub fn pretty_print(&self) {
        println!(
            "ArrheniusPLOG: A = {}, beta = {}, Ta = {}",
            self.fallback.A, self.fallback.beta, self.fallback.Ta
        );
        if !self.table.is_empty() {
            self.table.pretty_print();
        }
    }
}

impl ReactionRate for ArrheniusPLOGRate {
    fn type_name(&self) -> &'static str {
        "ArrheniusPLOG"
    }

    #[inline]
    fn rate(&self, p: f64, T: f64) -> f64 {
        match self.table.locate(p) {
            Location::Empty => self.fallback.K_const(T),
            Location::Single(entry) => entry.arrhenius.K_const(T),
            Location::Interior { left, right } => Interpolation::new(left, right, p, T).k,
            Location::Undefined => f64::NAN,
        }
    }

    /// closed forms: k*(beta + Ta/T)/T for a single row, k*(kl*b + kr*a)/(kr*kl) between rows.
    ///
    /// A pressure equal to an inner breakpoint takes the single-row form of that breakpoint.
    /// Reference PLOG implementations run the interpolation form there instead, which
    /// reduces to k/kr and differs from the value returned here.
    #[inline]
    fn ddT(&self, p: f64, T: f64) -> f64 {
        match self.table.locate(p) {
            Location::Empty => self.fallback.dK_dT(T),
            Location::Single(entry) => entry.arrhenius.dK_dT(T),
            Location::Interior { left, right } => {
                let interpolation = Interpolation::new(left, right, p, T);
                let (a, b) = interpolation.weights();
                let Interpolation { k, kl, kr, .. } = interpolation;
                k * (kl * b + kr * a) / (kr * kl)
            }
            Location::Undefined => f64::NAN,
        }
    }

    fn has_ddc(&self) -> bool {
        false
    }

    fn ddc(&self, _p: f64, _T: f64, _c: &DVector<f64>, _li: usize, ddc: &mut DVector<f64>) {
        ddc.fill(0.0);
    }

    fn write(&self, os: &mut String) {
        self.fallback.write(os);
        if !self.table.is_empty() {
            self.table.write(os);
        }
    }

    fn to_config(&self) -> Value {
        let rows: Vec<[f64; 4]> = self.table.entries().iter().map(|e| e.to_row()).collect();
        json!({
            "A": self.fallback.A,
            "beta": self.fallback.beta,
            "Ta": self.fallback.Ta,
            "ArrheniusData": rows,
        })
    }
}
