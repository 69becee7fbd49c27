//! Arrhenius kernel `k = A * T^beta * exp(-Ta/T)` shared by every rate law of the crate,
//! and the plain (pressure independent) Arrhenius rate law built on it.
use crate::Kinetics::rate_config::{ArrheniusConfig, RateContext};
use crate::Kinetics::rate_errors::RateError;
use crate::Kinetics::reaction_rate::ReactionRate;
use nalgebra::DVector;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt::Write;

/// exponents with magnitude below this are treated as zero and their factor is skipped
pub const VSMALL: f64 = 1.0e-300;

/// Arrhenius coefficients: pre-exponential factor, temperature exponent and activation
/// temperature (K)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrheniusCoeffs {
    pub A: f64,
    pub beta: f64,
    pub Ta: f64,
}

impl ArrheniusCoeffs {
    pub fn new(A: f64, beta: f64, Ta: f64) -> Self {
        Self { A, beta, Ta }
    }
    /// rate constant at temperature T (K).
    /// The power and exponential factors are only multiplied in when beta or Ta are
    /// nonzero, T^0 and exp(0) being exactly 1.
    #[inline]
    pub fn K_const(&self, T: f64) -> f64 {
        let mut k = self.A;
        if self.beta.abs() > VSMALL {
            k *= T.powf(self.beta);
        }
        if self.Ta.abs() > VSMALL {
            k *= (-self.Ta / T).exp();
        }
        k
    }
    /// dk/dT given the already computed k = K_const(T)
    #[inline]
    pub fn dK_dT_from(&self, k: f64, T: f64) -> f64 {
        k * (self.beta + self.Ta / T) / T
    }
    #[inline]
    pub fn dK_dT(&self, T: f64) -> f64 {
        self.dK_dT_from(self.K_const(T), T)
    }
    /// writes the three scalar entries "A", "beta", "Ta"
    pub fn write(&self, os: &mut String) {
        let _ = writeln!(os, "A {:?};", self.A);
        let _ = writeln!(os, "beta {:?};", self.beta);
        let _ = writeln!(os, "Ta {:?};", self.Ta);
    }
}

/////////////////////////ARRHENIUS RATE LAW///////////////////////////////////////////////
/// pressure independent rate law with one set of Arrhenius coefficients
#[derive(Debug, Clone, PartialEq)]
pub struct ArrheniusRate {
    pub coeffs: ArrheniusCoeffs,
}

impl ArrheniusRate {
    pub fn new(A: f64, beta: f64, Ta: f64) -> Self {
        Self {
            coeffs: ArrheniusCoeffs::new(A, beta, Ta),
        }
    }
    /// reads "A", "beta" and "Ta" (or "Ea") from the coefficient dictionary
    pub fn from_config(dict: &Value, ctx: &RateContext) -> Result<Self, RateError> {
        let config = ArrheniusConfig::from_value(dict)?;
        Ok(Self {
            coeffs: config.coeffs(ctx)?,
        })
    }
}

impl ReactionRate for ArrheniusRate {
    fn type_name(&self) -> &'static str {
        "Arrhenius"
    }
    fn rate(&self, _p: f64, T: f64) -> f64 {
        self.coeffs.K_const(T)
    }
    fn ddT(&self, _p: f64, T: f64) -> f64 {
        self.coeffs.dK_dT(T)
    }
    fn has_ddc(&self) -> bool {
        false
    }
    fn ddc(&self, _p: f64, _T: f64, _c: &DVector<f64>, _li: usize, ddc: &mut DVector<f64>) {
        ddc.fill(0.0);
    }
    fn write(&self, os: &mut String) {
        self.coeffs.write(os);
    }
    fn to_config(&self) -> Value {
        json!({
            "A": self.coeffs.A,
            "beta": self.coeffs.beta,
            "Ta": self.coeffs.Ta,
        })
    }
}
