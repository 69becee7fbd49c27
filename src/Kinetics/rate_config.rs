//! Configuration payloads of the rate laws.
//!
//! Rate coefficients arrive as an already parsed `serde_json::Value` object, e.g.
//! ```json
//! {
//!     "type": "ArrheniusPLOG",
//!     "A": 9.2e38, "beta": -9.43, "Ta": 7000.0,
//!     "ArrheniusData": [[0.1, 9.2e38, -8.65, 7000.0], [1.0, 9.5e42, -9.43, 11200.0]]
//! }
//! ```
//! "Ta" may be replaced by a molar activation energy "Ea", converted with the gas constant
//! carried by [`RateContext`].
use crate::Kinetics::arrhenius::ArrheniusCoeffs;
use crate::Kinetics::plog_table::ArrheniusData;
use crate::Kinetics::rate_errors::RateError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// universal gas constant, J/(mol K)
pub const R_J_PER_MOL_K: f64 = 8.314462618;

/// physical constants needed while building rate laws from configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateContext {
    /// gas constant in the energy units of "Ea" per mole unit and K
    pub gas_constant: f64,
}

impl RateContext {
    pub fn new(gas_constant: f64) -> Self {
        Self { gas_constant }
    }
    /// context for "Ea" given in J/kmol
    pub fn per_kmol() -> Self {
        Self {
            gas_constant: 1000.0 * R_J_PER_MOL_K,
        }
    }
}

impl Default for RateContext {
    fn default() -> Self {
        Self {
            gas_constant: R_J_PER_MOL_K,
        }
    }
}

/// raw coefficient dictionary. Every key is optional at this level, required keys are
/// checked by [`ArrheniusConfig::coeffs`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArrheniusConfig {
    pub A: Option<f64>,
    pub beta: Option<f64>,
    pub Ta: Option<f64>,
    pub Ea: Option<f64>,
    #[serde(rename = "ArrheniusData", default)]
    pub arrhenius_data: Option<Vec<ArrheniusData>>,
}

impl ArrheniusConfig {
    pub fn from_value(dict: &Value) -> Result<Self, RateError> {
        Ok(Self::deserialize(dict)?)
    }
    /// the base Arrhenius triplet. "Ta" wins over "Ea" when both are given
    pub fn coeffs(&self, ctx: &RateContext) -> Result<ArrheniusCoeffs, RateError> {
        let A = self.A.ok_or_else(|| RateError::MissingKey("A".to_string()))?;
        let beta = self
            .beta
            .ok_or_else(|| RateError::MissingKey("beta".to_string()))?;
        let Ta = match (self.Ta, self.Ea) {
            (Some(Ta), _) => Ta,
            (None, Some(Ea)) => Ea / ctx.gas_constant,
            (None, None) => return Err(RateError::MissingKey("Ta".to_string())),
        };
        Ok(ArrheniusCoeffs::new(A, beta, Ta))
    }
}
