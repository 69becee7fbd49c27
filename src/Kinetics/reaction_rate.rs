//! Common interface of the rate laws and the factory that picks a rate law by its type
//! name when reaction coefficients are read from configuration.
use crate::Kinetics::arrhenius::ArrheniusRate;
use crate::Kinetics::plog_rate::ArrheniusPLOGRate;
use crate::Kinetics::rate_config::RateContext;
use crate::Kinetics::rate_errors::RateError;
use enum_dispatch::enum_dispatch;
use nalgebra::DVector;
use serde_json::Value;

/// interface a chemistry solver uses to evaluate a reaction rate coefficient.
/// Pressure in the units of the breakpoints, temperature in K.
#[enum_dispatch]
pub trait ReactionRate {
    /// type name used to select the rate law in configuration
    fn type_name(&self) -> &'static str;
    /// hook called once before a sweep of evaluations
    fn pre_evaluate(&self) {}
    /// hook called once after a sweep of evaluations
    fn post_evaluate(&self) {}
    /// rate coefficient k(p, T)
    fn rate(&self, p: f64, T: f64) -> f64;
    /// temperature derivative dk/dT at (p, T)
    fn ddT(&self, p: f64, T: f64) -> f64;
    /// does the rate depend on species concentrations
    fn has_ddc(&self) -> bool;
    /// derivative of the rate with respect to concentrations c, written to ddc;
    /// li is the cell index of the host solver
    fn ddc(&self, p: f64, T: f64, c: &DVector<f64>, li: usize, ddc: &mut DVector<f64>);
    /// rates for a field of cells, out[i] = k(p[i], T[i])
    fn rate_field(&self, p: &DVector<f64>, T: &DVector<f64>, out: &mut DVector<f64>) {
        for ((out_i, p_i), T_i) in out.iter_mut().zip(p.iter()).zip(T.iter()) {
            *out_i = self.rate(*p_i, *T_i);
        }
    }
    /// temperature derivatives for a field of cells
    fn ddT_field(&self, p: &DVector<f64>, T: &DVector<f64>, out: &mut DVector<f64>) {
        for ((out_i, p_i), T_i) in out.iter_mut().zip(p.iter()).zip(T.iter()) {
            *out_i = self.ddT(*p_i, *T_i);
        }
    }
    /// text form of the coefficients
    fn write(&self, os: &mut String);
    /// coefficients as a configuration dictionary, readable by the factory again
    fn to_config(&self) -> Value;
}

#[derive(Debug, Clone, PartialEq)]
#[enum_dispatch(ReactionRate)]
pub enum ReactionRateEnum {
    Arrhenius(ArrheniusRate),
    ArrheniusPLOG(ArrheniusPLOGRate),
}

/// known rate law kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateType {
    Arrhenius,
    ArrheniusPLOG,
}

impl RateType {
    pub fn from_name(name: &str) -> Result<Self, RateError> {
        match name {
            "Arrhenius" | "arrhenius" | "elem" => Ok(RateType::Arrhenius),
            "ArrheniusPLOG" | "PLOG" | "plog" | "pres" | "pressure" => {
                Ok(RateType::ArrheniusPLOG)
            }
            _ => Err(RateError::UnknownRateType(name.to_string())),
        }
    }
    pub fn name(&self) -> &'static str {
        match self {
            RateType::Arrhenius => "Arrhenius",
            RateType::ArrheniusPLOG => "ArrheniusPLOG",
        }
    }
}

pub fn create_rate(
    kind: RateType,
    dict: &Value,
    ctx: &RateContext,
) -> Result<ReactionRateEnum, RateError> {
    match kind {
        RateType::Arrhenius => Ok(ArrheniusRate::from_config(dict, ctx)?.into()),
        RateType::ArrheniusPLOG => Ok(ArrheniusPLOGRate::from_config(dict, ctx)?.into()),
    }
}

pub fn create_rate_by_name(
    name: &str,
    dict: &Value,
    ctx: &RateContext,
) -> Result<ReactionRateEnum, RateError> {
    create_rate(RateType::from_name(name)?, dict, ctx)
}

/// the rate law is selected by the "type" entry of the dictionary itself
pub fn create_rate_from_dict(dict: &Value, ctx: &RateContext) -> Result<ReactionRateEnum, RateError> {
    let name = dict
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| RateError::MissingKey("type".to_string()))?;
    create_rate_by_name(name, dict, ctx)
}
