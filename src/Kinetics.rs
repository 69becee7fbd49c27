/// eng
/// Arrhenius kernel k = A*T^beta*exp(-Ta/T) and its temperature derivative,
/// and the plain Arrhenius rate law
pub mod arrhenius;
/// PLOG breakpoint table: validation, sorting by pressure and bracket search.
/// Text form of the rows is (p A beta Ta)
///
///  # Examples
/// ```
/// use KiPLOG::Kinetics::plog_table::{ArrheniusData, Location, PLOGTable};
/// let table = PLOGTable::build(vec![
///     ArrheniusData::new(10.0, 1.5e45, -9.69, 15100.0),
///     ArrheniusData::new(1.0, 9.5e42, -9.43, 11200.0),
/// ]).unwrap();
/// assert_eq!(table.entries()[0].p, 1.0);
/// assert!(matches!(table.locate(5.0), Location::Interior { .. }));
/// ```
pub mod plog_table;
/// Pressure dependent Arrhenius rate law: log-log interpolation of the rate constant
/// between breakpoint pressures
pub mod plog_rate;
/// Coefficient dictionaries (A, beta, Ta or Ea, ArrheniusData) and the physical constants
/// used to read them
pub mod rate_config;
/// Errors of rate law construction and loading
pub mod rate_errors;
/// ReactionRate interface, the closed set of rate law kinds and the factory selecting a
/// rate law by its type name
///
///  # Examples
/// ```
/// use KiPLOG::Kinetics::rate_config::RateContext;
/// use KiPLOG::Kinetics::reaction_rate::{create_rate_by_name, ReactionRate};
/// use serde_json::json;
/// let dict = json!({"A": 1.0e10, "beta": 0.0, "Ea": 8.314462618e4,
///                   "ArrheniusData": [[1.0, 1.0e10, 0.0, 1.0e4], [10.0, 1.0e11, 0.0, 1.0e4]]});
/// let rate = create_rate_by_name("ArrheniusPLOG", &dict, &RateContext::default()).unwrap();
/// assert!(rate.rate(3.0, 1000.0) > 0.0);
/// assert!(!rate.has_ddc());
/// ```
pub mod reaction_rate;
mod plog_tests;
