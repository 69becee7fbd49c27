use crate::Kinetics::rate_config::RateContext;
use crate::Kinetics::rate_errors::RateError;
use crate::Kinetics::reaction_rate::{ReactionRateEnum, create_rate_from_dict};
use log::{error, info, warn};
use serde_json::Value;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub struct LoadData {
    pub file_name: String,
}

impl LoadData {
    pub fn new(file_name: String) -> Self {
        LoadData { file_name }
    }
    pub fn load_kinetics(&self) -> Result<HashMap<String, Value>, RateError> {
        load_kinetics_from_file(&self.file_name)
    }
    pub fn load_rates(&self, ctx: &RateContext) -> Result<HashMap<String, ReactionRateEnum>, RateError> {
        load_rates_from_file(&self.file_name, ctx)
    }
}

/// Parses a document for rate coefficients under the "KINETICS" or "REACTIONS" header.
/// The section is a JSON object {reaction name: coefficient dictionary} and lasts until the
/// next header (a line of capitals and underscores) or the end of the document.
pub fn load_kinetics_from_file(file_name: &str) -> Result<HashMap<String, Value>, RateError> {
    let path = Path::new(file_name);
    if !path.exists() {
        return Err(RateError::FileNotFound(file_name.to_string()));
    }
    let reader = BufReader::new(File::open(path)?);
    let lines: Vec<String> = reader.lines().collect::<Result<_, _>>()?;

    let start_index = lines
        .iter()
        .position(|line| {
            let trimmed = line.trim().to_uppercase();
            trimmed == "KINETICS" || trimmed == "REACTIONS"
        })
        .map(|i| i + 1)
        .ok_or_else(|| RateError::NoKineticsHeader(file_name.to_string()))?;

    let end_index = lines[start_index..]
        .iter()
        .position(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && trimmed.chars().all(|c| c.is_uppercase() || c == '_')
        })
        .map_or(lines.len(), |i| start_index + i);

    let kinetics_section = lines[start_index..end_index].join("\n");
    match serde_json::from_str::<HashMap<String, Value>>(&kinetics_section) {
        Ok(data) => {
            info!("Successfully parsed kinetics data from file '{}'", file_name);
            Ok(data)
        }
        Err(e) => {
            let actual_line = start_index + e.line().saturating_sub(1);
            error!(
                "Error parsing kinetics data at line {}, column {} (line {} in file): {}",
                e.line(),
                e.column(),
                actual_line + 1,
                e
            );
            if let Some(problem_line) = lines.get(actual_line) {
                error!("Problematic line: {}", problem_line);
                if e.column() >= 1 && e.column() <= problem_line.len() {
                    error!("{}^", " ".repeat(e.column() - 1));
                }
            }
            Err(RateError::Serde(e))
        }
    }
}

/// loads the section and builds every rate law through the factory, using the "type" entry
/// of each reaction
pub fn load_rates_from_file(
    file_name: &str,
    ctx: &RateContext,
) -> Result<HashMap<String, ReactionRateEnum>, RateError> {
    let kinetics_data = load_kinetics_from_file(file_name)?;
    if kinetics_data.is_empty() {
        warn!("Loaded kinetics data is empty");
    }
    let mut rates = HashMap::with_capacity(kinetics_data.len());
    for (reaction_name, dict) in kinetics_data {
        let rate = create_rate_from_dict(&dict, ctx).inspect_err(|e| {
            error!("Reaction '{}': {}", reaction_name, e);
        })?;
        rates.insert(reaction_name, rate);
    }
    info!("Loaded {} rate laws from file '{}'", rates.len(), file_name);
    Ok(rates)
}
