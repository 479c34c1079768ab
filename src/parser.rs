// 🏗️ Input Parser
// Turns raw console lines into menu choices and unvalidated appliance records

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// MENU CHOICE
// ============================================================================

/// MenuChoice - Identifica qué acción pidió el usuario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    View,
    Exit,
    Invalid,
}

impl MenuChoice {
    /// Parse one console line into a menu choice.
    ///
    /// Anything that is not exactly 1, 2 or 3 - including non-numeric
    /// input - lands on Invalid, so a garbled line re-prompts instead of
    /// crashing or wedging the loop.
    pub fn parse(input: &str) -> MenuChoice {
        match input.trim().parse::<i64>() {
            Ok(1) => MenuChoice::Register,
            Ok(2) => MenuChoice::View,
            Ok(3) => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

// ============================================================================
// RAW APPLIANCE
// ============================================================================

/// RawAppliance - Output of parse_appliance_line()
/// La representación "cruda" antes de validar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAppliance {
    pub name: String,
    pub power_rating: f64,
    pub daily_usage_hours: f64,

    /// Original line for debugging
    pub raw_line: String,
}

/// Parse one registration line into a RawAppliance.
///
/// The line must carry exactly three whitespace-separated tokens:
/// name, power rating (W), daily usage hours. Numeric parsing happens
/// here; range checking belongs to the schema layer.
pub fn parse_appliance_line(line: &str) -> Result<RawAppliance> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    if tokens.len() != 3 {
        bail!(
            "expected 3 fields (name, power, hours), got {}",
            tokens.len()
        );
    }

    let power_rating: f64 = tokens[1]
        .parse()
        .with_context(|| format!("power rating is not a number: {}", tokens[1]))?;

    let daily_usage_hours: f64 = tokens[2]
        .parse()
        .with_context(|| format!("usage hours is not a number: {}", tokens[2]))?;

    Ok(RawAppliance {
        name: tokens[0].to_string(),
        power_rating,
        daily_usage_hours,
        raw_line: line.trim_end().to_string(),
    })
}

// ============================================================================
// TESTS
// ============================================================================
