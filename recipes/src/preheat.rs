use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Oven preheat temperature as stored. The unit is kept as the raw stored
/// string and only validated when rendered, so a record with an unrecognized
/// unit still renders its temperature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preheat {
    pub temperature: u32,
    pub unit: String,
}

impl Preheat {
    pub fn unit(&self) -> Option<TempUnit> {
        self.unit.parse().ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempUnit {
    Fahrenheit,
    Celsius,
}

#[derive(Debug, thiserror::Error)]
#[error("unrecognized temperature unit: {0}")]
pub struct UnknownUnit(String);

impl FromStr for TempUnit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The original meta boxes stored the misspelled forms, so both are
        // accepted here.
        match s.to_ascii_lowercase().as_str() {
            "fahrenheit" | "farenheit" => Ok(TempUnit::Fahrenheit),
            "celsius" | "celcius" => Ok(TempUnit::Celsius),
            _ => Err(UnknownUnit(s.to_string())),
        }
    }
}

impl fmt::Display for TempUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TempUnit::Fahrenheit => f.write_str("Fahrenheit"),
            TempUnit::Celsius => f.write_str("Celsius"),
        }
    }
}
