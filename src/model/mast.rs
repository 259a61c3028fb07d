use std::fmt;

use serde::{Deserialize, Serialize};

use super::validation::{ValidationError, parse_measurement};

/// Structural parameters of one mast model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MastRecord {
    /// Key. Matched exactly, case included.
    pub mast_model: String,
    pub self_weight: f64,
    pub mast_height: f64,
    pub mast_wind_area: f64,
}

impl MastRecord {
    /// Number of measurement values (the key is not counted).
    pub const MEASUREMENT_COUNT: usize = 3;

    /// Display labels in storage order, key first.
    pub const LABELS: [&'static str; Self::MEASUREMENT_COUNT + 1] =
        ["Mast model", "Self weight", "Mast height", "Mast wind area"];

    pub fn new(
        mast_model: impl Into<String>,
        self_weight: f64,
        mast_height: f64,
        mast_wind_area: f64,
    ) -> Self {
        Self {
            mast_model: mast_model.into(),
            self_weight,
            mast_height,
            mast_wind_area,
        }
    }

    /// Parses form text. The model name is taken verbatim.
    pub fn from_fields(
        mast_model: &str,
        measurements: [&str; Self::MEASUREMENT_COUNT],
    ) -> Result<Self, ValidationError> {
        let [self_weight, mast_height, mast_wind_area] = measurements;
        Ok(Self::new(
            mast_model,
            parse_measurement(Self::LABELS[1], self_weight)?,
            parse_measurement(Self::LABELS[2], mast_height)?,
            parse_measurement(Self::LABELS[3], mast_wind_area)?,
        ))
    }

    /// Returns the measurements in storage order.
    pub fn values(&self) -> [f64; Self::MEASUREMENT_COUNT] {
        [self.self_weight, self.mast_height, self.mast_wind_area]
    }
}

#[mutants::skip]
impl fmt::Display for MastRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", Self::LABELS[0], self.mast_model)?;
        for (label, value) in Self::LABELS[1..].iter().zip(self.values()) {
            write!(f, "\n{label}: {value:?}")?;
        }
        Ok(())
    }
}
