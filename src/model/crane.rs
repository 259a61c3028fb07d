use std::fmt;

use serde::{Deserialize, Serialize};

use super::validation::{ValidationError, parse_measurement};

/// Load parameters of one crane model at one jib length.
///
/// `jib_length` is the key; the other eleven fields are the measurements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CraneRecord {
    pub jib_length: f64,
    pub in_service_moment: f64,
    pub in_service_vertical_force: f64,
    pub in_service_horizontal_force: f64,
    pub out_of_service_moment: f64,
    pub out_of_service_vertical_force: f64,
    pub out_of_service_horizontal_force: f64,
    pub number_of_falls: f64,
    pub tip_load: f64,
    pub max_load_radius: f64,
    pub wind_area: f64,
    pub delta_h: f64,
}

impl CraneRecord {
    /// Number of stored values, key included.
    pub const FIELD_COUNT: usize = 12;

    /// Display labels in storage order.
    pub const LABELS: [&'static str; Self::FIELD_COUNT] = [
        "Jib length",
        "In-service moment",
        "In-service vertical force",
        "In-service horizontal force",
        "Out-of-service moment",
        "Out-of-service vertical force",
        "Out-of-service horizontal force",
        "Number of falls",
        "Tip load",
        "Max load radius",
        "Wind area",
        "Delta_h",
    ];

    /// Builds a record from values in storage order (key first).
    pub fn from_values(values: [f64; Self::FIELD_COUNT]) -> Self {
        let [
            jib_length,
            in_service_moment,
            in_service_vertical_force,
            in_service_horizontal_force,
            out_of_service_moment,
            out_of_service_vertical_force,
            out_of_service_horizontal_force,
            number_of_falls,
            tip_load,
            max_load_radius,
            wind_area,
            delta_h,
        ] = values;
        Self {
            jib_length,
            in_service_moment,
            in_service_vertical_force,
            in_service_horizontal_force,
            out_of_service_moment,
            out_of_service_vertical_force,
            out_of_service_horizontal_force,
            number_of_falls,
            tip_load,
            max_load_radius,
            wind_area,
            delta_h,
        }
    }

    /// Parses form text in storage order (key first).
    ///
    /// Fails on the first field that is not a finite number; nothing is
    /// returned for the other fields.
    pub fn from_fields(fields: [&str; Self::FIELD_COUNT]) -> Result<Self, ValidationError> {
        let mut values = [0.0; Self::FIELD_COUNT];
        for ((value, label), text) in values.iter_mut().zip(Self::LABELS).zip(fields) {
            *value = parse_measurement(label, text)?;
        }
        Ok(Self::from_values(values))
    }

    /// Returns all values in storage order (key first).
    pub fn values(&self) -> [f64; Self::FIELD_COUNT] {
        [
            self.jib_length,
            self.in_service_moment,
            self.in_service_vertical_force,
            self.in_service_horizontal_force,
            self.out_of_service_moment,
            self.out_of_service_vertical_force,
            self.out_of_service_horizontal_force,
            self.number_of_falls,
            self.tip_load,
            self.max_load_radius,
            self.wind_area,
            self.delta_h,
        ]
    }
}

/// One `Label: value` line per field.
#[mutants::skip]
impl fmt::Display for CraneRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self.values();
        write!(f, "{}: {:?}", Self::LABELS[0], values[0])?;
        for (label, value) in Self::LABELS[1..].iter().zip(&values[1..]) {
            write!(f, "\n{label}: {value:?}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_values() -> [f64; CraneRecord::FIELD_COUNT] {
        [
            30.0, 1250.0, 410.5, 32.0, 1480.0, 395.0, 61.25, 2.0, 3.4, 29.5, 41.0, 0.75,
        ]
    }

    #[test]
    fn values_follow_storage_order() {
        let record = CraneRecord::from_values(sample_values());
        assert_eq!(record.jib_length, 30.0);
        assert_eq!(record.in_service_moment, 1250.0);
        assert_eq!(record.out_of_service_horizontal_force, 61.25);
        assert_eq!(record.number_of_falls, 2.0);
        assert_eq!(record.delta_h, 0.75);
        assert_eq!(record.values(), sample_values());
    }

    #[test]
    fn from_fields_parses_all() {
        let record = CraneRecord::from_fields([
            "30", "1250", "410.5", "32", "1480", "395", "61.25", "2", "3.4", "29.5", "41", " 0.75 ",
        ])
        .unwrap();
        assert_eq!(record, CraneRecord::from_values(sample_values()));
    }

    #[test]
    fn from_fields_reports_offending_field() {
        let result = CraneRecord::from_fields([
            "30", "1250", "410.5", "32", "1480", "395", "61.25", "two", "3.4", "29.5", "41", "0.75",
        ]);
        assert_eq!(
            result,
            Err(ValidationError::NotNumeric {
                field: "Number of falls",
                value: "two".to_string(),
            })
        );
    }

    #[test]
    fn from_fields_rejects_blank_key() {
        let result = CraneRecord::from_fields([
            "", "1", "1", "1", "1", "1", "1", "1", "1", "1", "1", "1",
        ]);
        assert!(matches!(
            result,
            Err(ValidationError::NotNumeric {
                field: "Jib length",
                ..
            })
        ));
    }

    #[test]
    fn display_renders_labeled_lines() {
        let record = CraneRecord::from_values(sample_values());
        insta::assert_snapshot!(record.to_string(), @r"
        Jib length: 30.0
        In-service moment: 1250.0
        In-service vertical force: 410.5
        In-service horizontal force: 32.0
        Out-of-service moment: 1480.0
        Out-of-service vertical force: 395.0
        Out-of-service horizontal force: 61.25
        Number of falls: 2.0
        Tip load: 3.4
        Max load radius: 29.5
        Wind area: 41.0
        Delta_h: 0.75
        ");
    }

    #[test]
    fn serde_round_trip() {
        let record = CraneRecord::from_values(sample_values());
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: CraneRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
