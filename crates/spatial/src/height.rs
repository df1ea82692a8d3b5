use serde::{Deserialize, Serialize};

const METERS_PER_INCH: f64 = 0.0254;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    Inches,
    Centimeters,
}

/// A person's real-world height, used to give the skeleton metric scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Height {
    pub value: f64,
    pub unit: HeightUnit,
}

impl Height {
    pub fn centimeters(value: f64) -> Self {
        Self {
            value,
            unit: HeightUnit::Centimeters,
        }
    }

    pub fn inches(value: f64) -> Self {
        Self {
            value,
            unit: HeightUnit::Inches,
        }
    }

    pub fn to_meters(self) -> f64 {
        match self.unit {
            HeightUnit::Inches => self.value * METERS_PER_INCH,
            HeightUnit::Centimeters => self.value / 100.0,
        }
    }
}

impl Default for Height {
    fn default() -> Self {
        Height::centimeters(175.0)
    }
}
