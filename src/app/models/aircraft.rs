//! Aircraft description and its category/class and gear classifications

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Category / Class
// =============================================================================

/// FAA aircraft category and class
///
/// Parsing is lenient: both the long FAA names used by ForeFlight
/// (`airplane_single_engine_land`) and the short codes (`ASEL`) are accepted,
/// and anything unrecognised is preserved in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryClass {
    AirplaneSingleEngineLand,
    AirplaneMultiEngineLand,
    AirplaneSingleEngineSea,
    AirplaneMultiEngineSea,
    Helicopter,
    Gyroplane,
    Glider,
    Other(String),
}

impl CategoryClass {
    /// Parse a category/class value from an export cell
    pub fn parse(value: &str) -> Self {
        let normalized = value.trim().to_lowercase().replace([' ', '-'], "_");

        match normalized.as_str() {
            "airplane_single_engine_land" | "asel" => Self::AirplaneSingleEngineLand,
            "airplane_multi_engine_land" | "amel" => Self::AirplaneMultiEngineLand,
            "airplane_single_engine_sea" | "ases" => Self::AirplaneSingleEngineSea,
            "airplane_multi_engine_sea" | "ames" => Self::AirplaneMultiEngineSea,
            "rotorcraft_helicopter" | "helicopter" => Self::Helicopter,
            "rotorcraft_gyroplane" | "gyroplane" | "gyrocopter" => Self::Gyroplane,
            "glider" => Self::Glider,
            _ => Self::Other(value.trim().to_string()),
        }
    }

    /// Short code used in logbook columns (ASEL, AMEL, ...)
    pub fn code(&self) -> &str {
        match self {
            Self::AirplaneSingleEngineLand => "ASEL",
            Self::AirplaneMultiEngineLand => "AMEL",
            Self::AirplaneSingleEngineSea => "ASES",
            Self::AirplaneMultiEngineSea => "AMES",
            Self::Helicopter => "RH",
            Self::Gyroplane => "RG",
            Self::Glider => "GL",
            Self::Other(raw) => raw,
        }
    }

    /// FAA long name as written by ForeFlight
    pub fn faa_name(&self) -> &str {
        match self {
            Self::AirplaneSingleEngineLand => "airplane_single_engine_land",
            Self::AirplaneMultiEngineLand => "airplane_multi_engine_land",
            Self::AirplaneSingleEngineSea => "airplane_single_engine_sea",
            Self::AirplaneMultiEngineSea => "airplane_multi_engine_sea",
            Self::Helicopter => "rotorcraft_helicopter",
            Self::Gyroplane => "rotorcraft_gyroplane",
            Self::Glider => "glider",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_asel(&self) -> bool {
        matches!(self, Self::AirplaneSingleEngineLand)
    }
}

impl From<&str> for CategoryClass {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for CategoryClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.faa_name())
    }
}

// =============================================================================
// Gear Type
// =============================================================================

/// Landing gear configuration, as far as statistics care about it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GearType {
    Tricycle,
    Tailwheel,
    /// Floats, skids, skis, amphibian and anything else the export names
    Other(String),
}

impl GearType {
    /// Parse a gear value (`fixed_tailwheel`, `retractable_tricycle`, ...)
    ///
    /// Blank cells mean tricycle.
    pub fn parse(value: &str) -> Self {
        let normalized = value.trim().to_lowercase();

        if normalized.is_empty() || normalized.contains("tricycle") {
            Self::Tricycle
        } else if normalized.contains("tailwheel") || normalized.contains("conventional") {
            Self::Tailwheel
        } else {
            Self::Other(value.trim().to_string())
        }
    }
}

impl From<&str> for GearType {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for GearType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tricycle => write!(f, "tricycle"),
            Self::Tailwheel => write!(f, "tailwheel"),
            Self::Other(raw) => write!(f, "{}", raw),
        }
    }
}

// =============================================================================
// Aircraft
// =============================================================================

/// Aircraft description from the export's aircraft table
///
/// Keyed by registration within one import and never modified once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    /// Tail number (e.g., "N12345", "C-GABC")
    pub registration: String,

    /// Type designator as exported (TypeCode column)
    pub type_code: String,

    /// ICAO type designator to check against the ICAO table, when one was recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icao_type_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    pub category_class: CategoryClass,

    pub gear_type: GearType,

    /// Complex aircraft (retractable gear, flaps, controllable-pitch propeller)
    pub complex: bool,

    /// High-performance aircraft (more than 200 horsepower)
    pub high_performance: bool,
}

impl Aircraft {
    /// Create an aircraft with tricycle gear and no complex/high-performance flags
    pub fn new(
        registration: impl Into<String>,
        type_code: impl Into<String>,
        category_class: CategoryClass,
    ) -> Self {
        Self {
            registration: registration.into(),
            type_code: type_code.into(),
            icao_type_code: None,
            make: None,
            model: None,
            category_class,
            gear_type: GearType::Tricycle,
            complex: false,
            high_performance: false,
        }
    }

    /// Builder pattern: set gear type
    pub fn with_gear(mut self, gear_type: GearType) -> Self {
        self.gear_type = gear_type;
        self
    }

    /// Builder pattern: set the ICAO type code checked by validation
    pub fn with_icao_type_code(mut self, code: impl Into<String>) -> Self {
        self.icao_type_code = Some(code.into());
        self
    }

    /// Builder pattern: set make and model
    pub fn with_make_model(mut self, make: Option<String>, model: Option<String>) -> Self {
        self.make = make;
        self.model = model;
        self
    }

    /// Builder pattern: set complex flag
    pub fn with_complex(mut self, complex: bool) -> Self {
        self.complex = complex;
        self
    }

    /// Builder pattern: set high-performance flag
    pub fn with_high_performance(mut self, high_performance: bool) -> Self {
        self.high_performance = high_performance;
        self
    }

    pub fn is_tailwheel(&self) -> bool {
        self.gear_type == GearType::Tailwheel
    }

    /// "Make Model" when known, otherwise the type code
    pub fn display_type(&self) -> String {
        match (&self.make, &self.model) {
            (Some(make), Some(model)) => format!("{} {}", make, model),
            (None, Some(model)) => model.clone(),
            _ => self.type_code.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_class_parsing() {
        assert_eq!(
            CategoryClass::parse("airplane_single_engine_land"),
            CategoryClass::AirplaneSingleEngineLand
        );
        assert_eq!(CategoryClass::parse("ASEL"), CategoryClass::AirplaneSingleEngineLand);
        assert_eq!(
            CategoryClass::parse("Airplane Multi-Engine Land"),
            CategoryClass::AirplaneMultiEngineLand
        );
        assert_eq!(CategoryClass::parse("ases"), CategoryClass::AirplaneSingleEngineSea);
        assert_eq!(CategoryClass::parse("AMES"), CategoryClass::AirplaneMultiEngineSea);
        assert_eq!(
            CategoryClass::parse("rotorcraft_helicopter"),
            CategoryClass::Helicopter
        );
        assert_eq!(CategoryClass::parse("gyroplane"), CategoryClass::Gyroplane);
        assert_eq!(CategoryClass::parse("glider"), CategoryClass::Glider);
        assert_eq!(
            CategoryClass::parse(" lighter_than_air "),
            CategoryClass::Other("lighter_than_air".to_string())
        );
    }

    #[test]
    fn test_category_class_codes() {
        assert_eq!(CategoryClass::AirplaneSingleEngineLand.code(), "ASEL");
        assert!(CategoryClass::AirplaneSingleEngineLand.is_asel());
        assert!(!CategoryClass::AirplaneMultiEngineLand.is_asel());
        assert_eq!(
            CategoryClass::AirplaneMultiEngineSea.to_string(),
            "airplane_multi_engine_sea"
        );
    }

    #[test]
    fn test_gear_type_parsing() {
        assert_eq!(GearType::parse("fixed_tailwheel"), GearType::Tailwheel);
        assert_eq!(GearType::parse("retractable_tailwheel"), GearType::Tailwheel);
        assert_eq!(GearType::parse("fixed_tricycle"), GearType::Tricycle);
        assert_eq!(GearType::parse(""), GearType::Tricycle);
        assert_eq!(GearType::parse("floats"), GearType::Other("floats".to_string()));
    }

    #[test]
    fn test_aircraft_builder() {
        let aircraft = Aircraft::new("N125CM", "CH7A", CategoryClass::AirplaneSingleEngineLand)
            .with_gear(GearType::Tailwheel)
            .with_icao_type_code("CH7A")
            .with_make_model(Some("Bellanca".to_string()), Some("7ECA".to_string()))
            .with_complex(false)
            .with_high_performance(false);

        assert!(aircraft.is_tailwheel());
        assert_eq!(aircraft.icao_type_code.as_deref(), Some("CH7A"));
        assert_eq!(aircraft.display_type(), "Bellanca 7ECA");
    }
}
