//! Aircraft registry for tail-number lookups during one import
//!
//! The registry is built from the export's aircraft table, keyed by
//! registration, and handed explicitly to the row parser. Flights naming an
//! aircraft the table does not list get a lenient default description unless
//! the registry is strict.

use crate::app::models::{Aircraft, CategoryClass, GearType};
use crate::config::ImportConfig;
use crate::{Error, Result};
use std::collections::HashMap;

pub mod loader;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use loader::{LoadStats, parse_aircraft_record};

/// Aircraft registry providing O(1) lookups by registration
#[derive(Debug, Clone)]
pub struct AircraftRegistry {
    /// Aircraft indexed by registration
    pub(crate) aircraft: HashMap<String, Aircraft>,

    /// Registrations in first-seen order
    pub(crate) order: Vec<String>,

    /// Description template for unlisted aircraft
    pub(crate) default_type: String,
    pub(crate) default_category: CategoryClass,
    pub(crate) default_gear: GearType,

    /// Reject unlisted aircraft instead of defaulting them
    pub(crate) strict: bool,
}

impl AircraftRegistry {
    /// Create a new empty registry using the import defaults
    pub fn new(config: &ImportConfig) -> Self {
        Self {
            aircraft: HashMap::new(),
            order: Vec::new(),
            default_type: config.default_aircraft_type.clone(),
            default_category: CategoryClass::parse(&config.default_category_class),
            default_gear: GearType::parse(&config.default_gear_type),
            strict: config.strict_aircraft,
        }
    }

    /// Build a registry from already constructed aircraft
    pub fn from_aircraft<I>(aircraft: I, config: &ImportConfig) -> Self
    where
        I: IntoIterator<Item = Aircraft>,
    {
        let mut registry = Self::new(config);
        for entry in aircraft {
            registry.insert(entry);
        }
        registry
    }

    /// Register an aircraft; the first description of a registration wins
    ///
    /// Returns false when the registration was already present.
    pub fn insert(&mut self, aircraft: Aircraft) -> bool {
        if self.aircraft.contains_key(&aircraft.registration) {
            return false;
        }
        self.order.push(aircraft.registration.clone());
        self.aircraft
            .insert(aircraft.registration.clone(), aircraft);
        true
    }

    /// Get an aircraft by registration (O(1) lookup)
    pub fn get(&self, registration: &str) -> Option<&Aircraft> {
        self.aircraft.get(registration)
    }

    /// Check if an aircraft exists in the registry
    pub fn contains(&self, registration: &str) -> bool {
        self.aircraft.contains_key(registration)
    }

    pub fn len(&self) -> usize {
        self.aircraft.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aircraft.is_empty()
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Aircraft in the order they were first registered
    pub fn iter(&self) -> impl Iterator<Item = &Aircraft> {
        self.order
            .iter()
            .filter_map(|registration| self.aircraft.get(registration))
    }

    /// Default description for an aircraft the table does not list
    pub fn default_aircraft(&self, registration: &str) -> Aircraft {
        Aircraft::new(
            registration,
            self.default_type.clone(),
            self.default_category.clone(),
        )
        .with_gear(self.default_gear.clone())
    }

    /// Look up an aircraft, falling back to the default description
    ///
    /// # Errors
    /// Returns `Error::UnknownAircraft` for an unlisted, non-empty registration
    /// when the registry is strict.
    pub fn resolve(&self, registration: &str) -> Result<Aircraft> {
        if let Some(aircraft) = self.get(registration) {
            return Ok(aircraft.clone());
        }

        if self.strict && !registration.is_empty() {
            return Err(Error::unknown_aircraft(registration));
        }

        Ok(self.default_aircraft(registration))
    }
}

impl Default for AircraftRegistry {
    fn default() -> Self {
        Self::new(&ImportConfig::default())
    }
}
