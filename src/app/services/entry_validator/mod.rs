//! Entry consistency validation
//!
//! Cross-checks times, role, landings and route of each entry against FAA
//! logging rules. Violations become diagnostics on the entry; they never
//! fail the batch.
//!
//! - [`validator`] - The rule set and the `EntryValidator` service
//! - [`route_evidence`] - Route and distance heuristics for cross-country checks
//! - [`designators`] - ICAO type designator lookup

pub mod designators;
pub mod route_evidence;
pub mod validator;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use designators::{DesignatorInfo, IcaoDesignatorTable, TypeDesignatorLookup};
pub use validator::EntryValidator;
