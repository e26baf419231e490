//! Data models for logbook processing
//!
//! This module contains the core data structures for representing aircraft,
//! flight entries and the derived records each processing stage produces.
//!
//! An entry moves through three types, one per stage:
//!
//! - [`LogbookEntry`] - built by the parser, structurally valid, not yet checked
//! - [`ValidatedEntry`] - the entry plus the diagnostics produced by the validator
//! - [`AggregatedEntry`] - a validated entry plus its immutable running-totals snapshot
//!
//! Only the validator constructs a `ValidatedEntry` and only the accumulator
//! constructs an `AggregatedEntry`, so the order of the stages is enforced by
//! the types rather than by convention.

pub mod aircraft;
pub mod endorsement;
pub mod entry;
pub mod pipeline;

pub use aircraft::{Aircraft, CategoryClass, GearType};
pub use endorsement::InstructorEndorsement;
pub use entry::{Airport, FlightConditions, LogbookEntry, LogbookEntryBuilder, PilotRole};
pub use pipeline::{AggregatedEntry, Diagnostics, RunningTotals, ValidatedEntry};
