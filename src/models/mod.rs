//! # Data Model
//!
//! Roster records and the group types the allocators populate.

pub mod destination;
pub mod record;
pub mod team;

pub use destination::{CategoryCounts, DestinationGroup};
pub use record::{AssignedRecord, Record};
pub use team::Team;
