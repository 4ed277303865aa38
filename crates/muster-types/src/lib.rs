//! Shared type definitions for the Muster campaign planner.
//!
//! This crate is the single source of truth for the types that cross crate
//! boundaries in the Muster workspace: entity identifiers, the entity
//! structs themselves, partial-update patches, and the [`ModelEvent`] enum
//! describing committed state transitions.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe integer wrappers for all entity identifiers
//! - [`entities`] -- Core entity structs (campaign, day, event, pupil)
//! - [`patch`] -- Partial-update payloads with per-field presence
//! - [`events`] -- Committed state transitions for durability and replay

pub mod entities;
pub mod events;
pub mod ids;
pub mod patch;

// Re-export all public types at crate root for convenience.
pub use entities::{Campaign, Day, Event, Pupil};
pub use events::{CreatedDay, ModelEvent};
pub use ids::{CampaignId, DayId, EventId, PupilId};
pub use patch::{EventPatch, PupilPatch};
