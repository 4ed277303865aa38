//! Error types for the `muster-model` crate.
//!
//! All fallible operations in this crate return [`ModelError`] through the
//! standard [`Result`] type alias. The `*NotFound` variants are ordinary
//! per-call failures; [`ModelError::ForeignDay`] rejects referential
//! violations before any mutation is applied; [`ModelError::IdCollision`]
//! only ever surfaces when applying a corrupt or out-of-order event log.

use muster_types::{CampaignId, DayId, EventId, PupilId};

/// Errors that can occur during model reads, mutator validation, or event
/// application.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// A campaign was not found in the model.
    #[error("campaign not found: {0}")]
    CampaignNotFound(CampaignId),

    /// A day was not found in the model.
    #[error("day not found: {0}")]
    DayNotFound(DayId),

    /// An event was not found in the model.
    #[error("event not found: {0}")]
    EventNotFound(EventId),

    /// A pupil was not found in the model.
    #[error("pupil not found: {0}")]
    PupilNotFound(PupilId),

    /// An event referenced a day belonging to a different campaign.
    #[error("day {day} does not belong to campaign {campaign}")]
    ForeignDay {
        /// The out-of-scope day.
        day: DayId,
        /// The campaign the event belongs to.
        campaign: CampaignId,
    },

    /// An applied creation event carried an id that is already in use.
    /// Indicates a corrupt or out-of-order event log.
    #[error("id {0} is already in use")]
    IdCollision(u64),
}
