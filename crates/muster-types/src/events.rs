//! Committed state transitions recorded for durability and replay.
//!
//! Every successful write against the model produces exactly one
//! [`ModelEvent`] describing the transition it performed. The ordered
//! sequence of these events is the definition of model history: replaying
//! them from the empty model reproduces the live state field for field.
//!
//! Creation events carry the full created record (ids pre-assigned by the
//! model), update events carry the applied delta as a patch, and deletion
//! events carry only the id — cascades are derived deterministically from
//! model state at application time.

use serde::{Deserialize, Serialize};

use crate::entities::{Event, Pupil};
use crate::ids::{CampaignId, DayId, EventId, PupilId};
use crate::patch::{EventPatch, PupilPatch};

/// A day created together with its campaign, with its id pre-assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedDay {
    /// The assigned day identifier.
    pub id: DayId,
    /// Display title of the day.
    pub title: String,
}

/// One committed state transition of the domain model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ModelEvent {
    /// A campaign was created, together with its initial days.
    CampaignCreated {
        /// The assigned campaign identifier.
        id: CampaignId,
        /// Campaign title.
        title: String,
        /// Initial days, in order, with pre-assigned ids.
        days: Vec<CreatedDay>,
    },
    /// A campaign's title was replaced.
    CampaignRetitled {
        /// The campaign.
        id: CampaignId,
        /// The new title.
        title: String,
    },
    /// A campaign and everything it owns were deleted.
    CampaignDeleted {
        /// The campaign.
        id: CampaignId,
    },
    /// A day was added to an existing campaign.
    DayCreated {
        /// The assigned day identifier.
        id: DayId,
        /// The owning campaign.
        campaign: CampaignId,
        /// Day title.
        title: String,
    },
    /// A day's title was replaced.
    DayRetitled {
        /// The day.
        id: DayId,
        /// The new title.
        title: String,
    },
    /// A day was deleted; referencing events drop it from their day sets.
    DayDeleted {
        /// The day.
        id: DayId,
    },
    /// An event was created.
    EventCreated {
        /// The full created record, id pre-assigned.
        event: Event,
    },
    /// An event was partially updated.
    EventUpdated {
        /// The event.
        id: EventId,
        /// The applied delta.
        patch: EventPatch,
    },
    /// An event was deleted.
    EventDeleted {
        /// The event.
        id: EventId,
    },
    /// A pupil was registered.
    PupilCreated {
        /// The full created record, id pre-assigned.
        pupil: Pupil,
    },
    /// A pupil was partially updated.
    PupilUpdated {
        /// The pupil.
        id: PupilId,
        /// The applied delta.
        patch: PupilPatch,
    },
    /// A pupil was removed.
    PupilDeleted {
        /// The pupil.
        id: PupilId,
    },
}

impl ModelEvent {
    /// Short stable name of the transition, for log lines and diagnostics.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::CampaignCreated { .. } => "campaign_created",
            Self::CampaignRetitled { .. } => "campaign_retitled",
            Self::CampaignDeleted { .. } => "campaign_deleted",
            Self::DayCreated { .. } => "day_created",
            Self::DayRetitled { .. } => "day_retitled",
            Self::DayDeleted { .. } => "day_deleted",
            Self::EventCreated { .. } => "event_created",
            Self::EventUpdated { .. } => "event_updated",
            Self::EventDeleted { .. } => "event_deleted",
            Self::PupilCreated { .. } => "pupil_created",
            Self::PupilUpdated { .. } => "pupil_updated",
            Self::PupilDeleted { .. } => "pupil_deleted",
        }
    }
}
