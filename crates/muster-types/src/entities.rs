//! Core entity structs for the campaign domain model.
//!
//! A [`Campaign`] owns its [`Day`]s, [`Event`]s, and [`Pupil`]s: deleting a
//! campaign deletes everything it owns. An [`Event`] takes place on a subset
//! of its campaign's days (many-to-many via the `days` set). Referential
//! integrity is maintained by cascading deletes in the model layer; these
//! structs never hold dangling references in a consistent model.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ids::{CampaignId, DayId, EventId, PupilId};

/// A campaign: the root aggregate owning days, events, and pupils.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    /// Unique campaign identifier.
    pub id: CampaignId,
    /// Display title of the campaign.
    pub title: String,
    /// Days owned by this campaign, in creation order.
    pub days: Vec<DayId>,
}

/// A single day within a campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    /// Unique day identifier.
    pub id: DayId,
    /// The campaign this day belongs to.
    pub campaign: CampaignId,
    /// Display title of the day (e.g. "Monday").
    pub title: String,
}

/// An event offered within a campaign, taking place on a set of its days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event identifier.
    pub id: EventId,
    /// The campaign this event belongs to.
    pub campaign: CampaignId,
    /// Display title of the event.
    pub title: String,
    /// Days on which the event takes place. Invariant: a subset of the
    /// owning campaign's day ids.
    pub days: BTreeSet<DayId>,
    /// Maximum number of attendees.
    pub capacity: u32,
    /// Sub-quota within `capacity` reserved for special pupils.
    pub max_special_pupils: u32,
}

/// A pupil registered with a campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pupil {
    /// Unique pupil identifier.
    pub id: PupilId,
    /// The campaign this pupil belongs to.
    pub campaign: CampaignId,
    /// Full name of the pupil.
    pub name: String,
    /// Class label (e.g. "5b").
    pub class: String,
    /// Whether the pupil counts against events' special-pupil sub-quota.
    pub special: bool,
}
