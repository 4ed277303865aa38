//! The domain model value and its read accessors.
//!
//! [`Model`] owns every entity in the system, keyed by typed id in
//! `BTreeMap`s so iteration order is deterministic — replaying the same
//! event sequence always yields an identical model. The struct is a plain
//! value: it carries no locking and no I/O. Mutation happens exclusively
//! through [`Model::apply`](crate::Model::apply) in the `apply` module; the
//! mutator families in the sibling modules only *describe* transitions as
//! [`ModelEvent`](muster_types::ModelEvent)s.
//!
//! A single `next_id` counter feeds all four entity families, which makes
//! ids unique per family by construction and monotonic for the lifetime of
//! the model. Applying a creation event bumps the counter past the embedded
//! id, so replay restores the allocation state as well.

use std::collections::BTreeMap;

use muster_types::{Campaign, CampaignId, Day, DayId, Event, EventId, Pupil, PupilId};

use crate::error::ModelError;

/// The complete in-memory domain model.
///
/// Equality compares every entity and the id counter, so two models built
/// from the same event sequence compare equal field for field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    /// All campaigns, keyed by id.
    pub(crate) campaigns: BTreeMap<CampaignId, Campaign>,
    /// All days, keyed by id.
    pub(crate) days: BTreeMap<DayId, Day>,
    /// All events, keyed by id.
    pub(crate) events: BTreeMap<EventId, Event>,
    /// All pupils, keyed by id.
    pub(crate) pupils: BTreeMap<PupilId, Pupil>,
    /// The next id to assign, shared by all entity families.
    pub(crate) next_id: u64,
}

impl Model {
    /// Create an empty model. The first assigned id is 1.
    pub const fn new() -> Self {
        Self {
            campaigns: BTreeMap::new(),
            days: BTreeMap::new(),
            events: BTreeMap::new(),
            pupils: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Look up a campaign by id.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::CampaignNotFound`] if the id does not exist.
    pub fn campaign(&self, id: CampaignId) -> Result<&Campaign, ModelError> {
        self.campaigns
            .get(&id)
            .ok_or(ModelError::CampaignNotFound(id))
    }

    /// Iterate over all campaigns in id order.
    pub fn campaigns(&self) -> impl Iterator<Item = &Campaign> {
        self.campaigns.values()
    }

    /// Look up a day by id.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DayNotFound`] if the id does not exist.
    pub fn day(&self, id: DayId) -> Result<&Day, ModelError> {
        self.days.get(&id).ok_or(ModelError::DayNotFound(id))
    }

    /// Look up an event by id.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EventNotFound`] if the id does not exist.
    pub fn event(&self, id: EventId) -> Result<&Event, ModelError> {
        self.events.get(&id).ok_or(ModelError::EventNotFound(id))
    }

    /// Look up a pupil by id.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::PupilNotFound`] if the id does not exist.
    pub fn pupil(&self, id: PupilId) -> Result<&Pupil, ModelError> {
        self.pupils.get(&id).ok_or(ModelError::PupilNotFound(id))
    }

    /// The days of a campaign, in the campaign's creation order.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::CampaignNotFound`] if the campaign does not
    /// exist.
    pub fn days_of(&self, id: CampaignId) -> Result<Vec<&Day>, ModelError> {
        let campaign = self.campaign(id)?;
        Ok(campaign
            .days
            .iter()
            .filter_map(|day| self.days.get(day))
            .collect())
    }

    /// The events of a campaign, in id order.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::CampaignNotFound`] if the campaign does not
    /// exist.
    pub fn events_of(&self, id: CampaignId) -> Result<Vec<&Event>, ModelError> {
        self.campaign(id)?;
        Ok(self
            .events
            .values()
            .filter(|event| event.campaign == id)
            .collect())
    }

    /// The pupils of a campaign, in id order.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::CampaignNotFound`] if the campaign does not
    /// exist.
    pub fn pupils_of(&self, id: CampaignId) -> Result<Vec<&Pupil>, ModelError> {
        self.campaign(id)?;
        Ok(self
            .pupils
            .values()
            .filter(|pupil| pupil.campaign == id)
            .collect())
    }

    /// The next id the model will assign. Mutators embed this (and its
    /// successors) in the creation events they produce.
    pub(crate) const fn peek_id(&self) -> u64 {
        self.next_id
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}
