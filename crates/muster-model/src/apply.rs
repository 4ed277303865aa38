//! Event application: the single state-transition path.
//!
//! Both live writes and replay go through [`Model::apply`]. A live write
//! validates through a mutator, records the event, and applies it; replay
//! applies the recorded sequence from the empty model. Because there is
//! exactly one application path, the two cannot drift apart.
//!
//! Application re-validates referential preconditions even though mutators
//! already did: the log on disk is outside this crate's control, and a
//! corrupt or truncated log must fail loudly instead of producing a model
//! that silently violates its invariants.

use muster_types::{Campaign, Day, ModelEvent};

use crate::error::ModelError;
use crate::model::Model;

impl Model {
    /// Apply one committed event to the model.
    ///
    /// # Errors
    ///
    /// Returns a `*NotFound` or referential error if the event is
    /// inconsistent with the current state, or [`ModelError::IdCollision`]
    /// if a creation event carries an id already in use. On error the model
    /// is unchanged.
    pub fn apply(&mut self, event: &ModelEvent) -> Result<(), ModelError> {
        match event {
            ModelEvent::CampaignCreated { id, title, days } => {
                if self.campaigns.contains_key(id) {
                    return Err(ModelError::IdCollision(id.into_inner()));
                }
                for day in days {
                    if self.days.contains_key(&day.id) {
                        return Err(ModelError::IdCollision(day.id.into_inner()));
                    }
                }

                let mut day_ids = Vec::with_capacity(days.len());
                for day in days {
                    self.days.insert(
                        day.id,
                        Day {
                            id: day.id,
                            campaign: *id,
                            title: day.title.clone(),
                        },
                    );
                    day_ids.push(day.id);
                    self.bump(day.id.into_inner());
                }
                self.campaigns.insert(
                    *id,
                    Campaign {
                        id: *id,
                        title: title.clone(),
                        days: day_ids,
                    },
                );
                self.bump(id.into_inner());
            }

            ModelEvent::CampaignRetitled { id, title } => {
                let campaign = self
                    .campaigns
                    .get_mut(id)
                    .ok_or(ModelError::CampaignNotFound(*id))?;
                campaign.title.clone_from(title);
            }

            ModelEvent::CampaignDeleted { id } => {
                if self.campaigns.remove(id).is_none() {
                    return Err(ModelError::CampaignNotFound(*id));
                }
                self.days.retain(|_, day| day.campaign != *id);
                self.events.retain(|_, event| event.campaign != *id);
                self.pupils.retain(|_, pupil| pupil.campaign != *id);
            }

            ModelEvent::DayCreated {
                id,
                campaign,
                title,
            } => {
                if self.days.contains_key(id) {
                    return Err(ModelError::IdCollision(id.into_inner()));
                }
                let owner = self
                    .campaigns
                    .get_mut(campaign)
                    .ok_or(ModelError::CampaignNotFound(*campaign))?;
                owner.days.push(*id);
                self.days.insert(
                    *id,
                    Day {
                        id: *id,
                        campaign: *campaign,
                        title: title.clone(),
                    },
                );
                self.bump(id.into_inner());
            }

            ModelEvent::DayRetitled { id, title } => {
                let day = self.days.get_mut(id).ok_or(ModelError::DayNotFound(*id))?;
                day.title.clone_from(title);
            }

            ModelEvent::DayDeleted { id } => {
                let day = self.days.remove(id).ok_or(ModelError::DayNotFound(*id))?;
                if let Some(owner) = self.campaigns.get_mut(&day.campaign) {
                    owner.days.retain(|day_id| day_id != id);
                }
                // Cascade-update: referencing events drop the day.
                for event in self.events.values_mut() {
                    event.days.remove(id);
                }
            }

            ModelEvent::EventCreated { event } => {
                if self.events.contains_key(&event.id) {
                    return Err(ModelError::IdCollision(event.id.into_inner()));
                }
                self.campaign(event.campaign)?;
                self.check_days_in_campaign(event.campaign, event.days.iter().copied())?;
                self.bump(event.id.into_inner());
                self.events.insert(event.id, event.clone());
            }

            ModelEvent::EventUpdated { id, patch } => {
                if let Some(days) = &patch.days {
                    let campaign = self.event(*id)?.campaign;
                    self.check_days_in_campaign(campaign, days.iter().copied())?;
                }
                let event = self
                    .events
                    .get_mut(id)
                    .ok_or(ModelError::EventNotFound(*id))?;
                if let Some(title) = &patch.title {
                    event.title.clone_from(title);
                }
                if let Some(days) = &patch.days {
                    event.days.clone_from(days);
                }
                if let Some(capacity) = patch.capacity {
                    event.capacity = capacity;
                }
                if let Some(max_special_pupils) = patch.max_special_pupils {
                    event.max_special_pupils = max_special_pupils;
                }
            }

            ModelEvent::EventDeleted { id } => {
                if self.events.remove(id).is_none() {
                    return Err(ModelError::EventNotFound(*id));
                }
            }

            ModelEvent::PupilCreated { pupil } => {
                if self.pupils.contains_key(&pupil.id) {
                    return Err(ModelError::IdCollision(pupil.id.into_inner()));
                }
                self.campaign(pupil.campaign)?;
                self.bump(pupil.id.into_inner());
                self.pupils.insert(pupil.id, pupil.clone());
            }

            ModelEvent::PupilUpdated { id, patch } => {
                let pupil = self
                    .pupils
                    .get_mut(id)
                    .ok_or(ModelError::PupilNotFound(*id))?;
                if let Some(name) = &patch.name {
                    pupil.name.clone_from(name);
                }
                if let Some(class) = &patch.class {
                    pupil.class.clone_from(class);
                }
                if let Some(special) = patch.special {
                    pupil.special = special;
                }
            }

            ModelEvent::PupilDeleted { id } => {
                if self.pupils.remove(id).is_none() {
                    return Err(ModelError::PupilNotFound(*id));
                }
            }
        }

        Ok(())
    }

    /// Advance the id counter past an id consumed by a creation event.
    fn bump(&mut self, used: u64) {
        self.next_id = self.next_id.max(used.saturating_add(1));
    }
}
