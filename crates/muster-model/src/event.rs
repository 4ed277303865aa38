//! Event mutators: create, partial update, delete.
//!
//! An event's day set must stay a subset of the owning campaign's days.
//! Both creation and day-set patches are validated against that invariant
//! here, before any event record is produced.

use std::collections::BTreeSet;

use muster_types::{CampaignId, DayId, Event, EventId, EventPatch, ModelEvent};

use crate::error::ModelError;
use crate::model::Model;

impl Model {
    /// Describe creating an event within a campaign.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::CampaignNotFound`] if the campaign does not
    /// exist, [`ModelError::DayNotFound`] if a referenced day does not
    /// exist, or [`ModelError::ForeignDay`] if a referenced day belongs to
    /// a different campaign.
    pub fn create_event(
        &self,
        campaign: CampaignId,
        title: String,
        days: BTreeSet<DayId>,
        capacity: u32,
        max_special_pupils: u32,
    ) -> Result<(EventId, ModelEvent), ModelError> {
        self.campaign(campaign)?;
        self.check_days_in_campaign(campaign, days.iter().copied())?;

        let id = EventId(self.peek_id());
        let event = Event {
            id,
            campaign,
            title,
            days,
            capacity,
            max_special_pupils,
        };
        Ok((id, ModelEvent::EventCreated { event }))
    }

    /// Describe a partial update of an event. Fields absent from the patch
    /// are left untouched on application.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EventNotFound`] if the event does not exist,
    /// or a referential error if the patched day set steps outside the
    /// owning campaign.
    pub fn update_event(&self, id: EventId, patch: EventPatch) -> Result<ModelEvent, ModelError> {
        let event = self.event(id)?;
        if let Some(days) = &patch.days {
            self.check_days_in_campaign(event.campaign, days.iter().copied())?;
        }
        Ok(ModelEvent::EventUpdated { id, patch })
    }

    /// Describe deleting an event.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EventNotFound`] if the event does not exist.
    pub fn delete_event(&self, id: EventId) -> Result<ModelEvent, ModelError> {
        self.event(id)?;
        Ok(ModelEvent::EventDeleted { id })
    }

    /// Verify that every day in `days` exists and belongs to `campaign`.
    pub(crate) fn check_days_in_campaign(
        &self,
        campaign: CampaignId,
        days: impl Iterator<Item = DayId>,
    ) -> Result<(), ModelError> {
        for id in days {
            let day = self.day(id)?;
            if day.campaign != campaign {
                return Err(ModelError::ForeignDay { day: id, campaign });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Model {
        let mut model = Model::new();
        let (_, created) = model.create_campaign(
            "Spring Trip".to_owned(),
            vec!["Mon".to_owned(), "Tue".to_owned()],
        );
        let applied = model.apply(&created);
        assert!(applied.is_ok());
        model
    }

    #[test]
    fn create_event_rejects_day_of_other_campaign() {
        let mut model = seeded();
        let (_, other) = model.create_campaign("Other".to_owned(), vec!["Wed".to_owned()]);
        assert!(model.apply(&other).is_ok());

        // Day 5 belongs to the second campaign.
        let result = model.create_event(
            CampaignId(1),
            "Hike".to_owned(),
            BTreeSet::from([DayId(5)]),
            20,
            5,
        );
        assert!(matches!(result, Err(ModelError::ForeignDay { .. })));
    }

    #[test]
    fn create_event_rejects_unknown_day() {
        let model = seeded();
        let result = model.create_event(
            CampaignId(1),
            "Hike".to_owned(),
            BTreeSet::from([DayId(99)]),
            20,
            5,
        );
        assert!(matches!(result, Err(ModelError::DayNotFound(_))));
    }

    #[test]
    fn update_event_revalidates_patched_day_set() {
        let mut model = seeded();
        let created = model.create_event(
            CampaignId(1),
            "Hike".to_owned(),
            BTreeSet::from([DayId(2)]),
            20,
            5,
        );
        assert!(created.is_ok());
        if let Ok((id, event)) = created {
            assert!(model.apply(&event).is_ok());

            let patch = EventPatch {
                days: Some(BTreeSet::from([DayId(77)])),
                ..EventPatch::default()
            };
            assert!(matches!(
                model.update_event(id, patch),
                Err(ModelError::DayNotFound(_))
            ));
        }
    }
}
