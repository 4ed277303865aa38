//! Day mutators: create, retitle, delete.
//!
//! Deleting a day cascade-updates the events that still reference it: the
//! day id is dropped from each referencing event's day set when the event
//! log entry is applied. See the apply module for the cascade itself.

use muster_types::{CampaignId, DayId, ModelEvent};

use crate::error::ModelError;
use crate::model::Model;

impl Model {
    /// Describe adding a day to an existing campaign.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::CampaignNotFound`] if the campaign does not
    /// exist.
    pub fn create_day(
        &self,
        campaign: CampaignId,
        title: String,
    ) -> Result<(DayId, ModelEvent), ModelError> {
        self.campaign(campaign)?;
        let id = DayId(self.peek_id());
        Ok((
            id,
            ModelEvent::DayCreated {
                id,
                campaign,
                title,
            },
        ))
    }

    /// Describe replacing a day's title.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DayNotFound`] if the day does not exist.
    pub fn retitle_day(&self, id: DayId, title: String) -> Result<ModelEvent, ModelError> {
        self.day(id)?;
        Ok(ModelEvent::DayRetitled { id, title })
    }

    /// Describe deleting a day. Application removes it from the owning
    /// campaign's day list and from every referencing event's day set.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DayNotFound`] if the day does not exist.
    pub fn delete_day(&self, id: DayId) -> Result<ModelEvent, ModelError> {
        self.day(id)?;
        Ok(ModelEvent::DayDeleted { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_day_requires_existing_campaign() {
        let model = Model::new();
        let result = model.create_day(CampaignId(1), "Mon".to_owned());
        assert!(matches!(result, Err(ModelError::CampaignNotFound(_))));
    }

    #[test]
    fn delete_missing_day_is_rejected() {
        let model = Model::new();
        assert!(matches!(
            model.delete_day(DayId(9)),
            Err(ModelError::DayNotFound(_))
        ));
    }
}
