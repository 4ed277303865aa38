//! Campaign mutators: create (with initial days), retitle, delete.
//!
//! Mutators never modify the model. They validate against the current state
//! and return the [`ModelEvent`] describing the transition; the state
//! container applies the event through [`Model::apply`] after recording it.

use muster_types::{CampaignId, CreatedDay, DayId, ModelEvent};

use crate::error::ModelError;
use crate::model::Model;

impl Model {
    /// Describe the creation of a campaign together with its initial days.
    ///
    /// Ids for the campaign and each day are pre-assigned from the model's
    /// counter and embedded in the returned event.
    pub fn create_campaign(
        &self,
        title: String,
        day_titles: Vec<String>,
    ) -> (CampaignId, ModelEvent) {
        let id = CampaignId(self.peek_id());
        let mut cursor = self.peek_id();
        let days = day_titles
            .into_iter()
            .map(|title| {
                cursor = cursor.saturating_add(1);
                CreatedDay {
                    id: DayId(cursor),
                    title,
                }
            })
            .collect();

        (id, ModelEvent::CampaignCreated { id, title, days })
    }

    /// Describe replacing a campaign's title.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::CampaignNotFound`] if the campaign does not
    /// exist.
    pub fn retitle_campaign(&self, id: CampaignId, title: String) -> Result<ModelEvent, ModelError> {
        self.campaign(id)?;
        Ok(ModelEvent::CampaignRetitled { id, title })
    }

    /// Describe deleting a campaign. Application cascades to every day,
    /// event, and pupil the campaign owns.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::CampaignNotFound`] if the campaign does not
    /// exist.
    pub fn delete_campaign(&self, id: CampaignId) -> Result<ModelEvent, ModelError> {
        self.campaign(id)?;
        Ok(ModelEvent::CampaignDeleted { id })
    }
}
