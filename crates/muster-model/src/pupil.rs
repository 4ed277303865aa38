//! Pupil mutators: create, partial update, delete.

use muster_types::{CampaignId, ModelEvent, Pupil, PupilId, PupilPatch};

use crate::error::ModelError;
use crate::model::Model;

impl Model {
    /// Describe registering a pupil with a campaign.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::CampaignNotFound`] if the campaign does not
    /// exist.
    pub fn create_pupil(
        &self,
        campaign: CampaignId,
        name: String,
        class: String,
        special: bool,
    ) -> Result<(PupilId, ModelEvent), ModelError> {
        self.campaign(campaign)?;
        let id = PupilId(self.peek_id());
        let pupil = Pupil {
            id,
            campaign,
            name,
            class,
            special,
        };
        Ok((id, ModelEvent::PupilCreated { pupil }))
    }

    /// Describe a partial update of a pupil. Fields absent from the patch
    /// are left untouched on application.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::PupilNotFound`] if the pupil does not exist.
    pub fn update_pupil(&self, id: PupilId, patch: PupilPatch) -> Result<ModelEvent, ModelError> {
        self.pupil(id)?;
        Ok(ModelEvent::PupilUpdated { id, patch })
    }

    /// Describe removing a pupil.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::PupilNotFound`] if the pupil does not exist.
    pub fn delete_pupil(&self, id: PupilId) -> Result<ModelEvent, ModelError> {
        self.pupil(id)?;
        Ok(ModelEvent::PupilDeleted { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_pupil_requires_existing_campaign() {
        let model = Model::new();
        let result = model.create_pupil(CampaignId(1), "Ada".to_owned(), "5b".to_owned(), false);
        assert!(matches!(result, Err(ModelError::CampaignNotFound(_))));
    }

    #[test]
    fn update_missing_pupil_is_rejected() {
        let model = Model::new();
        assert!(matches!(
            model.update_pupil(PupilId(3), PupilPatch::default()),
            Err(ModelError::PupilNotFound(_))
        ));
    }
}
