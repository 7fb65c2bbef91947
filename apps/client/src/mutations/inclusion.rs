//! Include/exclude main-resume skills and work experiences in a scoped resume.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::api::{scoped_resumes, ApiClient};
use crate::errors::ApiError;
use crate::models::scoped::ScopedResume;
use crate::mutations::notify::{notify_if_active, Notifier, Toast};
use crate::mutations::status::MutationStatus;

#[derive(Clone)]
pub struct InclusionFlows {
    api: ApiClient,
    notifier: Arc<dyn Notifier>,
    view: CancellationToken,
    status: MutationStatus,
}

impl InclusionFlows {
    pub fn new(api: ApiClient, notifier: Arc<dyn Notifier>, view: CancellationToken) -> Self {
        Self {
            api,
            notifier,
            view,
            status: MutationStatus::new(),
        }
    }

    pub fn status(&self) -> &MutationStatus {
        &self.status
    }

    pub async fn set_skill_included(
        &self,
        scoped_resume_id: Uuid,
        skill_id: Uuid,
        included: bool,
    ) -> Result<(), ApiError> {
        let _pending = self.status.begin();
        let result =
            scoped_resumes::set_skill_included(&self.api, scoped_resume_id, skill_id, included)
                .await;
        let toast = match (&result, included) {
            (Ok(()), true) => Toast::success("Skill included", "The skill now appears in this resume."),
            (Ok(()), false) => Toast::success("Skill excluded", "The skill was removed from this resume."),
            (Err(e), _) => Toast::error("Could not update skill", e),
        };
        notify_if_active(self.notifier.as_ref(), &self.view, toast);
        result
    }

    pub async fn set_work_experience_included(
        &self,
        scoped_resume_id: Uuid,
        work_experience_id: Uuid,
        included: bool,
    ) -> Result<(), ApiError> {
        let _pending = self.status.begin();
        let result = scoped_resumes::set_work_experience_included(
            &self.api,
            scoped_resume_id,
            work_experience_id,
            included,
        )
        .await;
        let toast = match (&result, included) {
            (Ok(()), true) => Toast::success(
                "Work experience included",
                "The position now appears in this resume.",
            ),
            (Ok(()), false) => Toast::success(
                "Work experience excluded",
                "The position was removed from this resume.",
            ),
            (Err(e), _) => Toast::error("Could not update work experience", e),
        };
        notify_if_active(self.notifier.as_ref(), &self.view, toast);
        result
    }

    /// Flips the skill's inclusion and returns the new state.
    pub async fn toggle_skill(&self, scoped: &ScopedResume, skill_id: Uuid) -> Result<bool, ApiError> {
        let included = !scoped.includes_skill(skill_id);
        self.set_skill_included(scoped.id, skill_id, included).await?;
        Ok(included)
    }

    pub async fn toggle_work_experience(
        &self,
        scoped: &ScopedResume,
        work_experience_id: Uuid,
    ) -> Result<bool, ApiError> {
        let included = !scoped.includes_work_experience(work_experience_id);
        self.set_work_experience_included(scoped.id, work_experience_id, included)
            .await?;
        Ok(included)
    }
}
