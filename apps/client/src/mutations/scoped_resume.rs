//! Scoped-resume mutation flows and the dialog state that drives them.
//!
//! Each flow issues exactly one API call, then notifies success or failure.
//! Notifications are skipped once the owning view's `CancellationToken` is
//! cancelled; callbacks passed to the dialogs still run, so navigation and
//! list updates happen even after the dialog is gone. Nothing is changed
//! locally before the server confirms, so there is nothing to roll back.

use std::future::Future;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::api::{scoped_resumes, ApiClient};
use crate::errors::ApiError;
use crate::models::scoped::ScopedResume;
use crate::mutations::notify::{notify_if_active, Notifier, Toast};
use crate::mutations::status::MutationStatus;

#[derive(Clone)]
pub struct ScopedResumeFlows {
    api: ApiClient,
    notifier: Arc<dyn Notifier>,
    view: CancellationToken,
    create: MutationStatus,
    rename: MutationStatus,
    duplicate: MutationStatus,
    delete: MutationStatus,
}

impl ScopedResumeFlows {
    pub fn new(api: ApiClient, notifier: Arc<dyn Notifier>, view: CancellationToken) -> Self {
        Self {
            api,
            notifier,
            view,
            create: MutationStatus::new(),
            rename: MutationStatus::new(),
            duplicate: MutationStatus::new(),
            delete: MutationStatus::new(),
        }
    }

    pub fn view(&self) -> &CancellationToken {
        &self.view
    }

    pub fn create_status(&self) -> &MutationStatus {
        &self.create
    }

    pub fn rename_status(&self) -> &MutationStatus {
        &self.rename
    }

    pub fn duplicate_status(&self) -> &MutationStatus {
        &self.duplicate
    }

    pub fn delete_status(&self) -> &MutationStatus {
        &self.delete
    }

    pub async fn create(&self, name: &str) -> Result<ScopedResume, ApiError> {
        self.run(
            &self.create,
            scoped_resumes::create_scoped_resume(&self.api, name.trim()),
            |r| Toast::success("Scoped resume created", format!("\"{}\" is ready to tailor.", r.name)),
            "Could not create scoped resume",
        )
        .await
    }

    pub async fn rename(&self, id: Uuid, name: &str) -> Result<ScopedResume, ApiError> {
        self.run(
            &self.rename,
            scoped_resumes::rename_scoped_resume(&self.api, id, name.trim()),
            |r| Toast::success("Scoped resume renamed", format!("Renamed to \"{}\".", r.name)),
            "Could not rename scoped resume",
        )
        .await
    }

    pub async fn duplicate(&self, id: Uuid, name: Option<&str>) -> Result<ScopedResume, ApiError> {
        self.run(
            &self.duplicate,
            scoped_resumes::duplicate_scoped_resume(&self.api, id, name.map(str::trim)),
            |r| Toast::success("Scoped resume duplicated", format!("Created \"{}\".", r.name)),
            "Could not duplicate scoped resume",
        )
        .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        self.run(
            &self.delete,
            scoped_resumes::delete_scoped_resume(&self.api, id),
            |_| Toast::success("Scoped resume deleted", "The scoped resume was removed."),
            "Could not delete scoped resume",
        )
        .await
    }

    async fn run<T, F>(
        &self,
        status: &MutationStatus,
        call: F,
        on_success: impl FnOnce(&T) -> Toast,
        failure_title: &str,
    ) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let _pending = status.begin();
        let result = call.await;
        let toast = match &result {
            Ok(value) => on_success(value),
            Err(e) => Toast::error(failure_title, e),
        };
        notify_if_active(self.notifier.as_ref(), &self.view, toast);
        result
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Dialogs
// ────────────────────────────────────────────────────────────────────────────
//
// `submit`/`confirm` return `Ok(None)` when the dialog refuses to submit
// (closed, empty name, or a call already in flight). On failure the dialog
// stays open so the user can retry.

pub struct CreateScopedResumeDialog {
    flows: ScopedResumeFlows,
    open: bool,
    name: String,
}

impl CreateScopedResumeDialog {
    pub fn new(flows: ScopedResumeFlows) -> Self {
        Self {
            flows,
            open: false,
            name: String::new(),
        }
    }

    pub fn open(&mut self) {
        self.open = true;
        self.name.clear();
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn can_submit(&self) -> bool {
        self.open && !self.name.trim().is_empty() && !self.flows.create_status().is_pending()
    }

    /// Creates the resume, closes the dialog and hands the result to
    /// `on_created` exactly once.
    pub async fn submit(
        &mut self,
        on_created: impl FnOnce(&ScopedResume),
    ) -> Result<Option<ScopedResume>, ApiError> {
        if !self.can_submit() {
            return Ok(None);
        }
        let created = self.flows.create(&self.name).await?;
        self.open = false;
        self.name.clear();
        on_created(&created);
        Ok(Some(created))
    }
}

pub struct RenameScopedResumeDialog {
    flows: ScopedResumeFlows,
    target: Option<ScopedResume>,
    name: String,
}

impl RenameScopedResumeDialog {
    pub fn new(flows: ScopedResumeFlows) -> Self {
        Self {
            flows,
            target: None,
            name: String::new(),
        }
    }

    pub fn open_for(&mut self, resume: &ScopedResume) {
        self.name = resume.name.clone();
        self.target = Some(resume.clone());
    }

    pub fn close(&mut self) {
        self.target = None;
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn can_submit(&self) -> bool {
        self.target.is_some()
            && !self.name.trim().is_empty()
            && !self.flows.rename_status().is_pending()
    }

    pub async fn submit(
        &mut self,
        on_renamed: impl FnOnce(&ScopedResume),
    ) -> Result<Option<ScopedResume>, ApiError> {
        let Some(target_id) = self.target.as_ref().map(|t| t.id) else {
            return Ok(None);
        };
        if !self.can_submit() {
            return Ok(None);
        }
        let renamed = self.flows.rename(target_id, &self.name).await?;
        self.target = None;
        on_renamed(&renamed);
        Ok(Some(renamed))
    }
}

pub struct DuplicateScopedResumeDialog {
    flows: ScopedResumeFlows,
    source: Option<ScopedResume>,
    name: String,
}

impl DuplicateScopedResumeDialog {
    pub fn new(flows: ScopedResumeFlows) -> Self {
        Self {
            flows,
            source: None,
            name: String::new(),
        }
    }

    /// Opens with a suggested "<name> (copy)" name.
    pub fn open_for(&mut self, resume: &ScopedResume) {
        self.name = format!("{} (copy)", resume.name);
        self.source = Some(resume.clone());
    }

    pub fn close(&mut self) {
        self.source = None;
    }

    pub fn is_open(&self) -> bool {
        self.source.is_some()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn can_submit(&self) -> bool {
        self.source.is_some()
            && !self.name.trim().is_empty()
            && !self.flows.duplicate_status().is_pending()
    }

    pub async fn submit(
        &mut self,
        on_duplicated: impl FnOnce(&ScopedResume),
    ) -> Result<Option<ScopedResume>, ApiError> {
        let Some(source_id) = self.source.as_ref().map(|s| s.id) else {
            return Ok(None);
        };
        if !self.can_submit() {
            return Ok(None);
        }
        let copy = self.flows.duplicate(source_id, Some(&self.name)).await?;
        self.source = None;
        on_duplicated(&copy);
        Ok(Some(copy))
    }
}

pub struct DeleteScopedResumeDialog {
    flows: ScopedResumeFlows,
    target: Option<ScopedResume>,
}

impl DeleteScopedResumeDialog {
    pub fn new(flows: ScopedResumeFlows) -> Self {
        Self {
            flows,
            target: None,
        }
    }

    pub fn open_for(&mut self, resume: &ScopedResume) {
        self.target = Some(resume.clone());
    }

    pub fn close(&mut self) {
        self.target = None;
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<&ScopedResume> {
        self.target.as_ref()
    }

    pub fn can_confirm(&self) -> bool {
        self.target.is_some() && !self.flows.delete_status().is_pending()
    }

    /// Deletes the target and passes its id to `on_deleted`. A rejected
    /// delete never reaches the callback.
    pub async fn confirm(
        &mut self,
        on_deleted: impl FnOnce(Uuid),
    ) -> Result<Option<Uuid>, ApiError> {
        let Some(target_id) = self.target.as_ref().map(|t| t.id) else {
            return Ok(None);
        };
        if !self.can_confirm() {
            return Ok(None);
        }
        self.flows.delete(target_id).await?;
        self.target = None;
        on_deleted(target_id);
        Ok(Some(target_id))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// List
// ────────────────────────────────────────────────────────────────────────────

/// The scoped resumes shown in the picker. Changes only through the
/// `apply_*`/`remove` calls, i.e. after the server confirmed a write.
#[derive(Debug, Clone, Default)]
pub struct ScopedResumeList {
    items: Vec<ScopedResume>,
}

impl ScopedResumeList {
    pub fn new(items: Vec<ScopedResume>) -> Self {
        Self { items }
    }

    pub async fn load(api: &ApiClient) -> Result<Self, ApiError> {
        Ok(Self::new(scoped_resumes::list_scoped_resumes(api).await?))
    }

    pub fn items(&self) -> &[ScopedResume] {
        &self.items
    }

    pub fn get(&self, id: Uuid) -> Option<&ScopedResume> {
        self.items.iter().find(|r| r.id == id)
    }

    /// Appends a created/duplicated resume, or replaces the entry with the
    /// same id.
    pub fn apply_created(&mut self, resume: &ScopedResume) {
        match self.items.iter_mut().find(|r| r.id == resume.id) {
            Some(existing) => *existing = resume.clone(),
            None => self.items.push(resume.clone()),
        }
    }

    pub fn apply_renamed(&mut self, resume: &ScopedResume) {
        if let Some(existing) = self.items.iter_mut().find(|r| r.id == resume.id) {
            existing.name = resume.name.clone();
            existing.updated_at = resume.updated_at;
        }
    }

    pub fn remove(&mut self, id: Uuid) -> Option<ScopedResume> {
        let index = self.items.iter().position(|r| r.id == id)?;
        Some(self.items.remove(index))
    }
}
