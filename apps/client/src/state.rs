use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::api::ApiClient;
use crate::config::Config;
use crate::mutations::{InclusionFlows, Notifier, ScopedResumeFlows};
use crate::store::{EditModeStore, SectionEditStore};

/// Shared session state, constructed once and handed to every view.
/// All fields are cheap handles; cloning shares the underlying state.
#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
    pub edit_mode: EditModeStore,
    /// Section flags derived from `edit_mode`.
    pub sections: SectionEditStore,
    pub notifier: Arc<dyn Notifier>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, notifier: Arc<dyn Notifier>) -> Self {
        let edit_mode = EditModeStore::new();
        Self {
            api: ApiClient::new(config.api_base_url.clone()),
            sections: SectionEditStore::new(edit_mode.clone()),
            edit_mode,
            notifier,
            config,
        }
    }

    /// Scoped-resume flows bound to a view's lifetime.
    pub fn scoped_resume_flows(&self, view: CancellationToken) -> ScopedResumeFlows {
        ScopedResumeFlows::new(self.api.clone(), Arc::clone(&self.notifier), view)
    }

    pub fn inclusion_flows(&self, view: CancellationToken) -> InclusionFlows {
        InclusionFlows::new(self.api.clone(), Arc::clone(&self.notifier), view)
    }
}
