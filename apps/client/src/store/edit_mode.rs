use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;
use uuid::Uuid;

/// The single target currently open for editing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EditContext {
    #[default]
    None,
    Contact,
    Summary,
    Skills,
    AddSkill,
    Education(Uuid),
    WorkExperience(Uuid),
    AddEducation,
    AddWorkExperience,
}

impl EditContext {
    pub fn is_none(&self) -> bool {
        matches!(self, EditContext::None)
    }
}

impl fmt::Display for EditContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditContext::None => write!(f, "none"),
            EditContext::Contact => write!(f, "contact"),
            EditContext::Summary => write!(f, "summary"),
            EditContext::Skills => write!(f, "skills"),
            EditContext::AddSkill => write!(f, "add-skill"),
            EditContext::Education(id) => write!(f, "education:{id}"),
            EditContext::WorkExperience(id) => write!(f, "work-experience:{id}"),
            EditContext::AddEducation => write!(f, "add-education"),
            EditContext::AddWorkExperience => write!(f, "add-work-experience"),
        }
    }
}

/// Holds at most one active `EditContext` for a session.
///
/// Cloning yields another handle to the same store. Writes are last-writer-wins
/// and immediately visible to every handle and subscriber.
#[derive(Clone)]
pub struct EditModeStore {
    tx: Arc<watch::Sender<EditContext>>,
}

impl Default for EditModeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EditModeStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(EditContext::None);
        Self { tx: Arc::new(tx) }
    }

    pub fn current(&self) -> EditContext {
        *self.tx.borrow()
    }

    pub fn set_current_edit(&self, context: EditContext) {
        let previous = self.tx.send_replace(context);
        if !previous.is_none() && previous != context {
            debug!("Edit context {previous} replaced by {context}");
        }
    }

    pub fn clear_current_edit(&self) {
        self.set_current_edit(EditContext::None);
    }

    pub fn is_editing_anything(&self) -> bool {
        !self.current().is_none()
    }

    /// Structural comparison: `Education(a)` matches only `Education(a)`.
    pub fn is_editing_context(&self, context: &EditContext) -> bool {
        self.current() == *context
    }

    pub fn subscribe(&self) -> watch::Receiver<EditContext> {
        self.tx.subscribe()
    }

    /// Applies `f` to the current context as one update.
    pub(crate) fn update(&self, f: impl FnOnce(EditContext) -> EditContext) {
        self.tx.send_modify(|ctx| *ctx = f(*ctx));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_nothing_being_edited() {
        let store = EditModeStore::new();
        assert!(!store.is_editing_anything());
        assert!(store.is_editing_context(&EditContext::None));
    }

    #[test]
    fn test_last_writer_wins() {
        let store = EditModeStore::new();
        store.set_current_edit(EditContext::Contact);
        store.set_current_edit(EditContext::Summary);

        assert!(!store.is_editing_context(&EditContext::Contact));
        assert!(store.is_editing_context(&EditContext::Summary));
    }

    #[test]
    fn test_none_only_matches_when_idle() {
        let store = EditModeStore::new();
        store.set_current_edit(EditContext::AddSkill);
        assert!(!store.is_editing_context(&EditContext::None));

        store.clear_current_edit();
        assert!(store.is_editing_context(&EditContext::None));
        assert!(!store.is_editing_anything());
    }

    #[test]
    fn test_item_contexts_compare_by_id() {
        let store = EditModeStore::new();
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        store.set_current_edit(EditContext::Education(a));

        assert!(store.is_editing_context(&EditContext::Education(a)));
        assert!(!store.is_editing_context(&EditContext::Education(b)));
        assert!(!store.is_editing_context(&EditContext::WorkExperience(a)));
    }

    #[test]
    fn test_clones_share_state() {
        let store = EditModeStore::new();
        let other = store.clone();
        other.set_current_edit(EditContext::Skills);
        assert!(store.is_editing_context(&EditContext::Skills));
    }

    #[tokio::test]
    async fn test_subscribers_see_changes() {
        let store = EditModeStore::new();
        let mut rx = store.subscribe();

        store.set_current_edit(EditContext::AddWorkExperience);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), EditContext::AddWorkExperience);
    }

    #[test]
    fn test_display_names() {
        let id = Uuid::nil();
        assert_eq!(EditContext::AddEducation.to_string(), "add-education");
        assert_eq!(
            EditContext::WorkExperience(id).to_string(),
            format!("work-experience:{id}")
        );
    }
}
