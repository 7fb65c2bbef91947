//! Per-section edit flags, derived from the single `EditModeStore` context.
//!
//! Older UI code reads "is the skills section in edit mode" and "which
//! education item is open" as separate values. Here those are projections of
//! one `EditContext`, so at most one section can be in edit mode and the flags
//! can never disagree with `EditModeStore`.

use std::sync::Arc;

use tokio::sync::watch;
use uuid::Uuid;

use crate::store::edit_mode::{EditContext, EditModeStore};

/// Point-in-time view of every section flag and item id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionEditState {
    pub is_editing_contact: bool,
    pub is_editing_summary: bool,
    pub is_editing_skills: bool,
    pub is_editing_education: bool,
    pub is_editing_work_experience: bool,
    pub editing_education_id: Option<Uuid>,
    pub editing_work_experience_id: Option<Uuid>,
    pub has_unsaved_changes: bool,
    pub selected_scoped_resume_id: Option<Uuid>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct SessionFlags {
    has_unsaved_changes: bool,
    selected_scoped_resume_id: Option<Uuid>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Contact,
    Summary,
    Skills,
    Education,
    WorkExperience,
}

impl Section {
    fn contains(self, context: EditContext) -> bool {
        match self {
            Section::Contact => context == EditContext::Contact,
            Section::Summary => context == EditContext::Summary,
            Section::Skills => matches!(context, EditContext::Skills | EditContext::AddSkill),
            Section::Education => {
                matches!(context, EditContext::Education(_) | EditContext::AddEducation)
            }
            Section::WorkExperience => matches!(
                context,
                EditContext::WorkExperience(_) | EditContext::AddWorkExperience
            ),
        }
    }

    /// Context selected when the section is switched on. Multi-item sections
    /// open on their "add" context, with no item selected.
    fn entry_context(self) -> EditContext {
        match self {
            Section::Contact => EditContext::Contact,
            Section::Summary => EditContext::Summary,
            Section::Skills => EditContext::Skills,
            Section::Education => EditContext::AddEducation,
            Section::WorkExperience => EditContext::AddWorkExperience,
        }
    }
}

#[derive(Clone)]
pub struct SectionEditStore {
    edit: EditModeStore,
    flags: Arc<watch::Sender<SessionFlags>>,
}

impl SectionEditStore {
    pub fn new(edit: EditModeStore) -> Self {
        let (flags, _rx) = watch::channel(SessionFlags::default());
        Self {
            edit,
            flags: Arc::new(flags),
        }
    }

    pub fn edit_mode(&self) -> &EditModeStore {
        &self.edit
    }

    pub fn snapshot(&self) -> SectionEditState {
        let context = self.edit.current();
        let flags = *self.flags.borrow();
        SectionEditState {
            is_editing_contact: Section::Contact.contains(context),
            is_editing_summary: Section::Summary.contains(context),
            is_editing_skills: Section::Skills.contains(context),
            is_editing_education: Section::Education.contains(context),
            is_editing_work_experience: Section::WorkExperience.contains(context),
            editing_education_id: match context {
                EditContext::Education(id) => Some(id),
                _ => None,
            },
            editing_work_experience_id: match context {
                EditContext::WorkExperience(id) => Some(id),
                _ => None,
            },
            has_unsaved_changes: flags.has_unsaved_changes,
            selected_scoped_resume_id: flags.selected_scoped_resume_id,
        }
    }

    pub fn is_editing_contact(&self) -> bool {
        Section::Contact.contains(self.edit.current())
    }

    pub fn is_editing_summary(&self) -> bool {
        Section::Summary.contains(self.edit.current())
    }

    pub fn is_editing_skills(&self) -> bool {
        Section::Skills.contains(self.edit.current())
    }

    pub fn is_editing_education(&self) -> bool {
        Section::Education.contains(self.edit.current())
    }

    pub fn is_editing_work_experience(&self) -> bool {
        Section::WorkExperience.contains(self.edit.current())
    }

    pub fn toggle_editing_contact(&self) {
        self.toggle(Section::Contact);
    }

    pub fn toggle_editing_summary(&self) {
        self.toggle(Section::Summary);
    }

    pub fn toggle_editing_skills(&self) {
        self.toggle(Section::Skills);
    }

    pub fn toggle_editing_education(&self) {
        self.toggle(Section::Education);
    }

    pub fn toggle_editing_work_experience(&self) {
        self.toggle(Section::WorkExperience);
    }

    /// `Some(id)` opens that education item; `None` drops back to the
    /// section's add context if an item was open.
    pub fn set_editing_education_id(&self, id: Option<Uuid>) {
        self.edit.update(|current| match (id, current) {
            (Some(id), _) => EditContext::Education(id),
            (None, EditContext::Education(_)) => EditContext::AddEducation,
            (None, other) => other,
        });
    }

    pub fn set_editing_work_experience_id(&self, id: Option<Uuid>) {
        self.edit.update(|current| match (id, current) {
            (Some(id), _) => EditContext::WorkExperience(id),
            (None, EditContext::WorkExperience(_)) => EditContext::AddWorkExperience,
            (None, other) => other,
        });
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.flags.borrow().has_unsaved_changes
    }

    pub fn set_has_unsaved_changes(&self, value: bool) {
        self.flags
            .send_modify(|flags| flags.has_unsaved_changes = value);
    }

    pub fn selected_scoped_resume_id(&self) -> Option<Uuid> {
        self.flags.borrow().selected_scoped_resume_id
    }

    pub fn select_scoped_resume(&self, id: Option<Uuid>) {
        self.flags
            .send_modify(|flags| flags.selected_scoped_resume_id = id);
    }

    /// Leaves every edit mode and forgets unsaved changes. The selected
    /// scoped resume is kept.
    pub fn exit_all_edit_modes(&self) {
        self.edit.clear_current_edit();
        self.set_has_unsaved_changes(false);
    }

    fn toggle(&self, section: Section) {
        self.edit.update(|current| {
            if section.contains(current) {
                EditContext::None
            } else {
                section.entry_context()
            }
        });
        self.set_has_unsaved_changes(false);
    }
}
