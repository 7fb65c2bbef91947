pub mod edit_mode;
pub mod section_edit;

pub use edit_mode::{EditContext, EditModeStore};
pub use section_edit::{SectionEditState, SectionEditStore};
