pub mod inclusion;
pub mod notify;
pub mod scoped_resume;
pub mod status;

pub use inclusion::InclusionFlows;
pub use notify::{Notifier, Toast, ToastKind, TracingNotifier};
pub use scoped_resume::{
    CreateScopedResumeDialog, DeleteScopedResumeDialog, DuplicateScopedResumeDialog,
    RenameScopedResumeDialog, ScopedResumeFlows, ScopedResumeList,
};
pub use status::MutationStatus;
