pub mod resume;
pub mod scoped;
