//! Resume → `.docx` rendering.
//!
//! A single traversal over the resume record; the two shipped templates only
//! differ in the `LayoutPolicy` they hand to it.

pub mod layout;
pub mod renderer;

pub use layout::{LayoutPolicy, TemplateVariant};
pub use renderer::render_resume;
