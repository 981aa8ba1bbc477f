//! Page layout: loading the shared template and rendering pages into it.

pub mod escape;
pub mod template;
mod renderer;

pub use renderer::LayoutRenderer;
pub use template::TemplateDocument;
