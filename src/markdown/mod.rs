pub mod engine;

pub use engine::{create_comrak_options, render_markdown};
