mod model;
mod reader;
mod collector;
mod utils;

pub use model::RenderedPage;
pub use reader::read_page;
pub use collector::collect_pages;
pub use utils::determine_output_path;
