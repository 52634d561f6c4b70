//! CLI command handlers, one per file.

mod check;
mod completions;
mod render;
mod resolve;

pub use check::run_check;
pub use completions::{run_completions, run_man};
pub use render::run_render;
pub use resolve::run_resolve;
