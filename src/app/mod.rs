// Presentation layer: renderers and the interactive command loop.

pub mod interactive;
pub mod render;

pub use interactive::{run_interactive, Command};
pub use render::{render, OutputFormat};
