pub mod canvas_renderer;
pub mod draw_commands;

pub use canvas_renderer::CanvasRenderer;
pub use draw_commands::{build_draw_commands, DrawCommand, TextAnchor};
