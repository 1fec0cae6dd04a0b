pub mod entities;
pub mod value_objects;

pub use entities::{reduce, ChartContent, ChartScreen, ScreenEvent};
pub use value_objects::{Color, Viewport, DEFAULT_VISIBLE_BARS, MIN_VISIBLE_BARS};
