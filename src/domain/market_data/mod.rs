pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::{Bar, BarSeries};
pub use repositories::BarRepository;
pub use value_objects::{Price, Timeframe, Timestamp};
