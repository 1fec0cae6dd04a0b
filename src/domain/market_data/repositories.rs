use crate::domain::errors::ChartError;
use crate::domain::market_data::{Bar, Timeframe};
use async_trait::async_trait;

/// Capability seam for fetching one batch of bars.
///
/// Implementations return the batch newest-first, and surface transport
/// and decode failures as `ChartError`.
#[async_trait(?Send)]
pub trait BarRepository {
    async fn load_bars(&self, timeframe: Timeframe) -> Result<Vec<Bar>, ChartError>;
}
