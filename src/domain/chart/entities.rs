use super::value_objects::Viewport;
use crate::domain::market_data::{Bar, BarSeries, Timeframe};

/// Loaded chart data plus the viewport over it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartContent {
    pub bars: BarSeries,
    pub timeframe: Timeframe,
    pub viewport: Viewport,
}

impl ChartContent {
    pub fn new(bars: BarSeries, timeframe: Timeframe, surface_width: f32) -> Self {
        Self { bars, timeframe, viewport: Viewport::new(surface_width) }
    }

    /// The contiguous slice of bars currently on screen.
    pub fn visible_bars(&self) -> &[Bar] {
        let (start, end) = self.viewport.visible_range(self.bars.len());
        self.bars.slice(start..end)
    }
}

/// Screen state union
///
/// `Failed` replaces the silent log-and-ignore of fetch errors: the user
/// sees what happened and can retry. Every variant remembers the last
/// measured surface width so a layout pass before data arrival is not
/// lost.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartScreen {
    Initial,
    Loading { timeframe: Timeframe, surface_width: f32 },
    Content(ChartContent),
    Failed { timeframe: Timeframe, reason: String, surface_width: f32 },
}

impl ChartScreen {
    pub fn surface_width(&self) -> f32 {
        match self {
            Self::Initial => 0.0,
            Self::Loading { surface_width, .. } => *surface_width,
            Self::Content(content) => content.viewport.surface_width,
            Self::Failed { surface_width, .. } => *surface_width,
        }
    }

    pub fn timeframe(&self) -> Option<Timeframe> {
        match self {
            Self::Initial => None,
            Self::Loading { timeframe, .. } => Some(*timeframe),
            Self::Content(content) => Some(content.timeframe),
            Self::Failed { timeframe, .. } => Some(*timeframe),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }
}

/// External events the screen reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenEvent {
    LoadStarted(Timeframe),
    BarsLoaded { timeframe: Timeframe, bars: BarSeries },
    LoadFailed { timeframe: Timeframe, reason: String },
    Gesture { zoom: f32, pan_dx: f32 },
    SurfaceResized(f32),
}

/// Pure state transition; the host subscribes to the result for redraw.
///
/// Gestures outside `Content` are no-ops; a resize in any state is
/// folded in so the width survives into the next `Content`.
pub fn reduce(state: &ChartScreen, event: ScreenEvent) -> ChartScreen {
    match event {
        ScreenEvent::LoadStarted(timeframe) => {
            ChartScreen::Loading { timeframe, surface_width: state.surface_width() }
        }
        ScreenEvent::BarsLoaded { timeframe, bars } => {
            ChartScreen::Content(ChartContent::new(bars, timeframe, state.surface_width()))
        }
        ScreenEvent::LoadFailed { timeframe, reason } => {
            ChartScreen::Failed { timeframe, reason, surface_width: state.surface_width() }
        }
        ScreenEvent::Gesture { zoom, pan_dx } => match state {
            ChartScreen::Content(content) => {
                let viewport = content.viewport.gesture(zoom, pan_dx, content.bars.len());
                ChartScreen::Content(ChartContent { viewport, ..content.clone() })
            }
            other => other.clone(),
        },
        ScreenEvent::SurfaceResized(width) => match state {
            ChartScreen::Initial => {
                // width is only worth remembering once a load is underway
                ChartScreen::Initial
            }
            ChartScreen::Loading { timeframe, .. } => {
                ChartScreen::Loading { timeframe: *timeframe, surface_width: width.max(0.0) }
            }
            ChartScreen::Content(content) => {
                let viewport = content.viewport.resized(width);
                ChartScreen::Content(ChartContent { viewport, ..content.clone() })
            }
            ChartScreen::Failed { timeframe, reason, .. } => ChartScreen::Failed {
                timeframe: *timeframe,
                reason: reason.clone(),
                surface_width: width.max(0.0),
            },
        },
    }
}
