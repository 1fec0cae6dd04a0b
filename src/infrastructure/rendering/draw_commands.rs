use crate::domain::chart::{Color, Viewport};
use crate::domain::market_data::{BarSeries, Timeframe};
use crate::time_utils::{delimiter_label, should_draw_delimiter};

/// Wick stroke width in pixels.
pub const WICK_WIDTH: f32 = 1.0;
/// Dash pattern shared by every reference line.
pub const DASH_PATTERN: [f32; 2] = [4.0, 4.0];
/// Label font size in pixels.
pub const LABEL_SIZE_PX: f32 = 12.0;

const WICK_COLOR: Color = Color::WHITE;
const GRID_ALPHA: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Center,
    Right,
}

/// One backend-agnostic drawing primitive.
///
/// The whole chart frame is a plain sequence of these; any backend that
/// can stroke a line and place text can replay it.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        color: Color,
        dash: Option<[f32; 2]>,
    },
    Text {
        at: (f32, f32),
        content: String,
        color: Color,
        anchor: TextAnchor,
        size_px: f32,
    },
}

/// Emit the frame for the current viewport as draw commands.
///
/// Pure function of its inputs. Degenerate situations - no visible bars,
/// an unmeasured surface, a flat price window - produce an empty command
/// list instead of non-finite coordinates.
pub fn build_draw_commands(
    bars: &BarSeries,
    viewport: &Viewport,
    timeframe: Timeframe,
    surface_height: f32,
) -> Vec<DrawCommand> {
    if surface_height <= 0.0 || viewport.surface_width <= 0.0 {
        return Vec::new();
    }

    let (start, end) = viewport.visible_range(bars.len());
    let visible = bars.slice(start..end);
    let Some((min_low, max_high)) = bars.price_range(start..end) else {
        return Vec::new();
    };
    let price_range = max_high - min_low;
    if !(price_range.is_finite() && price_range > 0.0) {
        return Vec::new();
    }

    let px_per_point = surface_height / price_range;
    let price_to_y = |price: f32| surface_height - (price - min_low) * px_per_point;

    let bar_width = viewport.bar_width();
    let mut commands = Vec::with_capacity(visible.len() * 2 + 8);

    // Bars are newest-first: global index 0 sits at the right edge, the
    // pan translation is folded straight into the x coordinate.
    for (offset, bar) in visible.iter().enumerate() {
        let index = start + offset;
        let x = viewport.surface_width - bar_width * index as f32 + viewport.scrolled_by;

        let older = bars.get(index + 1);
        if should_draw_delimiter(bar, older, timeframe) {
            commands.push(DrawCommand::Line {
                from: (x, 0.0),
                to: (x, surface_height),
                width: 1.0,
                color: WICK_COLOR.with_alpha(GRID_ALPHA),
                dash: Some(DASH_PATTERN),
            });
            commands.push(DrawCommand::Text {
                at: (x, surface_height),
                content: delimiter_label(bar, timeframe),
                color: Color::WHITE,
                anchor: TextAnchor::Center,
                size_px: LABEL_SIZE_PX,
            });
        }

        commands.push(DrawCommand::Line {
            from: (x, price_to_y(bar.low.value())),
            to: (x, price_to_y(bar.high.value())),
            width: WICK_WIDTH,
            color: WICK_COLOR,
            dash: None,
        });
        commands.push(DrawCommand::Line {
            from: (x, price_to_y(bar.open.value())),
            to: (x, price_to_y(bar.close.value())),
            width: bar_width / 2.0,
            color: if bar.is_bullish() { Color::BULLISH } else { Color::BEARISH },
            dash: None,
        });
    }

    if let Some(latest) = bars.latest() {
        commands.extend(price_line(viewport.surface_width, 0.0, max_high));
        commands.extend(price_line(
            viewport.surface_width,
            price_to_y(latest.close.value()),
            latest.close.value(),
        ));
        commands.extend(price_line(viewport.surface_width, surface_height, min_low));
    }

    commands
}

/// Dashed horizontal reference line plus its right-aligned price label.
fn price_line(surface_width: f32, y: f32, price: f32) -> [DrawCommand; 2] {
    [
        DrawCommand::Line {
            from: (0.0, y),
            to: (surface_width, y),
            width: 1.0,
            color: Color::WHITE,
            dash: Some(DASH_PATTERN),
        },
        DrawCommand::Text {
            at: (surface_width, y),
            content: format!("{:.2}", price),
            color: Color::WHITE,
            anchor: TextAnchor::Right,
            size_px: LABEL_SIZE_PX,
        },
    ]
}
