/// Zooming out never shows fewer bars than this.
pub const MIN_VISIBLE_BARS: usize = 20;
/// Visible bar count of a freshly loaded chart.
pub const DEFAULT_VISIBLE_BARS: usize = 100;

/// Value Object - Viewport
///
/// The visible window over a newest-first bar sequence: how many bars are
/// on screen, how far the content is scrolled (pixels), and how wide the
/// drawing surface is. Everything else (per-bar width, visible range) is
/// derived on demand so the four inputs can never drift apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub visible_bar_count: usize,
    pub scrolled_by: f32,
    pub surface_width: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { visible_bar_count: DEFAULT_VISIBLE_BARS, scrolled_by: 0.0, surface_width: 0.0 }
    }
}

impl Viewport {
    pub fn new(surface_width: f32) -> Self {
        Self { surface_width: surface_width.max(0.0), ..Default::default() }
    }

    /// Pixels allotted per bar. Zero while the surface is unmeasured.
    pub fn bar_width(&self) -> f32 {
        if self.visible_bar_count == 0 {
            return 0.0;
        }
        self.surface_width / self.visible_bar_count as f32
    }

    /// Apply a multiplicative zoom factor; > 1 shows fewer, wider bars.
    ///
    /// Non-finite or non-positive factors are ignored. The result is
    /// clamped to [MIN_VISIBLE_BARS, total], upper bound winning when the
    /// batch is smaller than the minimum.
    pub fn zoomed(self, factor: f32, total_bars: usize) -> Self {
        if !factor.is_finite() || factor <= 0.0 {
            return self;
        }
        let target = (self.visible_bar_count as f32 / factor).round();
        let count = (target.max(MIN_VISIBLE_BARS as f32) as usize).min(total_bars);
        Self { visible_bar_count: count, ..self }
    }

    /// Apply a pan delta in pixels.
    ///
    /// The scroll offset stays within [0, max(0, content - surface)]:
    /// content narrower than the surface collapses the range to zero
    /// rather than producing a negative upper bound.
    pub fn panned(self, delta_x: f32, total_bars: usize) -> Self {
        if !delta_x.is_finite() {
            return self;
        }
        let content_width = self.bar_width() * total_bars as f32;
        let upper = (content_width - self.surface_width).max(0.0);
        let scrolled_by = (self.scrolled_by + delta_x).clamp(0.0, upper);
        Self { scrolled_by, ..self }
    }

    /// One gesture frame: zoom and pan together, both computed against
    /// the pre-gesture bar width the way the host toolkit delivers them.
    pub fn gesture(self, zoom_factor: f32, pan_dx: f32, total_bars: usize) -> Self {
        let panned = self.panned(pan_dx, total_bars);
        let zoomed = self.zoomed(zoom_factor, total_bars);
        Self { visible_bar_count: zoomed.visible_bar_count, scrolled_by: panned.scrolled_by, ..self }
    }

    /// New surface width; the scroll offset is deliberately kept.
    pub fn resized(self, surface_width: f32) -> Self {
        Self { surface_width: surface_width.max(0.0), ..self }
    }

    /// Visible window as [start, end) indices into the bar sequence.
    ///
    /// Always recomputed, never cached: slice length <= visible bar
    /// count, indices never out of bounds, and an unmeasured surface
    /// (bar width 0) degrades to the newest bars.
    pub fn visible_range(&self, total_bars: usize) -> (usize, usize) {
        let bar_width = self.bar_width();
        let start = if bar_width > 0.0 {
            ((self.scrolled_by / bar_width).round().max(0.0) as usize).min(total_bars)
        } else {
            0
        };
        let end = (start + self.visible_bar_count).min(total_bars);
        (start, end)
    }
}

/// Value Object - Color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self { a: alpha, ..*self }
    }

    /// CSS color string for canvas stroke/fill styles.
    pub fn to_css(&self) -> String {
        format!(
            "rgba({},{},{},{})",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            self.a
        )
    }

    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
    /// Candle body when close is above open.
    pub const BULLISH: Color = Color { r: 0.455, g: 0.780, b: 0.529, a: 1.0 };
    /// Candle body otherwise, open == close included.
    pub const BEARISH: Color = Color { r: 0.882, g: 0.424, b: 0.282, a: 1.0 };
    pub const BACKGROUND: Color = Color { r: 0.102, g: 0.102, b: 0.102, a: 1.0 };
}
