//! Pure scale math for the scatter view: nice-rounded axis extents and
//! clamping of the zoom/pan window. Kept free of egui types so the view
//! logic is testable without a live UI.

/// A visible window over the two axes, in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl Window {
    pub fn new(x: (f64, f64), y: (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Tick step for a span divided into ~`count` intervals, choosing from the
/// 1/2/5/10 ladder.
fn tick_increment(span: f64, count: f64) -> f64 {
    let step = span / count;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * 10f64.powf(power)
}

/// Expand [min, max] outward to round tick boundaries. A degenerate
/// single-value extent is widened by one unit on each side so the scale
/// stays invertible.
pub fn nice_extent(min: f64, max: f64) -> (f64, f64) {
    if !(min.is_finite() && max.is_finite()) || min > max {
        return (0.0, 1.0);
    }
    if min == max {
        return (min - 1.0, max + 1.0);
    }
    let mut lo = min;
    let mut hi = max;
    // Two passes: the first rounding can change the span enough to pick a
    // different step.
    for _ in 0..2 {
        let step = tick_increment(hi - lo, 10.0);
        lo = (min / step).floor() * step;
        hi = (max / step).ceil() * step;
    }
    (lo, hi)
}

/// Clamp one axis of a proposed window against its base extent: the span
/// may shrink to at most `base_span / max_scale` and grow to the full base
/// span, and the window slides back inside the base extent when panned
/// past either edge.
pub fn clamp_axis(window: (f64, f64), base: (f64, f64), max_scale: f64) -> (f64, f64) {
    let base_span = base.1 - base.0;
    if !base_span.is_finite() || base_span <= 0.0 {
        return base;
    }
    let min_span = base_span / max_scale.max(1.0);
    let span = (window.1 - window.0).clamp(min_span, base_span);
    let mut lo = window.0;
    if !lo.is_finite() {
        lo = base.0;
    }
    if lo < base.0 {
        lo = base.0;
    }
    if lo + span > base.1 {
        lo = base.1 - span;
    }
    (lo, lo + span)
}

/// Clamp both axes of the composed zoom/pan window.
pub fn clamp_window(window: Window, base: Window, max_scale: f64) -> Window {
    Window {
        x: clamp_axis(window.x, base.x, max_scale),
        y: clamp_axis(window.y, base.y, max_scale),
    }
}
