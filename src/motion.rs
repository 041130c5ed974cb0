//! Animation parameters shared by every page.
//!
//! Everything here is plain data and arithmetic so the components in `app` only have to
//! decide *when* something is visible; *how* it moves is decided here.

/// Cubic-bezier control points for entrance transitions.
pub const EASE: [f64; 4] = [0.21, 0.47, 0.32, 0.98];

/// Duration of the progress bar fill, in seconds.
pub const GROW_DURATION: f64 = 1.5;

pub fn ease() -> String {
    let [x1, y1, x2, y2] = EASE;
    format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
}

/// Entrance transition for `FadeIn`: hidden at `offset` px below with zero opacity,
/// settled at its layout position once revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    /// Seconds before the transition starts.
    pub delay: f64,
    /// Seconds the transition runs.
    pub duration: f64,
    /// Vertical start offset in px.
    pub offset: f64,
    /// Intersection root margin; negative fires before the element fully enters.
    pub margin: &'static str,
}

impl Default for Reveal {
    fn default() -> Self {
        Self {
            delay: 0.0,
            duration: 0.8,
            offset: 20.0,
            margin: "-50px",
        }
    }
}

impl Reveal {
    pub fn delayed(delay: f64) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    pub fn style(&self, visible: bool) -> String {
        let (opacity, y) = if visible { (1.0, 0.0) } else { (0.0, self.offset) };
        let ease = ease();
        let d = self.duration;
        let delay = self.delay;
        format!(
            "opacity: {opacity}; transform: translateY({y}px); \
             transition: opacity {d:.2}s {ease} {delay:.2}s, transform {d:.2}s {ease} {delay:.2}s;"
        )
    }
}

/// Once-only visibility latch. The first intersection sets it and nothing clears it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Latch {
    fired: bool,
}

impl Latch {
    /// Feed an intersection reading; returns whether the latch has fired.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        self.fired |= intersecting;
        self.fired
    }

    pub fn fired(&self) -> bool {
        self.fired
    }
}

/// Delay for the `index`th item of a staggered group.
pub fn stagger(base: f64, step: f64, index: usize) -> f64 {
    base + step * index as f64
}

/// Linear map of `value` from `input` onto `output`, clamped to the output range.
pub fn interpolate(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (i0, i1) = input;
    let (o0, o1) = output;
    if i1 == i0 {
        return o0;
    }
    let t = ((value - i0) / (i1 - i0)).clamp(0.0, 1.0);
    o0 + (o1 - o0) * t
}

/// Hero parallax for a given window scroll: (translateY px, opacity).
pub fn parallax(scroll_y: f64) -> (f64, f64) {
    (
        interpolate(scroll_y, (0.0, 500.0), (0.0, 100.0)),
        interpolate(scroll_y, (0.0, 300.0), (1.0, 0.0)),
    )
}

/// Width transition for a progress fill; collapsed until visible.
pub fn grow_style(width: &str, visible: bool, delay: f64) -> String {
    let width = if visible { width } else { "0%" };
    format!("width: {width}; transition: width {GROW_DURATION}s ease-out {delay:.2}s;")
}
