//! Scroll-triggered reveal animations.
//!
//! A [`Reveal`] is a one-shot `Hidden -> Visible` latch fed with intersection
//! ratios. A [`Variant`] describes the hidden geometry of an element; its
//! resting geometry is always the identity transform at full opacity.

pub const DEFAULT_DURATION: f64 = 0.6;
pub const SECTION_THRESHOLD: f64 = 0.2;
pub const GROUP_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    threshold: f64,
    state: RevealState,
}

impl Reveal {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            state: RevealState::Hidden,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_visible(&self) -> bool {
        self.state == RevealState::Visible
    }

    /// Feeds the fraction of the element currently inside the viewport.
    ///
    /// Returns `true` only for the call that flips the latch to visible.
    /// Once visible, every later observation is ignored.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.is_visible() || !(ratio > 0.0 && ratio >= self.threshold) {
            return false;
        }
        self.state = RevealState::Visible;
        true
    }
}

impl From<bool> for RevealState {
    fn from(visible: bool) -> Self {
        if visible {
            RevealState::Visible
        } else {
            RevealState::Hidden
        }
    }
}

impl Default for Reveal {
    fn default() -> Self {
        Self::new(SECTION_THRESHOLD)
    }
}

/// Fraction of a box of `height` starting at `top` (viewport coordinates)
/// that lies within `[0, viewport_height]`.
pub fn visible_fraction(top: f64, height: f64, viewport_height: f64) -> f64 {
    if height <= 0.0 || viewport_height <= 0.0 {
        return 0.0;
    }
    let visible = (top + height).min(viewport_height) - top.max(0.0);
    (visible / height).clamp(0.0, 1.0)
}

/// Ratio fed to [`Reveal::observe`] for an element of `element_height`.
///
/// Elements taller than the viewport can never reach a large intersection
/// ratio, so for them the share of the viewport they cover is used instead.
pub fn effective_ratio(intersection_ratio: f64, element_height: f64, viewport_height: f64) -> f64 {
    if element_height > viewport_height && viewport_height > 0.0 {
        (intersection_ratio * element_height / viewport_height).clamp(0.0, 1.0)
    } else {
        intersection_ratio.clamp(0.0, 1.0)
    }
}

/// Ratio of an element whose bounding box starts at `top` with `height`,
/// ready for [`Reveal::observe`].
pub fn reveal_ratio(top: f64, height: f64, viewport_height: f64) -> f64 {
    effective_ratio(
        visible_fraction(top, height, viewport_height),
        height,
        viewport_height,
    )
}

/// Ratios at which the intersection observer reports: every 5% plus the
/// reveal threshold itself.
pub fn observer_thresholds(threshold: f64) -> Vec<f64> {
    let mut steps = (0..=20).map(|i| i as f64 / 20.0).collect::<Vec<_>>();
    let threshold = threshold.clamp(0.0, 1.0);
    if !steps.iter().any(|s| (s - threshold).abs() < 1e-9) {
        steps.push(threshold);
        steps.sort_by(f64::total_cmp);
    }
    steps
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Variant {
    /// Rise 20px while fading in.
    FadeIn,
    /// Enter from 60px on the left.
    SlideIn,
    /// Enter from 60px on the right.
    SlideInRight,
    /// Grow from 80%.
    ScaleUp,
    /// Opacity only.
    Fade,
    /// Rise from a custom vertical offset in px.
    Rise(f64),
    /// Slide from a custom horizontal offset in px.
    SlideFrom(f64),
}

impl Variant {
    fn hidden_transform(self) -> String {
        match self {
            Variant::FadeIn => "translateY(20px)".to_string(),
            Variant::SlideIn => "translateX(-60px)".to_string(),
            Variant::SlideInRight => "translateX(60px)".to_string(),
            Variant::ScaleUp => "scale(0.8)".to_string(),
            Variant::Fade => "none".to_string(),
            Variant::Rise(px) => format!("translateY({px}px)"),
            Variant::SlideFrom(px) => format!("translateX({px}px)"),
        }
    }

    /// Experience cards alternate sides.
    pub fn alternating(index: usize) -> Variant {
        if index % 2 == 0 {
            Variant::SlideIn
        } else {
            Variant::SlideInRight
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: f64,
    pub delay: f64,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            delay: 0.0,
        }
    }
}

impl Transition {
    pub fn with_delay(self, delay: f64) -> Self {
        Self { delay, ..self }
    }

    pub fn with_duration(self, duration: f64) -> Self {
        Self { duration, ..self }
    }
}

/// Per-child delay inside a container, producing a cascading reveal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub base: f64,
    pub per_child: f64,
}

impl Stagger {
    pub const CONTAINER: Stagger = Stagger {
        base: 0.0,
        per_child: 0.2,
    };
    pub const LIST: Stagger = Stagger {
        base: 0.0,
        per_child: 0.1,
    };

    pub fn delay(&self, index: usize) -> f64 {
        self.base + self.per_child * index as f64
    }
}

impl Default for Stagger {
    fn default() -> Self {
        Stagger::CONTAINER
    }
}

/// Inline style for `variant` in `state`.
pub fn style(variant: Variant, state: RevealState, transition: Transition) -> String {
    let timing = format!(
        "transition: opacity {d}s ease-out {l}s, transform {d}s ease-out {l}s;",
        d = transition.duration,
        l = transition.delay,
    );
    match state {
        RevealState::Hidden => format!(
            "opacity: 0; transform: {}; {timing}",
            variant.hidden_transform()
        ),
        RevealState::Visible => format!("opacity: 1; transform: none; {timing}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_fires_once() {
        let mut reveal = Reveal::new(0.2);
        assert!(!reveal.is_visible());
        assert!(!reveal.observe(0.1));
        assert!(!reveal.is_visible());

        // scrolls into view
        assert!(reveal.observe(0.5));
        assert!(reveal.is_visible());

        // scrolls out and back in again
        assert!(!reveal.observe(0.0));
        assert!(reveal.is_visible());
        assert!(!reveal.observe(1.0));
        assert!(reveal.is_visible());
    }

    #[test]
    fn test_nan_ratio_never_fires() {
        let mut reveal = Reveal::new(0.2);
        assert!(!reveal.observe(f64::NAN));
        assert!(!reveal.is_visible());

        let mut eager = Reveal::new(0.0);
        assert!(!eager.observe(effective_ratio(f64::NAN, 3000.0, 800.0)));
        assert!(!eager.is_visible());
        assert!(eager.observe(0.5));
    }

    #[test]
    fn test_reveal_fires_exactly_at_threshold() {
        let mut reveal = Reveal::new(0.2);
        assert!(reveal.observe(0.2));
    }

    #[test]
    fn test_zero_threshold_needs_some_intersection() {
        let mut reveal = Reveal::new(0.0);
        assert!(!reveal.observe(0.0));
        assert!(reveal.observe(0.01));
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(Reveal::new(4.0).threshold(), 1.0);
        assert_eq!(Reveal::new(-1.0).threshold(), 0.0);
        assert_eq!(Reveal::default().threshold(), SECTION_THRESHOLD);
    }

    #[test]
    fn test_instances_are_independent() {
        let mut first = Reveal::new(0.1);
        let second = Reveal::new(0.1);
        assert!(first.observe(0.5));
        assert!(!second.is_visible());
    }

    #[test]
    fn test_visible_fraction() {
        // fully inside
        assert_eq!(visible_fraction(100.0, 200.0, 800.0), 1.0);
        // half below the fold
        assert_eq!(visible_fraction(700.0, 200.0, 800.0), 0.5);
        // scrolled past the top by a quarter
        assert_eq!(visible_fraction(-50.0, 200.0, 800.0), 0.75);
        // entirely off screen
        assert_eq!(visible_fraction(900.0, 200.0, 800.0), 0.0);
        assert_eq!(visible_fraction(-300.0, 200.0, 800.0), 0.0);
        // degenerate box
        assert_eq!(visible_fraction(10.0, 0.0, 800.0), 0.0);
    }

    #[test]
    fn test_effective_ratio_for_tall_elements() {
        // short element: ratio unchanged
        assert_eq!(effective_ratio(0.5, 400.0, 800.0), 0.5);
        // element three viewports tall, 10% visible fills 37.5% of the screen
        assert!((effective_ratio(0.1, 3000.0, 800.0) - 0.375).abs() < 1e-9);
        assert_eq!(effective_ratio(0.9, 3000.0, 800.0), 1.0);
        assert_eq!(effective_ratio(0.3, 3000.0, 0.0), 0.3);
    }

    #[test]
    fn test_reveal_ratio_from_bounding_box() {
        // half of a short card below the fold
        assert_eq!(reveal_ratio(700.0, 200.0, 800.0), 0.5);
        // tall section filling the whole viewport counts as fully seen
        assert!((reveal_ratio(-500.0, 3000.0, 800.0) - 1.0).abs() < 1e-9);
        // tall section peeking 240px into the viewport
        assert!((reveal_ratio(560.0, 3000.0, 800.0) - 0.3).abs() < 1e-9);
        assert_eq!(reveal_ratio(900.0, 200.0, 800.0), 0.0);
        // no viewport yet
        assert_eq!(reveal_ratio(0.0, 200.0, 0.0), 0.0);

        let mut section = Reveal::new(SECTION_THRESHOLD);
        assert!(!section.observe(reveal_ratio(700.0, 1000.0, 800.0)));
        assert!(section.observe(reveal_ratio(500.0, 1000.0, 800.0)));
    }

    #[test]
    fn test_observer_thresholds() {
        let steps = observer_thresholds(0.2);
        assert_eq!(steps.len(), 21);
        assert_eq!(steps[0], 0.0);
        assert_eq!(steps[20], 1.0);

        let steps = observer_thresholds(0.12);
        assert_eq!(steps.len(), 22);
        assert!(steps.contains(&0.12));
        assert!(steps.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_state_from_bool() {
        assert_eq!(RevealState::from(true), RevealState::Visible);
        assert_eq!(RevealState::from(false), RevealState::Hidden);
    }

    #[test]
    fn test_stagger_delays() {
        assert_eq!(Stagger::CONTAINER.delay(0), 0.0);
        assert!((Stagger::CONTAINER.delay(3) - 0.6).abs() < 1e-9);
        assert!((Stagger::LIST.delay(2) - 0.2).abs() < 1e-9);
        let offset = Stagger {
            base: 0.25,
            per_child: 0.5,
        };
        assert!((offset.delay(1) - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_style_hidden_and_visible() {
        let t = Transition::default().with_delay(0.2);
        let hidden = style(Variant::SlideIn, RevealState::Hidden, t);
        assert!(hidden.starts_with("opacity: 0; transform: translateX(-60px);"));
        assert!(hidden.contains("opacity 0.6s ease-out 0.2s"));

        let visible = style(Variant::SlideIn, RevealState::Visible, t);
        assert!(visible.starts_with("opacity: 1; transform: none;"));
        assert!(visible.contains("transform 0.6s ease-out 0.2s"));

        let rise = style(Variant::Rise(75.0), RevealState::Hidden, t.with_duration(0.5));
        assert!(rise.contains("translateY(75px)"));
        assert!(rise.contains("opacity 0.5s"));

        let nudge = style(Variant::SlideFrom(-20.0), RevealState::Hidden, t);
        assert!(nudge.contains("translateX(-20px)"));
    }

    #[test]
    fn test_alternating_variants() {
        assert_eq!(Variant::alternating(0), Variant::SlideIn);
        assert_eq!(Variant::alternating(1), Variant::SlideInRight);
        assert_eq!(Variant::alternating(2), Variant::SlideIn);
    }
}
