//! Scroll-linked offsets for decorative elements, smoothed by a spring.

/// Largest frame delta fed to a spring, in seconds. Longer gaps (background
/// tabs, breakpoints) are treated as one slow frame.
const MAX_FRAME: f64 = 0.1;
/// Integration sub-step, in seconds.
const SUB_STEP: f64 = 1.0 / 240.0;
pub const SETTLE_TOLERANCE: f64 = 0.01;

/// Clamped linear map from `input` to `output`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearMap {
    pub input: (f64, f64),
    pub output: (f64, f64),
}

impl LinearMap {
    pub const fn new(input: (f64, f64), output: (f64, f64)) -> Self {
        Self { input, output }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (in_lo, in_hi) = self.input;
        let (out_lo, out_hi) = self.output;
        if in_hi == in_lo {
            return out_lo;
        }
        let t = ((value - in_lo) / (in_hi - in_lo)).clamp(0.0, 1.0);
        out_lo + (out_hi - out_lo) * t
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(100.0, 30.0)
    }
}

impl Spring {
    pub fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
            value: 0.0,
            velocity: 0.0,
            target: 0.0,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn is_settled(&self, tolerance: f64) -> bool {
        (self.value - self.target).abs() < tolerance && self.velocity.abs() < tolerance
    }

    /// Advances the simulation by `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        let mut remaining = dt.clamp(0.0, MAX_FRAME);
        while remaining > 0.0 {
            let h = remaining.min(SUB_STEP);
            let force =
                -self.stiffness * (self.value - self.target) - self.damping * self.velocity;
            self.velocity += force / self.mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        if self.is_settled(SETTLE_TOLERANCE / 10.0) {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }
}

/// Scroll mapping of one decorative element. Either axis may be absent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxLayer {
    pub y: Option<LinearMap>,
    pub rotate: Option<LinearMap>,
}

impl ParallaxLayer {
    pub const BACKGROUND_PRIMARY: ParallaxLayer = ParallaxLayer {
        y: Some(LinearMap::new((0.0, 1000.0), (0.0, 200.0))),
        rotate: Some(LinearMap::new((0.0, 1000.0), (0.0, 20.0))),
    };
    pub const BACKGROUND_ACCENT: ParallaxLayer = ParallaxLayer {
        y: Some(LinearMap::new((0.0, 1000.0), (0.0, -150.0))),
        rotate: Some(LinearMap::new((0.0, 1000.0), (0.0, -15.0))),
    };
    pub const HERO_PRIMARY: ParallaxLayer = ParallaxLayer {
        y: Some(LinearMap::new((0.0, 500.0), (0.0, 100.0))),
        rotate: Some(LinearMap::new((0.0, 500.0), (0.0, 5.0))),
    };
    pub const HERO_ACCENT: ParallaxLayer = ParallaxLayer {
        y: Some(LinearMap::new((0.0, 500.0), (0.0, -50.0))),
        rotate: None,
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxState {
    layer: ParallaxLayer,
    y: Spring,
    rotate: Spring,
}

impl ParallaxState {
    pub fn new(layer: ParallaxLayer) -> Self {
        Self {
            layer,
            y: Spring::default(),
            rotate: Spring::default(),
        }
    }

    pub fn set_scroll(&mut self, scroll: f64) {
        if let Some(map) = self.layer.y {
            self.y.set_target(map.map(scroll));
        }
        if let Some(map) = self.layer.rotate {
            self.rotate.set_target(map.map(scroll));
        }
    }

    /// Advances both springs; returns whether anything is still moving.
    pub fn tick(&mut self, dt: f64) -> bool {
        self.y.step(dt);
        self.rotate.step(dt);
        !self.is_settled()
    }

    pub fn is_settled(&self) -> bool {
        self.y.is_settled(SETTLE_TOLERANCE) && self.rotate.is_settled(SETTLE_TOLERANCE)
    }

    pub fn offset(&self) -> (f64, f64) {
        (self.y.value(), self.rotate.value())
    }

    pub fn transform(&self) -> String {
        let mut parts = Vec::with_capacity(2);
        if self.layer.y.is_some() {
            parts.push(format!("translateY({:.2}px)", self.y.value()));
        }
        if self.layer.rotate.is_some() {
            parts.push(format!("rotate({:.2}deg)", self.rotate.value()));
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(" ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn settle(state: &mut ParallaxState) -> usize {
        let mut frames = 0;
        while state.tick(FRAME) {
            frames += 1;
            assert!(frames < 10_000, "spring never settled");
        }
        frames
    }

    #[test]
    fn test_linear_map_bounds_and_clamp() {
        let map = LinearMap::new((0.0, 1000.0), (0.0, 200.0));
        assert_eq!(map.map(0.0), 0.0);
        assert_eq!(map.map(500.0), 100.0);
        assert_eq!(map.map(1000.0), 200.0);
        assert_eq!(map.map(-20.0), 0.0);
        assert_eq!(map.map(5000.0), 200.0);

        let inverted = LinearMap::new((0.0, 1000.0), (0.0, -150.0));
        assert_eq!(inverted.map(1000.0), -150.0);

        let degenerate = LinearMap::new((3.0, 3.0), (1.0, 2.0));
        assert_eq!(degenerate.map(10.0), 1.0);
    }

    #[test]
    fn test_linear_map_is_monotonic() {
        let map = ParallaxLayer::BACKGROUND_PRIMARY.y.expect("has y");
        let mut previous = map.map(0.0);
        for s in (0..=1000).step_by(10) {
            let current = map.map(s as f64);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_zero_scroll_stays_at_baseline() {
        let mut state = ParallaxState::new(ParallaxLayer::BACKGROUND_PRIMARY);
        state.set_scroll(0.0);
        assert!(!state.tick(FRAME));
        assert_eq!(state.offset(), (0.0, 0.0));
    }

    #[test]
    fn test_upper_bound_settles_on_declared_offset() {
        let mut state = ParallaxState::new(ParallaxLayer::BACKGROUND_PRIMARY);
        state.set_scroll(1000.0);
        settle(&mut state);
        let (dy, rot) = state.offset();
        assert!((dy - 200.0).abs() < SETTLE_TOLERANCE);
        assert!((rot - 20.0).abs() < SETTLE_TOLERANCE);
    }

    #[test]
    fn test_spring_lags_then_approaches_without_overshoot() {
        let mut spring = Spring::default();
        spring.set_target(100.0);
        spring.step(FRAME);
        assert!(spring.value() > 0.0);
        assert!(spring.value() < 100.0);

        let mut previous = spring.value();
        for _ in 0..600 {
            spring.step(FRAME);
            assert!(spring.value() >= previous - 1e-9);
            assert!(spring.value() <= 100.0 + 1e-6);
            previous = spring.value();
        }
        assert!(spring.is_settled(SETTLE_TOLERANCE));
    }

    #[test]
    fn test_large_frame_gap_is_clamped() {
        let mut spring = Spring::default();
        spring.set_target(50.0);
        spring.step(30.0);
        assert!(spring.value() < 50.0);
        assert!(spring.value().is_finite());
    }

    #[test]
    fn test_rotation_only_and_inverted_layers() {
        let mut accent = ParallaxState::new(ParallaxLayer::HERO_ACCENT);
        accent.set_scroll(500.0);
        settle(&mut accent);
        let (dy, rot) = accent.offset();
        assert!((dy + 50.0).abs() < SETTLE_TOLERANCE);
        assert_eq!(rot, 0.0);
        assert!(!accent.transform().contains("rotate"));
    }

    #[test]
    fn test_transform() {
        let mut state = ParallaxState::new(ParallaxLayer::BACKGROUND_ACCENT);
        assert_eq!(state.transform(), "translateY(0.00px) rotate(0.00deg)");
        state.set_scroll(1000.0);
        for _ in 0..600 {
            state.tick(FRAME);
        }
        assert_eq!(state.offset(), (-150.0, -15.0));
        assert_eq!(state.transform(), "translateY(-150.00px) rotate(-15.00deg)");

        let none = ParallaxState::new(ParallaxLayer {
            y: None,
            rotate: None,
        });
        assert_eq!(none.transform(), "none");
    }
}
