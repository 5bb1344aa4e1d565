#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealDirection {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub delay_ms: u32,
    pub direction: RevealDirection,
    pub distance: f64,
    pub duration_ms: u32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            delay_ms: 0,
            direction: RevealDirection::Up,
            distance: 30.0,
            duration_ms: 800,
        }
    }
}

impl RevealOptions {
    /// Offset the element starts from before it is revealed.
    pub fn hidden_transform(&self) -> String {
        let d = self.distance;
        match self.direction {
            RevealDirection::Up => format!("translate3d(0, {}px, 0)", d),
            RevealDirection::Down => format!("translate3d(0, -{}px, 0)", d),
            RevealDirection::Left => format!("translate3d({}px, 0, 0)", d),
            RevealDirection::Right => format!("translate3d(-{}px, 0, 0)", d),
        }
    }

    pub fn style(&self, visible: bool) -> String {
        let (opacity, transform) = if visible {
            (1, "translate3d(0, 0, 0)".to_string())
        } else {
            (0, self.hidden_transform())
        };
        format!(
            "opacity: {opacity}; transform: {transform}; \
             transition: opacity {d}ms ease-out, transform {d}ms ease-out; \
             transition-delay: {delay}ms; will-change: opacity, transform;",
            d = self.duration_ms,
            delay = self.delay_ms,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hidden_offsets_follow_direction() {
        let mut options = RevealOptions::default();
        assert_eq!(options.hidden_transform(), "translate3d(0, 30px, 0)");
        options.direction = RevealDirection::Down;
        assert_eq!(options.hidden_transform(), "translate3d(0, -30px, 0)");
        options.direction = RevealDirection::Left;
        options.distance = 12.5;
        assert_eq!(options.hidden_transform(), "translate3d(12.5px, 0, 0)");
        options.direction = RevealDirection::Right;
        assert_eq!(options.hidden_transform(), "translate3d(-12.5px, 0, 0)");
    }

    #[test]
    fn starts_hidden_and_ends_in_place() {
        let options = RevealOptions {
            delay_ms: 150,
            ..RevealOptions::default()
        };
        let hidden = options.style(false);
        assert!(hidden.starts_with("opacity: 0; transform: translate3d(0, 30px, 0);"));
        assert!(hidden.contains("transition-delay: 150ms"));
        let shown = options.style(true);
        assert!(shown.starts_with("opacity: 1; transform: translate3d(0, 0, 0);"));
        assert!(shown.contains("opacity 800ms ease-out"));
    }
}
