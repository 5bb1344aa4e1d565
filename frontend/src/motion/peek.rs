use crate::motion::breakpoints::Breakpoint;

/// Per-card presentation computed from its distance to the viewport centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardStyle {
    pub opacity: f64,
    pub scale: f64,
    pub z_index: i32,
    /// Whether the card may receive pointer and touch events.
    pub interactive: bool,
}

impl CardStyle {
    pub const FULL: CardStyle = CardStyle {
        opacity: 1.0,
        scale: 1.0,
        z_index: 10,
        interactive: true,
    };

    pub const FLAT: CardStyle = CardStyle {
        opacity: 1.0,
        scale: 1.0,
        z_index: 1,
        interactive: true,
    };

    pub fn to_css(&self) -> String {
        format!(
            "opacity: {:.3}; transform: scale({:.4}); z-index: {}; pointer-events: {};",
            self.opacity,
            self.scale,
            self.z_index,
            if self.interactive { "auto" } else { "none" }
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PeekConfig {
    /// Fraction of the item width inside which a card counts as centred.
    pub center_ratio: f64,
    /// Fraction of the item width at which the floors are reached.
    pub max_distance_ratio: f64,
    pub opacity_floor: f64,
    pub opacity_range: f64,
    pub scale_floor: f64,
    pub scale_range: f64,
    pub interactive_threshold: f64,
    /// Fixed style for off-centre cards below 640px, if any.
    pub small_mobile: Option<CardStyle>,
    /// Fixed style for off-centre cards between 640px and 768px, if any.
    pub mobile: Option<CardStyle>,
}

impl PeekConfig {
    pub const SOLUTIONS: PeekConfig = PeekConfig {
        center_ratio: 0.1,
        max_distance_ratio: 0.6,
        opacity_floor: 0.4,
        opacity_range: 0.6,
        scale_floor: 0.95,
        scale_range: 0.05,
        interactive_threshold: 0.6,
        small_mobile: Some(CardStyle::FLAT),
        mobile: Some(CardStyle {
            opacity: 0.7,
            scale: 0.98,
            z_index: 1,
            interactive: true,
        }),
    };

    pub const PREVIEW: PeekConfig = PeekConfig {
        center_ratio: 0.1,
        max_distance_ratio: 0.6,
        opacity_floor: 0.5,
        opacity_range: 0.5,
        scale_floor: 0.95,
        scale_range: 0.05,
        interactive_threshold: 0.6,
        small_mobile: None,
        mobile: None,
    };

    fn narrow_override(&self, breakpoint: Breakpoint) -> Option<CardStyle> {
        match breakpoint {
            Breakpoint::SmallMobile => self.small_mobile,
            Breakpoint::Mobile => self.mobile,
            Breakpoint::Tablet | Breakpoint::Desktop => None,
        }
    }

    /// Styles for every slot when the breakpoint has a fixed off-centre
    /// style, so no card needs measuring. `None` on wide layouts.
    pub fn narrow_styles(
        &self,
        breakpoint: Breakpoint,
        slots: usize,
        centred: Option<usize>,
    ) -> Option<Vec<CardStyle>> {
        let flat = self.narrow_override(breakpoint)?;
        Some(
            (0..slots)
                .map(|slot| if Some(slot) == centred { CardStyle::FULL } else { flat })
                .collect(),
        )
    }

    pub fn style_for(&self, distance: f64, item_width: f64, breakpoint: Breakpoint) -> CardStyle {
        let distance = distance.abs();
        if item_width <= 0.0 || !distance.is_finite() {
            return CardStyle::FULL;
        }
        if distance < item_width * self.center_ratio {
            return CardStyle::FULL;
        }
        if let Some(flat) = self.narrow_override(breakpoint) {
            return flat;
        }

        let max_distance = item_width * self.max_distance_ratio;
        let ratio = distance / max_distance;
        let opacity = (1.0 - ratio * self.opacity_range).max(self.opacity_floor);
        let scale = (1.0 - ratio * self.scale_range).max(self.scale_floor);
        CardStyle {
            opacity,
            scale,
            z_index: 1,
            interactive: opacity >= self.interactive_threshold,
        }
    }
}

/// Horizontal distance between a card's centre and the viewport centre.
pub fn distance_from_center(card_left: f64, card_width: f64, viewport_width: f64) -> f64 {
    ((card_left + card_width / 2.0) - viewport_width / 2.0).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ALL: [Breakpoint; 4] = [
        Breakpoint::SmallMobile,
        Breakpoint::Mobile,
        Breakpoint::Tablet,
        Breakpoint::Desktop,
    ];

    #[test]
    fn centred_card_is_always_full() {
        for config in [PeekConfig::SOLUTIONS, PeekConfig::PREVIEW] {
            for bp in ALL {
                let style = config.style_for(0.0, 900.0, bp);
                assert_eq!(style.opacity, 1.0);
                assert_eq!(style.scale, 1.0);
                assert!(style.interactive);
            }
        }
    }

    #[test]
    fn far_cards_sit_exactly_on_the_floors() {
        for distance in [540.0, 700.0, 5_000.0] {
            let style = PeekConfig::SOLUTIONS.style_for(distance, 900.0, Breakpoint::Desktop);
            assert_eq!(style.opacity, 0.4);
            assert_eq!(style.scale, 0.95);
            assert!(!style.interactive);

            let style = PeekConfig::PREVIEW.style_for(distance, 900.0, Breakpoint::SmallMobile);
            assert_eq!(style.opacity, 0.5);
            assert_eq!(style.scale, 0.95);
        }
    }

    #[test]
    fn interpolates_between_centre_and_floor() {
        // half of max distance (0.6 * 1000 / 2)
        let style = PeekConfig::SOLUTIONS.style_for(300.0, 1000.0, Breakpoint::Desktop);
        assert!((style.opacity - 0.7).abs() < 1e-9);
        assert!((style.scale - 0.975).abs() < 1e-9);
        assert_eq!(style.z_index, 1);
        assert!(style.interactive);
    }

    #[test]
    fn just_inside_the_centre_threshold_is_active() {
        let style = PeekConfig::SOLUTIONS.style_for(89.0, 900.0, Breakpoint::Tablet);
        assert_eq!(style, CardStyle::FULL);
        let style = PeekConfig::SOLUTIONS.style_for(91.0, 900.0, Breakpoint::Tablet);
        assert_eq!(style.z_index, 1);
    }

    #[test]
    fn narrow_breakpoints_use_flat_styles() {
        let config = PeekConfig::SOLUTIONS;
        assert_eq!(config.style_for(500.0, 600.0, Breakpoint::SmallMobile), CardStyle::FLAT);
        let tablet_phone = config.style_for(500.0, 600.0, Breakpoint::Mobile);
        assert_eq!(tablet_phone.opacity, 0.7);
        assert_eq!(tablet_phone.scale, 0.98);
        assert!(tablet_phone.interactive);
    }

    #[test]
    fn narrow_layouts_skip_measuring() {
        let mobile = PeekConfig::SOLUTIONS
            .narrow_styles(Breakpoint::Mobile, 12, Some(5))
            .unwrap();
        assert_eq!(mobile.len(), 12);
        assert_eq!(mobile[5], CardStyle::FULL);
        assert_eq!(mobile[4].opacity, 0.7);
        assert_eq!(mobile[6].scale, 0.98);

        let small = PeekConfig::SOLUTIONS
            .narrow_styles(Breakpoint::SmallMobile, 12, None)
            .unwrap();
        assert!(small.iter().all(|style| *style == CardStyle::FLAT));

        assert_eq!(PeekConfig::SOLUTIONS.narrow_styles(Breakpoint::Tablet, 12, Some(5)), None);
        assert_eq!(PeekConfig::PREVIEW.narrow_styles(Breakpoint::Mobile, 4, Some(0)), None);
    }

    #[test]
    fn zero_width_does_not_produce_nan() {
        let style = PeekConfig::SOLUTIONS.style_for(120.0, 0.0, Breakpoint::Desktop);
        assert_eq!(style, CardStyle::FULL);
        let style = PeekConfig::SOLUTIONS.style_for(f64::NAN, 900.0, Breakpoint::Desktop);
        assert_eq!(style, CardStyle::FULL);
    }

    #[test]
    fn distance_is_measured_from_card_centre() {
        assert_eq!(distance_from_center(150.0, 900.0, 1200.0), 0.0);
        assert_eq!(distance_from_center(1050.0, 900.0, 1200.0), 900.0);
        assert_eq!(distance_from_center(-750.0, 900.0, 1200.0), 900.0);
    }

    #[test]
    fn css_reflects_interactivity() {
        let css = PeekConfig::SOLUTIONS
            .style_for(900.0, 900.0, Breakpoint::Desktop)
            .to_css();
        assert_eq!(css, "opacity: 0.400; transform: scale(0.9500); z-index: 1; pointer-events: none;");
    }
}
