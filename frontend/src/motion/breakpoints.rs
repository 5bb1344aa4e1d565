//! Viewport breakpoints and the card widths derived from them.
//!
//! Every width the carousels, the peek effect and the initial scroll use is
//! resolved here, so the breakpoint constants exist in exactly one place.

pub const SMALL_MOBILE_MAX: f64 = 640.0;
pub const MOBILE_MAX: f64 = 768.0;
pub const DESKTOP_MIN: f64 = 1024.0;

/// Horizontal section padding on mobile (24px each side).
pub const MOBILE_SECTION_PADDING: f64 = 48.0;
/// Gap between hero preview cards.
pub const PREVIEW_GAP: f64 = 16.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Breakpoint {
    SmallMobile,
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    pub fn from_viewport(width: f64) -> Self {
        let width = sanitize(width);
        if width < SMALL_MOBILE_MAX {
            Breakpoint::SmallMobile
        } else if width < MOBILE_MAX {
            Breakpoint::Mobile
        } else if width < DESKTOP_MIN {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }
}

fn sanitize(width: f64) -> f64 {
    if width.is_finite() && width > 0.0 {
        width
    } else {
        0.0
    }
}

/// Width of one solutions card (and its snap stride) for a viewport width.
pub fn resolve_item_width(viewport_width: f64) -> f64 {
    let vw = sanitize(viewport_width);
    match Breakpoint::from_viewport(vw) {
        Breakpoint::SmallMobile | Breakpoint::Mobile => (vw - MOBILE_SECTION_PADDING).max(0.0),
        Breakpoint::Tablet => vw * 0.85,
        Breakpoint::Desktop => vw * 0.75,
    }
}

/// Visible width of a hero preview card.
pub fn resolve_preview_card_width(viewport_width: f64) -> f64 {
    sanitize(viewport_width) * 0.85
}

/// Snap stride of the hero preview strip: card plus gap.
pub fn resolve_preview_stride(viewport_width: f64) -> f64 {
    let card = resolve_preview_card_width(viewport_width);
    if card == 0.0 {
        0.0
    } else {
        card + PREVIEW_GAP
    }
}

/// CSS width of a solutions card.
pub fn card_css_width(bp: Breakpoint) -> &'static str {
    match bp {
        Breakpoint::SmallMobile | Breakpoint::Mobile => "100%",
        Breakpoint::Tablet => "85vw",
        Breakpoint::Desktop => "75vw",
    }
}

/// Inline padding that lets the first and last solutions cards centre.
pub fn carousel_side_padding(bp: Breakpoint) -> &'static str {
    match bp {
        Breakpoint::SmallMobile | Breakpoint::Mobile => "0px",
        Breakpoint::Tablet => "7.5vw",
        Breakpoint::Desktop => "12.5vw",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn breakpoint_boundaries() {
        assert_eq!(Breakpoint::from_viewport(320.0), Breakpoint::SmallMobile);
        assert_eq!(Breakpoint::from_viewport(639.9), Breakpoint::SmallMobile);
        assert_eq!(Breakpoint::from_viewport(640.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_viewport(767.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_viewport(768.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::from_viewport(1023.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::from_viewport(1024.0), Breakpoint::Desktop);
    }

    #[test]
    fn item_width_per_breakpoint() {
        assert_eq!(resolve_item_width(375.0), 327.0);
        assert_eq!(resolve_item_width(700.0), 652.0);
        assert_eq!(resolve_item_width(800.0), 680.0);
        assert_eq!(resolve_item_width(1600.0), 1200.0);
    }

    #[test]
    fn degenerate_widths_resolve_to_zero() {
        assert_eq!(resolve_item_width(0.0), 0.0);
        assert_eq!(resolve_item_width(-10.0), 0.0);
        assert_eq!(resolve_item_width(f64::NAN), 0.0);
        assert_eq!(resolve_item_width(30.0), 0.0);
        assert_eq!(resolve_preview_stride(0.0), 0.0);
    }

    #[test]
    fn preview_stride_includes_gap() {
        assert_eq!(resolve_preview_stride(400.0), 356.0);
    }
}
