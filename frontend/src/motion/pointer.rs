/// Follower diameter at rest and while hovering something clickable.
pub const FOLLOWER_SIZE: f64 = 32.0;
pub const FOLLOWER_HOVER_SIZE: f64 = 64.0;

/// Viewport coordinates of the last pointer move.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Position relative to an element whose top-left corner is at `(left, top)`.
    pub fn relative_to(&self, left: f64, top: f64) -> PointerSample {
        PointerSample::new(self.x - left, self.y - top)
    }

    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        (self.x - x).hypot(self.y - y)
    }

    pub fn translate(&self) -> String {
        format!("translate3d({}px, {}px, 0)", self.x, self.y)
    }
}

/// What is known about the element under the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverTarget<'a> {
    pub tag_name: &'a str,
    pub inside_link_or_button: bool,
    pub has_pointer_class: bool,
    pub computed_cursor: &'a str,
}

impl HoverTarget<'_> {
    pub fn is_interactive(&self) -> bool {
        self.tag_name.eq_ignore_ascii_case("button")
            || self.tag_name.eq_ignore_ascii_case("a")
            || self.inside_link_or_button
            || self.has_pointer_class
            || self.computed_cursor == "pointer"
    }
}

/// Inline style for the ring that trails the pointer.
pub fn follower_style(at: PointerSample, hovering: bool) -> String {
    let size = if hovering { FOLLOWER_HOVER_SIZE } else { FOLLOWER_SIZE };
    format!(
        "transform: {}; width: {size}px; height: {size}px;",
        at.translate()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn links_and_buttons_are_interactive() {
        for tag in ["A", "BUTTON", "button"] {
            let target = HoverTarget {
                tag_name: tag,
                ..HoverTarget::default()
            };
            assert!(target.is_interactive(), "{tag}");
        }
    }

    #[test]
    fn descendants_and_pointer_cursors_are_interactive() {
        let span = HoverTarget {
            tag_name: "SPAN",
            inside_link_or_button: true,
            ..HoverTarget::default()
        };
        assert!(span.is_interactive());

        let card = HoverTarget {
            tag_name: "DIV",
            has_pointer_class: true,
            ..HoverTarget::default()
        };
        assert!(card.is_interactive());

        let styled = HoverTarget {
            tag_name: "LI",
            computed_cursor: "pointer",
            ..HoverTarget::default()
        };
        assert!(styled.is_interactive());
    }

    #[test]
    fn plain_text_is_not_interactive() {
        let p = HoverTarget {
            tag_name: "P",
            computed_cursor: "auto",
            ..HoverTarget::default()
        };
        assert!(!p.is_interactive());
    }

    #[test]
    fn follower_grows_while_hovering() {
        let at = PointerSample::new(10.0, 20.5);
        assert_eq!(
            follower_style(at, false),
            "transform: translate3d(10px, 20.5px, 0); width: 32px; height: 32px;"
        );
        assert!(follower_style(at, true).ends_with("width: 64px; height: 64px;"));
    }

    #[test]
    fn relative_coordinates() {
        let local = PointerSample::new(300.0, 250.0).relative_to(100.0, 50.0);
        assert_eq!(local, PointerSample::new(200.0, 200.0));
        assert_eq!(local.distance_to(200.0, 100.0), 100.0);
    }
}
