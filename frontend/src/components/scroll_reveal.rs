use std::cell::Cell;
use std::rc::Rc;

use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::dom::IntersectionWatch;
use crate::motion::reveal::{RevealDirection, RevealOptions};
use crate::motion::trigger::Trigger;

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub direction: RevealDirection,
    #[prop_or(0.1)]
    pub threshold: f64,
    #[prop_or(30.0)]
    pub distance: f64,
    #[prop_or(800)]
    pub duration_ms: u32,
}

/// Fades and slides its children in the first time they scroll into view.
#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);
    let options = RevealOptions {
        threshold: props.threshold,
        delay_ms: props.delay_ms,
        direction: props.direction,
        distance: props.distance,
        duration_ms: props.duration_ms,
    };

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |threshold| {
                let trigger = Rc::new(Cell::new(Trigger::Pending));
                let reveal = visible.clone();
                let watch = match node.cast::<Element>() {
                    Some(element) => IntersectionWatch::observe(&element, *threshold, move |intersecting| {
                        if !intersecting {
                            return true;
                        }
                        let mut state = trigger.get();
                        if state.fire() {
                            trigger.set(state);
                            reveal.set(true);
                        }
                        false
                    })
                    .map_err(|err| {
                        warn!("reveal observer unavailable, showing content: {}", err);
                        visible.set(true);
                    })
                    .ok(),
                    None => None,
                };
                move || drop(watch)
            },
            options.threshold,
        );
    }

    html! {
        <div ref={node} class={props.class.clone()} style={options.style(*visible)}>
            { for props.children.iter() }
        </div>
    }
}
