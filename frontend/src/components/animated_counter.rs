use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::dom::IntersectionWatch;
use crate::motion::counter::{CounterAnimation, DEFAULT_DURATION_MS};
use crate::motion::trigger::Trigger;

const VISIBILITY_THRESHOLD: f64 = 0.2;

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub target: u64,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or(DEFAULT_DURATION_MS)]
    pub duration_ms: f64,
    #[prop_or_default]
    pub class: Classes,
}

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

fn run_frames(slot: FrameSlot, mut animation: CounterAnimation, value: UseStateHandle<u64>) {
    let next = slot.clone();
    let frame = request_animation_frame(move |timestamp| {
        value.set(animation.sample(timestamp));
        if animation.is_finished() {
            next.borrow_mut().take();
        } else {
            run_frames(next, animation, value);
        }
    });
    *slot.borrow_mut() = Some(frame);
}

/// Counts up from zero once the number scrolls into view.
#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let node = use_node_ref();
    let value = use_state_eq(|| 0_u64);

    {
        let node = node.clone();
        let value = value.clone();
        use_effect_with_deps(
            move |(target, duration_bits)| {
                let duration = f64::from_bits(*duration_bits);
                let target = *target;
                let frames: FrameSlot = Rc::default();
                let mut trigger = Trigger::Pending;
                let fallback = value.clone();

                let watch = node.cast::<Element>().and_then(|element| {
                    let frames = frames.clone();
                    IntersectionWatch::observe(&element, VISIBILITY_THRESHOLD, move |visible| {
                        if visible && trigger.fire() {
                            run_frames(frames.clone(), CounterAnimation::new(target, duration), value.clone());
                        }
                        !trigger.has_fired()
                    })
                    .map_err(|err| {
                        warn!("counter observer unavailable, showing final value: {}", err);
                        fallback.set(target);
                    })
                    .ok()
                });

                move || {
                    drop(watch);
                    frames.borrow_mut().take();
                }
            },
            (props.target, props.duration_ms.to_bits()),
        );
    }

    html! {
        <span ref={node} class={props.class.clone()}>
            {format!("{}{}{}", props.prefix, *value, props.suffix)}
        </span>
    }
}
