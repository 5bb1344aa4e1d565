use std::rc::Rc;

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::dom;
use crate::motion::pointer::{follower_style, HoverTarget, PointerSample};
use crate::motion::signal::PointerFeed;

#[derive(Default)]
struct CursorState {
    at: PointerSample,
    hovering: bool,
}

struct Proxies {
    dot: NodeRef,
    follower: NodeRef,
}

impl Proxies {
    fn paint(&self, state: &CursorState) {
        if let Some(dot) = self.dot.cast::<HtmlElement>() {
            if let Err(err) = dot.set_attribute("style", &format!("transform: {};", state.at.translate())) {
                warn!("could not move cursor dot: {:?}", err);
            }
        }
        if let Some(follower) = self.follower.cast::<HtmlElement>() {
            if let Err(err) = follower.set_attribute("style", &follower_style(state.at, state.hovering)) {
                warn!("could not move cursor follower: {:?}", err);
            }
        }
    }
}

fn is_interactive(element: &Element) -> bool {
    let tag = element.tag_name();
    let inside = element.closest("a, button").ok().flatten().is_some();
    let has_pointer_class = element.class_list().contains("cursor-pointer");
    let cursor = dom::window()
        .ok()
        .and_then(|w| w.get_computed_style(element).ok().flatten())
        .and_then(|style| style.get_property_value("cursor").ok())
        .unwrap_or_default();

    HoverTarget {
        tag_name: &tag,
        inside_link_or_button: inside,
        has_pointer_class,
        computed_cursor: &cursor,
    }
    .is_interactive()
}

/// Dot plus trailing ring that replace the system cursor on mouse devices.
#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let enabled = use_state(dom::has_fine_pointer);
    let feed = use_context::<PointerFeed>();
    let dot = use_node_ref();
    let follower = use_node_ref();
    let state = use_mut_ref(CursorState::default);

    let proxies = Rc::new(Proxies {
        dot: dot.clone(),
        follower: follower.clone(),
    });

    {
        let state = state.clone();
        let proxies = proxies.clone();
        use_effect_with_deps(
            move |(feed, enabled)| {
                let subscription = feed.as_ref().filter(|_| *enabled).map(|feed| {
                    feed.subscribe(move |sample: &PointerSample| {
                        let mut current = state.borrow_mut();
                        current.at = *sample;
                        proxies.paint(&current);
                    })
                });
                move || drop(subscription)
            },
            (feed, *enabled),
        );
    }

    {
        let enabled = *enabled;
        use_event_with_window("mouseover", move |e: MouseEvent| {
            if !enabled {
                return;
            }
            let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let hovering = is_interactive(&target);
            let mut current = state.borrow_mut();
            if current.hovering != hovering {
                current.hovering = hovering;
                proxies.paint(&current);
            }
        });
    }

    if !*enabled {
        return html! {};
    }

    html! {
        <>
            <style>
                {r#"
                @media (pointer: fine) {
                    body, a, button {
                        cursor: none;
                    }
                }
                .cursor-dot,
                .cursor-follower {
                    position: fixed;
                    top: 0;
                    left: 0;
                    pointer-events: none;
                    z-index: 9999;
                    border-radius: 50%;
                }
                .cursor-dot {
                    width: 8px;
                    height: 8px;
                    margin: -4px 0 0 -4px;
                    background: #000;
                    mix-blend-mode: difference;
                }
                .cursor-follower {
                    width: 32px;
                    height: 32px;
                    border: 1px solid rgba(0, 0, 0, 0.4);
                    translate: -50% -50%;
                    transition: transform 0.15s ease-out, width 0.2s ease, height 0.2s ease;
                }
                "#}
            </style>
            <div class="cursor-dot" ref={dot}></div>
            <div class="cursor-follower" ref={follower}></div>
        </>
    }
}
