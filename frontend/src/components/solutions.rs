//! The services carousel: an endless strip of service cards with arrows,
//! dots, swipe and keyboard navigation.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};
use yew::prelude::*;

use crate::components::graphics::ServiceGraphic;
use crate::components::section::{book_consultation, SectionLabel};
use crate::components::snap_carousel::use_snap_carousel;
use crate::content::{Service, SERVICES};
use crate::dom::{self, IntersectionWatch};
use crate::motion::breakpoints::{
    card_css_width, carousel_side_padding, resolve_item_width, Breakpoint,
};
use crate::motion::carousel::{CarouselOptions, NavAction};
use crate::motion::peek::{CardStyle, PeekConfig};
use crate::motion::signal::ServiceSelector;

/// Share of the section that must be visible for arrow keys to steer it.
const KEYBOARD_THRESHOLD: f64 = 0.3;

fn keyboard_listener(navigate: Callback<NavAction>) -> Option<EventListener> {
    let window = dom::window().ok()?;
    let options = EventListenerOptions::enable_prevent_default();
    Some(EventListener::new_with_options(
        &window,
        "keydown",
        options,
        move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let Some(action) = NavAction::from_key(&event.key(), SERVICES.len()) else {
                return;
            };
            if matches!(action, NavAction::Next | NavAction::Prev) {
                event.prevent_default();
            }
            navigate.emit(action);
        },
    ))
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: Service,
    style: CardStyle,
    breakpoint: Breakpoint,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let service = props.service;
    let width = card_css_width(props.breakpoint);
    let style = format!(
        "width: {width}; flex: 0 0 {width}; {}",
        props.style.to_css()
    );

    html! {
        <article class="service-card" {style}>
            <div class="service-card-inner">
                <div class="service-copy">
                    <div class="service-heading">
                        <span class="mono service-number">{service.number}</span>
                        <h3>{service.title}</h3>
                        <p class="service-tagline">{service.tagline}</p>
                    </div>
                    <p class="service-description">{service.description}</p>
                    <ul class="service-deliverables">
                        { for service.deliverables.iter().map(|d| html! {
                            <li><span class="bullet"></span>{*d}</li>
                        }) }
                    </ul>
                    <div class="service-outcome">
                        <span class="mono muted">{"Outcome"}</span>
                        <p>{service.outcome}</p>
                    </div>
                    <button class="service-cta" onclick={book_consultation()}>
                        {"Book Consultation"}<span class="arrow">{"→"}</span>
                    </button>
                </div>
                <div class="service-visual">
                    <ServiceGraphic kind={service.graphic} />
                </div>
            </div>
        </article>
    }
}

#[function_component(Solutions)]
pub fn solutions() -> Html {
    let carousel = use_snap_carousel(
        SERVICES.len(),
        CarouselOptions::solutions(),
        PeekConfig::SOLUTIONS,
        resolve_item_width,
    );
    let section = use_node_ref();
    let selector = use_context::<ServiceSelector>();

    {
        let section = section.clone();
        let navigate = carousel.navigate.clone();
        use_effect_with_deps(
            move |_| {
                let keys: Rc<RefCell<Option<EventListener>>> = Rc::default();
                let watch = section.cast::<Element>().and_then(|element| {
                    let keys = keys.clone();
                    IntersectionWatch::observe(&element, KEYBOARD_THRESHOLD, move |visible| {
                        debug!("solutions keyboard navigation {}", if visible { "on" } else { "off" });
                        *keys.borrow_mut() = if visible {
                            keyboard_listener(navigate.clone())
                        } else {
                            None
                        };
                        true
                    })
                    .map_err(|err| warn!("keyboard navigation unavailable: {}", err))
                    .ok()
                });
                move || {
                    drop(watch);
                    keys.borrow_mut().take();
                }
            },
            (),
        );
    }

    {
        let navigate = carousel.navigate.clone();
        use_effect_with_deps(
            move |selector| {
                let subscription = selector.as_ref().map(|selector| {
                    selector.subscribe(move |index: &usize| {
                        navigate.emit(NavAction::GoTo(*index));
                    })
                });
                move || drop(subscription)
            },
            selector,
        );
    }

    let breakpoint = Breakpoint::from_viewport(dom::viewport_width());
    let padding = carousel_side_padding(breakpoint);
    let count = SERVICES.len();
    let active = carousel.active;

    let on_prev = {
        let navigate = carousel.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(NavAction::Prev))
    };
    let on_next = {
        let navigate = carousel.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(NavAction::Next))
    };

    html! {
        <section id="services" class="solutions" ref={section}>
            <style>
                {r#"
                .solutions {
                    padding: 8rem 0;
                    background: #fafafa;
                    overflow: hidden;
                }
                .solutions-header {
                    max-width: 1200px;
                    margin: 0 auto 3rem;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    gap: 2rem;
                }
                .solutions-header h2 {
                    font-size: clamp(2rem, 5vw, 3.5rem);
                    font-weight: 600;
                    letter-spacing: -0.03em;
                    margin: 0.5rem 0 0;
                }
                .solutions-controls {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .solutions-position {
                    font-family: 'JetBrains Mono', monospace;
                    font-size: 0.85rem;
                    color: #6b7280;
                }
                .solutions-arrow {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    border: 1px solid #e5e7eb;
                    background: #fff;
                    cursor: pointer;
                    font-size: 1.1rem;
                    transition: background 0.2s ease, color 0.2s ease;
                }
                .solutions-arrow:hover {
                    background: #000;
                    color: #fff;
                }
                .solutions-track {
                    display: flex;
                    gap: 0;
                    overflow-x: auto;
                    scroll-snap-type: x mandatory;
                    scrollbar-width: none;
                    -webkit-overflow-scrolling: touch;
                }
                .solutions-track::-webkit-scrollbar {
                    display: none;
                }
                .service-card {
                    scroll-snap-align: center;
                    box-sizing: border-box;
                    padding: 0 0.75rem;
                    transition: opacity 0.3s ease, transform 0.3s ease;
                }
                .service-card-inner {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 24px;
                    padding: 2.5rem;
                    min-height: 480px;
                }
                .service-number {
                    color: #0A4DD3;
                    font-size: 0.8rem;
                }
                .service-heading h3 {
                    font-size: 1.8rem;
                    margin: 0.5rem 0;
                }
                .service-tagline {
                    color: #6b7280;
                    margin: 0;
                }
                .service-description {
                    line-height: 1.6;
                    color: #374151;
                }
                .service-deliverables {
                    list-style: none;
                    padding: 0;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 0.5rem;
                    font-size: 0.9rem;
                }
                .service-deliverables .bullet {
                    display: inline-block;
                    width: 6px;
                    height: 6px;
                    border-radius: 50%;
                    background: #000;
                    margin-right: 0.5rem;
                }
                .service-outcome p {
                    font-weight: 600;
                    margin: 0.25rem 0 1.5rem;
                }
                .service-cta {
                    border: none;
                    background: #000;
                    color: #fff;
                    border-radius: 999px;
                    padding: 0.85rem 1.5rem;
                    cursor: pointer;
                    font-size: 0.95rem;
                }
                .service-cta .arrow {
                    margin-left: 0.5rem;
                }
                .service-visual {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #f9fafb;
                    border-radius: 16px;
                    overflow: hidden;
                }
                .solutions-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 2rem;
                }
                .solutions-dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 999px;
                    border: none;
                    background: #d1d5db;
                    cursor: pointer;
                    transition: width 0.3s ease, background 0.3s ease;
                }
                .solutions-dot.active {
                    width: 32px;
                    background: #000;
                }
                @media (max-width: 1023px) {
                    .service-card-inner {
                        grid-template-columns: 1fr;
                        padding: 1.5rem;
                    }
                    .solutions-controls .solutions-arrow {
                        display: none;
                    }
                }
                "#}
            </style>
            <div class="solutions-header">
                <div>
                    <SectionLabel text="Services" />
                    <h2>{"Our Solutions"}</h2>
                </div>
                <div class="solutions-controls">
                    <span class="solutions-position">
                        {format!("{:02} / {:02}", carousel.position, count)}
                    </span>
                    <button class="solutions-arrow" aria-label="Previous service" onclick={on_prev}>{"←"}</button>
                    <button class="solutions-arrow" aria-label="Next service" onclick={on_next}>{"→"}</button>
                </div>
            </div>
            <div
                class="solutions-track"
                ref={carousel.container.clone()}
                style={format!("padding-left: {padding}; padding-right: {padding};")}
                ontouchstart={carousel.on_touch_start.clone()}
                ontouchmove={carousel.on_touch_move.clone()}
                ontouchend={carousel.on_touch_end.clone()}
            >
                { for carousel.cards.iter().enumerate().map(|(slot, card)| html! {
                    <ServiceCard
                        key={slot}
                        service={SERVICES[card.item]}
                        style={card.style}
                        {breakpoint}
                    />
                }) }
            </div>
            <div class="solutions-dots">
                { for (0..count).map(|i| {
                    let navigate = carousel.navigate.clone();
                    html! {
                        <button
                            class={classes!("solutions-dot", (i == active).then_some("active"))}
                            aria-label={format!("Show {}", SERVICES[i].title)}
                            onclick={Callback::from(move |_: MouseEvent| navigate.emit(NavAction::GoTo(i)))}
                        />
                    }
                }) }
            </div>
        </section>
    }
}
