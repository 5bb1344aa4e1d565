//! Service shortcuts under the hero headline: a grid on wide screens, a
//! bounded swipeable strip on phones.

use gloo_timers::callback::Timeout;
use log::warn;
use yew::prelude::*;

use crate::components::snap_carousel::use_snap_carousel;
use crate::content::{ServicePreview, PREVIEWS};
use crate::dom;
use crate::motion::breakpoints::{resolve_preview_card_width, PREVIEW_GAP};
use crate::motion::carousel::{CarouselOptions, NavAction};
use crate::motion::peek::PeekConfig;
use crate::motion::signal::ServiceSelector;

/// Time the page scroll gets before the solutions carousel is moved.
const SELECT_DELAY_MS: u32 = 800;

/// Splits a two-word title over two lines, "Intelligent\nOperations" style.
fn title_lines(title: &str) -> (&str, &str) {
    title.split_once(' ').unwrap_or((title, ""))
}

fn preview_body(preview: &ServicePreview) -> Html {
    let (first, second) = title_lines(preview.title);
    html! {
        <>
            <span class="mono preview-number">{preview.number}</span>
            <h3 class="preview-title">{first}<br />{second}</h3>
            <p class="preview-subtitle">{preview.subtitle}</p>
            <span class="preview-arrow">{"→"}</span>
        </>
    }
}

#[function_component(HeroServices)]
pub fn hero_services() -> Html {
    let carousel = use_snap_carousel(
        PREVIEWS.len(),
        CarouselOptions::preview(),
        PeekConfig::PREVIEW,
        resolve_preview_card_width,
    );
    let selector = use_context::<ServiceSelector>();
    let pending = use_mut_ref(|| None::<Timeout>);

    let select = {
        let selector = selector.clone();
        Callback::from(move |index: usize| {
            if let Err(err) = dom::scroll_to_section("services") {
                warn!("could not scroll to services: {}", err);
            }
            let Some(selector) = selector.clone() else {
                return;
            };
            // replacing the handle cancels an earlier pending selection
            *pending.borrow_mut() = Some(Timeout::new(SELECT_DELAY_MS, move || {
                selector.emit(&index);
            }));
        })
    };

    let active = carousel.active;

    html! {
        <div class="hero-services">
            <style>
                {r#"
                .hero-services-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1rem;
                    margin-top: 4rem;
                }
                .preview-card {
                    position: relative;
                    text-align: left;
                    background: rgba(255, 255, 255, 0.7);
                    backdrop-filter: blur(12px);
                    border: 1px solid #e5e7eb;
                    border-radius: 16px;
                    padding: 1.5rem;
                    cursor: pointer;
                    transition: transform 0.3s ease, box-shadow 0.3s ease, border-color 0.3s ease;
                    font: inherit;
                    color: inherit;
                }
                .preview-card:hover {
                    transform: translateY(-4px);
                    border-color: #000;
                    box-shadow: 0 12px 30px rgba(0, 0, 0, 0.08);
                }
                .preview-number {
                    font-size: 0.75rem;
                    color: #0A4DD3;
                }
                .preview-title {
                    font-size: 1.15rem;
                    line-height: 1.25;
                    margin: 0.75rem 0 0.5rem;
                }
                .preview-subtitle {
                    font-size: 0.85rem;
                    color: #6b7280;
                    margin: 0;
                }
                .preview-arrow {
                    position: absolute;
                    top: 1.5rem;
                    right: 1.5rem;
                    opacity: 0.4;
                }
                .hero-services-strip {
                    display: none;
                }
                @media (max-width: 767px) {
                    .hero-services-grid {
                        display: none;
                    }
                    .hero-services-strip {
                        display: block;
                        margin-top: 3rem;
                    }
                    .preview-track {
                        display: flex;
                        overflow-x: auto;
                        scroll-snap-type: x mandatory;
                        scrollbar-width: none;
                        padding-right: 15vw;
                    }
                    .preview-track::-webkit-scrollbar {
                        display: none;
                    }
                    .preview-track .preview-card {
                        flex: 0 0 85vw;
                        scroll-snap-align: start;
                    }
                    .preview-dots {
                        display: flex;
                        justify-content: center;
                        gap: 0.4rem;
                        margin-top: 1rem;
                    }
                    .preview-dot {
                        width: 6px;
                        height: 6px;
                        border: none;
                        border-radius: 999px;
                        background: #d1d5db;
                        transition: width 0.3s ease, background 0.3s ease;
                    }
                    .preview-dot.active {
                        width: 20px;
                        background: #000;
                    }
                }
                "#}
            </style>
            <div class="hero-services-grid">
                { for PREVIEWS.iter().enumerate().map(|(i, preview)| {
                    let select = select.clone();
                    html! {
                        <button class="preview-card" key={preview.id} onclick={Callback::from(move |_: MouseEvent| select.emit(i))}>
                            { preview_body(preview) }
                        </button>
                    }
                }) }
            </div>
            <div class="hero-services-strip">
                <div
                    class="preview-track"
                    ref={carousel.container.clone()}
                    style={format!("gap: {}px;", PREVIEW_GAP)}
                    ontouchstart={carousel.on_touch_start.clone()}
                    ontouchmove={carousel.on_touch_move.clone()}
                    ontouchend={carousel.on_touch_end.clone()}
                >
                    { for carousel.cards.iter().map(|card| {
                        let select = select.clone();
                        let item = card.item;
                        let preview = &PREVIEWS[item];
                        let style = card.style.to_css();
                        html! {
                            <button class="preview-card" key={preview.id} {style} onclick={Callback::from(move |_: MouseEvent| select.emit(item))}>
                                { preview_body(preview) }
                            </button>
                        }
                    }) }
                </div>
                <div class="preview-dots">
                    { for (0..PREVIEWS.len()).map(|i| {
                        let navigate = carousel.navigate.clone();
                        html! {
                            <button
                                class={classes!("preview-dot", (i == active).then_some("active"))}
                                aria-label={format!("Show {}", PREVIEWS[i].title)}
                                onclick={Callback::from(move |_: MouseEvent| navigate.emit(NavAction::GoTo(i)))}
                            />
                        }
                    }) }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_break_after_the_first_word() {
        assert_eq!(title_lines("Intelligent Operations"), ("Intelligent", "Operations"));
        assert_eq!(title_lines("Training & Adoption"), ("Training", "& Adoption"));
        assert_eq!(title_lines("Solo"), ("Solo", ""));
    }
}
