use gloo_render::{request_animation_frame, AnimationFrame};
use log::{info, warn, Level};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod dom;
mod error;
mod motion {
    pub mod breakpoints;
    pub mod carousel;
    pub mod counter;
    pub mod particles;
    pub mod peek;
    pub mod pointer;
    pub mod reveal;
    pub mod rotator;
    pub mod signal;
    pub mod trigger;
}
mod components {
    pub mod animated_counter;
    pub mod custom_cursor;
    pub mod footer;
    pub mod graphics;
    pub mod hero_background;
    pub mod hero_services;
    pub mod logo;
    pub mod scroll_reveal;
    pub mod section;
    pub mod snap_carousel;
    pub mod solutions;
    pub mod testimonials;
}
mod pages {
    pub mod landing;
    pub mod termsprivacy;
}

use components::{
    custom_cursor::CustomCursor,
    logo::Logo,
    section::{book_consultation, jump_to},
};
use motion::pointer::PointerSample;
use motion::signal::PointerFeed;
use pages::{
    landing::Landing,
    termsprivacy::{PrivacyPolicy, TermsAndConditions},
};

/// Scroll depth past which the header turns translucent.
const SCROLLED_AFTER: f64 = 50.0;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy-policy")]
    Privacy,
    #[at("/terms-and-conditions")]
    Terms,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <><SiteHeader /><Landing /></> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsAndConditions /> }
        },
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <><SiteHeader /><Landing /></> }
        },
    }
}

fn lock_body(locked: bool) {
    if let Err(err) = dom::set_body_scroll_locked(locked) {
        warn!("could not toggle body scroll: {}", err);
    }
}

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    let menu_open = use_state_eq(|| false);
    let is_scrolled = use_state_eq(|| dom::scroll_y() > SCROLLED_AFTER);
    let pending = use_mut_ref(|| None::<AnimationFrame>);

    {
        let is_scrolled = is_scrolled.clone();
        use_event_with_window("scroll", move |_: Event| {
            if pending.borrow().is_some() {
                return;
            }
            let is_scrolled = is_scrolled.clone();
            let slot = pending.clone();
            let frame = request_animation_frame(move |_| {
                is_scrolled.set(dom::scroll_y() > SCROLLED_AFTER);
                slot.borrow_mut().take();
            });
            *pending.borrow_mut() = Some(frame);
        });
    }

    use_effect_with_deps(
        |open| {
            let open = *open;
            if open {
                lock_body(true);
            }
            move || {
                if open {
                    lock_body(false);
                }
            }
        },
        *menu_open,
    );

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let to_top = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            if let Ok(window) = dom::window() {
                let options = web_sys::ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        })
    };

    let view_solutions = {
        let menu_open = menu_open.clone();
        let jump = jump_to("services");
        Callback::from(move |e: MouseEvent| {
            menu_open.set(false);
            jump.emit(e);
        })
    };

    let book_from_menu = {
        let menu_open = menu_open.clone();
        let book = book_consultation();
        Callback::from(move |e: MouseEvent| {
            menu_open.set(false);
            book.emit(e);
        })
    };

    html! {
        <>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    transition: background 0.3s ease, backdrop-filter 0.3s ease, border-color 0.3s ease;
                    border-bottom: 1px solid transparent;
                }
                .site-header.scrolled {
                    background: rgba(255, 255, 255, 0.75);
                    backdrop-filter: blur(16px) saturate(180%);
                    -webkit-backdrop-filter: blur(16px) saturate(180%);
                    border-bottom-color: rgba(0, 0, 0, 0.06);
                }
                .site-header-inner {
                    max-width: 1400px;
                    margin: 0 auto;
                    height: 80px;
                    padding: 0 1.5rem;
                    display: grid;
                    grid-template-columns: 1fr auto 1fr;
                    align-items: center;
                }
                .header-logo {
                    grid-column: 2;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0;
                }
                .header-logo svg {
                    height: 28px;
                    width: auto;
                }
                .header-actions {
                    grid-column: 3;
                    justify-self: end;
                }
                .header-book {
                    background: #0A0A0A;
                    color: #fff;
                    border: none;
                    border-radius: 999px;
                    padding: 0.6rem 1.4rem;
                    font-size: 0.9rem;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .header-book:hover {
                    transform: translateY(-1px);
                }
                .burger {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    padding: 0.5rem;
                    cursor: pointer;
                }
                .burger span {
                    width: 22px;
                    height: 2px;
                    background: #0A0A0A;
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }
                .burger.open span:nth-child(1) {
                    transform: translateY(7px) rotate(45deg);
                }
                .burger.open span:nth-child(2) {
                    opacity: 0;
                }
                .burger.open span:nth-child(3) {
                    transform: translateY(-7px) rotate(-45deg);
                }
                .mobile-menu {
                    position: fixed;
                    inset: 80px 0 0 0;
                    z-index: 49;
                    background: #EAEAEA;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    padding: 2rem;
                }
                .mobile-menu button {
                    width: 100%;
                    max-width: 320px;
                    padding: 1rem;
                    border-radius: 999px;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .mobile-menu .primary {
                    background: #0A0A0A;
                    color: #fff;
                    border: none;
                }
                .mobile-menu .secondary {
                    background: #fff;
                    color: #0A0A0A;
                    border: 1px solid #e5e7eb;
                }
                @media (max-width: 767px) {
                    .header-book {
                        display: none;
                    }
                    .burger {
                        display: flex;
                    }
                }
                "#}
            </style>
            <header class={classes!("site-header", (*is_scrolled || *menu_open).then_some("scrolled"))}>
                <div class="site-header-inner">
                    <button class="header-logo" aria-label="Back to top" onclick={to_top}>
                        <Logo />
                    </button>
                    <div class="header-actions">
                        <button class="header-book" onclick={book_consultation()}>
                            {"Book Consultation"}
                        </button>
                        <button
                            class={classes!("burger", (*menu_open).then_some("open"))}
                            aria-label="Menu"
                            aria-expanded={(*menu_open).to_string()}
                            onclick={toggle_menu}
                        >
                            <span></span>
                            <span></span>
                            <span></span>
                        </button>
                    </div>
                </div>
            </header>
            if *menu_open {
                <div class="mobile-menu">
                    <button class="primary" onclick={book_from_menu}>{"Book Consultation"}</button>
                    <button class="secondary" onclick={view_solutions}>{"View Our Solutions"}</button>
                </div>
            }
        </>
    }
}

#[function_component]
fn App() -> Html {
    let feed = use_state(PointerFeed::new);

    {
        let feed = (*feed).clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            feed.emit(&PointerSample::new(e.client_x() as f64, e.client_y() as f64));
        });
    }

    html! {
        <ContextProvider<PointerFeed> context={(*feed).clone()}>
            <BrowserRouter>
                <CustomCursor />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<PointerFeed>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
