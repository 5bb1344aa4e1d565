//! DOM side of the snapping carousels: listeners, timers and frames that
//! feed a `CarouselEngine` and apply what it returns.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::{Element, TouchEvent};
use yew::functional::hook;
use yew::prelude::*;

use crate::dom;
use crate::motion::breakpoints::Breakpoint;
use crate::motion::carousel::{
    CarouselEngine, CarouselOptions, NavAction, ScrollRequest, SwipeTracker, WidthFn,
};
use crate::motion::peek::{distance_from_center, CardStyle, PeekConfig};

/// Delay before the first measurement, after one animation frame.
const INIT_DELAY_MS: u32 = 100;
/// Delay between measurement attempts while the layout has no width.
const INIT_RETRY_MS: u32 = 50;

/// One rendered card: which item it shows and how it is styled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardSlot {
    pub item: usize,
    pub style: CardStyle,
}

pub struct SnapCarousel {
    pub container: NodeRef,
    pub active: usize,
    /// 1-based, for "02 / 04" counters.
    pub position: usize,
    pub cards: Vec<CardSlot>,
    pub navigate: Callback<NavAction>,
    pub on_touch_start: Callback<TouchEvent>,
    pub on_touch_move: Callback<TouchEvent>,
    pub on_touch_end: Callback<TouchEvent>,
}

struct Shared {
    engine: Option<CarouselEngine>,
    peek: PeekConfig,
    card_width: WidthFn,
    container: NodeRef,
    active: UseStateHandle<usize>,
    styles: UseStateHandle<Rc<Vec<CardStyle>>>,
    init_frame: Option<AnimationFrame>,
    init_timer: Option<Timeout>,
    settle_timer: Option<Timeout>,
    peek_frame: Option<AnimationFrame>,
}

type SharedRef = Rc<RefCell<Shared>>;

impl Shared {
    fn element(&self) -> Option<Element> {
        self.container.cast::<Element>()
    }

    fn publish_active(&self) {
        if let Some(engine) = &self.engine {
            self.active.set(engine.active_index());
        }
    }

    /// Drops every pending frame and timer; each of them holds a `SharedRef`.
    fn teardown(&mut self) {
        self.init_frame = None;
        self.init_timer = None;
        self.settle_timer = None;
        self.peek_frame = None;
    }
}

fn apply(element: &Element, request: Option<ScrollRequest>) {
    if let Some(request) = request {
        dom::scroll_element_to(element, request);
    }
}

fn try_init(shared: &SharedRef) {
    let mut s = shared.borrow_mut();
    let request = match (s.element(), s.engine.as_mut()) {
        (Some(element), Some(engine)) if element.children().length() > 0 => engine
            .initial_scroll(dom::viewport_width())
            .map(|request| (element, request)),
        _ => None,
    };

    match request {
        Some((element, request)) => {
            s.init_timer = None;
            dom::scroll_element_to(&element, request);
            s.publish_active();
            drop(s);
            schedule_peek(shared);
        }
        None => {
            debug!("carousel layout not ready, retrying in {}ms", INIT_RETRY_MS);
            let retry = shared.clone();
            s.init_timer = Some(Timeout::new(INIT_RETRY_MS, move || try_init(&retry)));
        }
    }
}

fn refresh_peek(shared: &SharedRef) {
    let s = shared.borrow();
    let Some(element) = s.element() else {
        return;
    };
    let viewport = dom::viewport_width();
    let breakpoint = Breakpoint::from_viewport(viewport);

    // narrow layouts use fixed styles; only the snapped slot is looked up
    if let Some(engine) = &s.engine {
        let centred = engine.slot_at(element.scroll_left() as f64);
        if let Some(styles) = s.peek.narrow_styles(breakpoint, engine.rendered_len(), centred) {
            s.styles.set(Rc::new(styles));
            return;
        }
    }

    let card_width = (s.card_width)(viewport);

    let children = element.children();
    let styles: Vec<CardStyle> = (0..children.length())
        .filter_map(|i| children.item(i))
        .map(|card| {
            let rect = card.get_bounding_client_rect();
            let distance = distance_from_center(rect.left(), rect.width(), viewport);
            s.peek.style_for(distance, card_width, breakpoint)
        })
        .collect();
    s.styles.set(Rc::new(styles));
}

/// Peek styles are recomputed at most once per animation frame.
fn schedule_peek(shared: &SharedRef) {
    let mut s = shared.borrow_mut();
    if s.peek_frame.is_some() {
        return;
    }
    let next = shared.clone();
    s.peek_frame = Some(request_animation_frame(move |_| {
        next.borrow_mut().peek_frame = None;
        refresh_peek(&next);
    }));
}

fn settle(shared: &SharedRef) {
    let mut s = shared.borrow_mut();
    s.settle_timer = None;
    let Some(element) = s.element() else {
        return;
    };
    let Some(engine) = s.engine.as_mut() else {
        return;
    };
    let outcome = engine.settle(element.scroll_left() as f64, dom::now());

    if let Some(wait) = outcome.retry_after_ms {
        let next = shared.clone();
        s.settle_timer = Some(Timeout::new(wait.ceil() as u32 + 1, move || settle(&next)));
        return;
    }
    if outcome.active_changed {
        s.publish_active();
    }
    apply(&element, outcome.correction);
}

fn on_scroll(shared: &SharedRef) {
    schedule_peek(shared);
    let mut s = shared.borrow_mut();
    let Some(debounce) = s.engine.as_ref().map(|e| e.options().debounce_ms) else {
        return;
    };
    let next = shared.clone();
    // replacing the handle cancels the previous debounce
    s.settle_timer = Some(Timeout::new(debounce, move || settle(&next)));
}

fn on_resize(shared: &SharedRef) {
    {
        let mut s = shared.borrow_mut();
        let Some(element) = s.element() else {
            return;
        };
        let Some(engine) = s.engine.as_mut() else {
            return;
        };
        let request = engine.resize(dom::viewport_width(), element.scroll_left() as f64, dom::now());
        apply(&element, request);
        if request.is_some() {
            s.publish_active();
        }
    }
    schedule_peek(shared);
}

fn navigate_to(shared: &SharedRef, action: NavAction) {
    let mut s = shared.borrow_mut();
    let Some(element) = s.element() else {
        return;
    };
    let Some(engine) = s.engine.as_mut() else {
        return;
    };
    let request = engine.navigate(action, element.scroll_left() as f64, dom::now());
    if request.is_some() {
        s.publish_active();
        apply(&element, request);
    }
}

fn first_touch_x(event: &TouchEvent) -> Option<f64> {
    event
        .target_touches()
        .get(0)
        .map(|touch| touch.client_x() as f64)
}

#[hook]
pub fn use_snap_carousel(
    count: usize,
    options: CarouselOptions,
    peek: PeekConfig,
    card_width: WidthFn,
) -> SnapCarousel {
    let container = use_node_ref();
    let active = use_state_eq(|| 0_usize);
    let styles = use_state_eq(|| Rc::new(Vec::<CardStyle>::new()));
    let swipe = use_mut_ref(SwipeTracker::default);

    let shared: SharedRef = {
        let container = container.clone();
        let active = active.clone();
        let styles = styles.clone();
        use_mut_ref(move || {
            let engine = CarouselEngine::new(
                count,
                options.with_reduced_motion(dom::prefers_reduced_motion()),
            )
            .map_err(|err| warn!("carousel disabled: {}", err))
            .ok();
            Shared {
                engine,
                peek,
                card_width,
                container,
                active,
                styles,
                init_frame: None,
                init_timer: None,
                settle_timer: None,
                peek_frame: None,
            }
        })
    };

    {
        let shared = shared.clone();
        use_effect_with_deps(
            move |_| {
                let mut listeners = Vec::new();
                let element = shared.borrow().element();
                if let Some(element) = element {
                    let scrolled = shared.clone();
                    listeners.push(EventListener::new(&element, "scroll", move |_| {
                        on_scroll(&scrolled)
                    }));
                }
                if let Ok(window) = dom::window() {
                    let resized = shared.clone();
                    listeners.push(EventListener::new(&window, "resize", move |_| {
                        on_resize(&resized)
                    }));
                }

                // one frame for layout, then a short delay before measuring
                let next = shared.clone();
                let frame = request_animation_frame(move |_| {
                    let again = next.clone();
                    let mut s = next.borrow_mut();
                    s.init_frame = None;
                    s.init_timer = Some(Timeout::new(INIT_DELAY_MS, move || try_init(&again)));
                });
                shared.borrow_mut().init_frame = Some(frame);

                move || {
                    drop(listeners);
                    shared.borrow_mut().teardown();
                }
            },
            (),
        );
    }

    let navigate = {
        let shared = shared.clone();
        Callback::from(move |action: NavAction| navigate_to(&shared, action))
    };

    let on_touch_start = {
        let swipe = swipe.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(x) = first_touch_x(&e) {
                swipe.borrow_mut().start(x);
            }
        })
    };

    let on_touch_move = {
        let swipe = swipe.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(x) = first_touch_x(&e) {
                swipe.borrow_mut().track(x);
            }
        })
    };

    let on_touch_end = {
        let shared = shared.clone();
        Callback::from(move |_: TouchEvent| {
            let action = swipe.borrow_mut().finish();
            if let Some(action) = action {
                navigate_to(&shared, action);
            }
        })
    };

    let (position, cards) = match &shared.borrow().engine {
        Some(engine) => (
            engine.display_position(),
            (0..engine.rendered_len())
                .map(|slot| CardSlot {
                    item: engine.logical_index(slot),
                    style: styles.get(slot).copied().unwrap_or(CardStyle::FULL),
                })
                .collect(),
        ),
        None => (1, Vec::new()),
    };

    SnapCarousel {
        container,
        active: *active,
        position,
        cards,
        navigate,
        on_touch_start,
        on_touch_move,
        on_touch_end,
    }
}
