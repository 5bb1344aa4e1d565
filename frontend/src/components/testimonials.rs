use std::cmp::Ordering;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::content::TESTIMONIALS;
use crate::dom;
use crate::motion::rotator::{Rotator, DEFAULT_INTERVAL_MS};

#[derive(Clone, Copy, Debug, PartialEq)]
enum RotatorAction {
    Tick(f64),
    Hover,
    Leave(f64),
    GoTo(usize, f64),
    Next(f64),
    Prev(f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct RotatorState(Rotator);

impl Reducible for RotatorState {
    type Action = RotatorAction;

    fn reduce(self: Rc<Self>, action: RotatorAction) -> Rc<Self> {
        let mut rotator = self.0;
        match action {
            RotatorAction::Tick(now) => {
                rotator.tick(now);
            }
            RotatorAction::Hover => rotator.pause(),
            RotatorAction::Leave(now) => rotator.resume(now),
            RotatorAction::GoTo(index, now) => rotator.go_to(index, now),
            RotatorAction::Next(now) => rotator.next(now),
            RotatorAction::Prev(now) => rotator.prev(now),
        }
        if rotator == self.0 {
            self
        } else {
            Rc::new(RotatorState(rotator))
        }
    }
}

/// Where a slide sits relative to the current one.
fn slide_class(slot: usize, current: usize) -> &'static str {
    match slot.cmp(&current) {
        Ordering::Less => "slide before",
        Ordering::Equal => "slide current",
        Ordering::Greater => "slide after",
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let state = use_reducer(|| {
        RotatorState(Rotator::new(TESTIMONIALS.len(), DEFAULT_INTERVAL_MS, dom::now()))
    });

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |rotator: &Rotator| {
                let timeout = rotator.deadline().zip(rotator.remaining(dom::now())).map(|(deadline, wait)| {
                    Timeout::new(wait.ceil() as u32, move || {
                        // timers can fire a little early; never tick before the deadline
                        dispatcher.dispatch(RotatorAction::Tick(dom::now().max(deadline)));
                    })
                });
                move || drop(timeout)
            },
            state.0,
        );
    }

    let current = state.0.index();
    let on_enter = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(RotatorAction::Hover))
    };
    let on_leave = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(RotatorAction::Leave(dom::now())))
    };
    let on_prev = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(RotatorAction::Prev(dom::now())))
    };
    let on_next = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(RotatorAction::Next(dom::now())))
    };

    html! {
        <div class="testimonials" onmouseenter={on_enter} onmouseleave={on_leave}>
            <style>
                {r#"
                .testimonials {
                    position: relative;
                    max-width: 900px;
                    margin: 6rem auto 0;
                    padding: 0 1.5rem;
                }
                .testimonial-stage {
                    position: relative;
                    min-height: 280px;
                    overflow: hidden;
                }
                .slide {
                    position: absolute;
                    inset: 0;
                    transition: opacity 0.7s ease, transform 0.7s ease;
                }
                .slide.current {
                    opacity: 1;
                    transform: translateX(0);
                }
                .slide.before {
                    opacity: 0;
                    transform: translateX(-40px);
                    pointer-events: none;
                }
                .slide.after {
                    opacity: 0;
                    transform: translateX(40px);
                    pointer-events: none;
                }
                .slide blockquote {
                    font-size: clamp(1.3rem, 3vw, 2rem);
                    line-height: 1.4;
                    font-weight: 500;
                    letter-spacing: -0.01em;
                    margin: 0 0 2rem;
                }
                .slide .author {
                    font-weight: 600;
                }
                .slide .role {
                    color: #9ca3af;
                    font-size: 0.9rem;
                }
                .testimonial-nav {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-top: 1rem;
                }
                .testimonial-nav button.arrow {
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: transparent;
                    color: inherit;
                    cursor: pointer;
                }
                .testimonial-dot {
                    width: 8px;
                    height: 8px;
                    border: none;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.25);
                    cursor: pointer;
                    transition: width 0.3s ease, background 0.3s ease;
                }
                .testimonial-dot.active {
                    width: 24px;
                    background: #fff;
                }
                "#}
            </style>
            <div class="testimonial-stage">
                { for TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                    <figure class={slide_class(i, current)} key={t.id} aria-hidden={(i != current).to_string()}>
                        <blockquote>{format!("\u{201C}{}\u{201D}", t.quote)}</blockquote>
                        <figcaption>
                            <div class="author">{t.author}</div>
                            <div class="role">{format!("{}, {}", t.role, t.company)}</div>
                        </figcaption>
                    </figure>
                }) }
            </div>
            <div class="testimonial-nav">
                <button class="arrow" aria-label="Previous testimonial" onclick={on_prev}>{"←"}</button>
                { for (0..TESTIMONIALS.len()).map(|i| {
                    let state = state.clone();
                    html! {
                        <button
                            class={classes!("testimonial-dot", (i == current).then_some("active"))}
                            aria-label={format!("Show testimonial {}", i + 1)}
                            onclick={Callback::from(move |_: MouseEvent| state.dispatch(RotatorAction::GoTo(i, dom::now())))}
                        />
                    }
                }) }
                <button class="arrow" aria-label="Next testimonial" onclick={on_next}>{"→"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn state(now: f64) -> Rc<RotatorState> {
        Rc::new(RotatorState(Rotator::new(3, DEFAULT_INTERVAL_MS, now)))
    }

    #[test]
    fn early_tick_keeps_the_same_state() {
        let before = state(0.0);
        let after = before.clone().reduce(RotatorAction::Tick(1_000.0));
        assert!(Rc::ptr_eq(&before, &after));
    }

    #[test]
    fn hover_then_leave_restarts_the_interval() {
        let s = state(0.0).reduce(RotatorAction::Hover);
        assert_eq!(s.0.deadline(), None);
        let s = s.reduce(RotatorAction::Tick(50_000.0));
        assert_eq!(s.0.index(), 0);
        let s = s.reduce(RotatorAction::Leave(50_000.0));
        assert_eq!(s.0.deadline(), Some(56_000.0));
    }

    #[test]
    fn manual_navigation_moves_and_rearms() {
        let s = state(0.0).reduce(RotatorAction::Prev(2_000.0));
        assert_eq!(s.0.index(), 2);
        assert_eq!(s.0.deadline(), Some(8_000.0));
        let s = s.reduce(RotatorAction::GoTo(1, 3_000.0));
        assert_eq!(s.0.index(), 1);
        let s = s.reduce(RotatorAction::Next(4_000.0));
        assert_eq!(s.0.index(), 2);
    }

    #[test]
    fn slides_exit_left_and_enter_right() {
        assert_eq!(slide_class(0, 1), "slide before");
        assert_eq!(slide_class(1, 1), "slide current");
        assert_eq!(slide_class(2, 1), "slide after");
    }
}
