//! Illustrations shown next to each service in the solutions carousel.

use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use rand::Rng;
use yew::prelude::*;

use crate::content::GraphicKind;

#[derive(Properties, PartialEq)]
pub struct ServiceGraphicProps {
    pub kind: GraphicKind,
}

#[function_component(ServiceGraphic)]
pub fn service_graphic(props: &ServiceGraphicProps) -> Html {
    match props.kind {
        GraphicKind::Dashboard => html! { <DashboardGraphic /> },
        GraphicKind::Creative => html! { <CreativeGraphic /> },
        GraphicKind::Training => html! { <TrainingGraphic /> },
        GraphicKind::Architecture => html! { <ArchitectureGraphic /> },
    }
}

const CHART_WIDTH: f64 = 300.0;
const CHART_HEIGHT: f64 = 120.0;
/// Upper bound of both chart series; values are plotted against it.
const CHART_MAX: f64 = 80.0;
const TASKS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartPoint {
    pub active: f64,
    pub processed: f64,
}

const SEED_SERIES: [ChartPoint; 7] = [
    ChartPoint { active: 40.0, processed: 24.0 },
    ChartPoint { active: 30.0, processed: 13.0 },
    ChartPoint { active: 20.0, processed: 58.0 },
    ChartPoint { active: 27.0, processed: 39.0 },
    ChartPoint { active: 18.0, processed: 48.0 },
    ChartPoint { active: 23.0, processed: 38.0 },
    ChartPoint { active: 34.0, processed: 43.0 },
];

fn chart_coords(values: &[f64], width: f64, height: f64, max: f64) -> Vec<(f64, f64)> {
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let clamped = v.clamp(0.0, max);
            (i as f64 * step, height - clamped / max * height)
        })
        .collect()
}

/// SVG polyline path through `values`, scaled into a `width` x `height` box.
pub fn chart_path(values: &[f64], width: f64, height: f64, max: f64) -> String {
    if max <= 0.0 {
        return String::new();
    }
    chart_coords(values, width, height, max)
        .iter()
        .enumerate()
        .map(|(i, (x, y))| format!("{}{:.1} {:.1}", if i == 0 { "M" } else { " L" }, x, y))
        .collect()
}

/// `chart_path` closed down to the baseline, for the filled area.
pub fn area_path(values: &[f64], width: f64, height: f64, max: f64) -> String {
    let line = chart_path(values, width, height, max);
    if line.is_empty() {
        return line;
    }
    let last_x = chart_coords(values, width, height, max)
        .last()
        .map(|(x, _)| *x)
        .unwrap_or(0.0);
    format!("{} L{:.1} {:.1} L0.0 {:.1} Z", line, last_x, height, height)
}

#[derive(Clone, Debug, PartialEq)]
struct DashboardState {
    series: Vec<ChartPoint>,
    task: usize,
}

impl Reducible for DashboardState {
    type Action = ChartPoint;

    /// Rotates the oldest point out and appends the fresh one.
    fn reduce(self: Rc<Self>, fresh: ChartPoint) -> Rc<Self> {
        let mut series = self.series.clone();
        if !series.is_empty() {
            series.remove(0);
            series.push(fresh);
        }
        Rc::new(DashboardState {
            series,
            task: (self.task + 1) % TASKS,
        })
    }
}

#[function_component(DashboardGraphic)]
pub fn dashboard_graphic() -> Html {
    let state = use_reducer(|| DashboardState {
        series: SEED_SERIES.to_vec(),
        task: 0,
    });

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(3_000, move || {
                    let mut rng = rand::thread_rng();
                    dispatcher.dispatch(ChartPoint {
                        active: rng.gen_range(10..60) as f64,
                        processed: rng.gen_range(20..80) as f64,
                    });
                });
                move || drop(interval)
            },
            (),
        );
    }

    let active: Vec<f64> = state.series.iter().map(|p| p.active).collect();
    let processed: Vec<f64> = state.series.iter().map(|p| p.processed).collect();

    html! {
        <div class="graphic dashboard-graphic">
            <div class="graphic-titlebar">
                <div class="window-dots"><span class="on"></span><span></span><span></span></div>
                <div class="mono muted">{"LIVE INTELLIGENCE"}</div>
            </div>
            <div class="dashboard-stats">
                <div class="stat"><span class="muted">{"Efficiency"}</span><strong>{"94.2%"}</strong></div>
                <div class="stat"><span class="muted">{"Velocity"}</span><strong>{"1.2s"}</strong></div>
                <div class="stat"><span class="muted">{"Agents"}</span><strong>{"12"}</strong></div>
            </div>
            <svg class="dashboard-chart" viewBox={format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)} preserveAspectRatio="none">
                <defs>
                    <linearGradient id="chart-fill" x1="0" y1="0" x2="0" y2="1">
                        <stop offset="5%" stop-color="#000000" stop-opacity="0.1" />
                        <stop offset="95%" stop-color="#000000" stop-opacity="0" />
                    </linearGradient>
                </defs>
                <path d={area_path(&active, CHART_WIDTH, CHART_HEIGHT, CHART_MAX)} fill="url(#chart-fill)" />
                <path d={chart_path(&active, CHART_WIDTH, CHART_HEIGHT, CHART_MAX)} fill="none" stroke="#000000" stroke-width="2" />
                <path d={chart_path(&processed, CHART_WIDTH, CHART_HEIGHT, CHART_MAX)} fill="none" stroke="#9CA3AF" stroke-width="2" stroke-dasharray="4 4" />
            </svg>
            <div class="dashboard-tasks">
                { for (0..TASKS).map(|i| {
                    let current = state.task == i;
                    html! {
                        <div class={classes!("task", current.then_some("current"))}>
                            <span class="task-dot"></span>
                            <span>{format!("Auto-scheduling client follow-up #{}", 1024 + i)}</span>
                            if current {
                                <span class="task-check">{"✓"}</span>
                            }
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}

const CREATIVE_TEXT: &str =
    "Analyzing brand voice... Generating variations... Adapting to LinkedIn format...";

/// Text shown at typewriter `step`, and the step that follows it.
/// Steps run `0..=len` (in characters) and then wrap to the empty prefix.
pub fn typewriter_frame(text: &str, step: usize) -> (&str, usize) {
    let len = text.chars().count();
    let shown = step.min(len);
    let end = text
        .char_indices()
        .nth(shown)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let next = if step >= len { 0 } else { step + 1 };
    (&text[..end], next)
}

#[function_component(CreativeGraphic)]
pub fn creative_graphic() -> Html {
    let step = use_state_eq(|| 0_usize);

    {
        let step = step.clone();
        let cursor = use_mut_ref(|| 0_usize);
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(100, move || {
                    let current = *cursor.borrow();
                    let (_, next) = typewriter_frame(CREATIVE_TEXT, current);
                    *cursor.borrow_mut() = next;
                    step.set(next);
                });
                move || drop(interval)
            },
            (),
        );
    }

    let (typed, _) = typewriter_frame(CREATIVE_TEXT, *step);

    html! {
        <div class="graphic creative-graphic">
            <div class="creative-generator">
                <span class="mono tag">{"GENERATOR"}</span>
                <p class="mono typed">{typed}<span class="caret">{"|"}</span></p>
            </div>
            <div class="creative-asset">{"Visual Asset"}</div>
            <div class="creative-analytics">
                <div class="bar"><div style="width: 70%"></div></div>
                <div class="bar short"><div style="width: 40%"></div></div>
            </div>
        </div>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Speaker {
    User,
    Assistant,
    System,
}

const TRANSCRIPT: [(Speaker, &str); 5] = [
    (Speaker::User, "How do I analyze this quarterly data?"),
    (Speaker::Assistant, "I can help with that. Let's look at the revenue trends first. Upload your CSV."),
    (Speaker::System, "Skill Unlocked: Data Analysis Level 1"),
    (Speaker::User, "Uploaded. What's the forecast?"),
    (Speaker::Assistant, "Based on Q1-Q3, we project a 15% growth in Q4. Here is the breakdown..."),
];

const MESSAGE_DELAY_MS: u32 = 2_500;
const RESTART_DELAY_MS: u32 = 5_000;

/// How many transcript messages are visible at `step`.
fn visible_messages(step: usize, len: usize) -> usize {
    (step + 1).min(len)
}

/// Delay before leaving `step`, and the step that follows.
fn chat_schedule(step: usize, len: usize) -> (u32, usize) {
    if step < len {
        (MESSAGE_DELAY_MS, step + 1)
    } else {
        (RESTART_DELAY_MS, 0)
    }
}

#[function_component(TrainingGraphic)]
pub fn training_graphic() -> Html {
    let step = use_state_eq(|| 0_usize);
    let transcript = use_node_ref();

    {
        let setter = step.clone();
        use_effect_with_deps(
            move |current| {
                let (delay, next) = chat_schedule(*current, TRANSCRIPT.len());
                let timeout = Timeout::new(delay, move || setter.set(next));
                move || drop(timeout)
            },
            *step,
        );
    }

    {
        let transcript = transcript.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(list) = transcript.cast::<web_sys::Element>() {
                    list.set_scroll_top(list.scroll_height());
                }
                || ()
            },
            *step,
        );
    }

    html! {
        <div class="graphic training-graphic">
            <div class="chat">
                <div class="chat-header"><span class="dot"></span>{"Training Simulator v2.0"}</div>
                <div class="chat-log" ref={transcript}>
                    { for TRANSCRIPT[..visible_messages(*step, TRANSCRIPT.len())].iter().map(|(speaker, text)| {
                        let class = match speaker {
                            Speaker::User => "msg user",
                            Speaker::Assistant => "msg assistant",
                            Speaker::System => "msg system",
                        };
                        html! { <div class={class}>{*text}</div> }
                    }) }
                </div>
                <div class="chat-input"><span class="placeholder"></span></div>
            </div>
            <div class="fluency">
                <h4>{"Team Fluency"}</h4>
                <svg viewBox="0 0 96 96" class="fluency-ring">
                    <circle cx="48" cy="48" r="40" stroke="#f3f4f6" stroke-width="8" fill="none" />
                    <circle cx="48" cy="48" r="40" stroke="#000000" stroke-width="8" fill="none"
                        stroke-dasharray="251.2" stroke-dashoffset="62.8" transform="rotate(-90 48 48)" />
                </svg>
                <strong>{"75%"}</strong>
                <span class="muted">{"+12% this week"}</span>
            </div>
        </div>
    }
}

#[function_component(ArchitectureGraphic)]
pub fn architecture_graphic() -> Html {
    html! {
        <div class="graphic architecture-graphic">
            <div class="iso-stack">
                <div class="iso-layer layer-data"><span class="mono">{"DATA LAYER"}</span></div>
                <div class="iso-layer layer-intel"><span class="mono">{"INTELLIGENCE"}</span></div>
                <div class="iso-layer layer-ui"><span class="mono">{"INTERFACE"}</span></div>
                <div class="iso-orbit"></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn chart_path_scales_into_the_box() {
        let path = chart_path(&[0.0, 40.0, 80.0], 200.0, 100.0, 80.0);
        assert_eq!(path, "M0.0 100.0 L100.0 50.0 L200.0 0.0");
    }

    #[test]
    fn chart_path_clamps_out_of_range_values() {
        let path = chart_path(&[-10.0, 120.0], 10.0, 10.0, 80.0);
        assert_eq!(path, "M0.0 10.0 L10.0 0.0");
    }

    #[test]
    fn area_path_closes_to_the_baseline() {
        let area = area_path(&[40.0, 40.0], 100.0, 50.0, 80.0);
        assert_eq!(area, "M0.0 25.0 L100.0 25.0 L100.0 50.0 L0.0 50.0 Z");
        assert_eq!(area_path(&[], 100.0, 50.0, 80.0), "");
        assert_eq!(chart_path(&[1.0], 100.0, 50.0, 0.0), "");
    }

    #[test]
    fn dashboard_rotates_one_point_per_tick() {
        let state = Rc::new(DashboardState {
            series: SEED_SERIES.to_vec(),
            task: 2,
        });
        let fresh = ChartPoint { active: 11.0, processed: 22.0 };
        let next = state.reduce(fresh);
        assert_eq!(next.series.len(), SEED_SERIES.len());
        assert_eq!(next.series[0], SEED_SERIES[1]);
        assert_eq!(next.series.last(), Some(&fresh));
        assert_eq!(next.task, 0);
    }

    #[test]
    fn typewriter_grows_then_wraps() {
        let text = "abc";
        assert_eq!(typewriter_frame(text, 0), ("", 1));
        assert_eq!(typewriter_frame(text, 2), ("ab", 3));
        assert_eq!(typewriter_frame(text, 3), ("abc", 0));
        assert_eq!(typewriter_frame(text, 9), ("abc", 0));
    }

    #[test]
    fn typewriter_respects_char_boundaries() {
        assert_eq!(typewriter_frame("aé✓", 2), ("aé", 3));
    }

    #[test]
    fn chat_reveals_one_message_per_step_then_restarts() {
        let len = TRANSCRIPT.len();
        assert_eq!(visible_messages(0, len), 1);
        assert_eq!(visible_messages(len, len), len);
        assert_eq!(chat_schedule(0, len), (MESSAGE_DELAY_MS, 1));
        assert_eq!(chat_schedule(len - 1, len), (MESSAGE_DELAY_MS, len));
        assert_eq!(chat_schedule(len, len), (RESTART_DELAY_MS, 0));
    }
}
