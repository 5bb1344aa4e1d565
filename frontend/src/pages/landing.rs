use gloo_timers::callback::Timeout;
use log::{info, warn};
use yew::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::components::hero_background::HeroBackground;
use crate::components::hero_services::HeroServices;
use crate::components::scroll_reveal::ScrollReveal;
use crate::components::section::{book_consultation, jump_to, Section};
use crate::components::solutions::Solutions;
use crate::components::testimonials::Testimonials;
use crate::config;
use crate::content::{Metric, ADOPTION_BARS, METRICS, PARADOXES, PRINCIPLES, PROCESS_STEPS};
use crate::dom;
use crate::motion::reveal::RevealDirection;
use crate::motion::signal::ServiceSelector;

/// How long the "Copied" confirmation stays up.
const COPIED_MS: u32 = 2_000;

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <Section class="hero">
            <HeroBackground />
            <div class="hero-content">
                <div class="hero-badge mono">
                    <span class="pulse-dot"></span>
                    {"INTELLIGENCE LAB"}
                </div>
                <h1 class="hero-title">
                    {"Designing intelligence, "}<br class="desktop-only" />
                    <span class="muted">{"not just installing it."}</span>
                </h1>
                <div class="hero-divider">
                    <span class="line"></span>
                    <span class="mono">{"What We Do"}</span>
                    <span class="line"></span>
                </div>
                <HeroServices />
                <div class="hero-actions">
                    <button class="btn btn-primary" onclick={jump_to("services")}>
                        {"Explore Our Approach"}<span class="arrow">{"→"}</span>
                    </button>
                    <button class="btn btn-secondary" onclick={book_consultation()}>
                        {"Book a Consultation"}
                    </button>
                </div>
            </div>
        </Section>
    }
}

#[function_component(Philosophy)]
fn philosophy() -> Html {
    html! {
        <Section id="philosophy">
            <ScrollReveal>
                <div class="centered-heading">
                    <span class="pill mono">{"The Paradox"}</span>
                    <h2>
                        {"Most businesses have access to more intelligence than ever before, yet they are"}
                        <span class="muted block">{"less intelligent in how they operate."}</span>
                    </h2>
                </div>
                <div class="grid-3">
                    { for PARADOXES.iter().enumerate().map(|(i, item)| html! {
                        <ScrollReveal key={item.title} delay_ms={i as u32 * 150} threshold={0.2}>
                            <div class="paradox-card">
                                <div class="paradox-icon mono">{format!("0{}", i + 1)}</div>
                                <div>
                                    <h3>{item.title}</h3>
                                    <p class="muted">{item.subtitle}</p>
                                </div>
                            </div>
                        </ScrollReveal>
                    }) }
                </div>
            </ScrollReveal>
        </Section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <Section id="about">
            <ScrollReveal>
                <div class="about-panel">
                    <div class="about-copy">
                        <ScrollReveal delay_ms={100}>
                            <span class="eyebrow mono">{"Who We Are"}</span>
                            <h2>{"We're architects of intelligence."}</h2>
                            <p class="lead">
                                {"Aitoma is an intelligence lab for modern businesses. We don't build AI tools and walk away. We partner with companies to architect intelligent systems into every layer of their operation."}
                            </p>
                        </ScrollReveal>
                        <div class="grid-3 principles">
                            { for PRINCIPLES.iter().enumerate().map(|(i, p)| html! {
                                <ScrollReveal key={p.title} delay_ms={200 + i as u32 * 100} direction={RevealDirection::Left}>
                                    <div class="principle">
                                        <div class="principle-number">{i + 1}</div>
                                        <h4>{p.title}</h4>
                                        <p class="muted">{p.subtitle}</p>
                                    </div>
                                </ScrollReveal>
                            }) }
                        </div>
                    </div>
                    <ScrollReveal delay_ms={300} class="about-visual-wrap">
                        <div class="about-visual">
                            <div class="orbit-ring"></div>
                            <div class="orbit-ring inner"></div>
                            <div class="orbit-core">{"✦"}</div>
                            { for (0..4).map(|i| html! {
                                <div class="orbit" style={format!("animation-duration: {}s;", 20 + i * 5)}>
                                    <span class="orbit-dot"></span>
                                </div>
                            }) }
                        </div>
                    </ScrollReveal>
                </div>
            </ScrollReveal>
        </Section>
    }
}

#[function_component(Process)]
fn process() -> Html {
    html! {
        <Section id="process">
            <ScrollReveal>
                <div class="process-heading">
                    <h2>{"How We Build"}</h2>
                    <div class="underline"></div>
                </div>
            </ScrollReveal>
            <div class="grid-5">
                { for PROCESS_STEPS.iter().enumerate().map(|(i, s)| html! {
                    <ScrollReveal key={s.step} delay_ms={i as u32 * 100} class="fill">
                        <div class="process-card">
                            <div class="process-top">
                                <span class="mono muted">{format!("/{}", s.step)}</span>
                                <span class="process-dot"></span>
                            </div>
                            <div>
                                <h4>{s.title}</h4>
                                <p class="muted">{s.description}</p>
                            </div>
                        </div>
                    </ScrollReveal>
                }) }
            </div>
        </Section>
    }
}

#[derive(Clone, Copy, PartialEq)]
enum MetricLayout {
    Bar,
    Histogram,
    Dark,
}

#[derive(Properties, PartialEq)]
struct MetricCardProps {
    metric: Metric,
    layout: MetricLayout,
}

#[function_component(MetricCard)]
fn metric_card(props: &MetricCardProps) -> Html {
    let m = props.metric;
    let counter = html! {
        <div class="metric-value">
            <AnimatedCounter target={m.target} suffix={m.suffix} />
        </div>
    };
    let bar = html! {
        <div class="metric-bar"><div style={format!("width: {}%;", m.bar_percent)}></div></div>
    };

    match props.layout {
        MetricLayout::Bar => html! {
            <div class="metric-card">
                <div class="metric-label">{m.label}<span class="metric-dot"></span></div>
                <div>
                    {counter}
                    <div class="metric-caption mono">{m.caption}</div>
                    {bar}
                </div>
            </div>
        },
        MetricLayout::Histogram => html! {
            <div class="metric-card">
                <div class="metric-label">{m.label}<span class="metric-badge">{"Top 1%"}</span></div>
                <div class="metric-split">
                    <div>
                        {counter}
                        <div class="metric-caption mono">{m.caption}</div>
                    </div>
                    <div class="histogram">
                        { for ADOPTION_BARS.iter().map(|h| html! {
                            <div class="histogram-bar" style={format!("height: {}%;", h)}></div>
                        }) }
                    </div>
                </div>
            </div>
        },
        MetricLayout::Dark => html! {
            <div class="metric-card dark">
                <div class="metric-label">{m.label}<span>{"↓"}</span></div>
                <div>
                    {counter}
                    <div class="metric-caption mono">{m.caption}</div>
                    {bar}
                </div>
            </div>
        },
    }
}

#[function_component(Results)]
fn results() -> Html {
    let layouts = [
        MetricLayout::Bar,
        MetricLayout::Bar,
        MetricLayout::Histogram,
        MetricLayout::Dark,
    ];
    let card = |i: usize, delay: u32, class: &'static str| {
        html! {
            <ScrollReveal delay_ms={delay} class={classes!("fill", class)}>
                <MetricCard metric={METRICS[i]} layout={layouts[i]} />
            </ScrollReveal>
        }
    };

    html! {
        <Section id="results">
            <div class="results-panel">
                <ScrollReveal>
                    <div class="results-heading">
                        <div>
                            <span class="eyebrow mono">{"Social Proof"}</span>
                            <h3>{"Intelligence at Work"}</h3>
                        </div>
                        <p class="muted desktop-only">{"Measurable impact from systems designed for intelligence."}</p>
                    </div>
                </ScrollReveal>
                <div class="results-grid">
                    {card(0, 100, "")}
                    <ScrollReveal delay_ms={200} class="fill span-2">
                        <div class="testimonial-panel">
                            <Testimonials />
                        </div>
                    </ScrollReveal>
                    {card(1, 300, "")}
                    {card(2, 400, "span-2")}
                    {card(3, 500, "span-2")}
                </div>
            </div>
        </Section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    let copied = use_state_eq(|| false);
    let reset = use_mut_ref(|| None::<Timeout>);

    let on_copy = {
        let copied = copied.clone();
        Callback::from(move |_: MouseEvent| {
            let copied = copied.clone();
            let reset = reset.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match dom::copy_to_clipboard(config::CONTACT_EMAIL).await {
                    Ok(()) => {
                        info!("Copied contact email");
                        copied.set(true);
                        let done = copied.clone();
                        *reset.borrow_mut() = Some(Timeout::new(COPIED_MS, move || done.set(false)));
                    }
                    Err(err) => warn!("could not copy email: {}", err),
                }
            });
        })
    };

    html! {
        <Section id="contact" class="contact">
            <div class="contact-glow" aria-hidden="true">
                <span class="glow one"></span>
                <span class="glow two"></span>
            </div>
            <ScrollReveal>
                <div class="contact-inner">
                    <h2>{"Ready to design "}<br /><span class="muted">{"intelligence?"}</span></h2>
                    <p class="lead muted">{"Let's architect something extraordinary together."}</p>
                    <div class="contact-actions">
                        <button class="btn btn-primary" onclick={book_consultation()}>{"Book Consultation"}</button>
                        <button class="copy-email" onclick={on_copy}>
                            <span class="mono">{config::CONTACT_EMAIL}</span>
                            <span class="copy-state">{ if *copied { "Copied" } else { "Copy" } }</span>
                        </button>
                    </div>
                </div>
            </ScrollReveal>
        </Section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let selector = use_state(ServiceSelector::new);

    html! {
        <ContextProvider<ServiceSelector> context={(*selector).clone()}>
            <style>
                {r#"
                .page-section {
                    position: relative;
                    width: 100%;
                    padding: 5rem 1.5rem;
                    overflow: hidden;
                    background: #EAEAEA;
                    color: #0A0A0A;
                    box-sizing: border-box;
                }
                .page-section-inner {
                    position: relative;
                    z-index: 1;
                    max-width: 1400px;
                    margin: 0 auto;
                }
                .mono {
                    font-family: 'JetBrains Mono', monospace;
                    letter-spacing: 0.08em;
                    text-transform: uppercase;
                }
                .muted {
                    color: #9ca3af;
                }
                .section-label {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-size: 0.7rem;
                    font-weight: 700;
                    color: #6b7280;
                }
                .section-label.light {
                    color: #d1d5db;
                }
                .section-label-line {
                    width: 32px;
                    height: 1px;
                    background: currentColor;
                }
                .block {
                    display: block;
                }
                .btn {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.6rem;
                    min-width: 280px;
                    padding: 1rem 2.25rem;
                    border-radius: 999px;
                    font-size: 1rem;
                    font-weight: 500;
                    cursor: pointer;
                    transition: all 0.3s ease-out;
                }
                .btn-primary {
                    background: #0A0A0A;
                    color: #fff;
                    border: 1px solid transparent;
                }
                .btn-primary:hover {
                    background: #e5e7eb;
                    color: #000;
                    transform: translateY(-2px);
                }
                .btn-secondary {
                    background: #fff;
                    color: #0A0A0A;
                    border: 1px solid #e5e7eb;
                }
                .btn-secondary:hover {
                    border-color: #d1d5db;
                    transform: translateY(-2px);
                }
                .hero {
                    min-height: 80vh;
                    padding-top: 7rem;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }
                .hero-content {
                    position: relative;
                    z-index: 1;
                    text-align: center;
                }
                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.4rem;
                    padding: 0.4rem 0.8rem;
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 999px;
                    font-size: 0.65rem;
                    font-weight: 700;
                }
                .pulse-dot {
                    width: 6px;
                    height: 6px;
                    border-radius: 50%;
                    background: #000;
                    animation: pulse 2s infinite;
                }
                .hero-title {
                    font-size: clamp(2.5rem, 7vw, 6rem);
                    line-height: 0.95;
                    letter-spacing: -0.03em;
                    margin: 2rem 0;
                }
                .hero-divider {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    color: #6b7280;
                    font-size: 0.8rem;
                }
                .hero-divider .line {
                    flex: 1;
                    height: 1px;
                    background: #d1d5db;
                }
                .hero-actions {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    padding-top: 2rem;
                    flex-wrap: wrap;
                }
                .centered-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .centered-heading h2,
                .about-copy h2,
                .process-heading h2,
                .results-heading h3 {
                    font-size: clamp(2rem, 4.5vw, 3.75rem);
                    line-height: 1.1;
                    max-width: 56rem;
                    margin: 1.5rem auto 0;
                }
                .pill {
                    border: 1px solid #d1d5db;
                    border-radius: 999px;
                    padding: 0.4rem 0.8rem;
                    font-size: 0.7rem;
                    color: #6b7280;
                }
                .eyebrow {
                    font-size: 0.7rem;
                    color: #9ca3af;
                    font-weight: 700;
                }
                .grid-3 {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .grid-5 {
                    display: grid;
                    grid-template-columns: repeat(5, 1fr);
                    gap: 1.5rem;
                }
                .fill {
                    height: 100%;
                }
                .paradox-card,
                .process-card {
                    background: #fff;
                    border: 1px solid #f3f4f6;
                    border-radius: 16px;
                    padding: 2rem;
                    min-height: 200px;
                    height: 100%;
                    box-sizing: border-box;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    transition: box-shadow 0.3s ease, transform 0.3s ease;
                }
                .paradox-card:hover,
                .process-card:hover {
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.08);
                    transform: translateY(-6px);
                }
                .paradox-icon {
                    width: 48px;
                    height: 48px;
                    border-radius: 12px;
                    background: #f9fafb;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .about-panel {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 16px;
                    padding: 3rem;
                }
                .about-copy h2 {
                    margin-left: 0;
                }
                .lead {
                    font-size: 1.1rem;
                    line-height: 1.7;
                    color: #4b5563;
                    max-width: 28rem;
                }
                .principle-number {
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    background: #EAEAEA;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 700;
                }
                .about-visual-wrap {
                    height: 100%;
                }
                .about-visual {
                    position: relative;
                    height: 100%;
                    min-height: 400px;
                    background: #EAEAEA;
                    border-radius: 16px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }
                .orbit-ring {
                    position: absolute;
                    width: 320px;
                    height: 320px;
                    border: 1px dashed #9ca3af;
                    border-radius: 50%;
                    opacity: 0.3;
                    animation: spin 20s linear infinite;
                }
                .orbit-ring.inner {
                    width: 288px;
                    height: 288px;
                    animation-direction: reverse;
                    animation-duration: 15s;
                }
                .orbit-core {
                    width: 128px;
                    height: 128px;
                    border-radius: 50%;
                    background: #fff;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2rem;
                    z-index: 1;
                }
                .orbit {
                    position: absolute;
                    width: 320px;
                    height: 320px;
                    animation: spin 20s linear infinite;
                }
                .orbit-dot {
                    position: absolute;
                    top: 0;
                    left: 50%;
                    width: 12px;
                    height: 12px;
                    margin-left: -6px;
                    border-radius: 50%;
                    background: #000;
                }
                .process-heading .underline {
                    width: 80px;
                    height: 4px;
                    background: #000;
                    border-radius: 999px;
                    margin: 1.5rem 0 3rem;
                }
                .process-heading h2 {
                    margin-left: 0;
                }
                .process-top {
                    display: flex;
                    justify-content: space-between;
                }
                .process-dot {
                    width: 6px;
                    height: 6px;
                    border-radius: 50%;
                    background: #e5e7eb;
                }
                .process-card:hover .process-dot {
                    background: #000;
                }
                .results-panel {
                    background: #fff;
                    border-radius: 16px;
                    padding: 3rem;
                }
                .results-heading {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    margin-bottom: 4rem;
                }
                .results-heading h3 {
                    margin-left: 0;
                }
                .results-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    grid-auto-rows: minmax(200px, auto);
                    gap: 2rem;
                }
                .span-2 {
                    grid-column: span 2;
                }
                .metric-card {
                    background: #F8F9FA;
                    border: 1px solid #f3f4f6;
                    border-radius: 16px;
                    padding: 2rem;
                    height: 100%;
                    box-sizing: border-box;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                }
                .metric-card.dark {
                    background: #0A0A0A;
                    border-color: #1f2937;
                    color: #fff;
                }
                .metric-label {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    color: #6b7280;
                    font-size: 0.9rem;
                }
                .metric-dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: #000;
                }
                .metric-badge {
                    background: #fff;
                    border: 1px solid #f3f4f6;
                    border-radius: 4px;
                    padding: 0.2rem 0.5rem;
                    font-size: 0.75rem;
                    font-weight: 700;
                    color: #000;
                }
                .metric-value {
                    font-size: clamp(3rem, 5vw, 3.75rem);
                    letter-spacing: -0.05em;
                    margin-bottom: 0.5rem;
                }
                .metric-caption {
                    font-size: 0.7rem;
                    color: #9ca3af;
                    font-weight: 700;
                    margin-bottom: 0.75rem;
                }
                .metric-bar {
                    height: 6px;
                    background: #e5e7eb;
                    border-radius: 999px;
                    overflow: hidden;
                }
                .metric-card.dark .metric-bar {
                    background: #1f2937;
                }
                .metric-bar div {
                    height: 100%;
                    background: #000;
                    border-radius: 999px;
                }
                .metric-card.dark .metric-bar div {
                    background: #fff;
                }
                .metric-split {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                    align-items: end;
                }
                .histogram {
                    height: 64px;
                    display: flex;
                    align-items: flex-end;
                    gap: 4px;
                }
                .histogram-bar {
                    flex: 1;
                    background: #e5e7eb;
                    border-radius: 2px;
                    transition: background 0.3s ease;
                }
                .histogram-bar:hover {
                    background: #000;
                }
                .testimonial-panel {
                    background: #0A0A0A;
                    color: #fff;
                    border-radius: 16px;
                    height: 100%;
                    padding: 2rem 0;
                }
                .testimonial-panel .testimonials {
                    margin-top: 0;
                }
                .contact {
                    min-height: 70vh;
                    display: flex;
                    align-items: center;
                }
                .contact-glow {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    opacity: 0.3;
                }
                .glow {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(64px);
                    animation: pulse 3s infinite;
                }
                .glow.one {
                    top: 25%;
                    left: 25%;
                    width: 16rem;
                    height: 16rem;
                    background: #e5e7eb;
                }
                .glow.two {
                    bottom: 25%;
                    right: 25%;
                    width: 20rem;
                    height: 20rem;
                    background: #f3f4f6;
                }
                .contact-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                    text-align: center;
                }
                .contact-inner h2 {
                    font-size: clamp(2.5rem, 6vw, 4.5rem);
                    letter-spacing: -0.03em;
                }
                .contact-inner .lead {
                    margin: 0 auto;
                }
                .contact-actions {
                    padding-top: 2rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                }
                .copy-email {
                    display: inline-flex;
                    gap: 0.75rem;
                    align-items: center;
                    background: transparent;
                    border: 1px solid #d1d5db;
                    border-radius: 999px;
                    padding: 0.6rem 1.25rem;
                    cursor: pointer;
                    font: inherit;
                }
                .copy-state {
                    font-size: 0.8rem;
                    color: #0A4DD3;
                }
                @keyframes pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.5; }
                }
                @keyframes spin {
                    from { transform: rotate(0deg); }
                    to { transform: rotate(360deg); }
                }
                @media (max-width: 1023px) {
                    .about-panel {
                        grid-template-columns: 1fr;
                        padding: 2rem;
                    }
                    .results-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 767px) {
                    .page-section {
                        padding: 3rem 1.5rem;
                    }
                    .grid-3,
                    .grid-5,
                    .results-grid {
                        grid-template-columns: 1fr;
                    }
                    .span-2 {
                        grid-column: auto;
                    }
                    .desktop-only {
                        display: none;
                    }
                    .btn {
                        width: 100%;
                    }
                    .results-panel {
                        padding: 1.5rem;
                    }
                }
                "#}
            </style>
            <Hero />
            <Philosophy />
            <About />
            <Solutions />
            <Process />
            <Results />
            <Contact />
        </ContextProvider<ServiceSelector>>
    }
}
