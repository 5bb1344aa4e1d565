//! Canvas behind the hero: draws a `ParticleField` every animation frame.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::dom;
use crate::error::UiError;
use crate::motion::particles::{Link, ParticleField, ShapeKind};
use crate::motion::pointer::PointerSample;
use crate::motion::signal::{PointerFeed, Subscription};

struct Scene {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    field: ParticleField,
    rng: SmallRng,
}

impl Scene {
    /// Matches the canvas to its container and scatters a new population.
    fn fit(&mut self) {
        let (width, height) = match self.canvas.parent_element() {
            Some(parent) => (parent.client_width().max(0), parent.client_height().max(0)),
            None => (0, 0),
        };
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.field.reseed(width as f64, height as f64, &mut self.rng);
        debug!("hero canvas resized to {}x{}", width, height);
    }

    fn track(&mut self, sample: PointerSample) {
        let rect = self.canvas.get_bounding_client_rect();
        let inside = sample.x >= rect.left()
            && sample.x <= rect.right()
            && sample.y >= rect.top()
            && sample.y <= rect.bottom();
        self.field
            .set_pointer(inside.then(|| sample.relative_to(rect.left(), rect.top())));
    }

    fn frame(&mut self) {
        self.field.step();
        if let Err(err) = draw(&self.ctx, &self.field) {
            debug!("hero canvas frame skipped: {:?}", err);
        }
    }
}

#[allow(deprecated)]
fn stroke_links(ctx: &CanvasRenderingContext2d, links: &[Link], rgb: &str) {
    for link in links {
        ctx.set_stroke_style(&JsValue::from_str(&format!("rgba({}, {:.3})", rgb, link.alpha)));
        ctx.begin_path();
        ctx.move_to(link.from.0, link.from.1);
        ctx.line_to(link.to.0, link.to.1);
        ctx.stroke();
    }
}

#[allow(deprecated)]
fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, field.width(), field.height());

    ctx.set_line_width(1.0);
    ctx.set_stroke_style(&JsValue::from_str("rgba(0, 0, 0, 0.05)"));
    for shape in field.shapes() {
        ctx.save();
        ctx.translate(shape.x, shape.y)?;
        ctx.rotate(shape.rotation)?;
        let half = shape.size / 2.0;
        match shape.kind {
            ShapeKind::Circle => {
                ctx.begin_path();
                ctx.arc(0.0, 0.0, half, 0.0, TAU)?;
                ctx.stroke();
            }
            ShapeKind::Square => ctx.stroke_rect(-half, -half, shape.size, shape.size),
        }
        ctx.restore();
    }

    ctx.set_line_width(0.5);
    stroke_links(ctx, &field.links(), "0, 0, 0");
    ctx.set_line_width(1.0);
    stroke_links(ctx, &field.pointer_links(), "10, 77, 211");

    for particle in field.particles() {
        let alpha = field.particle_alpha(particle).unwrap_or(0.2);
        ctx.set_fill_style(&JsValue::from_str(&format!("rgba(0, 0, 0, {:.3})", alpha)));
        ctx.begin_path();
        ctx.arc(particle.x, particle.y, particle.radius, 0.0, TAU)?;
        ctx.fill();
    }
    Ok(())
}

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

fn schedule(scene: Rc<RefCell<Scene>>, slot: FrameSlot) {
    let next = slot.clone();
    let frame = request_animation_frame(move |_| {
        scene.borrow_mut().frame();
        schedule(scene, next);
    });
    *slot.borrow_mut() = Some(frame);
}

/// Everything the running animation owns; dropping it stops the loop.
struct CanvasLoop {
    frame: FrameSlot,
    _resize: Option<EventListener>,
    _pointer: Option<Subscription>,
}

impl CanvasLoop {
    fn start(canvas: &NodeRef, feed: Option<&PointerFeed>) -> Result<Self, UiError> {
        let canvas = canvas
            .cast::<HtmlCanvasElement>()
            .ok_or(UiError::MissingElement("hero canvas"))?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or(UiError::MissingElement("2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;

        let scene = Rc::new(RefCell::new(Scene {
            canvas,
            ctx,
            field: ParticleField::default(),
            rng: SmallRng::from_entropy(),
        }));
        scene.borrow_mut().fit();

        let resize = dom::window().ok().map(|window| {
            let scene = scene.clone();
            EventListener::new(&window, "resize", move |_| scene.borrow_mut().fit())
        });
        let pointer = feed.map(|feed| {
            let scene = scene.clone();
            feed.subscribe(move |sample: &PointerSample| scene.borrow_mut().track(*sample))
        });

        let frame: FrameSlot = Rc::default();
        if dom::prefers_reduced_motion() {
            scene.borrow_mut().frame();
        } else {
            schedule(scene, frame.clone());
        }

        Ok(Self {
            frame,
            _resize: resize,
            _pointer: pointer,
        })
    }
}

impl Drop for CanvasLoop {
    fn drop(&mut self) {
        self.frame.borrow_mut().take();
    }
}

#[function_component(HeroBackground)]
pub fn hero_background() -> Html {
    let canvas = use_node_ref();
    let feed = use_context::<PointerFeed>();

    use_effect_with_deps(
        move |(canvas, feed)| {
            let running = CanvasLoop::start(canvas, feed.as_ref())
                .map_err(|err| warn!("hero animation disabled: {}", err))
                .ok();
            move || drop(running)
        },
        (canvas.clone(), feed),
    );

    html! {
        <div class="hero-background" aria-hidden="true">
            <canvas ref={canvas} style="display: block; width: 100%; height: 100%;"></canvas>
        </div>
    }
}
