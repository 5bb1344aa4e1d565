//! Simulation behind the hero canvas: drifting particles linked by proximity,
//! pulled toward the pointer, over a few slowly spinning background shapes.

use std::f64::consts::TAU;

use rand::Rng;

use crate::motion::pointer::PointerSample;

pub const PARTICLE_COUNT: usize = 60;
pub const SHAPE_COUNT: usize = 8;
pub const LINK_DISTANCE: f64 = 140.0;
pub const POINTER_RADIUS: f64 = 200.0;
pub const ATTRACTION: f64 = 0.02;
/// How far past the edge a shape drifts before wrapping around.
pub const SHAPE_MARGIN: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shape {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub kind: ShapeKind,
    pub rotation: f64,
    pub spin: f64,
}

/// A line to draw between two points, with its stroke alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub alpha: f64,
}

#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    shapes: Vec<Shape>,
    pointer: Option<PointerSample>,
}

fn centred<R: Rng>(rng: &mut R, span: f64) -> f64 {
    (rng.gen::<f64>() - 0.5) * span
}

impl ParticleField {
    pub fn new<R: Rng>(width: f64, height: f64, rng: &mut R) -> Self {
        let mut field = Self::default();
        field.reseed(width, height, rng);
        field
    }

    /// Scatters a fresh population over a `width` x `height` canvas.
    pub fn reseed<R: Rng>(&mut self, width: f64, height: f64, rng: &mut R) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        let (w, h) = (self.width, self.height);

        self.particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                x: rng.gen::<f64>() * w,
                y: rng.gen::<f64>() * h,
                vx: centred(rng, 0.4),
                vy: centred(rng, 0.4),
                radius: rng.gen::<f64>() * 2.0 + 1.5,
            })
            .collect();

        self.shapes = (0..SHAPE_COUNT)
            .map(|_| Shape {
                x: rng.gen::<f64>() * w,
                y: rng.gen::<f64>() * h,
                vx: centred(rng, 0.15),
                vy: centred(rng, 0.15),
                size: rng.gen::<f64>() * 60.0 + 20.0,
                kind: if rng.gen_bool(0.5) {
                    ShapeKind::Circle
                } else {
                    ShapeKind::Square
                },
                rotation: rng.gen::<f64>() * TAU,
                spin: centred(rng, 0.005),
            })
            .collect();
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn pointer(&self) -> Option<PointerSample> {
        self.pointer
    }

    /// Pointer in canvas coordinates, or `None` once it has left.
    pub fn set_pointer(&mut self, pointer: Option<PointerSample>) {
        self.pointer = pointer;
    }

    /// Advances one animation frame.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);

        for shape in &mut self.shapes {
            shape.x += shape.vx;
            shape.y += shape.vy;
            shape.rotation += shape.spin;
            if shape.x < -SHAPE_MARGIN {
                shape.x = w + SHAPE_MARGIN;
            } else if shape.x > w + SHAPE_MARGIN {
                shape.x = -SHAPE_MARGIN;
            }
            if shape.y < -SHAPE_MARGIN {
                shape.y = h + SHAPE_MARGIN;
            } else if shape.y > h + SHAPE_MARGIN {
                shape.y = -SHAPE_MARGIN;
            }
        }

        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            if p.x < 0.0 || p.x > w {
                p.vx = -p.vx;
            }
            if p.y < 0.0 || p.y > h {
                p.vy = -p.vy;
            }

            if let Some(pointer) = self.pointer {
                let (dx, dy) = (pointer.x - p.x, pointer.y - p.y);
                let dist = dx.hypot(dy);
                if dist > 0.0 && dist < POINTER_RADIUS {
                    let force = (POINTER_RADIUS - dist) / POINTER_RADIUS;
                    p.vx += dx / dist * force * ATTRACTION;
                    p.vy += dy / dist * force * ATTRACTION;
                }
            }
        }
    }

    /// Particle pairs closer than [`LINK_DISTANCE`].
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let dist = (a.x - b.x).hypot(a.y - b.y);
                if dist < LINK_DISTANCE {
                    links.push(Link {
                        from: (a.x, a.y),
                        to: (b.x, b.y),
                        alpha: 0.15 - dist / LINK_DISTANCE * 0.15,
                    });
                }
            }
        }
        links
    }

    /// Lines from the pointer to every particle inside its radius.
    pub fn pointer_links(&self) -> Vec<Link> {
        let Some(pointer) = self.pointer else {
            return Vec::new();
        };
        self.particles
            .iter()
            .filter_map(|p| {
                let dist = pointer.distance_to(p.x, p.y);
                (dist < POINTER_RADIUS).then(|| Link {
                    from: (p.x, p.y),
                    to: (pointer.x, pointer.y),
                    alpha: 0.3 - dist / POINTER_RADIUS * 0.3,
                })
            })
            .collect()
    }

    /// Fill alpha for a particle: darker the closer it is to the pointer.
    pub fn particle_alpha(&self, particle: &Particle) -> Option<f64> {
        let pointer = self.pointer?;
        let dist = pointer.distance_to(particle.x, particle.y);
        (dist < POINTER_RADIUS).then(|| 0.4 - dist / POINTER_RADIUS * 0.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field() -> ParticleField {
        let mut rng = StdRng::seed_from_u64(7);
        ParticleField::new(800.0, 600.0, &mut rng)
    }

    fn lone_particle(x: f64, y: f64, vx: f64, vy: f64) -> ParticleField {
        ParticleField {
            width: 800.0,
            height: 600.0,
            particles: vec![Particle { x, y, vx, vy, radius: 2.0 }],
            shapes: Vec::new(),
            pointer: None,
        }
    }

    #[test]
    fn seeds_population_within_bounds() {
        let field = field();
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        assert_eq!(field.shapes().len(), SHAPE_COUNT);
        for p in field.particles() {
            assert!((0.0..=800.0).contains(&p.x));
            assert!((0.0..=600.0).contains(&p.y));
            assert!(p.vx.abs() <= 0.2 && p.vy.abs() <= 0.2);
            assert!((1.5..3.5).contains(&p.radius));
        }
        for s in field.shapes() {
            assert!((20.0..80.0).contains(&s.size));
            assert!(s.spin.abs() <= 0.0025);
        }
    }

    #[test]
    fn particles_bounce_off_edges() {
        let mut field = lone_particle(799.9, 300.0, 0.2, 0.0);
        field.step();
        assert_eq!(field.particles()[0].vx, -0.2);
        field.step();
        assert!(field.particles()[0].x < 800.0);
    }

    #[test]
    fn pointer_pulls_particles_in() {
        let mut field = lone_particle(100.0, 100.0, 0.0, 0.0);
        field.set_pointer(Some(PointerSample::new(200.0, 100.0)));
        field.step();
        let p = field.particles()[0];
        // force (200 - 100) / 200 * 0.02 along +x
        assert!((p.vx - 0.01).abs() < 1e-12);
        assert_eq!(p.vy, 0.0);
    }

    #[test]
    fn pointer_outside_radius_has_no_effect() {
        let mut field = lone_particle(100.0, 100.0, 0.0, 0.0);
        field.set_pointer(Some(PointerSample::new(400.0, 100.0)));
        field.step();
        assert_eq!(field.particles()[0].vx, 0.0);
        assert!(field.pointer_links().is_empty());
    }

    #[test]
    fn pointer_on_top_of_a_particle_does_not_produce_nan() {
        let mut field = lone_particle(100.0, 100.0, 0.0, 0.0);
        field.set_pointer(Some(PointerSample::new(100.0, 100.0)));
        field.step();
        assert!(field.particles()[0].vx.is_finite());
    }

    #[test]
    fn shapes_wrap_past_the_margin() {
        let mut field = lone_particle(0.0, 0.0, 0.0, 0.0);
        field.shapes.push(Shape {
            x: -100.05,
            y: 700.05,
            vx: -0.1,
            vy: 0.1,
            size: 40.0,
            kind: ShapeKind::Square,
            rotation: 0.0,
            spin: 0.001,
        });
        field.step();
        let shape = field.shapes()[0];
        assert_eq!(shape.x, 800.0 + SHAPE_MARGIN);
        assert_eq!(shape.y, -SHAPE_MARGIN);
        assert_eq!(shape.rotation, 0.001);
    }

    #[test]
    fn link_alpha_fades_with_distance() {
        let mut field = lone_particle(0.0, 0.0, 0.0, 0.0);
        field.particles.push(Particle { x: 70.0, y: 0.0, vx: 0.0, vy: 0.0, radius: 2.0 });
        field.particles.push(Particle { x: 500.0, y: 0.0, vx: 0.0, vy: 0.0, radius: 2.0 });
        let links = field.links();
        assert_eq!(links.len(), 1);
        assert!((links[0].alpha - 0.075).abs() < 1e-12);

        field.set_pointer(Some(PointerSample::new(0.0, 100.0)));
        let pointer_links = field.pointer_links();
        assert_eq!(pointer_links.len(), 2);
        assert!((pointer_links[0].alpha - 0.15).abs() < 1e-12);
        let alpha = field.particle_alpha(&field.particles()[0]).unwrap();
        assert!((alpha - 0.3).abs() < 1e-12);
    }

    #[test]
    fn reseed_follows_new_size() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = field();
        field.reseed(300.0, 200.0, &mut rng);
        assert_eq!((field.width(), field.height()), (300.0, 200.0));
        assert!(field.particles().iter().all(|p| p.x <= 300.0 && p.y <= 200.0));
    }
}
