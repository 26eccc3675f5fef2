//! Decorative particles drifting at constant speed and bouncing off the
//! viewport edges. Independent of the pointer.

use crate::constants::*;
use crate::paint::{Circle, Fill, Painter};
use glam::Vec2;
use rand::Rng;
use std::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

impl Particle {
    /// Integrate one frame, then turn velocity back inside on any axis that
    /// left `[0, width] x [0, height]`. Speed is never altered.
    pub fn step(&mut self, width: f32, height: f32) {
        self.position += self.velocity;
        self.velocity.x = reflect(self.position.x, self.velocity.x, width);
        self.velocity.y = reflect(self.position.y, self.velocity.y, height);
    }
}

#[inline]
fn reflect(pos: f32, vel: f32, extent: f32) -> f32 {
    if pos < 0.0 {
        vel.abs()
    } else if pos > extent {
        -vel.abs()
    } else {
        vel
    }
}

#[derive(Clone, Debug)]
pub struct ParticleParams {
    pub count: usize,
    pub radius: Range<f32>,
    pub speed: f32,
    pub opacity: Range<f32>,
    pub ink: [u8; 3],
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            radius: PARTICLE_RADIUS_MIN..PARTICLE_RADIUS_MAX,
            speed: PARTICLE_SPEED_MAX,
            opacity: PARTICLE_OPACITY_MIN..PARTICLE_OPACITY_MAX,
            ink: PARTICLE_INK,
        }
    }
}

pub struct ParticleField {
    particles: Vec<Particle>,
    ink: [u8; 3],
    width: f32,
    height: f32,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(
        width: f32,
        height: f32,
        params: &ParticleParams,
        rng: &mut R,
    ) -> Self {
        let particles = (0..params.count)
            .map(|_| Particle {
                position: Vec2::new(sample(rng, 0.0..width), sample(rng, 0.0..height)),
                velocity: Vec2::new(
                    sample(rng, -params.speed..params.speed),
                    sample(rng, -params.speed..params.speed),
                ),
                radius: sample(rng, params.radius.clone()),
                opacity: sample(rng, params.opacity.clone()),
            })
            .collect();
        Self {
            particles,
            ink: params.ink,
            width,
            height,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Only the bounds change; particles keep their positions.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.step(self.width, self.height);
        }
    }

    pub fn draw(&self, painter: &mut dyn Painter) {
        painter.clear(self.width, self.height);
        for p in &self.particles {
            let circle = Circle {
                center: p.position,
                radius: p.radius,
            };
            painter.fill_circles(&[circle], Fill::new(self.ink, p.opacity));
        }
    }
}

// gen_range panics on an empty range; a zero-sized viewport yields one.
fn sample<R: Rng + ?Sized>(rng: &mut R, range: Range<f32>) -> f32 {
    if range.start < range.end {
        rng.gen_range(range)
    } else {
        range.start
    }
}
