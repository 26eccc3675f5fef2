//! Pointer-reactive dot lattice.
//!
//! The lattice is a value rebuilt from `(width, height, spacing)` whenever the
//! viewport changes. Each frame [`GridField::update`] classifies dots against
//! the pointer and moves them; [`GridField::draw`] turns the result into
//! batched painter calls.

use crate::constants::*;
use crate::error::BackdropError;
use crate::paint::{Circle, Fill, Painter, Segment};
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    pub current: Vec2,
    pub base: Vec2,
}

impl Dot {
    fn at(base: Vec2) -> Self {
        Self {
            current: base,
            base,
        }
    }
}

#[derive(Clone, Debug)]
pub struct GridParams {
    pub spacing: f32,
    pub radius: f32,
    pub damping: f32,
    pub ease_back: f32,
    pub snap_epsilon: f32,
    pub move_threshold: f32,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            spacing: GRID_SPACING,
            radius: INTERACTION_RADIUS,
            damping: DISPLACEMENT_DAMPING,
            ease_back: EASE_BACK_RATE,
            snap_epsilon: SNAP_EPSILON,
            move_threshold: POINTER_MOVE_THRESHOLD,
        }
    }
}

impl GridParams {
    pub fn validate(&self) -> Result<(), BackdropError> {
        if !(self.spacing.is_finite() && self.spacing > 0.0) {
            return Err(BackdropError::InvalidSpacing(self.spacing));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(BackdropError::InvalidRadius(self.radius));
        }
        // rates outside these ranges overshoot the base or never settle
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(BackdropError::InvalidDamping(self.damping));
        }
        if !(self.ease_back > 0.0 && self.ease_back <= 1.0) {
            return Err(BackdropError::InvalidEaseBack(self.ease_back));
        }
        if !(self.snap_epsilon.is_finite() && self.snap_epsilon > 0.0) {
            return Err(BackdropError::InvalidSnapEpsilon(self.snap_epsilon));
        }
        if !(self.move_threshold.is_finite() && self.move_threshold >= 0.0) {
            return Err(BackdropError::InvalidMoveThreshold(self.move_threshold));
        }
        Ok(())
    }
}

/// A dot inside the interaction radius this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffectedDot {
    pub position: Vec2,
    pub force: f32,
}

/// Result of one [`GridField::update`], consumed by [`GridField::draw`].
#[derive(Clone, Debug, Default)]
pub struct GridFrame {
    pub pointer_moved: bool,
    pub normal: Vec<Vec2>,
    pub affected: SmallVec<[AffectedDot; 32]>,
}

pub struct GridField {
    params: GridParams,
    width: f32,
    height: f32,
    dots: Vec<Dot>,
    last_pointer: Option<Vec2>,
}

impl GridField {
    pub fn new(width: f32, height: f32, params: GridParams) -> Result<Self, BackdropError> {
        params.validate()?;
        let mut field = Self {
            params,
            width: 0.0,
            height: 0.0,
            dots: Vec::new(),
            last_pointer: None,
        };
        field.resize(width, height);
        Ok(field)
    }

    pub fn params(&self) -> &GridParams {
        &self.params
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// Discard every dot and rebuild the lattice for the new size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = sanitize_extent(width);
        self.height = sanitize_extent(height);
        self.dots = lattice(self.width, self.height, self.params.spacing);
        log::debug!(
            "[grid] rebuilt lattice {}x{} -> {} dots",
            self.width,
            self.height,
            self.dots.len()
        );
    }

    pub fn update(&mut self, pointer: Option<Vec2>) -> GridFrame {
        let pointer_moved = match (pointer, self.last_pointer) {
            (Some(now), Some(prev)) => {
                let delta = (now - prev).abs();
                delta.x > self.params.move_threshold || delta.y > self.params.move_threshold
            }
            (Some(_), None) => true,
            (None, _) => false,
        };

        let mut frame = GridFrame {
            pointer_moved,
            normal: Vec::with_capacity(self.dots.len()),
            affected: SmallVec::new(),
        };

        let radius = self.params.radius;
        for dot in &mut self.dots {
            let hit = pointer.and_then(|p| force_factor(dot.base, p, radius).map(|f| (p, f)));
            match hit {
                Some((p, force)) => {
                    if pointer_moved {
                        dot.current = dot.base + (p - dot.base) * force * self.params.damping;
                    }
                    frame.affected.push(AffectedDot {
                        position: dot.current,
                        force,
                    });
                }
                None => {
                    ease_toward_base(dot, self.params.ease_back, self.params.snap_epsilon);
                    frame.normal.push(dot.current);
                }
            }
        }

        self.last_pointer = pointer;
        frame
    }

    pub fn draw(&self, frame: &GridFrame, painter: &mut dyn Painter) {
        painter.clear(self.width, self.height);
        painter.stroke_segments(
            &self.line_segments(),
            Fill::new(GRID_INK, GRID_LINE_OPACITY),
            GRID_LINE_WIDTH,
        );

        let resting: Vec<Circle> = frame
            .normal
            .iter()
            .map(|&center| Circle {
                center,
                radius: DOT_RADIUS,
            })
            .collect();
        painter.fill_circles(&resting, Fill::new(GRID_INK, DOT_OPACITY));

        for dot in &frame.affected {
            let circle = Circle {
                center: dot.position,
                radius: DOT_RADIUS + dot.force * AFFECTED_RADIUS_SPAN,
            };
            let alpha = AFFECTED_OPACITY_BASE + dot.force * AFFECTED_OPACITY_SPAN;
            painter.fill_circles(&[circle], Fill::new(GRID_INK, alpha));
        }
    }

    fn line_segments(&self) -> Vec<Segment> {
        let spacing = self.params.spacing;
        let verticals = lattice_axis(self.width, spacing).map(|x| Segment {
            from: Vec2::new(x, 0.0),
            to: Vec2::new(x, self.height),
        });
        let horizontals = lattice_axis(self.height, spacing).map(|y| Segment {
            from: Vec2::new(0.0, y),
            to: Vec2::new(self.width, y),
        });
        verticals.chain(horizontals).collect()
    }
}

/// Linear falloff `(radius - distance) / radius` for a base point strictly
/// inside the interaction radius, `None` otherwise.
#[inline]
pub fn force_factor(base: Vec2, pointer: Vec2, radius: f32) -> Option<f32> {
    let distance_sq = base.distance_squared(pointer);
    if distance_sq < radius * radius {
        Some((radius - distance_sq.sqrt()) / radius)
    } else {
        None
    }
}

/// Dots at every multiple of `spacing` below `width` and `height`,
/// column by column.
pub fn lattice(width: f32, height: f32, spacing: f32) -> Vec<Dot> {
    let rows: Vec<f32> = lattice_axis(height, spacing).collect();
    lattice_axis(width, spacing)
        .flat_map(|x| rows.iter().map(move |&y| Dot::at(Vec2::new(x, y))))
        .collect()
}

fn lattice_axis(extent: f32, spacing: f32) -> impl Iterator<Item = f32> {
    (0u32..)
        .map(move |i| i as f32 * spacing)
        .take_while(move |&v| v < extent)
}

#[inline]
fn ease_toward_base(dot: &mut Dot, rate: f32, epsilon: f32) {
    let offset = dot.base - dot.current;
    if offset.x.abs() > epsilon || offset.y.abs() > epsilon {
        dot.current += offset * rate;
    } else {
        dot.current = dot.base;
    }
}

#[inline]
fn sanitize_extent(v: f32) -> f32 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}
