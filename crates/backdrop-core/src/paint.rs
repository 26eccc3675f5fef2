//! Drawing abstraction shared by the animators.
//!
//! Animators never talk to a canvas directly; they describe each frame as a
//! handful of batched calls on a [`Painter`]. The web front-end implements it
//! on top of `CanvasRenderingContext2d`, tests implement it with a recorder.

use glam::Vec2;

/// Solid colour with alpha, rendered as a CSS `rgba()` string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fill {
    pub rgb: [u8; 3],
    pub alpha: f32,
}

impl Fill {
    pub const fn new(rgb: [u8; 3], alpha: f32) -> Self {
        Self { rgb, alpha }
    }

    pub fn css(&self) -> String {
        let [r, g, b] = self.rgb;
        format!("rgba({}, {}, {}, {})", r, g, b, self.alpha)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
}

pub trait Painter {
    /// Erase the whole surface.
    fn clear(&mut self, width: f32, height: f32);

    /// Stroke every segment as part of a single path.
    fn stroke_segments(&mut self, segments: &[Segment], stroke: Fill, line_width: f32);

    /// Fill every circle as part of a single path.
    fn fill_circles(&mut self, circles: &[Circle], fill: Fill);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_renders_css_rgba() {
        let fill = Fill::new([0, 255, 136], 0.5);
        assert_eq!(fill.css(), "rgba(0, 255, 136, 0.5)");
    }
}
