use backdrop_core::{BackdropError, Circle, Fill, Painter, Segment};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Painter`] backed by a canvas 2D context.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(canvas: &web::HtmlCanvasElement) -> Result<Self, BackdropError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| BackdropError::SurfaceUnavailable(format!("{:?}", e)))?
            .ok_or_else(|| BackdropError::SurfaceUnavailable("no 2d context".into()))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| BackdropError::SurfaceUnavailable("not a 2d context".into()))?;
        Ok(Self { ctx })
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn stroke_segments(&mut self, segments: &[Segment], stroke: Fill, line_width: f32) {
        if segments.is_empty() {
            return;
        }
        self.ctx.set_stroke_style_str(&stroke.css());
        self.ctx.set_line_width(line_width as f64);
        self.ctx.begin_path();
        for s in segments {
            self.ctx.move_to(s.from.x as f64, s.from.y as f64);
            self.ctx.line_to(s.to.x as f64, s.to.y as f64);
        }
        self.ctx.stroke();
    }

    fn fill_circles(&mut self, circles: &[Circle], fill: Fill) {
        if circles.is_empty() {
            return;
        }
        self.ctx.set_fill_style_str(&fill.css());
        self.ctx.begin_path();
        for c in circles {
            let (x, y, r) = (c.center.x as f64, c.center.y as f64, c.radius as f64);
            // start each sub-path on the rim so arcs are not joined by lines
            self.ctx.move_to(x + r, y);
            _ = self.ctx.arc(x, y, r, 0.0, TAU);
        }
        self.ctx.fill();
    }
}
