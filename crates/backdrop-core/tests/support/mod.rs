// Painter double that records every call so tests can assert on what a frame drew.

#![allow(dead_code)]

use backdrop_core::{Circle, Fill, Painter, Segment};

#[derive(Clone, Debug, PartialEq)]
pub enum PaintCall {
    Clear { width: f32, height: f32 },
    Stroke { segments: Vec<Segment>, stroke: Fill },
    Fill { circles: Vec<Circle>, fill: Fill },
}

#[derive(Default)]
pub struct RecordingPainter {
    pub calls: Vec<PaintCall>,
}

impl RecordingPainter {
    pub fn fills(&self) -> impl Iterator<Item = (&[Circle], Fill)> + '_ {
        self.calls.iter().filter_map(|c| match c {
            PaintCall::Fill { circles, fill } => Some((circles.as_slice(), *fill)),
            _ => None,
        })
    }

    pub fn reset(&mut self) {
        self.calls.clear();
    }
}

impl Painter for RecordingPainter {
    fn clear(&mut self, width: f32, height: f32) {
        self.calls.push(PaintCall::Clear { width, height });
    }

    fn stroke_segments(&mut self, segments: &[Segment], stroke: Fill, _line_width: f32) {
        self.calls.push(PaintCall::Stroke {
            segments: segments.to_vec(),
            stroke,
        });
    }

    fn fill_circles(&mut self, circles: &[Circle], fill: Fill) {
        self.calls.push(PaintCall::Fill {
            circles: circles.to_vec(),
            fill,
        });
    }
}
