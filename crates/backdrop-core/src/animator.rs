//! Frame-driven animators and their running/disposed lifecycle.
//!
//! The host scheduler calls [`Stage::frame`] once per display refresh and
//! stops rescheduling as soon as it returns `false`. Once disposed, a stage
//! ignores every further frame and resize so nothing is drawn into a
//! discarded surface.

use crate::grid::GridField;
use crate::paint::Painter;
use crate::particles::ParticleField;
use glam::Vec2;

/// Inputs sampled by the host right before a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub pointer: Option<Vec2>,
}

pub trait Animator {
    fn resize(&mut self, width: f32, height: f32);
    fn frame(&mut self, input: &FrameInput, painter: &mut dyn Painter);
}

impl Animator for GridField {
    fn resize(&mut self, width: f32, height: f32) {
        GridField::resize(self, width, height);
    }

    fn frame(&mut self, input: &FrameInput, painter: &mut dyn Painter) {
        let frame = self.update(input.pointer);
        self.draw(&frame, painter);
    }
}

impl Animator for ParticleField {
    fn resize(&mut self, width: f32, height: f32) {
        ParticleField::resize(self, width, height);
    }

    fn frame(&mut self, _input: &FrameInput, painter: &mut dyn Painter) {
        self.step();
        self.draw(painter);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Disposed,
}

pub struct Stage<A> {
    animator: A,
    state: RunState,
    frames: u64,
}

impl<A: Animator> Stage<A> {
    pub fn new(animator: A) -> Self {
        Self {
            animator,
            state: RunState::Running,
            frames: 0,
        }
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        if self.is_running() {
            self.animator.resize(width, height);
        }
    }

    /// Render one frame. Returns whether another frame should be scheduled.
    pub fn frame(&mut self, input: &FrameInput, painter: &mut dyn Painter) -> bool {
        if !self.is_running() {
            return false;
        }
        self.animator.frame(input, painter);
        self.frames += 1;
        true
    }

    pub fn dispose(&mut self) {
        if self.state == RunState::Running {
            log::debug!("[stage] disposed after {} frames", self.frames);
            self.state = RunState::Disposed;
        }
    }
}
