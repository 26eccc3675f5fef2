use crate::constants::{GALLERY_INTERVAL_MS, GALLERY_TRANSITION_MS};
use crate::error::BackdropError;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Showing,
    Transitioning,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryEvent {
    TransitionStarted { from: usize, to: usize },
    TransitionFinished { current: usize },
}

/// Auto-rotation state for the featured gallery image: show for `interval`,
/// cross-fade to the next image for `transition`, repeat.
#[derive(Clone, Debug)]
pub struct GalleryRotator {
    len: usize,
    current: usize,
    next: usize,
    phase: Phase,
    elapsed: Duration,
    interval: Duration,
    transition: Duration,
}

impl GalleryRotator {
    pub fn new(len: usize) -> Result<Self, BackdropError> {
        Self::with_timing(
            len,
            Duration::from_millis(GALLERY_INTERVAL_MS),
            Duration::from_millis(GALLERY_TRANSITION_MS),
        )
    }

    pub fn with_timing(
        len: usize,
        interval: Duration,
        transition: Duration,
    ) -> Result<Self, BackdropError> {
        if len == 0 {
            return Err(BackdropError::EmptyGallery);
        }
        if transition >= interval {
            return Err(BackdropError::InvalidTiming {
                interval_ms: interval.as_millis() as u64,
                transition_ms: transition.as_millis() as u64,
            });
        }
        Ok(Self {
            len,
            current: 0,
            next: 1 % len,
            phase: Phase::Showing,
            elapsed: Duration::ZERO,
            interval,
            transition,
        })
    }

    pub fn image_count(&self) -> usize {
        self.len
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn next(&self) -> usize {
        self.next
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase == Phase::Transitioning
    }

    /// "3 / 5" style counter, one-based.
    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.current + 1, self.len)
    }

    /// Advance the clock by `dt`, pushing every phase change that became due.
    pub fn advance(&mut self, dt: Duration, out_events: &mut Vec<GalleryEvent>) {
        self.elapsed += dt;
        loop {
            match self.phase {
                Phase::Showing if self.elapsed >= self.interval => {
                    self.elapsed -= self.interval;
                    self.next = (self.current + 1) % self.len;
                    self.phase = Phase::Transitioning;
                    out_events.push(GalleryEvent::TransitionStarted {
                        from: self.current,
                        to: self.next,
                    });
                }
                Phase::Transitioning if self.elapsed >= self.transition => {
                    self.elapsed -= self.transition;
                    self.current = self.next;
                    self.phase = Phase::Showing;
                    out_events.push(GalleryEvent::TransitionFinished {
                        current: self.current,
                    });
                }
                _ => break,
            }
        }
    }
}
