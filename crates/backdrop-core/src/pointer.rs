use crate::constants::POINTER_THROTTLE_MS;
use glam::Vec2;

/// Rate limiter over millisecond timestamps. No queueing: an event inside the
/// window is simply rejected.
#[derive(Clone, Debug)]
pub struct Throttle {
    min_interval_ms: f64,
    last_accepted_ms: Option<f64>,
}

impl Throttle {
    pub fn new(min_interval_ms: f64) -> Self {
        Self {
            min_interval_ms,
            last_accepted_ms: None,
        }
    }

    pub fn accept(&mut self, now_ms: f64) -> bool {
        let open = match self.last_accepted_ms {
            None => true,
            // A clock that stepped backwards restarts the window.
            Some(last) if now_ms < last => true,
            Some(last) => now_ms - last >= self.min_interval_ms,
        };
        if open {
            self.last_accepted_ms = Some(now_ms);
        }
        open
    }
}

/// Latest throttled pointer position in viewport pixels.
#[derive(Clone, Debug)]
pub struct PointerTracker {
    throttle: Throttle,
    latest: Option<Vec2>,
    accepted: u64,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(POINTER_THROTTLE_MS)
    }
}

impl PointerTracker {
    pub fn new(min_interval_ms: f64) -> Self {
        Self {
            throttle: Throttle::new(min_interval_ms),
            latest: None,
            accepted: 0,
        }
    }

    /// Returns true when the position was recorded.
    pub fn on_move(&mut self, position: Vec2, now_ms: f64) -> bool {
        if !self.throttle.accept(now_ms) {
            return false;
        }
        self.latest = Some(position);
        self.accepted += 1;
        true
    }

    pub fn latest(&self) -> Option<Vec2> {
        self.latest
    }

    pub fn accepted(&self) -> u64 {
        self.accepted
    }
}
