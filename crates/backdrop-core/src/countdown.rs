use crate::constants::COUNTDOWN_START;
use std::fmt;

/// Remaining time shown in the hero section, ticked once per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Default for Countdown {
    fn default() -> Self {
        let [days, hours, minutes, seconds] = COUNTDOWN_START;
        Self::new(days, hours, minutes, seconds)
    }
}

impl Countdown {
    pub const fn new(days: u32, hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    pub fn from_total_seconds(total: u64) -> Self {
        Self {
            days: (total / 86_400) as u32,
            hours: ((total / 3_600) % 24) as u32,
            minutes: ((total / 60) % 60) as u32,
            seconds: (total % 60) as u32,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.days as u64 * 86_400
            + self.hours as u64 * 3_600
            + self.minutes as u64 * 60
            + self.seconds as u64
    }

    pub fn is_elapsed(&self) -> bool {
        self.total_seconds() == 0
    }

    /// Take one second off, borrowing from the next larger unit.
    /// Returns false once the countdown already sits at zero.
    pub fn tick(&mut self) -> bool {
        if self.seconds > 0 {
            self.seconds -= 1;
        } else if self.minutes > 0 {
            self.minutes -= 1;
            self.seconds = 59;
        } else if self.hours > 0 {
            self.hours -= 1;
            self.minutes = 59;
            self.seconds = 59;
        } else if self.days > 0 {
            self.days -= 1;
            self.hours = 23;
            self.minutes = 59;
            self.seconds = 59;
        } else {
            return false;
        }
        true
    }

    /// Label/value pairs in display order.
    pub fn units(&self) -> [(&'static str, u32); 4] {
        [
            ("days", self.days),
            ("hours", self.hours),
            ("minutes", self.minutes),
            ("seconds", self.seconds),
        ]
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}d {:02}h {:02}m {:02}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}
