use std::fmt;
use std::time::Duration;

/// Speed setting for timed advancement, as exposed by a 1..=8 slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Speed {
    level: u8,
}

impl Speed {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;
    pub const DEFAULT: u8 = 4;

    const STEP_MS: u64 = 100;

    /// Levels outside `MIN..=MAX` are clamped.
    pub fn new(level: u8) -> Self {
        Speed {
            level: level.clamp(Self::MIN, Self::MAX),
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Time between two timed steps. Never shorter than 100ms.
    pub fn delay(&self) -> Duration {
        let millis = Self::STEP_MS * u64::from(Self::MAX - self.level);
        Duration::from_millis(millis.max(Self::STEP_MS))
    }

    /// Playback rate relative to the default level.
    pub fn multiplier(&self) -> f32 {
        250.0 * f32::from(self.level) / 1000.0
    }
}

impl Default for Speed {
    fn default() -> Self {
        Speed::new(Self::DEFAULT)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.multiplier())
    }
}
