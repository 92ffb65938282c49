use super::audio_info::{format_clock_time, AudioInfo};

/// Tick and stop-margin timing of a `PlaybackClock`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockSettings {
    /// Simulated seconds added on every tick
    pub tick_seconds: f64,

    /// Time past the nominal duration before the clock stops on its own
    pub stop_margin_seconds: f64,
}

impl Default for ClockSettings {
    fn default() -> Self {
        ClockSettings {
            tick_seconds: 0.2,
            stop_margin_seconds: 0.4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    Stopped,
    Playing,
}

/// What the player panel shows after a clock transition.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockDisplay {
    pub state: ClockState,

    /// `elapsed / total`, both `m:ss`
    pub time_label: String,

    /// 0 to 100
    pub progress_percent: u8,

    /// True on the tick that ran past the end
    pub finished: bool,
}

/// Approximate playback position.
///
/// The clock never asks the output device where it is. Each tick adds a
/// fixed slice of nominal time at the entry's sample rate, and the clock
/// stops itself once it has run `stop_margin_seconds` past the duration.
/// The owner drives `tick` from its timer and must not tick re-entrantly.
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    settings: ClockSettings,
    sample_rate: u32,
    duration_seconds: u32,
    state: ClockState,
    elapsed_samples: f64,
}

impl PlaybackClock {
    pub fn new(sample_rate: u32, duration_seconds: u32) -> Self {
        Self::with_settings(sample_rate, duration_seconds, ClockSettings::default())
    }

    pub fn with_settings(sample_rate: u32, duration_seconds: u32, settings: ClockSettings) -> Self {
        PlaybackClock {
            settings,
            sample_rate,
            duration_seconds,
            state: ClockState::Stopped,
            elapsed_samples: 0.0,
        }
    }

    /// A clock for a decoded entry.
    pub fn for_info(info: &AudioInfo) -> Self {
        Self::new(info.sample_rate, info.duration_seconds())
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    pub fn elapsed_samples(&self) -> f64 {
        self.elapsed_samples
    }

    pub fn elapsed_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            0.0
        } else {
            self.elapsed_samples / self.sample_rate as f64
        }
    }

    /// Start from zero. A clock without a sample rate stays stopped.
    pub fn play(&mut self) -> ClockDisplay {
        if self.sample_rate > 0 {
            self.state = ClockState::Playing;
        }
        self.elapsed_samples = 0.0;
        self.display(false)
    }

    /// Stop and rewind to zero.
    pub fn stop(&mut self) -> ClockDisplay {
        self.state = ClockState::Stopped;
        self.elapsed_samples = 0.0;
        self.display(false)
    }

    /// Advance one tick. Does nothing while stopped.
    pub fn tick(&mut self) -> ClockDisplay {
        if self.state == ClockState::Stopped {
            return self.display(false);
        }

        let sample_rate = self.sample_rate as f64;
        self.elapsed_samples += self.settings.tick_seconds * sample_rate;
        let current = self.elapsed_samples / sample_rate;

        if current >= self.duration_seconds as f64 + self.settings.stop_margin_seconds {
            self.state = ClockState::Stopped;
            self.elapsed_samples = 0.0;
            self.display(true)
        } else {
            self.display(false)
        }
    }

    fn display(&self, finished: bool) -> ClockDisplay {
        let total = format_clock_time(self.duration_seconds);
        let current = self.elapsed_seconds();

        ClockDisplay {
            state: self.state,
            time_label: format!("{} / {}", format_clock_time(current as u32), total),
            progress_percent: self.progress_percent(),
            finished,
        }
    }

    fn progress_percent(&self) -> u8 {
        let span = self.sample_rate as f64 * self.duration_seconds as f64;
        if span <= 0.0 {
            return 0;
        }
        let percent = (self.elapsed_samples / span * 100.0).round_ties_even();
        percent.max(0.0).min(100.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let mut c = PlaybackClock::new(44100, 5);
        assert_eq!(c.state(), ClockState::Stopped);
        let d = c.tick();
        assert_eq!(d.state, ClockState::Stopped);
        assert_eq!(d.time_label, "0:00 / 0:05");
        assert_eq!(d.progress_percent, 0);
        assert_eq!(c.elapsed_samples(), 0.0);
    }

    #[test]
    fn test_five_second_run() {
        let mut c = PlaybackClock::new(44100, 5);
        c.play();

        let mut last = None;
        for _ in 0..25 {
            last = Some(c.tick());
        }
        let d = last.unwrap();
        assert_eq!(d.state, ClockState::Playing);
        assert_eq!(d.progress_percent, 100);
        assert!(!d.finished);

        let d = c.tick();
        assert_eq!(d.state, ClockState::Playing);
        assert_eq!(d.progress_percent, 100);

        let d = c.tick();
        assert_eq!(d.state, ClockState::Stopped);
        assert!(d.finished);
        assert_eq!(d.progress_percent, 0);
        assert_eq!(d.time_label, "0:00 / 0:05");
        assert_eq!(c.elapsed_samples(), 0.0);
    }

    #[test]
    fn test_progress_midway() {
        let mut c = PlaybackClock::new(22050, 10);
        c.play();
        for _ in 0..5 {
            c.tick();
        }
        let d = c.tick();
        assert_eq!(d.time_label, "0:01 / 0:10");
        assert_eq!(d.progress_percent, 12);
    }

    #[test]
    fn test_stop_resets() {
        let mut c = PlaybackClock::new(48000, 3);
        c.play();
        c.tick();
        c.tick();
        let d = c.stop();
        assert_eq!(d.state, ClockState::Stopped);
        assert_eq!(d.time_label, "0:00 / 0:03");
        assert_eq!(d.progress_percent, 0);

        let d = c.play();
        assert_eq!(d.state, ClockState::Playing);
        assert_eq!(d.progress_percent, 0);
    }

    #[test]
    fn test_no_sample_rate() {
        let mut c = PlaybackClock::new(0, 1);
        assert_eq!(c.play().state, ClockState::Stopped);
        assert_eq!(c.tick().progress_percent, 0);
    }

    #[test]
    fn test_minutes_label() {
        let mut c = PlaybackClock::with_settings(
            100,
            200,
            ClockSettings {
                tick_seconds: 61.0,
                stop_margin_seconds: 0.4,
            },
        );
        c.play();
        c.tick();
        assert_eq!(c.tick().time_label, "2:02 / 3:20");
    }
}
