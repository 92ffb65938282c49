use super::common_format::AudioFormat;

/// Playback parameters decoded from an entry.
///
/// For every format except XMA2 the duration comes from `total_samples`;
/// XMA2 entries carry their own `xma2_play_length`. The `Default` value is
/// the zeroed record handed back when an entry cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AudioInfo {
    /// Sample rate, e.g. 44100
    pub sample_rate: u32,

    /// Channel count
    pub channels: u16,

    /// Bits per sample as declared by the format record
    pub bits_per_sample: u16,

    /// Size of the audio payload in bytes.
    ///
    /// Derived as `total_samples * channels * (bits_per_sample / 8)` for
    /// every format but XMA2, which keeps the size the entry declares.
    pub data_size: i64,

    pub format: AudioFormat,

    pub is_xma2: bool,

    /// Samples to play, meaningful only when `is_xma2`
    pub xma2_play_length: u32,

    /// Sum of the per-buffer sample counts
    pub total_samples: u64,
}

impl AudioInfo {
    /// Whole seconds of audio, never less than one.
    ///
    /// ```
    /// use idwavfile::AudioInfo;
    ///
    /// let info = AudioInfo { sample_rate: 22050, total_samples: 110_250, ..AudioInfo::default() };
    /// assert_eq!(info.duration_seconds(), 5);
    /// assert_eq!(AudioInfo::default().duration_seconds(), 1);
    /// ```
    pub fn duration_seconds(&self) -> u32 {
        let samples = if self.is_xma2 {
            self.xma2_play_length as u64
        } else {
            self.total_samples
        };

        let seconds = if self.sample_rate == 0 || samples == 0 {
            0
        } else {
            (samples as f64 / self.sample_rate as f64).round_ties_even() as u32
        };

        seconds.max(1)
    }

    /// Summary line for the player panel.
    pub fn describe(&self) -> String {
        format!(
            "Format: {} | Channels: {} | Sample Rate: {} Hz",
            self.format, self.channels, self.sample_rate
        )
    }
}

/// Label for an entry with no decoded parameters.
pub const UNDESCRIBED: &str = "Format: Unknown | Channels: ? | Sample Rate: ? Hz";

/// Format whole seconds as `m:ss`.
pub fn format_clock_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
