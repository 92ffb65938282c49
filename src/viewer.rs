use std::io::Cursor;

use log::debug;

use super::audio_info::{AudioInfo, UNDESCRIBED};
use super::clock::{ClockDisplay, ClockState, PlaybackClock};
use super::entry::EntryKind;
use super::errors::Error;
use super::transcoder::load_entry;
use super::wavereader::WaveReader;

/// Where a viewer sends its RIFF/WAVE stream to be heard.
pub trait Sink {
    fn play(&mut self, wave: &[u8]) -> Result<(), Error>;
    fn stop(&mut self);
}

/// A `Sink` that plays nothing.
#[derive(Debug, Default)]
pub struct SilentSink;

impl Sink for SilentSink {
    fn play(&mut self, _wave: &[u8]) -> Result<(), Error> {
        Ok(())
    }

    fn stop(&mut self) {}
}

/// Everything one open audio entry owns: its decoded stream, its
/// parameters, its clock and its sink.
///
/// Dropping the viewer stops the sink.
pub struct AudioViewer<S: Sink> {
    wave: Vec<u8>,
    info: Option<AudioInfo>,
    clock: PlaybackClock,
    sink: S,
}

impl<S: Sink> AudioViewer<S> {
    /// Open the entry `name` with content `entry`.
    ///
    /// `idwav` entries are transcoded; a failed transcode leaves the
    /// viewer with nothing to play. Other entries are played as they are,
    /// with parameters read from their `fmt ` chunk when they have one.
    pub fn open(name: &str, entry: &[u8], sink: S) -> Self {
        let (wave, info) = match EntryKind::of(name) {
            EntryKind::IdWave => {
                let (wave, info) = load_entry(entry);
                (wave, Some(info))
            }
            EntryKind::Wave | EntryKind::Other => {
                let info = WaveReader::new(Cursor::new(entry))
                    .and_then(|mut reader| reader.audio_info())
                    .ok();
                (entry.to_vec(), info)
            }
        };

        let clock = match &info {
            Some(info) => PlaybackClock::for_info(info),
            None => PlaybackClock::new(0, 0),
        };

        debug!(
            "opened {}: {} bytes, {} s",
            name,
            wave.len(),
            clock.duration_seconds()
        );

        AudioViewer {
            wave,
            info,
            clock,
            sink,
        }
    }

    pub fn wave(&self) -> &[u8] {
        &self.wave
    }

    pub fn info(&self) -> Option<&AudioInfo> {
        self.info.as_ref()
    }

    pub fn is_playable(&self) -> bool {
        !self.wave.is_empty()
    }

    pub fn is_playing(&self) -> bool {
        self.clock.state() == ClockState::Playing
    }

    /// The format summary line.
    pub fn info_label(&self) -> String {
        match &self.info {
            Some(info) => info.describe(),
            None => UNDESCRIBED.to_string(),
        }
    }

    /// The panel as it looks before anything plays.
    pub fn idle_display(&self) -> ClockDisplay {
        self.clock.clone().stop()
    }

    /// Start playback from the top, or stop it.
    pub fn toggle(&mut self) -> Result<ClockDisplay, Error> {
        if !self.is_playable() {
            return Err(Error::EmptyStream);
        }

        if self.is_playing() {
            self.sink.stop();
            Ok(self.clock.stop())
        } else {
            self.sink.play(&self.wave)?;
            Ok(self.clock.play())
        }
    }

    /// Advance the clock one timer tick, stopping the sink when the clock
    /// runs out.
    pub fn tick(&mut self) -> ClockDisplay {
        let display = self.clock.tick();
        if display.finished {
            self.sink.stop();
        }
        display
    }
}

impl<S: Sink> Drop for AudioViewer<S> {
    fn drop(&mut self) {
        self.sink.stop();
    }
}
