extern crate idwavfile;

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{pcm_format, Buffer, EntryBuilder};

use idwavfile::{AudioViewer, ClockState, Error, SilentSink, Sink, WaveReader};

#[derive(Default, Clone)]
struct Recorder(Rc<RefCell<Vec<String>>>);

impl Sink for Recorder {
    fn play(&mut self, wave: &[u8]) -> Result<(), Error> {
        WaveReader::new(std::io::Cursor::new(wave.to_vec()))?.validate_interchange()?;
        self.0.borrow_mut().push("play".to_string());
        Ok(())
    }

    fn stop(&mut self) {
        self.0.borrow_mut().push("stop".to_string());
    }
}

fn five_second_entry() -> Vec<u8> {
    EntryBuilder::new(pcm_format(44100, 1, 16))
        .buffer(Buffer::counting(110_250, 64, 0))
        .buffer(Buffer::counting(110_250, 64, 64))
        .build()
}

#[test]
fn test_play_to_the_end() {
    let sink = Recorder::default();
    let mut viewer = AudioViewer::open("sound/ambient/wind.idwav", &five_second_entry(), sink.clone());

    assert!(viewer.is_playable());
    assert_eq!(
        viewer.info_label(),
        "Format: PCM | Channels: 1 | Sample Rate: 44100 Hz"
    );
    assert_eq!(viewer.idle_display().time_label, "0:00 / 0:05");

    let d = viewer.toggle().unwrap();
    assert_eq!(d.state, ClockState::Playing);
    assert!(viewer.is_playing());

    let mut last = None;
    for _ in 0..25 {
        last = Some(viewer.tick());
    }
    let d = last.unwrap();
    assert_eq!(d.state, ClockState::Playing);
    assert_eq!(d.progress_percent, 100);
    assert_eq!(d.time_label, "0:05 / 0:05");

    viewer.tick();
    let d = viewer.tick();
    assert!(d.finished);
    assert_eq!(d.state, ClockState::Stopped);
    assert_eq!(d.time_label, "0:00 / 0:05");
    assert!(!viewer.is_playing());

    assert_eq!(*sink.0.borrow(), vec!["play".to_string(), "stop".to_string()]);
}

#[test]
fn test_toggle_stops_and_rewinds() {
    let sink = Recorder::default();
    let mut viewer = AudioViewer::open("wind.IDWAV", &five_second_entry(), sink.clone());

    viewer.toggle().unwrap();
    for _ in 0..10 {
        viewer.tick();
    }
    let d = viewer.toggle().unwrap();
    assert_eq!(d.state, ClockState::Stopped);
    assert_eq!(d.progress_percent, 0);

    // ticks while stopped change nothing
    assert_eq!(viewer.tick().time_label, "0:00 / 0:05");

    drop(viewer);
    assert_eq!(
        *sink.0.borrow(),
        vec!["play".to_string(), "stop".to_string(), "stop".to_string()]
    );
}

#[test]
fn test_exported_wave_plays_as_is() {
    let transcoded = idwavfile::transcode(&five_second_entry()).unwrap();
    let viewer = AudioViewer::open("wind.wav", &transcoded.wave, SilentSink);

    assert_eq!(viewer.wave(), &transcoded.wave[..]);
    let info = viewer.info().unwrap();
    assert_eq!(info.sample_rate, 44100);
    assert_eq!(info.channels, 1);
    // the data chunk holds fewer frames than the entry claims
    assert_eq!(info.total_samples, 64);
    assert_eq!(viewer.idle_display().time_label, "0:00 / 0:01");
}
