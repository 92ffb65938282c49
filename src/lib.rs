/*!
# idwavfile

Transcoder from idTech resource-archive `idwav` sound entries to RIFF/WAVE,
with a playback progress clock for the decoded audio.

An `idwav` entry wraps a WAVEFORMATEX record, an optional codec extra record
and a list of sample buffers in a big-endian engine container. This crate
rewrites it as a plain `RIFF`/`WAVE` stream with `fmt `, `fact` and `data`
chunks that any wave player accepts. The sample buffers are copied as they
are; nothing is decoded or resampled.

Four codecs are understood:

- tag 0x0001, Integer Linear PCM
- tag 0x0002, Microsoft ADPCM
- tag 0x0166, XMA2
- tag 0xFFFE, WAVEFORMATEXTENSIBLE

Any other tag is carried through with no extra record and reported as
`AudioFormat::Unknown`.

```
use idwavfile::{load_entry, PlaybackClock};

let (wave, info) = load_entry(b"not an idwav entry");
assert!(wave.is_empty());

let mut clock = PlaybackClock::for_info(&info);
assert_eq!(clock.play().time_label, "0:00 / 0:01");
```

## Resources

### Implementation of Wave format `fmt` chunk
- [MSDN WAVEFORMATEX](https://docs.microsoft.com/en-us/windows/win32/api/mmeapi/ns-mmeapi-waveformatex)
- [MSDN WAVEFORMATEXTENSIBLE](https://docs.microsoft.com/en-us/windows/win32/api/mmreg/ns-mmreg-waveformatextensible)
- [MSDN XMA2WAVEFORMATEX](https://docs.microsoft.com/en-us/windows/win32/api/xaudio2/ns-xaudio2-xma2waveformatex)

### Other resources
- [RFC 2361][rfc2361] (June 1998) "WAVE and AVI Codec Registries"
- [Peter Kabal, McGill University](http://www-mmsp.ece.mcgill.ca/Documents/AudioFormats/WAVE/WAVE.html)
- [Multimedia Programming Interface and Data Specifications 1.0](http://www-mmsp.ece.mcgill.ca/Documents/AudioFormats/WAVE/Docs/riffmci.pdf)
   (August 1991), IBM Corporation and Microsoft Corporation

[rfc2361]: https://tools.ietf.org/html/rfc2361
*/

extern crate byteorder;
extern crate log;
extern crate uuid;

mod common_format;
mod errors;
mod fourcc;
mod swapped;

mod parser;

mod chunks;
mod fmt;

mod audio_info;
mod clock;
mod entry;
mod transcoder;
mod viewer;

mod validation;
mod wavereader;
mod wavewriter;

pub use audio_info::{format_clock_time, AudioInfo, UNDESCRIBED};
pub use chunks::{ReadWaveChunks, WriteWaveChunks};
pub use clock::{ClockDisplay, ClockSettings, ClockState, PlaybackClock};
pub use common_format::{
    AudioFormat, FORMAT_ADPCM, FORMAT_EXTENSIBLE, FORMAT_PCM, FORMAT_XMA2, UUID_FLOAT, UUID_PCM,
};
pub use entry::EntryKind;
pub use errors::Error;
pub use fmt::{
    AdpcmCoefficient, AdpcmExtra, CodecExtra, ExtensibleExtra, WaveFmt, Xma2Extra,
    ADPCM_EXTRA_SIZE, EXTENSIBLE_EXTRA_SIZE, EXTRA_SIZE_FIELD, WAVE_FMT_SIZE, XMA2_EXTRA_SIZE,
};
pub use fourcc::{FourCC, ReadFourCC, WriteFourCC, DATA_SIG, FACT_SIG, FMT__SIG, RIFF_SIG, WAVE_SIG};
pub use parser::ChunkIteratorItem;
pub use swapped::ReadSwapped;
pub use transcoder::{load_entry, transcode, transcode_reader, Transcoded, SOUND_MAGIC_IDMSA};
pub use viewer::{AudioViewer, SilentSink, Sink};
pub use wavereader::WaveReader;
pub use wavewriter::{ChunkMark, WaveWriter};
