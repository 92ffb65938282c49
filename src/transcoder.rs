use std::io::{Cursor, Read, Seek};

use log::{debug, warn};

use super::audio_info::AudioInfo;
use super::chunks::ReadWaveChunks;
use super::common_format::AudioFormat;
use super::errors::Error;
use super::fmt::{CodecExtra, WaveFmt, EXTRA_SIZE_FIELD, WAVE_FMT_SIZE};
use super::fourcc::{DATA_SIG, FACT_SIG, FMT__SIG};
use super::swapped::ReadSwapped;
use super::wavewriter::WaveWriter;

/// First four bytes of every `idwav` entry, read big-endian.
pub const SOUND_MAGIC_IDMSA: u32 = 0x6D7A_7274;

// timestamp (8), loaded flag (1), play begin (4), play length (4)
const BOOKKEEPING_LENGTH: u64 = 17;

/// A decoded `idwav` entry.
#[derive(Debug, Clone)]
pub struct Transcoded {
    /// The entry as a RIFF/WAVE stream: `fmt `, `fact`, `data`.
    pub wave: Vec<u8>,

    pub info: AudioInfo,

    /// The format record carried by the entry.
    pub format: WaveFmt,

    /// The codec extra record carried by the entry, if its codec has one.
    pub extra: Option<CodecExtra>,
}

/// Transcode an `idwav` entry held in memory into a RIFF/WAVE stream.
///
/// The entry's sample buffers are copied into the `data` chunk untouched,
/// nothing is decoded. Every length field in the output is patched after
/// its content is written.
///
/// ```
/// use idwavfile::{transcode, Error};
///
/// match transcode(b"RIFF\x00\x00\x00\x00WAVE") {
///     Err(Error::SignatureMismatch { found }) => assert_eq!(found, 0x5249_4646),
///     other => panic!("unexpected {:?}", other),
/// }
/// ```
pub fn transcode(source: &[u8]) -> Result<Transcoded, Error> {
    transcode_stream(&mut Cursor::new(source))
}

/// Transcode an entry delivered as a stream, read to its end first.
pub fn transcode_reader<R: Read>(mut entry: R) -> Result<Transcoded, Error> {
    let mut source = Vec::new();
    entry.read_to_end(&mut source)?;
    transcode(&source)
}

/// Transcode an entry, degrading any failure to silence.
///
/// A corrupt or foreign entry yields an empty buffer and a zeroed
/// `AudioInfo`. Callers must not hand an empty buffer to a player.
pub fn load_entry(source: &[u8]) -> (Vec<u8>, AudioInfo) {
    match transcode(source) {
        Ok(transcoded) => (transcoded.wave, transcoded.info),
        Err(error) => {
            warn!("idwav entry could not be decoded: {}", error);
            (Vec::new(), AudioInfo::default())
        }
    }
}

fn transcode_stream<R: Read + Seek>(source: &mut R) -> Result<Transcoded, Error> {
    let mut at: u64 = 0;

    let magic = source.read_u32_swapped_at(at)?;
    if magic != SOUND_MAGIC_IDMSA {
        return Err(Error::SignatureMismatch { found: magic });
    }
    at += 4 + BOOKKEEPING_LENGTH;

    let basic = source.read_bytes_at(at, WAVE_FMT_SIZE as u64)?;
    at += WAVE_FMT_SIZE as u64;
    let format = Cursor::new(&basic).read_wave_fmt()?;

    let mut info = AudioInfo {
        sample_rate: format.sample_rate,
        channels: format.channel_count,
        bits_per_sample: format.bits_per_sample,
        format: format.audio_format(),
        ..AudioInfo::default()
    };

    let mut writer = WaveWriter::in_memory()?;

    let fmt_chunk = writer.begin_chunk(FMT__SIG)?;
    writer.append(&basic)?;

    let extra = match format.extra_size() {
        Some(size) => {
            // the entry's own cbSize is not trusted, the record size is fixed
            let _declared = source.read_u16_at(at)?;
            at += EXTRA_SIZE_FIELD as u64;
            let record = source.read_bytes_at(at, size as u64)?;
            at += size as u64;

            writer.append_u16(size as u16)?;
            writer.append(&record)?;
            Cursor::new(&record).read_codec_extra(info.format)?
        }
        None => None,
    };

    if let Some(CodecExtra::Xma2(xma2)) = extra {
        info.is_xma2 = true;
        info.xma2_play_length = xma2.play_length;
    }

    let fmt_length = writer.end_chunk(fmt_chunk)?;
    debug!(
        "fmt chunk: {} bytes, tag {:#06x} ({})",
        fmt_length, format.tag, info.format
    );

    let fact_chunk = writer.begin_chunk(FACT_SIG)?;
    writer.append_u32(0)?;
    writer.end_chunk(fact_chunk)?;

    let amplitude_length = read_length(source, at, "amplitude length")?;
    at += 4 + amplitude_length;

    let total_buffer_size = source.read_i32_swapped_at(at)?;
    at += 4;
    let buffer_count = read_length(source, at, "buffer count")?;
    at += 4;

    let data_chunk = writer.begin_chunk(DATA_SIG)?;
    let mut total_samples: u64 = 0;
    for _ in 0..buffer_count {
        let num_samples = read_length(source, at, "buffer sample count")?;
        at += 4;
        let buffer_size = read_length(source, at, "buffer size")?;
        at += 4;
        let buffer = source.read_bytes_at(at, buffer_size)?;
        at += buffer_size;

        writer.append(&buffer)?;
        total_samples += num_samples;
    }
    let data_length = writer.end_chunk(data_chunk)?;
    debug!(
        "data chunk: {} buffers, {} bytes, {} samples",
        buffer_count, data_length, total_samples
    );

    let fact_samples = fact_sample_count(&format, &info, data_length, total_samples);
    writer.patch_u32(fact_chunk.content_start(), fact_samples)?;

    let wave = writer.finish()?.into_inner();

    info.total_samples = total_samples;
    info.data_size = if info.is_xma2 {
        total_buffer_size as i64
    } else {
        let bytes_per_sample = (info.bits_per_sample / 8) as i64;
        (total_samples as i64)
            .saturating_mul(info.channels as i64)
            .saturating_mul(bytes_per_sample)
    };

    Ok(Transcoded {
        wave,
        info,
        format,
        extra,
    })
}

/// Read a big-endian length or count field, rejecting negative values.
fn read_length<R: Read + Seek>(
    source: &mut R,
    at: u64,
    field: &'static str,
) -> Result<u64, Error> {
    let value = source.read_i32_swapped_at(at)?;
    if value < 0 {
        Err(Error::InvalidLength { field, value })
    } else {
        Ok(value as u64)
    }
}

/// Sample count recorded in the `fact` chunk.
fn fact_sample_count(
    format: &WaveFmt,
    info: &AudioInfo,
    data_length: u32,
    total_samples: u64,
) -> u32 {
    match info.format {
        AudioFormat::Adpcm => {
            if format.block_alignment == 0 {
                0
            } else {
                let blocks = (data_length / format.block_alignment as u32) as i64;
                let samples = blocks * format.adpcm_samples_per_block();
                samples.max(0).min(u32::MAX as i64) as u32
            }
        }
        AudioFormat::Extensible => total_samples.min(u32::MAX as u64) as u32,
        AudioFormat::Xma2 => info.xma2_play_length,
        AudioFormat::Pcm | AudioFormat::Unknown => 0,
    }
}
