use uuid::Uuid;

use super::common_format::{AudioFormat, UUID_FLOAT, UUID_PCM};

/// Size of the basic `WAVEFORMAT` record.
pub const WAVE_FMT_SIZE: usize = 16;

/// Size of the ADPCM extra record.
pub const ADPCM_EXTRA_SIZE: usize = 32;

/// Size of the XMA2 extra record.
pub const XMA2_EXTRA_SIZE: usize = 34;

/// Size of the WAVEFORMATEXTENSIBLE extra record.
pub const EXTENSIBLE_EXTRA_SIZE: usize = 22;

/// Size of the `cbSize` field preceding any extra record.
pub const EXTRA_SIZE_FIELD: usize = 2;

/**
 * WAV file data format record.
 *
 * The `fmt` record contains essential information describing the binary
 * structure of the data segment of the WAVE file, such as sample
 * rate, sample binary format, channel count, etc.
 *
 * `idwav` entries carry this record byte-for-byte as it appears in a
 * RIFF `fmt ` chunk.
 */
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct WaveFmt {
    /// A tag identifying the codec in use.
    pub tag: u16,

    /// Count of audio channels in each frame
    pub channel_count: u16,

    /// Sample rate of the audio data
    pub sample_rate: u32,

    /// Count of bytes per second
    pub bytes_per_second: u32,

    /// Count of bytes per audio frame, or per compressed block
    pub block_alignment: u16,

    /// Count of bits stored in the file per sample
    pub bits_per_sample: u16,
}

impl WaveFmt {
    pub fn audio_format(&self) -> AudioFormat {
        AudioFormat::make(self.tag)
    }

    /// Size of the codec extra record that follows this format, if the
    /// codec has one.
    pub fn extra_size(&self) -> Option<usize> {
        match self.audio_format() {
            AudioFormat::Adpcm => Some(ADPCM_EXTRA_SIZE),
            AudioFormat::Xma2 => Some(XMA2_EXTRA_SIZE),
            AudioFormat::Extensible => Some(EXTENSIBLE_EXTRA_SIZE),
            AudioFormat::Pcm | AudioFormat::Unknown => None,
        }
    }

    /// Decoded samples held in each MS-ADPCM block of this format.
    ///
    /// Each block opens with a 7-byte header per channel holding two
    /// whole samples, every remaining byte holds two nibble samples.
    pub fn adpcm_samples_per_block(&self) -> i64 {
        (self.block_alignment as i64 - 7 * self.channel_count as i64) * 2 + 2
    }
}

/// One MS-ADPCM predictor coefficient pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct AdpcmCoefficient {
    pub coef1: i16,
    pub coef2: i16,
}

/// MS-ADPCM extra record
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct AdpcmExtra {
    pub samples_per_block: u16,
    pub num_coefficients: u16,
    pub coefficients: [AdpcmCoefficient; 7],
}

/// XMA2 extra record
///
/// `play_length` is the count of samples a player should render, it is the
/// authoritative duration for XMA2 entries.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Xma2Extra {
    pub num_streams: u16,
    pub channel_mask: u32,
    pub samples_encoded: u32,
    pub bytes_per_block: u32,
    pub play_begin: u32,
    pub play_length: u32,
    pub loop_begin: u32,
    pub loop_length: u32,
    pub loop_count: u8,
    pub encoder_version: u8,
    pub block_count: u16,
}

/**
 * Extended Wave Format
 *
 * https://docs.microsoft.com/en-us/windows/win32/api/mmreg/ns-mmreg-waveformatextensible
 */
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ExtensibleExtra {
    /// Valid bits per sample
    pub valid_bits_per_sample: u16,

    /// Channel mask
    ///
    /// Identifies the speaker assignment for each channel in the file
    pub channel_mask: u32,

    /// Codec GUID, as laid out in the record
    pub sub_format: Uuid,
}

impl ExtensibleExtra {
    pub fn sub_format_label(&self) -> &'static str {
        match self.sub_format {
            UUID_PCM => "PCM",
            UUID_FLOAT => "IEEE float",
            _ => "other",
        }
    }
}

/// The codec-specific record trailing a `WaveFmt`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CodecExtra {
    Adpcm(AdpcmExtra),
    Xma2(Xma2Extra),
    Extensible(ExtensibleExtra),
}

impl CodecExtra {
    /// Byte size of this record on disk.
    pub fn size(&self) -> usize {
        match self {
            Self::Adpcm(_) => ADPCM_EXTRA_SIZE,
            Self::Xma2(_) => XMA2_EXTRA_SIZE,
            Self::Extensible(_) => EXTENSIBLE_EXTRA_SIZE,
        }
    }
}
