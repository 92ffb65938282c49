use std::fmt;

use uuid::Uuid;

pub const FORMAT_PCM: u16 = 0x0001;
pub const FORMAT_ADPCM: u16 = 0x0002;
pub const FORMAT_XMA2: u16 = 0x0166;
pub const FORMAT_EXTENSIBLE: u16 = 0xFFFE;

/* RC 2361 §4:

 WAVE Format IDs are converted to GUIDs by inserting the hexadecimal
   value of the WAVE Format ID into the XXXXXXXX part of the following
   template: {XXXXXXXX-0000-0010-8000-00AA00389B71}.

 These are the GUIDs as they are laid out in a WAVEFORMATEXTENSIBLE record.
*/

pub const UUID_PCM: Uuid = Uuid::from_bytes([
    0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x80, 0x00, 0x00, 0xaa, 0x00, 0x38, 0x9b, 0x71,
]);

pub const UUID_FLOAT: Uuid = Uuid::from_bytes([
    0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x80, 0x00, 0x00, 0xaa, 0x00, 0x38, 0x9b, 0x71,
]);

/// Codec family of an `idwav` entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AudioFormat {
    /// A tag this crate has no layout for.
    Unknown,

    /// Integer linear PCM
    Pcm,

    /// Microsoft ADPCM
    Adpcm,

    /// Xbox 360 XMA2
    Xma2,

    /// WAVEFORMATEXTENSIBLE
    Extensible,
}

impl Default for AudioFormat {
    fn default() -> Self {
        AudioFormat::Unknown
    }
}

impl AudioFormat {
    /// Resolve a basic format tag.
    pub fn make(tag: u16) -> Self {
        match tag {
            FORMAT_PCM => Self::Pcm,
            FORMAT_ADPCM => Self::Adpcm,
            FORMAT_XMA2 => Self::Xma2,
            FORMAT_EXTENSIBLE => Self::Extensible,
            _ => Self::Unknown,
        }
    }

    /// The basic format tag, `None` for `Unknown`.
    pub fn tag(self) -> Option<u16> {
        match self {
            Self::Pcm => Some(FORMAT_PCM),
            Self::Adpcm => Some(FORMAT_ADPCM),
            Self::Xma2 => Some(FORMAT_XMA2),
            Self::Extensible => Some(FORMAT_EXTENSIBLE),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unknown => "Unknown",
            Self::Pcm => "PCM",
            Self::Adpcm => "ADPCM",
            Self::Xma2 => "XMA2",
            Self::Extensible => "Extensible",
        };
        f.write_str(label)
    }
}
