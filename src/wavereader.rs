use std::fs::File;

use std::path::Path;

use std::io::Cursor;
use std::io::SeekFrom;
use std::io::{BufReader, Read, Seek};

use super::audio_info::AudioInfo;
use super::chunks::ReadWaveChunks;
use super::common_format::AudioFormat;
use super::errors::Error as ParserError;
use super::fmt::{CodecExtra, WaveFmt, EXTRA_SIZE_FIELD, WAVE_FMT_SIZE};
use super::fourcc::{FourCC, DATA_SIG, FACT_SIG, FMT__SIG};
use super::parser::{ChunkIteratorItem, Parser};

use byteorder::LittleEndian;
use byteorder::ReadBytesExt;

/// Reader for plain wave entries and `idwav`-transcoded streams.
///
/// Reads the structure of a RIFF/WAVE stream: its format record, the
/// codec extra record, the `fact` sample count and the extent of the
/// audio payload. The payload itself is never decoded.
///
/// ```no_run
/// use idwavfile::WaveReader;
///
/// let mut reader = WaveReader::open("sound/vo/intro.wav").unwrap();
/// println!("{}", reader.audio_info().unwrap().describe());
/// ```
#[derive(Debug)]
pub struct WaveReader<R: Read + Seek> {
    pub inner: R,
}

impl WaveReader<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ParserError> {
        let f = File::open(path)?;
        let inner = BufReader::new(f);
        Self::new(inner)
    }
}

impl<R: Read + Seek> WaveReader<R> {
    /// Wrap a `Read` struct in a new `WaveReader`.
    ///
    /// The stream passed as `inner` must be at the beginning of the header
    /// of the WAVE data. Returns an `Err` immediately if the stream is not
    /// `validate_readable()`.
    pub fn new(inner: R) -> Result<Self, ParserError> {
        let mut retval = Self { inner };
        retval.validate_readable()?;
        Ok(retval)
    }

    /// Unwrap the inner reader.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Sample and frame format of this wave stream.
    pub fn format(&mut self) -> Result<WaveFmt, ParserError> {
        let (start, _) = self.get_chunk_extent_at_index(FMT__SIG, 0)?;
        self.inner.seek(SeekFrom::Start(start))?;
        self.inner.read_wave_fmt()
    }

    /// The codec extra record following the format, if the codec has one
    /// and the `fmt ` chunk is long enough to hold it.
    pub fn codec_extra(&mut self) -> Result<Option<CodecExtra>, ParserError> {
        let format = self.format()?;
        let (_, length) = self.get_chunk_extent_at_index(FMT__SIG, 0)?;

        match format.extra_size() {
            Some(size) if length as usize >= WAVE_FMT_SIZE + EXTRA_SIZE_FIELD + size => {
                let mut buf = vec![];
                self.read_chunk(FMT__SIG, 0, &mut buf)?;
                let offset = WAVE_FMT_SIZE + EXTRA_SIZE_FIELD;
                Cursor::new(&buf[offset..]).read_codec_extra(format.audio_format())
            }
            _ => Ok(None),
        }
    }

    /// The sample count in the `fact` chunk, if there is one.
    pub fn fact_samples(&mut self) -> Result<Option<u32>, ParserError> {
        match self.get_chunk_extent_at_index(FACT_SIG, 0) {
            Ok((start, length)) if length >= 4 => {
                self.inner.seek(SeekFrom::Start(start))?;
                Ok(Some(self.inner.read_u32::<LittleEndian>()?))
            }
            Ok(_) | Err(ParserError::ChunkMissing { .. }) => Ok(None),
            Err(any) => Err(any),
        }
    }

    /// Length of the audio payload in bytes.
    pub fn data_length(&mut self) -> Result<u64, ParserError> {
        let (_, length) = self.get_chunk_extent_at_index(DATA_SIG, 0)?;
        Ok(length)
    }

    /// The count of audio frames in the stream, for frame-aligned formats.
    pub fn frame_length(&mut self) -> Result<u64, ParserError> {
        let format = self.format()?;
        if format.block_alignment == 0 {
            return Ok(0);
        }
        Ok(self.data_length()? / format.block_alignment as u64)
    }

    /// Playback parameters for this stream.
    ///
    /// Compressed formats take their sample count from the `fact` chunk,
    /// XMA2 additionally from its extra record. Everything else counts
    /// frames in the `data` chunk.
    pub fn audio_info(&mut self) -> Result<AudioInfo, ParserError> {
        let format = self.format()?;
        let audio_format = format.audio_format();
        let data_length = self.data_length()?;

        let mut info = AudioInfo {
            sample_rate: format.sample_rate,
            channels: format.channel_count,
            bits_per_sample: format.bits_per_sample,
            format: audio_format,
            ..AudioInfo::default()
        };

        info.total_samples = match audio_format {
            AudioFormat::Pcm | AudioFormat::Unknown => self.frame_length()?,
            _ => match self.fact_samples()? {
                Some(samples) => samples as u64,
                None => self.frame_length()?,
            },
        };

        if let Some(CodecExtra::Xma2(xma2)) = self.codec_extra()? {
            info.is_xma2 = true;
            info.xma2_play_length = xma2.play_length;
            info.data_size = data_length as i64;
        } else {
            let bytes_per_sample = (info.bits_per_sample / 8) as i64;
            info.data_size = (info.total_samples as i64)
                .saturating_mul(info.channels as i64)
                .saturating_mul(bytes_per_sample);
        }

        Ok(info)
    }

    /// Every chunk in the stream, in order.
    pub fn chunk_list(&mut self) -> Result<Vec<ChunkIteratorItem>, ParserError> {
        Parser::make(&mut self.inner)?.into_chunk_list()
    }

    /// Read the content of the `at`th chunk with signature `ident` into
    /// `buffer`. A missing chunk reads zero bytes.
    pub fn read_chunk(
        &mut self,
        ident: FourCC,
        at: u32,
        buffer: &mut Vec<u8>,
    ) -> Result<usize, ParserError> {
        match self.get_chunk_extent_at_index(ident, at) {
            Ok((start, length)) => {
                buffer.resize(length as usize, 0x0);
                self.inner.seek(SeekFrom::Start(start))?;
                self.inner.read_exact(buffer)?;
                Ok(buffer.len())
            }
            Err(ParserError::ChunkMissing { signature: _ }) => Ok(0),
            Err(any) => Err(any),
        }
    }
}

impl<R: Read + Seek> WaveReader<R> {
    // Private implementation

    /// Extent of every chunk with the given fourcc
    fn get_chunks_extents(&mut self, fourcc: FourCC) -> Result<Vec<(u64, u64)>, ParserError> {
        let p = self.chunk_list()?;

        Ok(p.iter()
            .filter(|item| item.signature == fourcc)
            .map(|item| (item.start, item.length))
            .collect())
    }

    pub(crate) fn get_chunk_extent_at_index(
        &mut self,
        fourcc: FourCC,
        index: u32,
    ) -> Result<(u64, u64), ParserError> {
        if let Some((start, length)) = self.get_chunks_extents(fourcc)?.get(index as usize) {
            Ok((*start, *length))
        } else {
            Err(ParserError::ChunkMissing { signature: fourcc })
        }
    }
}
