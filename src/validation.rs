use super::errors::Error as ParserError;
use super::fourcc::{FourCC, DATA_SIG, FACT_SIG, FMT__SIG};
use super::wavereader::WaveReader;

use byteorder::LittleEndian;
use byteorder::ReadBytesExt;

use std::io::SeekFrom::{End, Start};
use std::io::{Read, Seek};

impl<R: Read + Seek> WaveReader<R> {
    /**
     *  Returns without `Err` if the source meets the minimum standard of
     *  readability by a permissive client:
     *  - `fmt` chunk and `data` chunk are present
     *  - `fmt` chunk appears before `data` chunk
     */
    pub fn validate_readable(&mut self) -> Result<(), ParserError> {
        let (fmt_pos, _) = self.get_chunk_extent_at_index(FMT__SIG, 0)?;
        let (data_pos, _) = self.get_chunk_extent_at_index(DATA_SIG, 0)?;

        if fmt_pos < data_pos {
            Ok(())
        } else {
            Err(ParserError::FmtChunkAfterData)
        }
    }

    /// Validate the layout written by the `idwav` transcoder.
    ///
    /// `Ok(())` if the source is `validate_readable()` AND
    ///
    ///   - contains exactly a `fmt `, a `fact` and a `data` chunk, in that order
    ///   - the RIFF length field equals the stream length minus 8
    ///
    /// Chunk lengths are checked as the chunk list is walked: each declared
    /// length must fit inside the form, and together they must fill it.
    pub fn validate_interchange(&mut self) -> Result<(), ParserError> {
        self.validate_readable()?;

        let chunk_fourccs: Vec<FourCC> = self
            .chunk_list()?
            .iter()
            .map(|c| c.signature)
            .collect();

        if chunk_fourccs != vec![FMT__SIG, FACT_SIG, DATA_SIG] {
            return Err(ParserError::NotInterchangeLayout {
                found: chunk_fourccs,
            });
        }

        self.validate_form_length()
    }

    /// Returns without `Err` if the RIFF length field accounts for every
    /// byte of the stream.
    pub fn validate_form_length(&mut self) -> Result<(), ParserError> {
        let actual = self.inner.seek(End(0))?;
        self.inner.seek(Start(4))?;
        let declared = self.inner.read_u32::<LittleEndian>()? as u64 + 8;

        if declared == actual {
            Ok(())
        } else {
            Err(ParserError::FormLengthMismatch { declared, actual })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wavewriter::WaveWriter;
    use std::io::Cursor;

    fn stream(chunks: &[FourCC], trailing: usize) -> Cursor<Vec<u8>> {
        let mut w = WaveWriter::in_memory().unwrap();
        for c in chunks {
            let m = w.begin_chunk(*c).unwrap();
            w.append(&[0u8; 16]).unwrap();
            w.end_chunk(m).unwrap();
        }
        let mut bytes = w.finish().unwrap().into_inner();
        bytes.extend(std::iter::repeat(0u8).take(trailing));
        Cursor::new(bytes)
    }

    #[test]
    fn test_interchange_layout() {
        let mut r = WaveReader::new(stream(&[FMT__SIG, FACT_SIG, DATA_SIG], 0)).unwrap();
        r.validate_interchange().unwrap();
    }

    #[test]
    fn test_missing_fact() {
        let mut r = WaveReader::new(stream(&[FMT__SIG, DATA_SIG], 0)).unwrap();
        match r.validate_interchange() {
            Err(ParserError::NotInterchangeLayout { found }) => {
                assert_eq!(found, vec![FMT__SIG, DATA_SIG])
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_trailing_bytes() {
        let mut r = WaveReader::new(stream(&[FMT__SIG, FACT_SIG, DATA_SIG], 3)).unwrap();
        match r.validate_interchange() {
            Err(ParserError::FormLengthMismatch { declared, actual }) => {
                assert_eq!(actual, declared + 3)
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_fmt_after_data() {
        match WaveReader::new(stream(&[DATA_SIG, FMT__SIG], 0)) {
            Err(ParserError::FmtChunkAfterData) => (),
            other => panic!("unexpected {:?}", other.map(|_| ())),
        }
    }
}
