use std::io::Cursor;
use std::io::{Seek, SeekFrom, Write};

use super::errors::Error;
use super::fourcc::{FourCC, WriteFourCC, RIFF_SIG, WAVE_SIG};

use byteorder::LittleEndian;
use byteorder::WriteBytesExt;

/// An open chunk whose length field has yet to be patched.
#[derive(Debug, Copy, Clone)]
pub struct ChunkMark {
    pub ident: FourCC,
    length_field_pos: u64,
    content_start: u64,
}

impl ChunkMark {
    /// Stream offset of the first content byte, for patching fields
    /// inside the chunk.
    pub fn content_start(&self) -> u64 {
        self.content_start
    }
}

/// Builds a RIFF/WAVE stream by appending chunks and patching their
/// length fields once the content is known.
///
/// Every length field is written as a zero placeholder first. Patching
/// saves the write position, overwrites the field, and restores the
/// position, so appends always continue at the end of the stream.
pub struct WaveWriter<W>
where
    W: Write + Seek,
{
    inner: W,
}

impl WaveWriter<Cursor<Vec<u8>>> {
    /// A writer over a fresh in-memory buffer.
    pub fn in_memory() -> Result<Self, Error> {
        Self::new(Cursor::new(Vec::new()))
    }
}

impl<W: Write + Seek> WaveWriter<W> {
    /// Wrap a `Write` struct with a wavewriter and write the form header.
    pub fn new(inner: W) -> Result<Self, Error> {
        let mut retval = Self { inner };
        retval.inner.seek(SeekFrom::Start(0))?;
        retval.inner.write_fourcc(RIFF_SIG)?;
        retval.inner.write_u32::<LittleEndian>(0)?;
        retval.inner.write_fourcc(WAVE_SIG)?;
        Ok(retval)
    }

    /// Write a chunk header with a placeholder length.
    pub fn begin_chunk(&mut self, ident: FourCC) -> Result<ChunkMark, Error> {
        self.inner.seek(SeekFrom::End(0))?;
        self.inner.write_fourcc(ident)?;
        let length_field_pos = self.inner.stream_position()?;
        self.inner.write_u32::<LittleEndian>(0)?;
        Ok(ChunkMark {
            ident,
            length_field_pos,
            content_start: length_field_pos + 4,
        })
    }

    /// Append bytes to the end of the stream.
    pub fn append(&mut self, buffer: &[u8]) -> Result<(), Error> {
        self.inner.seek(SeekFrom::End(0))?;
        self.inner.write_all(buffer)?;
        Ok(())
    }

    pub fn append_u16(&mut self, value: u16) -> Result<(), Error> {
        self.append(&value.to_le_bytes())
    }

    pub fn append_u32(&mut self, value: u32) -> Result<(), Error> {
        self.append(&value.to_le_bytes())
    }

    /// Close `mark`, patching its length with the bytes written since it
    /// began. Returns that length.
    pub fn end_chunk(&mut self, mark: ChunkMark) -> Result<u32, Error> {
        let end = self.inner.seek(SeekFrom::End(0))?;
        let length = (end - mark.content_start) as u32;
        self.patch_u32(mark.length_field_pos, length)?;
        Ok(length)
    }

    /// Overwrite the 32-bit field at `position`, leaving the write
    /// position where it was.
    pub fn patch_u32(&mut self, position: u64, value: u32) -> Result<(), Error> {
        let saved = self.inner.stream_position()?;
        self.inner.seek(SeekFrom::Start(position))?;
        self.inner.write_u32::<LittleEndian>(value)?;
        self.inner.seek(SeekFrom::Start(saved))?;
        Ok(())
    }

    /// Patch the form length to cover everything written and unwrap the
    /// inner writer.
    pub fn finish(mut self) -> Result<W, Error> {
        let end = self.inner.seek(SeekFrom::End(0))?;
        self.patch_u32(4, (end - 8) as u32)?;
        Ok(self.inner)
    }
}
