use std::io::SeekFrom::{End, Start};
use std::io::{Read, Seek};

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};

use super::errors::Error;

/// Offset-addressed reads from an `idwav` source.
///
/// The engine that writes `idwav` entries stores its header integers
/// big-endian, so the `_swapped_` methods reverse the bytes before
/// interpreting them. Every read names its absolute byte offset; nothing
/// here remembers a position between calls, callers carry the running
/// offset themselves.
pub trait ReadSwapped: Read + Seek {
    fn read_u16_swapped_at(&mut self, offset: u64) -> Result<u16, Error>;
    fn read_i16_swapped_at(&mut self, offset: u64) -> Result<i16, Error>;
    fn read_u32_swapped_at(&mut self, offset: u64) -> Result<u32, Error>;
    fn read_i32_swapped_at(&mut self, offset: u64) -> Result<i32, Error>;

    /// Read a 16-bit value stored in the source's native order.
    fn read_u16_at(&mut self, offset: u64) -> Result<u16, Error>;

    /// Read `length` raw bytes, no byte-order transform.
    fn read_bytes_at(&mut self, offset: u64, length: u64) -> Result<Vec<u8>, Error>;
}

impl<T> ReadSwapped for T
where
    T: Read + Seek,
{
    fn read_u16_swapped_at(&mut self, offset: u64) -> Result<u16, Error> {
        locate(self, offset, 2)?;
        Ok(self.read_u16::<BigEndian>()?)
    }

    fn read_i16_swapped_at(&mut self, offset: u64) -> Result<i16, Error> {
        locate(self, offset, 2)?;
        Ok(self.read_i16::<BigEndian>()?)
    }

    fn read_u32_swapped_at(&mut self, offset: u64) -> Result<u32, Error> {
        locate(self, offset, 4)?;
        Ok(self.read_u32::<BigEndian>()?)
    }

    fn read_i32_swapped_at(&mut self, offset: u64) -> Result<i32, Error> {
        locate(self, offset, 4)?;
        Ok(self.read_i32::<BigEndian>()?)
    }

    fn read_u16_at(&mut self, offset: u64) -> Result<u16, Error> {
        locate(self, offset, 2)?;
        Ok(self.read_u16::<LittleEndian>()?)
    }

    fn read_bytes_at(&mut self, offset: u64, length: u64) -> Result<Vec<u8>, Error> {
        locate(self, offset, length)?;
        let mut buf = vec![0u8; length as usize];
        self.read_exact(&mut buf)?;
        Ok(buf)
    }
}

/// Seek to `offset` after checking `wanted` bytes are available there.
fn locate<S: Seek + ?Sized>(stream: &mut S, offset: u64, wanted: u64) -> Result<(), Error> {
    let end = stream.seek(End(0))?;
    let available = end.saturating_sub(offset);
    if available < wanted {
        return Err(Error::Truncated {
            offset,
            wanted,
            available,
        });
    }
    stream.seek(Start(offset))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_swapped_widths() {
        let mut c = Cursor::new(vec![0x6d, 0x7a, 0x72, 0x74, 0xff, 0xfe, 0x01, 0x00]);

        assert_eq!(c.read_u32_swapped_at(0).unwrap(), 0x6d7a_7274);
        assert_eq!(c.read_u16_swapped_at(4).unwrap(), 0xfffe);
        assert_eq!(c.read_i16_swapped_at(4).unwrap(), -2);
        assert_eq!(c.read_u16_at(6).unwrap(), 1);
        assert_eq!(c.read_i32_swapped_at(4).unwrap(), -130_816);
    }

    #[test]
    fn test_offsets_are_absolute() {
        let mut c = Cursor::new(vec![0, 0, 0, 7, 0, 0, 0, 9]);
        assert_eq!(c.read_u32_swapped_at(4).unwrap(), 9);
        assert_eq!(c.read_u32_swapped_at(0).unwrap(), 7);
        assert_eq!(c.read_u32_swapped_at(4).unwrap(), 9);
    }

    #[test]
    fn test_bytes_are_not_reversed() {
        let mut c = Cursor::new(vec![1, 2, 3, 4, 5]);
        assert_eq!(c.read_bytes_at(1, 3).unwrap(), vec![2, 3, 4]);
        assert_eq!(c.read_bytes_at(5, 0).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_truncated() {
        let mut c = Cursor::new(vec![0u8; 6]);
        match c.read_u32_swapped_at(4) {
            Err(Error::Truncated {
                offset: 4,
                wanted: 4,
                available: 2,
            }) => (),
            other => panic!("expected truncation, got {:?}", other),
        }

        match c.read_bytes_at(10, 0xffff_ffff) {
            Err(Error::Truncated { available: 0, .. }) => (),
            other => panic!("expected truncation, got {:?}", other),
        }
    }
}
