use super::fourcc::FourCC;
use std::error::Error as StdError;
use std::{
    fmt::{Debug, Display},
    io,
};

/// Errors returned by methods in this crate.
#[derive(Debug)]
pub enum Error {
    /// An `io::Error` occurred
    IOError(io::Error),

    /// The entry does not begin with the `idwav` magic number
    SignatureMismatch { found: u32 },

    /// A read at `offset` wanted more bytes than the source holds
    Truncated {
        offset: u64,
        wanted: u64,
        available: u64,
    },

    /// A length or count field in the source was negative
    InvalidLength { field: &'static str, value: i32 },

    /// The stream does not begin with a recognized RIFF/WAVE header
    HeaderNotRecognized,

    /// A chunk required to complete the operation
    /// is not present in the stream
    ChunkMissing { signature: FourCC },

    /// A chunk claims more bytes than its enclosing form holds
    ChunkOverrun {
        signature: FourCC,
        length: u64,
        remaining: u64,
    },

    /// The stream is formatted improperly
    FmtChunkAfterData,

    /// The chunk list is not exactly `fmt `, `fact`, `data`
    NotInterchangeLayout { found: Vec<FourCC> },

    /// The RIFF length field disagrees with the stream length
    FormLengthMismatch { declared: u64, actual: u64 },

    /// A zero-length buffer was handed to an operation that needs audio
    EmptyStream,
}

impl StdError for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Error {
        Error::IOError(error)
    }
}
