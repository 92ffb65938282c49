use std::io::SeekFrom::{Current, Start};
use std::io::{Read, Seek};

use byteorder::LittleEndian;
use byteorder::ReadBytesExt;

use super::errors::Error;
use super::fourcc::{FourCC, ReadFourCC};
use super::fourcc::{RIFF_SIG, WAVE_SIG};

#[derive(Debug)]
pub enum Event {
    StartParse,
    ReadHeader {
        signature: FourCC,
        length_field: u32,
    },
    BeginChunk {
        signature: FourCC,
        content_start: u64,
        content_length: u64,
    },
    Failed {
        error: Error,
    },
    FinishParse,
}

#[derive(Debug)]
enum State {
    New,
    ReadyForHeader,
    ReadyForChunk { at: u64, remaining: u64 },
    Error,
    Complete,
}

/// Walks the chunks of a RIFF/WAVE stream.
pub struct Parser<R: Read + Seek> {
    stream: R,
    state: State,
}

pub struct ChunkIteratorItem {
    pub signature: FourCC,
    pub start: u64,
    pub length: u64,
}

impl<R: Read + Seek> Parser<R> {
    // wraps a stream
    pub fn make(stream: R) -> Result<Self, Error> {
        let mut the_stream = stream;
        the_stream.seek(Start(0))?;
        Ok(Parser {
            stream: the_stream,
            state: State::New,
        })
    }

    pub fn into_chunk_iterator(self) -> impl Iterator<Item = Result<ChunkIteratorItem, Error>> {
        self.filter_map({
            |event| {
                if let Event::BeginChunk {
                    signature,
                    content_start,
                    content_length,
                } = event
                {
                    Some(Ok(ChunkIteratorItem {
                        signature,
                        start: content_start,
                        length: content_length,
                    }))
                } else if let Event::Failed { error } = event {
                    Some(Err(error))
                } else {
                    None
                }
            }
        })
    }

    pub fn into_chunk_list(self) -> Result<Vec<ChunkIteratorItem>, Error> {
        let mut error = Ok(());

        let chunks = self
            .into_chunk_iterator()
            .scan(&mut error, |err, res| match res {
                Ok(ok) => Some(ok),
                Err(e) => {
                    **err = Err(e);
                    None
                }
            })
            .collect();

        error?;

        Ok(chunks)
    }
}

impl<R: Read + Seek> Iterator for Parser<R> {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        let (event, next_state) = self.advance();
        self.state = next_state;
        event
    }
}

impl<R: Read + Seek> Parser<R> {
    fn parse_header(&mut self) -> Result<(Event, State), Error> {
        let file_sig = self.stream.read_fourcc()?;
        let length = self.stream.read_u32::<LittleEndian>()?;
        let list_sig = self.stream.read_fourcc()?;

        match (file_sig, list_sig) {
            (RIFF_SIG, WAVE_SIG) if length >= 4 => Ok((
                Event::ReadHeader {
                    signature: file_sig,
                    length_field: length,
                },
                State::ReadyForChunk {
                    at: 12,
                    remaining: (length - 4) as u64,
                },
            )),
            _ => Ok((
                Event::Failed {
                    error: Error::HeaderNotRecognized,
                },
                State::Error,
            )),
        }
    }

    fn enter_chunk(&mut self, at: u64, remaining: u64) -> Result<(Event, State), Error> {
        if remaining == 0 {
            return Ok((Event::FinishParse, State::Complete));
        }

        let this_fourcc = self.stream.read_fourcc()?;
        let this_size = self.stream.read_u32::<LittleEndian>()? as u64;

        let available = remaining.saturating_sub(8);
        if remaining < 8 || this_size > available {
            return Err(Error::ChunkOverrun {
                signature: this_fourcc,
                length: this_size,
                remaining: available,
            });
        }

        // a final odd-length chunk may omit its pad byte
        let this_displacement = if this_size % 2 == 1 && this_size < available {
            this_size + 1
        } else {
            this_size
        };
        self.stream.seek(Current(this_displacement as i64))?;

        Ok((
            Event::BeginChunk {
                signature: this_fourcc,
                content_start: at + 8,
                content_length: this_size,
            },
            State::ReadyForChunk {
                at: at + 8 + this_displacement,
                remaining: available - this_displacement,
            },
        ))
    }

    fn handle_state(&mut self) -> Result<(Option<Event>, State), Error> {
        match self.state {
            State::New => Ok((Some(Event::StartParse), State::ReadyForHeader)),
            State::ReadyForHeader => {
                let (event, state) = self.parse_header()?;
                Ok((Some(event), state))
            }
            State::ReadyForChunk { at, remaining } => {
                let (event, state) = self.enter_chunk(at, remaining)?;
                Ok((Some(event), state))
            }
            State::Error => Ok((Some(Event::FinishParse), State::Complete)),
            State::Complete => Ok((None, State::Complete)),
        }
    }

    fn advance(&mut self) -> (Option<Event>, State) {
        match self.handle_state() {
            Ok((event, state)) => (event, state),
            Err(error) => (Some(Event::Failed { error }), State::Error),
        }
    }
}
