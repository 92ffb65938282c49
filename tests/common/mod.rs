// Builds `idwav` entries in memory for the integration tests.

#![allow(dead_code)]

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};

use idwavfile::{CodecExtra, WaveFmt, WriteWaveChunks, SOUND_MAGIC_IDMSA};

pub struct Buffer {
    pub num_samples: i32,
    pub bytes: Vec<u8>,
}

impl Buffer {
    /// A buffer whose bytes count up from `seed`.
    pub fn counting(num_samples: i32, len: usize, seed: u8) -> Self {
        Buffer {
            num_samples,
            bytes: (0..len).map(|i| seed.wrapping_add(i as u8)).collect(),
        }
    }
}

pub struct EntryBuilder {
    pub format: WaveFmt,
    pub extra: Option<CodecExtra>,
    pub declared_extra_size: u16,
    pub amplitudes: Vec<u8>,
    pub total_buffer_size: i32,
    pub buffers: Vec<Buffer>,
}

impl EntryBuilder {
    pub fn new(format: WaveFmt) -> Self {
        EntryBuilder {
            format,
            extra: None,
            declared_extra_size: 0,
            amplitudes: vec![0x11; 10],
            total_buffer_size: 0x7eadbeef,
            buffers: vec![],
        }
    }

    pub fn extra(mut self, extra: CodecExtra) -> Self {
        self.declared_extra_size = extra.size() as u16;
        self.extra = Some(extra);
        self
    }

    pub fn buffer(mut self, buffer: Buffer) -> Self {
        self.buffers.push(buffer);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut v: Vec<u8> = vec![];
        v.write_u32::<BigEndian>(SOUND_MAGIC_IDMSA).unwrap();
        v.write_u64::<BigEndian>(0x0102_0304_0506_0708).unwrap(); // timestamp
        v.write_u8(1).unwrap(); // loaded
        v.write_i32::<BigEndian>(0).unwrap(); // play begin
        v.write_i32::<BigEndian>(1234).unwrap(); // play length

        v.write_wave_fmt(&self.format).unwrap();
        if let Some(extra) = &self.extra {
            v.write_u16::<LittleEndian>(self.declared_extra_size).unwrap();
            v.write_codec_extra(extra).unwrap();
        }

        v.write_i32::<BigEndian>(self.amplitudes.len() as i32).unwrap();
        v.extend_from_slice(&self.amplitudes);

        v.write_i32::<BigEndian>(self.total_buffer_size).unwrap();
        v.write_i32::<BigEndian>(self.buffers.len() as i32).unwrap();
        for b in &self.buffers {
            v.write_i32::<BigEndian>(b.num_samples).unwrap();
            v.write_i32::<BigEndian>(b.bytes.len() as i32).unwrap();
            v.extend_from_slice(&b.bytes);
        }
        v
    }
}

pub fn pcm_format(sample_rate: u32, channel_count: u16, bits_per_sample: u16) -> WaveFmt {
    let block_alignment = channel_count * bits_per_sample / 8;
    WaveFmt {
        tag: 0x0001,
        channel_count,
        sample_rate,
        bytes_per_second: sample_rate * block_alignment as u32,
        block_alignment,
        bits_per_sample,
    }
}

/// A RIFF chunk located by a plain linear walk, independent of the
/// crate's own parser.
pub struct RawChunk {
    pub ident: [u8; 4],
    pub declared: u32,
    pub start: usize,
    pub end: usize,
}

/// Walk the chunks of `wave`; panics if a chunk overruns the buffer.
pub fn walk_chunks(wave: &[u8]) -> Vec<RawChunk> {
    assert_eq!(&wave[0..4], b"RIFF");
    assert_eq!(&wave[8..12], b"WAVE");

    let mut chunks = vec![];
    let mut at = 12;
    while at < wave.len() {
        let mut ident = [0u8; 4];
        ident.copy_from_slice(&wave[at..at + 4]);
        let mut size = [0u8; 4];
        size.copy_from_slice(&wave[at + 4..at + 8]);
        let declared = u32::from_le_bytes(size);
        let start = at + 8;
        let end = start + declared as usize;
        assert!(end <= wave.len(), "chunk {:?} overruns", ident);
        chunks.push(RawChunk {
            ident,
            declared,
            start,
            end,
        });
        at = end;
    }
    chunks
}

pub fn le_u32(bytes: &[u8]) -> u32 {
    let mut b = [0u8; 4];
    b.copy_from_slice(&bytes[0..4]);
    u32::from_le_bytes(b)
}
