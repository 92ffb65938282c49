use std::io::{Read, Write};

use super::errors::Error as ParserError;

use byteorder::LittleEndian;
use byteorder::{ReadBytesExt, WriteBytesExt};

use uuid::Uuid;

use super::common_format::AudioFormat;
use super::fmt::{
    AdpcmCoefficient, AdpcmExtra, CodecExtra, ExtensibleExtra, WaveFmt, Xma2Extra,
};

pub trait ReadWaveChunks: Read {
    fn read_wave_fmt(&mut self) -> Result<WaveFmt, ParserError>;
    fn read_adpcm_extra(&mut self) -> Result<AdpcmExtra, ParserError>;
    fn read_xma2_extra(&mut self) -> Result<Xma2Extra, ParserError>;
    fn read_extensible_extra(&mut self) -> Result<ExtensibleExtra, ParserError>;

    /// Read the extra record belonging to `format`, `None` for codecs
    /// that don't carry one.
    fn read_codec_extra(&mut self, format: AudioFormat) -> Result<Option<CodecExtra>, ParserError>;
}

pub trait WriteWaveChunks: Write {
    fn write_wave_fmt(&mut self, format: &WaveFmt) -> Result<(), ParserError>;
    fn write_codec_extra(&mut self, extra: &CodecExtra) -> Result<(), ParserError>;
}

impl<T> WriteWaveChunks for T
where
    T: Write,
{
    fn write_wave_fmt(&mut self, format: &WaveFmt) -> Result<(), ParserError> {
        self.write_u16::<LittleEndian>(format.tag)?;
        self.write_u16::<LittleEndian>(format.channel_count)?;
        self.write_u32::<LittleEndian>(format.sample_rate)?;
        self.write_u32::<LittleEndian>(format.bytes_per_second)?;
        self.write_u16::<LittleEndian>(format.block_alignment)?;
        self.write_u16::<LittleEndian>(format.bits_per_sample)?;
        Ok(())
    }

    fn write_codec_extra(&mut self, extra: &CodecExtra) -> Result<(), ParserError> {
        match extra {
            CodecExtra::Adpcm(adpcm) => {
                self.write_u16::<LittleEndian>(adpcm.samples_per_block)?;
                self.write_u16::<LittleEndian>(adpcm.num_coefficients)?;
                for c in adpcm.coefficients.iter() {
                    self.write_i16::<LittleEndian>(c.coef1)?;
                    self.write_i16::<LittleEndian>(c.coef2)?;
                }
            }
            CodecExtra::Xma2(xma2) => {
                self.write_u16::<LittleEndian>(xma2.num_streams)?;
                self.write_u32::<LittleEndian>(xma2.channel_mask)?;
                self.write_u32::<LittleEndian>(xma2.samples_encoded)?;
                self.write_u32::<LittleEndian>(xma2.bytes_per_block)?;
                self.write_u32::<LittleEndian>(xma2.play_begin)?;
                self.write_u32::<LittleEndian>(xma2.play_length)?;
                self.write_u32::<LittleEndian>(xma2.loop_begin)?;
                self.write_u32::<LittleEndian>(xma2.loop_length)?;
                self.write_u8(xma2.loop_count)?;
                self.write_u8(xma2.encoder_version)?;
                self.write_u16::<LittleEndian>(xma2.block_count)?;
            }
            CodecExtra::Extensible(ext) => {
                self.write_u16::<LittleEndian>(ext.valid_bits_per_sample)?;
                self.write_u32::<LittleEndian>(ext.channel_mask)?;
                self.write_all(ext.sub_format.as_bytes())?;
            }
        }
        Ok(())
    }
}

impl<T> ReadWaveChunks for T
where
    T: Read,
{
    fn read_wave_fmt(&mut self) -> Result<WaveFmt, ParserError> {
        Ok(WaveFmt {
            tag: self.read_u16::<LittleEndian>()?,
            channel_count: self.read_u16::<LittleEndian>()?,
            sample_rate: self.read_u32::<LittleEndian>()?,
            bytes_per_second: self.read_u32::<LittleEndian>()?,
            block_alignment: self.read_u16::<LittleEndian>()?,
            bits_per_sample: self.read_u16::<LittleEndian>()?,
        })
    }

    fn read_adpcm_extra(&mut self) -> Result<AdpcmExtra, ParserError> {
        let samples_per_block = self.read_u16::<LittleEndian>()?;
        let num_coefficients = self.read_u16::<LittleEndian>()?;
        let mut coefficients = [AdpcmCoefficient::default(); 7];
        for c in coefficients.iter_mut() {
            c.coef1 = self.read_i16::<LittleEndian>()?;
            c.coef2 = self.read_i16::<LittleEndian>()?;
        }
        Ok(AdpcmExtra {
            samples_per_block,
            num_coefficients,
            coefficients,
        })
    }

    fn read_xma2_extra(&mut self) -> Result<Xma2Extra, ParserError> {
        Ok(Xma2Extra {
            num_streams: self.read_u16::<LittleEndian>()?,
            channel_mask: self.read_u32::<LittleEndian>()?,
            samples_encoded: self.read_u32::<LittleEndian>()?,
            bytes_per_block: self.read_u32::<LittleEndian>()?,
            play_begin: self.read_u32::<LittleEndian>()?,
            play_length: self.read_u32::<LittleEndian>()?,
            loop_begin: self.read_u32::<LittleEndian>()?,
            loop_length: self.read_u32::<LittleEndian>()?,
            loop_count: self.read_u8()?,
            encoder_version: self.read_u8()?,
            block_count: self.read_u16::<LittleEndian>()?,
        })
    }

    fn read_extensible_extra(&mut self) -> Result<ExtensibleExtra, ParserError> {
        let valid_bits_per_sample = self.read_u16::<LittleEndian>()?;
        let channel_mask = self.read_u32::<LittleEndian>()?;
        let mut guid = [0u8; 16];
        self.read_exact(&mut guid)?;
        Ok(ExtensibleExtra {
            valid_bits_per_sample,
            channel_mask,
            sub_format: Uuid::from_bytes(guid),
        })
    }

    fn read_codec_extra(&mut self, format: AudioFormat) -> Result<Option<CodecExtra>, ParserError> {
        Ok(match format {
            AudioFormat::Adpcm => Some(CodecExtra::Adpcm(self.read_adpcm_extra()?)),
            AudioFormat::Xma2 => Some(CodecExtra::Xma2(self.read_xma2_extra()?)),
            AudioFormat::Extensible => Some(CodecExtra::Extensible(self.read_extensible_extra()?)),
            AudioFormat::Pcm | AudioFormat::Unknown => None,
        })
    }
}
