//! 16-bit PCM WAV decoding.
//!
//! The default [`HeaderLayout::Fixed`] reads a canonical 44-byte header and treats every
//! byte after it as sample data. [`HeaderLayout::Chunked`] walks the RIFF sub-chunks
//! instead, which copes with files carrying `LIST` or other chunks before `data`. Both
//! layouts stop at the end of the stream and drop a trailing odd byte.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

pub const HEADER_LEN: usize = 44;
pub const WAVE_FORMAT_PCM: u16 = 1;
/// Sample rate the whisper models expect. Other rates are decoded but not resampled.
pub const EXPECTED_SAMPLE_RATE: u32 = 16000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderLayout {
    #[default]
    Fixed,
    Chunked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    pub audio_format: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
}

fn le_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn le_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

/// Validate a canonical 44-byte header.
pub fn parse_header(raw: &[u8; HEADER_LEN]) -> Result<WavHeader> {
    if &raw[0..4] != b"RIFF" || &raw[8..12] != b"WAVE" {
        return Err(Error::Format("missing RIFF/WAVE identifiers".to_string()));
    }

    let header = WavHeader {
        audio_format: le_u16(raw, 20),
        channels: le_u16(raw, 22),
        sample_rate: le_u32(raw, 24),
        bits_per_sample: le_u16(raw, 34),
    };
    check_codec(header.audio_format, header.bits_per_sample)?;

    Ok(header)
}

fn check_codec(audio_format: u16, bits_per_sample: u16) -> Result<()> {
    if audio_format != WAVE_FORMAT_PCM {
        return Err(Error::Format(format!(
            "unsupported WAV audio format: {} (expected 1 for PCM)",
            audio_format
        )));
    }
    if bits_per_sample != 16 {
        return Err(Error::Format(format!(
            "unsupported WAV bits per sample: {} (expected 16)",
            bits_per_sample
        )));
    }
    Ok(())
}

fn decode_fixed<R: Read>(mut reader: R, name: &Path) -> Result<(WavHeader, Vec<i16>)> {
    let mut raw = [0u8; HEADER_LEN];
    reader.read_exact(&mut raw).map_err(|e| Error::io(name, e))?;
    let header = parse_header(&raw)?;

    let mut data = Vec::new();
    reader
        .read_to_end(&mut data)
        .map_err(|e| Error::io(name, e))?;

    Ok((header, pcm16(&data)))
}

/// Packed little-endian samples. A trailing odd byte is not a sample.
fn pcm16(data: &[u8]) -> Vec<i16> {
    data.chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}

fn from_hound(err: hound::Error, name: &Path) -> Error {
    match err {
        hound::Error::IoError(e) => Error::io(name, e),
        other => Error::Format(other.to_string()),
    }
}

const WAVE_FORMAT_EXTENSIBLE: u16 = 0xFFFE;
const MAX_FMT_LEN: u64 = 1024;

/// Parse the body of a `fmt ` chunk. Extensible headers report their sub-format.
fn parse_fmt(body: &[u8]) -> Result<WavHeader> {
    if body.len() < 16 {
        return Err(Error::Format("fmt chunk truncated".to_string()));
    }
    let mut audio_format = le_u16(body, 0);
    if audio_format == WAVE_FORMAT_EXTENSIBLE {
        if body.len() < 26 {
            return Err(Error::Format("extensible fmt chunk truncated".to_string()));
        }
        audio_format = le_u16(body, 24);
    }

    let header = WavHeader {
        audio_format,
        channels: le_u16(body, 2),
        sample_rate: le_u32(body, 4),
        bits_per_sample: le_u16(body, 14),
    };
    check_codec(header.audio_format, header.bits_per_sample)?;

    Ok(header)
}

fn decode_chunked<R: Read>(mut reader: R, name: &Path) -> Result<(WavHeader, Vec<i16>)> {
    hound::read_wave_header(&mut reader).map_err(|e| from_hound(e, name))?;

    let mut header = None;
    loop {
        let mut chunk = [0u8; 8];
        if let Err(e) = reader.read_exact(&mut chunk) {
            return match e.kind() {
                ErrorKind::UnexpectedEof => {
                    Err(Error::Format("no data chunk found".to_string()))
                }
                _ => Err(Error::io(name, e)),
            };
        }
        let len = le_u32(&chunk, 4) as u64;

        match &chunk[0..4] {
            b"fmt " => {
                if len > MAX_FMT_LEN {
                    return Err(Error::Format(format!("fmt chunk too large: {} bytes", len)));
                }
                let mut body = vec![0u8; len as usize];
                reader.read_exact(&mut body).map_err(|e| Error::io(name, e))?;
                header = Some(parse_fmt(&body)?);
                if len % 2 == 1 {
                    skip(&mut reader, 1, name)?;
                }
            }
            b"data" => {
                let header = header.ok_or_else(|| {
                    Error::Format("data chunk precedes fmt chunk".to_string())
                })?;
                // Streamed files declare a huge length; read whatever is present
                let mut data = Vec::new();
                reader
                    .by_ref()
                    .take(len)
                    .read_to_end(&mut data)
                    .map_err(|e| Error::io(name, e))?;
                return Ok((header, pcm16(&data)));
            }
            _ => skip(&mut reader, len + len % 2, name)?,
        }
    }
}

fn skip<R: Read>(reader: &mut R, len: u64, name: &Path) -> Result<()> {
    std::io::copy(&mut reader.by_ref().take(len), &mut std::io::sink())
        .map_err(|e| Error::io(name, e))?;
    Ok(())
}

/// Decode a WAV stream into samples normalized to `[-1.0, 1.0)`.
///
/// `name` is only used in error messages.
pub fn decode_wav<R: Read>(reader: R, layout: HeaderLayout, name: &Path) -> Result<Vec<f32>> {
    let (header, samples) = match layout {
        HeaderLayout::Fixed => decode_fixed(reader, name)?,
        HeaderLayout::Chunked => decode_chunked(reader, name)?,
    };

    if header.channels != 1 {
        // Interleaved frames are passed through as if they were mono
        tracing::warn!(
            "WAV file has {} channels, processing as mono.",
            header.channels
        );
    }
    if header.sample_rate != EXPECTED_SAMPLE_RATE {
        tracing::warn!(
            "WAV sample rate is {} Hz, the model expects {} Hz",
            header.sample_rate,
            EXPECTED_SAMPLE_RATE
        );
    }

    if samples.is_empty() {
        return Err(Error::EmptyAudio {
            path: name.to_path_buf(),
        });
    }

    Ok(samples.into_iter().map(|s| s as f32 / 32768.0).collect())
}

pub fn read_audio_file(path: impl AsRef<Path>, layout: HeaderLayout) -> Result<Vec<f32>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let audio = decode_wav(BufReader::new(file), layout, path)?;

    tracing::info!("Loaded {} audio samples from {}", audio.len(), path.display());
    Ok(audio)
}
