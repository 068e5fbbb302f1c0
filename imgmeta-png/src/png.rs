use std::io::Cursor;

use imgmeta_common::datetime::DateTime;
use imgmeta_common::error::ErrorWithData;
use imgmeta_common::image::ImageFormat;
use imgmeta_common::info::{Entry, Value};
use imgmeta_common::math::*;
use imgmeta_common::physical_dimension::{DensityUnit, PixelDensity};
use imgmeta_common::read::ReadExt;

pub use super::*;
use crate::text::decode_latin1;

pub const MAGIC_BYTES: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Maximum number of bytes a compressed text chunk may inflate to
pub const DEFAULT_INFLATE_LIMIT: usize = 100_000_000;

/// Representation of a PNG image
#[derive(Debug, Clone)]
pub struct Png {
    /// Raw data
    pub(crate) data: Vec<u8>,
    /// Chunks in the order in which they appear in the data
    pub(crate) chunks: Vec<RawChunk>,
    /// Header fields, decoded eagerly since every valid PNG has them
    pub(crate) ihdr: Ihdr,
}

impl Png {
    /// Returns PNG image representation
    ///
    /// * `data`: PNG image data starting with magic byte
    pub fn new(data: Vec<u8>) -> Result<Self, ErrorWithData<Error>> {
        match Self::decode(&data) {
            Ok((chunks, ihdr)) => Ok(Self { data, chunks, ihdr }),
            Err(err) => Err(ErrorWithData::new(err, data)),
        }
    }

    /// Checks if passed data have PNG magic bytes
    pub fn is_filetype(data: &[u8]) -> bool {
        data.starts_with(&MAGIC_BYTES)
    }

    /// Convert into raw data
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// Header fields
    pub fn ihdr(&self) -> Ihdr {
        self.ihdr
    }

    /// Returns all chunks
    pub fn chunks(&self) -> Vec<Chunk> {
        self.chunks.iter().map(|x| x.chunk(self)).collect()
    }

    /// Metadata attached to the image by the decode step
    ///
    /// Entries derived from the header come first, the remaining entries
    /// follow the order of the chunks they were read from. Keys are unique;
    /// a repeated chunk does not override the first occurrence.
    pub fn info(&self) -> Vec<Entry> {
        let ihdr = self.ihdr;

        let mut entries: Vec<Entry> = vec![
            ("width".into(), ihdr.width.into()),
            ("height".into(), ihdr.height.into()),
            ("bit depth".into(), ihdr.bit_depth.into()),
            ("color type".into(), ihdr.color_type.to_string().into()),
        ];

        if ihdr.interlace == Interlace::Adam7 {
            entries.push(("interlace".into(), "Adam7".into()));
        }

        for chunk in self.chunks() {
            let Some((key, value)) = info_entry(&chunk, ihdr.color_type) else {
                continue;
            };

            if entries.iter().any(|(existing, _)| *existing == key) {
                tracing::debug!("Ignoring repeated {:?} chunk", chunk.chunk_type());
                continue;
            }

            entries.push((key, value));
        }

        entries
    }

    /// Decoded textual chunks in the order in which they appear in the data
    ///
    /// Individual chunks that cannot be decoded are skipped with a warning.
    /// The framing of all chunks was already validated by [`Png::new`].
    pub fn text_chunks(&self) -> Vec<TextChunk> {
        let mut text_chunks = Vec::new();

        for chunk in self.chunks() {
            if !chunk.chunk_type().is_textual() {
                continue;
            }

            match TextChunk::from_chunk(&chunk, DEFAULT_INFLATE_LIMIT) {
                Ok(text) => text_chunks.push(text),
                Err(err) => {
                    tracing::warn!("Skipping broken {:?} chunk: {err}", chunk.chunk_type())
                }
            }
        }

        text_chunks
    }

    fn decode(data: &[u8]) -> Result<(Vec<RawChunk>, Ihdr), Error> {
        let chunks = Self::find_chunks(data)?;

        let header = chunks
            .first()
            .filter(|x| x.chunk_type == ChunkType::IHDR)
            .ok_or(Error::MissingIhdr)?;
        let header_data = data
            .get(header.chunk_data.clone())
            .ok_or(Error::UnexpectedEof)?;
        let ihdr = Ihdr::from_data(header_data)?;

        tracing::debug!("Found {} chunks", chunks.len());

        Ok((chunks, ihdr))
    }

    /// List all chunks in the data
    fn find_chunks(data: &[u8]) -> Result<Vec<RawChunk>, Error> {
        let mut cur = Cursor::new(data);

        let magic_bytes: [u8; MAGIC_BYTES.len()] =
            cur.read_array().map_err(|_| Error::UnexpectedEof)?;
        if magic_bytes != MAGIC_BYTES {
            return Err(Error::InvalidMagicBytes(magic_bytes.to_vec()));
        }

        let mut chunks = Vec::new();
        loop {
            // First 4 bytes are the data length
            let length_data: [u8; 4] = cur.read_array().map_err(|_| Error::UnexpectedEof)?;
            let length = u32::from_be_bytes(length_data);

            // Next 4 bytes are the chunk type
            let type_data: [u8; 4] = cur.read_array().map_err(|_| Error::UnexpectedEof)?;
            let chunk_type = ChunkType::from(u32::from_be_bytes(type_data));

            // Next are the data
            let data_start = cur.position().usize()?;
            let data_end = data_start.safe_add(length.usize()?)?;
            let chunk_data = data.get(data_start..data_end).ok_or(Error::UnexpectedEof)?;

            // Last 4 bytes after the data are a CRC over type and data
            cur.set_position(data_end.u64()?);
            let crc_data: [u8; 4] = cur.read_array().map_err(|_| Error::UnexpectedEof)?;
            let stored = u32::from_be_bytes(crc_data);

            let mut hasher = crc32fast::Hasher::new();
            hasher.update(&type_data);
            hasher.update(chunk_data);
            let calculated = hasher.finalize();

            if stored != calculated {
                if chunk_type.is_critical() {
                    return Err(Error::CrcMismatch {
                        chunk_type,
                        stored,
                        calculated,
                    });
                }
                tracing::warn!("Ignoring CRC mismatch in ancillary {chunk_type:?} chunk");
            }

            chunks.push(RawChunk {
                chunk_type,
                chunk_data: data_start..data_end,
                crc: stored,
            });

            if chunk_type == ChunkType::IEND {
                break;
            }
        }

        Ok(chunks)
    }
}

impl ImageFormat for Png {
    fn is_filetype(data: &[u8]) -> bool {
        Png::is_filetype(data)
    }
}

/// Info entry contributed by a single chunk, if any
fn info_entry(chunk: &Chunk, color_type: ColorType) -> Option<Entry> {
    let data = chunk.chunk_data();

    match chunk.chunk_type() {
        ChunkType::gAMA => {
            let gamma = u32::from_be_bytes(data.get(..4)?.try_into().ok()?);
            Some(("gamma".into(), Value::Float(f64::from(gamma) / 100_000.)))
        }
        ChunkType::cHRM => {
            // White point and primaries, stored as x/y pairs times 100000
            let mut values = Vec::with_capacity(8);
            for raw in data.get(..32)?.chunks_exact(4) {
                let value = u32::from_be_bytes(raw.try_into().ok()?);
                values.push((f64::from(value) / 100_000.).to_string());
            }
            Some((
                "chromaticity".into(),
                Value::Text(format!("({})", values.join(", "))),
            ))
        }
        ChunkType::sRGB => Some(("srgb".into(), (*data.first()?).into())),
        ChunkType::iCCP => {
            let keyword = chunk.keyword().ok()?;
            Some(("icc profile".into(), Value::Text(decode_latin1(keyword))))
        }
        ChunkType::pHYs => {
            let x = u32::from_be_bytes(data.get(..4)?.try_into().ok()?);
            let y = u32::from_be_bytes(data.get(4..8)?.try_into().ok()?);
            let unit = match data.get(8)? {
                1 => DensityUnit::PerMeter,
                _ => DensityUnit::Aspect,
            };

            let density = PixelDensity::new(x, y, unit);
            match density.dots_per_inch() {
                Some((x, y)) => Some(("dpi".into(), Value::FloatPair(x, y))),
                None => Some(("aspect".into(), Value::UIntPair(x.into(), y.into()))),
            }
        }
        ChunkType::bKGD => background_entry(data, color_type),
        ChunkType::tRNS => transparency_entry(data, color_type),
        ChunkType::tIME => {
            let year = u16::from_be_bytes(data.get(..2)?.try_into().ok()?);
            let [month, day, hour, minute, second]: [u8; 5] = data.get(2..7)?.try_into().ok()?;

            let datetime = DateTime::from_ymd_hms(
                year.into(),
                month.into(),
                day.into(),
                hour.into(),
                minute.into(),
                second.into(),
            )?;
            Some(("modification time".into(), datetime.into()))
        }
        ChunkType::eXIf => Some(("exif".into(), Value::Bytes(data.len()))),
        _ => None,
    }
}

/// The payload of `bKGD` depends on the color type
fn background_entry(data: &[u8], color_type: ColorType) -> Option<Entry> {
    let value = match color_type {
        ColorType::Grayscale | ColorType::GrayscaleAlpha => {
            u16::from_be_bytes(data.get(..2)?.try_into().ok()?).into()
        }
        ColorType::Rgb | ColorType::RgbAlpha => rgb16(data)?,
        ColorType::Palette => (*data.first()?).into(),
    };

    Some(("background".into(), value))
}

/// The payload of `tRNS` depends on the color type
fn transparency_entry(data: &[u8], color_type: ColorType) -> Option<Entry> {
    let value = match color_type {
        ColorType::Grayscale => u16::from_be_bytes(data.get(..2)?.try_into().ok()?).into(),
        ColorType::Rgb => rgb16(data)?,
        ColorType::Palette => Value::Bytes(data.len()),
        // Alpha channels make a tRNS chunk invalid
        ColorType::GrayscaleAlpha | ColorType::RgbAlpha => return None,
    };

    Some(("transparency".into(), value))
}

/// Triple of 16 bit samples as stored in `bKGD` and `tRNS`
fn rgb16(data: &[u8]) -> Option<Value> {
    let r = u16::from_be_bytes(data.get(..2)?.try_into().ok()?);
    let g = u16::from_be_bytes(data.get(2..4)?.try_into().ok()?);
    let b = u16::from_be_bytes(data.get(4..6)?.try_into().ok()?);

    Some(Value::Text(format!("({r}, {g}, {b})")))
}
