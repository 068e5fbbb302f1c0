use std::io::Cursor;
use std::ops::Range;

use imgmeta_common::read::{ReadExt, SliceExt};

pub use crate::*;

/// View into one chunk of a [`Png`]
#[derive(Debug)]
pub struct Chunk<'a> {
    pub(crate) chunk_type: ChunkType,
    pub(crate) chunk_data_location: Range<usize>,
    pub(crate) crc: u32,
    pub(crate) png: &'a Png,
}

impl<'a> Chunk<'a> {
    pub fn chunk_type(&self) -> ChunkType {
        self.chunk_type
    }

    pub fn chunk_data(&self) -> &'a [u8] {
        self.png
            .data
            .get(self.chunk_data_location.clone())
            .unwrap_or_default()
    }

    /// CRC stored behind the chunk data
    pub fn crc(&self) -> u32 {
        self.crc
    }

    /// Keyword of a textual chunk, the bytes before the first NUL
    pub fn keyword(&self) -> Result<&'a [u8], Error> {
        let mut cur = Cursor::new(self.chunk_data());
        Ok(cur.slice_until(0)?)
    }

    /// Returns keyword and value of a [`tEXt`](ChunkType::tEXt) chunk
    ///
    /// Both are Latin-1 encoded.
    pub fn text(&self) -> Result<(&'a [u8], &'a [u8]), Error> {
        let mut cur = Cursor::new(self.chunk_data());

        let keyword = cur.slice_until(0)?;
        let text = cur
            .slice_to_end()
            .map_err(|_| Error::UnexpectedEndOfChunkData)?;

        Ok((keyword, text))
    }

    /// Returns keyword and inflated value of a [`zTXt`](ChunkType::zTXt) chunk
    ///
    /// The value is inflated to at most `inflate_limit` bytes.
    pub fn ztxt(&self, inflate_limit: usize) -> Result<(&'a [u8], Vec<u8>), Error> {
        let mut cur = Cursor::new(self.chunk_data());

        let keyword = cur.slice_until(0)?;
        // One byte compression method, only deflate (0) is defined
        let _compression_method = cur.read_byte()?;
        let raw = cur
            .slice_to_end()
            .map_err(|_| Error::UnexpectedEndOfChunkData)?;

        let data = miniz_oxide::inflate::decompress_to_vec_zlib_with_limit(raw, inflate_limit)
            .map_err(Error::Zlib)?;

        Ok((keyword, data))
    }

    /// Returns the parts of an [`iTXt`](ChunkType::iTXt) chunk
    pub fn itxt(&self, inflate_limit: usize) -> Result<ITxt<'a>, Error> {
        let mut cur = Cursor::new(self.chunk_data());

        let keyword = cur.slice_until(0)?;
        let compression_flag = cur.read_byte()?;
        let _compression_method = cur.read_byte()?;
        let language = cur.slice_until(0)?;
        let translated_keyword = std::str::from_utf8(cur.slice_until(0)?)
            .map_err(|_| Error::InvalidUtf8)?
            .to_string();
        let raw = cur
            .slice_to_end()
            .map_err(|_| Error::UnexpectedEndOfChunkData)?;

        let text = if compression_flag == 0 {
            std::str::from_utf8(raw)
                .map_err(|_| Error::InvalidUtf8)?
                .to_string()
        } else {
            let data = miniz_oxide::inflate::decompress_to_vec_zlib_with_limit(raw, inflate_limit)
                .map_err(Error::Zlib)?;
            String::from_utf8(data).map_err(|_| Error::InvalidUtf8)?
        };

        Ok(ITxt {
            keyword,
            language,
            translated_keyword,
            text,
        })
    }
}

/// Decoded parts of an [`iTXt`](ChunkType::iTXt) chunk
///
/// Keyword and language tag are borrowed raw, translated keyword and text
/// are UTF-8 by definition and possibly inflated.
#[derive(Debug)]
pub struct ITxt<'a> {
    pub keyword: &'a [u8],
    pub language: &'a [u8],
    pub translated_keyword: String,
    pub text: String,
}

/// Location of a chunk within the PNG data
#[derive(Debug, Clone)]
pub struct RawChunk {
    pub(crate) chunk_type: ChunkType,
    pub(crate) chunk_data: Range<usize>,
    pub(crate) crc: u32,
}

impl RawChunk {
    pub(crate) fn chunk<'a>(&self, png: &'a Png) -> Chunk<'a> {
        Chunk {
            chunk_type: self.chunk_type,
            chunk_data_location: self.chunk_data.clone(),
            crc: self.crc,
            png,
        }
    }
}
