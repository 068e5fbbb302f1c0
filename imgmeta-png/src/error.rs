use imgmeta_common::math::MathError;
use imgmeta_common::read::ReadError;
use miniz_oxide::inflate::DecompressError;

use crate::ChunkType;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unexpected end of file")]
    UnexpectedEof,
    #[error("Invalid magic bytes: {0:x?}")]
    InvalidMagicBytes(Vec<u8>),
    #[error("First chunk is not IHDR")]
    MissingIhdr,
    #[error("IHDR data have wrong length: {0}")]
    InvalidIhdrLength(usize),
    #[error("Unknown color type: {0}")]
    UnknownColorType(u8),
    #[error("Unknown interlace method: {0}")]
    UnknownInterlaceMethod(u8),
    #[error("CRC mismatch in {chunk_type:?} chunk: stored {stored:08x}, calculated {calculated:08x}")]
    CrcMismatch {
        chunk_type: ChunkType,
        stored: u32,
        calculated: u32,
    },
    #[error("Unexpected end of chunk data")]
    UnexpectedEndOfChunkData,
    #[error("Not a textual chunk: {0:?}")]
    NotATextChunk(ChunkType),
    #[error("Text is not valid UTF-8")]
    InvalidUtf8,
    #[error("Zlib decompression error: {0}")]
    Zlib(DecompressError),
    #[error("Math: {0}")]
    Math(#[from] MathError),
    #[error("Read: {0}")]
    Read(#[from] ReadError),
}
