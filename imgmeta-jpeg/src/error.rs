use imgmeta_common::math::MathError;
use imgmeta_common::read::ReadError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unexpected end of file")]
    UnexpectedEof,
    #[error("Invalid magic bytes: {0:x?}")]
    InvalidMagicBytes(Vec<u8>),
    #[error("Expected segment marker, found {found:#04x} at position {position}")]
    ExpectedMarker { position: u64, found: u8 },
    #[error("Segment length {0} is too short")]
    InvalidSegmentLength(u16),
    #[error("End of image before start of scan")]
    UnexpectedEndOfImage,
    #[error("Segment does not start with JFIF identifier")]
    MissingJfifIdentifier,
    #[error("Math: {0}")]
    Math(#[from] MathError),
    #[error("Read: {0}")]
    Read(#[from] ReadError),
}
