use std::io::Cursor;

use imgmeta_common::read::ReadExt;
use imgmeta_common::utils::maybe_convertible_enum;

use crate::Error;

pub const IHDR_LENGTH: usize = 13;

/// Decoded fields of the `IHDR` chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct Ihdr {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: ColorType,
    pub compression_method: u8,
    pub filter_method: u8,
    pub interlace: Interlace,
}

impl Ihdr {
    pub fn from_data(data: &[u8]) -> Result<Self, Error> {
        if data.len() != IHDR_LENGTH {
            return Err(Error::InvalidIhdrLength(data.len()));
        }

        let mut cur = Cursor::new(data);

        let width = u32::from_be_bytes(cur.read_array()?);
        let height = u32::from_be_bytes(cur.read_array()?);
        let bit_depth = cur.read_byte()?;
        let color_type_raw = cur.read_byte()?;
        let color_type = ColorType::try_from(color_type_raw)
            .map_err(|_| Error::UnknownColorType(color_type_raw))?;
        let compression_method = cur.read_byte()?;
        let filter_method = cur.read_byte()?;
        let interlace_raw = cur.read_byte()?;
        let interlace = Interlace::try_from(interlace_raw)
            .map_err(|_| Error::UnknownInterlaceMethod(interlace_raw))?;

        Ok(Self {
            width,
            height,
            bit_depth,
            color_type,
            compression_method,
            filter_method,
            interlace,
        })
    }
}

maybe_convertible_enum!(
    #[repr(u8)]
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    /// Color type field of the `IHDR` chunk
    pub enum ColorType {
        Grayscale = 0,
        Rgb = 2,
        Palette = 3,
        GrayscaleAlpha = 4,
        RgbAlpha = 6,
    }
);

impl std::fmt::Display for ColorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Grayscale => "grayscale",
            Self::Rgb => "RGB",
            Self::Palette => "palette",
            Self::GrayscaleAlpha => "grayscale+alpha",
            Self::RgbAlpha => "RGB+alpha",
        };
        f.write_str(name)
    }
}

maybe_convertible_enum!(
    #[repr(u8)]
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    /// Interlace method field of the `IHDR` chunk
    pub enum Interlace {
        None = 0,
        Adam7 = 1,
    }
);
