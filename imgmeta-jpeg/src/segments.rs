use std::io::Cursor;

use imgmeta_common::physical_dimension::{DensityUnit, PixelDensity};
use imgmeta_common::read::ReadExt;

use crate::{Error, JFIF_IDENTIFIER_STRING};

/// Frame header fields of a `SOF` segment
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Sof {
    /// Sample precision in bits
    pub precision: u8,
    pub height: u16,
    pub width: u16,
    /// Number of image components, 1 for grayscale, 3 for YCbCr
    pub components: u8,
}

impl Sof {
    pub fn from_data(data: &[u8]) -> Result<Self, Error> {
        let mut cur = Cursor::new(data);

        let precision = cur.read_byte()?;
        let height = u16::from_be_bytes(cur.read_array()?);
        let width = u16::from_be_bytes(cur.read_array()?);
        let components = cur.read_byte()?;

        tracing::debug!("Loading SOF entry with P={precision}, X={width}, Y={height}");

        Ok(Self {
            precision,
            height,
            width,
            components,
        })
    }
}

/// Fields of the JFIF `APP0` segment
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Jfif {
    pub version_major: u8,
    pub version_minor: u8,
    pub density: PixelDensity,
}

impl Jfif {
    /// * `data`: segment data starting with the JFIF identifier
    pub fn from_data(data: &[u8]) -> Result<Self, Error> {
        let payload = data
            .strip_prefix(JFIF_IDENTIFIER_STRING)
            .ok_or(Error::MissingJfifIdentifier)?;
        let mut cur = Cursor::new(payload);

        let version_major = cur.read_byte()?;
        let version_minor = cur.read_byte()?;
        let unit = match cur.read_byte()? {
            1 => DensityUnit::PerInch,
            2 => DensityUnit::PerCentimeter,
            _ => DensityUnit::Aspect,
        };
        let x = u16::from_be_bytes(cur.read_array()?);
        let y = u16::from_be_bytes(cur.read_array()?);

        Ok(Self {
            version_major,
            version_minor,
            density: PixelDensity::new(x.into(), y.into(), unit),
        })
    }
}
