use imgmeta_common::error::ErrorWithData;
use imgmeta_common::image::Format;
use imgmeta_common::info::Entry;

use crate::Error;

/// An opened image of any supported format
///
/// The variant is the decoded-format tag: branching on it, or on
/// [`Image::format`], is how callers distinguish formats. The file name
/// plays no role in the decision.
#[non_exhaustive]
#[derive(Debug)]
pub enum Image {
    #[cfg(feature = "png")]
    Png(imgmeta_png::Png),
    #[cfg(feature = "jpeg")]
    Jpeg(imgmeta_jpeg::Jpeg),
}

impl Image {
    /// Decodes the structure of the image behind `data`
    ///
    /// The format is determined from the data's magic bytes. On failure the
    /// data travel back inside the error.
    #[cfg(any(feature = "jpeg", feature = "png"))]
    pub fn new(data: Vec<u8>) -> Result<Self, ErrorWithData<Error>> {
        #[cfg(feature = "png")]
        if imgmeta_png::Png::is_filetype(&data) {
            let png = imgmeta_png::Png::new(data).map_err(|x| x.map_err(Error::Png))?;
            return Ok(Self::Png(png));
        }

        #[cfg(feature = "jpeg")]
        if imgmeta_jpeg::Jpeg::is_filetype(&data) {
            let jpeg = imgmeta_jpeg::Jpeg::new(data).map_err(|x| x.map_err(Error::Jpeg))?;
            return Ok(Self::Jpeg(jpeg));
        }

        Err(ErrorWithData::new(Error::NoSupportedFiletypeFound, data))
    }

    /// Tag of the format the image decoded as
    pub fn format(&self) -> Format {
        match *self {
            #[cfg(feature = "png")]
            Self::Png(_) => Format::Png,
            #[cfg(feature = "jpeg")]
            Self::Jpeg(_) => Format::Jpeg,
        }
    }

    /// Metadata attached to the image by the decode step
    ///
    /// Pairs are ordered the way the decode step inserted them and keys are
    /// unique within one image.
    pub fn info(&self) -> Vec<Entry> {
        match *self {
            #[cfg(feature = "png")]
            Self::Png(ref png) => png.info(),
            #[cfg(feature = "jpeg")]
            Self::Jpeg(ref jpeg) => jpeg.info(),
        }
    }

    /// Decoded text chunks for images that support them
    ///
    /// `Some` exactly for the PNG variant, even when the list is empty.
    /// Formats without a notion of text chunks give `None`.
    #[cfg(feature = "png")]
    pub fn text_chunks(&self) -> Option<Vec<imgmeta_png::TextChunk>> {
        match *self {
            Self::Png(ref png) => Some(png.text_chunks()),
            #[cfg(feature = "jpeg")]
            Self::Jpeg(_) => None,
        }
    }

    /// Convert into raw data
    pub fn into_inner(self) -> Vec<u8> {
        match self {
            #[cfg(feature = "png")]
            Self::Png(png) => png.into_inner(),
            #[cfg(feature = "jpeg")]
            Self::Jpeg(jpeg) => jpeg.into_inner(),
        }
    }
}
