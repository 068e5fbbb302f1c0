#![doc = include_str!("../README.md")]

mod error;
mod segments;

pub use error::*;
pub use segments::*;

use std::io::Cursor;
use std::ops::Range;

use imgmeta_common::error::ErrorWithData;
use imgmeta_common::image::ImageFormat;
use imgmeta_common::info::{Entry, Value};
use imgmeta_common::math::*;
use imgmeta_common::read::ReadExt;

pub const MAGIC_BYTES: [u8; 2] = [0xFF, 0xD8];
pub const MARKER_START: u8 = 0xFF;

pub const EXIF_IDENTIFIER_STRING: &[u8] = b"Exif\0\0";
pub const ICC_IDENTIFIER_STRING: &[u8] = b"ICC_PROFILE\0";
pub const JFIF_IDENTIFIER_STRING: &[u8] = b"JFIF\0";

/// Representation of a JPEG image
#[derive(Debug, Clone)]
pub struct Jpeg {
    /// Raw data
    pub(crate) data: Vec<u8>,
    /// Segments in the order in which they appear in the data
    pub(crate) segments: Vec<RawSegment>,
}

impl Jpeg {
    /// Returns JPEG image representation
    ///
    /// * `data`: JPEG image data starting with the `SOI` marker
    pub fn new(data: Vec<u8>) -> Result<Self, ErrorWithData<Error>> {
        match Self::find_segments(&data) {
            Ok(segments) => Ok(Self { data, segments }),
            Err(err) => Err(ErrorWithData::new(err, data)),
        }
    }

    /// Checks if passed data start with the `SOI` marker
    pub fn is_filetype(data: &[u8]) -> bool {
        data.starts_with(&MAGIC_BYTES)
    }

    /// Convert into raw data
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// List all segments in their order of appearance
    pub fn segments(&self) -> Vec<Segment> {
        self.segments.iter().map(|x| x.segment(self)).collect()
    }

    /// List all segments with the given marker
    pub fn segments_marker(&self, marker: Marker) -> impl Iterator<Item = Segment<'_>> + '_ {
        self.segments
            .iter()
            .filter(move |x| x.marker == marker)
            .map(|x| x.segment(self))
    }

    /// Exif segments
    pub fn exif(&self) -> impl Iterator<Item = Segment<'_>> + '_ {
        self.segments_marker(Marker::APP1)
            .filter(|x| x.data().starts_with(EXIF_IDENTIFIER_STRING))
    }

    /// Raw Exif payloads without the identifier prefix
    pub fn exif_data(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.exif()
            .filter_map(|x| x.data().get(EXIF_IDENTIFIER_STRING.len()..))
    }

    /// Total payload of all ICC profile segments
    ///
    /// The identifier and the two chunk counter bytes do not count towards
    /// the payload.
    pub fn icc_profile_size(&self) -> usize {
        self.segments_marker(Marker::APP2)
            .filter(|x| x.data().starts_with(ICC_IDENTIFIER_STRING))
            .map(|x| {
                x.data()
                    .len()
                    .saturating_sub(ICC_IDENTIFIER_STRING.len())
                    .saturating_sub(2)
            })
            .sum()
    }

    /// Metadata attached to the image by the decode step
    ///
    /// Entries follow the order of the segments they were read from. Keys
    /// are unique; a repeated segment does not override the first
    /// occurrence.
    pub fn info(&self) -> Vec<Entry> {
        let mut entries: Vec<Entry> = Vec::new();

        for segment in self.segments() {
            let marker = segment.marker();
            let data = segment.data();

            match marker {
                m if m.is_frame_header() => {
                    if contains_key(&entries, "width") {
                        continue;
                    }

                    match Sof::from_data(data) {
                        Ok(sof) => {
                            entries.push(("width".into(), sof.width.into()));
                            entries.push(("height".into(), sof.height.into()));
                            entries.push(("bit depth".into(), sof.precision.into()));
                            entries.push(("color components".into(), sof.components.into()));
                            if marker == Marker::SOF2 {
                                entries.push(("progressive".into(), 1_u32.into()));
                            }
                        }
                        Err(err) => tracing::warn!("Skipping broken frame header: {err}"),
                    }
                }
                Marker::APP0 if data.starts_with(JFIF_IDENTIFIER_STRING) => {
                    if contains_key(&entries, "jfif version") {
                        continue;
                    }

                    match Jfif::from_data(data) {
                        Ok(jfif) => {
                            entries.push((
                                "jfif version".into(),
                                Value::UIntPair(
                                    jfif.version_major.into(),
                                    jfif.version_minor.into(),
                                ),
                            ));
                            match jfif.density.dots_per_inch() {
                                Some((x, y)) => {
                                    entries.push(("dpi".into(), Value::FloatPair(x, y)))
                                }
                                None => entries.push((
                                    "aspect".into(),
                                    Value::UIntPair(
                                        jfif.density.x.into(),
                                        jfif.density.y.into(),
                                    ),
                                )),
                            }
                        }
                        Err(err) => tracing::warn!("Skipping broken JFIF segment: {err}"),
                    }
                }
                Marker::APP1 if data.starts_with(EXIF_IDENTIFIER_STRING) => {
                    if !contains_key(&entries, "exif") {
                        let len = data.len().saturating_sub(EXIF_IDENTIFIER_STRING.len());
                        entries.push(("exif".into(), Value::Bytes(len)));
                    }
                }
                Marker::APP2 if data.starts_with(ICC_IDENTIFIER_STRING) => {
                    if !contains_key(&entries, "icc profile") {
                        entries.push(("icc profile".into(), Value::Bytes(self.icc_profile_size())));
                    }
                }
                Marker::COM => {
                    if !contains_key(&entries, "comment") {
                        entries.push((
                            "comment".into(),
                            Value::Text(String::from_utf8_lossy(data).into_owned()),
                        ));
                    }
                }
                _ => (),
            }
        }

        entries
    }

    /// List all segments in the data
    ///
    /// Stops behind the `SOS` segment header. The entropy-coded data that
    /// follow it are not parsed.
    fn find_segments(data: &[u8]) -> Result<Vec<RawSegment>, Error> {
        let mut cur = Cursor::new(data);

        let magic_bytes: [u8; MAGIC_BYTES.len()] =
            cur.read_array().map_err(|_| Error::UnexpectedEof)?;
        if magic_bytes != MAGIC_BYTES {
            return Err(Error::InvalidMagicBytes(magic_bytes.to_vec()));
        }

        let mut segments = Vec::new();
        loop {
            let position = cur.position();
            let marker_data: [u8; 2] = cur.read_array().map_err(|_| Error::UnexpectedEof)?;

            if marker_data[0] != MARKER_START {
                return Err(Error::ExpectedMarker {
                    position,
                    found: marker_data[0],
                });
            }

            let marker = Marker::from(marker_data[1]);
            tracing::debug!("Found {marker:?} segment");

            if marker == Marker::EOI {
                return Err(Error::UnexpectedEndOfImage);
            }

            // Two length bytes follow the marker and count themselves
            let length = u16::from_be_bytes(cur.read_array().map_err(|_| Error::UnexpectedEof)?);
            let payload = length
                .usize()?
                .checked_sub(2)
                .ok_or(Error::InvalidSegmentLength(length))?;

            let data_start = cur.position().usize()?;
            let data_end = data_start.safe_add(payload)?;

            if data.get(data_start..data_end).is_none() {
                return Err(Error::UnexpectedEof);
            }

            segments.push(RawSegment {
                marker,
                data: data_start..data_end,
            });

            if marker == Marker::SOS {
                break;
            }
            cur.set_position(data_end.u64()?);
        }

        Ok(segments)
    }
}

impl ImageFormat for Jpeg {
    fn is_filetype(data: &[u8]) -> bool {
        Jpeg::is_filetype(data)
    }
}

fn contains_key(entries: &[Entry], key: &str) -> bool {
    entries.iter().any(|(existing, _)| existing == key)
}

/// View into one segment of a [`Jpeg`]
#[derive(Debug)]
pub struct Segment<'a> {
    marker: Marker,
    data_location: Range<usize>,
    jpeg: &'a Jpeg,
}

impl<'a> Segment<'a> {
    pub fn marker(&self) -> Marker {
        self.marker
    }

    pub fn data(&self) -> &'a [u8] {
        self.jpeg
            .data
            .get(self.data_location.clone())
            .unwrap_or_default()
    }
}

/// Location of a segment within the JPEG data
#[derive(Debug, Clone)]
pub(crate) struct RawSegment {
    marker: Marker,
    data: Range<usize>,
}

impl RawSegment {
    fn segment<'a>(&self, jpeg: &'a Jpeg) -> Segment<'a> {
        Segment {
            marker: self.marker,
            data_location: self.data.clone(),
            jpeg,
        }
    }
}

imgmeta_common::utils::convertible_enum!(
    #[repr(u8)]
    #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
    #[non_exhaustive]
    pub enum Marker {
        /// Baseline frame header
        SOF0 = 0xC0,
        SOF1 = 0xC1,
        /// Progressive frame header
        SOF2 = 0xC2,
        SOF3 = 0xC3,
        /// Define Huffman table
        DHT = 0xC4,
        /// Start of image
        SOI = 0xD8,
        /// End of image
        EOI = 0xD9,
        /// Start of scan
        SOS = 0xDA,
        /// Define quantization table
        DQT = 0xDB,
        /// Define restart interval
        DRI = 0xDD,
        /// JFIF
        APP0 = 0xE0,
        /// Exif, XMP
        APP1 = 0xE1,
        /// ICC color profile
        APP2 = 0xE2,
        /// Photoshop IRB
        APP13 = 0xED,
        /// Adobe
        APP14 = 0xEE,
        /// Comment
        COM = 0xFE,
    }
);

impl Marker {
    /// Whether this marker starts a frame header segment
    pub fn is_frame_header(self) -> bool {
        matches!(self, Self::SOF0 | Self::SOF1 | Self::SOF2 | Self::SOF3)
    }
}
