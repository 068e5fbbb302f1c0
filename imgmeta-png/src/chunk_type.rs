use std::fmt::Debug;

imgmeta_common::utils::convertible_enum!(
    #[repr(u32)]
    #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
    #[non_exhaustive]
    #[allow(non_camel_case_types)]
    /// Type of a chunk
    ///
    /// The value is stored as big endian [`u32`] of the original byte string.
    pub enum ChunkType {
        /// Header
        IHDR = b(b"IHDR"),
        /// Palette
        PLTE = b(b"PLTE"),
        /// Image data
        IDAT = b(b"IDAT"),
        /// End of file
        IEND = b(b"IEND"),

        /// Background color
        bKGD = b(b"bKGD"),
        /// Primary chromaticities and white point
        cHRM = b(b"cHRM"),
        /// Coding-independent code points
        cICP = b(b"cICP"),
        /// Exif
        eXIf = b(b"eXIf"),
        /// Image gamma
        gAMA = b(b"gAMA"),
        /// Embedded ICC profile
        iCCP = b(b"iCCP"),
        /// International textual data
        iTXt = b(b"iTXt"),
        /// Physical pixel dimensions
        pHYs = b(b"pHYs"),
        /// Significant bits
        sBIT = b(b"sBIT"),
        /// Image uses sRGB color space with the given rendering intent
        sRGB = b(b"sRGB"),
        /// Textual information
        tEXt = b(b"tEXt"),
        /// Image last-modification time
        tIME = b(b"tIME"),
        /// Transparency
        tRNS = b(b"tRNS"),
        /// Compressed textual data
        zTXt = b(b"zTXt"),
    }
);

impl Debug for ChunkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bytes = self.bytes();
        let name = String::from_utf8(bytes.to_vec())
            .ok()
            .and_then(|x| bytes.is_ascii().then_some(x))
            .unwrap_or_else(|| u32::from(*self).to_string());

        match self {
            Self::Unknown(_) => write!(f, "Unknown({name:?})"),
            _ => f.write_str(&name),
        }
    }
}

impl ChunkType {
    /// Returns the byte string of the chunk
    pub fn bytes(self) -> [u8; 4] {
        u32::to_be_bytes(self.into())
    }

    /// Critical chunks have the fifth bit of their first byte cleared
    ///
    /// A decoder must reject files whose critical chunks are damaged,
    /// while damaged ancillary chunks may simply be ignored.
    pub fn is_critical(self) -> bool {
        self.bytes()[0] & 0x20 == 0
    }

    /// Whether this chunk carries textual metadata
    pub fn is_textual(self) -> bool {
        matches!(self, Self::tEXt | Self::zTXt | Self::iTXt)
    }
}

/// Convert bytes to u32
const fn b(d: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*d)
}
