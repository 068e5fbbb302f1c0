#![allow(dead_code)]

/// Framed PNG chunk: length, type, data, CRC over type and data
pub fn chunk(chunk_type: &[u8; 4], data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&u32::try_from(data.len()).unwrap().to_be_bytes());
    out.extend_from_slice(chunk_type);
    out.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    out.extend_from_slice(&hasher.finalize().to_be_bytes());

    out
}

/// 1×1 grayscale IHDR data
pub fn ihdr_data() -> Vec<u8> {
    let mut data = Vec::new();

    // Width and height
    data.extend_from_slice(&1_u32.to_be_bytes());
    data.extend_from_slice(&1_u32.to_be_bytes());
    // Bit depth and color type
    data.push(8);
    data.push(0);
    // Compression, filter, interlace
    data.extend_from_slice(&[0, 0, 0]);

    data
}

/// Minimal PNG with the given chunks between IHDR and IDAT
pub fn minimal_png(extra_chunks: &[Vec<u8>]) -> Vec<u8> {
    let mut data = Vec::new();

    data.extend_from_slice(&imgmeta_png::MAGIC_BYTES);
    data.extend_from_slice(&chunk(b"IHDR", &ihdr_data()));
    for extra in extra_chunks {
        data.extend_from_slice(extra);
    }
    data.extend_from_slice(&chunk(b"IDAT", &[]));
    data.extend_from_slice(&chunk(b"IEND", &[]));

    data
}

/// `tEXt` chunk from keyword and value
pub fn text_chunk(keyword: &[u8], text: &[u8]) -> Vec<u8> {
    let mut data = keyword.to_vec();
    data.push(0);
    data.extend_from_slice(text);

    chunk(b"tEXt", &data)
}

/// `zTXt` chunk with deflated value
pub fn ztxt_chunk(keyword: &[u8], text: &[u8]) -> Vec<u8> {
    let mut data = keyword.to_vec();
    data.push(0);
    // Compression method deflate
    data.push(0);
    data.extend_from_slice(&miniz_oxide::deflate::compress_to_vec_zlib(text, 6));

    chunk(b"zTXt", &data)
}

/// Uncompressed `iTXt` chunk with empty language tag and translated keyword
pub fn itxt_chunk(keyword: &[u8], text: &str) -> Vec<u8> {
    let mut data = keyword.to_vec();
    data.push(0);
    // Uncompressed, compression method deflate
    data.push(0);
    data.push(0);
    // Language tag and translated keyword terminators
    data.push(0);
    data.push(0);
    data.extend_from_slice(text.as_bytes());

    chunk(b"iTXt", &data)
}

/// Framed JPEG segment: marker, length including itself, data
pub fn segment(marker: u8, data: &[u8]) -> Vec<u8> {
    let mut out = vec![0xFF, marker];
    out.extend_from_slice(&u16::try_from(data.len() + 2).unwrap().to_be_bytes());
    out.extend_from_slice(data);
    out
}

/// JFIF `APP0` with version 1.1 and 72 dpi
pub fn jfif_app0() -> Vec<u8> {
    let mut data = b"JFIF\0".to_vec();

    // Version 1.1
    data.push(1);
    data.push(1);
    // Density in dots per inch
    data.push(1);
    data.extend_from_slice(&72_u16.to_be_bytes());
    data.extend_from_slice(&72_u16.to_be_bytes());
    // No thumbnail
    data.push(0);
    data.push(0);

    segment(0xE0, &data)
}

/// Baseline frame header for a 1×1 grayscale image
pub fn sof0() -> Vec<u8> {
    let mut data = Vec::new();

    // Precision
    data.push(8);
    // Height and width
    data.extend_from_slice(&1_u16.to_be_bytes());
    data.extend_from_slice(&1_u16.to_be_bytes());
    // One grayscale component
    data.push(1);
    data.extend_from_slice(&[1, 0x11, 0]);

    segment(0xC0, &data)
}

/// Scan header for a single component
pub fn sos() -> Vec<u8> {
    segment(0xDA, &[1, 1, 0, 0, 0x3F, 0])
}

/// Minimal JFIF JPEG: SOI, APP0, COM, SOF0, SOS
pub fn minimal_jpeg() -> Vec<u8> {
    let mut data = Vec::new();

    data.extend_from_slice(&imgmeta_jpeg::MAGIC_BYTES);
    data.extend_from_slice(&jfif_app0());
    data.extend_from_slice(&segment(0xFE, b"created with imgmeta"));
    data.extend_from_slice(&sof0());
    data.extend_from_slice(&sos());

    data
}
