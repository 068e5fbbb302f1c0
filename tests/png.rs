mod utils;

use imgmeta_common::datetime::DateTime;
use imgmeta_common::image::ImageFormat;
use imgmeta_common::info::Value;
use imgmeta_png::{ChunkType, ColorType, Error, Interlace, Png};
use utils::*;

#[test]
fn chunks_listed() {
    let png = Png::new(minimal_png(&[])).unwrap();

    let chunk_types: Vec<ChunkType> = png.chunks().iter().map(|x| x.chunk_type()).collect();
    assert_eq!(
        chunk_types,
        [ChunkType::IHDR, ChunkType::IDAT, ChunkType::IEND]
    );
}

#[test]
fn header_info() {
    let png = Png::new(minimal_png(&[])).unwrap();

    let ihdr = png.ihdr();
    assert_eq!(ihdr.width, 1);
    assert_eq!(ihdr.height, 1);
    assert_eq!(ihdr.bit_depth, 8);
    assert_eq!(ihdr.color_type, ColorType::Grayscale);
    assert_eq!(ihdr.interlace, Interlace::None);

    let info = png.info();
    assert_eq!(
        info,
        [
            ("width".to_string(), Value::UInt(1)),
            ("height".to_string(), Value::UInt(1)),
            ("bit depth".to_string(), Value::UInt(8)),
            ("color type".to_string(), Value::Text("grayscale".into())),
        ]
    );
}

#[test]
fn info_follows_chunk_order() {
    let mut phys = Vec::new();
    phys.extend_from_slice(&2835_u32.to_be_bytes());
    phys.extend_from_slice(&2835_u32.to_be_bytes());
    phys.push(1);

    let mut time = Vec::new();
    time.extend_from_slice(&2024_u16.to_be_bytes());
    time.extend_from_slice(&[1, 31, 13, 37, 0]);

    let data = minimal_png(&[
        chunk(b"gAMA", &45455_u32.to_be_bytes()),
        chunk(b"pHYs", &phys),
        chunk(b"bKGD", &0_u16.to_be_bytes()),
        chunk(b"tIME", &time),
    ]);
    let png = Png::new(data).unwrap();

    let info = png.info();
    let keys: Vec<&str> = info.iter().map(|(key, _)| key.as_str()).collect();
    assert_eq!(
        keys,
        [
            "width",
            "height",
            "bit depth",
            "color type",
            "gamma",
            "dpi",
            "background",
            "modification time",
        ]
    );

    assert!(info.contains(&("gamma".into(), Value::Float(f64::from(45455_u32) / 100_000.))));
    let dpi = f64::from(2835_u32) * 0.0254;
    assert!(info.contains(&("dpi".into(), Value::FloatPair(dpi, dpi))));
    assert!(info.contains(&(
        "modification time".into(),
        Value::DateTime(DateTime::from_ymd_hms(2024, 1, 31, 13, 37, 0).unwrap()),
    )));
}

#[test]
fn aspect_without_unit() {
    let mut phys = Vec::new();
    phys.extend_from_slice(&4_u32.to_be_bytes());
    phys.extend_from_slice(&3_u32.to_be_bytes());
    phys.push(0);

    let png = Png::new(minimal_png(&[chunk(b"pHYs", &phys)])).unwrap();

    assert!(png.info().contains(&("aspect".into(), Value::UIntPair(4, 3))));
}

#[test]
fn text_chunks_in_file_order() {
    let data = minimal_png(&[
        text_chunk(b"Title", b"First"),
        ztxt_chunk(b"Comment", b"Second"),
        itxt_chunk(b"Description", "Third"),
    ]);
    let png = Png::new(data).unwrap();

    let text_chunks = png.text_chunks();
    let pairs: Vec<(&str, &str)> = text_chunks
        .iter()
        .map(|x| (x.keyword.as_str(), x.text.as_str()))
        .collect();
    assert_eq!(
        pairs,
        [
            ("Title", "First"),
            ("Comment", "Second"),
            ("Description", "Third"),
        ]
    );
}

#[test]
fn no_text_chunks() {
    let png = Png::new(minimal_png(&[])).unwrap();
    assert!(png.text_chunks().is_empty());
}

#[test]
fn latin1_text() {
    let png = Png::new(minimal_png(&[text_chunk(b"Author", &[b'R', 0xE9, b'e'])])).unwrap();

    let text_chunks = png.text_chunks();
    assert_eq!(text_chunks[0].text, "R\u{e9}e");
}

#[test]
fn broken_text_chunk_skipped() {
    // Valid framing and CRC, but the deflate stream is garbage
    let mut ztxt = b"Comment".to_vec();
    ztxt.push(0);
    ztxt.push(0);
    ztxt.extend_from_slice(&[0xFF, 0xFF, 0xFF]);

    let data = minimal_png(&[chunk(b"zTXt", &ztxt), text_chunk(b"Title", b"kept")]);
    let png = Png::new(data).unwrap();

    let text_chunks = png.text_chunks();
    assert_eq!(text_chunks.len(), 1);
    assert_eq!(text_chunks[0].keyword, "Title");
}

#[test]
fn is_filetype() {
    assert!(Png::is_filetype(&minimal_png(&[])));
    assert!(!Png::is_filetype(b"GIF89a"));
    assert!(<Png as ImageFormat>::is_filetype(&minimal_png(&[])));
}

#[test]
fn invalid_magic_bytes() {
    let err = Png::new(b"JUNKJUNKJUNK".to_vec()).unwrap_err();
    assert!(matches!(err.err(), Error::InvalidMagicBytes(_)));
    assert_eq!(err.into_inner(), b"JUNKJUNKJUNK");
}

#[test]
fn truncated() {
    let mut data = minimal_png(&[]);
    data.truncate(data.len() - 6);

    let err = Png::new(data).unwrap_err();
    assert!(matches!(err.err(), Error::UnexpectedEof));
}

#[test]
fn crc_mismatch_in_critical_chunk() {
    let mut data = minimal_png(&[]);
    // Last byte of the IHDR CRC
    let crc_end = imgmeta_png::MAGIC_BYTES.len() + 8 + ihdr_data().len() + 4;
    data[crc_end - 1] ^= 0xFF;

    let err = Png::new(data).unwrap_err();
    assert!(matches!(
        err.err(),
        Error::CrcMismatch {
            chunk_type: ChunkType::IHDR,
            ..
        }
    ));
}

#[test]
fn crc_mismatch_in_ancillary_chunk_ignored() {
    let mut text = text_chunk(b"Title", b"survives");
    let last = text.len() - 1;
    text[last] ^= 0xFF;

    let png = Png::new(minimal_png(&[text])).unwrap();

    assert_eq!(png.text_chunks()[0].text, "survives");
}

#[test]
fn missing_header() {
    let mut data = Vec::new();
    data.extend_from_slice(&imgmeta_png::MAGIC_BYTES);
    data.extend_from_slice(&chunk(b"IDAT", &[]));
    data.extend_from_slice(&chunk(b"IEND", &[]));

    let err = Png::new(data).unwrap_err();
    assert!(matches!(err.err(), Error::MissingIhdr));
}
