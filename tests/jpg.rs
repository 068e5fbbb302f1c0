mod utils;

use imgmeta_common::info::Value;
use imgmeta_jpeg::{Error, Jpeg, Marker};
use utils::*;

#[test]
fn segments_listed() {
    let jpeg = Jpeg::new(minimal_jpeg()).unwrap();

    let markers: Vec<Marker> = jpeg.segments().iter().map(|x| x.marker()).collect();
    assert_eq!(
        markers,
        [Marker::APP0, Marker::COM, Marker::SOF0, Marker::SOS]
    );
}

#[test]
fn info_entries() {
    let jpeg = Jpeg::new(minimal_jpeg()).unwrap();

    let info = jpeg.info();
    let keys: Vec<&str> = info.iter().map(|(key, _)| key.as_str()).collect();
    assert_eq!(
        keys,
        [
            "jfif version",
            "dpi",
            "comment",
            "width",
            "height",
            "bit depth",
            "color components",
        ]
    );

    assert!(info.contains(&("jfif version".into(), Value::UIntPair(1, 1))));
    assert!(info.contains(&("dpi".into(), Value::FloatPair(72., 72.))));
    assert!(info.contains(&(
        "comment".into(),
        Value::Text("created with imgmeta".into()),
    )));
    assert!(info.contains(&("width".into(), Value::UInt(1))));
}

#[test]
fn exif_payload() {
    let mut exif = b"Exif\0\0".to_vec();
    exif.extend_from_slice(&[0x4D, 0x4D, 0x00, 0x2A]);

    let mut data = Vec::new();
    data.extend_from_slice(&imgmeta_jpeg::MAGIC_BYTES);
    data.extend_from_slice(&segment(0xE1, &exif));
    data.extend_from_slice(&sof0());
    data.extend_from_slice(&sos());

    let jpeg = Jpeg::new(data).unwrap();

    assert_eq!(jpeg.exif_data().next().unwrap(), [0x4D, 0x4D, 0x00, 0x2A]);
    assert!(jpeg.info().contains(&("exif".into(), Value::Bytes(4))));
}

#[test]
fn is_filetype() {
    assert!(Jpeg::is_filetype(&minimal_jpeg()));
    assert!(!Jpeg::is_filetype(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn invalid_magic_bytes() {
    let err = Jpeg::new(b"no jpeg here".to_vec()).unwrap_err();
    assert!(matches!(err.err(), Error::InvalidMagicBytes(_)));
}

#[test]
fn truncated() {
    let mut data = minimal_jpeg();
    data.truncate(data.len() - 4);

    let err = Jpeg::new(data).unwrap_err();
    assert!(matches!(err.err(), Error::UnexpectedEof));
}

#[test]
fn end_of_image_before_scan() {
    let mut data = Vec::new();
    data.extend_from_slice(&imgmeta_jpeg::MAGIC_BYTES);
    data.extend_from_slice(&jfif_app0());
    data.extend_from_slice(&[0xFF, 0xD9]);

    let err = Jpeg::new(data).unwrap_err();
    assert!(matches!(err.err(), Error::UnexpectedEndOfImage));
}
