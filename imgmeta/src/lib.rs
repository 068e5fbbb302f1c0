#![doc = include_str!("../README.md")]

mod image;

pub use image::*;
pub use imgmeta_common as common;
#[cfg(feature = "jpeg")]
pub use imgmeta_jpeg as jpeg;
#[cfg(feature = "png")]
pub use imgmeta_png as png;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No supported file type found")]
    NoSupportedFiletypeFound,
    #[cfg(feature = "png")]
    #[error("PNG: {0}")]
    Png(imgmeta_png::Error),
    #[cfg(feature = "jpeg")]
    #[error("JPEG: {0}")]
    Jpeg(imgmeta_jpeg::Error),
}

static_assertions::assert_impl_all!(Image: Send, Sync);
