#![doc = include_str!("../README.md")]

mod chunk;
mod chunk_type;
mod error;
mod ihdr;
mod png;
mod text;

pub use chunk::*;
pub use chunk_type::*;
pub use error::*;
pub use ihdr::*;
pub use png::*;
pub use text::*;
