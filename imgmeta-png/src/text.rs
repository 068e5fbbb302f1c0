use crate::{Chunk, ChunkType, Error};

/// Decoded textual metadata entry of a PNG
///
/// `tEXt` and `zTXt` values are decoded from Latin-1, `iTXt` values are
/// UTF-8. Compressed values are inflated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct TextChunk {
    pub keyword: String,
    pub text: String,
}

impl TextChunk {
    pub fn from_chunk(chunk: &Chunk, inflate_limit: usize) -> Result<Self, Error> {
        match chunk.chunk_type() {
            ChunkType::tEXt => {
                let (keyword, text) = chunk.text()?;
                Ok(Self {
                    keyword: decode_latin1(keyword),
                    text: decode_latin1(text),
                })
            }
            ChunkType::zTXt => {
                let (keyword, text) = chunk.ztxt(inflate_limit)?;
                Ok(Self {
                    keyword: decode_latin1(keyword),
                    text: decode_latin1(&text),
                })
            }
            ChunkType::iTXt => {
                let itxt = chunk.itxt(inflate_limit)?;
                Ok(Self {
                    keyword: decode_latin1(itxt.keyword),
                    text: itxt.text,
                })
            }
            other => Err(Error::NotATextChunk(other)),
        }
    }
}

/// PNG keywords and `tEXt`/`zTXt` values are defined as Latin-1
pub(crate) fn decode_latin1(data: &[u8]) -> String {
    encoding_rs::mem::decode_latin1(data).into_owned()
}
