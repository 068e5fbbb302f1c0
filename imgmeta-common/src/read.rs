use std::io::{Cursor, Seek};

use crate::math::*;

/// Fixed-size reads on top of [`std::io::Read`]
pub trait ReadExt: std::io::BufRead + std::io::Seek {
    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ReadError> {
        let buf = &mut [0; N];
        self.read_exact(buf)?;
        Ok(*buf)
    }

    fn read_byte(&mut self) -> Result<u8, ReadError> {
        Ok(self.read_array::<1>()?[0])
    }
}

impl<T: AsRef<[u8]>> ReadExt for Cursor<T> {}

pub trait SliceExt<'a>: std::io::BufRead + std::io::Seek {
    fn slice_until(&mut self, byte: u8) -> Result<&'a [u8], ReadError>;
    fn slice_to_end(&mut self) -> Result<&'a [u8], ReadError>;
}

impl<'a> SliceExt<'a> for Cursor<&'a [u8]> {
    /// Returns the data up to the next occurrence of `byte` as slice
    ///
    /// The cursor is left behind the terminating `byte`. Without a
    /// terminator, the remaining data are returned and the cursor ends up
    /// past the end.
    ///
    /// ```
    /// # use std::io::Cursor;
    /// # use imgmeta_common::read::*;
    /// let mut s = Cursor::new(b"Title\0A value".as_slice());
    /// assert_eq!(s.slice_until(b'\0').unwrap(), b"Title");
    /// assert_eq!(s.slice_to_end().unwrap(), b"A value");
    /// ```
    fn slice_until(&mut self, byte: u8) -> Result<&'a [u8], ReadError> {
        let start = self.position().usize()?;
        let data: &'a [u8] = *self.get_ref();

        let len = data
            .iter()
            .skip(start)
            .position(|x| *x == byte)
            .unwrap_or_else(|| data.len().saturating_sub(start));

        let end = start.safe_add(len)?;
        self.seek_relative(len.safe_add(1)?.i64()?)?;

        data.get(start..end).ok_or(ReadError::OutOfBounds)
    }

    /// Returns all remaining data as slice
    fn slice_to_end(&mut self) -> Result<&'a [u8], ReadError> {
        let start = self.position().usize()?;
        let data: &'a [u8] = *self.get_ref();

        self.seek(std::io::SeekFrom::End(0))?;

        data.get(start..).ok_or(ReadError::OutOfBounds)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("Math: {0}")]
    Math(#[from] MathError),
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Position outside of the data")]
    OutOfBounds,
}
