//! Sequential binary decoding primitives.
//!
//! The catalog and index files have no internal offset tables in their
//! headers — every field depends on the previous one having been read, so
//! the decoder is strictly forward-only and tracks the number of bytes
//! consumed. Errors carry that position so a bad file can be diagnosed
//! byte-exactly.

use std::io::{self, Read};

use waydb_error::{Result, WaydbError};
use waydb_types::FileOffset;

/// Forward-only reader producing primitive values from a byte stream.
///
/// Failure is always an error, never a default value. The wrapped reader is
/// released when the decoder is dropped or unwrapped, on every exit path.
#[derive(Debug)]
pub struct BinaryDecoder<R> {
    inner: R,
    position: u64,
}

impl<R: Read> BinaryDecoder<R> {
    /// Wrap a reader, starting the position count at zero.
    pub fn new(inner: R) -> Self {
        Self::at(inner, 0)
    }

    /// Wrap a reader whose next byte sits at `position` of the containing
    /// file, so decode errors report absolute offsets.
    pub fn at(inner: R, position: u64) -> Self {
        Self { inner, position }
    }

    /// Bytes consumed so far.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> u64 {
        self.position
    }

    /// Unwrap the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        self.inner.read_exact(buf).map_err(|err| {
            if err.kind() == io::ErrorKind::UnexpectedEof {
                WaydbError::TruncatedStream {
                    offset: self.position,
                }
            } else {
                WaydbError::Io(err)
            }
        })?;
        self.position += buf.len() as u64;
        Ok(())
    }

    /// Read one fixed byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        let mut buf = [0_u8; 1];
        self.fill(&mut buf)?;
        Ok(buf[0])
    }

    /// Read a little-endian fixed-width u32.
    pub fn read_u32_le(&mut self) -> Result<u32> {
        let mut buf = [0_u8; 4];
        self.fill(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    /// Read an unsigned LEB128 varint into 32 bits.
    ///
    /// Encodings beyond 5 groups, or whose 5th group carries payload bits
    /// above bit 31, are rejected as [`WaydbError::VarintOverflow`].
    pub fn read_varuint32(&mut self) -> Result<u32> {
        let start = self.position;
        let mut result: u32 = 0;
        for group in 0..5_u32 {
            let byte = self.read_u8()?;
            let payload = u32::from(byte & 0x7F);
            if group == 4 && (payload > 0x0F || byte & 0x80 != 0) {
                return Err(WaydbError::VarintOverflow { offset: start });
            }
            result |= payload << (group * 7);
            if byte & 0x80 == 0 {
                return Ok(result);
            }
        }
        unreachable!("terminating group returns inside the loop")
    }

    /// Read a zero-terminated UTF-8 string.
    ///
    /// Length is bounded only by the stream; invalid UTF-8 is a corruption
    /// error carrying the string's start offset.
    pub fn read_cstring(&mut self) -> Result<String> {
        let start = self.position;
        let mut bytes = Vec::new();
        loop {
            let byte = self.read_u8()?;
            if byte == 0 {
                break;
            }
            bytes.push(byte);
        }
        String::from_utf8(bytes).map_err(|_| {
            WaydbError::corrupt(format!("invalid UTF-8 in string at offset {start}"))
        })
    }

    /// Read a strict one-byte boolean: 0 is false, 1 is true.
    ///
    /// Any other byte is [`WaydbError::MalformedBoolean`], never coerced.
    pub fn read_bool(&mut self) -> Result<bool> {
        let offset = self.position;
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            value => Err(WaydbError::MalformedBoolean { value, offset }),
        }
    }

    /// Read a compact type id of the given byte width.
    ///
    /// Width 1 is the byte value directly; width 2 is big-endian. Any other
    /// width is a caller mistake, not a file problem.
    pub fn read_compact_type_id(&mut self, width: u8) -> Result<u16> {
        match width {
            1 => Ok(u16::from(self.read_u8()?)),
            2 => {
                let mut buf = [0_u8; 2];
                self.fill(&mut buf)?;
                Ok(u16::from_be_bytes(buf))
            }
            _ => Err(WaydbError::UnsupportedTypeIdWidth { width }),
        }
    }

    /// Read a little-endian 64-bit file offset.
    ///
    /// All eight stored bytes participate in the reconstruction.
    pub fn read_file_offset(&mut self) -> Result<FileOffset> {
        let mut buf = [0_u8; 8];
        self.fill(&mut buf)?;
        Ok(u64::from_le_bytes(buf))
    }
}
