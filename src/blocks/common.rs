// blocks/common.rs
//! Common types and helper functions for `.sac` block decoding.
//!
//! This module provides:
//! - [`ByteReader`]: bounds-checked little-endian reads from the loaded file
//! - [`LeScalar`]: fixed-width scalars that [`ByteReader`] can decode
//! - [`to_offset`]: conversion of signed on-disk positions to buffer offsets

use crate::{Error, Result};

// ============================================================================
// Scalars
// ============================================================================

/// A fixed-width little-endian scalar stored in a `.sac` file.
pub trait LeScalar: Sized + Copy {
    /// Encoded width in bytes.
    const SIZE: usize;

    /// Decode from exactly [`Self::SIZE`] bytes.
    fn from_le_slice(bytes: &[u8]) -> Self;
}

macro_rules! impl_le_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl LeScalar for $ty {
                const SIZE: usize = core::mem::size_of::<$ty>();

                #[inline]
                fn from_le_slice(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; core::mem::size_of::<$ty>()];
                    raw.copy_from_slice(bytes);
                    <$ty>::from_le_bytes(raw)
                }
            }
        )*
    };
}

impl_le_scalar!(u8, i16, u16, i32, u32, f32);

// ============================================================================
// Byte Reader
// ============================================================================

/// Bounds-checked view over a fully loaded `.sac` file.
///
/// Every read either returns the requested value or
/// [`Error::TruncatedBuffer`]; nothing is clamped or zero-filled.
#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
    bytes: &'a [u8],
}

impl<'a> ByteReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Total number of bytes available.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Borrow `len` raw bytes starting at `offset`.
    pub fn bytes(&self, offset: usize, len: usize) -> Result<&'a [u8]> {
        let truncated = || Error::TruncatedBuffer {
            offset,
            needed: len,
            available: self.bytes.len(),
        };
        let end = offset.checked_add(len).ok_or_else(truncated)?;
        self.bytes.get(offset..end).ok_or_else(truncated)
    }

    /// Read one scalar at `offset`.
    #[inline]
    pub fn read<T: LeScalar>(&self, offset: usize) -> Result<T> {
        Ok(T::from_le_slice(self.bytes(offset, T::SIZE)?))
    }

    /// Read `count` contiguous scalars starting at `offset`.
    ///
    /// The whole range is bounds-checked before anything is allocated.
    pub fn read_array<T: LeScalar>(&self, offset: usize, count: usize) -> Result<Vec<T>> {
        let needed = count.checked_mul(T::SIZE).ok_or(Error::TruncatedBuffer {
            offset,
            needed: usize::MAX,
            available: self.bytes.len(),
        })?;
        let raw = self.bytes(offset, needed)?;
        Ok(raw.chunks_exact(T::SIZE).map(T::from_le_slice).collect())
    }

    /// Read a fixed-width text field of `len` bytes.
    ///
    /// See [`decode_fixed_string`] for the text encoding.
    pub fn read_string(&self, offset: usize, len: usize) -> Result<String> {
        Ok(decode_fixed_string(self.bytes(offset, len)?))
    }
}

// ============================================================================
// Text
// ============================================================================

/// Decode a fixed-width Latin-1 field, dropping trailing NUL padding.
///
/// Latin-1 maps each byte to the code point of the same value, so decoding
/// never fails.
pub fn decode_fixed_string(raw: &[u8]) -> String {
    let end = raw.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    raw[..end].iter().map(|&b| b as char).collect()
}

// ============================================================================
// Offsets
// ============================================================================

/// Convert a signed absolute position into a buffer offset.
///
/// # Arguments
/// * `value` - The computed position (on-disk positions are signed 32-bit).
/// * `context` - Description of what the position addresses (for error messages).
#[inline]
pub fn to_offset(value: i64, context: &'static str) -> Result<usize> {
    usize::try_from(value).map_err(|_| Error::InvalidOffset {
        context,
        offset: value,
    })
}
