/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::string::String;
use alloc::vec;
use core::fmt::{Debug, Display, Formatter};

use crate::bytestream::ByteReaderTrait;

/// Errors that can occur when reading from a byte source
pub enum ByteIoError {
    #[cfg(feature = "std")]
    StdIoError(std::io::Error),
    TryFromIntError(core::num::TryFromIntError),
    /// The source ran out before a read could be satisfied
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes requested
    /// - 2nd argument is number of bytes actually left
    NotEnoughBytes(usize, usize),
    Generic(&'static str)
}

impl Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            ByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {}", err)
            }
            ByteIoError::TryFromIntError(err) => {
                writeln!(f, "Cannot convert to int {}", err)
            }
            ByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(
                    f,
                    "Unexpected end of data, expected {expected} bytes but only {found} remain"
                )
            }
            ByteIoError::Generic(err) => {
                writeln!(f, "Generic I/O error: {err}")
            }
        }
    }
}

impl Display for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ByteIoError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for ByteIoError {
    fn from(value: std::io::Error) -> Self {
        ByteIoError::StdIoError(value)
    }
}

impl From<core::num::TryFromIntError> for ByteIoError {
    fn from(value: core::num::TryFromIntError) -> Self {
        ByteIoError::TryFromIntError(value)
    }
}

impl From<&'static str> for ByteIoError {
    fn from(value: &'static str) -> Self {
        ByteIoError::Generic(value)
    }
}

/// A big endian reader over a byte source
///
/// Every read either fully succeeds or returns
/// [`ByteIoError::NotEnoughBytes`], there are no reads that silently
/// return zero at the end of the stream.
pub struct ByteReader<T: ByteReaderTrait> {
    inner: T
}

impl<T: ByteReaderTrait> ByteReader<T> {
    pub fn new(source: T) -> ByteReader<T> {
        ByteReader { inner: source }
    }
    /// Destroy this reader returning
    /// the underlying source of the bytes
    /// from which we were decoding
    #[inline(always)]
    pub fn consume(self) -> T {
        self.inner
    }

    #[inline(always)]
    pub fn skip(&mut self, num: usize) -> Result<(), ByteIoError> {
        self.inner.skip_bytes(num)
    }

    #[inline(always)]
    pub fn get_u8_err(&mut self) -> Result<u8, ByteIoError> {
        let mut buf = [0];
        self.inner.read_const_bytes(&mut buf)?;
        Ok(buf[0])
    }

    #[inline(always)]
    pub fn read_fixed_bytes_or_error<const N: usize>(&mut self) -> Result<[u8; N], ByteIoError> {
        let mut byte_store: [u8; N] = [0; N];
        self.inner.read_const_bytes(&mut byte_store)?;
        Ok(byte_store)
    }

    #[inline]
    pub fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        self.inner.read_exact_bytes(buf)
    }

    /// Return true if the source has at least `num` more bytes
    #[inline(always)]
    pub fn has(&self, num: usize) -> bool {
        self.inner.remaining_bytes() >= num
    }

    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.inner.remaining_bytes()
    }

    #[inline(always)]
    pub fn position(&self) -> u64 {
        self.inner.z_position()
    }

    /// Read a length prefixed big endian UTF-16 string
    ///
    /// The length is a `u32` count of UTF-16 code units, so `length*2`
    /// bytes follow it. Unpaired surrogates are replaced with
    /// [`char::REPLACEMENT_CHARACTER`].
    pub fn read_pascal_unicode(&mut self) -> Result<String, ByteIoError> {
        let length = usize::try_from(self.get_u32_be_err()?)?;
        let byte_length = length
            .checked_mul(2)
            .ok_or(ByteIoError::Generic("Unicode string length overflows"))?;

        // check before allocating, the length comes from the file
        if !self.has(byte_length) {
            return Err(ByteIoError::NotEnoughBytes(byte_length, self.remaining()));
        }
        let mut data = vec![0; byte_length];
        self.read_exact_bytes(&mut data)?;

        let units = data
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));

        Ok(char::decode_utf16(units)
            .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect())
    }
}

macro_rules! get_single_type {
    ($name:tt,$int_type:tt) => {
        impl<T: ByteReaderTrait> ByteReader<T> {
            #[doc=concat!("Read ",stringify!($int_type)," as a big endian integer")]
            #[doc=concat!("Returning an error if the underlying buffer cannot support a ",stringify!($int_type)," read.")]
            #[inline]
            pub fn $name(&mut self) -> Result<$int_type, ByteIoError> {
                const SIZE_OF_VAL: usize = core::mem::size_of::<$int_type>();

                let mut space = [0; SIZE_OF_VAL];

                self.inner.read_const_bytes(&mut space)?;

                Ok($int_type::from_be_bytes(space))
            }
        }
    };
}

get_single_type!(get_u16_be_err, u16);
get_single_type!(get_i16_be_err, i16);
get_single_type!(get_u32_be_err, u32);
