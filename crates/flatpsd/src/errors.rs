/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use flatpsd_core::bytestream::ByteIoError;

use crate::constants::{PSD_DEPTH, PSD_IDENTIFIER, PSD_VERSION};

/// Errors that can occur during PSD decoding
///
/// None of these are recoverable, a decode that returns
/// an error produces no pixels.
pub enum PSDDecodeErrors {
    /// The file does not start with `8BPS`, the found bytes are carried
    InvalidSignature([u8; 4]),
    /// The version field is not 1
    UnsupportedVersion(u16),
    /// Bits per channel other than 8
    UnsupportedBitDepth(u16),
    /// We only interleave 3 (RGB) or 4 (RGBA) channels
    UnsupportedChannelCount(u16),
    /// Image dimensions exceed the configured limits
    ///
    /// # Arguments
    /// - 1st argument is the configured maximum
    /// - 2nd argument is the value found in the header
    LargeDimensions(usize, usize),
    ZeroDimensions,
    /// Compression code other than raw (0) or PackBits (1)
    UnsupportedCompression(u16),
    /// A header or section read ran past the end of input
    UnexpectedEndOfData(ByteIoError),
    /// The pixel data ended before the image was complete
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes we expected to produce
    /// - 2nd argument is the number produced before input ran out
    TruncatedPixelData(usize, usize),
    /// A PackBits run would write past the end of the image
    BadRle,
    Generic(&'static str)
}

impl Debug for PSDDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PSDDecodeErrors::InvalidSignature(bytes) => {
                writeln!(
                    f,
                    "Expected {:?} but found {:?}, not a PSD image",
                    PSD_IDENTIFIER, bytes
                )
            }
            PSDDecodeErrors::UnsupportedVersion(version) => {
                writeln!(
                    f,
                    "Unsupported file version {version}, known versions are {PSD_VERSION}"
                )
            }
            PSDDecodeErrors::UnsupportedBitDepth(depth) => {
                writeln!(
                    f,
                    "Unsupported bit depth {depth}, supported depth is {PSD_DEPTH}"
                )
            }
            PSDDecodeErrors::UnsupportedChannelCount(channels) => {
                writeln!(
                    f,
                    "Unsupported channel count {channels}, expected either 3 or 4"
                )
            }
            PSDDecodeErrors::LargeDimensions(supported, found) => {
                writeln!(
                    f,
                    "Too large dimensions, supported {supported} but found {found}"
                )
            }
            PSDDecodeErrors::ZeroDimensions => {
                writeln!(f, "Zero found where not expected")
            }
            PSDDecodeErrors::UnsupportedCompression(method) => {
                writeln!(
                    f,
                    "Unsupported compression method {method}, expected 0 (raw) or 1 (RLE)"
                )
            }
            PSDDecodeErrors::UnexpectedEndOfData(e) => {
                writeln!(f, "Unexpected end of data: {:?}", e)
            }
            PSDDecodeErrors::TruncatedPixelData(expected, found) => {
                writeln!(
                    f,
                    "Truncated pixel data, expected {expected} bytes but input ended after {found}"
                )
            }
            PSDDecodeErrors::BadRle => {
                writeln!(f, "Bad RLE, run extends past the end of the image")
            }
            PSDDecodeErrors::Generic(reason) => {
                writeln!(f, "{reason}")
            }
        }
    }
}

impl Display for PSDDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PSDDecodeErrors {}

impl From<&'static str> for PSDDecodeErrors {
    fn from(r: &'static str) -> Self {
        Self::Generic(r)
    }
}

impl From<ByteIoError> for PSDDecodeErrors {
    fn from(r: ByteIoError) -> Self {
        Self::UnexpectedEndOfData(r)
    }
}
