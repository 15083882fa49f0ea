/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! File header and the sections between it and the image data

use flatpsd_core::bytestream::{ByteReader, ByteReaderTrait};
use flatpsd_core::log::debug;

use crate::constants::{PSD_DEPTH, PSD_IDENTIFIER, PSD_VERSION, RESERVED_BYTES};
use crate::errors::PSDDecodeErrors;

/// Size of the fixed header at the start of every PSD file
pub const PSD_HEADER_SIZE: usize = 26;

/// The fixed header of a PSD file
///
/// Signature, version and depth are validated when parsing, so a
/// `PsdHeader` always describes an 8 bit, version 1 document.
///
/// The reserved bytes and the color mode are skipped rather than stored,
/// we don't interpret them.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PsdHeader {
    pub signature:     [u8; 4],
    pub version:       u16,
    pub channel_count: u16,
    pub width:         u32,
    pub height:        u32,
    pub depth:         u16
}

impl PsdHeader {
    /// Read the 26 byte header from `stream`
    ///
    /// Errors are returned as soon as the offending field is read, in file order:
    /// signature, version then depth.
    pub fn parse<T: ByteReaderTrait>(
        stream: &mut ByteReader<T>
    ) -> Result<PsdHeader, PSDDecodeErrors> {
        let signature = stream.read_fixed_bytes_or_error::<4>()?;

        if signature != PSD_IDENTIFIER {
            return Err(PSDDecodeErrors::InvalidSignature(signature));
        }

        let version = stream.get_u16_be_err()?;

        if version != PSD_VERSION {
            return Err(PSDDecodeErrors::UnsupportedVersion(version));
        }

        stream.skip(RESERVED_BYTES)?;

        let channel_count = stream.get_u16_be_err()?;
        // height comes before width on disk
        let height = stream.get_u32_be_err()?;
        let width = stream.get_u32_be_err()?;

        let depth = stream.get_u16_be_err()?;

        if depth != PSD_DEPTH {
            return Err(PSDDecodeErrors::UnsupportedBitDepth(depth));
        }
        // color mode
        stream.skip(2)?;

        Ok(PsdHeader {
            signature,
            version,
            channel_count,
            width,
            height,
            depth
        })
    }

    /// Number of bytes in one decoded image, `width * height * channel_count`
    ///
    /// Returns `None` if that does not fit in a `usize`
    pub fn image_size(&self) -> Option<usize> {
        usize::try_from(self.width)
            .ok()?
            .checked_mul(usize::try_from(self.height).ok()?)?
            .checked_mul(usize::from(self.channel_count))
    }
}

/// Skip the color mode data, image resources and layer and mask sections
///
/// Each is a `u32` length followed by that many bytes, in that order.
/// A length running past the end of the input is an error.
pub fn skip_sections<T: ByteReaderTrait>(
    stream: &mut ByteReader<T>
) -> Result<(), PSDDecodeErrors> {
    for section in ["color mode data", "image resources", "layer and mask"] {
        let length = usize::try_from(stream.get_u32_be_err()?)
            .map_err(|_| PSDDecodeErrors::Generic("Section length does not fit in memory"))?;

        debug!("Skipping {} bytes of {}", length, section);

        stream.skip(length)?;
    }
    Ok(())
}
