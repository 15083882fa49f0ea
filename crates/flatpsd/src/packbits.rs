/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image data decompression
//!
//! Both paths produce a planar buffer, all of the first channel
//! followed by all of the second and so on.
//! The output length is fixed up front from the header, we never read
//! until the stream runs out since anything after the image data is not ours.

use alloc::vec;
use alloc::vec::Vec;

use flatpsd_core::bytestream::{ByteReader, ByteReaderTrait};
use flatpsd_core::log::trace;

use crate::constants::CompressionMethod;
use crate::errors::PSDDecodeErrors;

/// Read the image data section into a planar buffer of `width*height*channels` bytes
///
/// The stream should be positioned right after the compression code
pub fn decompress_planes<T: ByteReaderTrait>(
    stream: &mut ByteReader<T>, compression: CompressionMethod, height: usize, channels: usize,
    expected: usize
) -> Result<Vec<u8>, PSDDecodeErrors> {
    match compression {
        CompressionMethod::NoCompression => read_raw_planes(stream, expected),
        CompressionMethod::RLE => {
            // The RLE-compressed data is preceded by a 2-byte data count for each row
            // in the data, which we're going to just skip.
            let row_table = height
                .checked_mul(channels)
                .and_then(|rows| rows.checked_mul(2))
                .ok_or(PSDDecodeErrors::Generic("Row table size overflows"))?;

            stream
                .skip(row_table)
                .map_err(|_| PSDDecodeErrors::TruncatedPixelData(expected, 0))?;

            // every two input bytes expand to at most 128 output bytes,
            // reject obviously short inputs before allocating
            if stream.remaining() < expected.div_ceil(128) * 2 {
                return Err(PSDDecodeErrors::TruncatedPixelData(expected, 0));
            }

            let mut planes = vec![0; expected];
            decode_packbits(stream, &mut planes)?;
            Ok(planes)
        }
    }
}

/// Copy exactly `expected` uncompressed bytes from the stream
pub fn read_raw_planes<T: ByteReaderTrait>(
    stream: &mut ByteReader<T>, expected: usize
) -> Result<Vec<u8>, PSDDecodeErrors> {
    if !stream.has(expected) {
        return Err(PSDDecodeErrors::TruncatedPixelData(
            expected,
            stream.remaining()
        ));
    }
    let mut planes = vec![0; expected];
    stream.read_exact_bytes(&mut planes)?;

    Ok(planes)
}

/// Decode a PackBits stream until `output` is full
///
/// Loop until you get the number of unpacked bytes you are expecting:
/// - Read the next source byte into n.
/// - If n is between 0 and 127 inclusive, copy the next n+1 bytes literally.
/// - Else if n is between -127 and -1 inclusive, copy the next byte -n+1 times.
/// - Else if n is -128, noop.
///
/// Rows and channels are packed back to back, the only terminator is
/// the output length.
///
/// # Errors
/// - [`TruncatedPixelData`](PSDDecodeErrors::TruncatedPixelData) if input runs out first
/// - [`BadRle`](PSDDecodeErrors::BadRle) if a run would overflow `output`
pub fn decode_packbits<T: ByteReaderTrait>(
    stream: &mut ByteReader<T>, output: &mut [u8]
) -> Result<(), PSDDecodeErrors> {
    let expected = output.len();
    let mut position = 0;

    let truncated = |produced: usize| PSDDecodeErrors::TruncatedPixelData(expected, produced);

    while position < expected {
        let n = stream.get_u8_err().map_err(|_| truncated(position))? as i8;

        match n {
            -128 => (),
            0..=127 => {
                let len = usize::from(n.unsigned_abs()) + 1;

                let Some(dest) = output.get_mut(position..position + len) else {
                    return Err(PSDDecodeErrors::BadRle);
                };
                stream
                    .read_exact_bytes(dest)
                    .map_err(|_| truncated(position))?;

                position += len;
            }
            _ => {
                let len = usize::from(n.unsigned_abs()) + 1;
                let value = stream.get_u8_err().map_err(|_| truncated(position))?;

                let Some(dest) = output.get_mut(position..position + len) else {
                    return Err(PSDDecodeErrors::BadRle);
                };
                dest.fill(value);

                position += len;
            }
        }
    }
    trace!("Decoded {} PackBits bytes", position);

    Ok(())
}
