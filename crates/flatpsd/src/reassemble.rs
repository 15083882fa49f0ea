/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Planar to interleaved conversion
//!
//! PSD stores each channel as a separate plane, we hand out
//! `R,G,B[,A]` per pixel.

use alloc::vec;
use alloc::vec::Vec;

use crate::errors::PSDDecodeErrors;

/// Scale a color sample by alpha
///
/// This divides by 256 and truncates, so full alpha maps 255 to 254.
#[inline(always)]
const fn premultiply(color: u8, alpha: u8) -> u8 {
    ((color as u16 * alpha as u16) / 256) as u8
}

/// Interleave `channels` planes of `width * height` bytes each
///
/// When `premultiply_alpha` is set and there are four channels, R, G and B
/// are scaled by the alpha of their pixel, alpha itself is copied through.
/// Every pixel, including those of the last row, is written.
///
/// # Errors
/// - `planar` is not `width * height * channels` bytes long
/// - `channels` is not 3 or 4
pub fn interleave_planes(
    planar: &[u8], width: usize, height: usize, channels: usize, premultiply_alpha: bool
) -> Result<Vec<u8>, PSDDecodeErrors> {
    let stride = width
        .checked_mul(height)
        .ok_or(PSDDecodeErrors::Generic("Image dimensions overflow"))?;

    if stride.checked_mul(channels) != Some(planar.len()) {
        return Err(PSDDecodeErrors::Generic(
            "Planar buffer length does not match image dimensions"
        ));
    }

    let mut output = vec![0; planar.len()];

    match channels {
        3 => {
            let (c1, rest) = planar.split_at(stride);
            let (c2, c3) = rest.split_at(stride);

            c1.iter()
                .zip(c2)
                .zip(c3)
                .zip(output.chunks_exact_mut(3))
                .for_each(|(((r, g), b), dst)| {
                    dst[0] = *r;
                    dst[1] = *g;
                    dst[2] = *b;
                });
        }
        4 => {
            let (c1, rest) = planar.split_at(stride);
            let (c2, rest) = rest.split_at(stride);
            let (c3, c4) = rest.split_at(stride);

            let pixels = c1
                .iter()
                .zip(c2)
                .zip(c3)
                .zip(c4)
                .zip(output.chunks_exact_mut(4));

            if premultiply_alpha {
                pixels.for_each(|((((r, g), b), a), dst)| {
                    dst[0] = premultiply(*r, *a);
                    dst[1] = premultiply(*g, *a);
                    dst[2] = premultiply(*b, *a);
                    dst[3] = *a;
                });
            } else {
                pixels.for_each(|((((r, g), b), a), dst)| {
                    dst[0] = *r;
                    dst[1] = *g;
                    dst[2] = *b;
                    dst[3] = *a;
                });
            }
        }
        n => {
            return Err(PSDDecodeErrors::UnsupportedChannelCount(
                u16::try_from(n).unwrap_or(u16::MAX)
            ))
        }
    }
    Ok(output)
}
