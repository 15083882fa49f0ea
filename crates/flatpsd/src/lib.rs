/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple PSD decoder
//!
//! This crate reads the flattened composite image of a Photoshop PSD file
//! into an interleaved 8 bit RGB or RGBA buffer.
//!
//! ## What it means by simple
//! It does not look at layers, masks, color profiles or image resources, they are skipped.
//! Only 8 bit per channel, version 1 documents with 3 or 4 channels are read, stored either raw
//! or PackBits compressed. Photoshop only writes the composite when "Maximize Compatibility"
//! is checked on save.
//!
//! # Example
//! - Reading a psd file
//! ```no_run
//! use flatpsd::errors::PSDDecodeErrors;
//!
//! fn main() -> Result<(), PSDDecodeErrors> {
//!     let data = std::fs::read("image.psd").unwrap();
//!     let image = flatpsd::decode_psd(&data, true)?;
//!
//!     println!("{}x{} with {} channels", image.width, image.height, image.channels);
//!     Ok(())
//! }
//! ```
//!
//! - With custom options
//! ```no_run
//! use flatpsd::flatpsd_core::bytestream::ByteCursor;
//! use flatpsd::flatpsd_core::options::DecoderOptions;
//! use flatpsd::PSDDecoder;
//!
//! let data = std::fs::read("image.psd").unwrap();
//! let options = DecoderOptions::default().set_max_width(4096);
//! let mut decoder = PSDDecoder::new_with_options(ByteCursor::new(&data), options);
//!
//! decoder.decode_headers().unwrap();
//! let (width, height) = decoder.dimensions().unwrap();
//! let pixels = decoder.decode_raw().unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;
pub extern crate flatpsd_core;

use alloc::vec::Vec;

use flatpsd_core::bytestream::ByteCursor;
use flatpsd_core::colorspace::ColorSpace;
use flatpsd_core::options::DecoderOptions;

pub use crate::constants::CompressionMethod;
pub use crate::decoder::PSDDecoder;
pub use crate::header::PsdHeader;
use crate::errors::PSDDecodeErrors;

mod constants;
pub mod decoder;
pub mod errors;
pub mod header;
pub mod packbits;
pub mod reassemble;

/// A decoded image
///
/// `pixels` holds `width * height * channels` bytes, one `R,G,B[,A]`
/// group per pixel, rows top to bottom.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PsdImage {
    pub pixels:   Vec<u8>,
    pub width:    u32,
    pub height:   u32,
    pub channels: u16
}

impl PsdImage {
    /// RGB for three channels, RGBA for four
    pub fn colorspace(&self) -> Option<ColorSpace> {
        ColorSpace::from_num_components(usize::from(self.channels))
    }
}

/// Decode a PSD file held in memory
///
/// This is a shorthand for a [`PSDDecoder`] over a [`ByteCursor`] with
/// default options and `premultiply_alpha` set as given.
pub fn decode_psd(data: &[u8], premultiply_alpha: bool) -> Result<PsdImage, PSDDecodeErrors> {
    let options = DecoderOptions::default().set_premultiply_alpha(premultiply_alpha);

    PSDDecoder::new_with_options(ByteCursor::new(data), options).decode()
}
