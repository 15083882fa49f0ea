/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(clippy::upper_case_acronyms)]

/// `8BPS`
pub const PSD_IDENTIFIER: [u8; 4] = *b"8BPS";

/// The only file version we read, version 2 is the large document format
pub const PSD_VERSION: u16 = 1;

/// Bits per channel we support
pub const PSD_DEPTH: u16 = 8;

/// Bytes between the version and the channel count
pub const RESERVED_BYTES: usize = 6;

/// How the image data section is stored
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CompressionMethod {
    NoCompression = 0,
    RLE = 1
}

impl CompressionMethod {
    pub fn from_int(int: u16) -> Option<CompressionMethod> {
        match int {
            0 => Some(Self::NoCompression),
            1 => Some(Self::RLE),
            _ => None
        }
    }
}
