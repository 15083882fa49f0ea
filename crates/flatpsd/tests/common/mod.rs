/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![allow(dead_code)]

use nanorand::{Rng, WyRand};

/// Compress `data` with PackBits
///
/// Runs of two or more equal bytes become repeat records, everything
/// else is grouped into literal records of at most 128 bytes.
pub fn pack_bits(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut i = 0;

    while i < data.len() {
        let mut run = 1;
        while i + run < data.len() && run < 128 && data[i + run] == data[i] {
            run += 1;
        }

        if run >= 2 {
            out.push((1 - run as i16) as i8 as u8);
            out.push(data[i]);
            i += run;
            continue;
        }

        let start = i;
        while i < data.len() && i - start < 128 {
            if i + 1 < data.len() && data[i] == data[i + 1] {
                break;
            }
            i += 1;
        }
        out.push((i - start - 1) as u8);
        out.extend_from_slice(&data[start..i]);
    }
    out
}

/// Builds PSD files in memory
pub struct PsdWriter {
    pub signature:       [u8; 4],
    pub version:         u16,
    pub depth:           u16,
    pub channels:        u16,
    pub width:           u32,
    pub height:          u32,
    pub compression:     u16,
    pub color_mode_data: Vec<u8>,
    pub resources:       Vec<u8>,
    pub layers:          Vec<u8>,
    pub trailing:        Vec<u8>
}

impl PsdWriter {
    pub fn new(width: u32, height: u32, channels: u16) -> PsdWriter {
        PsdWriter {
            signature: *b"8BPS",
            version: 1,
            depth: 8,
            channels,
            width,
            height,
            compression: 0,
            color_mode_data: vec![],
            resources: vec![],
            layers: vec![],
            trailing: vec![]
        }
    }

    pub fn rle(mut self) -> Self {
        self.compression = 1;
        self
    }

    /// Write the header and the three sections, up to and including the compression code
    pub fn write_prelude(&self) -> Vec<u8> {
        let mut out = Vec::new();

        out.extend_from_slice(&self.signature);
        out.extend_from_slice(&self.version.to_be_bytes());
        out.extend_from_slice(&[0; 6]);
        out.extend_from_slice(&self.channels.to_be_bytes());
        out.extend_from_slice(&self.height.to_be_bytes());
        out.extend_from_slice(&self.width.to_be_bytes());
        out.extend_from_slice(&self.depth.to_be_bytes());
        // RGB color mode
        out.extend_from_slice(&3_u16.to_be_bytes());

        for section in [&self.color_mode_data, &self.resources, &self.layers] {
            out.extend_from_slice(&(section.len() as u32).to_be_bytes());
            out.extend_from_slice(section);
        }
        out.extend_from_slice(&self.compression.to_be_bytes());
        out
    }

    /// Write a complete file with `planar` as the image data
    ///
    /// For RLE every row of every channel is packed on its own and the
    /// row length table is filled in, as Photoshop does.
    pub fn write(&self, planar: &[u8]) -> Vec<u8> {
        let mut out = self.write_prelude();

        if self.compression == 1 {
            let row_width = self.width as usize;
            let rows: Vec<Vec<u8>> = planar.chunks(row_width).map(pack_bits).collect();

            for row in &rows {
                out.extend_from_slice(&(row.len() as u16).to_be_bytes());
            }
            for row in &rows {
                out.extend_from_slice(row);
            }
        } else {
            out.extend_from_slice(planar);
        }
        out.extend_from_slice(&self.trailing);
        out
    }
}

/// Interleave planar data the straightforward way
pub fn interleave_reference(planar: &[u8], pixels: usize, channels: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(planar.len());
    for x in 0..pixels {
        for c in 0..channels {
            out.push(planar[c * pixels + x]);
        }
    }
    out
}

/// Random planar data with some runs in it so RLE has something to do
pub fn random_planes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = WyRand::new_seed(seed);
    let mut out = Vec::with_capacity(len);

    while out.len() < len {
        let value = rng.generate::<u8>();
        let run = if rng.generate_range(0_u8..4) == 0 {
            rng.generate_range(2_usize..200)
        } else {
            1
        };
        out.extend(std::iter::repeat(value).take(run.min(len - out.len())));
    }
    out
}
