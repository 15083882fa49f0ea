/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder options
//!
//! This module exposes a struct holding everything a caller
//! can configure about a decode.

/// Decoder options
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 30000, the largest the PSD format allows
    max_width:         usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 30000, the largest the PSD format allows
    max_height:        usize,
    /// Whether color channels of four channel images are scaled
    /// by alpha when interleaving
    ///
    /// - Default value: false
    premultiply_alpha: bool
}

impl DecoderOptions {
    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }

    /// Return true if color channels should be premultiplied by alpha
    pub const fn get_premultiply_alpha(&self) -> bool {
        self.premultiply_alpha
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    ///
    /// # Arguments
    ///
    /// * `width`:  The maximum width allowed
    ///
    /// returns: DecoderOptions
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    /// # Arguments
    ///
    /// * `height`: The maximum height allowed
    ///
    /// returns: DecoderOptions
    ///
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set whether the R, G and B channels of RGBA images
    /// should be multiplied by alpha during interleaving
    ///
    /// This trades color information of transparent pixels
    /// for the absence of light fringes when compositing over dark
    /// backgrounds with a renderer that expects straight alpha.
    ///
    /// Three channel images are unaffected.
    pub fn set_premultiply_alpha(mut self, yes: bool) -> Self {
        self.premultiply_alpha = yes;
        self
    }
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:         30000,
            max_height:        30000,
            premultiply_alpha: false
        }
    }
}
