/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple PSD reader.
//!
//! This reads the flattened composite stored after the layer section,
//! layers and masks themselves are skipped.
use alloc::vec::Vec;

use flatpsd_core::bytestream::{ByteReader, ByteReaderTrait};
use flatpsd_core::colorspace::ColorSpace;
use flatpsd_core::log::{debug, trace};
use flatpsd_core::options::DecoderOptions;

use crate::constants::CompressionMethod;
use crate::errors::PSDDecodeErrors;
use crate::header::{skip_sections, PsdHeader};
use crate::packbits::decompress_planes;
use crate::reassemble::interleave_planes;
use crate::PsdImage;

/// Where a decoder is in its single pass over the stream
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum DecodeState {
    Start,
    HeadersDecoded,
    ImageDecoded,
    /// A call failed somewhere mid-stream, the position is meaningless now
    Failed
}

/// A simple Photoshop PSD reader.
///
/// Only 8 bit RGB and RGBA documents are supported, and only the
/// composite image, which Photoshop writes when "Maximize Compatibility"
/// is on.
///
/// The stream is read front to back exactly once, so a decoder
/// produces at most one image. After any error, later calls
/// return [`PSDDecodeErrors::Generic`] instead of re-reading from
/// wherever the failure left the stream.
pub struct PSDDecoder<T>
where
    T: ByteReaderTrait
{
    header:      Option<PsdHeader>,
    stream:      ByteReader<T>,
    options:     DecoderOptions,
    compression: CompressionMethod,
    state:       DecodeState
}

impl<T> PSDDecoder<T>
where
    T: ByteReaderTrait
{
    /// Create a new decoder that reads a photoshop encoded file
    /// from `T` and returns pixels
    ///
    /// # Arguments
    /// - data: Data source, it has to implement `ByteReaderTrait`
    pub fn new(data: T) -> PSDDecoder<T> {
        Self::new_with_options(data, DecoderOptions::default())
    }

    /// Creates a new decoder with options that influence decoding routines
    ///
    /// # Arguments
    /// - data: Data source
    /// - options: Custom options for the decoder
    pub fn new_with_options(data: T, options: DecoderOptions) -> PSDDecoder<T> {
        PSDDecoder {
            header: None,
            stream: ByteReader::new(data),
            options,
            compression: CompressionMethod::NoCompression,
            state: DecodeState::Start
        }
    }

    /// Decode headers from the encoded image
    ///
    /// This confirms whether the image is a photoshop image, extracts
    /// width, height and channel count, skips everything up to the image data
    /// and reads the compression method.
    ///
    /// Calling it again after it succeeded is a no-op.
    pub fn decode_headers(&mut self) -> Result<(), PSDDecodeErrors> {
        match self.state {
            DecodeState::HeadersDecoded | DecodeState::ImageDecoded => return Ok(()),
            DecodeState::Failed => {
                return Err(PSDDecodeErrors::Generic(
                    "Decoder already failed, create a new one to retry"
                ))
            }
            DecodeState::Start => ()
        }
        let result = self.decode_headers_inner();

        self.state = match result {
            Ok(()) => DecodeState::HeadersDecoded,
            Err(_) => DecodeState::Failed
        };
        result
    }

    fn decode_headers_inner(&mut self) -> Result<(), PSDDecodeErrors> {
        let header = PsdHeader::parse(&mut self.stream)?;

        if !matches!(header.channel_count, 3 | 4) {
            return Err(PSDDecodeErrors::UnsupportedChannelCount(
                header.channel_count
            ));
        }

        let width = header.width as usize;
        let height = header.height as usize;

        if width > self.options.get_max_width() {
            return Err(PSDDecodeErrors::LargeDimensions(
                self.options.get_max_width(),
                width
            ));
        }

        if height > self.options.get_max_height() {
            return Err(PSDDecodeErrors::LargeDimensions(
                self.options.get_max_height(),
                height
            ));
        }

        if width == 0 || height == 0 {
            return Err(PSDDecodeErrors::ZeroDimensions);
        }

        skip_sections(&mut self.stream)?;

        // find out if data is compressed
        let compression = self.stream.get_u16_be_err()?;

        self.compression = CompressionMethod::from_int(compression)
            .ok_or(PSDDecodeErrors::UnsupportedCompression(compression))?;

        trace!("Image width:{}", width);
        trace!("Image height:{}", height);
        trace!("Channels: {}", header.channel_count);
        trace!("Compression: {:?}", self.compression);

        self.header = Some(header);

        Ok(())
    }

    /// Decode the composite image to interleaved bytes
    ///
    /// # Returns
    /// Ok(bytes): `width*height*channels` bytes, `R,G,B[,A]` per pixel
    /// Err(E): An error if it occurred during decoding
    ///
    /// The image data can only be read once, a second call is an error.
    pub fn decode_raw(&mut self) -> Result<Vec<u8>, PSDDecodeErrors> {
        self.decode_headers()?;

        if self.state == DecodeState::ImageDecoded {
            return Err(PSDDecodeErrors::Generic("Image data was already decoded"));
        }
        let result = self.decode_image_data();

        self.state = match result {
            Ok(_) => DecodeState::ImageDecoded,
            Err(_) => DecodeState::Failed
        };
        result
    }

    fn decode_image_data(&mut self) -> Result<Vec<u8>, PSDDecodeErrors> {
        let header = self
            .header
            .ok_or(PSDDecodeErrors::Generic("Headers not decoded"))?;

        let width = header.width as usize;
        let height = header.height as usize;
        let channels = usize::from(header.channel_count);

        let expected = header
            .image_size()
            .ok_or(PSDDecodeErrors::Generic("Image dimensions overflow"))?;

        debug!("Decompressing {} bytes of image data", expected);

        let planes =
            decompress_planes(&mut self.stream, self.compression, height, channels, expected)?;

        debug!(
            "Interleaving {} channels, premultiply alpha: {}",
            channels,
            self.options.get_premultiply_alpha()
        );

        interleave_planes(
            &planes,
            width,
            height,
            channels,
            self.options.get_premultiply_alpha()
        )
    }

    /// Decode a PSD file extracting the composite image
    /// together with its dimensions and channel count
    pub fn decode(&mut self) -> Result<PsdImage, PSDDecodeErrors> {
        let pixels = self.decode_raw()?;

        let header = self
            .header
            .ok_or(PSDDecodeErrors::Generic("Headers not decoded"))?;

        Ok(PsdImage {
            pixels,
            width: header.width,
            height: header.height,
            channels: header.channel_count
        })
    }

    /// Get image width and height respectively or None if the
    /// headers haven't been decoded
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.header
            .map(|header| (header.width as usize, header.height as usize))
    }

    /// Get image colorspace or None if the
    /// image header hasn't been decoded
    pub fn colorspace(&self) -> Option<ColorSpace> {
        self.header
            .and_then(|header| ColorSpace::from_num_components(usize::from(header.channel_count)))
    }

    /// Get the parsed header or None if the
    /// headers haven't been decoded
    pub const fn header(&self) -> Option<&PsdHeader> {
        self.header.as_ref()
    }

    /// Get the compression method of the image data or None if the
    /// headers haven't been decoded
    pub fn compression(&self) -> Option<CompressionMethod> {
        self.header.map(|_| self.compression)
    }

    /// Get the options this decoder was created with
    pub const fn options(&self) -> &DecoderOptions {
        &self.options
    }
}
