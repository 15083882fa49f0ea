/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Traits for reading bytes in flatpsd

use crate::bytestream::reader::ByteIoError;

/// The input trait implemented for byte sources.
///
/// This provides the basic functions needed for heap free I/O
/// for the decoder.
///
/// # Considerations
///
/// If you have an in memory buffer, prefer [`ByteCursor`](crate::bytestream::ByteCursor) over
/// [`Cursor`](std::io::Cursor), the latter is only available with the `std` feature.
pub trait ByteReaderTrait {
    /// Read exact bytes required to fill `buf` or return an error if that isn't possible
    ///
    /// ## Arguments
    ///  - `buf`: Buffer to fill with bytes from the underlying reader
    ///  ## Errors
    /// In case of an error, the implementation should not increment the internal position
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError>;

    /// Read exact bytes required to fill `buf` or return an error if that isn't possible
    ///
    /// This is the same as [`read_exact_bytes`](Self::read_exact_bytes) but implemented as a separate
    /// method to allow some implementations to optimize it to cost fewer instructions
    ///
    ///  ## Errors
    /// In case of an error, the implementation should not increment the internal position
    fn read_const_bytes<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), ByteIoError>;

    /// Advance the position by `num` bytes, discarding them.
    ///
    /// ## Errors
    /// If fewer than `num` bytes remain, returns [`ByteIoError::NotEnoughBytes`]
    /// and leaves the position untouched.
    fn skip_bytes(&mut self, num: usize) -> Result<(), ByteIoError>;

    /// Number of bytes left between the current position and the end of the source
    fn remaining_bytes(&self) -> usize;

    /// Return the current position of the inner cursor.
    fn z_position(&self) -> u64;
}
