/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A big endian bytestream reader
//!
//! PSD stores every multi-byte integer most significant byte first,
//! so this only exposes big endian reads, independent of the host byte order.
//!
//! The entry points are [`ByteCursor`], an in-memory source and
//! [`ByteReader`] which wraps any [`ByteReaderTrait`] implementation and
//! provides typed reads.
pub use cursor::ByteCursor;
pub use reader::{ByteIoError, ByteReader};
pub use traits::ByteReaderTrait;

mod cursor;
mod reader;
mod traits;
