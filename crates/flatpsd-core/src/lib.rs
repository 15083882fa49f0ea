/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the flatpsd decoder
//!
//! It currently contains
//!
//! - A big endian bytestream reader over in-memory buffers
//! - Colorspace information for decoded images
//! - Decoder options
//! - A logging facade that can be compiled out
//!
//! This library is `#[no_std]` with `alloc` needed for defining `Vec`
//! and `String` which we need for storing decoded bytes.
//!
//! # Features
//!  - `std`: Enables readers for `std::io::Cursor` and `std::error::Error`
//!     implementations.
//!
//!  - `log`: Forwards the logging macros to the [`log`](https://docs.rs/log) crate.
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod bytestream;
pub mod colorspace;
pub mod log;
pub mod options;
pub mod serde;
