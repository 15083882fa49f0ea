/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Logging facade
//!
//! When the `log` feature is enabled these are re-exports of the macros
//! from the [`log`](https://docs.rs/log) crate, otherwise they expand to nothing
//! so that `no_std` builds don't pay for formatting.

#[cfg(feature = "log")]
pub use ::log::{debug, trace};

#[cfg(not(feature = "log"))]
pub use crate::{__debug as debug, __trace as trace};

// #[macro_export] is required to make macros works across crates
// but it always put the macro in the crate root.
// #[doc(hidden)] + "pub use" is a workaround to namespace a macro.

#[cfg(not(feature = "log"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __debug {
    ($($arg:tt)+) => {};
}

#[cfg(not(feature = "log"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __trace {
    ($($arg:tt)+) => {};
}

#[cfg(test)]
mod tests {
    use crate::log::{debug, trace};

    #[test]
    fn macros_accept_format_arguments() {
        let width = 30000;
        trace!("Image width:{}", width);
        debug!("Decompressing {} bytes of image data", width * 3);
    }
}
