/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use flatpsd::decode_psd;
use flatpsd::flatpsd_core::bytestream::{ByteCursor, ByteReader};
use flatpsd::packbits::decode_packbits;
use proptest::prelude::*;

mod common;

use common::{interleave_reference, pack_bits, PsdWriter};

/// Byte sequences made of runs, so both record kinds show up
fn runs_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec((any::<u8>(), 1_usize..300), 0..40).prop_map(|runs| {
        runs.into_iter()
            .flat_map(|(value, len)| std::iter::repeat(value).take(len))
            .collect()
    })
}

/// Image dimensions, channel count and matching planar data
fn image_strategy() -> impl Strategy<Value = (u32, u32, u16, Vec<u8>)> {
    (1_u32..24, 1_u32..24, 3_u16..=4).prop_flat_map(|(width, height, channels)| {
        let len = (width * height) as usize * usize::from(channels);
        (
            Just(width),
            Just(height),
            Just(channels),
            prop::collection::vec(any::<u8>(), len)
        )
    })
}

fn unpack(packed: &[u8], len: usize) -> Vec<u8> {
    let mut stream = ByteReader::new(ByteCursor::new(packed));
    let mut out = vec![0; len];
    decode_packbits(&mut stream, &mut out).unwrap();
    assert_eq!(stream.remaining(), 0);
    out
}

proptest! {
    #[test]
    fn prop_packbits_inverts_encode(data in prop::collection::vec(any::<u8>(), 0..2048)) {
        let packed = pack_bits(&data);
        prop_assert_eq!(unpack(&packed, data.len()), data);
    }

    #[test]
    fn prop_packbits_inverts_encode_runs(data in runs_strategy()) {
        let packed = pack_bits(&data);
        prop_assert_eq!(unpack(&packed, data.len()), data);
    }

    #[test]
    fn prop_raw_round_trip((width, height, channels, planar) in image_strategy()) {
        let file = PsdWriter::new(width, height, channels).write(&planar);
        let image = decode_psd(&file, false).unwrap();

        let pixels = (width * height) as usize;
        prop_assert_eq!(image.pixels, interleave_reference(&planar, pixels, usize::from(channels)));
    }

    #[test]
    fn prop_rle_equals_raw((width, height, channels, planar) in image_strategy()) {
        let raw = PsdWriter::new(width, height, channels).write(&planar);
        let rle = PsdWriter::new(width, height, channels).rle().write(&planar);

        prop_assert_eq!(decode_psd(&raw, true).unwrap(), decode_psd(&rle, true).unwrap());
    }

    #[test]
    fn prop_garbage_never_panics(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let _ = decode_psd(&data, true);
    }
}
