// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! LSB embedding and extraction.
//!
//! Bit `i` of `header ‖ payload` replaces the least-significant bit of flat
//! channel slot `i`, i.e. channel `i % 3` of pixel `i / 3` in row-major
//! order. The upper 7 bits of every channel and all slots past the payload
//! are left untouched.
//!
//! With the `parallel` feature the slot reads and writes go through Rayon;
//! output is identical to the serial path.

use crate::huffman::Bitstring;
use crate::stego::capacity::capacity_bits;
use crate::stego::error::StegoError;
use crate::stego::header::{build_header, parse_header};
use crate::stego::pixels::PixelBuffer;
use crate::stego::HEADER_BITS;

/// Write the length header followed by `payload` into the pixel LSBs.
///
/// Size checks happen before anything is written: on error the buffer is
/// unchanged.
///
/// # Errors
/// - [`StegoError::PayloadTooLarge`] if the length does not fit in 24 bits.
/// - [`StegoError::Capacity`] if `24 + payload.len()` exceeds `3 × pixels`.
pub fn embed(pixels: &mut PixelBuffer, payload: &Bitstring) -> Result<(), StegoError> {
    let header = build_header(payload.len())?;
    let required = HEADER_BITS + payload.len();
    let available = capacity_bits(pixels.pixel_count());
    if required > available {
        return Err(StegoError::Capacity { required, available });
    }

    let (header_slots, payload_slots) = pixels.channels_mut().split_at_mut(HEADER_BITS);
    write_lsbs(header_slots, header.as_bits());
    write_lsbs(&mut payload_slots[..payload.len()], payload.as_bits());

    log::debug!("embedded {required} of {available} LSB slots");
    Ok(())
}

/// Read the length header and return the payload bits that follow it.
///
/// # Errors
/// - [`StegoError::ImageTooSmall`] if the image has fewer than 24 slots.
/// - [`StegoError::CorruptHeader`] if the declared length runs past the end
///   of the image.
pub fn extract(pixels: &PixelBuffer) -> Result<Bitstring, StegoError> {
    let slots = pixels.channels();
    if slots.len() < HEADER_BITS {
        return Err(StegoError::ImageTooSmall);
    }

    let declared = parse_header(&read_lsbs(&slots[..HEADER_BITS]))?;
    let available = slots.len() - HEADER_BITS;
    if declared > available {
        return Err(StegoError::CorruptHeader { declared, available });
    }

    log::debug!("extracting {declared} payload bits");
    let payload = read_lsbs(&slots[HEADER_BITS..HEADER_BITS + declared]);
    Ok(Bitstring::from_bits(payload))
}

#[cfg(not(feature = "parallel"))]
fn write_lsbs(slots: &mut [u8], bits: &[u8]) {
    debug_assert_eq!(slots.len(), bits.len());
    for (slot, &bit) in slots.iter_mut().zip(bits) {
        *slot = (*slot & 0xFE) | bit;
    }
}

#[cfg(feature = "parallel")]
fn write_lsbs(slots: &mut [u8], bits: &[u8]) {
    use rayon::prelude::*;
    debug_assert_eq!(slots.len(), bits.len());
    slots
        .par_iter_mut()
        .zip(bits.par_iter())
        .for_each(|(slot, &bit)| *slot = (*slot & 0xFE) | bit);
}

#[cfg(not(feature = "parallel"))]
fn read_lsbs(slots: &[u8]) -> Vec<u8> {
    slots.iter().map(|&s| s & 1).collect()
}

#[cfg(feature = "parallel")]
fn read_lsbs(slots: &[u8]) -> Vec<u8> {
    use rayon::prelude::*;
    slots.par_iter().map(|&s| s & 1).collect()
}
