// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Embedding capacity estimation.
//!
//! Each channel of each pixel carries one bit, and the first 24 of those bits
//! hold the length header. These helpers let a caller pick a large enough
//! cover image before running the full encode.

use crate::huffman::{FrequencyTable, HuffmanTree};
use crate::stego::error::StegoError;
use crate::stego::pixels::PixelBuffer;
use crate::stego::{CHANNELS_PER_PIXEL, HEADER_BITS, MAX_PAYLOAD_BITS};

/// Total LSB slots (bits) in an image with `pixel_count` pixels.
pub fn capacity_bits(pixel_count: usize) -> usize {
    pixel_count.saturating_mul(CHANNELS_PER_PIXEL)
}

/// Largest payload, in bits, that fits next to the header.
///
/// Capped at [`MAX_PAYLOAD_BITS`], the largest length the header can express.
pub fn max_payload_bits(pixel_count: usize) -> usize {
    capacity_bits(pixel_count)
        .saturating_sub(HEADER_BITS)
        .min(MAX_PAYLOAD_BITS)
}

/// Smallest pixel count that can hold a payload of `payload_bits` bits.
pub fn required_pixels(payload_bits: usize) -> usize {
    (HEADER_BITS + payload_bits + CHANNELS_PER_PIXEL - 1) / CHANNELS_PER_PIXEL
}

/// Huffman-encoded length of `text` in bits, without touching any pixels.
///
/// # Errors
/// [`StegoError::Huffman`] with `EmptyInput` if `text` is empty.
pub fn estimate_compressed_bits(text: &[u8]) -> Result<usize, StegoError> {
    let freq = FrequencyTable::tally(text)?;
    let codes = HuffmanTree::build(&freq)?.code_table();
    // Every counted symbol is in a table built from the same counts.
    let bits = codes.encoded_len(&freq).unwrap_or(u64::MAX);
    Ok(usize::try_from(bits).unwrap_or(usize::MAX))
}

/// Returns `true` if `text` would fit into `pixels` after compression.
pub fn fits(text: &[u8], pixels: &PixelBuffer) -> Result<bool, StegoError> {
    let bits = estimate_compressed_bits(text)?;
    Ok(bits <= max_payload_bits(pixels.pixel_count()))
}
