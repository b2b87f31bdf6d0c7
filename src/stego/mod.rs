// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Steganographic encoding and decoding in RGB pixel LSBs.
//!
//! A Huffman-compressed message is written, one bit per colour channel, into
//! the least-significant bits of a [`PixelBuffer`], preceded by a 24-bit
//! length header. The code table is not embedded: the caller keeps the
//! [`CodeTable`](crate::huffman::CodeTable) returned by [`encode_message`]
//! and hands its reverse to [`decode_message`].
//!
//! All functions are synchronous and keep no state between calls.

pub mod capacity;
pub mod channel;
pub mod error;
pub mod header;
pub mod pipeline;
pub mod pixels;

pub use error::StegoError;

/// Number of colour channels per pixel (R, G, B). One LSB slot each.
pub const CHANNELS_PER_PIXEL: usize = 3;

/// Width of the payload length header in bits.
pub const HEADER_BITS: usize = 24;

/// Largest payload length the header can express: 2^24 − 1 bits.
pub const MAX_PAYLOAD_BITS: usize = (1 << HEADER_BITS) - 1;

pub use capacity::{capacity_bits, estimate_compressed_bits, fits, max_payload_bits, required_pixels};
pub use channel::{embed, extract};
pub use pipeline::{compression_percent, decode_message, encode_message, DecodedMessage, EncodeReport};
pub use pixels::PixelBuffer;
