// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Error types for the steganography pipeline.
//!
//! [`StegoError`] covers all failure modes from Huffman coding through LSB
//! embedding and extraction. Every variant is fatal; an incomplete code at the
//! end of an extracted stream is reported on the decoded result instead.

use core::fmt;

use crate::huffman::error::HuffmanError;

/// Errors that can occur during steganographic encoding or decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// Building or applying the Huffman code failed.
    Huffman(HuffmanError),
    /// Header plus payload need more LSB slots than the image has.
    Capacity { required: usize, available: usize },
    /// The payload length does not fit in the 24-bit header.
    PayloadTooLarge { bits: usize },
    /// The image has fewer LSB slots than the length header needs.
    ImageTooSmall,
    /// The length header claims more bits than the image holds.
    CorruptHeader { declared: usize, available: usize },
    /// Decode was attempted without the matching code table.
    MissingCodeTable,
    /// Raw pixel data does not match `width × height × 3`.
    InvalidPixelBuffer { expected: usize, actual: usize },
    /// The decoded bytes are not valid UTF-8.
    InvalidUtf8,
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Huffman(e) => write!(f, "huffman coding failed: {e}"),
            Self::Capacity { required, available } => write!(
                f,
                "message too large for this image ({required} bits needed, {available} bits available)"
            ),
            Self::PayloadTooLarge { bits } => {
                write!(f, "payload of {bits} bits exceeds the 24-bit length header")
            }
            Self::ImageTooSmall => write!(f, "image too small to contain embedded data"),
            Self::CorruptHeader { declared, available } => write!(
                f,
                "corrupt length header: declares {declared} bits, only {available} available"
            ),
            Self::MissingCodeTable => write!(f, "no code table supplied for decoding"),
            Self::InvalidPixelBuffer { expected, actual } => write!(
                f,
                "pixel data has {actual} bytes, expected {expected} (width × height × 3)"
            ),
            Self::InvalidUtf8 => write!(f, "decoded text is not valid UTF-8"),
        }
    }
}

impl std::error::Error for StegoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Huffman(e) => Some(e),
            _ => None,
        }
    }
}

impl From<HuffmanError> for StegoError {
    fn from(e: HuffmanError) -> Self {
        Self::Huffman(e)
    }
}
