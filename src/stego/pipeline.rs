// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! End-to-end encode/decode pipeline.
//!
//! Encode:
//! 1. Count symbol frequencies and build the Huffman tree
//! 2. Extract the code table and compress the message into a bitstring
//! 3. Embed header and bitstring into the pixel LSBs
//!
//! Decode runs the channel in reverse and maps the bits back through the
//! caller's copy of the code table. The table is never written into the
//! image, so decoding without it is impossible.

use crate::huffman::codec::{self, Decoded};
use crate::huffman::{Bitstring, CodeTable, FrequencyTable, HuffmanTree, ReverseCodeTable};
use crate::stego::channel;
use crate::stego::error::StegoError;
use crate::stego::pixels::PixelBuffer;

/// What the caller needs to keep after a successful encode.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeReport {
    /// Code table for this message. Must be stored alongside the image.
    pub codes: CodeTable,
    /// Length of the compressed payload in bits (header excluded).
    pub bit_length: usize,
    /// Space saved relative to 8 bits per byte, in percent.
    pub compression: f64,
}

/// A message recovered from a stego image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMessage {
    pub bytes: Vec<u8>,
    /// Trailing bits that did not complete a code. Usually means the image
    /// was modified or the wrong code table was used.
    pub dangling: Option<Bitstring>,
}

impl DecodedMessage {
    pub fn is_truncated(&self) -> bool {
        self.dangling.is_some()
    }

    /// Interpret the bytes as UTF-8 text.
    ///
    /// # Errors
    /// [`StegoError::InvalidUtf8`] if the bytes are not valid UTF-8.
    pub fn into_text(self) -> Result<String, StegoError> {
        String::from_utf8(self.bytes).map_err(|_| StegoError::InvalidUtf8)
    }
}

impl From<Decoded> for DecodedMessage {
    fn from(d: Decoded) -> Self {
        Self {
            bytes: d.bytes,
            dangling: d.dangling,
        }
    }
}

/// Compress `text` and hide it in `pixels`.
///
/// `pixels` is modified in place, and only if every step succeeds.
///
/// # Errors
/// - [`StegoError::Huffman`] (`EmptyInput`) if `text` is empty.
/// - [`StegoError::PayloadTooLarge`] if the compressed message exceeds the
///   24-bit header.
/// - [`StegoError::Capacity`] if the image is too small.
pub fn encode_message(text: &[u8], pixels: &mut PixelBuffer) -> Result<EncodeReport, StegoError> {
    // 1. Frequencies and tree. The tree is dropped once the codes are out.
    let freq = FrequencyTable::tally(text)?;
    let codes = HuffmanTree::build(&freq)?.code_table();

    // 2. Compress.
    let bits = codec::encode(text, &codes)?;

    // 3. Embed.
    channel::embed(pixels, &bits)?;

    let compression = compression_percent(text.len(), bits.len());
    log::debug!(
        "encoded {} bytes ({} distinct) into {} bits, {compression:.1}% smaller",
        text.len(),
        codes.len(),
        bits.len()
    );

    Ok(EncodeReport {
        codes,
        bit_length: bits.len(),
        compression,
    })
}

/// Recover a message from `pixels` using the code table from its encode.
///
/// # Errors
/// - [`StegoError::MissingCodeTable`] if `codes` is `None`.
/// - [`StegoError::ImageTooSmall`] / [`StegoError::CorruptHeader`] if the
///   image does not carry a valid length header.
pub fn decode_message(
    pixels: &PixelBuffer,
    codes: Option<&ReverseCodeTable>,
) -> Result<DecodedMessage, StegoError> {
    let codes = codes.ok_or(StegoError::MissingCodeTable)?;
    let bits = channel::extract(pixels)?;
    let decoded = codec::decode(&bits, codes);
    log::debug!("decoded {} bytes from {} bits", decoded.bytes.len(), bits.len());
    Ok(decoded.into())
}

/// `(1 − bits / (bytes × 8)) × 100`, or 0 for an empty message.
pub fn compression_percent(text_len: usize, bit_length: usize) -> f64 {
    if text_len == 0 {
        return 0.0;
    }
    (1.0 - bit_length as f64 / (text_len as f64 * 8.0)) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::HuffmanError;

    #[test]
    fn abracadabra_in_8x8() {
        let mut pixels = PixelBuffer::from_fn(8, 8, |x, y| [(x * 31) as u8, (y * 17) as u8, 200]);
        let report = encode_message(b"abracadabra", &mut pixels).unwrap();
        assert_eq!(report.bit_length, 23);
        assert!(report.bit_length < 88);
        assert!((report.compression - (1.0 - 23.0 / 88.0) * 100.0).abs() < 1e-9);

        let decoded = decode_message(&pixels, Some(&report.codes.reverse())).unwrap();
        assert!(!decoded.is_truncated());
        assert_eq!(decoded.into_text().unwrap(), "abracadabra");
    }

    #[test]
    fn missing_code_table() {
        let mut pixels = PixelBuffer::filled(8, 8, 0);
        encode_message(b"hello", &mut pixels).unwrap();
        assert_eq!(decode_message(&pixels, None), Err(StegoError::MissingCodeTable));
    }

    #[test]
    fn empty_message_rejected() {
        let mut pixels = PixelBuffer::filled(8, 8, 7);
        let before = pixels.clone();
        assert_eq!(
            encode_message(b"", &mut pixels),
            Err(StegoError::Huffman(HuffmanError::EmptyInput))
        );
        assert_eq!(pixels, before);
    }

    #[test]
    fn capacity_error_reports_bits() {
        let mut pixels = PixelBuffer::filled(4, 4, 0);
        let text = b"this message is much too long for sixteen pixels";
        match encode_message(text, &mut pixels) {
            Err(StegoError::Capacity { required, available }) => {
                assert_eq!(available, 48);
                assert!(required > available);
            }
            other => panic!("expected Capacity, got {other:?}"),
        }
    }

    #[test]
    fn single_symbol_message() {
        let mut pixels = PixelBuffer::filled(4, 4, 0);
        let report = encode_message(b"aaaa", &mut pixels).unwrap();
        assert_eq!(report.bit_length, 4);
        assert_eq!(report.codes.len(), 1);
        let decoded = decode_message(&pixels, Some(&report.codes.reverse())).unwrap();
        assert_eq!(decoded.bytes, b"aaaa");
    }

    #[test]
    fn invalid_utf8_detected() {
        let mut pixels = PixelBuffer::filled(8, 8, 0);
        let report = encode_message(&[0xFF, 0xFE, 0xFF], &mut pixels).unwrap();
        let decoded = decode_message(&pixels, Some(&report.codes.reverse())).unwrap();
        assert_eq!(decoded.bytes, vec![0xFF, 0xFE, 0xFF]);
        assert_eq!(decoded.into_text(), Err(StegoError::InvalidUtf8));
    }

    #[test]
    fn compression_percent_values() {
        assert_eq!(compression_percent(0, 0), 0.0);
        assert_eq!(compression_percent(1, 8), 0.0);
        assert_eq!(compression_percent(4, 4), 87.5);
    }
}
