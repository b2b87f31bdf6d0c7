// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Length header written in front of the embedded payload.
//!
//! ```text
//! [24 bits] payload length in bits (big-endian, MSB first)
//! [N bits ] payload
//! ```
//!
//! The header carries no magic or checksum; a cover image that was never
//! written to usually decodes to a header larger than the image and is
//! rejected as corrupt by the channel.

use crate::huffman::Bitstring;
use crate::stego::error::StegoError;
use crate::stego::{HEADER_BITS, MAX_PAYLOAD_BITS};

/// Build the 24-bit header for a payload of `payload_bits` bits.
///
/// # Errors
/// [`StegoError::PayloadTooLarge`] if `payload_bits > MAX_PAYLOAD_BITS`.
pub fn build_header(payload_bits: usize) -> Result<Bitstring, StegoError> {
    if payload_bits > MAX_PAYLOAD_BITS {
        return Err(StegoError::PayloadTooLarge { bits: payload_bits });
    }
    let mut header = Bitstring::with_capacity(HEADER_BITS);
    header.push_value(payload_bits as u32, HEADER_BITS as u8);
    Ok(header)
}

/// Read the payload length from the first 24 bits of `bits`.
///
/// # Errors
/// [`StegoError::ImageTooSmall`] if fewer than 24 bits are given.
pub fn parse_header(bits: &[u8]) -> Result<usize, StegoError> {
    if bits.len() < HEADER_BITS {
        return Err(StegoError::ImageTooSmall);
    }
    let len = bits[..HEADER_BITS]
        .iter()
        .fold(0usize, |acc, &b| (acc << 1) | (b & 1) as usize);
    Ok(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_parse_roundtrip() {
        for len in [0, 1, 23, 24, 1_000_000, MAX_PAYLOAD_BITS] {
            let header = build_header(len).unwrap();
            assert_eq!(header.len(), HEADER_BITS);
            assert_eq!(parse_header(header.as_bits()).unwrap(), len);
        }
    }

    #[test]
    fn big_endian_layout() {
        let header = build_header(5).unwrap();
        assert_eq!(header.to_string(), "000000000000000000000101");
        let header = build_header(0x80_0000).unwrap();
        assert_eq!(header.get(0), Some(1));
        assert!(header.iter().skip(1).all(|b| b == 0));
    }

    #[test]
    fn oversized_payload_rejected() {
        assert_eq!(
            build_header(MAX_PAYLOAD_BITS + 1),
            Err(StegoError::PayloadTooLarge { bits: MAX_PAYLOAD_BITS + 1 })
        );
    }

    #[test]
    fn short_header_rejected() {
        assert_eq!(parse_header(&[0; 23]), Err(StegoError::ImageTooSmall));
        assert_eq!(parse_header(&[]), Err(StegoError::ImageTooSmall));
    }

    #[test]
    fn parse_ignores_trailing_bits() {
        let mut bits = build_header(7).unwrap().into_bits();
        bits.extend_from_slice(&[1, 1, 1]);
        assert_eq!(parse_header(&bits).unwrap(), 7);
    }
}
