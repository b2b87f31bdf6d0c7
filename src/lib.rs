// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! # huffsteg-core
//!
//! Huffman compression combined with least-significant-bit steganography for
//! RGB images. A message is compressed with a prefix code built from its own
//! symbol frequencies, then written one bit per colour channel into a pixel
//! buffer behind a 24-bit length header.
//!
//! - `huffman`: frequency counting, tree construction, code tables and the
//!   bit-level codec. Works on any byte stream.
//! - `stego`: the LSB channel, capacity helpers and the end-to-end
//!   encode/decode pipeline.
//! - `codebook`: optional caller-side storage for code tables.
//!
//! The code table is not stored in the image. Whoever encodes must keep it
//! (or serialize it with [`CodeTable::to_json`]) to decode later. Image file
//! formats are out of scope: callers pass decoded RGB pixels in and get
//! modified pixels back.
//!
//! # Quick start
//!
//! ```rust
//! use huffsteg_core::{decode_message, encode_message, PixelBuffer};
//!
//! let mut pixels = PixelBuffer::filled(16, 16, 128);
//! let report = encode_message(b"abracadabra", &mut pixels).unwrap();
//! assert!(report.bit_length < 88);
//!
//! let decoded = decode_message(&pixels, Some(&report.codes.reverse())).unwrap();
//! assert_eq!(decoded.bytes, b"abracadabra");
//! ```

pub mod codebook;
pub mod huffman;
pub mod stego;

pub use codebook::{CodeBook, SessionId};
pub use huffman::{Bitstring, Code, CodeTable, FrequencyTable, HuffmanError, HuffmanTree, ReverseCodeTable};
pub use stego::{decode_message, encode_message, DecodedMessage, EncodeReport, PixelBuffer, StegoError};
pub use stego::{capacity_bits, max_payload_bits, required_pixels, HEADER_BITS, MAX_PAYLOAD_BITS};
