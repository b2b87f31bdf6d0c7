// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Owned bit sequences.
//!
//! [`Bitstring`] is the unit of data exchanged between the Huffman coder and
//! the LSB channel. Bits are stored one per `u8` (value 0 or 1), which keeps
//! indexing trivial and lets the channel copy a bit straight into a pixel LSB.
//! Packing to bytes is MSB-first, matching the header layout.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::HuffmanError;

/// An ordered sequence of bits.
///
/// Displays and parses as a string of `'0'`/`'1'` characters, and
/// (de)serializes the same way so no bit is lost in transport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Bitstring {
    bits: Vec<u8>,
}

impl Bitstring {
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: Vec::with_capacity(capacity),
        }
    }

    /// Wrap a vector of bits. Only the lowest bit of each element is kept.
    pub fn from_bits(mut bits: Vec<u8>) -> Self {
        for b in &mut bits {
            *b &= 1;
        }
        Self { bits }
    }

    /// Unpack the first `bit_len` bits of `bytes`, MSB first.
    ///
    /// `bit_len` is clamped to `bytes.len() * 8`.
    pub fn from_bytes(bytes: &[u8], bit_len: usize) -> Self {
        let bit_len = bit_len.min(bytes.len() * 8);
        let mut bits = Vec::with_capacity(bit_len);
        for i in 0..bit_len {
            bits.push((bytes[i / 8] >> (7 - i % 8)) & 1);
        }
        Self { bits }
    }

    /// Pack into bytes, MSB first. The last byte is zero-padded.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.bits.len() + 7) / 8);
        for chunk in self.bits.chunks(8) {
            let mut byte = 0u8;
            for (i, &bit) in chunk.iter().enumerate() {
                byte |= bit << (7 - i);
            }
            bytes.push(byte);
        }
        bytes
    }

    pub fn push(&mut self, bit: u8) {
        self.bits.push(bit & 1);
    }

    /// Append another bitstring.
    pub fn append(&mut self, other: &Bitstring) {
        self.bits.extend_from_slice(&other.bits);
    }

    /// Append the low `count` bits of `value`, MSB first.
    pub fn push_value(&mut self, value: u32, count: u8) {
        debug_assert!(count <= 32);
        for i in (0..count).rev() {
            self.bits.push(((value >> i) & 1) as u8);
        }
    }

    /// Remove the last bit.
    pub fn pop(&mut self) -> Option<u8> {
        self.bits.pop()
    }

    pub fn clear(&mut self) {
        self.bits.clear();
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.bits.get(index).copied()
    }

    /// The bits as a slice of 0/1 values.
    pub fn as_bits(&self) -> &[u8] {
        &self.bits
    }

    pub fn into_bits(self) -> Vec<u8> {
        self.bits
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.bits.iter().copied()
    }

    /// Returns `true` if `self` is a prefix of `other` (or equal to it).
    pub fn is_prefix_of(&self, other: &Bitstring) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl fmt::Display for Bitstring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.bits.iter().map(|&b| if b == 0 { '0' } else { '1' }).collect();
        f.write_str(&s)
    }
}

impl FromStr for Bitstring {
    type Err = HuffmanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits = Vec::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '0' => bits.push(0),
                '1' => bits.push(1),
                _ => return Err(HuffmanError::InvalidCode(s.to_string())),
            }
        }
        Ok(Self { bits })
    }
}

impl From<Bitstring> for String {
    fn from(bits: Bitstring) -> Self {
        bits.to_string()
    }
}

impl TryFrom<String> for Bitstring {
    type Error = HuffmanError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl FromIterator<u8> for Bitstring {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self::from_bits(iter.into_iter().collect())
    }
}

impl Extend<u8> for Bitstring {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        self.bits.extend(iter.into_iter().map(|b| b & 1));
    }
}
