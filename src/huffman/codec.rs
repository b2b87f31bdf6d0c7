// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Text ↔ bitstring conversion with a prefix code.

use super::bits::Bitstring;
use super::error::{HuffmanError, Result};
use super::table::{CodeTable, ReverseCodeTable};

/// Result of decoding a bitstring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Symbols decoded in order.
    pub bytes: Vec<u8>,
    /// Trailing bits that did not form a complete code, if any.
    pub dangling: Option<Bitstring>,
}

impl Decoded {
    /// Returns `true` if the input ended in the middle of a code.
    pub fn is_truncated(&self) -> bool {
        self.dangling.is_some()
    }
}

/// Concatenate the code of each symbol of `text`, in order.
///
/// # Errors
/// [`HuffmanError::UnknownSymbol`] if a symbol has no code in `codes`.
pub fn encode(text: &[u8], codes: &CodeTable) -> Result<Bitstring> {
    let mut bits = Bitstring::with_capacity(text.len() * codes.max_code_len().min(8));
    for &symbol in text {
        let code = codes.get(symbol).ok_or(HuffmanError::UnknownSymbol(symbol))?;
        bits.append(code.as_bitstring());
    }
    Ok(bits)
}

/// Decode `bits` greedily, emitting a symbol each time the accumulated
/// candidate matches a code.
///
/// An unmatched remainder at the end is not an error: it is returned in
/// [`Decoded::dangling`] alongside everything decoded before it.
pub fn decode(bits: &Bitstring, codes: &ReverseCodeTable) -> Decoded {
    let max_len = codes.max_code_len();
    let mut bytes = Vec::new();
    let mut candidate = Bitstring::new();

    for (i, bit) in bits.iter().enumerate() {
        candidate.push(bit);
        if let Some(symbol) = codes.get(&candidate) {
            bytes.push(symbol);
            candidate.clear();
        } else if candidate.len() > max_len {
            // No code is this long; nothing after this point can match.
            candidate.extend(bits.iter().skip(i + 1));
            break;
        }
    }

    let dangling = if candidate.is_empty() {
        None
    } else {
        log::warn!(
            "incomplete code at end of stream: {} dangling bit(s) after {} symbol(s)",
            candidate.len(),
            bytes.len()
        );
        Some(candidate)
    };

    Decoded { bytes, dangling }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::frequency::FrequencyTable;
    use crate::huffman::table::Code;
    use crate::huffman::tree::HuffmanTree;
    use std::collections::BTreeMap;

    fn build(text: &[u8]) -> CodeTable {
        let freq = FrequencyTable::tally(text).unwrap();
        HuffmanTree::build(&freq).unwrap().code_table()
    }

    fn manual_table(pairs: &[(u8, &str)]) -> CodeTable {
        let codes: BTreeMap<u8, Code> = pairs.iter().map(|&(s, c)| (s, c.parse().unwrap())).collect();
        CodeTable::try_from(codes).unwrap()
    }

    #[test]
    fn roundtrip_abracadabra() {
        let text = b"abracadabra";
        let codes = build(text);
        let bits = encode(text, &codes).unwrap();
        assert_eq!(bits.len(), 23);
        let decoded = decode(&bits, &codes.reverse());
        assert_eq!(decoded.bytes, text);
        assert!(!decoded.is_truncated());
    }

    #[test]
    fn single_symbol_one_bit_each() {
        let codes = build(b"aaaa");
        let bits = encode(b"aaaa", &codes).unwrap();
        assert_eq!(bits.to_string(), "0000");
        assert_eq!(decode(&bits, &codes.reverse()).bytes, b"aaaa");
    }

    #[test]
    fn unknown_symbol_rejected() {
        let codes = build(b"abc");
        assert_eq!(encode(b"abz", &codes), Err(HuffmanError::UnknownSymbol(b'z')));
    }

    #[test]
    fn empty_text_encodes_to_nothing() {
        let codes = build(b"abc");
        assert!(encode(b"", &codes).unwrap().is_empty());
        let decoded = decode(&Bitstring::new(), &codes.reverse());
        assert!(decoded.bytes.is_empty());
        assert!(!decoded.is_truncated());
    }

    #[test]
    fn truncated_stream_reports_dangling_bits() {
        let codes = manual_table(&[(b'a', "0"), (b'b', "10")]);
        let bits: Bitstring = "01".parse().unwrap();
        let decoded = decode(&bits, &codes.reverse());
        assert_eq!(decoded.bytes, b"a");
        assert_eq!(decoded.dangling.unwrap().to_string(), "1");
    }

    #[test]
    fn unmatchable_tail_is_kept_whole() {
        // Only "0" exists; a "1" can never complete a code.
        let codes = build(b"aaa");
        let bits: Bitstring = "00110".parse().unwrap();
        let decoded = decode(&bits, &codes.reverse());
        assert_eq!(decoded.bytes, b"aa");
        assert_eq!(decoded.dangling.unwrap().to_string(), "110");
    }

    #[test]
    fn binary_data_roundtrip() {
        let text: Vec<u8> = (0..=255u8).chain((0..64).map(|i| i * 3)).collect();
        let codes = build(&text);
        let bits = encode(&text, &codes).unwrap();
        assert_eq!(decode(&bits, &codes.reverse()).bytes, text);
    }
}
