// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Code tables for Huffman encoding and decoding.
//!
//! A [`CodeTable`] maps each symbol to its [`Code`]; a [`ReverseCodeTable`]
//! is its exact inverse and is the only thing the decoder needs. Neither is
//! stored in the cover image, so the caller keeps the table that belongs to
//! each encoded image.
//!
//! The transport form of a table is a map from symbol to code string:
//!
//! ```text
//! {"97":"0","98":"110","99":"1110","100":"1111","114":"10"}
//! ```
//!
//! Tables read from the outside are validated (non-empty, prefix-free).

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::bits::Bitstring;
use super::error::{HuffmanError, Result};
use super::frequency::FrequencyTable;

/// A single non-empty codeword.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Code(Bitstring);

impl Code {
    /// # Errors
    /// [`HuffmanError::InvalidCode`] if `bits` is empty.
    pub fn new(bits: Bitstring) -> Result<Self> {
        if bits.is_empty() {
            return Err(HuffmanError::InvalidCode(String::new()));
        }
        Ok(Self(bits))
    }

    /// Code for a root-to-leaf path. An empty path (a tree that is a single
    /// leaf) gets the code `0`.
    pub(crate) fn from_path(mut path: Bitstring) -> Self {
        if path.is_empty() {
            path.push(0);
        }
        Self(path)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bitstring(&self) -> &Bitstring {
        &self.0
    }

    pub fn as_bits(&self) -> &[u8] {
        self.0.as_bits()
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.0.is_prefix_of(&other.0)
    }
}

impl Borrow<Bitstring> for Code {
    fn borrow(&self) -> &Bitstring {
        &self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Code {
    type Err = HuffmanError;

    fn from_str(s: &str) -> Result<Self> {
        let bits: Bitstring = s.parse()?;
        Self::new(bits)
    }
}

impl From<Code> for String {
    fn from(code: Code) -> Self {
        code.to_string()
    }
}

impl TryFrom<String> for Code {
    type Error = HuffmanError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Symbol → code mapping produced by one tree build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BTreeMap<u8, Code>", try_from = "BTreeMap<u8, Code>")]
pub struct CodeTable {
    codes: BTreeMap<u8, Code>,
}

impl CodeTable {
    /// Wrap codes that come straight out of a tree traversal, which are
    /// prefix-free by construction.
    pub(crate) fn from_tree_codes(codes: BTreeMap<u8, Code>) -> Self {
        debug_assert!(!codes.is_empty());
        Self { codes }
    }

    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    /// Number of symbols in the table.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        self.codes.iter().map(|(&s, c)| (s, c))
    }

    /// Length of the longest code.
    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(Code::len).max().unwrap_or(0)
    }

    /// Returns `true` if no code is a prefix of another.
    ///
    /// After sorting, any code that prefixes another also prefixes its
    /// immediate successor, so checking neighbours is enough.
    pub fn is_prefix_free(&self) -> bool {
        let mut sorted: Vec<&Code> = self.codes.values().collect();
        sorted.sort();
        sorted.windows(2).all(|w| !w[0].is_prefix_of(w[1]))
    }

    /// Total encoded length in bits of a text with the given frequencies.
    ///
    /// Returns `None` if a counted symbol has no code.
    pub fn encoded_len(&self, freq: &FrequencyTable) -> Option<u64> {
        freq.iter()
            .map(|(s, count)| self.get(s).map(|c| count * c.len() as u64))
            .sum()
    }

    /// Build the inverse table used by the decoder.
    pub fn reverse(&self) -> ReverseCodeTable {
        ReverseCodeTable::from(self)
    }

    /// Serialize to the JSON transport form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse and validate the JSON transport form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl TryFrom<BTreeMap<u8, Code>> for CodeTable {
    type Error = HuffmanError;

    fn try_from(codes: BTreeMap<u8, Code>) -> Result<Self> {
        if codes.is_empty() {
            return Err(HuffmanError::InvalidCodeTable("table has no symbols"));
        }
        let table = Self { codes };
        if !table.is_prefix_free() {
            return Err(HuffmanError::InvalidCodeTable("codes are not prefix-free"));
        }
        Ok(table)
    }
}

impl From<CodeTable> for BTreeMap<u8, Code> {
    fn from(table: CodeTable) -> Self {
        table.codes
    }
}

/// Code → symbol mapping for decoding.
///
/// Only constructible from a [`CodeTable`], so it is always the exact inverse
/// of the table used at encode time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseCodeTable {
    symbols: HashMap<Code, u8>,
    max_len: usize,
}

impl ReverseCodeTable {
    /// Look up the symbol for a complete code.
    pub fn get(&self, code: &Bitstring) -> Option<u8> {
        self.symbols.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Length of the longest code. Candidates longer than this never match.
    pub fn max_code_len(&self) -> usize {
        self.max_len
    }
}

impl From<&CodeTable> for ReverseCodeTable {
    fn from(table: &CodeTable) -> Self {
        let symbols = table.iter().map(|(s, c)| (c.clone(), s)).collect();
        Self {
            symbols,
            max_len: table.max_code_len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(u8, &str)]) -> Result<CodeTable> {
        let mut codes: BTreeMap<u8, Code> = BTreeMap::new();
        for &(s, c) in pairs {
            codes.insert(s, c.parse()?);
        }
        CodeTable::try_from(codes)
    }

    #[test]
    fn empty_code_rejected() {
        assert!(matches!("".parse::<Code>(), Err(HuffmanError::InvalidCode(_))));
        assert!(matches!(Code::new(Bitstring::new()), Err(HuffmanError::InvalidCode(_))));
    }

    #[test]
    fn prefix_free_accepted() {
        let t = table(&[(b'a', "0"), (b'b', "10"), (b'c', "11")]).unwrap();
        assert!(t.is_prefix_free());
        assert_eq!(t.max_code_len(), 2);
    }

    #[test]
    fn prefix_violation_rejected() {
        let err = table(&[(b'a', "1"), (b'b', "10")]).unwrap_err();
        assert_eq!(err, HuffmanError::InvalidCodeTable("codes are not prefix-free"));

        // Prefix pair separated by another code in sort order.
        let err = table(&[(b'a', "0"), (b'b', "0011"), (b'c', "01")]).unwrap_err();
        assert!(matches!(err, HuffmanError::InvalidCodeTable(_)));
    }

    #[test]
    fn duplicate_codes_rejected() {
        assert!(table(&[(b'a', "01"), (b'b', "01")]).is_err());
    }

    #[test]
    fn empty_table_rejected() {
        assert!(matches!(table(&[]), Err(HuffmanError::InvalidCodeTable(_))));
    }

    #[test]
    fn reverse_is_exact_inverse() {
        let t = table(&[(b'a', "0"), (b'b', "10"), (b'c', "11")]).unwrap();
        let r = t.reverse();
        assert_eq!(r.len(), t.len());
        for (s, c) in t.iter() {
            assert_eq!(r.get(c.as_bitstring()), Some(s));
        }
        assert_eq!(r.get(&"1".parse().unwrap()), None);
        assert_eq!(r.max_code_len(), 2);
    }

    #[test]
    fn json_roundtrip() {
        let t = table(&[(b'a', "0"), (b'r', "10"), (0xFF, "11")]).unwrap();
        let json = t.to_json().unwrap();
        assert_eq!(json, r#"{"97":"0","114":"10","255":"11"}"#);
        assert_eq!(CodeTable::from_json(&json).unwrap(), t);
    }

    #[test]
    fn json_with_bad_codes_rejected() {
        assert!(matches!(
            CodeTable::from_json(r#"{"97":""}"#),
            Err(HuffmanError::InvalidJson(_))
        ));
        assert!(CodeTable::from_json(r#"{"97":"02"}"#).is_err());
        assert!(CodeTable::from_json(r#"{"97":"1","98":"10"}"#).is_err());
        assert!(CodeTable::from_json(r#"{"300":"1"}"#).is_err());
        assert!(CodeTable::from_json("{}").is_err());
    }

    #[test]
    fn encoded_len_from_frequencies() {
        let t = table(&[(b'a', "0"), (b'b', "10"), (b'c', "11")]).unwrap();
        let freq = FrequencyTable::tally(b"aabc").unwrap();
        assert_eq!(t.encoded_len(&freq), Some(6));
        let freq = FrequencyTable::tally(b"abz").unwrap();
        assert_eq!(t.encoded_len(&freq), None);
    }
}
