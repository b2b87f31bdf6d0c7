// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Error types for Huffman table construction and coding.

use std::fmt;

/// Errors that can occur while building or using a Huffman code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanError {
    /// No symbols to build a tree from.
    EmptyInput,
    /// A symbol in the text has no code in the table.
    UnknownSymbol(u8),
    /// A code string is empty or contains something other than `0`/`1`.
    InvalidCode(String),
    /// A code table is empty or not prefix-free.
    InvalidCodeTable(&'static str),
    /// The transport representation of a code table could not be parsed.
    InvalidJson(String),
}

impl fmt::Display for HuffmanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "empty input: nothing to build a Huffman tree from"),
            Self::UnknownSymbol(s) => write!(f, "symbol 0x{s:02X} has no code in the table"),
            Self::InvalidCode(code) => write!(f, "invalid code string: {code:?}"),
            Self::InvalidCodeTable(msg) => write!(f, "invalid code table: {msg}"),
            Self::InvalidJson(msg) => write!(f, "invalid code table JSON: {msg}"),
        }
    }
}

impl std::error::Error for HuffmanError {}

impl From<serde_json::Error> for HuffmanError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidJson(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
