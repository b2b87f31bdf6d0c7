// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Huffman prefix coding over byte streams.
//!
//! [`FrequencyTable`] → [`HuffmanTree`] → [`CodeTable`] produces the code for
//! one message; [`encode`] and [`decode`] convert between bytes and a
//! [`Bitstring`] with it. The tree is only needed while building the table
//! and can be dropped afterwards.

pub mod bits;
pub mod codec;
pub mod error;
pub mod frequency;
pub mod table;
pub mod tree;

pub use bits::Bitstring;
pub use codec::{decode, encode, Decoded};
pub use error::HuffmanError;
pub use frequency::FrequencyTable;
pub use table::{Code, CodeTable, ReverseCodeTable};
pub use tree::HuffmanTree;

/// Build the code table for `text` in one step.
///
/// # Errors
/// [`HuffmanError::EmptyInput`] if `text` is empty.
pub fn build_code_table(text: &[u8]) -> error::Result<CodeTable> {
    let freq = FrequencyTable::tally(text)?;
    Ok(HuffmanTree::build(&freq)?.code_table())
}
