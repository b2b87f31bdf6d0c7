// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Caller-owned storage for code tables.
//!
//! The codec keeps nothing between calls, yet every stego image can only be
//! decoded with the table produced when it was encoded. [`CodeBook`] is a
//! plain map for holding those tables, keyed however the caller likes (per
//! session, per request, per file). [`SessionId`] is a ready-made random key.
//!
//! ```rust,ignore
//! let mut book = CodeBook::new();
//! let id = SessionId::new();
//! let report = encode_message(text, &mut pixels)?;
//! book.insert(id, report.codes);
//! // later
//! let msg = decode_message(&pixels, book.get(&id))?;
//! ```

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::huffman::{CodeTable, ReverseCodeTable};

/// Random identifier tying an encoded image to its code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generate a new random (v4) id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Uuid> for SessionId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

struct Entry {
    codes: CodeTable,
    reverse: ReverseCodeTable,
}

/// Map from a caller-chosen key to the code table of one encoded image.
///
/// The reverse table is built once on insert so repeated decodes do not
/// rebuild it.
pub struct CodeBook<K = SessionId> {
    entries: HashMap<K, Entry>,
}

impl<K: Eq + Hash> CodeBook<K> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Store the table for `key`, returning the table it replaces.
    pub fn insert(&mut self, key: K, codes: CodeTable) -> Option<CodeTable> {
        let reverse = codes.reverse();
        self.entries
            .insert(key, Entry { codes, reverse })
            .map(|old| old.codes)
    }

    /// Reverse table for decoding, or `None` if `key` is unknown.
    ///
    /// The result feeds straight into
    /// [`decode_message`](crate::stego::decode_message), which turns `None`
    /// into `MissingCodeTable`.
    pub fn get(&self, key: &K) -> Option<&ReverseCodeTable> {
        self.entries.get(key).map(|e| &e.reverse)
    }

    /// Forward table for `key`, e.g. to serialize it.
    pub fn codes(&self, key: &K) -> Option<&CodeTable> {
        self.entries.get(key).map(|e| &e.codes)
    }

    pub fn remove(&mut self, key: &K) -> Option<CodeTable> {
        self.entries.remove(key).map(|e| e.codes)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash> Default for CodeBook<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for CodeBook<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeBook")
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
