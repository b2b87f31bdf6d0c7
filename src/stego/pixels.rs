// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! RGB pixel storage.
//!
//! Provides [`PixelBuffer`], a decoded 8-bit RGB image held in memory. Pixels
//! are stored row-major with interleaved channels, so channel `c` of pixel
//! `p` lives at flat index `p * 3 + c`. That flat index is the LSB slot
//! order used by the embedding channel.

use super::error::StegoError;
use super::CHANNELS_PER_PIXEL;

/// An 8-bit RGB image, `width × height` pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    /// Flat storage: height * width * 3 channel bytes.
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw interleaved RGB data.
    ///
    /// # Errors
    /// [`StegoError::InvalidPixelBuffer`] if `data.len() != width * height * 3`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, StegoError> {
        let expected = width
            .checked_mul(height)
            .and_then(|p| p.checked_mul(CHANNELS_PER_PIXEL))
            .ok_or(StegoError::InvalidPixelBuffer { expected: usize::MAX, actual: data.len() })?;
        if data.len() != expected {
            return Err(StegoError::InvalidPixelBuffer { expected, actual: data.len() });
        }
        Ok(Self { width, height, data })
    }

    /// Create a buffer with every channel of every pixel set to `value`.
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height * CHANNELS_PER_PIXEL],
        }
    }

    /// Create a buffer by calling `f(x, y)` for each pixel.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> [u8; 3]) -> Self {
        let mut data = Vec::with_capacity(width * height * CHANNELS_PER_PIXEL);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self { width, height, data }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Get the `[r, g, b]` value of the pixel at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        let i = self.index(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Set the pixel at column `x`, row `y`.
    pub fn set(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        let i = self.index(x, y);
        self.data[i..i + 3].copy_from_slice(&rgb);
    }

    /// Raw read-only access to all channel bytes in slot order.
    pub fn channels(&self) -> &[u8] {
        &self.data
    }

    /// Raw mutable access to all channel bytes in slot order.
    pub fn channels_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width, "column {x} >= {}", self.width);
        debug_assert!(y < self.height, "row {y} >= {}", self.height);
        (y * self.width + x) * CHANNELS_PER_PIXEL
    }
}
