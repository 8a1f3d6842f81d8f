//! Output byte transform
//!
//! ScummVM expects the C64 room files with every byte inverted. The transform
//! is a plain value handed to each writer, so two runs with different settings
//! never affect each other.

use std::io::{self, Write};

/// Per-byte transform applied to everything written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputTransform {
    /// Bytes are written unchanged
    #[default]
    Plain,
    /// Every byte is XORed with `0xFF`
    Inverted,
}

impl OutputTransform {
    /// Build from an enable flag
    pub const fn from_flag(enabled: bool) -> Self {
        if enabled { Self::Inverted } else { Self::Plain }
    }

    /// Whether bytes are inverted
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Inverted)
    }

    /// Transform a single byte
    pub const fn apply(self, byte: u8) -> u8 {
        match self {
            Self::Plain => byte,
            Self::Inverted => byte ^ 0xFF,
        }
    }

    /// Transform a buffer in place
    pub fn apply_in_place(self, bytes: &mut [u8]) {
        if self.is_enabled() {
            for byte in bytes {
                *byte = self.apply(*byte);
            }
        }
    }
}

/// Writer that applies an [`OutputTransform`] to every byte passing through
#[derive(Debug)]
pub struct TransformWriter<W> {
    inner: W,
    transform: OutputTransform,
    written: u64,
    scratch: Vec<u8>,
}

impl<W: Write> TransformWriter<W> {
    /// Wrap `inner`
    pub const fn new(inner: W, transform: OutputTransform) -> Self {
        Self {
            inner,
            transform,
            written: 0,
            scratch: Vec::new(),
        }
    }

    /// Transform in effect
    pub const fn transform(&self) -> OutputTransform {
        self.transform
    }

    /// Number of bytes accepted so far
    pub const fn written(&self) -> u64 {
        self.written
    }

    /// Unwrap the inner writer
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for TransformWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = match self.transform {
            OutputTransform::Plain => self.inner.write(buf)?,
            OutputTransform::Inverted => {
                self.scratch.clear();
                self.scratch.extend_from_slice(buf);
                self.transform.apply_in_place(&mut self.scratch);
                self.inner.write_all(&self.scratch)?;
                buf.len()
            }
        };
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
