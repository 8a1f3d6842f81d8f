//! Disk image sides and signature validation

use crate::error::{LflError, Result};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Length of the signature at the start of each side image
pub const SIGNATURE_LEN: u64 = 2;

/// One side of disk 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Side A, which also carries the directory
    A,
    /// Side B
    B,
}

impl Side {
    /// Signature bytes `0x31 0x0A`
    pub const A_SIGNATURE: [u8; 2] = [0x31, 0x0A];
    /// Signature bytes `0x32 0x01`
    pub const B_SIGNATURE: [u8; 2] = [0x32, 0x01];

    /// Signature the image for this side must begin with
    pub const fn signature(self) -> [u8; 2] {
        match self {
            Self::A => Self::A_SIGNATURE,
            Self::B => Self::B_SIGNATURE,
        }
    }

    /// Disk marker used by the directory to place a room on this side
    pub const fn disk_marker(self) -> u8 {
        match self {
            Self::A => b'1',
            Self::B => b'2',
        }
    }

    /// Resolve a directory disk marker to a side
    pub const fn from_marker(marker: u8) -> Option<Self> {
        match marker {
            b'1' => Some(Self::A),
            b'2' => Some(Self::B),
            _ => None,
        }
    }

    /// Single-letter label
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A raw, seekable image of one disk side
///
/// The image is only ever read. All I/O errors are reported against the path
/// the image was opened from.
#[derive(Debug)]
pub struct DiskImage<R> {
    side: Side,
    path: PathBuf,
    reader: R,
    position: u64,
}

impl DiskImage<BufReader<File>> {
    /// Open an image file for the given side
    pub fn open(side: Side, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| LflError::io(path, e))?;
        debug!("Opened side {} image {}", side, path.display());
        Ok(Self::from_reader(side, path, BufReader::new(file)))
    }
}

impl<R: Read + Seek> DiskImage<R> {
    /// Wrap an already-open reader
    ///
    /// `path` is only used to label errors and may be a placeholder for
    /// in-memory sources.
    pub fn from_reader(side: Side, path: impl Into<PathBuf>, reader: R) -> Self {
        Self {
            side,
            path: path.into(),
            reader,
            position: 0,
        }
    }

    /// Side this image was opened as
    pub const fn side(&self) -> Side {
        self.side
    }

    /// Path used in diagnostics
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current read position
    pub const fn position(&self) -> u64 {
        self.position
    }

    /// Check that the image starts with its side's signature
    pub fn validate_signature(&mut self) -> Result<()> {
        self.seek_to(0)?;

        let mut actual = Vec::with_capacity(SIGNATURE_LEN as usize);
        (&mut self.reader)
            .take(SIGNATURE_LEN)
            .read_to_end(&mut actual)
            .map_err(|e| LflError::io(&self.path, e))?;
        self.position = actual.len() as u64;

        let expected = self.side.signature();
        if actual != expected {
            return Err(LflError::SignatureMismatch {
                side: self.side,
                expected,
                actual,
            });
        }

        debug!("Side {} signature {} ok", self.side, hex::encode(expected));
        Ok(())
    }

    /// Seek to an absolute byte offset
    pub fn seek_to(&mut self, offset: u64) -> Result<()> {
        self.position = self
            .reader
            .seek(SeekFrom::Start(offset))
            .map_err(|e| LflError::io(&self.path, e))?;
        Ok(())
    }

    /// Fill `buf` from the current position
    ///
    /// Running out of data is an error (`UnexpectedEof`).
    pub fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        self.reader
            .read_exact(buf)
            .map_err(|e| LflError::io(&self.path, e))?;
        self.position += buf.len() as u64;
        Ok(())
    }

    /// Run a binrw read against the underlying reader
    pub(crate) fn read_with<T>(
        &mut self,
        read: impl FnOnce(&mut R) -> binrw::BinResult<T>,
    ) -> Result<T> {
        let result = read(&mut self.reader);
        self.position = self
            .reader
            .stream_position()
            .map_err(|e| LflError::io(&self.path, e))?;
        result.map_err(|source| LflError::Directory {
            path: self.path.clone(),
            source,
        })
    }
}
