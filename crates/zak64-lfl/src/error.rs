//! Error types for room extraction

use crate::disk::Side;
use std::path::PathBuf;
use thiserror::Error;

/// Process exit status for a signature mismatch
pub const EXIT_SIGNATURE_MISMATCH: u8 = 2;

/// Process exit status for every other decode failure
pub const EXIT_DECODE_FAILURE: u8 = 1;

/// Errors that abort an extraction run
///
/// None of these are recoverable: the first error ends the run, and any file
/// already written stays as it was.
#[derive(Debug, Error)]
pub enum LflError {
    /// The leading bytes of an image do not match its side
    #[error(
        "invalid signature for disk 2 side {side}: expected {}, found {}",
        hex::encode(.expected),
        hex::encode(.actual)
    )]
    SignatureMismatch {
        /// Side the image was opened as
        side: Side,
        /// Signature required for that side
        expected: [u8; 2],
        /// Bytes actually found (shorter than 2 if the image is truncated)
        actual: Vec<u8>,
    },

    /// A record length field is below the 2-byte minimum
    #[error(
        "room {room:02} record {record}: length field {length:#06x} at offset {offset:#x} is below the 2-byte minimum"
    )]
    RecordLengthUnderflow {
        /// Room being extracted
        room: u8,
        /// Index of the record within the room
        record: usize,
        /// Byte offset of the offending length field
        offset: u64,
        /// Declared length
        length: u16,
    },

    /// Reading a room's records from its image failed
    #[error(
        "room {room:02} record {record}: failed to read {} at offset {offset:#x}",
        .path.display()
    )]
    RecordRead {
        /// Room being extracted
        room: u8,
        /// Index of the record within the room
        record: usize,
        /// Byte offset where the failed read started
        offset: u64,
        /// Image the room is stored on
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A room's track is outside the track offset table
    #[error(
        "room {room:02}: track {track} (sector {sector}) is outside the {}-entry track table",
        crate::geometry::TRACK_COUNT
    )]
    IndexOutOfRange {
        /// Room whose location is invalid
        room: u8,
        /// Track read from the directory
        track: u8,
        /// Sector read from the directory
        sector: u8,
    },

    /// The directory header could not be decoded
    #[error("failed to parse directory from {}", .path.display())]
    Directory {
        /// Image the directory was read from
        path: PathBuf,
        /// Underlying binrw error
        #[source]
        source: binrw::Error,
    },

    /// Reading an image or writing an output file failed
    #[error("I/O error on {}", .path.display())]
    Io {
        /// Offending image or output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Encoding an artifact into its output buffer failed
    #[error("failed to emit output for room {room:02}")]
    Output {
        /// Room whose artifact was being written (0 for the directory)
        room: u8,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl LflError {
    /// Process exit status to report for this error
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::SignatureMismatch { .. } => EXIT_SIGNATURE_MISMATCH,
            _ => EXIT_DECODE_FAILURE,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, LflError>;
