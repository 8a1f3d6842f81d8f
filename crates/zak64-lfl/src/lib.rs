//! Room file reconstruction for the two-sided C64 release of Zak McKracken
//!
//! Disk 2 of the C64 release stores the game's room data as raw sectors spread
//! across both sides of the floppy. Side A starts with a directory that records,
//! for every room, which side holds it and at which track/sector it begins.
//! This crate decodes that directory and rebuilds the per-room `.LFL` files that
//! SCUMM interpreters expect.
//!
//! # Pipeline
//!
//! 1. Both [`DiskImage`]s are checked against their side signature
//! 2. The [`Directory`] is parsed from side A and re-emitted as `00.LFL`
//! 3. Every used room is located through the track offset table and its
//!    length-prefixed resource records are copied out
//!
//! Every emitted byte passes through an [`OutputTransform`], which optionally
//! inverts it (ScummVM expects inverted room files).
//!
//! # Example
//!
//! ```no_run
//! use zak64_lfl::{ExtractConfig, OutputTransform, extract_files};
//!
//! let config = ExtractConfig::default().with_transform(OutputTransform::Inverted);
//! let report = extract_files(&config, "zak_disk2_a.d64", "zak_disk2_b.d64")?;
//! println!("wrote {} files ({} bytes)", report.len(), report.total_bytes());
//! # Ok::<(), zak64_lfl::LflError>(())
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod directory;
pub mod disk;
pub mod error;
pub mod extract;
pub mod geometry;
pub mod record;
pub mod room;
pub mod transform;

pub use config::ExtractConfig;
pub use directory::{Directory, ResourceTable, RoomLocation};
pub use disk::{DiskImage, Side};
pub use error::{LflError, Result};
pub use extract::{
    Artifact, ArtifactSink, DirectorySink, ExtractionReport, Extractor, MemorySink, extract_files,
};
pub use geometry::{absolute_offset, resource_count};
pub use record::extract_records;
pub use room::{RoomEntry, RoomSource};
pub use transform::{OutputTransform, TransformWriter};
